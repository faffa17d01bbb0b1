//! Recipe catalog loading.
//!
//! [`CatalogLoader::load`] never fails: a missing catalog, an unreachable
//! server or malformed JSON are logged and turned into an empty catalog so
//! the caller simply sees "no results".

use crate::core::{CatalogSource, Recipe};
use crate::utils::error::{MatchError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::path::PathBuf;

pub const DEFAULT_CATALOG_LOCATION: &str = "recipes.json";

#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    location: String,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        if !self.path.exists() {
            return Err(MatchError::CatalogNotFound {
                location: self.location.clone(),
            });
        }

        let data = tokio::fs::read(&self.path).await?;
        Ok(data)
    }

    fn location(&self) -> &str {
        &self.location
    }
}

#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
    client: Client,
}

impl HttpCatalogSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Requesting recipe catalog from: {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(MatchError::CatalogNotFound {
                location: self.url.clone(),
            });
        }

        if !status.is_success() {
            return Err(MatchError::CatalogFetchError {
                location: self.url.clone(),
                message: format!("unexpected status {}", status),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn location(&self) -> &str {
        &self.url
    }
}

pub struct CatalogLoader {
    source: Box<dyn CatalogSource>,
}

impl CatalogLoader {
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// http(s) 開頭視為遠端目錄，其餘視為本機檔案
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::new(Box::new(HttpCatalogSource::new(location.to_string())))
        } else {
            Self::new(Box::new(FileCatalogSource::new(location)))
        }
    }

    pub fn location(&self) -> &str {
        self.source.location()
    }

    /// Loads the catalog, degrading to an empty one on any failure.
    pub async fn load(&self) -> Vec<Recipe> {
        match self.try_load().await {
            Ok(recipes) => {
                tracing::info!(
                    "📚 Loaded {} recipes from {}",
                    recipes.len(),
                    self.location()
                );
                recipes
            }
            Err(MatchError::CatalogNotFound { location }) => {
                tracing::warn!("⚠️ Recipe catalog not found at {}, using empty catalog", location);
                Vec::new()
            }
            Err(e) => {
                tracing::error!("❌ Error loading recipes from {}: {}", self.location(), e);
                Vec::new()
            }
        }
    }

    pub async fn try_load(&self) -> Result<Vec<Recipe>> {
        let data = self.source.fetch().await?;
        Self::parse(&data)
    }

    /// 目錄格式為 JSON 陣列
    pub fn parse(data: &[u8]) -> Result<Vec<Recipe>> {
        let recipes: Vec<Recipe> = serde_json::from_slice(data)?;
        Ok(recipes)
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::from_location(DEFAULT_CATALOG_LOCATION)
    }
}
