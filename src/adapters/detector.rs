//! Ingredient detectors. The core only ever sees a flat list of names; how
//! that list was produced (typed by hand, read from a file written by an
//! image recognizer, ...) is up to these adapters.

use crate::core::IngredientDetector;
use crate::utils::error::{MatchError, Result};
use async_trait::async_trait;
use regex::Regex;
use std::path::PathBuf;

/// Splits free text on commas, semicolons and line breaks, trimming each
/// item and dropping blanks.
pub fn parse_ingredient_list(text: &str) -> Vec<String> {
    let separator = Regex::new(r"[,;\r\n]+").expect("static separator regex");
    separator
        .split(text)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ingredients supplied up front by the caller.
#[derive(Debug, Clone, Default)]
pub struct ListDetector {
    ingredients: Vec<String>,
}

impl ListDetector {
    pub fn new(ingredients: Vec<String>) -> Self {
        Self { ingredients }
    }
}

#[async_trait]
impl IngredientDetector for ListDetector {
    async fn detect(&self) -> Result<Vec<String>> {
        Ok(self
            .ingredients
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Reads ingredients from a text file, e.g. the output of an external
/// image recognizer.
#[derive(Debug, Clone)]
pub struct TextFileDetector {
    path: PathBuf,
}

impl TextFileDetector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl IngredientDetector for TextFileDetector {
    async fn detect(&self) -> Result<Vec<String>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| MatchError::DetectionError {
                message: format!("cannot read {}: {}", self.path.display(), e),
            })?;

        let ingredients = parse_ingredient_list(&content);
        tracing::debug!(
            "Detected {} ingredients in {}",
            ingredients.len(),
            self.path.display()
        );
        Ok(ingredients)
    }
}

/// Both sources together: explicit list first, then the file.
pub struct CombinedDetector {
    detectors: Vec<Box<dyn IngredientDetector>>,
}

impl CombinedDetector {
    pub fn new(detectors: Vec<Box<dyn IngredientDetector>>) -> Self {
        Self { detectors }
    }

    pub fn from_sources(ingredients: Vec<String>, ingredients_file: Option<&str>) -> Self {
        let mut detectors: Vec<Box<dyn IngredientDetector>> =
            vec![Box::new(ListDetector::new(ingredients))];
        if let Some(path) = ingredients_file {
            detectors.push(Box::new(TextFileDetector::new(path)));
        }
        Self::new(detectors)
    }
}

#[async_trait]
impl IngredientDetector for CombinedDetector {
    async fn detect(&self) -> Result<Vec<String>> {
        let mut ingredients = Vec::new();
        for detector in &self.detectors {
            ingredients.extend(detector.detect().await?);
        }
        Ok(ingredients)
    }
}
