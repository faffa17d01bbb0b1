use crate::domain::model::{MatchInput, MatchReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where raw catalog bytes come from (local file, HTTP, ...).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;

    fn location(&self) -> &str;
}

/// External capability that turns some input (an image, a text file, a list
/// typed by the user) into ingredient names. No guarantees on accuracy.
#[async_trait]
pub trait IngredientDetector: Send + Sync {
    async fn detect(&self) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_location(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_format(&self) -> &str;
    fn dietary_filter(&self) -> Option<&str>;
    fn difficulty_filter(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<MatchInput>;
    async fn transform(&self, input: MatchInput) -> Result<MatchReport>;
    async fn load(&self, report: MatchReport) -> Result<String>;
}
