use crate::adapters::catalog::CatalogLoader;
use crate::adapters::report::{render, OutputFormat};
use crate::core::filter::filter_recipes;
use crate::core::ranker::find_matching_recipes;
use crate::core::{ConfigProvider, IngredientDetector, MatchInput, MatchReport, Pipeline, Storage};
use crate::utils::error::Result;
use chrono::Utc;

pub struct RecommendPipeline<S: Storage, C: ConfigProvider, D: IngredientDetector> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) detector: D,
    pub(crate) catalog: CatalogLoader,
}

impl<S: Storage, C: ConfigProvider, D: IngredientDetector> RecommendPipeline<S, C, D> {
    pub fn new(storage: S, config: C, detector: D) -> Self {
        let catalog = CatalogLoader::from_location(config.catalog_location());
        Self {
            storage,
            config,
            detector,
            catalog,
        }
    }

    pub fn with_catalog(mut self, catalog: CatalogLoader) -> Self {
        self.catalog = catalog;
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, D: IngredientDetector> Pipeline for RecommendPipeline<S, C, D> {
    async fn extract(&self) -> Result<MatchInput> {
        let ingredients = self.detector.detect().await?;
        tracing::debug!("User ingredients: {:?}", ingredients);

        // 目錄讀取失敗時回傳空目錄，不中斷流程
        let catalog = self.catalog.load().await;

        Ok(MatchInput {
            catalog,
            ingredients,
        })
    }

    async fn transform(&self, input: MatchInput) -> Result<MatchReport> {
        let dietary = self.config.dietary_filter();
        let difficulty = self.config.difficulty_filter();

        let candidates = filter_recipes(&input.catalog, dietary, difficulty);
        let results = find_matching_recipes(&input.ingredients, &candidates);

        Ok(MatchReport {
            generated_at: Utc::now(),
            ingredients: input.ingredients,
            dietary: dietary.map(str::to_string),
            difficulty: difficulty.map(str::to_string),
            results,
        })
    }

    async fn load(&self, report: MatchReport) -> Result<String> {
        let format: OutputFormat = self.config.output_format().parse()?;
        let file_name = format.file_name();
        let content = render(&report, format)?;

        tracing::debug!("Writing {} ({} bytes) to storage", file_name, content.len());
        self.storage
            .write_file(&file_name, content.as_bytes())
            .await?;

        Ok(format!("{}/{}", self.config.output_path(), file_name))
    }
}
