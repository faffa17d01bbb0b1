use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct MatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting recipe matching...");

        // Extract
        let input = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} recipes and {} ingredients",
            input.catalog.len(),
            input.ingredients.len()
        );

        // Transform
        let report = self.pipeline.transform(input).await?;
        tracing::info!("Matched {} recipes", report.results.len());

        // Load
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Recommendations saved to: {}", output_path);

        Ok(output_path)
    }
}
