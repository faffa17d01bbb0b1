use clap::Parser;
use pantry_match::adapters::detector::CombinedDetector;
use pantry_match::utils::error::ErrorSeverity;
use pantry_match::utils::{logger, validation::Validate};
use pantry_match::{CliConfig, LocalStorage, MatchEngine, RecommendPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pantry-match CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let detector =
        CombinedDetector::from_sources(config.ingredients.clone(), config.ingredients_file.as_deref());
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = RecommendPipeline::new(storage, config, detector);

    let engine = MatchEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Recipe matching completed successfully!");
            println!("✅ Recommendations saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Recipe matching failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
