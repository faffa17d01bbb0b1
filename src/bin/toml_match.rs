use clap::Parser;
use pantry_match::adapters::catalog::CatalogLoader;
use pantry_match::adapters::detector::CombinedDetector;
use pantry_match::config::toml_config::TomlConfig;
use pantry_match::core::ConfigProvider;
use pantry_match::utils::error::ErrorSeverity;
use pantry_match::utils::{logger, validation::Validate};
use pantry_match::{filter_recipes, LocalStorage, MatchEngine, RecommendPipeline};

#[derive(Parser)]
#[command(name = "toml-match")]
#[command(about = "Recipe matcher driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "pantry-match.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the output format from config
    #[arg(long)]
    format: Option<String>,

    /// Dry run - load the catalog and show what would be matched without writing output
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let verbose = args.verbose || config.verbose();
    if config.json_logging() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting TOML-based recipe matcher");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(format) = args.format {
        tracing::info!("🔧 Output format overridden to: {}", format);
        config.output.format = format;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, args.dry_run);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");
        perform_dry_run(&config).await;
        return Ok(());
    }

    let detector = CombinedDetector::from_sources(
        config.input.ingredients.clone(),
        config.input.file.as_deref(),
    );
    let storage = LocalStorage::new(config.output_path().to_string());
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

fn display_config_summary(config: &TomlConfig, dry_run: bool) {
    println!("📋 Configuration Summary:");
    println!("  Catalog: {}", config.catalog_location());
    if !config.input.ingredients.is_empty() {
        println!("  Ingredients: {}", config.input.ingredients.join(", "));
    }
    if let Some(file) = &config.input.file {
        println!("  Ingredients file: {}", file);
    }
    println!(
        "  Dietary: {}",
        config.dietary_filter().unwrap_or("None")
    );
    println!(
        "  Difficulty: {}",
        config.difficulty_filter().unwrap_or("Any")
    );
    println!("  Output: {} ({})", config.output_path(), config.output_format());

    if dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

async fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");

    let catalog = CatalogLoader::from_location(config.catalog_location())
        .load()
        .await;
    let candidates = filter_recipes(
        &catalog,
        config.dietary_filter(),
        config.difficulty_filter(),
    );

    println!("  📚 Recipes in catalog: {}", catalog.len());
    println!("  🔎 Recipes after filters: {}", candidates.len());
    println!();
    println!("✅ Dry run analysis complete. Run without --dry-run to write recommendations.");
}
