pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::catalog::DEFAULT_CATALOG_LOCATION;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DIFFICULTY_CHOICES: &[&str] = &["Easy", "Medium", "Hard", "Any"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pantry-match")]
#[command(about = "Recommend recipes from the ingredients you already have")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_CATALOG_LOCATION, help = "Recipe catalog file or http(s) URL")]
    pub catalog: String,

    #[arg(short, long, value_delimiter = ',', help = "Comma separated ingredients")]
    pub ingredients: Vec<String>,

    #[arg(long, help = "Text file with detected ingredients")]
    pub ingredients_file: Option<String>,

    #[arg(long, help = "Dietary tag to require, e.g. Vegetarian (\"None\" disables)")]
    pub dietary: Option<String>,

    #[arg(long, help = "Easy, Medium, Hard or Any")]
    pub difficulty: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "text", help = "json, csv or text")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn catalog_location(&self) -> &str {
        &self.catalog
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_format(&self) -> &str {
        &self.format
    }

    fn dietary_filter(&self) -> Option<&str> {
        self.dietary.as_deref()
    }

    fn difficulty_filter(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::adapters::report::SUPPORTED_FORMATS;
        use crate::utils::validation::*;

        validate_catalog_location("catalog", &self.catalog)?;
        validate_path("output_path", &self.output_path)?;
        validate_one_of("format", &self.format, SUPPORTED_FORMATS)?;
        validate_ingredient_source(
            "ingredients",
            &self.ingredients,
            self.ingredients_file.as_deref(),
        )?;

        if let Some(difficulty) = &self.difficulty {
            validate_one_of("difficulty", difficulty, DIFFICULTY_CHOICES)?;
        }
        if let Some(dietary) = &self.dietary {
            validate_non_empty_string("dietary", dietary)?;
        }

        Ok(())
    }
}
