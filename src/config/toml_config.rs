use crate::adapters::catalog::DEFAULT_CATALOG_LOCATION;
use crate::adapters::report::SUPPORTED_FORMATS;
use crate::config::DIFFICULTY_CHOICES;
use crate::core::ConfigProvider;
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub filters: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub location: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_CATALOG_LOCATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub dietary: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./output".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MatchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RECIPE_CATALOG})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MatchError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_catalog_location("catalog.location", &self.catalog.location)?;
        validate_path("output.path", &self.output.path)?;
        validate_one_of("output.format", &self.output.format, SUPPORTED_FORMATS)?;
        validate_ingredient_source(
            "input.ingredients",
            &self.input.ingredients,
            self.input.file.as_deref(),
        )?;

        if let Some(difficulty) = &self.filters.difficulty {
            validate_one_of("filters.difficulty", difficulty, DIFFICULTY_CHOICES)?;
        }

        if let Some(format) = &self.logging.format {
            validate_one_of("logging.format", format, &["compact", "json"])?;
        }

        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_location(&self) -> &str {
        &self.catalog.location
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_format(&self) -> &str {
        &self.output.format
    }

    fn dietary_filter(&self) -> Option<&str> {
        self.filters.dietary.as_deref()
    }

    fn difficulty_filter(&self) -> Option<&str> {
        self.filters.difficulty.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[catalog]
location = "https://example.com/recipes.json"

[input]
ingredients = ["eggs", "bread"]

[filters]
dietary = "Vegetarian"
difficulty = "Easy"

[output]
path = "./test-output"
format = "csv"

[logging]
verbose = true
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.catalog_location(), "https://example.com/recipes.json");
        assert_eq!(config.input.ingredients, vec!["eggs", "bread"]);
        assert_eq!(config.dietary_filter(), Some("Vegetarian"));
        assert_eq!(config.output_format(), "csv");
        assert!(config.verbose());
        assert!(config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_for_missing_sections() {
        let config = TomlConfig::from_toml_str("[input]\ningredients = [\"rice\"]\n").unwrap();

        assert_eq!(config.catalog_location(), "recipes.json");
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.output_format(), "text");
        assert_eq!(config.difficulty_filter(), None);
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PANTRY_MATCH_TEST_CATALOG", "/data/catalog.json");

        let toml_content = r#"
[catalog]
location = "${PANTRY_MATCH_TEST_CATALOG}"

[output]
path = "${PANTRY_MATCH_UNSET_VARIABLE}"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog.location, "/data/catalog.json");
        assert_eq!(config.output.path, "${PANTRY_MATCH_UNSET_VARIABLE}");

        std::env::remove_var("PANTRY_MATCH_TEST_CATALOG");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[catalog]
location = "http://"

[input]
ingredients = ["eggs"]
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[input]
ingredients = ["eggs"]

[output]
path = "./output"
format = "pdf"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(matches!(
            config.validate(),
            Err(MatchError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("[catalog\nlocation ="),
            Err(MatchError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[input]
file = "fridge.txt"

[output]
path = "./output"
format = "json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input.file.as_deref(), Some("fridge.txt"));
        assert!(config.validate().is_ok());
    }
}
