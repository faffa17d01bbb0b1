use httpmock::prelude::*;
use pantry_match::adapters::detector::{CombinedDetector, ListDetector};
use pantry_match::config::toml_config::TomlConfig;
use pantry_match::{CliConfig, LocalStorage, MatchEngine, RecommendPipeline};
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {
        "id": 1,
        "name": "Avocado Toast",
        "cuisine": "American",
        "difficulty": "Easy",
        "time_minutes": 10,
        "dietary": ["Vegetarian", "Vegan"],
        "nutrition": {"calories": 320},
        "ingredients": ["Bread", "avocado", "salt", "pepper"],
        "steps": ["Toast bread", "Spread avocado", "Season"]
    },
    {
        "id": 2,
        "name": "Cheese Omelette",
        "cuisine": "French",
        "difficulty": "Easy",
        "time_minutes": 15,
        "dietary": ["Vegetarian", "Gluten-Free"],
        "nutrition": {"calories": 410},
        "ingredients": ["eggs", "cheese", "butter", "milk"],
        "steps": ["Whisk eggs", "Cook", "Fold with cheese"]
    },
    {
        "id": 3,
        "name": "Beef Bourguignon",
        "cuisine": "French",
        "difficulty": "Hard",
        "time_minutes": 180,
        "dietary": [],
        "nutrition": {"calories": 650},
        "ingredients": ["beef", "red wine", "carrot", "mushroom", "onion"],
        "steps": ["Brown beef", "Braise"]
    },
    {
        "id": 4,
        "name": "Broken Recipe",
        "ingredients": []
    }
]"#;

fn write_catalog(dir: &Path) -> String {
    let path = dir.join("recipes.json");
    std::fs::write(&path, CATALOG).unwrap();
    path.to_str().unwrap().to_string()
}

fn cli_config(catalog: String, output_path: String, format: &str) -> CliConfig {
    CliConfig {
        catalog,
        ingredients: vec!["egg".to_string(), "Cheddar Cheese".to_string(), "bread".to_string()],
        ingredients_file: None,
        dietary: None,
        difficulty: None,
        output_path,
        format: format.to_string(),
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let config = cli_config(catalog, output_path.clone(), "json");
    let detector = ListDetector::new(config.ingredients.clone());
    let storage = LocalStorage::new(output_path.clone());
    let engine = MatchEngine::new(RecommendPipeline::new(storage, config, detector));

    let result = engine.run().await.unwrap();
    assert!(result.ends_with("recommendations.json"));

    let written = std::fs::read_to_string(Path::new(&output_path).join("recommendations.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&written).unwrap();
    let results = report["results"].as_array().unwrap();

    // Omelette: eggs(2)+cheese(2) / 2+2+1+2 = 4/7; Toast: bread(2) / 2+2+1+1 = 2/6
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["name"], "Cheese Omelette");
    assert_eq!(results[0]["missing_ingredients"], serde_json::json!(["butter", "milk"]));
    assert_eq!(results[1]["name"], "Avocado Toast");
    assert_eq!(
        results[1]["missing_ingredients"],
        serde_json::json!(["avocado", "pepper", "salt"])
    );
    assert_eq!(results[1]["steps"][0], "Toast bread");
}

#[tokio::test]
async fn test_end_to_end_with_missing_catalog_writes_empty_report() {
    let temp_dir = TempDir::new().unwrap();
    let missing_catalog = temp_dir.path().join("nope.json").to_str().unwrap().to_string();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = cli_config(missing_catalog, output_path.clone(), "text");
    let detector = ListDetector::new(config.ingredients.clone());
    let storage = LocalStorage::new(output_path.clone());
    let engine = MatchEngine::new(RecommendPipeline::new(storage, config, detector));

    // 目錄不存在不算錯誤
    engine.run().await.unwrap();

    let text = std::fs::read_to_string(temp_dir.path().join("recommendations.txt")).unwrap();
    assert!(text.starts_with("No recipes matched"));
}

#[tokio::test]
async fn test_end_to_end_http_catalog_with_filters_and_csv() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/recipes.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(CATALOG);
    });

    let mut config = cli_config(server.url("/recipes.json"), output_path.clone(), "csv");
    config.dietary = Some("Vegan".to_string());
    config.difficulty = Some("Easy".to_string());

    let detector = ListDetector::new(config.ingredients.clone());
    let storage = LocalStorage::new(output_path.clone());
    let engine = MatchEngine::new(RecommendPipeline::new(storage, config, detector));

    engine.run().await.unwrap();
    api_mock.assert();

    let csv = std::fs::read_to_string(temp_dir.path().join("recommendations.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "1,Avocado Toast,American,Easy,10,0.33,avocado; pepper; salt"
    );
}

#[tokio::test]
async fn test_end_to_end_from_toml_and_ingredient_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog = write_catalog(temp_dir.path());
    let fridge = temp_dir.path().join("fridge.txt");
    std::fs::write(&fridge, "beef\nred wine; carrots\nmushrooms, onion\n")?;
    let output_path = temp_dir.path().join("report");

    let toml_content = format!(
        r#"
[catalog]
location = "{}"

[input]
file = "{}"

[filters]
difficulty = "Hard"

[output]
path = "{}"
format = "json"
"#,
        catalog.replace('\\', "/"),
        fridge.to_str().unwrap().replace('\\', "/"),
        output_path.to_str().unwrap().replace('\\', "/")
    );
    let config = TomlConfig::from_toml_str(&toml_content)?;

    let detector = CombinedDetector::from_sources(
        config.input.ingredients.clone(),
        config.input.file.as_deref(),
    );
    let storage = LocalStorage::new(output_path.to_str().unwrap().to_string());
    let engine = MatchEngine::new(RecommendPipeline::new(storage, config, detector));

    engine.run().await?;

    let written = std::fs::read_to_string(output_path.join("recommendations.json"))?;
    let report: serde_json::Value = serde_json::from_str(&written)?;

    assert_eq!(report["difficulty"], "Hard");
    assert_eq!(report["results"][0]["name"], "Beef Bourguignon");
    assert_eq!(report["results"][0]["match_score"], 1.0);
    assert_eq!(report["results"][0]["missing_ingredients"], serde_json::json!([]));
    Ok(())
}
