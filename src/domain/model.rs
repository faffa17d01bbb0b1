use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 食譜識別碼，目錄中可能是字串或整數
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Number(n) => write!(f, "{}", n),
            RecipeId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry. Ingredient strings are kept exactly as stored; matching
/// normalizes its own copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_minutes: Option<u32>,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub nutrition: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// A copy of a recipe annotated with its match result. Serializes flat, the
/// same shape as a catalog record plus `match_score` and `missing_ingredients`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub match_score: f64,
    pub missing_ingredients: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MatchInput {
    pub catalog: Vec<Recipe>,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub results: Vec<AnnotatedRecipe>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_deserializes_with_optional_fields_missing() {
        let json = r#"{"id": 7, "name": "Toast", "ingredients": ["bread"]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe.id, RecipeId::Number(7));
        assert_eq!(recipe.difficulty, None);
        assert!(recipe.dietary.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_recipe_id_accepts_text() {
        let json = r#"{"id": "r-12", "name": "Soup", "difficulty": "Hard"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe.id.to_string(), "r-12");
        assert_eq!(recipe.difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn test_annotated_recipe_serializes_flat() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id": 1, "name": "Omelette", "ingredients": ["egg"]}"#)
                .unwrap();
        let annotated = AnnotatedRecipe {
            recipe,
            match_score: 0.5,
            missing_ingredients: vec!["salt".to_string()],
        };

        let value = serde_json::to_value(&annotated).unwrap();
        assert_eq!(value["name"], "Omelette");
        assert_eq!(value["match_score"], 0.5);
        assert_eq!(value["missing_ingredients"][0], "salt");
    }
}
