pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{catalog::CatalogLoader, storage::LocalStorage};
pub use app::pipelines::RecommendPipeline;
pub use crate::core::{
    engine::MatchEngine, filter::filter_recipes, matcher::calculate_match_score,
    ranker::find_matching_recipes, substitution::get_substitution,
};
pub use domain::model::{AnnotatedRecipe, Difficulty, Recipe, RecipeId};
pub use utils::error::{MatchError, Result};
