pub mod engine;
pub mod filter;
pub mod matcher;
pub mod ranker;
pub mod substitution;

pub use crate::domain::model::{AnnotatedRecipe, MatchInput, MatchReport, Recipe};
pub use crate::domain::ports::{
    CatalogSource, ConfigProvider, IngredientDetector, Pipeline, Storage,
};
pub use crate::utils::error::Result;
