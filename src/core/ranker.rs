use crate::core::matcher::calculate_match_score;
use crate::domain::model::{AnnotatedRecipe, Recipe};

/// Recipes scoring below this are not worth showing.
pub const MIN_MATCH_SCORE: f64 = 0.30;

/// Scores every recipe, keeps those at or above [`MIN_MATCH_SCORE`] and
/// returns annotated copies sorted by score, highest first. The sort is
/// stable, so equal scores keep catalog order.
pub fn find_matching_recipes<S: AsRef<str>>(
    user_ingredients: &[S],
    recipes: &[Recipe],
) -> Vec<AnnotatedRecipe> {
    let mut results: Vec<AnnotatedRecipe> = recipes
        .iter()
        .filter_map(|recipe| {
            let result = calculate_match_score(user_ingredients, &recipe.ingredients);
            tracing::debug!(
                "Recipe '{}' scored {:.2} ({} missing)",
                recipe.name,
                result.score,
                result.missing.len()
            );

            (result.score >= MIN_MATCH_SCORE).then(|| AnnotatedRecipe {
                recipe: recipe.clone(),
                match_score: result.score,
                missing_ingredients: result.missing,
            })
        })
        .collect();

    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    results
}
