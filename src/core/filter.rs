use crate::domain::model::Recipe;

/// Dietary value meaning "do not filter".
pub const NO_DIETARY_FILTER: &str = "None";
/// Difficulty value meaning "do not filter".
pub const ANY_DIFFICULTY: &str = "Any";

fn active(filter: Option<&str>, sentinel: &str) -> Option<String> {
    filter
        .filter(|value| !value.is_empty() && *value != sentinel)
        .map(str::to_string)
}

/// Keeps recipes tagged with `dietary` and/or rated `difficulty`. Both
/// comparisons are exact. A recipe without a difficulty never matches an
/// active difficulty filter.
pub fn filter_recipes(
    recipes: &[Recipe],
    dietary: Option<&str>,
    difficulty: Option<&str>,
) -> Vec<Recipe> {
    let dietary = active(dietary, NO_DIETARY_FILTER);
    let difficulty = active(difficulty, ANY_DIFFICULTY);

    let filtered: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| {
            dietary
                .as_ref()
                .is_none_or(|tag| recipe.dietary.iter().any(|d| d == tag))
        })
        .filter(|recipe| {
            difficulty.as_ref().is_none_or(|wanted| {
                recipe
                    .difficulty
                    .is_some_and(|level| level.as_str() == wanted.as_str())
            })
        })
        .cloned()
        .collect();

    tracing::debug!(
        "Filtered catalog from {} to {} recipes (dietary: {:?}, difficulty: {:?})",
        recipes.len(),
        filtered.len(),
        dietary,
        difficulty
    );

    filtered
}
