//! Weighted partial-match scoring between a user's ingredients and a recipe.
//!
//! Core ingredients weigh [`CORE_WEIGHT`], pantry staples weigh
//! [`PANTRY_WEIGHT`]. A recipe ingredient counts as satisfied when any user
//! ingredient contains it or is contained by it, so `"egg"` matches `"eggs"`
//! and `"scrambled eggs"`, and `"pea"` also matches `"peanut"`.

use std::collections::BTreeSet;

/// Low-distinctiveness ingredients most kitchens already have.
pub const PANTRY_STAPLES: &[&str] = &[
    "salt",
    "pepper",
    "water",
    "oil",
    "olive oil",
    "sugar",
    "flour",
    "butter",
    "garlic",
    "onion",
    "soy sauce",
    "vinegar",
];

pub const PANTRY_WEIGHT: u32 = 1;
pub const CORE_WEIGHT: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Weighted fraction of recipe ingredients satisfied, in `[0, 1]`.
    pub score: f64,
    /// Unsatisfied recipe ingredients, normalized and sorted alphabetically.
    pub missing: Vec<String>,
}

impl MatchScore {
    fn zero() -> Self {
        Self {
            score: 0.0,
            missing: Vec::new(),
        }
    }
}

/// Lower-cases and trims every item, drops blanks and merges duplicates.
/// `BTreeSet` iteration order is what makes `missing` deterministic.
pub fn normalize_ingredients<S: AsRef<str>>(items: &[S]) -> BTreeSet<String> {
    items
        .iter()
        .map(|item| item.as_ref().trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Exact membership on an already normalized name.
pub fn is_pantry_staple(ingredient: &str) -> bool {
    PANTRY_STAPLES.contains(&ingredient)
}

pub fn ingredient_weight(ingredient: &str) -> u32 {
    if is_pantry_staple(ingredient) {
        PANTRY_WEIGHT
    } else {
        CORE_WEIGHT
    }
}

/// Bidirectional substring containment. Both sides must be non-empty.
pub fn is_partial_match(user_item: &str, ingredient: &str) -> bool {
    if user_item.is_empty() || ingredient.is_empty() {
        return false;
    }
    ingredient.contains(user_item) || user_item.contains(ingredient)
}

pub fn calculate_match_score<U, R>(user_ingredients: &[U], recipe_ingredients: &[R]) -> MatchScore
where
    U: AsRef<str>,
    R: AsRef<str>,
{
    let user_set = normalize_ingredients(user_ingredients);
    let recipe_set = normalize_ingredients(recipe_ingredients);

    if recipe_set.is_empty() {
        return MatchScore::zero();
    }

    let mut total_possible_score = 0u32;
    let mut current_score = 0u32;
    let mut missing = Vec::new();

    for ingredient in recipe_set {
        let weight = ingredient_weight(&ingredient);
        total_possible_score += weight;

        let matched = user_set
            .iter()
            .any(|user_item| is_partial_match(user_item, &ingredient));

        if matched {
            current_score += weight;
        } else {
            missing.push(ingredient);
        }
    }

    // recipe_set 非空時 total_possible_score 至少為 1
    MatchScore {
        score: f64::from(current_score) / f64::from(total_possible_score),
        missing,
    }
}
