/// Substitution suggestions keyed by ingredient-name fragment. Order matters:
/// the first key found inside the ingredient name wins.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("milk", "almond milk, soy milk, or water"),
    ("butter", "olive oil, coconut oil, or margarine"),
    (
        "egg",
        "flax seed meal (1 tbsp + 3 tbsp water), applesauce, or yogurt",
    ),
    ("soy sauce", "tamari (gluten-free) or coconut aminos"),
    ("sugar", "honey, maple syrup, or stevia"),
    ("flour", "gluten-free blend, almond flour, or oat flour"),
    ("ground beef", "lentils, turkey, or plant-based crumble"),
    ("cream", "coconut milk or greek yogurt"),
];

pub fn get_substitution(ingredient: &str) -> Option<&'static str> {
    let ingredient = ingredient.to_lowercase();
    SUBSTITUTIONS
        .iter()
        .find(|(key, _)| ingredient.contains(*key))
        .map(|(_, suggestion)| *suggestion)
}
