use mealwise_recipe::Recipe;

use crate::AutoFillPreferences;

/// Keeps recipes satisfying every preference constraint.
///
/// # Business Rules
/// - **Time**: `total_time <= max_cooking_time`
/// - **Budget**: `estimated_cost <= per_meal_budget`
/// - **Dietary (OR logic)**: with restrictions present, at least one restriction must
///   appear (case-insensitive substring) in at least one dietary tag
/// - **Cuisine (OR logic)**: with preferred cuisines present, at least one must appear
///   (case-insensitive substring) in the recipe cuisine
///
/// An empty result is a valid outcome. Catalog order is kept.
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    preferences: &AutoFillPreferences,
    per_meal_budget: f64,
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| {
            fits_time(recipe, preferences.max_cooking_time)
                && fits_budget(recipe, per_meal_budget)
                && matches_dietary(recipe, &preferences.dietary_restrictions)
                && matches_cuisine(recipe, &preferences.preferred_cuisines)
        })
        .collect()
}

pub fn fits_time(recipe: &Recipe, max_cooking_time: u32) -> bool {
    recipe.total_time() <= max_cooking_time
}

pub fn fits_budget(recipe: &Recipe, per_meal_budget: f64) -> bool {
    recipe.estimated_cost <= per_meal_budget
}

/// Case-insensitive substring match of any restriction against the dietary tags.
pub fn matches_dietary(recipe: &Recipe, restrictions: &[String]) -> bool {
    if restrictions.is_empty() {
        return true;
    }

    let tags: Vec<String> = recipe
        .dietary_tags()
        .iter()
        .map(|tag| tag.to_lowercase())
        .collect();

    restrictions.iter().any(|restriction| {
        let restriction = restriction.to_lowercase();
        tags.iter().any(|tag| tag.contains(&restriction))
    })
}

/// Case-insensitive substring match of any preferred cuisine against the recipe cuisine.
pub fn matches_cuisine(recipe: &Recipe, preferred_cuisines: &[String]) -> bool {
    if preferred_cuisines.is_empty() {
        return true;
    }

    let cuisine = recipe.cuisine.to_lowercase();

    preferred_cuisines
        .iter()
        .any(|preferred| cuisine.contains(&preferred.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use mealwise_recipe::{DietaryInfo, Difficulty, NutritionInfo, RecipeCategory};

    use super::*;

    fn create_test_recipe(
        id: &str,
        total_time: u32,
        cost: f64,
        dietary_info: DietaryInfo,
        cuisine: &str,
    ) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Test Recipe {}", id),
            description: String::new(),
            category: RecipeCategory::Dinner,
            difficulty: Difficulty::Easy,
            prep_time: total_time / 2,
            cook_time: total_time - total_time / 2,
            servings: 2,
            ingredients: vec![],
            instructions: vec![],
            nutrition: NutritionInfo::default(),
            tags: vec![],
            image: String::new(),
            rating: 4.0,
            review_count: 100,
            dietary_info,
            estimated_cost: cost,
            cuisine: cuisine.to_string(),
            author: String::new(),
        }
    }

    fn vegetarian() -> DietaryInfo {
        DietaryInfo {
            vegetarian: true,
            ..Default::default()
        }
    }

    fn ids(recipes: Vec<&Recipe>) -> Vec<&str> {
        recipes.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_preferences_only_apply_time_and_budget() {
        let recipes = vec![
            create_test_recipe("1", 20, 5.0, DietaryInfo::default(), "Italian"),
            create_test_recipe("2", 90, 5.0, DietaryInfo::default(), "Italian"),
            create_test_recipe("3", 20, 25.0, DietaryInfo::default(), "Italian"),
        ];

        let filtered = filter_recipes(&recipes, &AutoFillPreferences::default(), 15.0);

        assert_eq!(ids(filtered), vec!["1"]);
    }

    #[test]
    fn test_time_and_budget_bounds_are_inclusive() {
        let recipes = vec![create_test_recipe(
            "edge",
            60,
            15.0,
            DietaryInfo::default(),
            "Thai",
        )];

        let filtered = filter_recipes(&recipes, &AutoFillPreferences::default(), 15.0);

        assert_eq!(filtered.len(), 1, "Bounds should be inclusive");
    }

    #[test]
    fn test_dietary_restrictions_use_or_logic() {
        let recipes = vec![
            create_test_recipe("veg", 20, 5.0, vegetarian(), "Indian"),
            create_test_recipe(
                "gf",
                20,
                5.0,
                DietaryInfo {
                    gluten_free: true,
                    ..Default::default()
                },
                "Indian",
            ),
            create_test_recipe("none", 20, 5.0, DietaryInfo::default(), "Indian"),
        ];

        let preferences =
            AutoFillPreferences::default().with_dietary_restrictions(["Vegetarian", "gluten"]);
        let filtered = filter_recipes(&recipes, &preferences, 15.0);

        assert_eq!(
            ids(filtered),
            vec!["veg", "gf"],
            "Either restriction should be enough"
        );
    }

    #[test]
    fn test_dietary_match_is_case_insensitive_substring() {
        let recipe = create_test_recipe("1", 20, 5.0, vegetarian(), "Indian");

        assert!(matches_dietary(&recipe, &["VEGETARIAN".to_string()]));
        assert!(matches_dietary(&recipe, &["veget".to_string()]));
        assert!(!matches_dietary(&recipe, &["vegan".to_string()]));
    }

    #[test]
    fn test_recipes_without_tags_excluded_when_restrictions_present() {
        let recipe = create_test_recipe("1", 20, 5.0, DietaryInfo::default(), "Indian");

        assert!(!matches_dietary(&recipe, &["vegetarian".to_string()]));
        assert!(matches_dietary(&recipe, &[]));
    }

    #[test]
    fn test_cuisine_preferences_use_or_logic() {
        let recipes = vec![
            create_test_recipe("it", 20, 5.0, DietaryInfo::default(), "Italian"),
            create_test_recipe("mx", 20, 5.0, DietaryInfo::default(), "Mexican"),
            create_test_recipe("jp", 20, 5.0, DietaryInfo::default(), "Japanese"),
        ];

        let preferences = AutoFillPreferences::default().with_preferred_cuisines(["ital", "MEX"]);
        let filtered = filter_recipes(&recipes, &preferences, 15.0);

        assert_eq!(ids(filtered), vec!["it", "mx"]);
    }

    #[test]
    fn test_no_compatible_recipes_returns_empty() {
        let recipes = vec![create_test_recipe(
            "1",
            20,
            5.0,
            DietaryInfo::default(),
            "French",
        )];

        let preferences = AutoFillPreferences::default().with_preferred_cuisines(["Korean"]);

        assert!(filter_recipes(&recipes, &preferences, 15.0).is_empty());
    }
}
