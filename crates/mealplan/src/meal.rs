use chrono::{NaiveDate, NaiveDateTime};
use mealwise_recipe::Recipe;
use mealwise_shared::MealType;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A meal assigned to a calendar slot.
///
/// Either carries a recipe snapshot (`recipe_name == recipe.name`) or a
/// `custom_meal` label. Use the constructors to keep that pairing intact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub date: NaiveDateTime,
    pub meal_type: MealType,
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_meal: Option<String>,
    pub servings: u32,
    #[serde(default)]
    pub completed: bool,
}

impl Meal {
    pub fn from_recipe(
        date: impl Into<NaiveDateTime>,
        meal_type: MealType,
        recipe: Recipe,
        servings: u32,
    ) -> Self {
        Self {
            id: Ulid::new().to_string(),
            date: date.into(),
            meal_type,
            recipe_name: recipe.name.to_owned(),
            ingredients: recipe.ingredient_names(),
            recipe: Some(recipe),
            custom_meal: None,
            servings,
            completed: false,
        }
    }

    pub fn custom(
        date: impl Into<NaiveDateTime>,
        meal_type: MealType,
        name: impl Into<String>,
        ingredients: Vec<String>,
        servings: u32,
    ) -> Self {
        let name = name.into();

        Self {
            id: Ulid::new().to_string(),
            date: date.into(),
            meal_type,
            recipe_name: name.to_owned(),
            ingredients,
            recipe: None,
            custom_meal: Some(name),
            servings,
            completed: false,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// No recipe attached, the meal only has a custom label.
    pub fn is_fallback(&self) -> bool {
        self.recipe.is_none()
    }

    pub fn display_name(&self) -> &str {
        self.custom_meal.as_deref().unwrap_or(&self.recipe_name)
    }
}
