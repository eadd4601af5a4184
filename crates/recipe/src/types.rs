use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{DietaryInfo, NutritionInfo};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Dessert,
    Snack,
    Appetizer,
    Soup,
    Salad,
    Pasta,
    Meat,
    Seafood,
    Vegetarian,
    Vegan,
    Quick,
    SlowCooker,
    Baking,
    Drinks,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub aisle: u32,
    pub estimated_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Catalog entry. Read-only once loaded; scaling produces a new value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: RecipeCategory,
    pub difficulty: Difficulty,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    pub nutrition: NutritionInfo,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub dietary_info: DietaryInfo,
    pub estimated_cost: f64,
    pub cuisine: String,
    #[serde(default)]
    pub author: String,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }

    pub fn ingredient_names(&self) -> Vec<String> {
        self.ingredients.iter().map(|i| i.name.to_owned()).collect()
    }

    pub fn dietary_tags(&self) -> Vec<&'static str> {
        self.dietary_info.tags()
    }

    /// Case-insensitive (ASCII) tag equality.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn pancakes() -> Recipe {
        Recipe {
            id: "r-pancakes".to_owned(),
            name: "Buttermilk Pancakes".to_owned(),
            description: "Fluffy weekend pancakes".to_owned(),
            category: RecipeCategory::Breakfast,
            difficulty: Difficulty::Easy,
            prep_time: 10,
            cook_time: 15,
            servings: 4,
            ingredients: vec![
                RecipeIngredient {
                    name: "Flour".to_owned(),
                    amount: 2.0,
                    unit: "cups".to_owned(),
                    aisle: 7,
                    estimated_price: 0.8,
                    notes: None,
                },
                RecipeIngredient {
                    name: "Buttermilk".to_owned(),
                    amount: 1.5,
                    unit: "cups".to_owned(),
                    aisle: 2,
                    estimated_price: 1.6,
                    notes: Some("room temperature".to_owned()),
                },
                RecipeIngredient {
                    name: "Eggs".to_owned(),
                    amount: 2.0,
                    unit: "whole".to_owned(),
                    aisle: 2,
                    estimated_price: 0.6,
                    notes: None,
                },
            ],
            instructions: vec![
                "Whisk dry ingredients".to_owned(),
                "Fold in wet ingredients".to_owned(),
                "Cook on a hot griddle".to_owned(),
            ],
            nutrition: NutritionInfo {
                calories: 1200,
                protein: 36.0,
                carbs: 180.0,
                fat: 32.0,
                fiber: Some(6.0),
                sugar: Some(24.0),
                sodium: None,
            },
            tags: vec!["breakfast".to_owned(), "weekend".to_owned()],
            image: "pancakes.jpg".to_owned(),
            rating: 4.6,
            review_count: 2400,
            dietary_info: DietaryInfo {
                vegetarian: true,
                nut_free: true,
                ..Default::default()
            },
            estimated_cost: 3.0,
            cuisine: "American".to_owned(),
            author: "Test Kitchen".to_owned(),
        }
    }
}
