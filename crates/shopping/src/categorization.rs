use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Grocery store section an ingredient is shopped in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum GroceryCategory {
    Dairy,
    Produce,
    Meat,
    Grains,
    Pantry,
    Other,
}

/// Keyword table, searched in order. The first keyword contained in the lowercase
/// ingredient name decides the category.
pub const CATEGORY_KEYWORDS: &[(&str, GroceryCategory)] = &[
    // Contains "egg"
    ("eggplant", GroceryCategory::Produce),
    // Dairy
    ("milk", GroceryCategory::Dairy),
    ("cheese", GroceryCategory::Dairy),
    ("yogurt", GroceryCategory::Dairy),
    ("butter", GroceryCategory::Dairy),
    ("cream", GroceryCategory::Dairy),
    ("egg", GroceryCategory::Dairy),
    // Produce
    ("lettuce", GroceryCategory::Produce),
    ("tomato", GroceryCategory::Produce),
    ("onion", GroceryCategory::Produce),
    ("garlic", GroceryCategory::Produce),
    ("pepper", GroceryCategory::Produce),
    ("spinach", GroceryCategory::Produce),
    ("carrot", GroceryCategory::Produce),
    ("potato", GroceryCategory::Produce),
    ("avocado", GroceryCategory::Produce),
    ("banana", GroceryCategory::Produce),
    ("berr", GroceryCategory::Produce),
    ("apple", GroceryCategory::Produce),
    ("lemon", GroceryCategory::Produce),
    ("lime", GroceryCategory::Produce),
    ("cucumber", GroceryCategory::Produce),
    ("broccoli", GroceryCategory::Produce),
    ("mushroom", GroceryCategory::Produce),
    ("fruit", GroceryCategory::Produce),
    ("vegetable", GroceryCategory::Produce),
    ("greens", GroceryCategory::Produce),
    ("herb", GroceryCategory::Produce),
    ("basil", GroceryCategory::Produce),
    ("cilantro", GroceryCategory::Produce),
    ("zucchini", GroceryCategory::Produce),
    // Meat
    ("chicken", GroceryCategory::Meat),
    ("beef", GroceryCategory::Meat),
    ("pork", GroceryCategory::Meat),
    ("turkey", GroceryCategory::Meat),
    ("salmon", GroceryCategory::Meat),
    ("fish", GroceryCategory::Meat),
    ("shrimp", GroceryCategory::Meat),
    ("bacon", GroceryCategory::Meat),
    ("sausage", GroceryCategory::Meat),
    ("lamb", GroceryCategory::Meat),
    ("tuna", GroceryCategory::Meat),
    // Grains
    ("rice", GroceryCategory::Grains),
    ("pasta", GroceryCategory::Grains),
    ("bread", GroceryCategory::Grains),
    ("oat", GroceryCategory::Grains),
    ("quinoa", GroceryCategory::Grains),
    ("flour", GroceryCategory::Grains),
    ("tortilla", GroceryCategory::Grains),
    ("noodle", GroceryCategory::Grains),
    ("granola", GroceryCategory::Grains),
    // Pantry
    ("oil", GroceryCategory::Pantry),
    ("salt", GroceryCategory::Pantry),
    ("sugar", GroceryCategory::Pantry),
    ("vinegar", GroceryCategory::Pantry),
    ("sauce", GroceryCategory::Pantry),
    ("spice", GroceryCategory::Pantry),
    ("honey", GroceryCategory::Pantry),
    ("broth", GroceryCategory::Pantry),
    ("bean", GroceryCategory::Pantry),
    ("nut", GroceryCategory::Pantry),
    ("syrup", GroceryCategory::Pantry),
    ("stock", GroceryCategory::Pantry),
];

/// Categorization Service
///
/// Stateless mapping from ingredient names to store sections by keyword containment.
pub struct CategorizationService;

impl CategorizationService {
    pub fn categorize(ingredient_name: &str) -> GroceryCategory {
        let normalized = ingredient_name.trim().to_lowercase();

        CATEGORY_KEYWORDS
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword))
            .map(|(_, category)| *category)
            .unwrap_or(GroceryCategory::Other)
    }
}

pub fn categorize(ingredient_name: &str) -> GroceryCategory {
    CategorizationService::categorize(ingredient_name)
}
