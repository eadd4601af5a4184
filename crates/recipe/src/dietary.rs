use serde::{Deserialize, Serialize};

/// Dietary flags carried by a recipe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietaryInfo {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
    pub nut_free: bool,
    pub keto: bool,
    pub paleo: bool,
    pub allergens: Vec<String>,
}

impl DietaryInfo {
    /// Human readable tags, in flag order.
    pub fn tags(&self) -> Vec<&'static str> {
        [
            (self.vegetarian, "Vegetarian"),
            (self.vegan, "Vegan"),
            (self.gluten_free, "Gluten-Free"),
            (self.dairy_free, "Dairy-Free"),
            (self.nut_free, "Nut-Free"),
            (self.keto, "Keto"),
            (self.paleo, "Paleo"),
        ]
        .into_iter()
        .filter_map(|(flag, tag)| flag.then_some(tag))
        .collect()
    }
}
