use mealwise_recipe::{Recipe, RecipeCategory};
use mealwise_shared::MealType;

/// Which catalog recipes may fill a slot type.
#[derive(Debug, Clone, Copy)]
pub struct SlotRule {
    pub meal_type: MealType,
    pub categories: &'static [RecipeCategory],
    pub tag: &'static str,
}

pub const SLOT_RULES: &[SlotRule] = &[
    SlotRule {
        meal_type: MealType::Breakfast,
        categories: &[RecipeCategory::Breakfast],
        tag: "breakfast",
    },
    SlotRule {
        meal_type: MealType::Lunch,
        categories: &[RecipeCategory::Lunch, RecipeCategory::Salad],
        tag: "lunch",
    },
    SlotRule {
        meal_type: MealType::Dinner,
        categories: &[
            RecipeCategory::Dinner,
            RecipeCategory::Pasta,
            RecipeCategory::Meat,
            RecipeCategory::Seafood,
        ],
        tag: "dinner",
    },
    SlotRule {
        meal_type: MealType::Snack,
        categories: &[RecipeCategory::Snack],
        tag: "snack",
    },
];

const TWO_MEALS: &[MealType] = &[MealType::Breakfast, MealType::Dinner];
const THREE_MEALS: &[MealType] = &[MealType::Breakfast, MealType::Lunch, MealType::Dinner];
const FOUR_MEALS: &[MealType] = &[
    MealType::Breakfast,
    MealType::Lunch,
    MealType::Dinner,
    MealType::Snack,
];

/// Slot types generated for each day, in generation order.
///
/// Counts below two fall back to two slots and counts above four to four.
pub fn slot_types(meals_per_day: u8) -> &'static [MealType] {
    match meals_per_day {
        0..=2 => TWO_MEALS,
        3 => THREE_MEALS,
        _ => FOUR_MEALS,
    }
}

/// Category membership or a tag equal to the slot name, ignoring ASCII case.
pub fn matches_slot(recipe: &Recipe, meal_type: MealType) -> bool {
    SLOT_RULES
        .iter()
        .filter(|rule| rule.meal_type == meal_type)
        .any(|rule| rule.categories.contains(&recipe.category) || recipe.has_tag(rule.tag))
}

/// Every slot type a recipe qualifies for.
pub fn slots_for(recipe: &Recipe) -> Vec<MealType> {
    SLOT_RULES
        .iter()
        .filter(|rule| matches_slot(recipe, rule.meal_type))
        .map(|rule| rule.meal_type)
        .collect()
}
