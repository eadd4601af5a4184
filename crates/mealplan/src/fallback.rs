use chrono::NaiveDateTime;
use mealwise_shared::MealType;

use crate::Meal;

/// Generic meal used when no catalog recipe fits a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackMeal {
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
}

pub const BREAKFAST_FALLBACK: FallbackMeal = FallbackMeal {
    name: "Healthy Breakfast Bowl",
    ingredients: &["Greek Yogurt", "Granola", "Mixed Berries"],
};

pub const LUNCH_FALLBACK: FallbackMeal = FallbackMeal {
    name: "Fresh Salad with Protein",
    ingredients: &["Mixed Greens", "Grilled Chicken", "Cherry Tomatoes"],
};

pub const DINNER_FALLBACK: FallbackMeal = FallbackMeal {
    name: "Balanced Dinner Plate",
    ingredients: &["Salmon Fillet", "Brown Rice", "Steamed Broccoli"],
};

pub const SNACK_FALLBACK: FallbackMeal = FallbackMeal {
    name: "Nutritious Snack",
    ingredients: &["Apple", "Almond Butter", "Carrot Sticks"],
};

pub fn fallback_for(meal_type: MealType) -> FallbackMeal {
    match meal_type {
        MealType::Breakfast => BREAKFAST_FALLBACK,
        MealType::Lunch => LUNCH_FALLBACK,
        MealType::Dinner => DINNER_FALLBACK,
        MealType::Snack => SNACK_FALLBACK,
    }
}

/// Custom meal for `meal_type`, without recipe or nutrition.
pub fn fallback_meal(date: impl Into<NaiveDateTime>, meal_type: MealType, servings: u32) -> Meal {
    let fallback = fallback_for(meal_type);

    Meal::custom(
        date,
        meal_type,
        fallback.name,
        fallback.ingredients.iter().map(|i| i.to_string()).collect(),
        servings,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_fallback_meal_per_slot() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 22)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let meal = fallback_meal(date, MealType::Lunch, 3);

        assert!(meal.is_fallback());
        assert_eq!(meal.recipe_name, "Fresh Salad with Protein");
        assert_eq!(
            meal.custom_meal.as_deref(),
            Some("Fresh Salad with Protein")
        );
        assert_eq!(
            meal.ingredients,
            vec!["Mixed Greens", "Grilled Chicken", "Cherry Tomatoes"]
        );
        assert_eq!(meal.servings, 3);
        assert_eq!(meal.meal_type, MealType::Lunch);
        assert_eq!(meal.date, date);
    }

    #[test]
    fn test_every_slot_has_distinct_fallback() {
        let names: std::collections::HashSet<&str> = [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ]
        .into_iter()
        .map(|meal_type| fallback_for(meal_type).name)
        .collect();

        assert_eq!(names.len(), 4);
        assert!(names.contains("Balanced Dinner Plate"));
        assert!(names.contains("Nutritious Snack"));
        assert!(names.contains("Healthy Breakfast Bowl"));
    }
}
