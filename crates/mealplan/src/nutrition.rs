use std::collections::BTreeMap;

use chrono::NaiveDate;
use mealwise_recipe::NutritionData;
use mealwise_shared::week_days;
use serde::{Deserialize, Serialize};

use crate::{Meal, MealCalendar};

/// Nutrition of one meal, the recipe totals scaled to the meal's servings.
///
/// Custom and fallback meals carry no nutrition and count as zero.
pub fn meal_nutrition(meal: &Meal) -> NutritionData {
    match &meal.recipe {
        Some(recipe) => recipe.nutrition.scale(recipe.scale_factor(meal.servings)),
        None => NutritionData::zero(),
    }
}

pub fn nutrition_for_day(calendar: &MealCalendar, day: NaiveDate) -> NutritionData {
    calendar.meals(day).iter().map(meal_nutrition).sum()
}

/// Daily totals for the days of the week starting at `start` that have meals.
pub fn nutrition_for_week(
    calendar: &MealCalendar,
    start: NaiveDate,
) -> BTreeMap<NaiveDate, NutritionData> {
    week_days(start)
        .into_iter()
        .filter(|day| !calendar.meals(*day).is_empty())
        .map(|day| (day, nutrition_for_day(calendar, day)))
        .collect()
}

/// Per field mean over the given days, zero when there are none.
pub fn weekly_average(days: &BTreeMap<NaiveDate, NutritionData>) -> NutritionData {
    if days.is_empty() {
        return NutritionData::zero();
    }

    let total: NutritionData = days.values().cloned().sum();
    total.scale(1.0 / days.len() as f64)
}

/// Daily nutrition targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionGoals {
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2000,
            protein: 50.0,
            carbs: 275.0,
            fat: 78.0,
        }
    }
}

/// Percent of each goal reached; 100.0 means the goal is met exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

fn percent_of(actual: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }

    actual / goal * 100.0
}

pub fn compare_to_goals(actual: &NutritionData, goals: &NutritionGoals) -> GoalProgress {
    GoalProgress {
        calories: percent_of(actual.calories as f64, goals.calories as f64),
        protein: percent_of(actual.protein, goals.protein),
        carbs: percent_of(actual.carbs, goals.carbs),
        fat: percent_of(actual.fat, goals.fat),
    }
}
