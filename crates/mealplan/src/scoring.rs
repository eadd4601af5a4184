use mealwise_recipe::Recipe;
use serde::Serialize;

use crate::AutoFillPreferences;

pub const RATING_WEIGHT: f64 = 2.0;
pub const MAX_POPULARITY: f64 = 5.0;
pub const REVIEWS_PER_POPULARITY_POINT: f64 = 1000.0;
pub const TIME_EFFICIENCY_CEILING: f64 = 10.0;
pub const MINUTES_PER_TIME_POINT: f64 = 5.0;
pub const COST_EFFICIENCY_CEILING: f64 = 10.0;
pub const DOLLARS_PER_COST_POINT: f64 = 2.0;

/// Individual desirability terms for a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub rating: f64,
    pub popularity: f64,
    pub time_efficiency: f64,
    pub cost_efficiency: f64,
    pub nutrition_balance: f64,
}

impl ScoreBreakdown {
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self {
            rating: recipe.rating * RATING_WEIGHT,
            popularity: (recipe.review_count as f64 / REVIEWS_PER_POPULARITY_POINT)
                .min(MAX_POPULARITY),
            time_efficiency: (TIME_EFFICIENCY_CEILING
                - recipe.total_time() as f64 / MINUTES_PER_TIME_POINT)
                .max(0.0),
            cost_efficiency: (COST_EFFICIENCY_CEILING
                - recipe.estimated_cost / DOLLARS_PER_COST_POINT)
                .max(0.0),
            nutrition_balance: nutrition_balance(recipe),
        }
    }

    pub fn total(&self) -> f64 {
        self.rating
            + self.popularity
            + self.time_efficiency
            + self.cost_efficiency
            + self.nutrition_balance
    }
}

/// Weighted desirability of a recipe; higher is better.
pub fn score_recipe(recipe: &Recipe, _preferences: &AutoFillPreferences) -> f64 {
    ScoreBreakdown::for_recipe(recipe).total()
}

/// Macro balance bonus in `0.0..=5.0`.
///
/// Protein amount earns up to 2, fiber 1, and each macro whose calorie share sits in
/// its healthy band earns 1. Ratio bonuses need non-zero calories.
pub fn nutrition_balance(recipe: &Recipe) -> f64 {
    let nutrition = &recipe.nutrition;
    let mut score = 0.0;

    if nutrition.protein >= 20.0 {
        score += 2.0;
    } else if nutrition.protein >= 10.0 {
        score += 1.0;
    }

    if nutrition.fiber.unwrap_or_default() >= 5.0 {
        score += 1.0;
    }

    if let Some((protein, carbs, fat)) = nutrition.macro_ratios() {
        if (0.15..=0.35).contains(&protein) {
            score += 1.0;
        }
        if (0.30..=0.65).contains(&carbs) {
            score += 1.0;
        }
        if (0.20..=0.40).contains(&fat) {
            score += 1.0;
        }
    }

    score
}
