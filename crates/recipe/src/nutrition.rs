use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Nutrition for a whole recipe yield (all of its servings).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
}

/// Aggregated nutrition over a day or week has the same shape as a recipe's.
pub type NutritionData = NutritionInfo;

impl NutritionInfo {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Multiplies every field by `factor`, rounding calories to the nearest kcal.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            calories: (self.calories as f64 * factor).round().max(0.0) as u32,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber.map(|v| v * factor),
            sugar: self.sugar.map(|v| v * factor),
            sodium: self.sodium.map(|v| v * factor),
        }
    }

    /// Share of calories coming from protein, carbs and fat, `None` without calories.
    pub fn macro_ratios(&self) -> Option<(f64, f64, f64)> {
        if self.calories == 0 {
            return None;
        }

        let calories = self.calories as f64;
        Some((
            self.protein * KCAL_PER_GRAM_PROTEIN / calories,
            self.carbs * KCAL_PER_GRAM_CARBS / calories,
            self.fat * KCAL_PER_GRAM_FAT / calories,
        ))
    }
}

fn add_optional(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(a.unwrap_or_default() + b.unwrap_or_default()),
    }
}

impl Add for NutritionInfo {
    type Output = NutritionInfo;

    fn add(self, other: NutritionInfo) -> NutritionInfo {
        NutritionInfo {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: add_optional(self.fiber, other.fiber),
            sugar: add_optional(self.sugar, other.sugar),
            sodium: add_optional(self.sodium, other.sodium),
        }
    }
}

impl Sum for NutritionInfo {
    fn sum<I: Iterator<Item = NutritionInfo>>(iter: I) -> Self {
        iter.fold(NutritionInfo::zero(), Add::add)
    }
}
