use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_MAX_COOKING_TIME: u32 = 60;
pub const DEFAULT_BUDGET_PER_MEAL: f64 = 15.0;
pub const DEFAULT_SERVINGS_PER_MEAL: u32 = 2;
pub const DEFAULT_MEALS_PER_DAY: u8 = 3;

/// Caller supplied constraints for auto-filling a week.
#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoFillPreferences {
    pub dietary_restrictions: Vec<String>,
    #[validate(range(min = 1))]
    pub max_cooking_time: u32,
    #[validate(range(exclusive_min = 0.0))]
    pub budget_per_meal: f64,
    pub preferred_cuisines: Vec<String>,
    #[validate(range(min = 1))]
    pub servings_per_meal: u32,
}

impl Default for AutoFillPreferences {
    fn default() -> Self {
        Self {
            dietary_restrictions: Vec::new(),
            max_cooking_time: DEFAULT_MAX_COOKING_TIME,
            budget_per_meal: DEFAULT_BUDGET_PER_MEAL,
            preferred_cuisines: Vec::new(),
            servings_per_meal: DEFAULT_SERVINGS_PER_MEAL,
        }
    }
}

impl AutoFillPreferences {
    pub fn validated(self) -> mealwise_shared::Result<Self> {
        self.validate()?;

        Ok(self)
    }

    pub fn with_dietary_restrictions<S: Into<String>>(
        mut self,
        restrictions: impl IntoIterator<Item = S>,
    ) -> Self {
        self.dietary_restrictions = restrictions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preferred_cuisines<S: Into<String>>(
        mut self,
        cuisines: impl IntoIterator<Item = S>,
    ) -> Self {
        self.preferred_cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_cooking_time(mut self, minutes: u32) -> Self {
        self.max_cooking_time = minutes;
        self
    }

    pub fn with_budget_per_meal(mut self, budget: f64) -> Self {
        self.budget_per_meal = budget;
        self
    }

    pub fn with_servings_per_meal(mut self, servings: u32) -> Self {
        self.servings_per_meal = servings;
        self
    }
}

/// One week generation request.
#[derive(Validate, Clone, Debug, PartialEq)]
pub struct PlanRequest {
    pub week_start: NaiveDate,
    #[validate(range(min = 2, max = 4))]
    pub meals_per_day: u8,
    #[validate(nested)]
    pub preferences: AutoFillPreferences,
    pub replace_existing: bool,
    #[validate(range(exclusive_min = 0.0))]
    pub weekly_budget: Option<f64>,
}

impl PlanRequest {
    pub fn new(week_start: NaiveDate, meals_per_day: u8, preferences: AutoFillPreferences) -> Self {
        Self {
            week_start,
            meals_per_day,
            preferences,
            replace_existing: false,
            weekly_budget: None,
        }
    }

    pub fn replace_existing(mut self, replace: bool) -> Self {
        self.replace_existing = replace;
        self
    }

    pub fn weekly_budget(mut self, budget: impl Into<Option<f64>>) -> Self {
        self.weekly_budget = budget.into();
        self
    }

    pub fn validated(self) -> mealwise_shared::Result<Self> {
        self.validate()?;

        Ok(self)
    }

    /// Budget every slot is filtered against.
    ///
    /// A weekly budget is spread evenly over the generated slots (`slot_count`, which
    /// clamps `meals_per_day`), otherwise the per meal budget from the preferences applies.
    pub fn per_meal_budget(&self) -> f64 {
        match self.weekly_budget {
            Some(weekly) => weekly / self.slot_count() as f64,
            None => self.preferences.budget_per_meal,
        }
    }

    pub fn slot_count(&self) -> usize {
        7 * crate::slot_types(self.meals_per_day).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 20).unwrap()
    }

    #[test]
    fn test_defaults_match_construction_values() {
        let preferences = AutoFillPreferences::default();

        assert_eq!(preferences.max_cooking_time, 60);
        assert_eq!(preferences.budget_per_meal, 15.0);
        assert_eq!(preferences.servings_per_meal, 2);
        assert!(preferences.dietary_restrictions.is_empty());
        assert!(preferences.validated().is_ok());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let result = AutoFillPreferences::default()
            .with_budget_per_meal(0.0)
            .validated();

        assert!(matches!(result, Err(mealwise_shared::Error::Validate(_))));
    }

    #[test]
    fn test_zero_servings_and_time_rejected() {
        assert!(
            AutoFillPreferences::default()
                .with_servings_per_meal(0)
                .validated()
                .is_err()
        );
        assert!(
            AutoFillPreferences::default()
                .with_max_cooking_time(0)
                .validated()
                .is_err()
        );
    }

    #[test]
    fn test_meals_per_day_must_be_between_two_and_four() {
        for meals in [2, 3, 4] {
            assert!(
                PlanRequest::new(monday(), meals, AutoFillPreferences::default())
                    .validated()
                    .is_ok(),
                "{} meals per day should be accepted",
                meals
            );
        }

        for meals in [0, 1, 5] {
            assert!(
                PlanRequest::new(monday(), meals, AutoFillPreferences::default())
                    .validated()
                    .is_err(),
                "{} meals per day should be rejected",
                meals
            );
        }
    }

    #[test]
    fn test_nested_preferences_are_validated() {
        let request = PlanRequest::new(
            monday(),
            3,
            AutoFillPreferences::default().with_servings_per_meal(0),
        );

        assert!(request.validated().is_err());
    }

    #[test]
    fn test_per_meal_budget_from_weekly_budget() {
        let request = PlanRequest::new(monday(), 3, AutoFillPreferences::default());
        assert_eq!(request.per_meal_budget(), 15.0);

        let request = request.weekly_budget(210.0);
        assert!((request.per_meal_budget() - 10.0).abs() < 1e-9);

        assert!(
            PlanRequest::new(monday(), 3, AutoFillPreferences::default())
                .weekly_budget(-5.0)
                .validated()
                .is_err()
        );
    }

    #[test]
    fn test_per_meal_budget_follows_clamped_slots() {
        let preferences = AutoFillPreferences::default();

        let one = PlanRequest::new(monday(), 1, preferences.clone()).weekly_budget(140.0);
        assert_eq!(
            one.slot_count(),
            14,
            "One meal a day still generates two slots"
        );
        assert!((one.per_meal_budget() - 10.0).abs() < 1e-9);

        let five = PlanRequest::new(monday(), 5, preferences).weekly_budget(280.0);
        assert_eq!(five.slot_count(), 28);
        assert!((five.per_meal_budget() - 10.0).abs() < 1e-9);
    }
}
