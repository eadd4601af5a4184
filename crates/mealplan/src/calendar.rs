use std::collections::BTreeMap;

use chrono::NaiveDate;
use mealwise_shared::{MealType, start_of_day, week_days};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::Meal;

/// Meals keyed by day.
///
/// Every meal stored under a day has its `date` at that day's midnight, ids are unique
/// within a day and days without meals are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<NaiveDate, Vec<Meal>>",
    into = "BTreeMap<NaiveDate, Vec<Meal>>"
)]
pub struct MealCalendar {
    days: BTreeMap<NaiveDate, Vec<Meal>>,
}

impl MealCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `meal` under its day and returns the id it was stored with.
    ///
    /// A meal whose id is already present that day gets a fresh id.
    pub fn add_meal(&mut self, mut meal: Meal) -> String {
        let day = meal.day();
        meal.date = start_of_day(meal.date);

        let meals = self.days.entry(day).or_default();
        if meals.iter().any(|existing| existing.id == meal.id) {
            let fresh = Ulid::new().to_string();
            tracing::debug!(id = %meal.id, %fresh, %day, "Duplicate meal id, assigning a new one");
            meal.id = fresh;
        }

        let id = meal.id.to_owned();
        meals.push(meal);

        id
    }

    pub fn remove_meal(&mut self, meal: &Meal) -> Option<Meal> {
        self.remove(meal.day(), &meal.id)
    }

    pub fn remove(&mut self, day: NaiveDate, id: &str) -> Option<Meal> {
        let meals = self.days.get_mut(&day)?;
        let position = meals.iter().position(|meal| meal.id == id)?;
        let removed = meals.remove(position);

        if meals.is_empty() {
            self.days.remove(&day);
        }

        Some(removed)
    }

    /// Replaces the meal with the same id on the meal's own day.
    ///
    /// Meals on other days are left alone, even when they share the id.
    pub fn update_meal(&mut self, meal: Meal) -> String {
        self.remove(meal.day(), &meal.id);

        self.add_meal(meal)
    }

    /// Moves the meal stored under `from` with the same id to the day of `meal`.
    ///
    /// Returns `None` and leaves the calendar untouched when `from` has no such meal.
    pub fn move_meal(&mut self, from: NaiveDate, meal: Meal) -> Option<String> {
        self.remove(from, &meal.id)?;

        Some(self.add_meal(meal))
    }

    pub fn meals(&self, day: NaiveDate) -> &[Meal] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Meals of the seven days from `start`, day by day in insertion order.
    pub fn meals_for_week(&self, start: NaiveDate) -> Vec<&Meal> {
        week_days(start)
            .into_iter()
            .flat_map(|day| self.meals(day))
            .collect()
    }

    pub fn find(&self, day: NaiveDate, id: &str) -> Option<&Meal> {
        self.meals(day).iter().find(|meal| meal.id == id)
    }

    pub fn has_meal(&self, day: NaiveDate, meal_type: MealType) -> bool {
        self.meals(day)
            .iter()
            .any(|meal| meal.meal_type == meal_type)
    }

    pub fn clear_day(&mut self, day: NaiveDate) -> Vec<Meal> {
        self.days.remove(&day).unwrap_or_default()
    }

    /// Returns false when no meal with `id` exists on `day`.
    pub fn set_completed(&mut self, day: NaiveDate, id: &str, completed: bool) -> bool {
        let Some(meal) = self
            .days
            .get_mut(&day)
            .and_then(|meals| meals.iter_mut().find(|meal| meal.id == id))
        else {
            return false;
        };

        meal.completed = completed;
        true
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<Meal>)> {
        self.days.iter()
    }

    /// Total number of meals across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl From<BTreeMap<NaiveDate, Vec<Meal>>> for MealCalendar {
    fn from(days: BTreeMap<NaiveDate, Vec<Meal>>) -> Self {
        let mut calendar = MealCalendar::new();
        for meal in days.into_values().flatten() {
            calendar.add_meal(meal);
        }
        calendar
    }
}

impl From<MealCalendar> for BTreeMap<NaiveDate, Vec<Meal>> {
    fn from(calendar: MealCalendar) -> Self {
        calendar.days
    }
}
