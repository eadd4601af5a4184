use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use chrono::NaiveDate;
use mealwise_mealplan::MealCalendar;
use serde::Serialize;

use crate::{GroceryCategory, categorize};

/// Ingredient names needed for the week from `week_start`, bucketed by category name.
///
/// Names are deduplicated by exact string, so "Tomato" and "tomatoes" are both listed.
/// Within a category, names keep the order they first appear in the week.
pub fn grocery_list(
    calendar: &MealCalendar,
    week_start: NaiveDate,
) -> HashMap<String, Vec<String>> {
    let mut seen = HashSet::new();
    let mut list: HashMap<String, Vec<String>> = HashMap::new();

    for meal in calendar.meals_for_week(week_start) {
        for ingredient in &meal.ingredients {
            if !seen.insert(ingredient.as_str()) {
                continue;
            }

            list.entry(categorize(ingredient).to_string())
                .or_default()
                .push(ingredient.to_owned());
        }
    }

    tracing::debug!(
        %week_start,
        items = seen.len(),
        categories = list.len(),
        "Derived grocery list"
    );

    list
}

/// Grocery list ordered for display: categories in store order, names alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroceryList {
    week_start: Option<NaiveDate>,
    sections: BTreeMap<GroceryCategory, Vec<String>>,
}

impl GroceryList {
    pub fn for_week(calendar: &MealCalendar, week_start: NaiveDate) -> Self {
        let mut sections: BTreeMap<GroceryCategory, Vec<String>> = BTreeMap::new();

        for (category, mut names) in grocery_list(calendar, week_start) {
            names.sort_by_key(|name| name.to_lowercase());
            let category = category.parse().unwrap_or(GroceryCategory::Other);
            sections.entry(category).or_default().extend(names);
        }

        Self {
            week_start: Some(week_start),
            sections,
        }
    }

    pub fn get(&self, category: GroceryCategory) -> &[String] {
        self.sections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroceryCategory, &[String])> {
        self.sections
            .iter()
            .map(|(category, names)| (*category, names.as_slice()))
    }

    /// Number of distinct ingredient names.
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for GroceryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(week_start) = self.week_start {
            writeln!(f, "Grocery list for week of {}", week_start)?;
        }

        if self.is_empty() {
            return writeln!(f, "  (nothing to buy)");
        }

        for (category, names) in self.iter() {
            writeln!(f, "{} ({})", category, names.len())?;
            for name in names {
                writeln!(f, "  - {}", name)?;
            }
        }

        Ok(())
    }
}
