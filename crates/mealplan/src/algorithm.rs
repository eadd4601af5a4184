use chrono::NaiveDate;
use mealwise_recipe::{Recipe, RecipeSource};
use mealwise_shared::{MealType, day_start, week_days};
use serde::Serialize;

use crate::{
    Meal, MealCalendar, PlanRequest, SelectionPolicy, SelectionStrategy, VarietyGuard,
    fallback_meal, filter_recipes, matches_slot, slot_types,
};

/// Outcome of one generation pass, not yet written to a calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPlan {
    pub week_start: NaiveDate,
    pub meals: Vec<Meal>,
    /// Slots filled with a generic meal because no recipe qualified.
    pub fallback_count: usize,
    /// Slots left alone because the calendar already had a meal of that type.
    pub skipped: Vec<(NaiveDate, MealType)>,
    pub replace_existing: bool,
}

impl GeneratedPlan {
    pub fn meals_on(&self, day: NaiveDate) -> impl Iterator<Item = &Meal> {
        self.meals.iter().filter(move |meal| meal.day() == day)
    }

    /// Cost of the recipe meals at their planned servings.
    pub fn total_cost(&self) -> f64 {
        self.meals
            .iter()
            .filter_map(|meal| meal.recipe.as_ref())
            .map(|recipe| recipe.estimated_cost)
            .sum()
    }
}

/// Week plan generator
///
/// Fills every slot of a week in day order, then slot order within the day. For each
/// slot the catalog is narrowed to recipes that pass the preference filter, fit the slot
/// type and were not picked earlier in the same pass. The strategy then picks one, which
/// is scaled to the requested servings. When nothing is left a fallback meal is used, so
/// generation never fails.
pub struct MealPlanGenerator<'a> {
    source: &'a dyn RecipeSource,
    strategy: Box<dyn SelectionStrategy>,
}

impl<'a> MealPlanGenerator<'a> {
    pub fn new(source: &'a dyn RecipeSource, strategy: Box<dyn SelectionStrategy>) -> Self {
        Self { source, strategy }
    }

    pub fn with_policy(
        source: &'a dyn RecipeSource,
        policy: SelectionPolicy,
        seed: Option<u64>,
    ) -> Self {
        Self::new(source, policy.strategy(seed))
    }

    /// Builds a plan for `request` without touching `calendar`.
    #[tracing::instrument(
        skip_all,
        fields(week_start = %request.week_start, meals_per_day = request.meals_per_day)
    )]
    pub fn generate(&mut self, request: &PlanRequest, calendar: &MealCalendar) -> GeneratedPlan {
        let preferences = &request.preferences;
        let servings = preferences.servings_per_meal;
        let candidates = filter_recipes(
            self.source.recipes(),
            preferences,
            request.per_meal_budget(),
        );

        tracing::debug!(
            catalog = self.source.recipes().len(),
            candidates = candidates.len(),
            "Filtered catalog"
        );

        let mut guard = VarietyGuard::new();
        let mut meals = Vec::with_capacity(request.slot_count());
        let mut skipped = Vec::new();
        let mut fallback_count = 0;

        for day in week_days(request.week_start) {
            for &meal_type in slot_types(request.meals_per_day) {
                if !request.replace_existing && calendar.has_meal(day, meal_type) {
                    tracing::debug!(%day, %meal_type, "Slot already planned, skipping");
                    skipped.push((day, meal_type));
                    continue;
                }

                let slot_candidates: Vec<&Recipe> = guard.exclude_used(
                    candidates
                        .iter()
                        .copied()
                        .filter(|recipe| matches_slot(recipe, meal_type))
                        .collect(),
                );

                let meal = match self.strategy.select(&slot_candidates, preferences) {
                    Some(recipe) => {
                        tracing::debug!(
                            %day,
                            %meal_type,
                            recipe = %recipe.name,
                            candidates = slot_candidates.len(),
                            "Selected recipe"
                        );
                        guard.mark_used(&recipe.name);
                        Meal::from_recipe(
                            day_start(day),
                            meal_type,
                            recipe.scaled(servings),
                            servings,
                        )
                    }
                    None => {
                        tracing::warn!(
                            %day,
                            %meal_type,
                            "No recipe fits slot, using fallback meal"
                        );
                        fallback_count += 1;
                        fallback_meal(day_start(day), meal_type, servings)
                    }
                };

                meals.push(meal);
            }
        }

        tracing::info!(
            meals = meals.len(),
            fallback_count,
            skipped = skipped.len(),
            distinct_recipes = guard.used_count(),
            "Generated meal plan"
        );

        GeneratedPlan {
            week_start: request.week_start,
            meals,
            fallback_count,
            skipped,
            replace_existing: request.replace_existing,
        }
    }

    pub fn generate_and_commit(
        &mut self,
        request: &PlanRequest,
        calendar: &mut MealCalendar,
    ) -> GeneratedPlan {
        let plan = self.generate(request, calendar);
        commit(&plan, calendar);

        plan
    }
}

/// Writes a plan into `calendar`, clearing its week first when the plan replaces existing
/// meals. Returns the stored meal ids in plan order.
pub fn commit(plan: &GeneratedPlan, calendar: &mut MealCalendar) -> Vec<String> {
    if plan.replace_existing {
        for day in week_days(plan.week_start) {
            calendar.clear_day(day);
        }
    }

    plan.meals
        .iter()
        .map(|meal| calendar.add_meal(meal.clone()))
        .collect()
}
