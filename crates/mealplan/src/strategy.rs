use mealwise_recipe::Recipe;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{AutoFillPreferences, score_recipe};

/// Picks one recipe for a slot out of already filtered candidates.
///
/// Returning `None` means the slot gets a fallback meal.
pub trait SelectionStrategy {
    fn select<'a>(
        &mut self,
        candidates: &[&'a Recipe],
        preferences: &AutoFillPreferences,
    ) -> Option<&'a Recipe>;
}

/// Highest score wins, ties keep catalog order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoredStrategy;

impl SelectionStrategy for ScoredStrategy {
    fn select<'a>(
        &mut self,
        candidates: &[&'a Recipe],
        preferences: &AutoFillPreferences,
    ) -> Option<&'a Recipe> {
        let mut scored: Vec<(f64, &'a Recipe)> = candidates
            .iter()
            .map(|recipe| (score_recipe(recipe, preferences), *recipe))
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        scored.first().map(|(_, recipe)| *recipe)
    }
}

/// Uniform pick among candidates.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStrategy for RandomStrategy {
    fn select<'a>(
        &mut self,
        candidates: &[&'a Recipe],
        _preferences: &AutoFillPreferences,
    ) -> Option<&'a Recipe> {
        candidates.choose(&mut self.rng).copied()
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    #[default]
    Scored,
    Random,
}

impl SelectionPolicy {
    /// Builds the strategy for this policy. `seed` only affects `Random`.
    pub fn strategy(self, seed: Option<u64>) -> Box<dyn SelectionStrategy> {
        match self {
            SelectionPolicy::Scored => Box::new(ScoredStrategy),
            SelectionPolicy::Random => match seed {
                Some(seed) => Box::new(RandomStrategy::seeded(seed)),
                None => Box::new(RandomStrategy::new()),
            },
        }
    }
}
