use std::collections::HashSet;

use mealwise_recipe::Recipe;

/// Tracks recipe names already assigned during one generation pass.
///
/// Matching is by exact recipe name, so two catalog entries sharing a name count as
/// the same recipe. A guard lives for a single pass; history from earlier plans is not
/// consulted.
#[derive(Debug, Clone, Default)]
pub struct VarietyGuard {
    used_names: HashSet<String>,
}

impl VarietyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_used(&mut self, name: &str) {
        self.used_names.insert(name.to_owned());
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used_names.contains(name)
    }

    pub fn used_count(&self) -> usize {
        self.used_names.len()
    }

    pub fn exclude_used<'a>(&self, candidates: Vec<&'a Recipe>) -> Vec<&'a Recipe> {
        candidates
            .into_iter()
            .filter(|recipe| !self.is_used(&recipe.name))
            .collect()
    }
}
