use std::path::Path;

use crate::{Recipe, RecipeCategory};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Read-only recipe queries the planner relies on.
///
/// Implementors only provide `recipes`; every query keeps catalog order and never fails.
pub trait RecipeSource {
    fn recipes(&self) -> &[Recipe];

    /// Case-insensitive substring match on name and description.
    fn search(&self, text: &str) -> Vec<&Recipe> {
        let needle = text.to_lowercase();

        self.recipes()
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn by_category(&self, category: RecipeCategory) -> Vec<&Recipe> {
        self.recipes()
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Case-insensitive substring match against the derived dietary tags.
    fn by_dietary_tag(&self, tag: &str) -> Vec<&Recipe> {
        let needle = tag.to_lowercase();

        self.recipes()
            .iter()
            .filter(|r| {
                r.dietary_tags()
                    .iter()
                    .any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    fn quick_meals(&self, max_minutes: u32) -> Vec<&Recipe> {
        self.recipes()
            .iter()
            .filter(|r| r.total_time() <= max_minutes)
            .collect()
    }

    fn budget_friendly(&self, max_cost: f64) -> Vec<&Recipe> {
        self.recipes()
            .iter()
            .filter(|r| r.estimated_cost <= max_cost)
            .collect()
    }

    fn top_rated(&self, min_rating: f64) -> Vec<&Recipe> {
        self.recipes()
            .iter()
            .filter(|r| r.rating >= min_rating)
            .collect()
    }

    fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes().iter().find(|r| r.name == name)
    }
}

/// In-memory catalog, fixed at construction.
#[derive(Clone, Debug, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn from_json(json: &str) -> mealwise_shared::Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;

        Ok(Self::new(recipes))
    }

    pub fn from_path(path: impl AsRef<Path>) -> mealwise_shared::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(mealwise_shared::Error::NotFound(format!(
                "recipe catalog {}",
                path.display()
            )));
        }

        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            recipes = catalog.len(),
            "Recipe catalog loaded"
        );

        Ok(catalog)
    }

    /// The starter catalog bundled with the crate.
    pub fn builtin() -> mealwise_shared::Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeSource for RecipeCatalog {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}
