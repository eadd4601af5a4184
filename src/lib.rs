pub mod config;
pub mod observability;
pub mod store;

pub use config::Config;
pub use store::JsonFileStore;

use mealwise_recipe::RecipeCatalog;

/// Catalog named by the storage config, or the bundled one.
pub fn load_catalog(config: &Config) -> mealwise_shared::Result<RecipeCatalog> {
    match &config.storage.catalog_path {
        Some(path) => RecipeCatalog::from_path(path),
        None => RecipeCatalog::builtin(),
    }
}
