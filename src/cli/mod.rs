pub mod generate;
pub mod grocery;
pub mod meal;
pub mod nutrition;
pub mod recipes;

use mealwise::{Config, JsonFileStore};

fn open_store(config: &Config) -> JsonFileStore {
    JsonFileStore::new(config.storage.calendar_path.clone())
}
