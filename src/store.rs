use std::fs;
use std::path::{Path, PathBuf};

use mealwise_mealplan::{CalendarStore, MealCalendar};

/// Calendar persisted as a pretty printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CalendarStore for JsonFileStore {
    /// A missing file is an empty calendar.
    fn load(&self) -> mealwise_shared::Result<MealCalendar> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No calendar file yet");
            return Ok(MealCalendar::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let calendar: MealCalendar = serde_json::from_str(&content)?;

        tracing::debug!(path = %self.path.display(), meals = calendar.len(), "Loaded calendar");

        Ok(calendar)
    }

    fn save(&self, calendar: &MealCalendar) -> mealwise_shared::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(calendar)?)?;

        tracing::debug!(path = %self.path.display(), meals = calendar.len(), "Saved calendar");

        Ok(())
    }
}
