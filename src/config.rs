use std::env;
use std::path::PathBuf;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealwise_mealplan::{
    AutoFillPreferences, DEFAULT_BUDGET_PER_MEAL, DEFAULT_MAX_COOKING_TIME,
    DEFAULT_MEALS_PER_DAY, DEFAULT_SERVINGS_PER_MEAL, NutritionGoals, SelectionPolicy,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub planner: PlannerConfig,
    #[serde(default)]
    pub preferences: AutoFillPreferences,
    #[serde(default)]
    pub goals: NutritionGoals,
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    pub meals_per_day: u8,
    #[serde(default)]
    pub policy: SelectionPolicy,
    /// Only used by the random policy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub weekly_budget: Option<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub calendar_path: PathBuf,
    /// Recipe catalog JSON file, the bundled catalog when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALWISE__PLANNER__MEALS_PER_DAY, etc.)
    /// 2. Config file given by path, `CONFIG_PATH`, or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("planner.meals_per_day", DEFAULT_MEALS_PER_DAY as i64)?
            .set_default("planner.policy", "scored")?
            .set_default(
                "preferences.max_cooking_time",
                DEFAULT_MAX_COOKING_TIME as i64,
            )?
            .set_default("preferences.budget_per_meal", DEFAULT_BUDGET_PER_MEAL)?
            .set_default(
                "preferences.servings_per_meal",
                DEFAULT_SERVINGS_PER_MEAL as i64,
            )?
            .set_default("storage.calendar_path", "data/calendar.json")?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALWISE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(2..=4).contains(&self.planner.meals_per_day) {
            return Err("Planner meals_per_day must be between 2 and 4".to_string());
        }
        if matches!(self.planner.weekly_budget, Some(budget) if budget <= 0.0) {
            return Err("Planner weekly_budget must be greater than 0".to_string());
        }
        if self.preferences.max_cooking_time == 0 {
            return Err("Preferences max_cooking_time must be at least 1 minute".to_string());
        }
        if self.preferences.budget_per_meal <= 0.0 {
            return Err("Preferences budget_per_meal must be greater than 0".to_string());
        }
        if self.preferences.servings_per_meal == 0 {
            return Err("Preferences servings_per_meal must be at least 1".to_string());
        }
        if self.storage.calendar_path.as_os_str().is_empty() {
            return Err("Storage calendar_path must not be empty".to_string());
        }
        Ok(())
    }
}
