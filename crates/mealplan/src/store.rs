use std::sync::Mutex;

use mealwise_shared::bail;

use crate::MealCalendar;

/// Where a calendar lives between runs.
pub trait CalendarStore {
    fn load(&self) -> mealwise_shared::Result<MealCalendar>;

    fn save(&self, calendar: &MealCalendar) -> mealwise_shared::Result<()>;
}

/// In-process store, mostly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    calendar: Mutex<MealCalendar>,
}

impl MemoryStore {
    pub fn new(calendar: MealCalendar) -> Self {
        Self {
            calendar: Mutex::new(calendar),
        }
    }
}

impl CalendarStore for MemoryStore {
    fn load(&self) -> mealwise_shared::Result<MealCalendar> {
        let Ok(calendar) = self.calendar.lock() else {
            bail!("calendar store lock poisoned");
        };

        Ok(calendar.clone())
    }

    fn save(&self, calendar: &MealCalendar) -> mealwise_shared::Result<()> {
        let Ok(mut stored) = self.calendar.lock() else {
            bail!("calendar store lock poisoned");
        };

        *stored = calendar.clone();

        Ok(())
    }
}
