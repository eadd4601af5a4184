use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

pub const DAYS_PER_WEEK: u64 = 7;

/// Strips the time of day, keeping calendar-day granularity.
pub fn start_of_day(at: NaiveDateTime) -> NaiveDateTime {
    at.date().and_time(NaiveTime::MIN)
}

pub fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// The seven consecutive days starting at `start`.
pub fn week_days(start: NaiveDate) -> Vec<NaiveDate> {
    (0..DAYS_PER_WEEK)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}
