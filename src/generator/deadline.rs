use chrono::{Days, NaiveDate};

use crate::generator::random::RandomSource;

pub const MIN_DAYS_AHEAD: u32 = 1;
pub const MAX_DAYS_AHEAD: u32 = 10;

/// Random deadline between one and ten days after `today`, at a random
/// second of that day, formatted as `YYYY-MM-DDTHH:MM:SS.000Z`.
pub fn generate_deadline(rng: &mut impl RandomSource, today: NaiveDate) -> String {
    let days_ahead = rng.next_in_range(MIN_DAYS_AHEAD, MAX_DAYS_AHEAD);
    let day = today
        .checked_add_days(Days::new(u64::from(days_ahead)))
        .unwrap_or(NaiveDate::MAX);

    let hour = rng.next_in_range(0, 23);
    let minute = rng.next_in_range(0, 59);
    let second = rng.next_in_range(0, 59);

    format!(
        "{}T{:02}:{:02}:{:02}.000Z",
        day.format("%Y-%m-%d"),
        hour,
        minute,
        second
    )
}
