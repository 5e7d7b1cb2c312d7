//! Training-day determination.
//!
//! A static weekly schedule derived from the profile's days-per-week
//! preference. The table spreads training days evenly across the week; it
//! does not adapt to adherence history.

use crate::{calendar, UserProfile};
use chrono::NaiveDate;

/// Days per week assumed when the profile leaves the preference unset
pub const DEFAULT_TRAINING_DAYS: u8 = 4;

/// Training weekdays (0 = Sunday .. 6 = Saturday) for each days-per-week count
fn weekday_table(days: u8) -> &'static [u8] {
    match days {
        1 => &[1],
        2 => &[1, 4],
        3 => &[1, 3, 5],
        4 => &[1, 2, 4, 6],
        5 => &[1, 2, 3, 5, 6],
        6 => &[1, 2, 3, 4, 5, 6],
        _ => &[0, 1, 2, 3, 4, 5, 6],
    }
}

/// Effective days-per-week for a profile, clamped to [1, 7]
pub fn training_days_per_week(profile: &UserProfile) -> u8 {
    profile
        .training_days_per_week
        .unwrap_or(DEFAULT_TRAINING_DAYS)
        .clamp(1, 7)
}

/// Whether `date` is a scheduled training day for this profile
pub fn is_training_day(profile: &UserProfile, date: NaiveDate) -> bool {
    let days = training_days_per_week(profile);
    weekday_table(days).contains(&calendar::weekday_number(date))
}
