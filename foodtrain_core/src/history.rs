//! History provider: recent prior day plans.
//!
//! Walks backward day-by-day from the target date reading plan records from
//! the store. Malformed records are skipped and counted, never fatal; a
//! day with no record simply contributes nothing.

use crate::store::{keys, KvStore};
use crate::{calendar, DayPlan, Result};
use chrono::NaiveDate;

/// Load prior plans for `date - 1` back through `date - lookback_days`,
/// newest first
pub fn load_recent_plans<S: KvStore>(
    store: &S,
    date: NaiveDate,
    lookback_days: i64,
) -> Result<Vec<DayPlan>> {
    let mut plans = Vec::new();
    let mut skipped = 0usize;

    for offset in 1..=lookback_days {
        let day = calendar::offset_days(date, -offset);
        let key = keys::day_plan(day);

        let Some(raw) = store.get(&key)? else {
            continue;
        };

        match serde_json::from_str::<DayPlan>(&raw) {
            Ok(plan) => plans.push(plan),
            Err(e) => {
                skipped += 1;
                tracing::warn!("Skipping malformed day plan at '{}': {}", key, e);
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(
            "Skipped {} malformed day plan record(s) in the last {} days",
            skipped,
            lookback_days
        );
    }
    tracing::debug!(
        "Loaded {} prior plans from the last {} days",
        plans.len(),
        lookback_days
    );

    Ok(plans)
}
