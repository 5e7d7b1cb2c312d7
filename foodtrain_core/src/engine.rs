//! Day plan orchestrator.
//!
//! Composes schedule, selector, nutrition, and menu matching into one
//! immutable plan record per calendar date. A plan that already exists is
//! returned untouched; regeneration requires explicit deletion first.
//!
//! Single logical writer assumed: two concurrent calls for the same date
//! could both observe "no plan" and both write. The store layer does not
//! guard this with a compare-and-set.

use crate::store::{keys, KvStore};
use crate::{
    history, menu, nutrition, rules, schedule, selector, DayPlan, Error, Menu, PlanContext,
    Result, UserProfile, Workout, SCHEMA_VERSION,
};
use chrono::{NaiveDate, Utc};

/// Reason recorded on plans for non-training days
pub const REST_REASON_SCHEDULE: &str = "rest day by schedule";

/// Build and persist the plan for `date`, or return the existing one.
///
/// Idempotent: the existence check runs first and a second call for the
/// same date is a read-only no-op.
pub fn generate_plan_if_needed<S: KvStore>(store: &S, date: NaiveDate) -> Result<DayPlan> {
    let plan_key = keys::day_plan(date);
    if let Some(existing) = store.get_json::<DayPlan>(&plan_key)? {
        tracing::debug!("Plan for {} already exists, skipping generation", date);
        return Ok(existing);
    }

    let profile: UserProfile = store
        .get_json(keys::PROFILE)?
        .ok_or_else(|| Error::MissingData("user profile".into()))?;
    let ruleset = rules::load_active_ruleset(store)?;
    let workouts: Vec<Workout> = store
        .get_json(keys::WORKOUT_CATALOG)?
        .ok_or_else(|| Error::MissingData("workout catalog".into()))?;
    let menus: Vec<Menu> = store
        .get_json(keys::MENU_CATALOG)?
        .ok_or_else(|| Error::MissingData("menu catalog".into()))?;

    let ctx = PlanContext {
        date,
        recent_plans: history::load_recent_plans(store, date, selector::HISTORY_WINDOW_DAYS)?,
    };

    let training = schedule::is_training_day(&profile, date);
    let (workout_id, load, rest_reason) = if training {
        let workout = selector::select_workout(&profile, &ruleset, &workouts, &ctx)?;
        tracing::info!(
            "{}: training day, workout '{}' (load {})",
            date,
            workout.id,
            workout.load
        );
        (Some(workout.id.clone()), workout.load, None)
    } else {
        tracing::info!("{}: rest day", date);
        (None, 0, Some(REST_REASON_SCHEDULE.to_string()))
    };

    let targets = nutrition::compute_targets(&ruleset, &profile, load)?;
    let selected_menu = menu::select_menu(&menus, targets.carb_label, &targets)?;

    let plan = DayPlan {
        schema_version: SCHEMA_VERSION,
        date,
        workout_id,
        menu_id: selected_menu.id.clone(),
        training_load_score: load,
        is_training_day: training,
        rest_reason,
        targets,
        created_at: Utc::now(),
    };

    store.set_json(&plan_key, &plan)?;
    insert_into_index(store, date)?;

    Ok(plan)
}

/// Delete the plan for `date` and build a fresh one.
///
/// This is the only sanctioned path to replacing an existing plan.
pub fn regenerate_plan<S: KvStore>(store: &S, date: NaiveDate) -> Result<DayPlan> {
    store.remove(&keys::day_plan(date))?;
    tracing::info!("Regenerating plan for {}", date);
    generate_plan_if_needed(store, date)
}

/// Insert `date` into the sorted day index, skipping duplicates
fn insert_into_index<S: KvStore>(store: &S, date: NaiveDate) -> Result<()> {
    let mut index: Vec<NaiveDate> = store.get_json(keys::DAY_INDEX)?.unwrap_or_default();
    if let Err(position) = index.binary_search(&date) {
        index.insert(position, date);
        store.set_json(keys::DAY_INDEX, &index)?;
    }
    Ok(())
}
