//! Workout selector.
//!
//! Selection happens in two stages: a hard eligibility filter
//! (equipment match, no injury conflicts), then deterministic penalty
//! scoring against recent history. Penalties are soft disqualifications;
//! when every candidate repeats recent focus the focus penalty is waived so
//! a non-empty eligible set always yields a selection.

use crate::{
    calendar, Error, Goal, PlanContext, Result, RuleSet, UserProfile, Workout, WorkoutGoal,
};
use std::collections::BTreeSet;

/// How many prior calendar dates the selector inspects
pub const HISTORY_WINDOW_DAYS: i64 = 14;

const FOCUS_REPEAT_PENALTY: u32 = 1000;
const HIGH_LOAD_STREAK_PENALTY: u32 = 2000;
const GOAL_MISMATCH_PENALTY: u32 = 10;
const FULL_BODY_REPEAT_PENALTY: u32 = 50;

const FULL_BODY_TAG: &str = "full_body";

/// Map the profile goal into the workout catalog's goal-tag space
pub fn normalize_goal(goal: Goal) -> WorkoutGoal {
    match goal {
        Goal::FatLoss => WorkoutGoal::FatLoss,
        Goal::Recomp => WorkoutGoal::Recomp,
        Goal::MuscleGain => WorkoutGoal::Strength,
    }
}

/// Select today's workout from the catalog.
///
/// Deterministic given identical inputs: ties resolve by ascending
/// (penalty, workout id).
pub fn select_workout<'a>(
    profile: &UserProfile,
    rules: &RuleSet,
    catalog: &'a [Workout],
    ctx: &PlanContext,
) -> Result<&'a Workout> {
    let eligible: Vec<&Workout> = catalog
        .iter()
        .filter(|w| is_eligible(w, profile))
        .collect();

    if eligible.is_empty() {
        return Err(Error::NoEligibleWorkout(format!(
            "no catalog workout matches equipment '{}' without conflicting with injuries {:?}",
            profile.equipment.as_str(),
            profile.injuries
        )));
    }

    let streak = high_load_streak(ctx, rules);
    let recent_focus = recent_focus_tags(ctx, catalog, rules);
    let target_goal = normalize_goal(profile.goal);

    tracing::debug!(
        "Scoring {} eligible workouts (high-load streak {}, recent focus {:?})",
        eligible.len(),
        streak,
        recent_focus
    );

    let mut scored: Vec<(u32, &Workout)> = eligible
        .into_iter()
        .map(|w| (penalty(w, target_goal, &recent_focus, streak, rules), w))
        .collect();

    // When every candidate repeats recent focus, waive the focus penalty so
    // the streak and goal penalties still decide.
    let min_penalty = scored.iter().map(|(p, _)| *p).min().unwrap_or(0);
    if min_penalty >= FOCUS_REPEAT_PENALTY {
        tracing::debug!("All candidates repeat recent focus, relaxing rotation rule");
        for entry in &mut scored {
            if entry.0 >= FOCUS_REPEAT_PENALTY {
                entry.0 -= FOCUS_REPEAT_PENALTY;
            }
        }
    }

    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));

    let (best_penalty, best) = scored[0];
    tracing::info!("Selected workout '{}' with penalty {}", best.id, best_penalty);
    Ok(best)
}

/// Hard eligibility: exact equipment match and no injury-tag intersection
fn is_eligible(workout: &Workout, profile: &UserProfile) -> bool {
    workout.equipment == profile.equipment
        && workout.avoid_if_injuries.is_disjoint(&profile.injuries)
}

/// Count the run of consecutive high-load training days ending yesterday.
///
/// A rest day, a sub-threshold day, or a date with no plan at all ends the
/// streak.
fn high_load_streak(ctx: &PlanContext, rules: &RuleSet) -> u32 {
    let threshold = rules.workout_selection.high_load_threshold;
    let mut streak = 0;

    for offset in 1..=HISTORY_WINDOW_DAYS {
        let day = calendar::offset_days(ctx.date, -offset);
        let Some(plan) = ctx.recent_plans.iter().find(|p| p.date == day) else {
            break;
        };
        if !plan.is_training_day || plan.training_load_score < threshold {
            break;
        }
        streak += 1;
    }

    streak
}

/// Union of focus tags used within the last `avoid_same_focus_days` calendar
/// days. Rest days and unknown workout ids contribute nothing.
fn recent_focus_tags(
    ctx: &PlanContext,
    catalog: &[Workout],
    rules: &RuleSet,
) -> BTreeSet<String> {
    let window = rules.workout_selection.avoid_same_focus_days as i64;
    let cutoff = calendar::offset_days(ctx.date, -window);

    let mut focus = BTreeSet::new();
    for plan in &ctx.recent_plans {
        if plan.date < cutoff || plan.date >= ctx.date {
            continue;
        }
        let Some(workout_id) = plan.workout_id.as_deref() else {
            continue;
        };
        let Some(workout) = catalog.iter().find(|w| w.id == workout_id) else {
            continue;
        };
        focus.extend(workout.focus.iter().cloned());
    }
    focus
}

fn penalty(
    workout: &Workout,
    target_goal: WorkoutGoal,
    recent_focus: &BTreeSet<String>,
    streak: u32,
    rules: &RuleSet,
) -> u32 {
    let selection = &rules.workout_selection;
    let mut score = 0;

    if workout.focus.iter().any(|tag| recent_focus.contains(tag)) {
        score += FOCUS_REPEAT_PENALTY;
    }
    if workout.load >= selection.high_load_threshold && streak >= selection.max_high_load_in_row {
        score += HIGH_LOAD_STREAK_PENALTY;
    }
    if workout.goal != target_goal {
        score += GOAL_MISMATCH_PENALTY;
    }
    if workout.focus.contains(FULL_BODY_TAG) && recent_focus.contains(FULL_BODY_TAG) {
        score += FULL_BODY_REPEAT_PENALTY;
    }

    score
}
