//! Core domain types for the Food & Train planning engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - User profile and goals
//! - Rulesets (nutrition and workout-rotation tunables)
//! - Workout and menu catalog entries
//! - Day plans and nutrition targets

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Schema version written into every persisted record
pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex, used for profile bookkeeping
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// The user's primary training goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Recomp,
}

/// Equipment class available to the user
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Gym,
    Home,
    Mixed,
}

impl Equipment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Gym => "gym",
            Equipment::Home => "home",
            Equipment::Mixed => "mixed",
        }
    }
}

/// Physiological and preference snapshot of the user.
///
/// Read-only to the planning engine; mutated only through the explicit
/// profile-update operation in [`crate::profile`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub schema_version: u32,
    pub sex: Sex,
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: f64,
    pub goal: Goal,
    pub equipment: Equipment,
    #[serde(default)]
    pub injuries: BTreeSet<String>,
    /// Defaults to 4 when absent
    #[serde(default)]
    pub training_days_per_week: Option<u8>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Ruleset Types
// ============================================================================

/// Coarse three-level carbohydrate bucket derived from training load
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CarbLabel {
    Low,
    Medium,
    High,
}

impl CarbLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarbLabel::Low => "low",
            CarbLabel::Medium => "medium",
            CarbLabel::High => "high",
        }
    }
}

/// Protein intake rules, grams per kilogram of body weight by goal
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProteinRules {
    pub g_per_kg: HashMap<Goal, f64>,
}

/// Carbohydrate rules: load thresholds for the label bands plus
/// grams per kilogram for each label
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CarbRules {
    /// Loads at or below this value fall in the low band
    pub low_max_load: u32,
    /// Loads at or below this value (and above `low_max_load`) are medium
    pub medium_max_load: u32,
    pub g_per_kg_by_label: HashMap<CarbLabel, f64>,
}

/// Fat intake rules; the minimum is always prescribed as-is
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FatRules {
    pub min_g_per_kg: f64,
}

/// Workout-rotation tunables
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutSelectionRules {
    /// Window (in calendar days) in which repeating a muscle focus is penalized
    pub avoid_same_focus_days: u32,
    /// Maximum allowed run of consecutive high-load training days
    pub max_high_load_in_row: u32,
    /// Loads at or above this value count as high-load days
    pub high_load_threshold: u32,
}

/// Versioned, static planning configuration.
///
/// Exactly one ruleset is active at a time, referenced by id through the
/// store's active-ruleset pointer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RuleSet {
    pub schema_version: u32,
    pub id: String,
    pub protein: ProteinRules,
    pub carbs: CarbRules,
    pub fat: FatRules,
    pub workout_selection: WorkoutSelectionRules,
}

// ============================================================================
// Catalog Types
// ============================================================================

/// Goal tag attached to workout catalog entries.
///
/// This is a different tag space than [`Goal`]: the catalog has no
/// `muscle_gain` tag, it uses `strength` instead.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutGoal {
    FatLoss,
    Recomp,
    Strength,
}

/// Type of workout session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Strength,
    Conditioning,
    Circuit,
    Mobility,
}

/// A workout catalog entry. Immutable catalog data, loaded once.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub goal: WorkoutGoal,
    pub kind: WorkoutKind,
    pub equipment: Equipment,
    /// Training-load score; numeric, monotonic severity
    pub load: u32,
    /// Muscle-focus tags (e.g. "legs", "back", "full_body")
    #[serde(default)]
    pub focus: BTreeSet<String>,
    /// Injury tags that exclude this workout
    #[serde(default)]
    pub avoid_if_injuries: BTreeSet<String>,
}

/// A menu catalog entry. Immutable catalog data, loaded once.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    pub kcal: u32,
    pub carb_bias: CarbLabel,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

// ============================================================================
// Plan Types
// ============================================================================

/// Macronutrient and calorie targets for one day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NutritionTargets {
    pub kcal: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub carb_label: CarbLabel,
}

/// The persisted artifact produced once per calendar date.
///
/// `workout_id` is `None` on rest days. An existing plan is never silently
/// overwritten; regeneration requires explicit deletion first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DayPlan {
    pub schema_version: u32,
    pub date: NaiveDate,
    pub workout_id: Option<String>,
    pub menu_id: String,
    pub training_load_score: u32,
    pub is_training_day: bool,
    #[serde(default)]
    pub rest_reason: Option<String>,
    pub targets: NutritionTargets,
    pub created_at: DateTime<Utc>,
}

/// Runtime context for the workout selector
#[derive(Clone, Debug)]
pub struct PlanContext {
    /// The date being planned
    pub date: NaiveDate,
    /// Prior day plans, newest first, bounded by the history window
    pub recent_plans: Vec<DayPlan>,
}
