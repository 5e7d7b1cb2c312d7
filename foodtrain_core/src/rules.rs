//! Ruleset lookup and validation.
//!
//! Exactly one ruleset is active at a time. The active id lives behind
//! `app:ruleset:active` and resolves to `app:ruleset:<id>`. Rulesets are
//! validated when loaded, never inside the algorithms.

use crate::store::{keys, KvStore};
use crate::{
    CarbLabel, CarbRules, Error, FatRules, Goal, ProteinRules, Result, RuleSet,
    WorkoutSelectionRules, SCHEMA_VERSION,
};
use std::collections::HashMap;

/// Id of the built-in ruleset seeded on first run
pub const DEFAULT_RULESET_ID: &str = "rules_v1";

impl RuleSet {
    /// Validate internal consistency. The carb bands must be strictly
    /// ordered; an equal or inverted pair would make the label function
    /// ambiguous, so loading fails fast instead.
    pub fn validate(&self) -> Result<()> {
        if self.carbs.low_max_load >= self.carbs.medium_max_load {
            return Err(Error::Config(format!(
                "ruleset '{}': carb thresholds must satisfy low_max_load < medium_max_load (got {} >= {})",
                self.id, self.carbs.low_max_load, self.carbs.medium_max_load
            )));
        }
        if self.fat.min_g_per_kg < 0.0 {
            return Err(Error::Config(format!(
                "ruleset '{}': fat.min_g_per_kg must not be negative",
                self.id
            )));
        }
        Ok(())
    }
}

/// Resolve and validate the active ruleset from the store
pub fn load_active_ruleset<S: KvStore>(store: &S) -> Result<RuleSet> {
    let id: String = store
        .get_json(keys::ACTIVE_RULESET)?
        .ok_or_else(|| Error::MissingData("active ruleset pointer".into()))?;

    let rules: RuleSet = store
        .get_json(&keys::ruleset(&id))?
        .ok_or_else(|| Error::MissingData(format!("ruleset '{}'", id)))?;

    rules.validate()?;
    Ok(rules)
}

/// Build the built-in `rules_v1` ruleset
pub fn default_ruleset() -> RuleSet {
    let mut protein = HashMap::new();
    protein.insert(Goal::FatLoss, 2.2);
    protein.insert(Goal::MuscleGain, 1.8);
    protein.insert(Goal::Recomp, 2.0);

    let mut carbs_by_label = HashMap::new();
    carbs_by_label.insert(CarbLabel::Low, 1.5);
    carbs_by_label.insert(CarbLabel::Medium, 3.0);
    carbs_by_label.insert(CarbLabel::High, 4.5);

    RuleSet {
        schema_version: SCHEMA_VERSION,
        id: DEFAULT_RULESET_ID.into(),
        protein: ProteinRules { g_per_kg: protein },
        carbs: CarbRules {
            low_max_load: 2,
            medium_max_load: 8,
            g_per_kg_by_label: carbs_by_label,
        },
        fat: FatRules { min_g_per_kg: 0.8 },
        workout_selection: WorkoutSelectionRules {
            avoid_same_focus_days: 2,
            max_high_load_in_row: 2,
            high_load_threshold: 8,
        },
    }
}
