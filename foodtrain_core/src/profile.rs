//! Profile provider: load, save, and first-run defaults.
//!
//! The engine only ever reads the profile. Writes go through
//! [`save_profile`], which stamps `updated_at`.

use crate::store::{keys, KvStore};
use crate::{Equipment, Goal, Result, Sex, UserProfile, SCHEMA_VERSION};
use chrono::Utc;
use std::collections::BTreeSet;

/// Load the stored profile, `None` if no profile exists yet
pub fn load_profile<S: KvStore>(store: &S) -> Result<Option<UserProfile>> {
    store.get_json(keys::PROFILE)
}

/// Persist the profile, stamping `updated_at`
pub fn save_profile<S: KvStore>(store: &S, profile: &UserProfile) -> Result<()> {
    let mut profile = profile.clone();
    profile.updated_at = Utc::now();
    store.set_json(keys::PROFILE, &profile)
}

/// Return the stored profile, creating and persisting the demo default on
/// first run
pub fn get_or_create_default<S: KvStore>(store: &S) -> Result<UserProfile> {
    if let Some(existing) = load_profile(store)? {
        return Ok(existing);
    }

    let default = default_profile();
    save_profile(store, &default)?;
    tracing::info!("No profile found, created default profile");
    Ok(default)
}

fn default_profile() -> UserProfile {
    UserProfile {
        schema_version: SCHEMA_VERSION,
        sex: Sex::Male,
        age: 40,
        height_cm: 175,
        weight_kg: 80.0,
        goal: Goal::Recomp,
        equipment: Equipment::Gym,
        injuries: BTreeSet::new(),
        training_days_per_week: Some(4),
        updated_at: Utc::now(),
    }
}
