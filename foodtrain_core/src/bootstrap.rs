//! First-run seeding of the store.
//!
//! Seeds the device id, demo profile, built-in ruleset, catalogs, and the
//! empty day index. Each key is written only when absent, so seeding is
//! idempotent and never clobbers user data.

use crate::store::{keys, KvStore};
use crate::{catalog, profile, rules, Error, Result};
use chrono::NaiveDate;
use uuid::Uuid;

/// Ensure all required records exist in the store
pub fn seed<S: KvStore>(store: &S) -> Result<()> {
    let workouts = catalog::default_workout_catalog();
    let menus = catalog::default_menu_catalog();
    let errors = catalog::validate_catalogs(workouts, menus);
    if !errors.is_empty() {
        return Err(Error::Config(format!(
            "built-in catalogs failed validation: {}",
            errors.join("; ")
        )));
    }

    if store.get(keys::DEVICE)?.is_none() {
        store.set(keys::DEVICE, &Uuid::new_v4().to_string())?;
        tracing::info!("Seeded device id");
    }

    profile::get_or_create_default(store)?;

    if store.get(&keys::ruleset(rules::DEFAULT_RULESET_ID))?.is_none() {
        let ruleset = rules::default_ruleset();
        ruleset.validate()?;
        store.set_json(keys::ACTIVE_RULESET, &ruleset.id)?;
        store.set_json(&keys::ruleset(&ruleset.id), &ruleset)?;
        tracing::info!("Seeded ruleset '{}'", ruleset.id);
    }

    if store.get(keys::WORKOUT_CATALOG)?.is_none() {
        store.set_json(keys::WORKOUT_CATALOG, &workouts)?;
        tracing::info!("Seeded workout catalog ({} entries)", workouts.len());
    }

    if store.get(keys::MENU_CATALOG)?.is_none() {
        store.set_json(keys::MENU_CATALOG, &menus)?;
        tracing::info!("Seeded menu catalog ({} entries)", menus.len());
    }

    if store.get(keys::DAY_INDEX)?.is_none() {
        store.set_json::<Vec<NaiveDate>>(keys::DAY_INDEX, &Vec::new())?;
    }

    Ok(())
}
