//! Built-in workout and menu catalogs.
//!
//! These are the records seeded into the store on first run. Catalog data is
//! immutable once loaded; the engine only ever reads it.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// Cached default catalogs - built once and reused across all operations
static DEFAULT_WORKOUTS: Lazy<Vec<Workout>> = Lazy::new(build_default_workouts);
static DEFAULT_MENUS: Lazy<Vec<Menu>> = Lazy::new(build_default_menus);

/// Get a reference to the cached default workout catalog
pub fn default_workout_catalog() -> &'static [Workout] {
    &DEFAULT_WORKOUTS
}

/// Get a reference to the cached default menu catalog
pub fn default_menu_catalog() -> &'static [Menu] {
    &DEFAULT_MENUS
}

fn tags(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the default workout catalog.
///
/// Prefer [`default_workout_catalog`] outside of tests; this rebuilds the
/// whole vector on every call.
pub fn build_default_workouts() -> Vec<Workout> {
    vec![
        Workout {
            id: "wk_strength_upper_01".into(),
            goal: WorkoutGoal::Strength,
            kind: WorkoutKind::Strength,
            equipment: Equipment::Gym,
            load: 8,
            focus: tags(&["chest", "back", "shoulders"]),
            avoid_if_injuries: tags(&["shoulder"]),
        },
        Workout {
            id: "wk_strength_lower_01".into(),
            goal: WorkoutGoal::Strength,
            kind: WorkoutKind::Strength,
            equipment: Equipment::Gym,
            load: 9,
            focus: tags(&["legs", "glutes"]),
            avoid_if_injuries: tags(&["knee", "lower_back"]),
        },
        Workout {
            id: "wk_recomp_push_01".into(),
            goal: WorkoutGoal::Recomp,
            kind: WorkoutKind::Strength,
            equipment: Equipment::Gym,
            load: 6,
            focus: tags(&["chest", "shoulders", "triceps"]),
            avoid_if_injuries: tags(&["shoulder"]),
        },
        Workout {
            id: "wk_recomp_pull_01".into(),
            goal: WorkoutGoal::Recomp,
            kind: WorkoutKind::Strength,
            equipment: Equipment::Gym,
            load: 6,
            focus: tags(&["back", "biceps"]),
            avoid_if_injuries: tags(&["lower_back"]),
        },
        Workout {
            id: "wk_conditioning_hiit_01".into(),
            goal: WorkoutGoal::FatLoss,
            kind: WorkoutKind::Conditioning,
            equipment: Equipment::Gym,
            load: 7,
            focus: tags(&["full_body", "conditioning"]),
            avoid_if_injuries: tags(&["knee"]),
        },
        Workout {
            id: "wk_home_circuit_01".into(),
            goal: WorkoutGoal::Recomp,
            kind: WorkoutKind::Circuit,
            equipment: Equipment::Home,
            load: 5,
            focus: tags(&["full_body"]),
            avoid_if_injuries: BTreeSet::new(),
        },
        Workout {
            id: "wk_home_hiit_01".into(),
            goal: WorkoutGoal::FatLoss,
            kind: WorkoutKind::Conditioning,
            equipment: Equipment::Home,
            load: 6,
            focus: tags(&["full_body", "conditioning"]),
            avoid_if_injuries: tags(&["knee"]),
        },
        Workout {
            id: "wk_home_strength_01".into(),
            goal: WorkoutGoal::Strength,
            kind: WorkoutKind::Strength,
            equipment: Equipment::Home,
            load: 5,
            focus: tags(&["legs", "glutes"]),
            avoid_if_injuries: tags(&["knee"]),
        },
        Workout {
            id: "wk_mixed_kb_01".into(),
            goal: WorkoutGoal::Recomp,
            kind: WorkoutKind::Circuit,
            equipment: Equipment::Mixed,
            load: 6,
            focus: tags(&["full_body", "posterior_chain"]),
            avoid_if_injuries: tags(&["lower_back"]),
        },
        Workout {
            id: "wk_mixed_conditioning_01".into(),
            goal: WorkoutGoal::FatLoss,
            kind: WorkoutKind::Conditioning,
            equipment: Equipment::Mixed,
            load: 7,
            focus: tags(&["full_body", "conditioning"]),
            avoid_if_injuries: tags(&["knee"]),
        },
        Workout {
            id: "wk_mobility_reset_01".into(),
            goal: WorkoutGoal::Recomp,
            kind: WorkoutKind::Mobility,
            equipment: Equipment::Home,
            load: 2,
            focus: tags(&["mobility"]),
            avoid_if_injuries: BTreeSet::new(),
        },
    ]
}

/// Builds the default menu catalog
pub fn build_default_menus() -> Vec<Menu> {
    vec![
        Menu {
            id: "menu_low_01".into(),
            kcal: 1700,
            carb_bias: CarbLabel::Low,
            protein_g: 150,
            carbs_g: 120,
            fat_g: 60,
        },
        Menu {
            id: "menu_low_02".into(),
            kcal: 1650,
            carb_bias: CarbLabel::Low,
            protein_g: 160,
            carbs_g: 110,
            fat_g: 62,
        },
        Menu {
            id: "menu_low_03".into(),
            kcal: 1900,
            carb_bias: CarbLabel::Low,
            protein_g: 170,
            carbs_g: 140,
            fat_g: 70,
        },
        Menu {
            id: "menu_medium_01".into(),
            kcal: 2180,
            carb_bias: CarbLabel::Medium,
            protein_g: 160,
            carbs_g: 240,
            fat_g: 64,
        },
        Menu {
            id: "menu_medium_02".into(),
            kcal: 2350,
            carb_bias: CarbLabel::Medium,
            protein_g: 170,
            carbs_g: 260,
            fat_g: 70,
        },
        Menu {
            id: "menu_medium_03".into(),
            kcal: 2050,
            carb_bias: CarbLabel::Medium,
            protein_g: 150,
            carbs_g: 220,
            fat_g: 60,
        },
        Menu {
            id: "menu_high_01".into(),
            kcal: 2600,
            carb_bias: CarbLabel::High,
            protein_g: 155,
            carbs_g: 340,
            fat_g: 68,
        },
        Menu {
            id: "menu_high_02".into(),
            kcal: 2800,
            carb_bias: CarbLabel::High,
            protein_g: 165,
            carbs_g: 380,
            fat_g: 72,
        },
    ]
}

/// Validate catalogs for consistency and completeness.
///
/// Returns a list of validation errors, or empty Vec if valid.
pub fn validate_catalogs(workouts: &[Workout], menus: &[Menu]) -> Vec<String> {
    let mut errors = Vec::new();

    let mut seen = BTreeSet::new();
    for workout in workouts {
        if workout.id.is_empty() {
            errors.push("Workout has empty ID".to_string());
        }
        if !seen.insert(workout.id.as_str()) {
            errors.push(format!("Duplicate workout id '{}'", workout.id));
        }
        if workout.load == 0 {
            errors.push(format!("Workout '{}' has zero load", workout.id));
        }
        if workout.focus.is_empty() {
            errors.push(format!("Workout '{}' has no focus tags", workout.id));
        }
    }

    let mut seen = BTreeSet::new();
    for menu in menus {
        if menu.id.is_empty() {
            errors.push("Menu has empty ID".to_string());
        }
        if !seen.insert(menu.id.as_str()) {
            errors.push(format!("Duplicate menu id '{}'", menu.id));
        }
        if menu.kcal == 0 {
            errors.push(format!("Menu '{}' has zero calories", menu.id));
        }
    }

    // Every equipment class needs at least one workout, every carb label at
    // least one menu, or whole profiles become unplannable.
    for equipment in [Equipment::Gym, Equipment::Home, Equipment::Mixed] {
        if !workouts.iter().any(|w| w.equipment == equipment) {
            errors.push(format!("Catalog has no {} workouts", equipment.as_str()));
        }
    }
    for label in [CarbLabel::Low, CarbLabel::Medium, CarbLabel::High] {
        if !menus.iter().any(|m| m.carb_bias == label) {
            errors.push(format!("Catalog has no {} menus", label.as_str()));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogs_validate() {
        let errors = validate_catalogs(&build_default_workouts(), &build_default_menus());
        assert!(
            errors.is_empty(),
            "Default catalogs have validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_every_equipment_class_covered() {
        let workouts = build_default_workouts();
        for equipment in [Equipment::Gym, Equipment::Home, Equipment::Mixed] {
            assert!(
                workouts.iter().any(|w| w.equipment == equipment),
                "No workout for {:?}",
                equipment
            );
        }
    }

    #[test]
    fn test_every_carb_label_covered() {
        let menus = build_default_menus();
        for label in [CarbLabel::Low, CarbLabel::Medium, CarbLabel::High] {
            assert!(
                menus.iter().any(|m| m.carb_bias == label),
                "No menu for {:?}",
                label
            );
        }
    }

    #[test]
    fn test_duplicate_ids_flagged() {
        let mut workouts = build_default_workouts();
        let dup = workouts[0].clone();
        workouts.push(dup);

        let errors = validate_catalogs(&workouts, &build_default_menus());
        assert!(errors.iter().any(|e| e.contains("Duplicate workout id")));
    }

    #[test]
    fn test_cached_catalog_matches_builder() {
        assert_eq!(default_workout_catalog().len(), build_default_workouts().len());
        assert_eq!(default_menu_catalog().len(), build_default_menus().len());
    }
}
