//! Nutrition target calculator.
//!
//! Maps (rules, profile, training load) to calorie and macro targets. Pure
//! function of its inputs. Calories are derived from the macro grams via
//! Atwater factors, not computed from a maintenance model.

use crate::{CarbLabel, Error, NutritionTargets, Result, RuleSet, UserProfile};

/// Carb label for a training load. Inclusive on the lower band boundaries.
pub fn carb_label(rules: &RuleSet, load: u32) -> CarbLabel {
    if load <= rules.carbs.low_max_load {
        CarbLabel::Low
    } else if load <= rules.carbs.medium_max_load {
        CarbLabel::Medium
    } else {
        CarbLabel::High
    }
}

/// Compute the day's nutrition targets from the training load.
///
/// Fat is always prescribed at the rule minimum, never adjusted upward.
pub fn compute_targets(
    rules: &RuleSet,
    profile: &UserProfile,
    training_load: u32,
) -> Result<NutritionTargets> {
    let label = carb_label(rules, training_load);

    let protein_per_kg = rules
        .protein
        .g_per_kg
        .get(&profile.goal)
        .copied()
        .ok_or_else(|| {
            Error::Config(format!(
                "ruleset '{}' has no protein rule for goal {:?}",
                rules.id, profile.goal
            ))
        })?;

    let carbs_per_kg = rules
        .carbs
        .g_per_kg_by_label
        .get(&label)
        .copied()
        .ok_or_else(|| {
            Error::Config(format!(
                "ruleset '{}' has no carb rule for label {:?}",
                rules.id, label
            ))
        })?;

    let protein_g = grams(profile.weight_kg, protein_per_kg);
    let carbs_g = grams(profile.weight_kg, carbs_per_kg);
    let fat_g = grams(profile.weight_kg, rules.fat.min_g_per_kg);

    // Atwater factors: 4 kcal/g protein and carbs, 9 kcal/g fat
    let kcal = protein_g * 4 + carbs_g * 4 + fat_g * 9;

    Ok(NutritionTargets {
        kcal,
        protein_g,
        carbs_g,
        fat_g,
        carb_label: label,
    })
}

fn grams(weight_kg: f64, per_kg: f64) -> u32 {
    (weight_kg * per_kg).round() as u32
}
