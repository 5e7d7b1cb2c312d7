//! Menu matcher.
//!
//! Filters the menu catalog to the day's carb label and picks the menu with
//! the smallest normalized distance to the nutrition targets.

use crate::{CarbLabel, Error, Menu, NutritionTargets, Result};
use std::cmp::Ordering;

/// Select the best-fitting menu for the carb label and targets.
///
/// Deterministic: ties resolve by ascending (score, menu id).
pub fn select_menu<'a>(
    catalog: &'a [Menu],
    label: CarbLabel,
    targets: &NutritionTargets,
) -> Result<&'a Menu> {
    let mut candidates: Vec<(f64, &Menu)> = catalog
        .iter()
        .filter(|m| m.carb_bias == label)
        .map(|m| (distance(m, targets), m))
        .collect();

    if candidates.is_empty() {
        return Err(Error::NoMenuForLabel(format!(
            "no catalog menu with carb bias '{}'",
            label.as_str()
        )));
    }

    candidates.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.id.cmp(&b.1.id))
    });

    let (score, best) = candidates[0];
    tracing::debug!("Selected menu '{}' with distance {:.4}", best.id, score);
    Ok(best)
}

/// Sum of relative errors over calories and the three macros. Each term is
/// normalized by its own target, floored at 1 so zero targets stay finite.
fn distance(menu: &Menu, targets: &NutritionTargets) -> f64 {
    relative_error(menu.kcal, targets.kcal)
        + relative_error(menu.protein_g, targets.protein_g)
        + relative_error(menu.carbs_g, targets.carbs_g)
        + relative_error(menu.fat_g, targets.fat_g)
}

fn relative_error(actual: u32, target: u32) -> f64 {
    f64::from(actual.abs_diff(target)) / f64::from(target.max(1))
}
