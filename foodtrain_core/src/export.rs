//! CSV export of generated day plans.
//!
//! Walks the day index and writes one row per plan. The output file is
//! rewritten from scratch on every export and fsynced before returning.

use crate::store::{keys, KvStore};
use crate::{DayPlan, Result};
use chrono::NaiveDate;
use std::fs::OpenOptions;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    date: String,
    is_training_day: bool,
    workout_id: Option<String>,
    training_load_score: u32,
    menu_id: String,
    kcal: u32,
    protein_g: u32,
    carbs_g: u32,
    fat_g: u32,
    carb_label: String,
}

impl From<&DayPlan> for CsvRow {
    fn from(plan: &DayPlan) -> Self {
        CsvRow {
            date: plan.date.format("%Y-%m-%d").to_string(),
            is_training_day: plan.is_training_day,
            workout_id: plan.workout_id.clone(),
            training_load_score: plan.training_load_score,
            menu_id: plan.menu_id.clone(),
            kcal: plan.targets.kcal,
            protein_g: plan.targets.protein_g,
            carbs_g: plan.targets.carbs_g,
            fat_g: plan.targets.fat_g,
            carb_label: plan.targets.carb_label.as_str().to_string(),
        }
    }
}

/// Export every indexed day plan to `csv_path`, returning the row count.
///
/// Index entries whose plan record has been deleted are skipped.
pub fn export_plans_csv<S: KvStore>(store: &S, csv_path: &Path) -> Result<usize> {
    let index: Vec<NaiveDate> = store.get_json(keys::DAY_INDEX)?.unwrap_or_default();
    if index.is_empty() {
        tracing::info!("No day plans to export");
        return Ok(0);
    }

    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(csv_path)?;

    let mut writer = csv::Writer::from_writer(file);
    let mut count = 0;

    for date in &index {
        let Some(plan) = store.get_json::<DayPlan>(&keys::day_plan(*date))? else {
            tracing::warn!("Index lists {} but no plan record exists, skipping", date);
            continue;
        };
        writer.serialize(CsvRow::from(&plan))?;
        count += 1;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Exported {} day plans to {:?}", count, csv_path);
    Ok(count)
}
