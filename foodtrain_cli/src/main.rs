use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use foodtrain_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "foodtrain")]
#[command(about = "Daily training and nutrition planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate (if needed) and show the plan for a date (default)
    Plan {
        /// Date in YYYY-MM-DD form (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Print the plan as JSON instead of the summary view
        #[arg(long)]
        json: bool,
    },

    /// Delete and rebuild the plan for a date
    Regenerate {
        /// Date in YYYY-MM-DD form
        #[arg(long)]
        date: String,
    },

    /// Show or update the user profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Export all generated day plans to CSV
    Export {
        /// Output file path
        #[arg(long, default_value = "dayplans.csv")]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the current profile
    Show,
    /// Update one or more profile fields
    Set {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: Option<f64>,

        /// Primary goal: fat_loss, muscle_gain, recomp
        #[arg(long)]
        goal: Option<String>,

        /// Equipment class: gym, home, mixed
        #[arg(long)]
        equipment: Option<String>,

        /// Training days per week (1-7)
        #[arg(long)]
        days_per_week: Option<u8>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    foodtrain_core::logging::init(&config.log_level);

    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_dir.clone());
    let store = FileStore::open(&data_dir)?;

    match cli.command {
        Some(Commands::Plan { date, json }) => cmd_plan(&store, date, json),
        Some(Commands::Regenerate { date }) => cmd_regenerate(&store, &date),
        Some(Commands::Profile { action }) => cmd_profile(&store, action),
        Some(Commands::Export { out }) => cmd_export(&store, &out),
        None => cmd_plan(&store, None, false),
    }
}

fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => calendar::parse_iso_date(s),
        None => Ok(chrono::Utc::now().date_naive()),
    }
}

fn cmd_plan(store: &FileStore, date: Option<String>, json: bool) -> Result<()> {
    bootstrap::seed(store)?;

    let date = resolve_date(date.as_deref())?;
    let plan = generate_plan_if_needed(store, date)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }
    Ok(())
}

fn cmd_regenerate(store: &FileStore, date: &str) -> Result<()> {
    bootstrap::seed(store)?;

    let date = calendar::parse_iso_date(date)?;
    let plan = regenerate_plan(store, date)?;

    println!("✓ Rebuilt plan for {}", date);
    display_plan(&plan);
    Ok(())
}

fn cmd_profile(store: &FileStore, action: ProfileAction) -> Result<()> {
    bootstrap::seed(store)?;

    match action {
        ProfileAction::Show => {
            let profile = profile::get_or_create_default(store)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileAction::Set {
            weight_kg,
            goal,
            equipment,
            days_per_week,
        } => {
            let mut profile = profile::get_or_create_default(store)?;

            if let Some(weight) = weight_kg {
                profile.weight_kg = weight;
            }
            if let Some(ref goal) = goal {
                profile.goal = parse_goal(goal)?;
            }
            if let Some(ref equipment) = equipment {
                profile.equipment = parse_equipment(equipment)?;
            }
            if let Some(days) = days_per_week {
                profile.training_days_per_week = Some(days);
            }

            profile::save_profile(store, &profile)?;
            println!("✓ Profile updated");
        }
    }
    Ok(())
}

fn cmd_export(store: &FileStore, out: &PathBuf) -> Result<()> {
    let count = export_plans_csv(store, out)?;

    if count == 0 {
        println!("No day plans to export yet.");
    } else {
        println!("✓ Exported {} day plans", count);
        println!("  CSV: {}", out.display());
    }
    Ok(())
}

fn parse_goal(s: &str) -> Result<Goal> {
    match s.to_lowercase().as_str() {
        "fat_loss" => Ok(Goal::FatLoss),
        "muscle_gain" => Ok(Goal::MuscleGain),
        "recomp" => Ok(Goal::Recomp),
        other => Err(Error::Config(format!(
            "unknown goal '{}' (expected fat_loss, muscle_gain, or recomp)",
            other
        ))),
    }
}

fn parse_equipment(s: &str) -> Result<Equipment> {
    match s.to_lowercase().as_str() {
        "gym" => Ok(Equipment::Gym),
        "home" => Ok(Equipment::Home),
        "mixed" => Ok(Equipment::Mixed),
        other => Err(Error::Config(format!(
            "unknown equipment class '{}' (expected gym, home, or mixed)",
            other
        ))),
    }
}

fn display_plan(plan: &DayPlan) {
    let header = if plan.is_training_day {
        "TRAINING DAY"
    } else {
        "REST DAY"
    };

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} — {}", plan.date, header);
    println!("╰─────────────────────────────────────────╯");
    println!();

    match &plan.workout_id {
        Some(workout_id) => {
            println!("  Workout: {} (load {})", workout_id, plan.training_load_score);
        }
        None => {
            let reason = plan.rest_reason.as_deref().unwrap_or("rest");
            println!("  No workout: {}", reason);
        }
    }

    println!("  Menu:    {}", plan.menu_id);
    println!();
    println!(
        "  Targets: {} kcal — P {}g / C {}g / F {}g ({} carb day)",
        plan.targets.kcal,
        plan.targets.protein_g,
        plan.targets.carbs_g,
        plan.targets.fat_g,
        plan.targets.carb_label.as_str()
    );
    println!();
}
