#![forbid(unsafe_code)]

//! Core domain model and plan-derivation engine for Food & Train.
//!
//! This crate provides:
//! - Domain types (profile, rulesets, workouts, menus, day plans)
//! - The day-plan orchestrator and its algorithms (schedule, workout
//!   rotation, nutrition targets, menu matching)
//! - Catalog and ruleset management
//! - Key-value persistence (file-backed and in-memory)
//! - First-run bootstrap seeding and CSV export

pub mod types;
pub mod error;
pub mod calendar;
pub mod store;
pub mod rules;
pub mod catalog;
pub mod profile;
pub mod bootstrap;
pub mod schedule;
pub mod nutrition;
pub mod selector;
pub mod menu;
pub mod history;
pub mod engine;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use bootstrap::seed;
pub use catalog::{default_menu_catalog, default_workout_catalog};
pub use config::Config;
pub use engine::{generate_plan_if_needed, regenerate_plan};
pub use export::export_plans_csv;
pub use store::{FileStore, KvStore, MemoryStore};
