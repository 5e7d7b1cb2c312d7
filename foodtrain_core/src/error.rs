//! Error types for the foodtrain_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for foodtrain_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Required ruleset key missing or ruleset invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// No catalog workout matches the user's equipment/injury constraints
    #[error("No eligible workout: {0}")]
    NoEligibleWorkout(String),

    /// No catalog menu matches the computed carb label
    #[error("No menu for label: {0}")]
    NoMenuForLabel(String),

    /// Profile, ruleset, or catalog absent from the store at generation time
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Key-value store error not covered by Io/Json
    #[error("Store error: {0}")]
    Store(String),
}
