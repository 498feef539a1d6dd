//! Error types for the planner_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for planner_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A user-supplied value could not be understood
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The simulated weight never reached the goal within the day cap
    #[error("Projection exceeds {max_days} days")]
    NonConvergentProjection { max_days: u32 },
}
