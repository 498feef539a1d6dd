#![forbid(unsafe_code)]

//! Core domain model and projection engine for the weight loss planner.
//!
//! This crate provides:
//! - Domain types (profile, activity plan, trajectory points, log entries)
//! - BMR and daily energy expenditure model
//! - Day-by-day projection simulator
//! - Session state and the weight log
//! - Input bounds, configuration and display formatting

pub mod types;
pub mod error;
pub mod biometrics;
pub mod projection;
pub mod session;
pub mod inputs;
pub mod config;
pub mod logging;
pub mod engine;
pub mod report;
pub mod series;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use session::{SessionState, WeightLog};
pub use inputs::{InputField, PlannerInputs};
pub use projection::{simulate_timeline, Projection, SimulationParams};
pub use engine::{recompute, ProjectionOutcome, Recomputation};
pub use series::ChartSeries;
