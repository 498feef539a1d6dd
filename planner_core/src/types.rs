//! Core domain types for the weight loss planner.
//!
//! This module defines the fundamental types used throughout the system:
//! - Body metrics and the user's sex
//! - Goal and activity plan parameters
//! - Simulated trajectory points
//! - Logged weight observations

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex, selects the Mifflin-St Jeor offset
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    #[default]
    Female,
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(Error::InvalidInput(format!(
                "Unknown sex '{}', expected male or female",
                other
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// Body metrics that feed the BMR model
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub sex: Sex,
    pub height_inches: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 30,
            sex: Sex::Female,
            height_inches: 66.0,
        }
    }
}

/// Target weight the projection runs towards
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct GoalParameters {
    pub goal_weight: f64,
}

impl Default for GoalParameters {
    fn default() -> Self {
        Self { goal_weight: 120.0 }
    }
}

/// Diet and exercise plan for the simulated weeks
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityPlan {
    pub daily_calorie_intake: u32,
    pub fasting_days_per_week: u32,
    pub barre_sessions_per_week: u32,
    pub additional_daily_steps: u32,
}

impl Default for ActivityPlan {
    fn default() -> Self {
        Self {
            daily_calorie_intake: 1500,
            fasting_days_per_week: 0,
            barre_sessions_per_week: 0,
            additional_daily_steps: 500,
        }
    }
}

// ============================================================================
// Projection Types
// ============================================================================

/// A single simulated day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationPoint {
    pub date: NaiveDate,
    /// Weight in lbs, rounded to one decimal
    pub weight: f64,
}

/// Headline energy figures for the current inputs
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct EnergyMetrics {
    pub resting_bmr: f64,
    pub activity_calories: f64,
    /// Average daily burn (BMR plus activity)
    pub total_burn: f64,
    /// Total burn minus planned intake
    pub net_deficit: f64,
}

// ============================================================================
// Weight Log Types
// ============================================================================

/// A logged weight observation
///
/// Dates serialize in ISO `YYYY-MM-DD` form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeightLogEntry {
    pub date: NaiveDate,
    pub weight: f64,
}

impl WeightLogEntry {
    /// The entry date as an ISO string
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
