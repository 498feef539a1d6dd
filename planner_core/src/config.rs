//! Configuration file support for weightplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/weightplan/config.toml`.
//! It only supplies the starting values of a session; nothing is written
//! back.

use crate::inputs::MAX_DAYS;
use crate::projection::DEFAULT_MAX_DAYS;
use crate::session::{DEFAULT_CURRENT_WEIGHT, DEFAULT_GOAL_WEIGHT};
use crate::{ActivityPlan, Error, Result, SessionState, Sex, UserProfile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub goal: GoalConfig,

    #[serde(default)]
    pub activity: ActivityConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Starting body metrics
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_age")]
    pub age: u32,

    #[serde(default)]
    pub sex: Sex,

    #[serde(default = "default_height_inches")]
    pub height_inches: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        let profile = UserProfile::default();
        Self {
            age: profile.age,
            sex: profile.sex,
            height_inches: profile.height_inches,
        }
    }
}

/// Starting session weights
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GoalConfig {
    #[serde(default = "default_current_weight")]
    pub current_weight: f64,

    #[serde(default = "default_goal_weight")]
    pub goal_weight: f64,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            current_weight: default_current_weight(),
            goal_weight: default_goal_weight(),
        }
    }
}

/// Starting diet and exercise plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityConfig {
    #[serde(default = "default_daily_calorie_intake")]
    pub daily_calorie_intake: u32,

    #[serde(default)]
    pub fasting_days_per_week: u32,

    #[serde(default)]
    pub barre_sessions_per_week: u32,

    #[serde(default = "default_additional_daily_steps")]
    pub additional_daily_steps: u32,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        let plan = ActivityPlan::default();
        Self {
            daily_calorie_intake: plan.daily_calorie_intake,
            fasting_days_per_week: plan.fasting_days_per_week,
            barre_sessions_per_week: plan.barre_sessions_per_week,
            additional_daily_steps: plan.additional_daily_steps,
        }
    }
}

/// Simulator limits
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_days: default_max_days(),
        }
    }
}

// Default value functions
fn default_age() -> u32 {
    UserProfile::default().age
}

fn default_height_inches() -> f64 {
    UserProfile::default().height_inches
}

fn default_current_weight() -> f64 {
    DEFAULT_CURRENT_WEIGHT
}

fn default_goal_weight() -> f64 {
    DEFAULT_GOAL_WEIGHT
}

fn default_daily_calorie_intake() -> u32 {
    ActivityPlan::default().daily_calorie_intake
}

fn default_additional_daily_steps() -> u32 {
    ActivityPlan::default().additional_daily_steps
}

fn default_max_days() -> u32 {
    DEFAULT_MAX_DAYS
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|_| PathBuf::from("."))
        });
        base.join("weightplan").join("config.toml")
    }

    /// Reject settings that no clamping can repair
    pub fn validate(&self) -> Result<()> {
        let max_days = self.simulation.max_days;
        if !MAX_DAYS.contains(max_days) {
            return Err(Error::Config(format!(
                "simulation.max_days must be between {} and {}, got {}",
                MAX_DAYS.min, MAX_DAYS.max, max_days
            )));
        }
        Ok(())
    }

    /// A fresh session seeded with the configured weights
    pub fn new_session(&self) -> SessionState {
        SessionState::with_weights(self.goal.current_weight, self.goal.goal_weight)
    }
}
