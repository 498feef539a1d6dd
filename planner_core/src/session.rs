//! Session-scoped state and the weight log.
//!
//! A `SessionState` is created once when a session starts and discarded
//! when it ends. Nothing here touches disk.

use crate::inputs::WEIGHT_LBS;
use crate::{GoalParameters, WeightLogEntry};
use chrono::NaiveDate;

/// Default current weight (lbs) for a fresh session
pub const DEFAULT_CURRENT_WEIGHT: f64 = 150.0;

/// Default goal weight (lbs) for a fresh session
pub const DEFAULT_GOAL_WEIGHT: f64 = 120.0;

/// Append-only record of logged weights, kept in logging order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightLog {
    entries: Vec<WeightLogEntry>,
}

impl WeightLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. No deduplication or sorting is applied.
    pub fn append_entry(&mut self, date: NaiveDate, weight: f64) {
        self.entries.push(WeightLogEntry { date, weight });
        tracing::debug!("Logged {} lbs on {} ({} entries)", weight, date, self.entries.len());
    }

    pub fn entries(&self) -> &[WeightLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently logged entry
    pub fn latest(&self) -> Option<&WeightLogEntry> {
        self.entries.last()
    }

    /// Chart series in logging order; ordering by date is left to the renderer
    pub fn renderable_series(&self) -> Vec<(NaiveDate, f64)> {
        self.entries.iter().map(|e| (e.date, e.weight)).collect()
    }
}

/// Mutable state for one user session
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    current_weight: f64,
    goal_weight: f64,
    last_computed_bmr: f64,
    weight_log: WeightLog,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Fresh session with the default weights and an empty log
    pub fn new() -> Self {
        Self::with_weights(DEFAULT_CURRENT_WEIGHT, DEFAULT_GOAL_WEIGHT)
    }

    /// Fresh session starting from the given weights, clamped into range
    pub fn with_weights(current_weight: f64, goal_weight: f64) -> Self {
        Self {
            current_weight: WEIGHT_LBS.clamp_f64(current_weight),
            goal_weight: WEIGHT_LBS.clamp_f64(goal_weight),
            last_computed_bmr: 0.0,
            weight_log: WeightLog::new(),
        }
    }

    pub fn current_weight(&self) -> f64 {
        self.current_weight
    }

    pub fn goal_weight(&self) -> f64 {
        self.goal_weight
    }

    pub fn goal(&self) -> GoalParameters {
        GoalParameters {
            goal_weight: self.goal_weight,
        }
    }

    pub fn last_computed_bmr(&self) -> f64 {
        self.last_computed_bmr
    }

    pub fn weight_log(&self) -> &WeightLog {
        &self.weight_log
    }

    pub fn set_goal_weight(&mut self, goal_weight: f64) {
        self.goal_weight = WEIGHT_LBS.clamp_f64(goal_weight);
    }

    pub fn set_current_weight(&mut self, current_weight: f64) {
        self.current_weight = WEIGHT_LBS.clamp_f64(current_weight);
    }

    pub fn record_bmr(&mut self, bmr: f64) {
        self.last_computed_bmr = bmr;
    }

    /// Log a weight observation and make it the current weight
    pub fn append_log_entry(&mut self, date: NaiveDate, weight: f64) {
        let weight = WEIGHT_LBS.clamp_f64(weight);
        self.weight_log.append_entry(date, weight);
        self.current_weight = weight;
        tracing::info!("Current weight is now {} lbs", weight);
    }
}
