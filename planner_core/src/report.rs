//! Labeled metrics for display.

use crate::engine::ProjectionOutcome;
use crate::EnergyMetrics;
use chrono::NaiveDate;
use std::fmt;

/// A label and its formatted value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

impl Metric {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Resting BMR, total burn and net deficit
pub fn energy_metrics(metrics: &EnergyMetrics) -> Vec<Metric> {
    vec![
        Metric::new("Resting BMR", kcal_per_day(metrics.resting_bmr)),
        Metric::new("Total Calories Burned", kcal_per_day(metrics.total_burn)),
        Metric::new("Net Caloric Deficit", kcal_per_day(metrics.net_deficit)),
    ]
}

/// Projected duration and end date
///
/// A goal already reached reports zero days ending today. A non-convergent
/// projection has no metrics; see [`outcome_message`].
pub fn projection_metrics(outcome: &ProjectionOutcome, today: NaiveDate) -> Vec<Metric> {
    let (days, weeks, end_date) = match outcome {
        ProjectionOutcome::Reached(p) => (p.total_days, p.weeks(), p.end_date()),
        ProjectionOutcome::AlreadyAtGoal => (0, 0.0, today),
        ProjectionOutcome::NonConvergent { .. } => return Vec::new(),
    };

    vec![
        Metric::new(
            "Projected Duration",
            format!("{} days ({:.1} weeks)", days, weeks),
        ),
        Metric::new("Projected End Date", format_long_date(end_date)),
    ]
}

/// User-facing message for outcomes that have no chart
pub fn outcome_message(outcome: &ProjectionOutcome) -> Option<String> {
    match outcome {
        ProjectionOutcome::Reached(_) => None,
        ProjectionOutcome::AlreadyAtGoal => Some("Already at or below goal".into()),
        ProjectionOutcome::NonConvergent { max_days } => {
            Some(format!("Projection exceeds {} days", max_days))
        }
    }
}

/// e.g. "March 07, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

fn kcal_per_day(value: f64) -> String {
    format!("{} kcal/day", two_decimal_value(value))
}

/// Round to two decimals, then print the shortest form that reads back as
/// the rounded value, keeping at least one fractional digit ("1700.0").
fn two_decimal_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // `{:.2}` rounds the exact binary value, half to even
    let rounded: f64 = format!("{:.2}", value).parse().unwrap_or(value);
    let mut shown = rounded.to_string();
    if !shown.contains('.') {
        shown.push_str(".0");
    }
    shown
}
