//! Day-by-day weight projection.
//!
//! The simulator starts from the current weight and subtracts each day's
//! energy balance (burn minus intake, at 3500 kcal per lb) until the goal is
//! reached. Fasting and barre days use a day-index scheme: within every
//! 7-day block they fall on days where `day % 7 < per_week`, independent of
//! the calendar weekday.

use crate::biometrics::BARRE_SESSION_CALORIES;
use crate::{Error, Result, SimulationPoint};
use chrono::{Duration, NaiveDate};

/// Energy equivalent of one pound of body mass
pub const CALORIES_PER_LB: f64 = 3500.0;

/// Intake on a fasting day (kcal)
pub const FASTING_DAY_INTAKE: u32 = 500;

/// Default cap on simulated days (100 years)
pub const DEFAULT_MAX_DAYS: u32 = 36_500;

/// Largest accepted day cap. Every simulated day holds a point in memory.
pub const MAX_DAY_CAP: u32 = DEFAULT_MAX_DAYS;

/// Inputs to a single projection run
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    pub start_weight: f64,
    pub goal_weight: f64,
    pub bmr: f64,
    /// Average activity calories, added on top of BMR every day
    pub activity_calories: f64,
    pub daily_calorie_intake: u32,
    pub fasting_days_per_week: u32,
    pub barre_sessions_per_week: u32,
}

/// Burn and intake for one simulated day
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DailyEnergy {
    pub burn: f64,
    pub intake: f64,
}

impl DailyEnergy {
    pub fn deficit(&self) -> f64 {
        self.burn - self.intake
    }
}

/// A completed projection
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub start_date: NaiveDate,
    /// One point per simulated day, starting the day after `start_date`
    pub points: Vec<SimulationPoint>,
    pub total_days: u32,
}

impl Projection {
    /// True when the start weight was already at or below the goal
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Date the goal is reached
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Duration::days(i64::from(self.total_days))
    }

    /// Duration in weeks, rounded to one decimal
    pub fn weeks(&self) -> f64 {
        round_to_tenth(f64::from(self.total_days) / 7.0)
    }

    pub fn final_weight(&self) -> Option<f64> {
        self.points.last().map(|p| p.weight)
    }
}

/// Whether a day-index falls on one of the first `per_week` slots of its block
pub fn is_scheduled_day(day: u32, per_week: u32) -> bool {
    day % 7 < per_week
}

/// Burn and intake for simulated day `day` (1-based)
pub fn daily_energy(day: u32, params: &SimulationParams) -> DailyEnergy {
    let mut burn = params.bmr + params.activity_calories;
    if is_scheduled_day(day, params.barre_sessions_per_week) {
        burn += BARRE_SESSION_CALORIES;
    }

    let intake = if is_scheduled_day(day, params.fasting_days_per_week) {
        FASTING_DAY_INTAKE
    } else {
        params.daily_calorie_intake
    };

    DailyEnergy {
        burn,
        intake: f64::from(intake),
    }
}

/// Simulate weight day by day until the goal is reached.
///
/// Returns an empty projection when the start weight is already at or below
/// the goal. Fails with [`Error::NonConvergentProjection`] if the goal is not
/// reached within `max_days`. A `max_days` outside `1..=MAX_DAY_CAP` is
/// rejected as [`Error::InvalidInput`] before any day is simulated.
pub fn simulate_timeline(
    params: &SimulationParams,
    start_date: NaiveDate,
    max_days: u32,
) -> Result<Projection> {
    crate::inputs::check_max_days(max_days)?;

    let mut weight = params.start_weight;
    let mut day: u32 = 0;
    let mut points = Vec::new();

    while weight > params.goal_weight {
        day += 1;
        if day > max_days {
            tracing::warn!(
                "Projection did not reach {} lbs within {} days (at {:.1} lbs)",
                params.goal_weight,
                max_days,
                weight
            );
            return Err(Error::NonConvergentProjection { max_days });
        }

        let energy = daily_energy(day, params);
        weight -= energy.deficit() / CALORIES_PER_LB;

        points.push(SimulationPoint {
            date: start_date + Duration::days(i64::from(day)),
            weight: round_to_tenth(weight),
        });
    }

    tracing::debug!(
        "Projection from {} to {} lbs took {} days",
        params.start_weight,
        params.goal_weight,
        day
    );

    Ok(Projection {
        start_date,
        points,
        total_days: day,
    })
}

/// Round half away from zero to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
