//! Recomputation pass run after every interaction.
//!
//! A pass reads the session weights and the current inputs, then:
//! - Computes resting BMR from the current weight and records it
//! - Derives the headline energy metrics
//! - Projects the trajectory towards the goal

use crate::biometrics::{compute_energy_metrics, compute_resting_bmr};
use crate::projection::{simulate_timeline, Projection, SimulationParams};
use crate::{ActivityPlan, EnergyMetrics, Error, Result, SessionState, UserProfile};
use chrono::NaiveDate;

/// How a projection pass ended
#[derive(Clone, Debug, PartialEq)]
pub enum ProjectionOutcome {
    /// Goal reached after `projection.total_days`
    Reached(Projection),
    /// Current weight already at or below the goal
    AlreadyAtGoal,
    /// Goal not reached within the day cap
    NonConvergent { max_days: u32 },
}

impl ProjectionOutcome {
    pub fn projection(&self) -> Option<&Projection> {
        match self {
            ProjectionOutcome::Reached(p) => Some(p),
            _ => None,
        }
    }
}

/// Everything a presentation layer needs after one pass
#[derive(Clone, Debug, PartialEq)]
pub struct Recomputation {
    pub metrics: EnergyMetrics,
    pub outcome: ProjectionOutcome,
}

/// Build simulator inputs for the session's current and goal weights
pub fn simulation_params(
    session: &SessionState,
    bmr: f64,
    metrics: &EnergyMetrics,
    activity: &ActivityPlan,
) -> SimulationParams {
    SimulationParams {
        start_weight: session.current_weight(),
        goal_weight: session.goal().goal_weight,
        bmr,
        activity_calories: metrics.activity_calories,
        daily_calorie_intake: activity.daily_calorie_intake,
        fasting_days_per_week: activity.fasting_days_per_week,
        barre_sessions_per_week: activity.barre_sessions_per_week,
    }
}

/// Recompute metrics and projection for the current inputs
///
/// Only `last_computed_bmr` is written back to the session; a failed
/// projection leaves everything else untouched.
pub fn recompute(
    session: &mut SessionState,
    profile: &UserProfile,
    activity: &ActivityPlan,
    today: NaiveDate,
    max_days: u32,
) -> Result<Recomputation> {
    let bmr = compute_resting_bmr(
        session.current_weight(),
        profile.age,
        profile.height_inches,
        profile.sex,
    );
    session.record_bmr(bmr);

    let metrics = compute_energy_metrics(bmr, activity);
    tracing::debug!(
        "BMR {:.2}, burn {:.2}, deficit {:.2}",
        metrics.resting_bmr,
        metrics.total_burn,
        metrics.net_deficit
    );

    let params = simulation_params(session, bmr, &metrics, activity);
    let outcome = match simulate_timeline(&params, today, max_days) {
        Ok(projection) if projection.is_empty() => ProjectionOutcome::AlreadyAtGoal,
        Ok(projection) => {
            tracing::info!(
                "Projected {} lbs -> {} lbs in {} days",
                params.start_weight,
                params.goal_weight,
                projection.total_days
            );
            ProjectionOutcome::Reached(projection)
        }
        Err(Error::NonConvergentProjection { max_days }) => {
            ProjectionOutcome::NonConvergent { max_days }
        }
        Err(e) => return Err(e),
    };

    Ok(Recomputation { metrics, outcome })
}
