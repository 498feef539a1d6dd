//! Resting metabolic rate and daily energy expenditure.
//!
//! BMR follows the Mifflin-St Jeor equation on metric units, scaled by a
//! fixed light-activity multiplier. Daily burn adds step, barre and baseline
//! activity on top, averaged over a 7-day week.

use crate::{ActivityPlan, EnergyMetrics, Sex};

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Multiplier applied to every Mifflin-St Jeor result
pub const BMR_ACTIVITY_MULTIPLIER: f64 = 1.1;

/// Sex-specific constant term for males (kcal)
pub const MALE_OFFSET: f64 = 5.0;

/// Sex-specific constant term for females (kcal)
pub const FEMALE_OFFSET: f64 = -161.0;

/// Calories burned per 1000 additional steps
pub const CALORIES_PER_1000_STEPS: f64 = 30.0;

/// Calories burned by one barre session
pub const BARRE_SESSION_CALORIES: f64 = 210.0;

/// Fixed non-exercise activity allowance per day
pub const BASELINE_DAILY_ACTIVITY: f64 = 200.0;

/// Compute resting BMR in kcal/day.
///
/// The result is not clamped; extreme inputs can produce a negative value,
/// which callers pass through unchanged.
pub fn compute_resting_bmr(weight_lbs: f64, age_years: u32, height_inches: f64, sex: Sex) -> f64 {
    let height_cm = height_inches * CM_PER_INCH;
    let weight_kg = weight_lbs * KG_PER_LB;
    let offset = match sex {
        Sex::Male => MALE_OFFSET,
        Sex::Female => FEMALE_OFFSET,
    };

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years) + offset;
    base * BMR_ACTIVITY_MULTIPLIER
}

/// Average daily calories from steps, barre and baseline activity.
///
/// Barre sessions are spread evenly across the week here, while the
/// simulator applies them on specific days.
pub fn compute_activity_calories(additional_daily_steps: u32, barre_sessions_per_week: u32) -> f64 {
    f64::from(additional_daily_steps) / 1000.0 * CALORIES_PER_1000_STEPS
        + f64::from(barre_sessions_per_week) * BARRE_SESSION_CALORIES / 7.0
        + BASELINE_DAILY_ACTIVITY
}

/// Average total daily burn in kcal/day
pub fn compute_total_daily_burn(
    bmr: f64,
    additional_daily_steps: u32,
    barre_sessions_per_week: u32,
) -> f64 {
    bmr + compute_activity_calories(additional_daily_steps, barre_sessions_per_week)
}

/// Headline metrics for a BMR and activity plan
pub fn compute_energy_metrics(bmr: f64, plan: &ActivityPlan) -> EnergyMetrics {
    let activity_calories =
        compute_activity_calories(plan.additional_daily_steps, plan.barre_sessions_per_week);
    let total_burn = bmr + activity_calories;

    EnergyMetrics {
        resting_bmr: bmr,
        activity_calories,
        total_burn,
        net_deficit: total_burn - f64::from(plan.daily_calorie_intake),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_profile_bmr() {
        // 150 lb, 30 years, 66 in, female
        let bmr = compute_resting_bmr(150.0, 30, 66.0, Sex::Female);
        assert!((bmr - 1558.8518).abs() < 1e-6, "bmr = {}", bmr);
    }

    #[test]
    fn test_bmr_increases_with_weight() {
        let mut previous = compute_resting_bmr(50.0, 40, 70.0, Sex::Male);
        for weight in (51..=500).map(f64::from) {
            let bmr = compute_resting_bmr(weight, 40, 70.0, Sex::Male);
            assert!(bmr > previous, "BMR not increasing at {} lbs", weight);
            previous = bmr;
        }
    }

    #[test]
    fn test_male_female_offset() {
        for &(weight, age, height) in &[(150.0, 30, 66.0), (220.0, 55, 72.5), (95.0, 18, 55.0)] {
            let male = compute_resting_bmr(weight, age, height, Sex::Male);
            let female = compute_resting_bmr(weight, age, height, Sex::Female);
            assert!(male > female);
            assert!((male - female - 166.0 * 1.1).abs() < EPS);
        }
    }

    #[test]
    fn test_bmr_passes_through_negative() {
        let bmr = compute_resting_bmr(0.0, 100, 0.0, Sex::Female);
        assert!(bmr < 0.0);
    }

    #[test]
    fn test_activity_calories() {
        assert!((compute_activity_calories(0, 0) - 200.0).abs() < EPS);
        assert!((compute_activity_calories(500, 0) - 215.0).abs() < EPS);
        assert!((compute_activity_calories(10_000, 7) - (300.0 + 210.0 + 200.0)).abs() < EPS);
    }

    #[test]
    fn test_total_daily_burn() {
        let burn = compute_total_daily_burn(1500.0, 2000, 0);
        assert!((burn - 1760.0).abs() < EPS);
    }

    #[test]
    fn test_energy_metrics() {
        let plan = ActivityPlan {
            daily_calorie_intake: 1200,
            fasting_days_per_week: 0,
            barre_sessions_per_week: 0,
            additional_daily_steps: 0,
        };
        let metrics = compute_energy_metrics(1500.0, &plan);
        assert!((metrics.total_burn - 1700.0).abs() < EPS);
        assert!((metrics.net_deficit - 500.0).abs() < EPS);
    }
}
