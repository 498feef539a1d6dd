//! Input collection boundary.
//!
//! Every user-facing input has a declared range. Values outside that range
//! are clamped to the nearest bound here, so the biometric model and the
//! simulator never see out-of-range values.

use crate::projection::MAX_DAY_CAP;
use crate::{ActivityPlan, Config, Error, Result, SessionState, Sex, UserProfile};
use std::fmt;
use std::str::FromStr;

/// Inclusive range for a numeric input
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
}

impl<T> Bounds<T>
where
    T: PartialOrd + Copy + fmt::Display,
{
    pub const fn new(name: &'static str, min: T, max: T) -> Self {
        Self { name, min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into range, logging when it had to move
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            tracing::warn!("{} {} below minimum, using {}", self.name, value, self.min);
            self.min
        } else if value > self.max {
            tracing::warn!("{} {} above maximum, using {}", self.name, value, self.max);
            self.max
        } else {
            value
        }
    }
}

impl Bounds<f64> {
    /// Clamp a float, mapping NaN to the minimum
    pub fn clamp_f64(&self, value: f64) -> f64 {
        if value.is_nan() {
            tracing::warn!("{} is not a number, using {}", self.name, self.min);
            return self.min;
        }
        self.clamp(value)
    }
}

pub const AGE: Bounds<u32> = Bounds::new("age", 18, 100);
pub const HEIGHT_INCHES: Bounds<f64> = Bounds::new("height", 55.0, 85.0);
/// Shared by goal, current and logged weights
pub const WEIGHT_LBS: Bounds<f64> = Bounds::new("weight", 50.0, 500.0);
pub const DAILY_CALORIE_INTAKE: Bounds<u32> = Bounds::new("daily calorie intake", 500, 2500);
pub const FASTING_DAYS_PER_WEEK: Bounds<u32> = Bounds::new("fasting days per week", 0, 5);
pub const BARRE_SESSIONS_PER_WEEK: Bounds<u32> = Bounds::new("barre sessions per week", 0, 7);
pub const ADDITIONAL_DAILY_STEPS: Bounds<u32> = Bounds::new("additional daily steps", 0, 20_000);
/// Simulator day cap; rejected rather than clamped when out of range
pub const MAX_DAYS: Bounds<u32> = Bounds::new("max days", 1, MAX_DAY_CAP);

/// Reject a day cap outside `1..=MAX_DAY_CAP`
pub fn check_max_days(max_days: u32) -> Result<()> {
    if MAX_DAYS.contains(max_days) {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "max days must be between {} and {}, got {}",
            MAX_DAYS.min, MAX_DAYS.max, max_days
        )))
    }
}

impl UserProfile {
    /// Build a profile with every field clamped into range
    pub fn clamped(age: u32, sex: Sex, height_inches: f64) -> Self {
        Self {
            age: AGE.clamp(age),
            sex,
            height_inches: HEIGHT_INCHES.clamp_f64(height_inches),
        }
    }
}

impl ActivityPlan {
    /// Build a plan with every field clamped into range
    pub fn clamped(
        daily_calorie_intake: u32,
        fasting_days_per_week: u32,
        barre_sessions_per_week: u32,
        additional_daily_steps: u32,
    ) -> Self {
        Self {
            daily_calorie_intake: DAILY_CALORIE_INTAKE.clamp(daily_calorie_intake),
            fasting_days_per_week: FASTING_DAYS_PER_WEEK.clamp(fasting_days_per_week),
            barre_sessions_per_week: BARRE_SESSIONS_PER_WEEK.clamp(barre_sessions_per_week),
            additional_daily_steps: ADDITIONAL_DAILY_STEPS.clamp(additional_daily_steps),
        }
    }
}

/// A named input that can be assigned from text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    Age,
    Sex,
    Height,
    Goal,
    Intake,
    Fasting,
    Barre,
    Steps,
}

impl InputField {
    pub const ALL: [InputField; 8] = [
        InputField::Age,
        InputField::Sex,
        InputField::Height,
        InputField::Goal,
        InputField::Intake,
        InputField::Fasting,
        InputField::Barre,
        InputField::Steps,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InputField::Age => "age",
            InputField::Sex => "sex",
            InputField::Height => "height",
            InputField::Goal => "goal",
            InputField::Intake => "intake",
            InputField::Fasting => "fasting",
            InputField::Barre => "barre",
            InputField::Steps => "steps",
        }
    }
}

impl FromStr for InputField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        InputField::ALL
            .iter()
            .copied()
            .find(|f| f.name() == key)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown field '{}'", s.trim())))
    }
}

/// Current values of every sidebar input.
///
/// Values persist between interactions so each change starts from the
/// previous one.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PlannerInputs {
    pub profile: UserProfile,
    pub activity: ActivityPlan,
}

impl PlannerInputs {
    /// Initial inputs taken from configuration, clamped into range
    pub fn from_config(config: &Config) -> Self {
        let p = &config.profile;
        let a = &config.activity;
        Self {
            profile: UserProfile::clamped(p.age, p.sex, p.height_inches),
            activity: ActivityPlan::clamped(
                a.daily_calorie_intake,
                a.fasting_days_per_week,
                a.barre_sessions_per_week,
                a.additional_daily_steps,
            ),
        }
    }

    /// Assign one field from its text form
    ///
    /// The goal weight lives in the session, so it is forwarded there.
    pub fn apply(&mut self, session: &mut SessionState, field: InputField, raw: &str) -> Result<()> {
        let raw = raw.trim();
        match field {
            InputField::Age => self.profile.age = AGE.clamp(parse_number(field, raw)?),
            InputField::Sex => self.profile.sex = raw.parse()?,
            InputField::Height => {
                self.profile.height_inches = HEIGHT_INCHES.clamp_f64(parse_number(field, raw)?)
            }
            InputField::Goal => session.set_goal_weight(parse_number(field, raw)?),
            InputField::Intake => {
                self.activity.daily_calorie_intake =
                    DAILY_CALORIE_INTAKE.clamp(parse_number(field, raw)?)
            }
            InputField::Fasting => {
                self.activity.fasting_days_per_week =
                    FASTING_DAYS_PER_WEEK.clamp(parse_number(field, raw)?)
            }
            InputField::Barre => {
                self.activity.barre_sessions_per_week =
                    BARRE_SESSIONS_PER_WEEK.clamp(parse_number(field, raw)?)
            }
            InputField::Steps => {
                self.activity.additional_daily_steps =
                    ADDITIONAL_DAILY_STEPS.clamp(parse_number(field, raw)?)
            }
        }

        tracing::debug!("Set {} to {}", field.name(), raw);
        Ok(())
    }
}

fn parse_number<T: FromStr>(field: InputField, raw: &str) -> Result<T> {
    raw.parse::<T>().map_err(|_| {
        Error::InvalidInput(format!("'{}' is not a valid value for {}", raw, field.name()))
    })
}
