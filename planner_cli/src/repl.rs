//! Command parsing for the interactive session.

use chrono::NaiveDate;
use planner_core::{Error, InputField, Result};

/// One line of user input
#[derive(Clone, Debug, PartialEq)]
pub enum SessionCommand {
    Set { field: InputField, value: String },
    Log { weight: f64, date: Option<NaiveDate> },
    Show,
    History,
    Inputs,
    Help,
    Quit,
    Empty,
}

pub const HELP: &str = "\
Commands:
  set <field> <value>       fields: age, sex, height, goal, intake, fasting, barre, steps
  log <weight> [YYYY-MM-DD] log a weight (defaults to today)
  show                      show metrics and projection
  history                   show logged weights
  inputs                    show current inputs
  help                      show this help
  quit                      end the session";

/// Parse a line typed at the session prompt
pub fn parse_command(line: &str) -> Result<SessionCommand> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(SessionCommand::Empty);
    };
    let args: Vec<&str> = words.collect();

    match (verb.to_lowercase().as_str(), args.as_slice()) {
        ("set", [field, value]) => Ok(SessionCommand::Set {
            field: field.parse()?,
            value: (*value).to_string(),
        }),
        ("set", _) => Err(Error::InvalidInput("usage: set <field> <value>".into())),
        ("log", [weight]) => Ok(SessionCommand::Log {
            weight: parse_weight(weight)?,
            date: None,
        }),
        ("log", [weight, date]) => Ok(SessionCommand::Log {
            weight: parse_weight(weight)?,
            date: Some(parse_date(date)?),
        }),
        ("log", _) => Err(Error::InvalidInput(
            "usage: log <weight> [YYYY-MM-DD]".into(),
        )),
        ("show", []) => Ok(SessionCommand::Show),
        ("history", []) => Ok(SessionCommand::History),
        ("inputs", []) => Ok(SessionCommand::Inputs),
        ("help", _) | ("?", _) => Ok(SessionCommand::Help),
        ("quit", []) | ("exit", []) => Ok(SessionCommand::Quit),
        (other, _) => Err(Error::InvalidInput(format!(
            "Unknown command '{}', type 'help' for a list",
            other
        ))),
    }
}

fn parse_weight(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
        .ok_or_else(|| Error::InvalidInput(format!("'{}' is not a weight", raw)))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| Error::InvalidInput(format!("Invalid date '{}': {}", raw, e)))
}
