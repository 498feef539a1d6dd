//! Time series handed to chart renderers.
//!
//! Series are plain `(date, value)` pairs. Renderers read them without
//! mutating; the CSV writer feeds external plotting tools.

use crate::projection::Projection;
use crate::session::WeightLog;
use crate::Result;
use chrono::NaiveDate;
use std::io::Write;

/// A named line on a chart
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<(NaiveDate, f64)>,
}

impl ChartSeries {
    /// Projected weight per simulated day
    pub fn from_projection(projection: &Projection) -> Self {
        Self {
            name: "Weight (lbs)".into(),
            points: projection.points.iter().map(|p| (p.date, p.weight)).collect(),
        }
    }

    /// Logged weights in logging order
    pub fn from_log(log: &WeightLog) -> Self {
        Self {
            name: "weight".into(),
            points: log.renderable_series(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest values, if any
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut values = self.points.iter().map(|&(_, v)| v);
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    date: String,
    weight: f64,
}

/// Write a series as `date,weight` CSV rows
pub fn write_csv<W: Write>(series: &ChartSeries, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for &(date, weight) in &series.points {
        csv_writer.serialize(CsvRow {
            date: date.format("%Y-%m-%d").to_string(),
            weight,
        })?;
    }

    csv_writer.flush()?;
    tracing::debug!("Wrote {} CSV rows for {}", series.points.len(), series.name);
    Ok(())
}
