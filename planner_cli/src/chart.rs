//! Text line chart for date-indexed series.

use chrono::NaiveDate;
use planner_core::ChartSeries;

pub const DEFAULT_WIDTH: usize = 60;
pub const DEFAULT_HEIGHT: usize = 12;

const LABEL_WIDTH: usize = 7;

/// Render a series as a fixed-size text chart.
///
/// Points are plotted in date order regardless of the order they were
/// supplied in. Long series are sampled down to `width` columns. Returns an
/// empty string for an empty series.
pub fn render_line_chart(series: &ChartSeries, width: usize, height: usize) -> String {
    let width = width.max(2);
    let height = height.max(2);

    let mut points: Vec<(NaiveDate, f64)> = series.points.clone();
    points.sort_by_key(|&(date, _)| date);

    let (lo, hi) = match series.value_range() {
        Some((lo, hi)) if hi - lo > f64::EPSILON => (lo, hi),
        Some((v, _)) => (v - 1.0, v + 1.0),
        None => return String::new(),
    };

    let columns = sample(&points, width);
    let mut grid = vec![vec![' '; columns.len()]; height];
    for (col, &(_, value)) in columns.iter().enumerate() {
        grid[row_for(value, lo, hi, height)][col] = '*';
    }

    let mut out = String::new();
    out.push_str(&series.name);
    out.push('\n');

    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            format!("{:>w$.1}", hi, w = LABEL_WIDTH)
        } else if row == height - 1 {
            format!("{:>w$.1}", lo, w = LABEL_WIDTH)
        } else {
            " ".repeat(LABEL_WIDTH)
        };
        let line: String = cells.iter().collect();
        out.push_str(&format!("{} |{}\n", label, line.trim_end()));
    }

    out.push_str(&format!(
        "{} +{}\n",
        " ".repeat(LABEL_WIDTH),
        "-".repeat(columns.len())
    ));

    let first = columns[0].0.format("%Y-%m-%d").to_string();
    let last = columns[columns.len() - 1].0.format("%Y-%m-%d").to_string();
    let gap = (columns.len() + 1).saturating_sub(first.len() + last.len()).max(1);
    if columns.len() > 1 {
        out.push_str(&format!(
            "{}  {}{}{}\n",
            " ".repeat(LABEL_WIDTH),
            first,
            " ".repeat(gap),
            last
        ));
    } else {
        out.push_str(&format!("{}  {}\n", " ".repeat(LABEL_WIDTH), first));
    }

    out
}

/// Pick at most `width` evenly spaced points, always keeping both ends
fn sample(points: &[(NaiveDate, f64)], width: usize) -> Vec<(NaiveDate, f64)> {
    if points.len() <= width {
        return points.to_vec();
    }
    let last = points.len() - 1;
    (0..width)
        .map(|col| points[col * last / (width - 1)])
        .collect()
}

fn row_for(value: f64, lo: f64, hi: f64, height: usize) -> usize {
    let scaled = (hi - value) / (hi - lo) * (height - 1) as f64;
    (scaled.round().max(0.0) as usize).min(height - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn series(points: Vec<(NaiveDate, f64)>) -> ChartSeries {
        ChartSeries {
            name: "weight".into(),
            points,
        }
    }

    #[test]
    fn test_empty_series_renders_nothing() {
        assert!(render_line_chart(&series(vec![]), 40, 8).is_empty());
    }

    #[test]
    fn test_chart_shape() {
        let s = series(vec![(date(1), 150.0), (date(2), 145.0), (date(3), 140.0)]);
        let chart = render_line_chart(&s, 40, 5);
        let lines: Vec<&str> = chart.lines().collect();

        // Title, 5 plot rows, axis, date labels
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "weight");
        assert!(lines[1].starts_with("  150.0 |*"));
        assert!(lines[5].starts_with("  140.0 |  *"));
        assert!(lines[7].contains("2024-01-01"));
        assert!(lines[7].contains("2024-01-03"));
    }

    #[test]
    fn test_points_plotted_in_date_order() {
        let s = series(vec![(date(3), 140.0), (date(1), 150.0)]);
        let chart = render_line_chart(&s, 40, 3);
        let lines: Vec<&str> = chart.lines().collect();

        // Highest value (earliest date) is in the first column
        assert_eq!(lines[1], "  150.0 |*");
        assert_eq!(lines[3], "  140.0 | *");
    }

    #[test]
    fn test_long_series_is_sampled() {
        let points: Vec<_> = (1..=31).map(|d| (date(d), 200.0 - f64::from(d))).collect();
        let chart = render_line_chart(&series(points), 10, 4);
        let axis = chart.lines().nth(5).unwrap();

        assert_eq!(axis.trim(), format!("+{}", "-".repeat(10)));
    }

    #[test]
    fn test_flat_series() {
        let s = series(vec![(date(1), 150.0)]);
        let chart = render_line_chart(&s, 20, 3);
        assert!(chart.contains("151.0"));
        assert!(chart.contains("149.0"));
        assert!(chart.contains('*'));
    }
}
