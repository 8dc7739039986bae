use std::collections::BTreeSet;

use super::dates::normalize_wire_date;
use super::reading::{CompareResponse, GraphPoint};

/// Line color for the single-location graph
pub const SINGLE_SERIES_COLOR: &str = "rgba(75, 192, 192, 1)";

/// One plotted value
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: String,
    pub value: f64,
}

/// One named line on a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub color: String,
    pub points: Vec<ChartPoint>,
}

/// Everything a line chart needs: the shared x labels and the series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    /// Chart for `GET /graph-data`
    pub fn single(location: &str, points: &[GraphPoint]) -> Self {
        let series = ChartSeries {
            label: series_label(location),
            color: SINGLE_SERIES_COLOR.to_string(),
            points: to_chart_points(points),
        };
        Self::from_series(vec![series])
    }

    /// Chart for `GET /compare-graph-data`
    ///
    /// Series follow the requested location order so colors stay stable while
    /// the user edits the list. Locations the API returned without being asked
    /// for are appended after them; requested locations without data get no
    /// series.
    pub fn comparison(requested: &[String], response: &CompareResponse) -> Self {
        let extra = response
            .keys()
            .filter(|location| !requested.contains(location));

        let series = requested
            .iter()
            .chain(extra)
            .filter_map(|location| response.get(location).map(|points| (location, points)))
            .enumerate()
            .map(|(index, (location, points))| ChartSeries {
                label: series_label(location),
                color: series_color(index),
                points: to_chart_points(points),
            })
            .collect();

        Self::from_series(series)
    }

    /// Labels are the ordered union of every series' dates
    fn from_series(series: Vec<ChartSeries>) -> Self {
        let labels: BTreeSet<&str> = series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.date.as_str()))
            .collect();
        let labels = labels.into_iter().map(str::to_string).collect();

        Self { labels, series }
    }

    /// Smallest and largest plotted value
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.value))
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }

    /// Position of a date on the x axis
    pub fn label_index(&self, date: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == date)
    }
}

/// Evenly spaced hue per series index
pub fn series_color(index: usize) -> String {
    format!("hsl({}, 70%, 50%)", (index * 60) % 360)
}

fn series_label(location: &str) -> String {
    format!("pH Values for Location: {}", location)
}

fn to_chart_points(points: &[GraphPoint]) -> Vec<ChartPoint> {
    points
        .iter()
        .map(|p| ChartPoint {
            date: normalize_wire_date(&p.date),
            value: p.ph_value,
        })
        .collect()
}
