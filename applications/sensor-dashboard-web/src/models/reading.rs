use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

use super::dates::{display_date, display_time};

/// One sensor measurement as returned by `GET /data`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reading {
    pub id: i64,
    #[serde(deserialize_with = "number_or_string")]
    pub ph_value: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub temperature: f64,
    pub location: String,
    pub time: String,
    pub date: String,
}

/// Daily pH average as returned by the graph endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphPoint {
    pub date: String,
    #[serde(deserialize_with = "number_or_string")]
    pub ph_value: f64,
}

/// Response of `GET /compare-graph-data`: location name to its daily averages
pub type CompareResponse = BTreeMap<String, Vec<GraphPoint>>;

/// Display-ready table row for a reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingRow {
    pub id: i64,
    pub ph_value: String,
    pub temperature: String,
    pub location: String,
    pub time: String,
    pub date: String,
}

impl From<&Reading> for ReadingRow {
    fn from(reading: &Reading) -> Self {
        Self {
            id: reading.id,
            ph_value: reading.ph_value.to_string(),
            temperature: reading.temperature.to_string(),
            location: reading.location.clone(),
            time: display_time(&reading.time),
            date: display_date(&reading.date),
        }
    }
}

impl fmt::Display for ReadingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.ph_value, self.temperature, self.location, self.time, self.date
        )
    }
}

/// Decimal columns (e.g. `AVG(ph_value)`) may be serialized as strings
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numeric {
        Number(f64),
        Text(String),
    }

    match Numeric::deserialize(deserializer)? {
        Numeric::Number(n) => Ok(n),
        Numeric::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {}", s))),
    }
}
