use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{unknown_token, ValidationError};

/// Pre-aggregation level a time-series query was answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rollup {
    Raw,
    TenMinutely,
    Hourly,
    SixHourly,
    Daily,
    Weekly,
}

const ROLLUP_TOKENS: &[(&str, Rollup)] = &[
    ("RAW", Rollup::Raw),
    ("TEN_MINUTELY", Rollup::TenMinutely),
    ("HOURLY", Rollup::Hourly),
    ("SIX_HOURLY", Rollup::SixHourly),
    ("DAILY", Rollup::Daily),
    ("WEEKLY", Rollup::Weekly),
];

impl fmt::Display for Rollup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = ROLLUP_TOKENS
            .iter()
            .find(|(_, rollup)| rollup == self)
            .map(|(token, _)| *token)
            .unwrap_or("RAW");
        write!(f, "{}", token)
    }
}

impl FromStr for Rollup {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROLLUP_TOKENS
            .iter()
            .find(|(token, _)| token.eq_ignore_ascii_case(s))
            .map(|(_, rollup)| *rollup)
            .ok_or_else(|| {
                let valid: Vec<&str> = ROLLUP_TOKENS.iter().map(|(token, _)| *token).collect();
                unknown_token("rollup", s, &valid)
            })
    }
}

/// Which entities dominated an aggregate when a data point summarizes more
/// than one entity (e.g. the max over all DataNodes).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesCrossEntityMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entity_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entity_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_entity_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_entity_name: Option<String>,
    #[serde(default)]
    pub num_entities: f64,
}

/// Statistical summary attached to a rolled-up data point. `sampleTime` and
/// `sampleValue` identify the raw observation the rollup kept as its
/// representative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesAggregateStatistics {
    pub sample_time: DateTime<Utc>,
    pub sample_value: f64,
    pub count: u64,
    pub min: f64,
    pub min_time: DateTime<Utc>,
    pub max: f64,
    pub max_time: DateTime<Utc>,
    pub mean: f64,
    pub std_dev: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_entity_metadata: Option<TimeSeriesCrossEntityMetadata>,
}

impl TimeSeriesAggregateStatistics {
    /// Spread of the aggregated window, `max - min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// One point of a time-series stream. `aggregateStatistics` is present only
/// when the answer came from a rollup rather than raw data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesData {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_statistics: Option<TimeSeriesAggregateStatistics>,
}

/// Identity and display metadata of one time-series stream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesMetadata {
    pub metric_name: String,
    pub entity_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_numerators: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_denominators: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_collection_frequency_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_used: Option<Rollup>,
}

/// One stream of a query answer: its metadata plus the matching points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    pub metadata: TimeSeriesMetadata,
    #[serde(default = "Vec::new")]
    pub data: Vec<TimeSeriesData>,
}

/// Answer to one time-series query expression.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesResponse {
    #[serde(default = "Vec::new")]
    pub time_series: Vec<TimeSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_series_query: Option<String>,
}
