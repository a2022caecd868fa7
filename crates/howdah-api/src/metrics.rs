use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observation of a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricData {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// A named metric with the observations that matched the query window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<MetricData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Metric {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn latest(&self) -> Option<&MetricData> {
        self.data
            .as_ref()?
            .iter()
            .max_by_key(|point| point.timestamp)
    }
}

/// Descriptor of a metric the monitoring subsystem can serve: identity,
/// unit decomposition, and which entity types emit it (keyed by source
/// entity, valued by the roles it applies to).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSchema {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_counter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_numerator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_denominator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<BTreeMap<String, Vec<String>>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(minute: u32, value: f64) -> MetricData {
        MetricData {
            timestamp: Utc.with_ymd_and_hms(2019, 4, 2, 10, minute, 0).unwrap(),
            value,
        }
    }

    #[test]
    fn test_latest_picks_newest_point() {
        let metric = Metric {
            data: Some(vec![point(5, 1.0), point(20, 3.0), point(10, 2.0)]),
            ..Metric::new("dfs_capacity_used")
        };
        assert_eq!(metric.latest().unwrap().value, 3.0);
        assert!(Metric::new("empty").latest().is_none());
    }

    #[test]
    fn test_metric_round_trip() {
        let metric = Metric {
            context: Some("hdfs1:nameservice=ns1".to_string()),
            unit: Some("bytes".to_string()),
            data: Some(vec![point(0, 1024.0)]),
            ..Metric::new("dfs_capacity_used")
        };
        let json = serde_json::to_string(&metric).unwrap();
        assert_eq!(serde_json::from_str::<Metric>(&json).unwrap(), metric);
    }

    #[test]
    fn test_schema_sources_round_trip() {
        let mut sources = BTreeMap::new();
        sources.insert(
            "HDFS".to_string(),
            vec!["NAMENODE".to_string(), "DATANODE".to_string()],
        );
        let schema = MetricSchema {
            name: "fsync_rate".to_string(),
            is_counter: Some(true),
            unit_numerator: Some("operations".to_string()),
            unit_denominator: Some("second".to_string()),
            sources: Some(sources),
            ..Default::default()
        };
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["isCounter"], true);
        assert_eq!(json["sources"]["HDFS"][1], "DATANODE");
        let back: MetricSchema = serde_json::from_value(json).unwrap();
        assert_eq!(back, schema);
    }
}
