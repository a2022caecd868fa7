use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Share of cluster capacity one tenant (user or resource pool) consumed
/// over the report window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantUtilization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_utilization_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_utilization_percentage: Option<f64>,
}

/// Aggregated CPU and memory usage of a cluster over a report window,
/// with per-tenant attribution. `errorMessage` is set (and everything else
/// absent) when the report could not be computed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterUtilization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cpu_cores: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_cpu_utilization: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cpu_utilization: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cpu_utilization_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_cpu_daily_peak: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_memory: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_memory_utilization: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory_utilization: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory_utilization_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_memory_daily_peak: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_utilizations: Option<Vec<TenantUtilization>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ClusterUtilization {
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization_round_trip() {
        let report = ClusterUtilization {
            total_cpu_cores: Some(512.0),
            avg_cpu_utilization: Some(37.4),
            max_cpu_utilization: Some(91.0),
            tenant_utilizations: Some(vec![TenantUtilization {
                tenant_name: Some("etl".to_string()),
                cpu_utilization_percentage: Some(21.5),
                memory_utilization_percentage: Some(18.0),
            }]),
            ..Default::default()
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totalCpuCores"], 512.0);
        assert_eq!(json["tenantUtilizations"][0]["tenantName"], "etl");
        let back: ClusterUtilization = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
        assert!(!back.is_error());
    }

    #[test]
    fn test_error_report() {
        let report: ClusterUtilization = serde_json::from_str(
            r#"{"errorMessage":"utilization reporting is not enabled"}"#,
        )
        .unwrap();
        assert!(report.is_error());
        assert!(report.avg_cpu_utilization.is_none());
    }
}
