use serde::{Deserialize, Serialize};

use crate::cluster::ClusterRef;
use crate::common::{EntityStatus, HealthCheck, HealthSummary, MaintenanceOwner};

/// Run state of a service, rolled up from its roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceState {
    HistoryNotAvailable,
    Unknown,
    Starting,
    Started,
    Stopping,
    Stopped,
    Na,
}

impl ServiceState {
    pub fn is_running(self) -> bool {
        matches!(self, ServiceState::Started)
    }
}

/// Whether running processes picked up the current configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigStalenessStatus {
    Fresh,
    StaleRefreshable,
    Stale,
}

impl ConfigStalenessStatus {
    /// True when a restart (not just a refresh) is needed to converge.
    pub fn needs_restart(self) -> bool {
        matches!(self, ConfigStalenessStatus::Stale)
    }
}

/// A service instance: one deployment of a service type (HDFS, YARN, HBase,
/// ...) on a cluster. Health and staleness fields are server-computed and
/// ignored on requests.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ref: Option<ClusterRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_state: Option<ServiceState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_summary: Option<HealthSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_checks: Option<Vec<HealthCheck>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_staleness_status: Option<ConfigStalenessStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_config_staleness_status: Option<ConfigStalenessStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_owners: Option<Vec<MaintenanceOwner>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_instances_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_status: Option<EntityStatus>,
}

impl Service {
    pub fn new(name: impl Into<String>, service_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service_type: service_type.into(),
            ..Default::default()
        }
    }
}

/// Addresses a service, optionally qualified by its cluster. Management
/// services live outside any cluster, so `clusterName` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    pub service_name: String,
}

impl ServiceRef {
    pub fn new(cluster_name: impl Into<String>, service_name: impl Into<String>) -> Self {
        Self {
            cluster_name: Some(cluster_name.into()),
            service_name: service_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_type_uses_wire_name_type() {
        let service = Service::new("hdfs1", "HDFS");
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["type"], "HDFS");
        assert!(json.get("serviceType").is_none());
    }

    #[test]
    fn test_service_full_view_round_trip() {
        let service = Service {
            cluster_ref: Some(ClusterRef::new("prod")),
            service_state: Some(ServiceState::Started),
            health_summary: Some(HealthSummary::Good),
            config_staleness_status: Some(ConfigStalenessStatus::Fresh),
            ..Service::new("hdfs1", "HDFS")
        };
        let json = serde_json::to_string(&service).unwrap();
        let back: Service = serde_json::from_str(&json).unwrap();
        assert_eq!(back, service);
        assert!(json.contains(r#""serviceState":"STARTED""#));
        assert!(json.contains(r#""configStalenessStatus":"FRESH""#));
    }

    #[test]
    fn test_service_state_na_token() {
        assert_eq!(serde_json::to_string(&ServiceState::Na).unwrap(), r#""NA""#);
    }

    #[test]
    fn test_staleness_needs_restart() {
        assert!(ConfigStalenessStatus::Stale.needs_restart());
        assert!(!ConfigStalenessStatus::StaleRefreshable.needs_restart());
        assert!(!ConfigStalenessStatus::Fresh.needs_restart());
    }

    #[test]
    fn test_service_ref_without_cluster() {
        let r = ServiceRef {
            cluster_name: None,
            service_name: "mgmt".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"serviceName":"mgmt"}"#
        );
    }
}
