use serde::{Deserialize, Serialize};

use crate::common::{EntityStatus, HealthCheck, HealthSummary, MaintenanceOwner};
use crate::host::HostRef;
use crate::role_config_group::RoleConfigGroupRef;
use crate::service::{ConfigStalenessStatus, ServiceRef};

/// Run state of a single role instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleState {
    HistoryNotAvailable,
    Unknown,
    Starting,
    Started,
    Busy,
    Stopping,
    Stopped,
    Na,
}

impl RoleState {
    pub fn is_running(self) -> bool {
        matches!(self, RoleState::Started | RoleState::Busy)
    }
}

/// Commission state of a role or host. Decommissioned subjects stay in the
/// topology but take no workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionState {
    Commissioned,
    Decommissioning,
    Decommissioned,
}

/// High-availability position of a role that participates in a failover pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HaStatus {
    Active,
    Standby,
    Unknown,
}

/// A role instance: one daemon of a given type (NameNode, DataNode,
/// RegionServer, ...) assigned to a host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub name: String,
    #[serde(rename = "type")]
    pub role_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ref: Option<ServiceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_ref: Option<HostRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_state: Option<RoleState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_state: Option<CommissionState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_summary: Option<HealthSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_checks: Option<Vec<HealthCheck>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ha_status: Option<HaStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_staleness_status: Option<ConfigStalenessStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_owners: Option<Vec<MaintenanceOwner>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_config_group_ref: Option<RoleConfigGroupRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_status: Option<EntityStatus>,
}

impl Role {
    pub fn new(name: impl Into<String>, role_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role_type: role_type.into(),
            ..Default::default()
        }
    }
}

/// Addresses a role instance. Cluster and service qualifiers are optional so
/// the same shape serves both cluster services and the management service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub role_name: String,
}

impl RoleRef {
    pub fn new(
        cluster_name: impl Into<String>,
        service_name: impl Into<String>,
        role_name: impl Into<String>,
    ) -> Self {
        Self {
            cluster_name: Some(cluster_name.into()),
            service_name: Some(service_name.into()),
            role_name: role_name.into(),
        }
    }
}
