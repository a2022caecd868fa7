use serde::{Deserialize, Serialize};

use crate::common::{HealthCheck, HealthSummary};
use crate::role::RoleRef;

/// A federated HDFS nameservice: the NameNode pair (or NameNode plus
/// SecondaryNameNode) answering for one slice of the namespace, with the
/// mount points it serves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nameservice {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_failover_controller: Option<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand_by: Option<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand_by_failover_controller: Option<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_summary: Option<HealthSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_checks: Option<Vec<HealthCheck>>,
}

impl Nameservice {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// True when the nameservice runs with an automatic-failover HA pair
    /// rather than a SecondaryNameNode checkpoint topology.
    pub fn is_ha(&self) -> bool {
        self.stand_by.is_some()
    }
}
