use serde::{Deserialize, Serialize};

use crate::validation::{check_range, ValidationError};

/// Which roles of a service a rolling restart touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RolesToInclude {
    AllRoles,
    SlavesOnly,
    NonSlavesOnly,
}

/// Batching knobs for restarting a service's worker roles without losing
/// availability. Master roles restart one by one regardless.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingRestartArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slave_batch_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slave_fail_count_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stale_configs_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub un_upgraded_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_role_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_role_names: Option<Vec<String>>,
}

impl RollingRestartArgs {
    /// Sets the worker batch size; a batch must restart at least one role.
    pub fn set_slave_batch_size(&mut self, size: u32) -> Result<(), ValidationError> {
        check_range("slave batch size", i64::from(size), 1, i64::from(u32::MAX))?;
        self.slave_batch_size = Some(size);
        Ok(())
    }
}

/// Cluster-wide rolling restart: per-service batching knobs plus the choice
/// of services and role classes to include.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingRestartClusterArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slave_batch_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slave_fail_count_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stale_configs_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub un_upgraded_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles_to_include: Option<RolesToInclude>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_service_names: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

/// Parameters of a platform-release upgrade. Exactly one of
/// `cdhParcelVersion` (parcel install) or `cdhPackageVersion` (package
/// install) is set; the server infers the mechanism from which one it gets.
/// `deployClientConfig` and `startAllServices` default to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdhUpgradeArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdh_parcel_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdh_package_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_restart_args: Option<RollingRestartClusterArgs>,
    #[serde(default = "default_true")]
    pub deploy_client_config: bool,
    #[serde(default = "default_true")]
    pub start_all_services: bool,
}

impl Default for CdhUpgradeArgs {
    fn default() -> Self {
        Self {
            cdh_parcel_version: None,
            cdh_package_version: None,
            rolling_restart_args: None,
            deploy_client_config: true,
            start_all_services: true,
        }
    }
}
