use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{HealthCheck, HealthSummary, MaintenanceOwner};
use crate::role::{CommissionState, RoleRef};
use crate::validation::{check_range, ValidationError};

/// A machine managed by Howdah. `hostId` is the stable identity assigned at
/// registration; `hostname` can change when the machine is renamed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub host_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_heartbeat: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_refs: Option<Vec<RoleRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_summary: Option<HealthSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_checks: Option<Vec<HealthCheck>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_owners: Option<Vec<MaintenanceOwner>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_state: Option<CommissionState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_cores: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_phys_mem_bytes: Option<u64>,
}

impl Host {
    pub fn new(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
            ..Default::default()
        }
    }

    /// Heartbeat age relative to `now`, when a heartbeat was ever received.
    pub fn heartbeat_age(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        self.last_heartbeat.map(|hb| now - hb)
    }
}

/// Addresses a host by its stable id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRef {
    pub host_id: String,
}

impl HostRef {
    pub fn new(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
        }
    }
}

/// Strategy for provisioning a JDK while installing agents onto hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JavaInstallStrategy {
    Auto,
    None,
}

/// Parameters of the agent-install operation that brings bare hosts under
/// management. Credentials are write-only: the server never echoes them back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostInstallArguments {
    #[serde(default = "Vec::new")]
    pub host_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_port: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_install_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpg_key_custom_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_install_strategy: Option<JavaInstallStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlimited_jce: Option<bool>,
}

impl HostInstallArguments {
    /// Sets the SSH port, rejecting values outside 1..=65535.
    pub fn set_ssh_port(&mut self, port: u32) -> Result<(), ValidationError> {
        check_range("ssh port", i64::from(port), 1, 65535)?;
        self.ssh_port = Some(port);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_host_round_trip() {
        let host = Host {
            hostname: Some("worker-04.example.com".to_string()),
            ip_address: Some("10.20.1.14".to_string()),
            rack_id: Some("/rack2".to_string()),
            num_cores: Some(32),
            total_phys_mem_bytes: Some(135_291_469_824),
            ..Host::new("c3c0bb8f-22a9")
        };
        let json = serde_json::to_string(&host).unwrap();
        assert!(json.contains(r#""hostId":"c3c0bb8f-22a9""#));
        assert!(json.contains(r#""totalPhysMemBytes""#));
        assert_eq!(serde_json::from_str::<Host>(&json).unwrap(), host);
    }

    #[test]
    fn test_heartbeat_age() {
        let seen = Utc.with_ymd_and_hms(2019, 4, 2, 10, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2019, 4, 2, 10, 0, 45).unwrap();
        let host = Host {
            last_heartbeat: Some(seen),
            ..Host::new("h-1")
        };
        assert_eq!(host.heartbeat_age(now), Some(chrono::Duration::seconds(45)));
        assert_eq!(Host::new("h-2").heartbeat_age(now), None);
    }

    #[test]
    fn test_set_ssh_port_rejects_zero_and_overflow() {
        let mut args = HostInstallArguments::default();
        assert!(args.set_ssh_port(0).is_err());
        assert!(args.set_ssh_port(65536).is_err());
        args.set_ssh_port(2222).unwrap();
        assert_eq!(args.ssh_port, Some(2222));
    }

    #[test]
    fn test_install_arguments_wire_shape() {
        let args = HostInstallArguments {
            host_names: vec!["worker-04.example.com".to_string()],
            user_name: Some("root".to_string()),
            java_install_strategy: Some(JavaInstallStrategy::Auto),
            ..Default::default()
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["hostNames"][0], "worker-04.example.com");
        assert_eq!(json["javaInstallStrategy"], "AUTO");
        assert!(json.get("password").is_none());
    }
}
