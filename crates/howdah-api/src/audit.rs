use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One access-audit record from a service that emits audits (HDFS, HBase,
/// Hive, the manager itself). Fields are free text as logged by the
/// service; `allowed` records whether the operation was permitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impersonator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_text: Option<String>,
    #[serde(default)]
    pub allowed: bool,
}

impl AuditEvent {
    /// The acting user: the impersonator when the request was proxied,
    /// otherwise the authenticated username.
    pub fn effective_user(&self) -> Option<&str> {
        self.impersonator.as_deref().or(self.username.as_deref())
    }
}
