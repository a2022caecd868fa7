use serde::{Deserialize, Serialize};

use crate::config::ConfigList;
use crate::service::ServiceRef;

/// A named set of configuration shared by roles of one type. Every role
/// belongs to exactly one group; each service has one base (default) group
/// per role type, which cannot be removed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleConfigGroup {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ref: Option<ServiceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigList>,
}

impl RoleConfigGroup {
    pub fn new(name: impl Into<String>, role_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role_type: Some(role_type.into()),
            ..Default::default()
        }
    }

    pub fn is_base(&self) -> bool {
        self.base.unwrap_or(false)
    }
}

/// Addresses a role config group within its service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleConfigGroupRef {
    pub role_config_group_name: String,
}

impl RoleConfigGroupRef {
    pub fn new(role_config_group_name: impl Into<String>) -> Self {
        Self {
            role_config_group_name: role_config_group_name.into(),
        }
    }
}
