use serde::{Deserialize, Serialize};

use crate::common::ItemList;

/// Outcome of the server-side check of a single configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigValidationState {
    Ok,
    Warning,
    Error,
}

/// One configuration knob of a service, role or host.
///
/// Only `name` and `value` appear in the summary view; everything else is
/// full-view metadata. The wire name of the default value is `default`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_state: Option<ConfigValidationState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_warnings_suppressed: Option<bool>,
}

impl Config {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// The effective value: the explicit one if set, otherwise the default.
    pub fn effective_value(&self) -> Option<&str> {
        self.value.as_deref().or(self.default_value.as_deref())
    }
}

pub type ConfigList = ItemList<Config>;

/// Configuration of one role type within a service, returned as part of the
/// full service config view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleTypeConfig {
    pub role_type: String,
    #[serde(default = "Vec::new")]
    pub items: Vec<Config>,
}

/// Service-scoped configuration: the service-wide items plus, in the full
/// view, per-role-type configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    #[serde(default = "Vec::new")]
    pub items: Vec<Config>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_type_configs: Option<Vec<RoleTypeConfig>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value_uses_wire_name_default() {
        let config = Config {
            name: "dfs_replication".to_string(),
            default_value: Some("3".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["default"], "3");
        assert!(json.get("defaultValue").is_none());

        let back: Config = serde_json::from_value(json).unwrap();
        assert_eq!(back.default_value.as_deref(), Some("3"));
    }

    #[test]
    fn test_effective_value_prefers_explicit() {
        let mut config = Config::new("io_sort_mb", "512");
        config.default_value = Some("256".to_string());
        assert_eq!(config.effective_value(), Some("512"));
        config.value = None;
        assert_eq!(config.effective_value(), Some("256"));
    }

    #[test]
    fn test_validation_state_tokens() {
        let json = serde_json::to_string(&ConfigValidationState::Warning).unwrap();
        assert_eq!(json, r#""WARNING""#);
    }

    #[test]
    fn test_service_config_round_trip() {
        let config = ServiceConfig {
            items: vec![Config::new("hdfs_namenode_health_enabled", "true")],
            role_type_configs: Some(vec![RoleTypeConfig {
                role_type: "DATANODE".to_string(),
                items: vec![Config::new("dfs_data_dir_list", "/data/1")],
            }]),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ServiceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert!(json.contains("roleTypeConfigs"));
    }
}
