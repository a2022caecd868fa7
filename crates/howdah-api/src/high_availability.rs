use serde::{Deserialize, Serialize};

use crate::upgrade::RollingRestartClusterArgs;

/// Shared-edits topology of an HDFS NameNode pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HdfsHaArguments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_shared_edits_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand_by_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand_by_shared_edits_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_dependent_services: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_client_configs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_quorum_storage: Option<bool>,
}

/// Placement of one JournalNode created while enabling quorum-based HA.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalNodeArguments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jn_host_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jn_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jn_edits_dir: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Parameters for converting an HDFS service to quorum-journal NameNode HA.
/// The `clearExisting*` and `forceInitZNode` flags default to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableNnHaArguments {
    pub active_nn_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby_nn_host_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby_name_dir_list: Option<Vec<String>>,
    pub nameservice: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qj_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_fc_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby_fc_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zk_service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jns: Option<Vec<JournalNodeArguments>>,
    #[serde(default = "default_true")]
    pub force_init_z_node: bool,
    #[serde(default = "default_true")]
    pub clear_existing_standby_name_dirs: bool,
    #[serde(default = "default_true")]
    pub clear_existing_jn_edits_dir: bool,
}

impl EnableNnHaArguments {
    pub fn new(active_nn_name: impl Into<String>, nameservice: impl Into<String>) -> Self {
        Self {
            active_nn_name: active_nn_name.into(),
            standby_nn_host_id: None,
            standby_name_dir_list: None,
            nameservice: nameservice.into(),
            qj_name: None,
            active_fc_name: None,
            standby_fc_name: None,
            zk_service_name: None,
            jns: None,
            force_init_z_node: true,
            clear_existing_standby_name_dirs: true,
            clear_existing_jn_edits_dir: true,
        }
    }
}

/// Parameters for falling back from NameNode HA to a SecondaryNameNode
/// checkpoint topology.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableNnHaArguments {
    pub active_nn_name: String,
    pub snn_host_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snn_check_point_dir_list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snn_name: Option<String>,
}

/// Parameters for adding a standby YARN ResourceManager.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableRmHaArguments {
    pub new_rm_host_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zk_service_name: Option<String>,
}

/// Parameters for adding load-balanced Oozie servers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableOozieHaArguments {
    #[serde(default = "Vec::new")]
    pub new_oozie_server_host_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_oozie_server_role_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zk_service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_host_port: Option<String>,
}

/// Parameters for collapsing Oozie back to a single server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableOozieHaArguments {
    pub active_name: String,
}

/// Parameters for adding a standby Llama ApplicationMaster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableLlamaHaArguments {
    pub new_llama_host_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_llama_role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zk_service_name: Option<String>,
}

/// Parameters for dropping back to a single Llama ApplicationMaster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableLlamaHaArguments {
    pub active_name: String,
}

/// Parameters for adding a standby Sentry server. The rolling-restart args
/// control how dependent services pick up the change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableSentryHaArguments {
    pub new_sentry_host_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_sentry_role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zk_service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrc_args: Option<RollingRestartClusterArgs>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_nn_ha_clear_flags_default_true() {
        let args: EnableNnHaArguments = serde_json::from_str(
            r#"{"activeNnName":"hdfs1-nn-1","nameservice":"ns1"}"#,
        )
        .unwrap();
        assert!(args.force_init_z_node);
        assert!(args.clear_existing_standby_name_dirs);
        assert!(args.clear_existing_jn_edits_dir);
        assert_eq!(args, EnableNnHaArguments::new("hdfs1-nn-1", "ns1"));
    }

    #[test]
    fn test_enable_nn_ha_wire_shape() {
        let mut args = EnableNnHaArguments::new("hdfs1-nn-1", "ns1");
        args.standby_nn_host_id = Some("h-7".to_string());
        args.jns = Some(vec![JournalNodeArguments {
            jn_host_id: Some("h-8".to_string()),
            jn_edits_dir: Some("/data/jn".to_string()),
            ..Default::default()
        }]);
        args.force_init_z_node = false;
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["activeNnName"], "hdfs1-nn-1");
        assert_eq!(json["jns"][0]["jnEditsDir"], "/data/jn");
        assert_eq!(json["forceInitZNode"], false);
    }

    #[test]
    fn test_oozie_ha_round_trip() {
        let args = EnableOozieHaArguments {
            new_oozie_server_host_ids: vec!["h-3".to_string(), "h-4".to_string()],
            load_balancer_host_port: Some("lb.example.com:11000".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(
            serde_json::from_str::<EnableOozieHaArguments>(&json).unwrap(),
            args
        );
    }
}
