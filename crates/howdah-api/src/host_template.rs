use serde::{Deserialize, Serialize};

use crate::cluster::ClusterRef;
use crate::role_config_group::RoleConfigGroupRef;

/// A reusable host layout: the set of role config groups whose role types
/// should be instantiated when the template is applied to a host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostTemplate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ref: Option<ClusterRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_config_group_refs: Option<Vec<RoleConfigGroupRef>>,
}

impl HostTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_template_round_trip() {
        let template = HostTemplate {
            cluster_ref: Some(ClusterRef::new("prod")),
            role_config_group_refs: Some(vec![
                RoleConfigGroupRef::new("hdfs1-DATANODE-BASE"),
                RoleConfigGroupRef::new("yarn1-NODEMANAGER-BASE"),
            ]),
            ..HostTemplate::new("worker")
        };
        let json = serde_json::to_string(&template).unwrap();
        assert!(json.contains("roleConfigGroupRefs"));
        assert_eq!(serde_json::from_str::<HostTemplate>(&json).unwrap(), template);
    }
}
