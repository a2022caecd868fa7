use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::common::{EntityStatus, MaintenanceOwner};
use crate::parcel::Parcel;
use crate::service::Service;

/// A cluster: a named set of hosts running interdependent services, all on
/// the same platform release.
///
/// Equality and hashing consider `name` only. The name is the stable identity
/// of a cluster; two views of the same cluster (summary vs full, different
/// points in time) compare equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_owners: Option<Vec<MaintenanceOwner>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parcels: Option<Vec<Parcel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_status: Option<EntityStatus>,
}

impl Cluster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl PartialEq for Cluster {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Cluster {}

impl Hash for Cluster {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Addresses a cluster from another resource without embedding it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRef {
    pub cluster_name: String,
}

impl ClusterRef {
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_equality_is_by_name_only() {
        let a = Cluster {
            full_version: Some("7.1.4".to_string()),
            display_name: Some("Production".to_string()),
            ..Cluster::new("prod")
        };
        let b = Cluster::new("prod");
        assert_eq!(a, b);
        assert_ne!(a, Cluster::new("staging"));
    }

    #[test]
    fn test_cluster_hash_agrees_with_equality() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(Cluster {
            full_version: Some("7.1.4".to_string()),
            ..Cluster::new("prod")
        });
        assert!(seen.contains(&Cluster::new("prod")));
    }

    #[test]
    fn test_cluster_summary_wire_shape() {
        let cluster = Cluster {
            display_name: Some("Production".to_string()),
            full_version: Some("7.1.4".to_string()),
            ..Cluster::new("prod")
        };
        let json = serde_json::to_value(&cluster).unwrap();
        assert_eq!(json["name"], "prod");
        assert_eq!(json["displayName"], "Production");
        assert_eq!(json["fullVersion"], "7.1.4");
        assert!(json.get("services").is_none());
    }

    #[test]
    fn test_cluster_ref_round_trip() {
        let r = ClusterRef::new("prod");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"clusterName":"prod"}"#);
        assert_eq!(serde_json::from_str::<ClusterRef>(&json).unwrap(), r);
    }
}
