use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cluster::ClusterRef;
use crate::validation::{unknown_token, ValidationError};

/// Lifecycle stage of a parcel on a cluster. Stages advance through
/// download, distribution and activation; `UNDISTRIBUTING` covers the
/// reverse path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParcelStage {
    Unavailable,
    AvailableRemotely,
    Downloading,
    Downloaded,
    Distributing,
    Distributed,
    Undistributing,
    Activating,
    Activated,
}

const PARCEL_STAGE_TOKENS: &[(&str, ParcelStage)] = &[
    ("UNAVAILABLE", ParcelStage::Unavailable),
    ("AVAILABLE_REMOTELY", ParcelStage::AvailableRemotely),
    ("DOWNLOADING", ParcelStage::Downloading),
    ("DOWNLOADED", ParcelStage::Downloaded),
    ("DISTRIBUTING", ParcelStage::Distributing),
    ("DISTRIBUTED", ParcelStage::Distributed),
    ("UNDISTRIBUTING", ParcelStage::Undistributing),
    ("ACTIVATING", ParcelStage::Activating),
    ("ACTIVATED", ParcelStage::Activated),
];

impl ParcelStage {
    pub fn is_in_transition(self) -> bool {
        matches!(
            self,
            ParcelStage::Downloading
                | ParcelStage::Distributing
                | ParcelStage::Undistributing
                | ParcelStage::Activating
        )
    }
}

impl fmt::Display for ParcelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = PARCEL_STAGE_TOKENS
            .iter()
            .find(|(_, stage)| stage == self)
            .map(|(token, _)| *token)
            .unwrap_or("UNAVAILABLE");
        write!(f, "{}", token)
    }
}

impl FromStr for ParcelStage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PARCEL_STAGE_TOKENS
            .iter()
            .find(|(token, _)| token.eq_ignore_ascii_case(s))
            .map(|(_, stage)| *stage)
            .ok_or_else(|| {
                let valid: Vec<&str> =
                    PARCEL_STAGE_TOKENS.iter().map(|(token, _)| *token).collect();
                unknown_token("parcel stage", s, &valid)
            })
    }
}

/// Progress of an in-flight parcel stage transition. Counts are stage
/// dependent: bytes while downloading, hosts while distributing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_progress: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ParcelState {
    /// Completion as 0.0..=1.0; 0.0 when no total was reported yet.
    pub fn progress_fraction(&self) -> f64 {
        match (self.progress, self.total_progress) {
            (Some(done), Some(total)) if total > 0 => done as f64 / total as f64,
            _ => 0.0,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }
}

/// A distributable binary artifact (product + version) and where it stands
/// on a cluster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub product: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<ParcelStage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ParcelState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ref: Option<ClusterRef>,
}

impl Parcel {
    pub fn new(product: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            version: version.into(),
            ..Default::default()
        }
    }
}

/// Addresses a parcel: product and version, qualified by cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    pub parcel_name: String,
    pub parcel_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_parse_is_case_insensitive() {
        assert_eq!(
            "distributed".parse::<ParcelStage>().unwrap(),
            ParcelStage::Distributed
        );
        assert_eq!(
            "Available_Remotely".parse::<ParcelStage>().unwrap(),
            ParcelStage::AvailableRemotely
        );
    }

    #[test]
    fn test_stage_parse_rejects_unknown_with_legal_list() {
        let err = "SHIPPED".parse::<ParcelStage>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("SHIPPED"));
        assert!(msg.contains("ACTIVATED"));
    }

    #[test]
    fn test_stage_display_round_trips() {
        let stage = ParcelStage::Undistributing;
        assert_eq!(stage.to_string().parse::<ParcelStage>().unwrap(), stage);
    }

    #[test]
    fn test_progress_fraction() {
        let state = ParcelState {
            progress: Some(750),
            total_progress: Some(1000),
            ..Default::default()
        };
        assert!((state.progress_fraction() - 0.75).abs() < f64::EPSILON);
        assert_eq!(ParcelState::default().progress_fraction(), 0.0);
    }

    #[test]
    fn test_parcel_round_trip() {
        let parcel = Parcel {
            stage: Some(ParcelStage::Downloading),
            state: Some(ParcelState {
                progress: Some(1),
                total_progress: Some(2),
                ..Default::default()
            }),
            cluster_ref: Some(ClusterRef::new("prod")),
            ..Parcel::new("CDH", "5.16.2-1.cdh5.16.2.p0.8")
        };
        let json = serde_json::to_string(&parcel).unwrap();
        assert!(json.contains(r#""stage":"DOWNLOADING""#));
        assert_eq!(serde_json::from_str::<Parcel>(&json).unwrap(), parcel);
    }
}
