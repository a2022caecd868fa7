use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{unknown_token, ValidationError};

/// Status of a batch workload (job, Oozie action, query) tracked by the
/// activity monitor.
///
/// `UNKNOWN` is an internal sentinel for records the monitor could not
/// classify; it is never a legal input token, so [`FromStr`] rejects it
/// along with anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    Unknown,
    Submitted,
    Started,
    Suspended,
    Failed,
    Killed,
    Succeeded,
    AssumedSucceeded,
}

const ACTIVITY_STATUS_TOKENS: &[(&str, ActivityStatus)] = &[
    ("SUBMITTED", ActivityStatus::Submitted),
    ("STARTED", ActivityStatus::Started),
    ("SUSPENDED", ActivityStatus::Suspended),
    ("FAILED", ActivityStatus::Failed),
    ("KILLED", ActivityStatus::Killed),
    ("SUCCEEDED", ActivityStatus::Succeeded),
    ("ASSUMED_SUCCEEDED", ActivityStatus::AssumedSucceeded),
];

impl ActivityStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ActivityStatus::Failed
                | ActivityStatus::Killed
                | ActivityStatus::Succeeded
                | ActivityStatus::AssumedSucceeded
        )
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = ACTIVITY_STATUS_TOKENS
            .iter()
            .find(|(_, status)| status == self)
            .map(|(token, _)| *token)
            .unwrap_or("UNKNOWN");
        write!(f, "{}", token)
    }
}

impl FromStr for ActivityStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ACTIVITY_STATUS_TOKENS
            .iter()
            .find(|(token, _)| token.eq_ignore_ascii_case(s))
            .map(|(_, status)| *status)
            .ok_or_else(|| {
                let valid: Vec<&str> = ACTIVITY_STATUS_TOKENS
                    .iter()
                    .map(|(token, _)| *token)
                    .collect();
                unknown_token("activity status", s, &valid)
            })
    }
}

/// Framework a tracked activity ran under. Same sentinel contract as
/// [`ActivityStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Unknown,
    Oozie,
    Pig,
    Hive,
    Mr,
    Streaming,
}

const ACTIVITY_TYPE_TOKENS: &[(&str, ActivityType)] = &[
    ("OOZIE", ActivityType::Oozie),
    ("PIG", ActivityType::Pig),
    ("HIVE", ActivityType::Hive),
    ("MR", ActivityType::Mr),
    ("STREAMING", ActivityType::Streaming),
];

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = ACTIVITY_TYPE_TOKENS
            .iter()
            .find(|(_, activity_type)| activity_type == self)
            .map(|(token, _)| *token)
            .unwrap_or("UNKNOWN");
        write!(f, "{}", token)
    }
}

impl FromStr for ActivityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ACTIVITY_TYPE_TOKENS
            .iter()
            .find(|(token, _)| token.eq_ignore_ascii_case(s))
            .map(|(_, activity_type)| *activity_type)
            .ok_or_else(|| {
                let valid: Vec<&str> = ACTIVITY_TYPE_TOKENS
                    .iter()
                    .map(|(token, _)| *token)
                    .collect();
                unknown_token("activity type", s, &valid)
            })
    }
}

/// One tracked workload on the cluster, as reported by the activity
/// monitor. Everything beyond the name is best-effort: fields the
/// framework did not report are absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combiner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reducer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_priority: Option<String>,
}

impl Activity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
