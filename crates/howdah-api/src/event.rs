use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{unknown_token, ValidationError};

/// Source category of an event. `UNKNOWN` is the internal
/// could-not-classify sentinel and is rejected as an input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    Unknown,
    HealthEvent,
    LogEvent,
    AuditEvent,
    ActivityEvent,
    Hbase,
    System,
}

const EVENT_CATEGORY_TOKENS: &[(&str, EventCategory)] = &[
    ("HEALTH_EVENT", EventCategory::HealthEvent),
    ("LOG_EVENT", EventCategory::LogEvent),
    ("AUDIT_EVENT", EventCategory::AuditEvent),
    ("ACTIVITY_EVENT", EventCategory::ActivityEvent),
    ("HBASE", EventCategory::Hbase),
    ("SYSTEM", EventCategory::System),
];

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = EVENT_CATEGORY_TOKENS
            .iter()
            .find(|(_, category)| category == self)
            .map(|(token, _)| *token)
            .unwrap_or("UNKNOWN");
        write!(f, "{}", token)
    }
}

impl FromStr for EventCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EVENT_CATEGORY_TOKENS
            .iter()
            .find(|(token, _)| token.eq_ignore_ascii_case(s))
            .map(|(_, category)| *category)
            .ok_or_else(|| {
                let valid: Vec<&str> = EVENT_CATEGORY_TOKENS
                    .iter()
                    .map(|(token, _)| *token)
                    .collect();
                unknown_token("event category", s, &valid)
            })
    }
}

/// How urgently an event deserves operator attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventSeverity {
    Unknown,
    Informational,
    Important,
    Critical,
}

/// One keyed attribute of an event. Attributes are multi-valued: a restart
/// event touching three roles carries one `ROLE` attribute with three
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAttribute {
    pub name: String,
    #[serde(default = "Vec::new")]
    pub values: Vec<String>,
}

impl EventAttribute {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// A noteworthy occurrence in the cluster: health transitions, log
/// messages promoted to events, audit records, activity state changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_occurred: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_received: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EventCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<EventSeverity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<EventAttribute>>,
}

impl Event {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// First value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()?
            .iter()
            .find(|attribute| attribute.name == name)?
            .values
            .first()
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(
            "health_event".parse::<EventCategory>().unwrap(),
            EventCategory::HealthEvent
        );
    }

    #[test]
    fn test_category_parse_rejects_sentinel_and_lists_legal() {
        let err = "UNKNOWN".parse::<EventCategory>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(
            "HEALTH_EVENT, LOG_EVENT, AUDIT_EVENT, ACTIVITY_EVENT, HBASE, SYSTEM"
        ));
    }

    #[test]
    fn test_event_attribute_lookup() {
        let event = Event {
            attributes: Some(vec![
                EventAttribute::new("CLUSTER", vec!["prod".to_string()]),
                EventAttribute::new(
                    "ROLE",
                    vec!["hdfs1-dn-1".to_string(), "hdfs1-dn-2".to_string()],
                ),
            ]),
            ..Event::new("evt-8c1")
        };
        assert_eq!(event.attribute("CLUSTER"), Some("prod"));
        assert_eq!(event.attribute("ROLE"), Some("hdfs1-dn-1"));
        assert_eq!(event.attribute("HOST"), None);
    }

    #[test]
    fn test_event_round_trip() {
        let event = Event {
            content: Some("Health of DATANODE hdfs1-dn-1 became BAD".to_string()),
            category: Some(EventCategory::HealthEvent),
            severity: Some(EventSeverity::Critical),
            alert: Some(true),
            ..Event::new("evt-8c1")
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""category":"HEALTH_EVENT""#));
        assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), event);
    }
}
