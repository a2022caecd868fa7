use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Generic list envelope used by every list-returning endpoint:
/// `{ "items": [...] }`. A missing `items` key deserializes to an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ItemList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for ItemList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> IntoIterator for ItemList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Rolled-up health of a subject (service, role, host, nameservice).
///
/// Decoding is tolerant: a token this build does not know about maps to
/// `NotAvailable` rather than failing the whole payload, since a newer server
/// may report summaries this client predates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthSummary {
    Disabled,
    HistoryNotAvailable,
    NotAvailable,
    Good,
    Concerning,
    Bad,
}

impl HealthSummary {
    pub fn is_ok(self) -> bool {
        matches!(self, HealthSummary::Good)
    }

    /// Dominance rank when rolling several checks into one summary.
    pub fn severity(self) -> u8 {
        match self {
            HealthSummary::Disabled => 0,
            HealthSummary::HistoryNotAvailable => 1,
            HealthSummary::NotAvailable => 2,
            HealthSummary::Good => 3,
            HealthSummary::Concerning => 4,
            HealthSummary::Bad => 5,
        }
    }

    pub fn worst(self, other: HealthSummary) -> HealthSummary {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }
}

impl<'de> Deserialize<'de> for HealthSummary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(match token.as_str() {
            "DISABLED" => HealthSummary::Disabled,
            "HISTORY_NOT_AVAILABLE" => HealthSummary::HistoryNotAvailable,
            "NOT_AVAILABLE" => HealthSummary::NotAvailable,
            "GOOD" => HealthSummary::Good,
            "CONCERNING" => HealthSummary::Concerning,
            "BAD" => HealthSummary::Bad,
            other => {
                warn!(token = other, "unrecognized health summary, treating as NOT_AVAILABLE");
                HealthSummary::NotAvailable
            }
        })
    }
}

/// One health test result for a subject. `explanation` and `suppressed` are
/// only populated in the full view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub name: String,
    pub summary: HealthSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppressed: Option<bool>,
}

/// Combined run/health state of an entity, as shown in the manager UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    Unknown,
    None,
    Stopped,
    Down,
    UnknownHealth,
    DisabledHealth,
    ConcerningHealth,
    BadHealth,
    GoodHealth,
    Starting,
    Stopping,
    HistoryNotAvailable,
}

/// Level at which maintenance mode was switched on for an entity. An entity
/// can be in maintenance because of itself or any enclosing level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceOwner {
    Cluster,
    Service,
    Role,
    Host,
    ControlPlane,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_list_missing_items_is_empty() {
        let list: ItemList<String> = serde_json::from_str("{}").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_item_list_round_trip() {
        let list = ItemList::new(vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"{"items":["a","b"]}"#);
        let back: ItemList<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn test_health_summary_wire_tokens() {
        let json = serde_json::to_string(&HealthSummary::HistoryNotAvailable).unwrap();
        assert_eq!(json, r#""HISTORY_NOT_AVAILABLE""#);
        let parsed: HealthSummary = serde_json::from_str(r#""CONCERNING""#).unwrap();
        assert_eq!(parsed, HealthSummary::Concerning);
    }

    #[test]
    fn test_health_summary_tolerates_unknown_token() {
        let parsed: HealthSummary = serde_json::from_str(r#""PARTIALLY_GOOD""#).unwrap();
        assert_eq!(parsed, HealthSummary::NotAvailable);
    }

    #[test]
    fn test_health_summary_worst() {
        assert_eq!(
            HealthSummary::Good.worst(HealthSummary::Concerning),
            HealthSummary::Concerning
        );
        assert_eq!(
            HealthSummary::Bad.worst(HealthSummary::Good),
            HealthSummary::Bad
        );
        assert_eq!(
            HealthSummary::NotAvailable.worst(HealthSummary::Disabled),
            HealthSummary::NotAvailable
        );
    }

    #[test]
    fn test_health_check_optional_fields_absent_in_summary_view() {
        let json = r#"{"name":"SERVICE_HEALTH","summary":"GOOD"}"#;
        let check: HealthCheck = serde_json::from_str(json).unwrap();
        assert!(check.explanation.is_none());
        assert!(check.suppressed.is_none());
        assert_eq!(serde_json::to_string(&check).unwrap(), json);
    }
}
