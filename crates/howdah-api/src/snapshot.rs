use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::validation::{check_range, ValidationError};

/// Where HBase table snapshots are materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnapshotStorage {
    Local,
    RemoteS3,
}

/// Table selection for an HBase snapshot policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HBaseSnapshotPolicyArguments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_reg_exps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<SnapshotStorage>,
}

/// Path selection for an HDFS snapshot policy. Patterns address
/// snapshottable directories.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HdfsSnapshotPolicyArguments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_patterns: Option<Vec<String>>,
}

fn default_day_one() -> i32 {
    1
}

/// A recurring snapshot policy: how many snapshots to retain per period and
/// when within each period to take them.
///
/// Scheduling fields are range checked at the setter and again by
/// [`validate`](SnapshotPolicy::validate), since deserialization bypasses
/// setters. `dayOfMonth` accepts 1..=31 for a calendar day, or 0..=-30 to
/// count back from the last day of the month (0 is the last day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPolicy {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub hourly_snapshots: u32,
    #[serde(default)]
    pub daily_snapshots: u32,
    #[serde(default)]
    pub weekly_snapshots: u32,
    #[serde(default)]
    pub monthly_snapshots: u32,
    #[serde(default)]
    pub yearly_snapshots: u32,
    #[serde(default)]
    pub minute_of_hour: i32,
    #[serde(default)]
    pub hour_of_day: i32,
    #[serde(default = "default_day_one")]
    pub day_of_week: i32,
    #[serde(default = "default_day_one")]
    pub day_of_month: i32,
    #[serde(default = "default_day_one")]
    pub month_of_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_for_hourly_snapshots: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on_start: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on_success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on_fail: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on_abort: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hbase_arguments: Option<HBaseSnapshotPolicyArguments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdfs_arguments: Option<HdfsSnapshotPolicyArguments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_command: Option<SnapshotCommand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_successful_command: Option<SnapshotCommand>,
}

impl Default for SnapshotPolicy {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            hourly_snapshots: 0,
            daily_snapshots: 0,
            weekly_snapshots: 0,
            monthly_snapshots: 0,
            yearly_snapshots: 0,
            minute_of_hour: 0,
            hour_of_day: 0,
            day_of_week: 1,
            day_of_month: 1,
            month_of_year: 1,
            hours_for_hourly_snapshots: None,
            alert_on_start: None,
            alert_on_success: None,
            alert_on_fail: None,
            alert_on_abort: None,
            hbase_arguments: None,
            hdfs_arguments: None,
            last_command: None,
            last_successful_command: None,
        }
    }
}

impl SnapshotPolicy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn set_minute_of_hour(&mut self, minute: i32) -> Result<(), ValidationError> {
        check_range("minute of hour", i64::from(minute), 0, 59)?;
        self.minute_of_hour = minute;
        Ok(())
    }

    pub fn set_hour_of_day(&mut self, hour: i32) -> Result<(), ValidationError> {
        check_range("hour of day", i64::from(hour), 0, 23)?;
        self.hour_of_day = hour;
        Ok(())
    }

    pub fn set_day_of_week(&mut self, day: i32) -> Result<(), ValidationError> {
        check_range("day of week", i64::from(day), 1, 7)?;
        self.day_of_week = day;
        Ok(())
    }

    pub fn set_day_of_month(&mut self, day: i32) -> Result<(), ValidationError> {
        if !(-30..=31).contains(&day) {
            return Err(ValidationError::DayOfMonth(i64::from(day)));
        }
        self.day_of_month = day;
        Ok(())
    }

    pub fn set_month_of_year(&mut self, month: i32) -> Result<(), ValidationError> {
        check_range("month of year", i64::from(month), 1, 12)?;
        self.month_of_year = month;
        Ok(())
    }

    pub fn set_hours_for_hourly_snapshots(
        &mut self,
        hours: Vec<i32>,
    ) -> Result<(), ValidationError> {
        for &hour in &hours {
            check_range("hour for hourly snapshots", i64::from(hour), 0, 23)?;
        }
        self.hours_for_hourly_snapshots = Some(hours);
        Ok(())
    }

    /// Re-checks every range-validated field. Needed after deserialization,
    /// which writes fields without going through the setters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Empty {
                field: "policy name",
            });
        }
        check_range("minute of hour", i64::from(self.minute_of_hour), 0, 59)?;
        check_range("hour of day", i64::from(self.hour_of_day), 0, 23)?;
        check_range("day of week", i64::from(self.day_of_week), 1, 7)?;
        if !(-30..=31).contains(&self.day_of_month) {
            return Err(ValidationError::DayOfMonth(i64::from(self.day_of_month)));
        }
        check_range("month of year", i64::from(self.month_of_year), 1, 12)?;
        if let Some(hours) = &self.hours_for_hourly_snapshots {
            for &hour in hours {
                check_range("hour for hourly snapshots", i64::from(hour), 0, 23)?;
            }
        }
        Ok(())
    }
}

fn path_has_snapshot_segment(path: &str, name: &str) -> bool {
    let segments: Vec<&str> = path.split('/').collect();
    segments
        .windows(2)
        .any(|pair| pair[0] == ".snapshot" && pair[1] == name)
}

/// One HDFS snapshot of a snapshottable directory.
///
/// When both are present, `snapshotPath` must address the snapshot through
/// the directory's `.snapshot` namespace, i.e. contain a
/// `/.snapshot/<snapshotName>` segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HdfsSnapshot {
    pub path: String,
    pub snapshot_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
}

impl HdfsSnapshot {
    pub fn new(path: impl Into<String>, snapshot_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            snapshot_name: snapshot_name.into(),
            ..Default::default()
        }
    }

    /// Builds a snapshot with its materialized path, rejecting a path that
    /// does not go through `/.snapshot/<name>`.
    pub fn with_snapshot_path(
        path: impl Into<String>,
        snapshot_name: impl Into<String>,
        snapshot_path: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut snapshot = Self::new(path, snapshot_name);
        snapshot.set_snapshot_path(snapshot_path)?;
        Ok(snapshot)
    }

    pub fn set_snapshot_path(
        &mut self,
        snapshot_path: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let snapshot_path = snapshot_path.into();
        if !path_has_snapshot_segment(&snapshot_path, &self.snapshot_name) {
            return Err(ValidationError::SnapshotPathMismatch {
                name: self.snapshot_name.clone(),
                path: snapshot_path,
            });
        }
        self.snapshot_path = Some(snapshot_path);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(snapshot_path) = &self.snapshot_path {
            if !path_has_snapshot_segment(snapshot_path, &self.snapshot_name) {
                return Err(ValidationError::SnapshotPathMismatch {
                    name: self.snapshot_name.clone(),
                    path: snapshot_path.clone(),
                });
            }
        }
        Ok(())
    }
}

/// One HBase table snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HBaseSnapshot {
    pub snapshot_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<SnapshotStorage>,
}

/// An HDFS snapshot operation that failed, and why.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HdfsSnapshotError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_name: Option<String>,
    pub error: String,
}

/// An HBase snapshot operation that failed, and why.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HBaseSnapshotError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<SnapshotStorage>,
    pub error: String,
}

/// Outcome of one HDFS snapshot policy run: what was looked at, created,
/// deleted, and what went wrong. List fields are full-view only; the counts
/// are always present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HdfsSnapshotResult {
    #[serde(default)]
    pub processed_path_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_paths: Option<Vec<String>>,
    #[serde(default)]
    pub unprocessed_path_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unprocessed_paths: Option<Vec<String>>,
    #[serde(default)]
    pub created_snapshot_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_snapshots: Option<Vec<HdfsSnapshot>>,
    #[serde(default)]
    pub deleted_snapshot_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_snapshots: Option<Vec<HdfsSnapshot>>,
    #[serde(default)]
    pub creation_error_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_errors: Option<Vec<HdfsSnapshotError>>,
    #[serde(default)]
    pub deletion_error_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_errors: Option<Vec<HdfsSnapshotError>>,
}

/// Outcome of one HBase snapshot policy run, by table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HBaseSnapshotResult {
    #[serde(default)]
    pub processed_table_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_tables: Option<Vec<String>>,
    #[serde(default)]
    pub unprocessed_table_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unprocessed_tables: Option<Vec<String>>,
    #[serde(default)]
    pub created_snapshot_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_snapshots: Option<Vec<HBaseSnapshot>>,
    #[serde(default)]
    pub deleted_snapshot_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_snapshots: Option<Vec<HBaseSnapshot>>,
    #[serde(default)]
    pub creation_error_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_errors: Option<Vec<HBaseSnapshotError>>,
    #[serde(default)]
    pub deletion_error_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_errors: Option<Vec<HBaseSnapshotError>>,
}

/// A command that ran a snapshot policy; generic command fields plus the
/// per-service result, flattened on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotCommand {
    #[serde(flatten)]
    pub command: Command,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdfs_result: Option<HdfsSnapshotResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hbase_result: Option<HBaseSnapshotResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_month_range() {
        let mut policy = SnapshotPolicy::new("nightly");
        assert!(policy.set_day_of_month(32).is_err());
        assert!(policy.set_day_of_month(-31).is_err());
        policy.set_day_of_month(1).unwrap();
        policy.set_day_of_month(0).unwrap();
        policy.set_day_of_month(-30).unwrap();
        assert_eq!(policy.day_of_month, -30);
    }

    #[test]
    fn test_hour_of_day_range() {
        let mut policy = SnapshotPolicy::new("nightly");
        assert!(policy.set_hour_of_day(24).is_err());
        policy.set_hour_of_day(23).unwrap();
        assert_eq!(policy.hour_of_day, 23);
    }

    #[test]
    fn test_minute_and_month_ranges() {
        let mut policy = SnapshotPolicy::new("nightly");
        assert!(policy.set_minute_of_hour(60).is_err());
        policy.set_minute_of_hour(59).unwrap();
        assert!(policy.set_month_of_year(0).is_err());
        assert!(policy.set_month_of_year(13).is_err());
        policy.set_month_of_year(12).unwrap();
    }

    #[test]
    fn test_hours_for_hourly_snapshots_validated_elementwise() {
        let mut policy = SnapshotPolicy::new("hourly");
        assert!(policy
            .set_hours_for_hourly_snapshots(vec![0, 12, 24])
            .is_err());
        policy.set_hours_for_hourly_snapshots(vec![0, 12, 23]).unwrap();
    }

    #[test]
    fn test_validate_catches_out_of_range_deserialized_policy() {
        let json = r#"{"name":"bad","dayOfWeek":9}"#;
        let policy: SnapshotPolicy = serde_json::from_str(json).unwrap();
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let policy = SnapshotPolicy::default();
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_policy_defaults_match_documented_values() {
        let policy: SnapshotPolicy = serde_json::from_str(r#"{"name":"p"}"#).unwrap();
        assert_eq!(policy.hourly_snapshots, 0);
        assert_eq!(policy.minute_of_hour, 0);
        assert_eq!(policy.hour_of_day, 0);
        assert_eq!(policy.day_of_week, 1);
        assert_eq!(policy.day_of_month, 1);
        assert_eq!(policy.month_of_year, 1);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_hdfs_snapshot_path_must_match_name() {
        let snapshot =
            HdfsSnapshot::with_snapshot_path("/a", "s1", "/a/.snapshot/s1/b").unwrap();
        assert_eq!(snapshot.snapshot_path.as_deref(), Some("/a/.snapshot/s1/b"));

        assert!(HdfsSnapshot::with_snapshot_path("/a", "s1", "/a/.snapshot/s2/b").is_err());
        // Prefix of another snapshot name is not a match.
        assert!(HdfsSnapshot::with_snapshot_path("/a", "s1", "/a/.snapshot/s10/b").is_err());
        // Path ending at the snapshot root is fine.
        assert!(HdfsSnapshot::with_snapshot_path("/a", "s1", "/a/.snapshot/s1").is_ok());
    }

    #[test]
    fn test_hdfs_snapshot_validate_after_deserialize() {
        let json = r#"{"path":"/a","snapshotName":"s1","snapshotPath":"/elsewhere/s1"}"#;
        let snapshot: HdfsSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_snapshot_command_round_trip() {
        let command = SnapshotCommand {
            command: Command::new(77, "SnapshotPolicyRun"),
            hdfs_result: Some(HdfsSnapshotResult {
                processed_path_count: 3,
                created_snapshot_count: 3,
                created_snapshots: Some(vec![HdfsSnapshot::new("/data", "p-2019-04-02")]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["id"], 77);
        assert_eq!(json["hdfsResult"]["processedPathCount"], 3);
        let back: SnapshotCommand = serde_json::from_value(json).unwrap();
        assert_eq!(back, command);
    }

    #[test]
    fn test_hbase_policy_arguments_wire_shape() {
        let args = HBaseSnapshotPolicyArguments {
            table_reg_exps: Some(vec!["sales_.*".to_string()]),
            storage: Some(SnapshotStorage::RemoteS3),
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["tableRegExps"][0], "sales_.*");
        assert_eq!(json["storage"], "REMOTE_S3");
    }
}
