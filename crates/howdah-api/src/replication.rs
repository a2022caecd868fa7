use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::service::ServiceRef;

/// Unit of a schedule's repeat interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleIntervalUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Distribution strategy for the copy job backing an HDFS replication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplicationStrategy {
    /// Split work evenly over the file listing up front.
    Static,
    /// Let fast mappers steal work from slow ones.
    Dynamic,
}

/// What a cloud Hive replication carries across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplicationOption {
    MetadataOnly,
    MetadataAndData,
}

/// Parameters of an HDFS directory replication between two clusters.
///
/// Everything except the source and the two paths is an optional knob with a
/// server-side default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HdfsReplicationArguments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_service: Option<ServiceRef>,
    pub source_path: String,
    pub destination_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapreduce_service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler_pool_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_maps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_per_map: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abort_on_error: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_missing_files: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_replication_count: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_block_size: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_permissions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_checksum_checks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_trash: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_strategy: Option<ReplicationStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_x_attrs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusion_filters: Option<Vec<String>>,
}

impl HdfsReplicationArguments {
    pub fn new(source_path: impl Into<String>, destination_path: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            destination_path: destination_path.into(),
            ..Default::default()
        }
    }
}

/// A database/table pair selected for Hive replication. An unset table name
/// means every table in the database.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

/// Parameters of a Hive metastore (and optionally data) replication.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveReplicationArguments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_service: Option<ServiceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_filters: Option<Vec<HiveTable>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicate_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdfs_arguments: Option<HdfsReplicationArguments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicate_impala_metadata: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_invalidate_metadata: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_threads: Option<u32>,
}

/// Hive replication targeting cloud object storage: the on-premises
/// arguments plus the account and root-path addressing. Flattened on the
/// wire, so a plain Hive payload with the extra keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveCloudReplicationArguments {
    #[serde(flatten)]
    pub hive_arguments: HiveReplicationArguments,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_root_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_option: Option<ReplicationOption>,
}

/// A recurring replication job: schedule fields plus the arguments of the
/// replication it launches. Exactly one of the argument payloads is set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_unit: Option<ScheduleIntervalUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on_start: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on_success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on_fail: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_on_abort: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdfs_arguments: Option<HdfsReplicationArguments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hive_arguments: Option<HiveReplicationArguments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<ReplicationCommand>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// One counter emitted by the copy job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HdfsReplicationCounter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

/// Outcome details of one HDFS replication run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HdfsReplicationResult {
    #[serde(default)]
    pub progress: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counters: Option<Vec<HdfsReplicationCounter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_files_dry_run: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_bytes_dry_run: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_files_expected: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_bytes_expected: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_files_copied: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_bytes_copied: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_files_skipped: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_bytes_skipped: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_files_deleted: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_files_copy_failed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_bytes_copy_failed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_details_uri: Option<String>,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshotted_dirs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_as_user: Option<String>,
}

impl HdfsReplicationResult {
    /// True when the run failed to copy anything it was asked to.
    pub fn has_failures(&self) -> bool {
        self.setup_error.is_some() || self.num_files_copy_failed.unwrap_or(0) > 0
    }
}

/// A table that failed to replicate, and why.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveReplicationError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(rename = "impalaUDF", default, skip_serializing_if = "Option::is_none")]
    pub impala_udf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome details of one Hive replication run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveReplicationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<HiveTable>>,
    #[serde(rename = "impalaUDFCount", default, skip_serializing_if = "Option::is_none")]
    pub impala_udf_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<HiveReplicationError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_replication_result: Option<HdfsReplicationResult>,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_as_user: Option<String>,
}

/// A command that ran a replication: the generic command fields plus the
/// result payload of whichever replication type it was. Flattened on the
/// wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationCommand {
    #[serde(flatten)]
    pub command: Command,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdfs_result: Option<HdfsReplicationResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hive_result: Option<HiveReplicationResult>,
}
