//! Periodic backup and restore of stateful partitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::duration::FabricDuration;
use super::error::FabricErrorError;
use super::known::{UnknownVariant, open_enum, tagged_union};
use super::paging::PagedList;
use super::params::{TimeoutOptionalParams, optional_params};
use super::partition::{Epoch, PartitionInformation};

open_enum! {
    /// How often a time-based schedule runs.
    pub enum BackupScheduleFrequencyType {
        /// Invalid.
        Invalid = "Invalid",
        /// Every day.
        Daily = "Daily",
        /// On the listed days.
        Weekly = "Weekly",
    }
}

open_enum! {
    /// Day of the week.
    pub enum DayOfWeek {
        /// Sunday.
        Sunday = "Sunday",
        /// Monday.
        Monday = "Monday",
        /// Tuesday.
        Tuesday = "Tuesday",
        /// Wednesday.
        Wednesday = "Wednesday",
        /// Thursday.
        Thursday = "Thursday",
        /// Friday.
        Friday = "Friday",
        /// Saturday.
        Saturday = "Saturday",
    }
}

open_enum! {
    /// Managed identity used to reach blob storage.
    pub enum ManagedIdentityType {
        /// Invalid.
        Invalid = "Invalid",
        /// Scale set identity.
        VMSS = "VMSS",
        /// Cluster identity.
        Cluster = "Cluster",
    }
}

open_enum! {
    /// Level a backup setting was inherited from.
    pub enum BackupEntityScope {
        /// Invalid.
        Invalid = "Invalid",
        /// Partition.
        Partition = "Partition",
        /// Service.
        Service = "Service",
        /// Application.
        Application = "Application",
    }
}

open_enum! {
    /// Full or incremental backup.
    pub enum BackupType {
        /// Invalid.
        Invalid = "Invalid",
        /// Full.
        Full = "Full",
        /// Incremental.
        Incremental = "Incremental",
    }
}

open_enum! {
    /// State of an on-demand backup.
    pub enum BackupState {
        /// Invalid.
        Invalid = "Invalid",
        /// Accepted.
        Accepted = "Accepted",
        /// Running.
        BackupInProgress = "BackupInProgress",
        /// Succeeded.
        Success = "Success",
        /// Failed.
        Failure = "Failure",
        /// Timed out.
        Timeout = "Timeout",
    }
}

open_enum! {
    /// State of a restore.
    pub enum RestoreState {
        /// Invalid.
        Invalid = "Invalid",
        /// Accepted.
        Accepted = "Accepted",
        /// Running.
        RestoreInProgress = "RestoreInProgress",
        /// Succeeded.
        Success = "Success",
        /// Failed.
        Failure = "Failure",
        /// Timed out.
        Timeout = "Timeout",
    }
}

/// When backups are taken, discriminated by `ScheduleKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "ScheduleKind")]
pub enum BackupScheduleDescription {
    /// At a fixed interval.
    FrequencyBased {
        /// Interval between backups.
        #[serde(rename = "Interval")]
        interval: FabricDuration,
    },
    /// At fixed times of day.
    TimeBased {
        /// Daily or weekly.
        #[serde(rename = "ScheduleFrequencyType")]
        schedule_frequency_type: BackupScheduleFrequencyType,
        /// Days for weekly schedules.
        #[serde(rename = "RunDays", default, skip_serializing_if = "Vec::is_empty")]
        run_days: Vec<DayOfWeek>,
        /// Times of day; only the time part is used.
        #[serde(rename = "RunTimes", default)]
        run_times: Vec<DateTime<Utc>>,
    },
    /// Schedule kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<BackupScheduleDescription>),
}

tagged_union!(BackupScheduleDescription, "ScheduleKind", ["FrequencyBased", "TimeBased"]);

/// Where backups are stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct BackupStorageDescription {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Backend settings.
    #[serde(flatten)]
    pub kind: BackupStorageKind,
}

/// Backend part of [`BackupStorageDescription`], discriminated by `StorageKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "StorageKind")]
pub enum BackupStorageKind {
    /// Azure blob container reached by connection string.
    AzureBlobStore {
        /// Connection string.
        #[serde(rename = "ConnectionString")]
        connection_string: String,
        /// Container name.
        #[serde(rename = "ContainerName")]
        container_name: String,
    },
    /// SMB file share.
    FileShare {
        /// UNC path.
        #[serde(rename = "Path")]
        path: String,
        /// Primary user.
        #[serde(rename = "PrimaryUserName", default, skip_serializing_if = "Option::is_none")]
        primary_user_name: Option<String>,
        /// Primary password.
        #[serde(rename = "PrimaryPassword", default, skip_serializing_if = "Option::is_none")]
        primary_password: Option<String>,
        /// Secondary user.
        #[serde(rename = "SecondaryUserName", default, skip_serializing_if = "Option::is_none")]
        secondary_user_name: Option<String>,
        /// Secondary password.
        #[serde(rename = "SecondaryPassword", default, skip_serializing_if = "Option::is_none")]
        secondary_password: Option<String>,
    },
    /// Azure blob container reached through dSMS credentials.
    DsmsAzureBlobStore {
        /// Credentials source location.
        #[serde(rename = "StorageCredentialsSourceLocation")]
        storage_credentials_source_location: String,
        /// Container name.
        #[serde(rename = "ContainerName")]
        container_name: String,
    },
    /// Azure blob container reached through a managed identity.
    ManagedIdentityAzureBlobStore {
        /// Identity type.
        #[serde(rename = "ManagedIdentityType")]
        managed_identity_type: ManagedIdentityType,
        /// Blob service URI.
        #[serde(rename = "BlobServiceUri")]
        blob_service_uri: String,
        /// Container name.
        #[serde(rename = "ContainerName")]
        container_name: String,
    },
    /// Storage kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<BackupStorageKind>),
}

tagged_union!(
    BackupStorageKind,
    "StorageKind",
    ["AzureBlobStore", "FileShare", "DsmsAzureBlobStore", "ManagedIdentityAzureBlobStore"]
);

impl BackupStorageKind {
    /// Short location for display, without credentials.
    pub fn location(&self) -> String {
        match self {
            BackupStorageKind::AzureBlobStore { container_name, .. }
            | BackupStorageKind::DsmsAzureBlobStore { container_name, .. } => {
                format!("blob:{container_name}")
            }
            BackupStorageKind::ManagedIdentityAzureBlobStore {
                blob_service_uri,
                container_name,
                ..
            } => format!("{}/{container_name}", blob_service_uri.trim_end_matches('/')),
            BackupStorageKind::FileShare { path, .. } => path.clone(),
            BackupStorageKind::Unrecognized(unknown) => unknown.tag().to_string(),
        }
    }
}

/// How long backups are kept, discriminated by `RetentionPolicyType`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "RetentionPolicyType")]
pub enum RetentionPolicyDescription {
    /// Keep backups for a duration.
    Basic {
        /// Retention period.
        #[serde(rename = "RetentionDuration")]
        retention_duration: FabricDuration,
        /// Backups kept regardless of age.
        #[serde(rename = "MinimumNumberOfBackups", default, skip_serializing_if = "Option::is_none")]
        minimum_number_of_backups: Option<i32>,
    },
    /// Retention policy added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<RetentionPolicyDescription>),
}

tagged_union!(RetentionPolicyDescription, "RetentionPolicyType", ["Basic"]);

/// A backup policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BackupPolicyDescription {
    /// Unique policy name.
    pub name: String,
    /// Restore the latest backup when data loss is reported.
    pub auto_restore_on_data_loss: bool,
    /// Incremental backups between full ones.
    pub max_incremental_backups: i32,
    /// Schedule.
    pub schedule: BackupScheduleDescription,
    /// Storage.
    pub storage: BackupStorageDescription,
    /// Retention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_policy: Option<RetentionPolicyDescription>,
}

/// Page of backup policies.
pub type PagedBackupPolicyDescriptionList = PagedList<BackupPolicyDescription>;

/// An entity with backup enabled, discriminated by `EntityKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "EntityKind")]
pub enum BackupEntity {
    /// Application.
    Application {
        /// Application name.
        #[serde(rename = "ApplicationName", default, skip_serializing_if = "Option::is_none")]
        application_name: Option<String>,
    },
    /// Service.
    Service {
        /// Service name.
        #[serde(rename = "ServiceName", default, skip_serializing_if = "Option::is_none")]
        service_name: Option<String>,
    },
    /// Partition.
    Partition {
        /// Service name.
        #[serde(rename = "ServiceName", default, skip_serializing_if = "Option::is_none")]
        service_name: Option<String>,
        /// Partition id.
        #[serde(rename = "PartitionId", default, skip_serializing_if = "Option::is_none")]
        partition_id: Option<Uuid>,
    },
    /// Entity kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<BackupEntity>),
}

tagged_union!(BackupEntity, "EntityKind", ["Application", "Service", "Partition"]);

/// Page of backup entities.
pub type PagedBackupEntityList = PagedList<BackupEntity>;

/// Whether backups are suspended for an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct BackupSuspensionInfo {
    /// Suspended.
    #[serde(default)]
    pub is_suspended: bool,
    /// Level the suspension was inherited from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspension_inherited_from: Option<BackupEntityScope>,
}

/// Effective backup configuration of an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct BackupConfigurationInfo {
    /// Policy in effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    /// Level the policy was inherited from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_inherited_from: Option<BackupEntityScope>,
    /// Suspension state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspension_info: Option<BackupSuspensionInfo>,
    /// Entity the configuration applies to.
    #[serde(flatten)]
    pub kind: BackupConfigurationKind,
}

/// Entity part of [`BackupConfigurationInfo`], discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "Kind")]
pub enum BackupConfigurationKind {
    /// Application.
    Application {
        /// Application name.
        #[serde(rename = "ApplicationName", default, skip_serializing_if = "Option::is_none")]
        application_name: Option<String>,
    },
    /// Service.
    Service {
        /// Service name.
        #[serde(rename = "ServiceName", default, skip_serializing_if = "Option::is_none")]
        service_name: Option<String>,
    },
    /// Partition.
    Partition {
        /// Service name.
        #[serde(rename = "ServiceName", default, skip_serializing_if = "Option::is_none")]
        service_name: Option<String>,
        /// Partition id.
        #[serde(rename = "PartitionId", default, skip_serializing_if = "Option::is_none")]
        partition_id: Option<Uuid>,
    },
    /// Entity kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<BackupConfigurationKind>),
}

tagged_union!(BackupConfigurationKind, "Kind", ["Application", "Service", "Partition"]);

/// Page of backup configurations.
pub type PagedBackupConfigurationInfoList = PagedList<BackupConfigurationInfo>;

/// A stored backup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct BackupInfo {
    /// Backup id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_id: Option<Uuid>,
    /// Chain of the full backup this belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_chain_id: Option<Uuid>,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Partition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_information: Option<PartitionInformation>,
    /// Location relative to the storage root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_location: Option<String>,
    /// Full or incremental.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<BackupType>,
    /// Epoch of the last record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch_of_last_backup_record: Option<Epoch>,
    /// Sequence number of the last record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lsn_of_last_backup_record: Option<String>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time_utc: Option<DateTime<Utc>>,
    /// Service manifest version at backup time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_manifest_version: Option<String>,
    /// Error when enumerating the backup failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_error: Option<FabricErrorError>,
}

/// Page of backups.
pub type PagedBackupInfoList = PagedList<BackupInfo>;

/// Body of `enable_*_backup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EnableBackupDescription {
    /// Policy to apply.
    pub backup_policy_name: String,
}

/// Body of `disable_*_backup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DisableBackupDescription {
    /// Delete existing backups.
    pub clean_backup: bool,
}

/// Body of `backup_partition`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct BackupPartitionDescription {
    /// Storage overriding the policy's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_storage: Option<BackupStorageDescription>,
}

/// Progress of an on-demand backup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct BackupProgressInfo {
    /// State.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_state: Option<BackupState>,
    /// When the state was reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_stamp_utc: Option<DateTime<Utc>>,
    /// Backup id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_id: Option<Uuid>,
    /// Location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_location: Option<String>,
    /// Epoch of the last record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch_of_last_backup_record: Option<Epoch>,
    /// Sequence number of the last record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lsn_of_last_backup_record: Option<String>,
    /// Failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_error: Option<FabricErrorError>,
}

/// Body of `restore_partition`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RestorePartitionDescription {
    /// Backup to restore.
    pub backup_id: Uuid,
    /// Location of the backup.
    pub backup_location: String,
    /// Storage, when not the policy's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_storage: Option<BackupStorageDescription>,
}

/// Progress of a restore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreProgressInfo {
    /// State.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore_state: Option<RestoreState>,
    /// When the state was reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_stamp_utc: Option<DateTime<Utc>>,
    /// Epoch restored to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restored_epoch: Option<Epoch>,
    /// Sequence number restored to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restored_lsn: Option<String>,
    /// Failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_error: Option<FabricErrorError>,
}

/// Body of `get_backups_from_backup_location`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct GetBackupByStorageQueryDescription {
    /// Earliest creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_time_filter: Option<DateTime<Utc>>,
    /// Latest creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time_filter: Option<DateTime<Utc>>,
    /// Only the latest backup per partition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,
    /// Storage to enumerate.
    pub storage: BackupStorageDescription,
    /// Entity whose backups to list.
    pub backup_entity: BackupEntity,
}

optional_params! {
    /// Optional parameters of paged backup queries.
    pub struct GetBackupPolicyListOptionalParams {
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
        /// Page size.
        max_results: i64 => "MaxResults",
    }

    /// Optional parameters of `create_backup_policy` and `update_backup_policy`.
    pub struct CreateBackupPolicyOptionalParams {
        /// Check the storage connection first.
        validate_connection: bool => "ValidateConnection",
    }

    /// Optional parameters of the `get_*_backup_list` queries.
    pub struct GetBackupListOptionalParams {
        /// Only the latest backup.
        latest: bool => "Latest",
        /// Earliest creation time.
        start_date_time_filter: DateTime<Utc> => "StartDateTimeFilter",
        /// Latest creation time.
        end_date_time_filter: DateTime<Utc> => "EndDateTimeFilter",
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
        /// Page size.
        max_results: i64 => "MaxResults",
    }

    /// Optional parameters of `backup_partition`.
    pub struct BackupPartitionOptionalParams {
        /// Minutes to wait for the backup.
        backup_timeout: i32 => "BackupTimeout",
    }

    /// Optional parameters of `restore_partition`.
    pub struct RestorePartitionOptionalParams {
        /// Minutes to wait for the restore.
        restore_timeout: i32 => "RestoreTimeout",
    }
}

/// Optional parameters of `update_backup_policy`.
pub type UpdateBackupPolicyOptionalParams = CreateBackupPolicyOptionalParams;
/// Optional parameters of `get_all_entities_backed_up_by_policy`.
pub type GetAllEntitiesBackedUpByPolicyOptionalParams = GetBackupPolicyListOptionalParams;
/// Optional parameters of the `get_*_backup_configuration_info` queries.
pub type GetBackupConfigurationInfoOptionalParams = GetBackupPolicyListOptionalParams;
/// Optional parameters of `get_backups_from_backup_location`.
pub type GetBackupsFromBackupLocationOptionalParams = GetBackupPolicyListOptionalParams;
/// Optional parameters of `delete_backup_policy`.
pub type DeleteBackupPolicyOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_backup_policy_by_name`.
pub type GetBackupPolicyByNameOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `enable_*_backup`, `disable_*_backup`,
/// `suspend_*_backup` and `resume_*_backup`.
pub type BackupToggleOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_partition_backup_progress` and
/// `get_partition_restore_progress`.
pub type GetPartitionProgressOptionalParams = TimeoutOptionalParams;

/// Response of `get_backup_policy_list`.
pub type GetBackupPolicyListResponse = PagedBackupPolicyDescriptionList;
/// Response of `get_backup_policy_by_name`.
pub type GetBackupPolicyByNameResponse = BackupPolicyDescription;
/// Response of `get_all_entities_backed_up_by_policy`.
pub type GetAllEntitiesBackedUpByPolicyResponse = PagedBackupEntityList;
/// Response of the application and service `get_*_backup_configuration_info` queries.
pub type GetBackupConfigurationInfoResponse = PagedBackupConfigurationInfoList;
/// Response of `get_partition_backup_configuration_info`.
pub type GetPartitionBackupConfigurationInfoResponse = BackupConfigurationInfo;
/// Response of the `get_*_backup_list` queries and `get_backups_from_backup_location`.
pub type GetBackupListResponse = PagedBackupInfoList;
/// Response of `get_partition_backup_progress`.
pub type GetPartitionBackupProgressResponse = BackupProgressInfo;
/// Response of `get_partition_restore_progress`.
pub type GetPartitionRestoreProgressResponse = RestoreProgressInfo;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn policy_decodes_schedule_storage_and_retention() {
        let policy: BackupPolicyDescription = serde_json::from_value(json!({
            "Name": "hourly",
            "AutoRestoreOnDataLoss": false,
            "MaxIncrementalBackups": 3,
            "Schedule": {"ScheduleKind": "FrequencyBased", "Interval": "PT1H"},
            "Storage": {
                "StorageKind": "ManagedIdentityAzureBlobStore",
                "FriendlyName": "primary",
                "ManagedIdentityType": "Cluster",
                "BlobServiceUri": "https://acct.blob.core.windows.net/",
                "ContainerName": "backups"
            },
            "RetentionPolicy": {
                "RetentionPolicyType": "Basic",
                "RetentionDuration": "P3D",
                "MinimumNumberOfBackups": 20
            }
        }))
        .expect("decode");

        assert_eq!(
            policy.schedule,
            BackupScheduleDescription::FrequencyBased {
                interval: FabricDuration(Duration::from_secs(3600))
            }
        );
        assert_eq!(
            policy.storage.kind.location(),
            "https://acct.blob.core.windows.net/backups"
        );
        assert!(matches!(
            policy.retention_policy,
            Some(RetentionPolicyDescription::Basic {
                minimum_number_of_backups: Some(20),
                ..
            })
        ));
    }

    #[test]
    fn every_storage_kind_keeps_its_literal() {
        let kinds = [
            json!({"StorageKind": "AzureBlobStore", "ConnectionString": "c", "ContainerName": "b"}),
            json!({"StorageKind": "FileShare", "Path": "\\\\host\\share"}),
            json!({"StorageKind": "DsmsAzureBlobStore", "StorageCredentialsSourceLocation": "l", "ContainerName": "b"}),
            json!({"StorageKind": "ManagedIdentityAzureBlobStore", "ManagedIdentityType": "VMSS", "BlobServiceUri": "u", "ContainerName": "b"}),
        ];
        for value in kinds {
            let storage: BackupStorageDescription =
                serde_json::from_value(value.clone()).expect("decode");
            assert!(!matches!(storage.kind, BackupStorageKind::Unrecognized(_)));
            assert_eq!(serde_json::to_value(&storage).expect("encode"), value);
        }

        let s3 = json!({"StorageKind": "S3", "Bucket": "b"});
        let storage: BackupStorageDescription =
            serde_json::from_value(s3.clone()).expect("decode");
        assert_eq!(storage.kind.location(), "S3");
        assert_eq!(serde_json::to_value(&storage).expect("encode"), s3);
    }

    #[test]
    fn configuration_info_flattens_entity() {
        let page: PagedBackupConfigurationInfoList = serde_json::from_value(json!({
            "Items": [{
                "Kind": "Partition",
                "PolicyName": "hourly",
                "PolicyInheritedFrom": "Application",
                "ServiceName": "fabric:/app/svc",
                "PartitionId": "1daae3f5-7fd6-42e9-b1ba-8c05f873994d",
                "SuspensionInfo": {"IsSuspended": true, "SuspensionInheritedFrom": "Partition"}
            }]
        }))
        .expect("decode");
        let info = &page.items[0];
        assert_eq!(info.policy_inherited_from, Some(BackupEntityScope::Application));
        assert!(info.suspension_info.as_ref().is_some_and(|s| s.is_suspended));
        assert!(matches!(info.kind, BackupConfigurationKind::Partition { .. }));
    }

    #[test]
    fn backup_list_params_encode_dates() {
        let params = GetBackupListOptionalParams {
            latest: Some(true),
            start_date_time_filter: Some(
                DateTime::parse_from_rfc3339("2024-02-01T00:00:00Z")
                    .expect("date")
                    .with_timezone(&Utc),
            ),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).expect("encode"),
            json!({"Latest": true, "StartDateTimeFilter": "2024-02-01T00:00:00Z"})
        );
    }
}
