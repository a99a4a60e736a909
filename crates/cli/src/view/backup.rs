use ::common::api::backup::{
    BackupInfo, BackupPolicyDescription, BackupScheduleDescription, BackupStorageKind,
};

use super::format::{format_optional, format_optional_str, format_optional_uuid, format_timestamp};
use super::table::render_table;

fn schedule_label(schedule: &BackupScheduleDescription) -> String {
    match schedule {
        BackupScheduleDescription::FrequencyBased { interval } => format!("every {interval}"),
        BackupScheduleDescription::TimeBased {
            schedule_frequency_type,
            run_times,
            ..
        } => format!("{schedule_frequency_type} x{}", run_times.len()),
        BackupScheduleDescription::Unrecognized(unknown) => unknown.tag().to_string(),
    }
}

fn storage_label(kind: &BackupStorageKind) -> String {
    match kind {
        BackupStorageKind::AzureBlobStore { container_name, .. }
        | BackupStorageKind::DsmsAzureBlobStore { container_name, .. }
        | BackupStorageKind::ManagedIdentityAzureBlobStore { container_name, .. } => {
            format!("blob:{container_name}")
        }
        BackupStorageKind::FileShare { path, .. } => format!("share:{path}"),
        BackupStorageKind::Unrecognized(unknown) => unknown.tag().to_string(),
    }
}

pub fn render_backup_policies(policies: &[BackupPolicyDescription]) -> String {
    let rows = policies
        .iter()
        .map(|policy| {
            vec![
                policy.name.clone(),
                schedule_label(&policy.schedule),
                storage_label(&policy.storage.kind),
                policy.max_incremental_backups.to_string(),
                if policy.auto_restore_on_data_loss { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(
        &["NAME", "SCHEDULE", "STORAGE", "MAX_INCREMENTAL", "AUTO_RESTORE"],
        &rows,
    )
}

pub fn render_backups(backups: &[BackupInfo]) -> String {
    let rows = backups
        .iter()
        .map(|backup| {
            vec![
                format_optional_uuid(backup.backup_id),
                format_optional(backup.backup_type.as_ref()),
                format_timestamp(backup.creation_time_utc),
                format_optional_str(backup.backup_location.as_deref()),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["BACKUP_ID", "TYPE", "CREATED", "LOCATION"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn policy_table_summarises_schedule_and_storage() {
        let policies: Vec<BackupPolicyDescription> = serde_json::from_value(json!([{
            "Name": "hourly",
            "AutoRestoreOnDataLoss": false,
            "MaxIncrementalBackups": 5,
            "Schedule": {"ScheduleKind": "FrequencyBased", "Interval": "PT1H"},
            "Storage": {"StorageKind": "FileShare", "Path": "\\\\backups\\shop"}
        }]))
        .expect("policies");

        let table = render_backup_policies(&policies);
        let row = table.lines().nth(1).expect("row");
        assert!(row.starts_with("hourly"));
        assert!(row.contains("share:\\\\backups\\shop"));
        assert!(row.contains("every PT1H"));
    }
}
