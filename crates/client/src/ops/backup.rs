use common::api::backup::*;
use serde::Serialize;
use uuid::Uuid;

use crate::{FabricClient, Result};

const API_VERSION: &str = "6.4";

/// Entity whose periodic backup is being configured.
#[derive(Debug, Clone, Copy)]
enum BackupTarget<'a> {
    Application(&'a str),
    Service(&'a str),
    Partition(Uuid),
}

impl BackupTarget<'_> {
    fn segments(&self, verb: &str) -> Vec<String> {
        let (collection, id) = match self {
            BackupTarget::Application(id) => ("Applications", id.to_string()),
            BackupTarget::Service(id) => ("Services", id.to_string()),
            BackupTarget::Partition(id) => ("Partitions", id.to_string()),
        };
        vec![collection.to_string(), id, "$".to_string(), verb.to_string()]
    }
}

impl FabricClient {
    fn backup_get<Q>(&self, target: BackupTarget<'_>, verb: &str, params: &Q) -> reqwest::RequestBuilder
    where
        Q: Serialize + ?Sized,
    {
        self.request(reqwest::Method::GET, &target.segments(verb), API_VERSION, params)
    }

    fn backup_post<Q>(&self, target: BackupTarget<'_>, verb: &str, params: &Q) -> reqwest::RequestBuilder
    where
        Q: Serialize + ?Sized,
    {
        self.request(reqwest::Method::POST, &target.segments(verb), API_VERSION, params)
    }

    async fn enable_backup(
        &self,
        operation: &'static str,
        target: BackupTarget<'_>,
        description: &EnableBackupDescription,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let req = self.backup_post(target, "EnableBackup", params).json(description);
        self.send_empty(operation, req).await
    }

    async fn disable_backup(
        &self,
        operation: &'static str,
        target: BackupTarget<'_>,
        description: Option<&DisableBackupDescription>,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let mut req = self.backup_post(target, "DisableBackup", params);
        if let Some(description) = description {
            req = req.json(description);
        }
        self.send_empty(operation, req).await
    }

    async fn toggle_backup(
        &self,
        operation: &'static str,
        target: BackupTarget<'_>,
        verb: &str,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let req = self.backup_post(target, verb, params);
        self.send_empty(operation, req).await
    }

    async fn list_backups(
        &self,
        operation: &'static str,
        target: BackupTarget<'_>,
        params: &GetBackupListOptionalParams,
    ) -> Result<GetBackupListResponse> {
        let req = self.backup_get(target, "GetBackups", params);
        self.send_json(operation, req).await
    }

    /// Registers a backup policy; with `validate_connection` the cluster
    /// checks the storage credentials first.
    pub async fn create_backup_policy(
        &self,
        policy: &BackupPolicyDescription,
        params: &CreateBackupPolicyOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["BackupRestore", "BackupPolicies", "$", "Create"], API_VERSION, params)
            .json(policy);
        self.send_empty("create_backup_policy", req).await
    }

    /// Fails while any entity still references the policy.
    pub async fn delete_backup_policy(
        &self,
        policy_name: &str,
        params: &DeleteBackupPolicyOptionalParams,
    ) -> Result<()> {
        let req = self.post(
            &["BackupRestore", "BackupPolicies", policy_name, "$", "Delete"],
            API_VERSION,
            params,
        );
        self.send_empty("delete_backup_policy", req).await
    }

    pub async fn get_backup_policy_list(
        &self,
        params: &GetBackupPolicyListOptionalParams,
    ) -> Result<GetBackupPolicyListResponse> {
        let req = self.get(&["BackupRestore", "BackupPolicies"], API_VERSION, params);
        self.send_json("get_backup_policy_list", req).await
    }

    pub async fn get_backup_policy_by_name(
        &self,
        policy_name: &str,
        params: &GetBackupPolicyByNameOptionalParams,
    ) -> Result<Option<GetBackupPolicyByNameResponse>> {
        let req = self.get(&["BackupRestore", "BackupPolicies", policy_name], API_VERSION, params);
        self.send_optional_json("get_backup_policy_by_name", req).await
    }

    pub async fn get_all_entities_backed_up_by_policy(
        &self,
        policy_name: &str,
        params: &GetAllEntitiesBackedUpByPolicyOptionalParams,
    ) -> Result<GetAllEntitiesBackedUpByPolicyResponse> {
        let req = self.get(
            &["BackupRestore", "BackupPolicies", policy_name, "$", "GetBackupEnabledEntities"],
            API_VERSION,
            params,
        );
        self.send_json("get_all_entities_backed_up_by_policy", req).await
    }

    pub async fn update_backup_policy(
        &self,
        policy_name: &str,
        policy: &BackupPolicyDescription,
        params: &UpdateBackupPolicyOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(
                &["BackupRestore", "BackupPolicies", policy_name, "$", "Update"],
                API_VERSION,
                params,
            )
            .json(policy);
        self.send_empty("update_backup_policy", req).await
    }

    /// Applies a backup policy to every stateful partition of the application.
    pub async fn enable_application_backup(
        &self,
        application_id: &str,
        description: &EnableBackupDescription,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Application(application_id);
        self.enable_backup("enable_application_backup", target, description, params)
            .await
    }

    /// `description` controls whether existing backups are deleted too.
    pub async fn disable_application_backup(
        &self,
        application_id: &str,
        description: Option<&DisableBackupDescription>,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Application(application_id);
        self.disable_backup("disable_application_backup", target, description, params)
            .await
    }

    pub async fn get_application_backup_configuration_info(
        &self,
        application_id: &str,
        params: &GetBackupConfigurationInfoOptionalParams,
    ) -> Result<GetBackupConfigurationInfoResponse> {
        let target = BackupTarget::Application(application_id);
        let req = self.backup_get(target, "GetBackupConfigurationInfo", params);
        self.send_json("get_application_backup_configuration_info", req).await
    }

    pub async fn get_application_backup_list(
        &self,
        application_id: &str,
        params: &GetBackupListOptionalParams,
    ) -> Result<GetBackupListResponse> {
        let target = BackupTarget::Application(application_id);
        self.list_backups("get_application_backup_list", target, params).await
    }

    pub async fn suspend_application_backup(
        &self,
        application_id: &str,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Application(application_id);
        self.toggle_backup("suspend_application_backup", target, "SuspendBackup", params)
            .await
    }

    pub async fn resume_application_backup(
        &self,
        application_id: &str,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Application(application_id);
        self.toggle_backup("resume_application_backup", target, "ResumeBackup", params)
            .await
    }

    pub async fn enable_service_backup(
        &self,
        service_id: &str,
        description: &EnableBackupDescription,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Service(service_id);
        self.enable_backup("enable_service_backup", target, description, params)
            .await
    }

    pub async fn disable_service_backup(
        &self,
        service_id: &str,
        description: Option<&DisableBackupDescription>,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Service(service_id);
        self.disable_backup("disable_service_backup", target, description, params)
            .await
    }

    pub async fn get_service_backup_configuration_info(
        &self,
        service_id: &str,
        params: &GetBackupConfigurationInfoOptionalParams,
    ) -> Result<GetBackupConfigurationInfoResponse> {
        let target = BackupTarget::Service(service_id);
        let req = self.backup_get(target, "GetBackupConfigurationInfo", params);
        self.send_json("get_service_backup_configuration_info", req).await
    }

    pub async fn get_service_backup_list(
        &self,
        service_id: &str,
        params: &GetBackupListOptionalParams,
    ) -> Result<GetBackupListResponse> {
        let target = BackupTarget::Service(service_id);
        self.list_backups("get_service_backup_list", target, params).await
    }

    pub async fn suspend_service_backup(
        &self,
        service_id: &str,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Service(service_id);
        self.toggle_backup("suspend_service_backup", target, "SuspendBackup", params)
            .await
    }

    pub async fn resume_service_backup(
        &self,
        service_id: &str,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Service(service_id);
        self.toggle_backup("resume_service_backup", target, "ResumeBackup", params)
            .await
    }

    pub async fn enable_partition_backup(
        &self,
        partition_id: Uuid,
        description: &EnableBackupDescription,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Partition(partition_id);
        self.enable_backup("enable_partition_backup", target, description, params)
            .await
    }

    pub async fn disable_partition_backup(
        &self,
        partition_id: Uuid,
        description: Option<&DisableBackupDescription>,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Partition(partition_id);
        self.disable_backup("disable_partition_backup", target, description, params)
            .await
    }

    /// A partition has exactly one effective configuration, so this is not
    /// paged like the application and service variants.
    pub async fn get_partition_backup_configuration_info(
        &self,
        partition_id: Uuid,
        params: &BackupToggleOptionalParams,
    ) -> Result<GetPartitionBackupConfigurationInfoResponse> {
        let target = BackupTarget::Partition(partition_id);
        let req = self.backup_get(target, "GetBackupConfigurationInfo", params);
        self.send_json("get_partition_backup_configuration_info", req).await
    }

    pub async fn get_partition_backup_list(
        &self,
        partition_id: Uuid,
        params: &GetBackupListOptionalParams,
    ) -> Result<GetBackupListResponse> {
        let target = BackupTarget::Partition(partition_id);
        self.list_backups("get_partition_backup_list", target, params).await
    }

    pub async fn suspend_partition_backup(
        &self,
        partition_id: Uuid,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Partition(partition_id);
        self.toggle_backup("suspend_partition_backup", target, "SuspendBackup", params)
            .await
    }

    pub async fn resume_partition_backup(
        &self,
        partition_id: Uuid,
        params: &BackupToggleOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Partition(partition_id);
        self.toggle_backup("resume_partition_backup", target, "ResumeBackup", params)
            .await
    }

    /// Takes a one-off backup. Without a description the partition's
    /// policy storage is used.
    pub async fn backup_partition(
        &self,
        partition_id: Uuid,
        description: Option<&BackupPartitionDescription>,
        params: &BackupPartitionOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Partition(partition_id);
        let mut req = self.backup_post(target, "Backup", params);
        if let Some(description) = description {
            req = req.json(description);
        }
        self.send_empty("backup_partition", req).await
    }

    pub async fn get_partition_backup_progress(
        &self,
        partition_id: Uuid,
        params: &GetPartitionProgressOptionalParams,
    ) -> Result<GetPartitionBackupProgressResponse> {
        let target = BackupTarget::Partition(partition_id);
        let req = self.backup_get(target, "GetBackupProgress", params);
        self.send_json("get_partition_backup_progress", req).await
    }

    pub async fn restore_partition(
        &self,
        partition_id: Uuid,
        description: &RestorePartitionDescription,
        params: &RestorePartitionOptionalParams,
    ) -> Result<()> {
        let target = BackupTarget::Partition(partition_id);
        let req = self.backup_post(target, "Restore", params).json(description);
        self.send_empty("restore_partition", req).await
    }

    pub async fn get_partition_restore_progress(
        &self,
        partition_id: Uuid,
        params: &GetPartitionProgressOptionalParams,
    ) -> Result<GetPartitionRestoreProgressResponse> {
        let target = BackupTarget::Partition(partition_id);
        let req = self.backup_get(target, "GetRestoreProgress", params);
        self.send_json("get_partition_restore_progress", req).await
    }

    /// Lists backups found directly in a storage location, whether or not
    /// the entity still exists in the cluster.
    pub async fn get_backups_from_backup_location(
        &self,
        query: &GetBackupByStorageQueryDescription,
        params: &GetBackupsFromBackupLocationOptionalParams,
    ) -> Result<GetBackupListResponse> {
        let req = self
            .post(&["BackupRestore", "$", "GetBackups"], API_VERSION, params)
            .json(query);
        self.send_json("get_backups_from_backup_location", req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_map_to_collections() {
        let pid = Uuid::nil();
        assert_eq!(
            BackupTarget::Application("shop").segments("GetBackups"),
            ["Applications", "shop", "$", "GetBackups"]
        );
        assert_eq!(
            BackupTarget::Service("shop~cart").segments("EnableBackup")[0],
            "Services"
        );
        assert_eq!(
            BackupTarget::Partition(pid).segments("Restore")[1],
            "00000000-0000-0000-0000-000000000000"
        );
    }
}
