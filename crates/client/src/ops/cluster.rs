use common::api::cluster::*;
use common::api::health::{ClusterHealthChunkQueryDescription, ClusterHealthPolicies, HealthInformation};

use crate::{FabricClient, Result};

impl FabricClient {
    /// Fabric cluster manifest as an XML string.
    pub async fn get_cluster_manifest(
        &self,
        params: &GetClusterManifestOptionalParams,
    ) -> Result<GetClusterManifestResponse> {
        let req = self.get(&["$", "GetClusterManifest"], "6.0", params);
        self.send_json("get_cluster_manifest", req).await
    }

    pub async fn get_cluster_health(
        &self,
        params: &GetClusterHealthOptionalParams,
    ) -> Result<GetClusterHealthResponse> {
        let req = self.get(&["$", "GetClusterHealth"], "6.0", params);
        self.send_json("get_cluster_health", req).await
    }

    /// Evaluates cluster health with `policies` instead of the policy in the
    /// cluster manifest.
    pub async fn get_cluster_health_using_policy(
        &self,
        policies: Option<&ClusterHealthPolicies>,
        params: &GetClusterHealthUsingPolicyOptionalParams,
    ) -> Result<GetClusterHealthUsingPolicyResponse> {
        let mut req = self.post(&["$", "GetClusterHealth"], "6.0", params);
        if let Some(policies) = policies {
            req = req.json(policies);
        }
        self.send_json("get_cluster_health_using_policy", req).await
    }

    pub async fn get_cluster_health_chunk(
        &self,
        params: &GetClusterHealthChunkOptionalParams,
    ) -> Result<GetClusterHealthChunkResponse> {
        let req = self.get(&["$", "GetClusterHealthChunk"], "6.0", params);
        self.send_json("get_cluster_health_chunk", req).await
    }

    /// Health chunk restricted by the filters and policies in `query`.
    pub async fn get_cluster_health_chunk_using_policy_and_advanced_filters(
        &self,
        query: Option<&ClusterHealthChunkQueryDescription>,
        params: &GetClusterHealthChunkUsingPolicyAndAdvancedFiltersOptionalParams,
    ) -> Result<GetClusterHealthChunkUsingPolicyAndAdvancedFiltersResponse> {
        let mut req = self.post(&["$", "GetClusterHealthChunk"], "6.0", params);
        if let Some(query) = query {
            req = req.json(query);
        }
        self.send_json(
            "get_cluster_health_chunk_using_policy_and_advanced_filters",
            req,
        )
        .await
    }

    pub async fn report_cluster_health(
        &self,
        health_information: &HealthInformation,
        params: &ReportClusterHealthOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["$", "ReportClusterHealth"], "6.0", params)
            .json(health_information);
        self.send_empty("report_cluster_health", req).await
    }

    pub async fn get_provisioned_fabric_code_version_info_list(
        &self,
        params: &GetProvisionedFabricCodeVersionInfoListOptionalParams,
    ) -> Result<GetProvisionedFabricCodeVersionInfoListResponse> {
        let req = self.get(&["$", "GetProvisionedCodeVersions"], "6.0", params);
        self.send_json("get_provisioned_fabric_code_version_info_list", req)
            .await
    }

    pub async fn get_provisioned_fabric_config_version_info_list(
        &self,
        params: &GetProvisionedFabricConfigVersionInfoListOptionalParams,
    ) -> Result<GetProvisionedFabricConfigVersionInfoListResponse> {
        let req = self.get(&["$", "GetProvisionedConfigVersions"], "6.0", params);
        self.send_json("get_provisioned_fabric_config_version_info_list", req)
            .await
    }

    pub async fn get_cluster_upgrade_progress(
        &self,
        params: &GetClusterUpgradeProgressOptionalParams,
    ) -> Result<GetClusterUpgradeProgressResponse> {
        let req = self.get(&["$", "GetUpgradeProgress"], "6.0", params);
        self.send_json("get_cluster_upgrade_progress", req).await
    }

    /// Standalone cluster configuration; `configuration_api_version` selects
    /// the JSON schema version (e.g. `"1.0.0"`).
    pub async fn get_cluster_configuration(
        &self,
        configuration_api_version: &str,
        params: &GetClusterConfigurationOptionalParams,
    ) -> Result<GetClusterConfigurationResponse> {
        let req = self
            .get(&["$", "GetClusterConfiguration"], "6.0", params)
            .query(&[("ConfigurationApiVersion", configuration_api_version)]);
        self.send_json("get_cluster_configuration", req).await
    }

    pub async fn get_cluster_configuration_upgrade_status(
        &self,
        params: &GetClusterConfigurationUpgradeStatusOptionalParams,
    ) -> Result<GetClusterConfigurationUpgradeStatusResponse> {
        let req = self.get(&["$", "GetClusterConfigurationUpgradeStatus"], "6.0", params);
        self.send_json("get_cluster_configuration_upgrade_status", req)
            .await
    }

    pub async fn get_upgrade_orchestration_service_state(
        &self,
        params: &GetUpgradeOrchestrationServiceStateOptionalParams,
    ) -> Result<GetUpgradeOrchestrationServiceStateResponse> {
        let req = self.get(&["$", "GetUpgradeOrchestrationServiceState"], "6.0", params);
        self.send_json("get_upgrade_orchestration_service_state", req)
            .await
    }

    pub async fn set_upgrade_orchestration_service_state(
        &self,
        state: &UpgradeOrchestrationServiceState,
        params: &SetUpgradeOrchestrationServiceStateOptionalParams,
    ) -> Result<SetUpgradeOrchestrationServiceStateResponse> {
        let req = self
            .post(&["$", "SetUpgradeOrchestrationServiceState"], "6.0", params)
            .json(state);
        self.send_json("set_upgrade_orchestration_service_state", req)
            .await
    }

    pub async fn provision_cluster(
        &self,
        description: &ProvisionFabricDescription,
        params: &ProvisionClusterOptionalParams,
    ) -> Result<()> {
        let req = self.post(&["$", "Provision"], "6.0", params).json(description);
        self.send_empty("provision_cluster", req).await
    }

    pub async fn unprovision_cluster(
        &self,
        description: &UnprovisionFabricDescription,
        params: &UnprovisionClusterOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["$", "Unprovision"], "6.0", params)
            .json(description);
        self.send_empty("unprovision_cluster", req).await
    }

    pub async fn rollback_cluster_upgrade(
        &self,
        params: &RollbackClusterUpgradeOptionalParams,
    ) -> Result<()> {
        let req = self.post(&["$", "RollbackUpgrade"], "6.0", params);
        self.send_empty("rollback_cluster_upgrade", req).await
    }

    /// Moves a manual cluster upgrade on to the next upgrade domain.
    pub async fn resume_cluster_upgrade(
        &self,
        description: &ResumeClusterUpgradeDescription,
        params: &ResumeClusterUpgradeOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["$", "MoveToNextUpgradeDomain"], "6.0", params)
            .json(description);
        self.send_empty("resume_cluster_upgrade", req).await
    }

    pub async fn start_cluster_upgrade(
        &self,
        description: &StartClusterUpgradeDescription,
        params: &StartClusterUpgradeOptionalParams,
    ) -> Result<()> {
        let req = self.post(&["$", "Upgrade"], "6.0", params).json(description);
        self.send_empty("start_cluster_upgrade", req).await
    }

    pub async fn start_cluster_configuration_upgrade(
        &self,
        description: &ClusterConfigurationUpgradeDescription,
        params: &StartClusterConfigurationUpgradeOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["$", "StartClusterConfigurationUpgrade"], "6.0", params)
            .json(description);
        self.send_empty("start_cluster_configuration_upgrade", req)
            .await
    }

    pub async fn update_cluster_upgrade(
        &self,
        description: &UpdateClusterUpgradeDescription,
        params: &UpdateClusterUpgradeOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["$", "UpdateUpgrade"], "6.0", params)
            .json(description);
        self.send_empty("update_cluster_upgrade", req).await
    }

    /// Checks an upgrade description without starting the upgrade.
    pub async fn validate_cluster_upgrade(
        &self,
        description: &StartClusterUpgradeDescription,
        params: &ValidateClusterUpgradeOptionalParams,
    ) -> Result<ValidateClusterUpgradeResponse> {
        let req = self
            .post(&["$", "ValidateUpgrade"], "8.2", params)
            .json(description);
        self.send_json("validate_cluster_upgrade", req).await
    }

    pub async fn get_aad_metadata(
        &self,
        params: &GetAadMetadataOptionalParams,
    ) -> Result<GetAadMetadataResponse> {
        let req = self.get(&["$", "GetAadMetadata"], "6.0", params);
        self.send_json("get_aad_metadata", req).await
    }

    pub async fn get_cluster_version(
        &self,
        params: &GetClusterVersionOptionalParams,
    ) -> Result<GetClusterVersionResponse> {
        let req = self.get(&["$", "GetClusterVersion"], "6.4", params);
        self.send_json("get_cluster_version", req).await
    }

    pub async fn get_cluster_load(
        &self,
        params: &GetClusterLoadOptionalParams,
    ) -> Result<GetClusterLoadResponse> {
        let req = self.get(&["$", "GetLoadInformation"], "6.0", params);
        self.send_json("get_cluster_load", req).await
    }

    pub async fn toggle_verbose_service_placement_health_reporting(
        &self,
        enabled: bool,
        params: &ToggleVerboseServicePlacementHealthReportingOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(
                &["$", "ToggleVerboseServicePlacementHealthReporting"],
                "6.4",
                params,
            )
            .query(&[("Enabled", enabled)]);
        self.send_empty("toggle_verbose_service_placement_health_reporting", req)
            .await
    }
}
