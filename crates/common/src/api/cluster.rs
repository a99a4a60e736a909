//! Cluster-wide resources: manifest, version, configuration, load and upgrades.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::filter::HealthStateFilter;
use super::health::{
    ApplicationHealthPolicies, ClusterHealth, ClusterHealthChunk, ClusterHealthPolicy,
};
use super::known::open_enum;
use super::params::{TimeoutOptionalParams, optional_params};
use super::upgrade::{
    MonitoringPolicyDescription, RollingUpgradeUpdateDescription, UpgradeKind, UpgradeMode,
    UpgradeProgressCommon, UpgradeSortOrder, UpgradeState,
};

/// The cluster manifest XML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterManifest {
    /// Manifest contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
}

/// Fabric code version the cluster runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterVersion {
    /// Version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Standalone cluster configuration JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterConfiguration {
    /// Configuration document as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_configuration: Option<String>,
}

/// Provisioned fabric code version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct FabricCodeVersionInfo {
    /// Code version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_version: Option<String>,
}

/// Provisioned fabric configuration version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct FabricConfigVersionInfo {
    /// Config version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_version: Option<String>,
}

/// Image store paths of a fabric package to provision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionFabricDescription {
    /// Path of the code package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_file_path: Option<String>,
    /// Path of the cluster manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_manifest_file_path: Option<String>,
}

/// Fabric versions to unprovision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UnprovisionFabricDescription {
    /// Code version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_version: Option<String>,
    /// Config version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_version: Option<String>,
}

/// Upgrade domain to start next in a manual upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ResumeClusterUpgradeDescription {
    /// Next upgrade domain.
    pub upgrade_domain: String,
}

/// Delta health thresholds applied during a cluster upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterUpgradeHealthPolicyObject {
    /// Tolerated increase of unhealthy nodes (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_delta_unhealthy_nodes: Option<u8>,
    /// Tolerated increase of unhealthy nodes per upgrade domain (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_upgrade_domain_delta_unhealthy_nodes: Option<u8>,
}

/// Parameters for a cluster code or configuration upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StartClusterUpgradeDescription {
    /// Target code version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_version: Option<String>,
    /// Target config version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_version: Option<String>,
    /// Upgrade kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_kind: Option<UpgradeKind>,
    /// Upgrade mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_upgrade_mode: Option<UpgradeMode>,
    /// Maximum wait for replica safety, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_replica_set_check_timeout_in_seconds: Option<i64>,
    /// Restart processes even when only configuration changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_restart: Option<bool>,
    /// Upgrade domain ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<UpgradeSortOrder>,
    /// Monitoring settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring_policy: Option<MonitoringPolicyDescription>,
    /// Cluster health policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_health_policy: Option<ClusterHealthPolicy>,
    /// Evaluate delta health instead of absolute health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_delta_health_evaluation: Option<bool>,
    /// Delta thresholds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_upgrade_health_policy: Option<ClusterUpgradeHealthPolicyObject>,
    /// Application policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_health_policy_map: Option<ApplicationHealthPolicies>,
    /// Delay before closing stateless instances, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_close_delay_duration_in_seconds: Option<i64>,
}

/// Description of the cluster upgrade in progress.
pub type ClusterUpgradeDescriptionObject = StartClusterUpgradeDescription;

/// Changes to a running cluster upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateClusterUpgradeDescription {
    /// Upgrade kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_kind: Option<UpgradeKind>,
    /// Rolling upgrade settings to change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_description: Option<RollingUpgradeUpdateDescription>,
    /// Cluster health policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_health_policy: Option<ClusterHealthPolicy>,
    /// Evaluate delta health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_delta_health_evaluation: Option<bool>,
    /// Delta thresholds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_upgrade_health_policy: Option<ClusterUpgradeHealthPolicyObject>,
    /// Application policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_health_policy_map: Option<ApplicationHealthPolicies>,
}

/// Progress of the current or last cluster upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterUpgradeProgressObject {
    /// Target code version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_version: Option<String>,
    /// Target config version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_version: Option<String>,
    /// Domain and overall progress.
    #[serde(flatten)]
    pub progress: UpgradeProgressCommon,
    /// Upgrade parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_description: Option<ClusterUpgradeDescriptionObject>,
}

/// Standalone cluster configuration upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterConfigurationUpgradeDescription {
    /// New cluster configuration JSON.
    pub cluster_config: String,
    /// Health retry timeout (ISO-8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_retry_timeout: Option<String>,
    /// Wait before evaluating health, in seconds (ISO-8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_wait_duration_in_seconds: Option<String>,
    /// Stable health duration (ISO-8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_stable_duration_in_seconds: Option<String>,
    /// Per-domain timeout (ISO-8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_domain_timeout_in_seconds: Option<String>,
    /// Overall timeout (ISO-8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_timeout_in_seconds: Option<String>,
    /// Tolerated unhealthy applications (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_applications: Option<u8>,
    /// Tolerated unhealthy nodes (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_nodes: Option<u8>,
    /// Tolerated increase of unhealthy nodes (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_delta_unhealthy_nodes: Option<u8>,
    /// Tolerated increase per upgrade domain (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_upgrade_domain_delta_unhealthy_nodes: Option<u8>,
    /// Application policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_health_policies: Option<ApplicationHealthPolicies>,
}

/// Status of a standalone cluster configuration upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterConfigurationUpgradeStatusInfo {
    /// Upgrade state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_state: Option<UpgradeState>,
    /// Progress percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_status: Option<i32>,
    /// Target config version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_version: Option<String>,
    /// Free-form details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Opaque state of the upgrade orchestration service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeOrchestrationServiceState {
    /// Service state blob.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_state: Option<String>,
}

/// Summary returned after setting the upgrade orchestration service state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeOrchestrationServiceStateSummary {
    /// Current code version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_code_version: Option<String>,
    /// Current manifest version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_manifest_version: Option<String>,
    /// Target code version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_code_version: Option<String>,
    /// Target manifest version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_manifest_version: Option<String>,
    /// Pending upgrade type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_upgrade_type: Option<String>,
}

/// Azure Active Directory metadata for the cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AadMetadataObject {
    /// Metadata type, `aad` when AAD is enabled.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Metadata values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AadMetadata>,
}

/// AAD endpoints and application ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub struct AadMetadata {
    /// Authority URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    /// Client application id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// Cluster application id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Login endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Redirect URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// Tenant id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
}

open_enum! {
    /// Impact of an upgrade on service hosts.
    pub enum ServiceHostUpgradeImpact {
        /// Invalid.
        Invalid = "Invalid",
        /// No service host restarts.
        None = "None",
        /// Service hosts restart.
        ServiceHostRestart = "ServiceHostRestart",
        /// Impact cannot be determined.
        UnexpectedServiceHostRestart = "UnexpectedServiceHostRestart",
    }
}

/// Result of validating a cluster upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateClusterUpgradeResult {
    /// Impact on service hosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_host_upgrade_impact: Option<ServiceHostUpgradeImpact>,
    /// Validation details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_details: Option<String>,
}

/// Load of one metric across the cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct LoadMetricInformation {
    /// Metric name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Balanced before the last balancing run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_balanced_before: Option<bool>,
    /// Balanced after the last balancing run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_balanced_after: Option<bool>,
    /// Standard deviation before balancing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deviation_before: Option<String>,
    /// Standard deviation after balancing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deviation_after: Option<String>,
    /// Balancing threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balancing_threshold: Option<String>,
    /// Action taken by the balancer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Activity threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_threshold: Option<String>,
    /// Total capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_capacity: Option<String>,
    /// Total load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_load: Option<String>,
    /// Current load as a floating point string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_cluster_load: Option<String>,
    /// Remaining capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_capacity_remaining: Option<String>,
    /// Whether capacity is violated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_cluster_capacity_violation: Option<bool>,
    /// Reserved buffer percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_buffer_percentage: Option<String>,
    /// Remaining capacity after the buffer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffered_cluster_capacity_remaining: Option<String>,
    /// Lowest node load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_node_load_value: Option<String>,
    /// Highest node load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_node_load_value: Option<String>,
    /// Load scheduled for removal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_load_removal: Option<String>,
}

/// Load of every metric in the cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterLoadInfo {
    /// When the last balancing run started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_balancing_start_time_utc: Option<DateTime<Utc>>,
    /// When the last balancing run ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_balancing_end_time_utc: Option<DateTime<Utc>>,
    /// Per-metric load.
    #[serde(default)]
    pub load_metric_information: Vec<LoadMetricInformation>,
}

optional_params! {
    /// Optional parameters of `get_cluster_health`.
    pub struct GetClusterHealthOptionalParams {
        /// Nodes to include.
        nodes_health_state_filter: HealthStateFilter => "NodesHealthStateFilter",
        /// Applications to include.
        applications_health_state_filter: HealthStateFilter => "ApplicationsHealthStateFilter",
        /// Events to include.
        events_health_state_filter: HealthStateFilter => "EventsHealthStateFilter",
        /// Leave out health statistics.
        exclude_health_statistics: bool => "ExcludeHealthStatistics",
        /// Include fabric:/System in the statistics.
        include_system_application_health_statistics: bool =>
            "IncludeSystemApplicationHealthStatistics",
    }

    /// Optional parameters of `report_cluster_health`.
    pub struct ReportClusterHealthOptionalParams {
        /// Send the report to the health store immediately.
        immediate: bool => "Immediate",
    }

    /// Optional parameters of `get_provisioned_fabric_code_version_info_list`.
    pub struct GetProvisionedFabricCodeVersionInfoListOptionalParams {
        /// Only return this code version.
        code_version: String => "CodeVersion",
    }

    /// Optional parameters of `get_provisioned_fabric_config_version_info_list`.
    pub struct GetProvisionedFabricConfigVersionInfoListOptionalParams {
        /// Only return this config version.
        config_version: String => "ConfigVersion",
    }
}

/// Optional parameters of `get_cluster_health_using_policy`.
pub type GetClusterHealthUsingPolicyOptionalParams = GetClusterHealthOptionalParams;
/// Optional parameters of `get_cluster_manifest`.
pub type GetClusterManifestOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_cluster_health_chunk`.
pub type GetClusterHealthChunkOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_cluster_health_chunk_using_policy_and_advanced_filters`.
pub type GetClusterHealthChunkUsingPolicyAndAdvancedFiltersOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_cluster_upgrade_progress`.
pub type GetClusterUpgradeProgressOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_cluster_configuration`.
pub type GetClusterConfigurationOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_cluster_configuration_upgrade_status`.
pub type GetClusterConfigurationUpgradeStatusOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_upgrade_orchestration_service_state`.
pub type GetUpgradeOrchestrationServiceStateOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `set_upgrade_orchestration_service_state`.
pub type SetUpgradeOrchestrationServiceStateOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `provision_cluster`.
pub type ProvisionClusterOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `unprovision_cluster`.
pub type UnprovisionClusterOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `rollback_cluster_upgrade`.
pub type RollbackClusterUpgradeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `resume_cluster_upgrade`.
pub type ResumeClusterUpgradeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `start_cluster_upgrade`.
pub type StartClusterUpgradeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `start_cluster_configuration_upgrade`.
pub type StartClusterConfigurationUpgradeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `update_cluster_upgrade`.
pub type UpdateClusterUpgradeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `validate_cluster_upgrade`.
pub type ValidateClusterUpgradeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_aad_metadata`.
pub type GetAadMetadataOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_cluster_version`.
pub type GetClusterVersionOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_cluster_load`.
pub type GetClusterLoadOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `toggle_verbose_service_placement_health_reporting`.
pub type ToggleVerboseServicePlacementHealthReportingOptionalParams = TimeoutOptionalParams;

/// Response of `get_cluster_manifest`.
pub type GetClusterManifestResponse = ClusterManifest;
/// Response of `get_cluster_health`.
pub type GetClusterHealthResponse = ClusterHealth;
/// Response of `get_cluster_health_using_policy`.
pub type GetClusterHealthUsingPolicyResponse = ClusterHealth;
/// Response of `get_cluster_health_chunk`.
pub type GetClusterHealthChunkResponse = ClusterHealthChunk;
/// Response of `get_cluster_health_chunk_using_policy_and_advanced_filters`.
pub type GetClusterHealthChunkUsingPolicyAndAdvancedFiltersResponse = ClusterHealthChunk;
/// Response of `get_provisioned_fabric_code_version_info_list`.
pub type GetProvisionedFabricCodeVersionInfoListResponse = Vec<FabricCodeVersionInfo>;
/// Response of `get_provisioned_fabric_config_version_info_list`.
pub type GetProvisionedFabricConfigVersionInfoListResponse = Vec<FabricConfigVersionInfo>;
/// Response of `get_cluster_upgrade_progress`.
pub type GetClusterUpgradeProgressResponse = ClusterUpgradeProgressObject;
/// Response of `get_cluster_configuration`.
pub type GetClusterConfigurationResponse = ClusterConfiguration;
/// Response of `get_cluster_configuration_upgrade_status`.
pub type GetClusterConfigurationUpgradeStatusResponse = ClusterConfigurationUpgradeStatusInfo;
/// Response of `get_upgrade_orchestration_service_state`.
pub type GetUpgradeOrchestrationServiceStateResponse = UpgradeOrchestrationServiceState;
/// Response of `set_upgrade_orchestration_service_state`.
pub type SetUpgradeOrchestrationServiceStateResponse = UpgradeOrchestrationServiceStateSummary;
/// Response of `validate_cluster_upgrade`.
pub type ValidateClusterUpgradeResponse = ValidateClusterUpgradeResult;
/// Response of `get_aad_metadata`.
pub type GetAadMetadataResponse = AadMetadataObject;
/// Response of `get_cluster_version`.
pub type GetClusterVersionResponse = ClusterVersion;
/// Response of `get_cluster_load`.
pub type GetClusterLoadResponse = ClusterLoadInfo;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upgrade_progress_flattens_common_fields() {
        let progress: ClusterUpgradeProgressObject = serde_json::from_value(json!({
            "CodeVersion": "9.1.1436.9590",
            "ConfigVersion": "2",
            "UpgradeState": "RollingForwardInProgress",
            "NextUpgradeDomain": "UD2",
            "RollingUpgradeMode": "Monitored",
            "UpgradeDomains": [{"Name": "UD1", "State": "Completed"}],
            "UpgradeDescription": {
                "CodeVersion": "9.1.1436.9590",
                "UpgradeKind": "Rolling",
                "MonitoringPolicy": {"FailureAction": "Rollback"}
            }
        }))
        .expect("decode progress");
        assert_eq!(
            progress.progress.upgrade_state,
            Some(UpgradeState::RollingForwardInProgress)
        );
        assert_eq!(progress.progress.next_upgrade_domain.as_deref(), Some("UD2"));
        let description = progress.upgrade_description.expect("description");
        assert_eq!(description.upgrade_kind, Some(UpgradeKind::Rolling));
    }

    #[test]
    fn aad_metadata_uses_lowercase_names() {
        let aad: AadMetadataObject = serde_json::from_value(json!({
            "type": "aad",
            "metadata": {"tenant": "t", "cluster": "c", "client": "x"}
        }))
        .expect("decode");
        assert_eq!(aad.kind.as_deref(), Some("aad"));
        assert_eq!(aad.metadata.and_then(|m| m.tenant).as_deref(), Some("t"));
    }

    #[test]
    fn health_params_encode_filters_as_integers() {
        let params = GetClusterHealthOptionalParams {
            nodes_health_state_filter: Some(HealthStateFilter::ERROR),
            exclude_health_statistics: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).expect("encode"),
            json!({"NodesHealthStateFilter": 8, "ExcludeHealthStatistics": true})
        );
    }
}
