//! Applications: lifecycle, capacity, upgrades and load.

use serde::{Deserialize, Serialize};

use super::application_type::ApplicationParameter;
use super::filter::{ApplicationDefinitionKindFilter, HealthStateFilter};
use super::health::{ApplicationHealth, ApplicationHealthPolicy, HealthState};
use super::known::open_enum;
use super::paging::PagedList;
use super::params::{TimeoutOptionalParams, optional_params};
use super::upgrade::{
    MonitoringPolicyDescription, RollingUpgradeUpdateDescription, UpgradeKind, UpgradeMode,
    UpgradeProgressCommon, UpgradeSortOrder,
};

open_enum! {
    /// Lifecycle status of an application.
    pub enum ApplicationStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Ready.
        Ready = "Ready",
        /// Upgrading.
        Upgrading = "Upgrading",
        /// Being created.
        Creating = "Creating",
        /// Being deleted.
        Deleting = "Deleting",
        /// Creation or deletion failed.
        Failed = "Failed",
    }
}

open_enum! {
    /// How an application was defined.
    pub enum ApplicationDefinitionKind {
        /// Invalid.
        Invalid = "Invalid",
        /// Service Fabric application description.
        ServiceFabricApplicationDescription = "ServiceFabricApplicationDescription",
        /// Compose file.
        Compose = "Compose",
    }
}

/// A running application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationInfo {
    /// Application id (name without `fabric:/`, `/` replaced by `~`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Application name (`fabric:/...`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Application type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Application type version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_version: Option<String>,
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    /// Application parameters.
    #[serde(default)]
    pub parameters: Vec<ApplicationParameter>,
    /// Aggregated health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_state: Option<HealthState>,
    /// How the application was defined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_definition_kind: Option<ApplicationDefinitionKind>,
}

/// Page of applications.
pub type PagedApplicationInfoList = PagedList<ApplicationInfo>;

/// Capacity reserved for one metric of an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationMetricDescription {
    /// Metric name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Maximum load per node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_capacity: Option<i64>,
    /// Load reserved per node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_capacity: Option<i64>,
    /// Total capacity across the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_application_capacity: Option<i64>,
}

/// Node count bounds and metric capacities of an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationCapacityDescription {
    /// Minimum nodes reserved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_nodes: Option<i64>,
    /// Maximum nodes used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_nodes: Option<i64>,
    /// Metric capacities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_metrics: Vec<ApplicationMetricDescription>,
}

/// Managed identity assigned to an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ManagedApplicationIdentity {
    /// Identity name.
    pub name: String,
    /// Principal id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
}

/// Managed identities of an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ManagedApplicationIdentityDescription {
    /// Token service endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_service_endpoint: Option<String>,
    /// Identities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub managed_identities: Vec<ManagedApplicationIdentity>,
}

/// Body of `create_application`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationDescription {
    /// Application name (`fabric:/...`).
    pub name: String,
    /// Application type name.
    pub type_name: String,
    /// Application type version.
    pub type_version: String,
    /// Parameter overrides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter_list: Vec<ApplicationParameter>,
    /// Capacity settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_capacity: Option<ApplicationCapacityDescription>,
    /// Managed identities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_application_identity: Option<ManagedApplicationIdentityDescription>,
}

/// Body of `start_application_upgrade`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationUpgradeDescription {
    /// Application name.
    pub name: String,
    /// Target type version.
    pub target_application_type_version: String,
    /// Parameter overrides for the new version.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ApplicationParameter>,
    /// Upgrade kind.
    pub upgrade_kind: UpgradeKind,
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
    /// Health policy used during the upgrade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_health_policy: Option<ApplicationHealthPolicy>,
    /// Delay before closing stateless instances, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_close_delay_duration_in_seconds: Option<i64>,
    /// Managed identities for the new version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_application_identity: Option<ManagedApplicationIdentityDescription>,
}

impl ApplicationUpgradeDescription {
    /// Rolling upgrade of `name` to `version` with service defaults.
    pub fn rolling(name: impl Into<String>, version: impl Into<String>) -> Self {
        ApplicationUpgradeDescription {
            name: name.into(),
            target_application_type_version: version.into(),
            parameters: Vec::new(),
            upgrade_kind: UpgradeKind::Rolling,
            rolling_upgrade_mode: None,
            upgrade_replica_set_check_timeout_in_seconds: None,
            force_restart: None,
            sort_order: None,
            monitoring_policy: None,
            application_health_policy: None,
            instance_close_delay_duration_in_seconds: None,
            managed_application_identity: None,
        }
    }
}

/// Progress of an application upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationUpgradeProgressInfo {
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Application type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Target type version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_application_type_version: Option<String>,
    /// Domain and overall progress.
    #[serde(flatten)]
    pub progress: UpgradeProgressCommon,
    /// Upgrade parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_description: Option<ApplicationUpgradeDescription>,
}

/// Body of `update_application_upgrade`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationUpgradeUpdateDescription {
    /// Application name.
    pub name: String,
    /// Upgrade kind.
    pub upgrade_kind: UpgradeKind,
    /// New health policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_health_policy: Option<ApplicationHealthPolicy>,
    /// Rolling settings to change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_description: Option<RollingUpgradeUpdateDescription>,
}

/// Body of `resume_application_upgrade`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ResumeApplicationUpgradeDescription {
    /// Upgrade domain to start next.
    pub upgrade_domain_name: String,
}

/// Body of `update_application`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationUpdateDescription {
    /// Bitmask of fields being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    /// Drop all capacity settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_application_capacity: Option<bool>,
    /// Minimum nodes reserved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_nodes: Option<i64>,
    /// Maximum nodes used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_nodes: Option<i64>,
    /// Metric capacities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_metrics: Vec<ApplicationMetricDescription>,
}

/// Load of one metric of an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationLoadMetricInformation {
    /// Metric name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Reserved capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_capacity: Option<i64>,
    /// Total capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_capacity: Option<i64>,
    /// Current load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_load: Option<i64>,
}

/// Load of an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationLoadInfo {
    /// Application id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Minimum nodes reserved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_nodes: Option<i64>,
    /// Maximum nodes used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_nodes: Option<i64>,
    /// Nodes currently hosting the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_count: Option<i64>,
    /// Per-metric load.
    #[serde(default)]
    pub application_load_metric_information: Vec<ApplicationLoadMetricInformation>,
}

/// Application that owns a service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationNameInfo {
    /// Application id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

optional_params! {
    /// Optional parameters of `get_application_info_list`.
    pub struct GetApplicationInfoListOptionalParams {
        /// Definition kinds to include.
        application_definition_kind_filter: ApplicationDefinitionKindFilter =>
            "ApplicationDefinitionKindFilter",
        /// Only applications of this type.
        application_type_name: String => "ApplicationTypeName",
        /// Leave out parameters.
        exclude_application_parameters: bool => "ExcludeApplicationParameters",
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
        /// Page size.
        max_results: i64 => "MaxResults",
    }

    /// Optional parameters of `get_application_info`.
    pub struct GetApplicationInfoOptionalParams {
        /// Leave out parameters.
        exclude_application_parameters: bool => "ExcludeApplicationParameters",
    }

    /// Optional parameters of `delete_application`.
    pub struct DeleteApplicationOptionalParams {
        /// Remove without waiting for graceful shutdown.
        force_remove: bool => "ForceRemove",
    }

    /// Optional parameters of `get_application_health`.
    pub struct GetApplicationHealthOptionalParams {
        /// Events to include.
        events_health_state_filter: HealthStateFilter => "EventsHealthStateFilter",
        /// Deployed applications to include.
        deployed_applications_health_state_filter: HealthStateFilter =>
            "DeployedApplicationsHealthStateFilter",
        /// Services to include.
        services_health_state_filter: HealthStateFilter => "ServicesHealthStateFilter",
        /// Leave out health statistics.
        exclude_health_statistics: bool => "ExcludeHealthStatistics",
    }

    /// Optional parameters of `report_application_health`.
    pub struct ReportApplicationHealthOptionalParams {
        /// Send the report immediately.
        immediate: bool => "Immediate",
    }
}

/// Optional parameters of `get_application_health_using_policy`.
pub type GetApplicationHealthUsingPolicyOptionalParams = GetApplicationHealthOptionalParams;
/// Optional parameters of `create_application`.
pub type CreateApplicationOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_application_load_info`.
pub type GetApplicationLoadInfoOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `start_application_upgrade`.
pub type StartApplicationUpgradeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_application_upgrade`.
pub type GetApplicationUpgradeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `update_application_upgrade`.
pub type UpdateApplicationUpgradeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `update_application`.
pub type UpdateApplicationOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `resume_application_upgrade`.
pub type ResumeApplicationUpgradeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `rollback_application_upgrade`.
pub type RollbackApplicationUpgradeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_application_name_info`.
pub type GetApplicationNameInfoOptionalParams = TimeoutOptionalParams;

/// Response of `get_application_info_list`.
pub type GetApplicationInfoListResponse = PagedApplicationInfoList;
/// Response of `get_application_info`.
pub type GetApplicationInfoResponse = ApplicationInfo;
/// Response of `get_application_load_info`.
pub type GetApplicationLoadInfoResponse = ApplicationLoadInfo;
/// Response of `get_application_health`.
pub type GetApplicationHealthResponse = ApplicationHealth;
/// Response of `get_application_health_using_policy`.
pub type GetApplicationHealthUsingPolicyResponse = ApplicationHealth;
/// Response of `get_application_upgrade`.
pub type GetApplicationUpgradeResponse = ApplicationUpgradeProgressInfo;
/// Response of `get_application_name_info`.
pub type GetApplicationNameInfoResponse = ApplicationNameInfo;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::upgrade::UpgradeState;
    use serde_json::json;

    #[test]
    fn application_description_omits_empty_collections() {
        let description = ApplicationDescription {
            name: "fabric:/samples/CalcApp".into(),
            type_name: "CalculatorApp".into(),
            type_version: "1.0".into(),
            parameter_list: Vec::new(),
            application_capacity: None,
            managed_application_identity: None,
        };
        assert_eq!(
            serde_json::to_value(&description).expect("encode"),
            json!({
                "Name": "fabric:/samples/CalcApp",
                "TypeName": "CalculatorApp",
                "TypeVersion": "1.0"
            })
        );
    }

    #[test]
    fn upgrade_progress_decodes_with_nested_description() {
        let progress: ApplicationUpgradeProgressInfo = serde_json::from_value(json!({
            "Name": "fabric:/samples/CalcApp",
            "TypeName": "CalculatorApp",
            "TargetApplicationTypeVersion": "2.0",
            "UpgradeState": "RollingBackCompleted",
            "FailureReason": "HealthCheck",
            "UpgradeDescription": {
                "Name": "fabric:/samples/CalcApp",
                "TargetApplicationTypeVersion": "2.0",
                "UpgradeKind": "Rolling",
                "RollingUpgradeMode": "Monitored"
            }
        }))
        .expect("decode");
        assert_eq!(
            progress.progress.upgrade_state,
            Some(UpgradeState::RollingBackCompleted)
        );
        assert!(
            progress
                .progress
                .upgrade_state
                .as_ref()
                .is_some_and(UpgradeState::is_terminal)
        );
        let description = progress.upgrade_description.expect("description");
        assert_eq!(description.rolling_upgrade_mode, Some(UpgradeMode::Monitored));
    }

    #[test]
    fn rolling_upgrade_constructor_sets_kind() {
        let body = serde_json::to_value(ApplicationUpgradeDescription::rolling(
            "fabric:/app",
            "2.0",
        ))
        .expect("encode");
        assert_eq!(body["UpgradeKind"], json!("Rolling"));
        assert_eq!(body["TargetApplicationTypeVersion"], json!("2.0"));
    }
}
