//! Entities as deployed on a node: applications, service packages, code
//! packages, replicas and service types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::filter::HealthStateFilter;
use super::health::{DeployedApplicationHealth, DeployedServicePackageHealth, HealthState};
use super::known::{UnknownVariant, open_enum, tagged_union};
use super::paging::PagedList;
use super::params::{TimeoutOptionalParams, optional_params};
use super::replica::{ReplicaRole, ReplicaStatus};

open_enum! {
    /// Status of an application on a node.
    pub enum DeployedApplicationStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Downloading packages.
        Downloading = "Downloading",
        /// Activating.
        Activating = "Activating",
        /// Active.
        Active = "Active",
        /// Upgrading.
        Upgrading = "Upgrading",
        /// Deactivating.
        Deactivating = "Deactivating",
    }
}

open_enum! {
    /// Status of a deployed service or code package.
    pub enum DeploymentStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Downloading.
        Downloading = "Downloading",
        /// Activating.
        Activating = "Activating",
        /// Active.
        Active = "Active",
        /// Upgrading.
        Upgrading = "Upgrading",
        /// Deactivating.
        Deactivating = "Deactivating",
        /// Exited after running to completion.
        RanToCompletion = "RanToCompletion",
        /// Failed.
        Failed = "Failed",
    }
}

open_enum! {
    /// How a code package is hosted.
    pub enum HostType {
        /// Invalid.
        Invalid = "Invalid",
        /// Executable.
        ExeHost = "ExeHost",
        /// Container.
        ContainerHost = "ContainerHost",
    }
}

open_enum! {
    /// Isolation of a code package host.
    pub enum HostIsolationMode {
        /// No isolation.
        None = "None",
        /// Process isolation.
        Process = "Process",
        /// Hyper-V isolation.
        HyperV = "HyperV",
    }
}

open_enum! {
    /// Status of a code package entry point.
    pub enum EntryPointStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Pending.
        Pending = "Pending",
        /// Starting.
        Starting = "Starting",
        /// Started.
        Started = "Started",
        /// Stopping.
        Stopping = "Stopping",
        /// Stopped.
        Stopped = "Stopped",
    }
}

open_enum! {
    /// Registration status of a service type on a node.
    pub enum ServiceTypeRegistrationStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Disabled.
        Disabled = "Disabled",
        /// Enabled but not registered.
        Enabled = "Enabled",
        /// Registered by its host.
        Registered = "Registered",
    }
}

open_enum! {
    /// Scope of a shared package.
    pub enum PackageSharingScope {
        /// Nothing shared.
        None = "None",
        /// Code, config and data shared.
        All = "All",
        /// Code shared.
        Code = "Code",
        /// Config shared.
        Config = "Config",
        /// Data shared.
        Data = "Data",
    }
}

open_enum! {
    /// Operation the service is executing on a replica.
    pub enum ServiceOperationName {
        /// Unknown.
        Unknown = "Unknown",
        /// Idle.
        None = "None",
        /// Opening.
        Open = "Open",
        /// Changing role.
        ChangeRole = "ChangeRole",
        /// Closing.
        Close = "Close",
        /// Aborting.
        Abort = "Abort",
    }
}

open_enum! {
    /// Operation the replicator is executing.
    pub enum ReplicatorOperationName {
        /// Invalid.
        Invalid = "Invalid",
        /// Idle.
        None = "None",
        /// Opening.
        Open = "Open",
        /// Changing role.
        ChangeRole = "ChangeRole",
        /// Updating epoch.
        UpdateEpoch = "UpdateEpoch",
        /// Closing.
        Close = "Close",
        /// Aborting.
        Abort = "Abort",
        /// Handling data loss.
        OnDataLoss = "OnDataLoss",
        /// Waiting for catch up.
        WaitForCatchup = "WaitForCatchup",
        /// Building a replica.
        Build = "Build",
    }
}

open_enum! {
    /// Read or write access of a partition.
    pub enum PartitionAccessStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Granted.
        Granted = "Granted",
        /// Reconfiguring.
        ReconfigurationPending = "ReconfigurationPending",
        /// Not primary.
        NotPrimary = "NotPrimary",
        /// No write quorum.
        NoWriteQuorum = "NoWriteQuorum",
    }
}

/// An application deployed on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedApplicationInfo {
    /// Application id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Application type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Application type version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_version: Option<String>,
    /// Status on the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeployedApplicationStatus>,
    /// Work directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_directory: Option<String>,
    /// Log directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_directory: Option<String>,
    /// Temp directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_directory: Option<String>,
    /// Health, when requested with `IncludeHealthState`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_state: Option<HealthState>,
}

/// Page of deployed applications.
pub type PagedDeployedApplicationInfoList = PagedList<DeployedApplicationInfo>;

/// A service package deployed on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedServicePackageInfo {
    /// Service manifest name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Service manifest version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Deployment status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeploymentStatus>,
    /// Activation id; empty for shared process packages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_package_activation_id: Option<String>,
}

/// Activation counters of an entry point. Counts travel as strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CodePackageEntryPointStatistics {
    /// Last exit code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_exit_code: Option<String>,
    /// Last activation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activation_time: Option<DateTime<Utc>>,
    /// Last exit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_exit_time: Option<DateTime<Utc>>,
    /// Last successful activation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_successful_activation_time: Option<DateTime<Utc>>,
    /// Last successful exit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_successful_exit_time: Option<DateTime<Utc>>,
    /// Activations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_count: Option<String>,
    /// Failed activations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_failure_count: Option<String>,
    /// Consecutive failed activations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuous_activation_failure_count: Option<String>,
    /// Exits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_count: Option<String>,
    /// Failed exits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_failure_count: Option<String>,
    /// Consecutive failed exits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuous_exit_failure_count: Option<String>,
}

/// Setup or main entry point of a code package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CodePackageEntryPoint {
    /// Executable path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_point_location: Option<String>,
    /// Process id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<String>,
    /// User the process runs as.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_as_user_name: Option<String>,
    /// Activation counters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_package_entry_point_statistics: Option<CodePackageEntryPointStatistics>,
    /// Status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntryPointStatus>,
    /// Next scheduled activation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_activation_time: Option<DateTime<Utc>>,
    /// Instance id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

/// A code package deployed on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedCodePackageInfo {
    /// Code package name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Code package version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Owning service manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_manifest_name: Option<String>,
    /// Activation id of the owning package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_package_activation_id: Option<String>,
    /// Host type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_type: Option<HostType>,
    /// Host isolation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_isolation_mode: Option<HostIsolationMode>,
    /// Deployment status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeploymentStatus>,
    /// Interval between periodic runs, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_frequency_interval: Option<String>,
    /// Setup entry point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_entry_point: Option<CodePackageEntryPoint>,
    /// Main entry point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_entry_point: Option<CodePackageEntryPoint>,
}

/// Reconfiguration in progress on a stateful replica.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ReconfigurationInformation {
    /// Role before the reconfiguration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_configuration_role: Option<ReplicaRole>,
    /// Phase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconfiguration_phase: Option<String>,
    /// Type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconfiguration_type: Option<String>,
    /// Start time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconfiguration_start_time_utc: Option<DateTime<Utc>>,
}

/// A replica or instance hosted on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedServiceReplicaInfo {
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Service type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_name: Option<String>,
    /// Service manifest name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_manifest_name: Option<String>,
    /// Hosting code package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_package_name: Option<String>,
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
    /// Replica status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_status: Option<ReplicaStatus>,
    /// Replica address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Activation id of the hosting package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_package_activation_id: Option<String>,
    /// Host process id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_process_id: Option<String>,
    /// Stateful or stateless fields.
    #[serde(flatten)]
    pub kind: DeployedReplicaKind,
}

/// Kind-specific part of [`DeployedServiceReplicaInfo`], discriminated by `ServiceKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "ServiceKind")]
pub enum DeployedReplicaKind {
    /// Stateful replica.
    Stateful {
        /// Replica id.
        #[serde(rename = "ReplicaId", default, skip_serializing_if = "Option::is_none")]
        replica_id: Option<String>,
        /// Role.
        #[serde(rename = "ReplicaRole", default, skip_serializing_if = "Option::is_none")]
        replica_role: Option<ReplicaRole>,
        /// Reconfiguration in progress.
        #[serde(
            rename = "ReconfigurationInformation",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        reconfiguration_information: Option<ReconfigurationInformation>,
    },
    /// Stateless instance.
    Stateless {
        /// Instance id.
        #[serde(rename = "InstanceId", default, skip_serializing_if = "Option::is_none")]
        instance_id: Option<String>,
    },
    /// Service kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<DeployedReplicaKind>),
}

tagged_union!(DeployedReplicaKind, "ServiceKind", ["Stateful", "Stateless"]);

/// Load reported by a replica for one metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct LoadMetricReportInfo {
    /// Metric name.
    pub name: String,
    /// Reported value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    /// Current value, with decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
    /// When the value was reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reported_utc: Option<DateTime<Utc>>,
}

/// Detailed runtime view of a replica on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedServiceReplicaDetailInfo {
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
    /// Service API call in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_service_operation: Option<ServiceOperationName>,
    /// Start of that call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_service_operation_start_time_utc: Option<DateTime<Utc>>,
    /// Reported loads.
    #[serde(default)]
    pub reported_load: Vec<LoadMetricReportInfo>,
    /// Stateful or stateless fields.
    #[serde(flatten)]
    pub kind: DeployedReplicaDetailKind,
}

/// Kind-specific part of [`DeployedServiceReplicaDetailInfo`], discriminated by `ServiceKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "ServiceKind")]
pub enum DeployedReplicaDetailKind {
    /// Stateful replica.
    Stateful {
        /// Replica id.
        #[serde(rename = "ReplicaId", default, skip_serializing_if = "Option::is_none")]
        replica_id: Option<String>,
        /// Replicator call in progress.
        #[serde(
            rename = "CurrentReplicatorOperation",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        current_replicator_operation: Option<ReplicatorOperationName>,
        /// Read access.
        #[serde(rename = "ReadStatus", default, skip_serializing_if = "Option::is_none")]
        read_status: Option<PartitionAccessStatus>,
        /// Write access.
        #[serde(rename = "WriteStatus", default, skip_serializing_if = "Option::is_none")]
        write_status: Option<PartitionAccessStatus>,
        /// Replicator queue status, kept as raw JSON.
        #[serde(rename = "ReplicatorStatus", default, skip_serializing_if = "Option::is_none")]
        replicator_status: Option<serde_json::Value>,
        /// Key/value store status, kept as raw JSON.
        #[serde(rename = "ReplicaStatus", default, skip_serializing_if = "Option::is_none")]
        replica_status: Option<serde_json::Value>,
    },
    /// Stateless instance.
    Stateless {
        /// Instance id.
        #[serde(rename = "InstanceId", default, skip_serializing_if = "Option::is_none")]
        instance_id: Option<String>,
    },
    /// Service kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<DeployedReplicaDetailKind>),
}

tagged_union!(DeployedReplicaDetailKind, "ServiceKind", ["Stateful", "Stateless"]);

/// A service type registered on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedServiceTypeInfo {
    /// Service type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_name: Option<String>,
    /// Service manifest name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_manifest_name: Option<String>,
    /// Registering code package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_package_name: Option<String>,
    /// Registration status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceTypeRegistrationStatus>,
    /// Activation id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_package_activation_id: Option<String>,
}

/// Body of `restart_deployed_code_package`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RestartDeployedCodePackageDescription {
    /// Service manifest name.
    pub service_manifest_name: String,
    /// Activation id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_package_activation_id: Option<String>,
    /// Code package name.
    pub code_package_name: String,
    /// Instance to restart; `"0"` restarts whatever is running.
    pub code_package_instance_id: String,
}

impl RestartDeployedCodePackageDescription {
    /// Restarts the running instance of `code_package` in `manifest`.
    pub fn current(manifest: impl Into<String>, code_package: impl Into<String>) -> Self {
        RestartDeployedCodePackageDescription {
            service_manifest_name: manifest.into(),
            service_package_activation_id: None,
            code_package_name: code_package.into(),
            code_package_instance_id: "0".to_string(),
        }
    }
}

/// A package shared between service packages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PackageSharingPolicyInfo {
    /// Package name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_package_name: Option<String>,
    /// Scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_sharing_scope: Option<PackageSharingScope>,
}

/// Body of `deploy_service_package_to_node`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DeployServicePackageToNodeDescription {
    /// Service manifest name.
    pub service_manifest_name: String,
    /// Application type name.
    pub application_type_name: String,
    /// Application type version.
    pub application_type_version: String,
    /// Target node.
    pub node_name: String,
    /// Sharing policies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub package_sharing_policy: Vec<PackageSharingPolicyInfo>,
}

/// Container log text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerLogs {
    /// Log content.
    #[serde(default)]
    pub content: String,
}

/// Body of `invoke_container_api`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerApiRequestBody {
    /// HTTP verb; GET when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_verb: Option<String>,
    /// Container API path, e.g. `/containers/{id}/logs`.
    pub uri_path: String,
    /// Content type of `body`.
    #[serde(rename = "Content-Type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Result of a container API call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerApiResult {
    /// HTTP status returned by the container runtime.
    pub status: i32,
    /// Content type.
    #[serde(rename = "Content-Type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Content encoding.
    #[serde(rename = "Content-Encoding", default, skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<String>,
    /// Response body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Response of `invoke_container_api`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerApiResponse {
    /// Result.
    pub container_api_result: ContainerApiResult,
}

optional_params! {
    /// Optional parameters of `get_deployed_application_info_list`.
    pub struct GetDeployedApplicationInfoListOptionalParams {
        /// Include health state.
        include_health_state: bool => "IncludeHealthState",
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
        /// Page size.
        max_results: i64 => "MaxResults",
    }

    /// Optional parameters of `get_deployed_application_info`.
    pub struct GetDeployedApplicationInfoOptionalParams {
        /// Include health state.
        include_health_state: bool => "IncludeHealthState",
    }

    /// Optional parameters of `get_deployed_application_health`.
    pub struct GetDeployedApplicationHealthOptionalParams {
        /// Events to include.
        events_health_state_filter: HealthStateFilter => "EventsHealthStateFilter",
        /// Service packages to include.
        deployed_service_packages_health_state_filter: HealthStateFilter =>
            "DeployedServicePackagesHealthStateFilter",
        /// Leave out health statistics.
        exclude_health_statistics: bool => "ExcludeHealthStatistics",
    }

    /// Optional parameters of `report_deployed_application_health`
    /// and `report_deployed_service_package_health`.
    pub struct ReportDeployedApplicationHealthOptionalParams {
        /// Send the report immediately.
        immediate: bool => "Immediate",
    }

    /// Optional parameters of `get_deployed_service_package_health`.
    pub struct GetDeployedServicePackageHealthOptionalParams {
        /// Events to include.
        events_health_state_filter: HealthStateFilter => "EventsHealthStateFilter",
    }

    /// Optional parameters of `get_deployed_code_package_info_list`.
    pub struct GetDeployedCodePackageInfoListOptionalParams {
        /// Only this service manifest.
        service_manifest_name: String => "ServiceManifestName",
        /// Only this code package.
        code_package_name: String => "CodePackageName",
    }

    /// Optional parameters of `get_container_logs_deployed_on_node`.
    pub struct GetContainerLogsDeployedOnNodeOptionalParams {
        /// Number of lines from the end, or `all`.
        tail: String => "Tail",
        /// Logs of the previous container instance.
        previous: bool => "Previous",
    }

    /// Optional parameters of `get_deployed_service_replica_info_list`.
    pub struct GetDeployedServiceReplicaInfoListOptionalParams {
        /// Only this partition.
        partition_id: Uuid => "PartitionId",
        /// Only this service manifest.
        service_manifest_name: String => "ServiceManifestName",
    }

    /// Optional parameters of the deployed service type queries.
    pub struct GetDeployedServiceTypeInfoListOptionalParams {
        /// Only this service manifest.
        service_manifest_name: String => "ServiceManifestName",
    }

    /// Optional parameters of `remove_replica`.
    pub struct RemoveReplicaOptionalParams {
        /// Remove without waiting for graceful shutdown.
        force_remove: bool => "ForceRemove",
    }
}

/// Optional parameters of `report_deployed_service_package_health`.
pub type ReportDeployedServicePackageHealthOptionalParams =
    ReportDeployedApplicationHealthOptionalParams;
/// Optional parameters of `get_deployed_application_health_using_policy`.
pub type GetDeployedApplicationHealthUsingPolicyOptionalParams =
    GetDeployedApplicationHealthOptionalParams;
/// Optional parameters of `get_deployed_service_package_health_using_policy`.
pub type GetDeployedServicePackageHealthUsingPolicyOptionalParams =
    GetDeployedServicePackageHealthOptionalParams;
/// Optional parameters of `get_deployed_service_type_info_by_name`.
pub type GetDeployedServiceTypeInfoByNameOptionalParams = GetDeployedServiceTypeInfoListOptionalParams;
/// Optional parameters of `get_deployed_service_package_info_list`.
pub type GetDeployedServicePackageInfoListOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_deployed_service_package_info_list_by_name`.
pub type GetDeployedServicePackageInfoListByNameOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `restart_deployed_code_package`.
pub type RestartDeployedCodePackageOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `invoke_container_api`.
pub type InvokeContainerApiOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_deployed_service_replica_detail_info`.
pub type GetDeployedServiceReplicaDetailInfoOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_deployed_service_replica_detail_info_by_partition_id`.
pub type GetDeployedServiceReplicaDetailInfoByPartitionIdOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `restart_replica`.
pub type RestartReplicaOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `deploy_service_package_to_node`.
pub type DeployServicePackageToNodeOptionalParams = TimeoutOptionalParams;

/// Response of `get_deployed_application_info_list`.
pub type GetDeployedApplicationInfoListResponse = PagedDeployedApplicationInfoList;
/// Response of `get_deployed_application_info`.
pub type GetDeployedApplicationInfoResponse = DeployedApplicationInfo;
/// Response of `get_deployed_application_health`.
pub type GetDeployedApplicationHealthResponse = DeployedApplicationHealth;
/// Response of `get_deployed_service_package_info_list`.
pub type GetDeployedServicePackageInfoListResponse = Vec<DeployedServicePackageInfo>;
/// Response of `get_deployed_service_package_info_list_by_name`.
pub type GetDeployedServicePackageInfoListByNameResponse = Vec<DeployedServicePackageInfo>;
/// Response of `get_deployed_service_package_health`.
pub type GetDeployedServicePackageHealthResponse = DeployedServicePackageHealth;
/// Response of `get_deployed_code_package_info_list`.
pub type GetDeployedCodePackageInfoListResponse = Vec<DeployedCodePackageInfo>;
/// Response of `get_container_logs_deployed_on_node`.
pub type GetContainerLogsDeployedOnNodeResponse = ContainerLogs;
/// Response of `invoke_container_api`.
pub type InvokeContainerApiResponse = ContainerApiResponse;
/// Response of `get_deployed_service_replica_info_list`.
pub type GetDeployedServiceReplicaInfoListResponse = Vec<DeployedServiceReplicaInfo>;
/// Response of `get_deployed_service_replica_detail_info`.
pub type GetDeployedServiceReplicaDetailInfoResponse = DeployedServiceReplicaDetailInfo;
/// Response of `get_deployed_service_replica_detail_info_by_partition_id`.
pub type GetDeployedServiceReplicaDetailInfoByPartitionIdResponse =
    DeployedServiceReplicaDetailInfo;
/// Response of `get_deployed_service_type_info_list`.
pub type GetDeployedServiceTypeInfoListResponse = Vec<DeployedServiceTypeInfo>;
/// Response of `get_deployed_service_type_info_by_name`.
pub type GetDeployedServiceTypeInfoByNameResponse = Vec<DeployedServiceTypeInfo>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deployed_replicas_decode_by_kind() {
        let replicas: GetDeployedServiceReplicaInfoListResponse = serde_json::from_value(json!([
            {
                "ServiceKind": "Stateful",
                "ServiceName": "fabric:/app/svc",
                "PartitionId": "4a1a5ed9-ee8f-4a1c-b1ff-0f4a8f4f0d6e",
                "ReplicaId": "1",
                "ReplicaRole": "Primary",
                "ReplicaStatus": "Ready",
                "ReconfigurationInformation": {"PreviousConfigurationRole": "None"}
            },
            {"ServiceKind": "Stateless", "InstanceId": "9", "HostProcessId": "4242"}
        ]))
        .expect("decode");

        assert!(matches!(
            &replicas[0].kind,
            DeployedReplicaKind::Stateful {
                replica_role: Some(ReplicaRole::Primary),
                ..
            }
        ));
        assert_eq!(replicas[1].host_process_id.as_deref(), Some("4242"));
    }

    #[test]
    fn replica_detail_keeps_replicator_status_raw() {
        let detail: DeployedServiceReplicaDetailInfo = serde_json::from_value(json!({
            "ServiceKind": "Stateful",
            "CurrentServiceOperation": "None",
            "ReadStatus": "Granted",
            "WriteStatus": "NoWriteQuorum",
            "ReplicatorStatus": {"Kind": "Primary", "ReplicationQueueStatus": {}},
            "ReportedLoad": [{"Name": "Count", "Value": 3}]
        }))
        .expect("decode");
        let DeployedReplicaDetailKind::Stateful {
            write_status,
            replicator_status,
            ..
        } = detail.kind
        else {
            panic!("expected stateful detail");
        };
        assert_eq!(write_status, Some(PartitionAccessStatus::NoWriteQuorum));
        assert_eq!(replicator_status.expect("status")["Kind"], "Primary");
        assert_eq!(detail.reported_load[0].value, Some(3));
    }

    #[test]
    fn container_api_body_uses_header_style_names() {
        let body = ContainerApiRequestBody {
            http_verb: Some("POST".into()),
            uri_path: "/containers/{id}/update".into(),
            content_type: Some("application/json".into()),
            body: Some("{}".into()),
        };
        assert_eq!(
            serde_json::to_value(&body).expect("encode"),
            json!({
                "HttpVerb": "POST",
                "UriPath": "/containers/{id}/update",
                "Content-Type": "application/json",
                "Body": "{}"
            })
        );
    }

    #[test]
    fn restart_current_code_package_uses_zero_instance() {
        let description = RestartDeployedCodePackageDescription::current("Pkg", "Code");
        assert_eq!(
            serde_json::to_value(&description).expect("encode"),
            json!({
                "ServiceManifestName": "Pkg",
                "CodePackageName": "Code",
                "CodePackageInstanceId": "0"
            })
        );
    }
}
