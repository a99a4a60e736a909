//! Mesh resources (secrets, volumes, networks, gateways, applications,
//! services and replicas). Unlike the rest of the API these use camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::health::HealthState;
use super::known::{UnknownVariant, open_enum, tagged_union};
use super::paging::PagedList;
use super::params::optional_params;

open_enum! {
    /// Provisioning status of a mesh resource.
    pub enum ResourceStatus {
        /// Unknown.
        Unknown = "Unknown",
        /// Ready.
        Ready = "Ready",
        /// Upgrading.
        Upgrading = "Upgrading",
        /// Creating.
        Creating = "Creating",
        /// Deleting.
        Deleting = "Deleting",
        /// Failed.
        Failed = "Failed",
    }
}

open_enum! {
    /// Operating system of a mesh service.
    pub enum OperatingSystemType {
        /// Linux.
        Linux = "Linux",
        /// Windows.
        Windows = "Windows",
    }
}

open_enum! {
    /// Upgrade state of a mesh application.
    pub enum ApplicationResourceUpgradeState {
        /// Invalid.
        Invalid = "Invalid",
        /// Provisioning the target.
        ProvisioningTarget = "ProvisioningTarget",
        /// Rolling forward.
        RollingForward = "RollingForward",
        /// Unprovisioning the current version.
        UnprovisioningCurrent = "UnprovisioningCurrent",
        /// Completed rolling forward.
        CompletedRollforward = "CompletedRollforward",
        /// Rolling back.
        RollingBack = "RollingBack",
        /// Unprovisioning the target.
        UnprovisioningTarget = "UnprovisioningTarget",
        /// Completed rolling back.
        CompletedRollback = "CompletedRollback",
        /// Failed.
        Failed = "Failed",
    }
}

/// Kind-specific part of a secret, discriminated by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum SecretKind {
    /// Values are stored inline by the cluster.
    #[serde(rename = "inlinedValue")]
    InlinedValue,
    /// Values reference versioned Key Vault secrets.
    #[serde(rename = "keyVaultVersionedReference")]
    KeyVaultVersionedReference,
    /// Secret kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<SecretKind>),
}

tagged_union!(SecretKind, "kind", ["inlinedValue", "keyVaultVersionedReference"]);

/// Properties of a secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretResourceProperties {
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    /// Status details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    /// Content type of the values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Storage kind.
    #[serde(flatten)]
    pub kind: SecretKind,
}

/// A secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretResourceDescription {
    /// Secret name.
    pub name: String,
    /// Properties.
    pub properties: SecretResourceProperties,
}

/// Page of secrets.
pub type PagedSecretResourceDescriptionList = PagedList<SecretResourceDescription>;

/// Properties of a secret value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SecretValueProperties {
    /// Value; only sent on create and returned by `list_value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A version of a secret's value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretValueResourceDescription {
    /// Version name.
    pub name: String,
    /// Properties.
    #[serde(default)]
    pub properties: SecretValueProperties,
}

/// Page of secret values.
pub type PagedSecretValueResourceDescriptionList = PagedList<SecretValueResourceDescription>;

/// Plain-text secret value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SecretValue {
    /// Value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Azure Files share backing a volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeProviderParametersAzureFile {
    /// Storage account.
    pub account_name: String,
    /// Account key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_key: Option<String>,
    /// Share name.
    pub share_name: String,
}

/// Properties of a volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeProperties {
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    /// Status details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    /// Provider; `SFAzureFile` is the only documented one.
    pub provider: String,
    /// Azure Files parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_file_parameters: Option<VolumeProviderParametersAzureFile>,
}

/// A volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeResourceDescription {
    /// Volume name.
    pub name: String,
    /// Properties.
    pub properties: VolumeProperties,
}

/// Page of volumes.
pub type PagedVolumeResourceDescriptionList = PagedList<VolumeResourceDescription>;

/// Properties of a network, discriminated by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum NetworkResourceProperties {
    /// Network local to the cluster.
    Local {
        /// Description.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        /// Status.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<ResourceStatus>,
        /// Status details.
        #[serde(rename = "statusDetails", default, skip_serializing_if = "Option::is_none")]
        status_details: Option<String>,
        /// Address prefix, e.g. `10.0.0.0/22`.
        #[serde(rename = "networkAddressPrefix", default, skip_serializing_if = "Option::is_none")]
        network_address_prefix: Option<String>,
    },
    /// Network kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<NetworkResourceProperties>),
}

tagged_union!(NetworkResourceProperties, "kind", ["Local"]);

/// A network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResourceDescription {
    /// Network name.
    pub name: String,
    /// Properties.
    pub properties: NetworkResourceProperties,
}

/// Page of networks.
pub type PagedNetworkResourceDescriptionList = PagedList<NetworkResourceDescription>;

/// Endpoint of a code package joined to a network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EndpointRef {
    /// Endpoint name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Reference to a network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRef {
    /// Network name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Endpoints joined to it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoint_refs: Vec<EndpointRef>,
}

/// Target of gateway traffic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayDestination {
    /// Application name.
    pub application_name: String,
    /// Service name.
    pub service_name: String,
    /// Endpoint name.
    pub endpoint_name: String,
}

/// TCP listener of a gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TcpConfig {
    /// Listener name.
    pub name: String,
    /// Port.
    pub port: u16,
    /// Destination.
    pub destination: GatewayDestination,
}

/// Path match of an HTTP route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpRouteMatchPath {
    /// Path prefix.
    pub value: String,
    /// Replacement prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<String>,
    /// Match type; `prefix` is the only documented one.
    #[serde(rename = "type")]
    pub match_type: String,
}

/// Header match of an HTTP route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpRouteMatchHeader {
    /// Header name.
    pub name: String,
    /// Header value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Match type; `exact` is the only documented one.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
}

/// Match rule of an HTTP route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpRouteMatchRule {
    /// Path match.
    pub path: HttpRouteMatchPath,
    /// Header matches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<HttpRouteMatchHeader>,
}

/// An HTTP route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpRouteConfig {
    /// Route name.
    pub name: String,
    /// Match rule.
    #[serde(rename = "match")]
    pub match_rule: HttpRouteMatchRule,
    /// Destination.
    pub destination: GatewayDestination,
}

/// Routes for one host name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpHostConfig {
    /// Host name.
    pub name: String,
    /// Routes, evaluated in order.
    #[serde(default)]
    pub routes: Vec<HttpRouteConfig>,
}

/// HTTP listener of a gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    /// Listener name.
    pub name: String,
    /// Port.
    pub port: u16,
    /// Hosts.
    #[serde(default)]
    pub hosts: Vec<HttpHostConfig>,
}

/// Properties of a gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayProperties {
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Network traffic enters from.
    pub source_network: NetworkRef,
    /// Network traffic is forwarded to.
    pub destination_network: NetworkRef,
    /// TCP listeners.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tcp: Vec<TcpConfig>,
    /// HTTP listeners.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http: Vec<HttpConfig>,
    /// Status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    /// Status details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    /// Public address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

/// A gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResourceDescription {
    /// Gateway name.
    pub name: String,
    /// Properties.
    pub properties: GatewayProperties,
}

/// Page of gateways.
pub type PagedGatewayResourceDescriptionList = PagedList<GatewayResourceDescription>;

/// Environment variable of a container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariable {
    /// Name.
    pub name: String,
    /// Value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Endpoint exposed by a container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EndpointProperties {
    /// Endpoint name.
    pub name: String,
    /// Port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// CPU and memory amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAmounts {
    /// Memory in GB.
    #[serde(rename = "memoryInGB")]
    pub memory_in_gb: f64,
    /// CPU cores.
    pub cpu: f64,
}

/// Requested and maximum resources of a container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequirements {
    /// Requested.
    pub requests: ResourceAmounts,
    /// Limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceAmounts>,
}

/// Registry credentials for a container image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRegistryCredential {
    /// Registry server.
    pub server: String,
    /// User name.
    pub username: String,
    /// Password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Volume mounted into a container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeReference {
    /// Volume name.
    pub name: String,
    /// Mount is read only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Mount path.
    pub destination_path: String,
}

/// A container of a mesh service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerCodePackageProperties {
    /// Code package name.
    pub name: String,
    /// Image.
    pub image: String,
    /// Registry credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_registry_credential: Option<ImageRegistryCredential>,
    /// Entry point override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
    /// Command override.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,
    /// Environment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment_variables: Vec<EnvironmentVariable>,
    /// Endpoints.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<EndpointProperties>,
    /// Resources.
    pub resources: ResourceRequirements,
    /// Volumes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volume_refs: Vec<VolumeReference>,
    /// Runtime view of the container, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_view: Option<serde_json::Value>,
}

/// Properties of a mesh service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResourceProperties {
    /// Operating system.
    pub os_type: OperatingSystemType,
    /// Containers.
    #[serde(default)]
    pub code_packages: Vec<ContainerCodePackageProperties>,
    /// Networks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_refs: Vec<NetworkRef>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replica count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_count: Option<i32>,
    /// Auto scaling policies, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auto_scaling_policies: Vec<serde_json::Value>,
    /// Status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    /// Status details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    /// Aggregated health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_state: Option<HealthState>,
    /// Why the service is unhealthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unhealthy_evaluation: Option<String>,
    /// DNS name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
}

/// A mesh service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResourceDescription {
    /// Service name.
    pub name: String,
    /// Properties.
    pub properties: ServiceResourceProperties,
}

/// Page of mesh services.
pub type PagedServiceResourceDescriptionList = PagedList<ServiceResourceDescription>;

/// A replica of a mesh service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReplicaDescription {
    /// Replica name.
    pub replica_name: String,
    /// Operating system.
    pub os_type: OperatingSystemType,
    /// Containers.
    #[serde(default)]
    pub code_packages: Vec<ContainerCodePackageProperties>,
    /// Networks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_refs: Vec<NetworkRef>,
}

/// Page of mesh service replicas.
pub type PagedServiceReplicaDescriptionList = PagedList<ServiceReplicaDescription>;

/// Properties of a mesh application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResourceProperties {
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Services, sent on create.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceResourceDescription>,
    /// Diagnostics settings, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<serde_json::Value>,
    /// Debug parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_params: Option<String>,
    /// Service names, returned on read.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_names: Vec<String>,
    /// Status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    /// Status details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    /// Aggregated health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_state: Option<HealthState>,
    /// Why the application is unhealthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unhealthy_evaluation: Option<String>,
}

/// A mesh application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResourceDescription {
    /// Application name.
    pub name: String,
    /// Properties.
    #[serde(default)]
    pub properties: ApplicationResourceProperties,
    /// Managed identity, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<serde_json::Value>,
}

/// Page of mesh applications.
pub type PagedApplicationResourceDescriptionList = PagedList<ApplicationResourceDescription>;

/// Upgrade progress of one mesh service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUpgradeProgress {
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Replicas still to upgrade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_replica_count: Option<String>,
    /// Replicas upgraded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_replica_count: Option<String>,
}

/// Upgrade progress of a mesh application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResourceUpgradeProgressInfo {
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Target version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_application_type_version: Option<String>,
    /// Upgrade start.
    #[serde(rename = "startTimestampUTC", default, skip_serializing_if = "Option::is_none")]
    pub start_timestamp_utc: Option<DateTime<Utc>>,
    /// State.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_state: Option<ApplicationResourceUpgradeState>,
    /// Completion percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_completed: Option<String>,
    /// Per-service progress.
    #[serde(default)]
    pub service_upgrade_progress: Vec<ServiceUpgradeProgress>,
    /// Rolling mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_upgrade_mode: Option<String>,
    /// Elapsed time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_duration: Option<String>,
    /// Status details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_upgrade_status_details: Option<String>,
    /// Replica set check timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_replica_set_check_timeout_in_seconds: Option<i64>,
    /// Failure time.
    #[serde(rename = "failureTimestampUTC", default, skip_serializing_if = "Option::is_none")]
    pub failure_timestamp_utc: Option<DateTime<Utc>>,
}

optional_params! {
    /// Optional parameters of `get_mesh_code_package_container_logs`.
    pub struct GetMeshCodePackageContainerLogsOptionalParams {
        /// Number of lines from the end.
        tail: i32 => "Tail",
    }
}

/// Optional parameters of mesh operations that take no query options.
pub type MeshOptionalParams = super::params::TimeoutOptionalParams;

/// Response of `get_mesh_secret`.
pub type GetMeshSecretResponse = SecretResourceDescription;
/// Response of `list_mesh_secrets`.
pub type ListMeshSecretsResponse = PagedSecretResourceDescriptionList;
/// Response of `get_mesh_secret_value`.
pub type GetMeshSecretValueResponse = SecretValueResourceDescription;
/// Response of `list_mesh_secret_values`.
pub type ListMeshSecretValuesResponse = PagedSecretValueResourceDescriptionList;
/// Response of `show_mesh_secret_value`.
pub type ShowMeshSecretValueResponse = SecretValue;
/// Response of `get_mesh_volume`.
pub type GetMeshVolumeResponse = VolumeResourceDescription;
/// Response of `list_mesh_volumes`.
pub type ListMeshVolumesResponse = PagedVolumeResourceDescriptionList;
/// Response of `get_mesh_network`.
pub type GetMeshNetworkResponse = NetworkResourceDescription;
/// Response of `list_mesh_networks`.
pub type ListMeshNetworksResponse = PagedNetworkResourceDescriptionList;
/// Response of `get_mesh_gateway`.
pub type GetMeshGatewayResponse = GatewayResourceDescription;
/// Response of `list_mesh_gateways`.
pub type ListMeshGatewaysResponse = PagedGatewayResourceDescriptionList;
/// Response of `get_mesh_application`.
pub type GetMeshApplicationResponse = ApplicationResourceDescription;
/// Response of `list_mesh_applications`.
pub type ListMeshApplicationsResponse = PagedApplicationResourceDescriptionList;
/// Response of `get_mesh_application_upgrade_progress`.
pub type GetMeshApplicationUpgradeProgressResponse = ApplicationResourceUpgradeProgressInfo;
/// Response of `get_mesh_service`.
pub type GetMeshServiceResponse = ServiceResourceDescription;
/// Response of `list_mesh_services`.
pub type ListMeshServicesResponse = PagedServiceResourceDescriptionList;
/// Response of `get_mesh_service_replica`.
pub type GetMeshServiceReplicaResponse = ServiceReplicaDescription;
/// Response of `list_mesh_service_replicas`.
pub type ListMeshServiceReplicasResponse = PagedServiceReplicaDescriptionList;
/// Response of `get_mesh_code_package_container_logs`.
pub type GetMeshCodePackageContainerLogsResponse = super::deployed::ContainerLogs;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn secret_uses_camel_case_and_kind_tag() {
        let secret = SecretResourceDescription {
            name: "dbpass".into(),
            properties: SecretResourceProperties {
                description: None,
                status: None,
                status_details: None,
                content_type: Some("text/plain".into()),
                kind: SecretKind::InlinedValue,
            },
        };
        assert_eq!(
            serde_json::to_value(&secret).expect("encode"),
            json!({
                "name": "dbpass",
                "properties": {"kind": "inlinedValue", "contentType": "text/plain"}
            })
        );
    }

    #[test]
    fn secret_page_uses_pascal_case_envelope() {
        let page: PagedSecretResourceDescriptionList = serde_json::from_value(json!({
            "ContinuationToken": "next",
            "Items": [{"name": "s", "properties": {"kind": "keyVaultVersionedReference", "status": "Ready"}}]
        }))
        .expect("decode");
        assert_eq!(page.next_token(), Some("next"));
        assert_eq!(page.items[0].properties.kind, SecretKind::KeyVaultVersionedReference);
        assert_eq!(page.items[0].properties.status, Some(ResourceStatus::Ready));
    }

    #[test]
    fn gateway_routes_decode() {
        let gateway: GatewayResourceDescription = serde_json::from_value(json!({
            "name": "gw",
            "properties": {
                "sourceNetwork": {"name": "Open"},
                "destinationNetwork": {"name": "appNet"},
                "http": [{
                    "name": "web",
                    "port": 80,
                    "hosts": [{
                        "name": "contoso.com",
                        "routes": [{
                            "name": "index",
                            "match": {"path": {"value": "/index", "rewrite": "/", "type": "prefix"}},
                            "destination": {"applicationName": "app", "serviceName": "web", "endpointName": "ep"}
                        }]
                    }]
                }],
                "ipAddress": "10.0.0.4"
            }
        }))
        .expect("decode");
        let route = &gateway.properties.http[0].hosts[0].routes[0];
        assert_eq!(route.match_rule.path.match_type, "prefix");
        assert_eq!(route.destination.service_name, "web");
        assert!(gateway.properties.tcp.is_empty());
    }

    #[test]
    fn local_network_and_unknown_kind() {
        let network: NetworkResourceDescription = serde_json::from_value(json!({
            "name": "appNet",
            "properties": {"kind": "Local", "networkAddressPrefix": "10.0.0.0/22"}
        }))
        .expect("decode");
        assert!(matches!(
            network.properties,
            NetworkResourceProperties::Local { network_address_prefix: Some(ref prefix), .. } if prefix == "10.0.0.0/22"
        ));

        let other: NetworkResourceDescription = serde_json::from_value(json!({
            "name": "x",
            "properties": {"kind": "Overlay"}
        }))
        .expect("decode");
        assert!(matches!(
            &other.properties,
            NetworkResourceProperties::Unrecognized(unknown) if unknown.tag() == "Overlay"
        ));
        assert_eq!(
            serde_json::to_value(&other).expect("encode"),
            json!({"name": "x", "properties": {"kind": "Overlay"}})
        );
    }
}
