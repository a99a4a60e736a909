//! Application types: provisioning, manifests and service types.

use serde::{Deserialize, Serialize};

use super::filter::ApplicationTypeDefinitionKindFilter;
use super::known::{UnknownVariant, open_enum, tagged_union};
use super::paging::PagedList;
use super::params::{TimeoutOptionalParams, optional_params};
use super::service::{ServiceLoadMetricDescription, ServicePlacementPolicyDescription};

open_enum! {
    /// How an application type was defined.
    pub enum ApplicationTypeDefinitionKind {
        /// Invalid.
        Invalid = "Invalid",
        /// Service Fabric application package.
        ServiceFabricApplicationPackage = "ServiceFabricApplicationPackage",
        /// Compose file.
        Compose = "Compose",
        /// Mesh application description.
        MeshApplicationDescription = "MeshApplicationDescription",
    }
}

open_enum! {
    /// Provisioning status of an application type.
    pub enum ApplicationTypeStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Being provisioned.
        Provisioning = "Provisioning",
        /// Ready to create applications.
        Available = "Available",
        /// Being unprovisioned.
        Unprovisioning = "Unprovisioning",
        /// Provisioning failed.
        Failed = "Failed",
    }
}

open_enum! {
    /// What happens to the uploaded package after provisioning.
    pub enum ApplicationPackageCleanupPolicy {
        /// Invalid.
        Invalid = "Invalid",
        /// Follow the cluster setting.
        Default = "Default",
        /// Delete the package after provisioning.
        Automatic = "Automatic",
        /// Keep the package.
        Manual = "Manual",
    }
}

/// Name/value pair of an application parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationParameter {
    /// Parameter name.
    pub key: String,
    /// Parameter value.
    pub value: String,
}

/// A provisioned application type version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationTypeInfo {
    /// Type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Type version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Default application parameters.
    #[serde(default)]
    pub default_parameter_list: Vec<ApplicationParameter>,
    /// Provisioning status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationTypeStatus>,
    /// Details for the current status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    /// How the type was defined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_type_definition_kind: Option<ApplicationTypeDefinitionKind>,
}

/// Page of application types.
pub type PagedApplicationTypeInfoList = PagedList<ApplicationTypeInfo>;

/// Request to provision an application type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionApplicationTypeDescription {
    /// Return before provisioning finishes.
    #[serde(rename = "Async")]
    pub is_async: bool,
    /// Package source.
    #[serde(flatten)]
    pub kind: ProvisionApplicationTypeKind,
}

/// Package source of a provision request, discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "Kind")]
pub enum ProvisionApplicationTypeKind {
    /// Package already copied to the image store.
    ImageStorePath {
        /// Relative image store path of the package.
        #[serde(rename = "ApplicationTypeBuildPath")]
        application_type_build_path: String,
        /// Cleanup after provisioning.
        #[serde(
            rename = "ApplicationPackageCleanupPolicy",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        application_package_cleanup_policy: Option<ApplicationPackageCleanupPolicy>,
    },
    /// Package downloaded from an external store.
    ExternalStore {
        /// `.sfpkg` download URI.
        #[serde(rename = "ApplicationPackageDownloadUri")]
        application_package_download_uri: String,
        /// Type name in the package manifest.
        #[serde(rename = "ApplicationTypeName")]
        application_type_name: String,
        /// Type version in the package manifest.
        #[serde(rename = "ApplicationTypeVersion")]
        application_type_version: String,
    },
    /// Provision kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<ProvisionApplicationTypeKind>),
}

tagged_union!(ProvisionApplicationTypeKind, "Kind", ["ImageStorePath", "ExternalStore"]);

/// Request to unprovision an application type version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UnprovisionApplicationTypeDescriptionInfo {
    /// Version to unprovision.
    pub application_type_version: String,
    /// Return before unprovisioning finishes.
    #[serde(rename = "Async", default, skip_serializing_if = "Option::is_none")]
    pub is_async: Option<bool>,
}

/// Application manifest XML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationTypeManifest {
    /// Manifest contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
}

/// Service manifest XML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceTypeManifest {
    /// Manifest contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
}

/// Key/value extension declared on a service type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceTypeExtensionDescription {
    /// Extension name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Extension value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Service type declared in a service manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceTypeDescription {
    /// Whether the type is stateful.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stateful: Option<bool>,
    /// Type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_name: Option<String>,
    /// Placement constraint expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_constraints: Option<String>,
    /// Load metrics.
    #[serde(default)]
    pub load_metrics: Vec<ServiceLoadMetricDescription>,
    /// Placement policies.
    #[serde(default)]
    pub service_placement_policies: Vec<ServicePlacementPolicyDescription>,
    /// Extensions.
    #[serde(default)]
    pub extensions: Vec<ServiceTypeExtensionDescription>,
    /// Stateful or stateless fields.
    #[serde(flatten)]
    pub kind: ServiceTypeKind,
}

/// Kind-specific part of a service type, discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "Kind")]
pub enum ServiceTypeKind {
    /// Stateful service type.
    Stateful {
        /// Whether replicas persist state to disk.
        #[serde(rename = "HasPersistedState", default)]
        has_persisted_state: bool,
    },
    /// Stateless service type.
    Stateless {
        /// Whether the type uses an implicit host.
        #[serde(rename = "UseImplicitHost", default)]
        use_implicit_host: bool,
    },
    /// Service type kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<ServiceTypeKind>),
}

tagged_union!(ServiceTypeKind, "Kind", ["Stateful", "Stateless"]);

/// A service type together with its manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceTypeInfo {
    /// Type description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_description: Option<ServiceTypeDescription>,
    /// Declaring service manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_manifest_name: Option<String>,
    /// Manifest version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_manifest_version: Option<String>,
    /// Whether the type is a service group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_service_group: Option<bool>,
}

optional_params! {
    /// Optional parameters of `get_application_type_info_list`.
    pub struct GetApplicationTypeInfoListOptionalParams {
        /// Definition kinds to include.
        application_type_definition_kind_filter: ApplicationTypeDefinitionKindFilter =>
            "ApplicationTypeDefinitionKindFilter",
        /// Leave out default parameters.
        exclude_application_parameters: bool => "ExcludeApplicationParameters",
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
        /// Page size.
        max_results: i64 => "MaxResults",
    }

    /// Optional parameters of `get_application_type_info_list_by_name`.
    pub struct GetApplicationTypeInfoListByNameOptionalParams {
        /// Only this version.
        application_type_version: String => "ApplicationTypeVersion",
        /// Leave out default parameters.
        exclude_application_parameters: bool => "ExcludeApplicationParameters",
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
        /// Page size.
        max_results: i64 => "MaxResults",
    }
}

/// Optional parameters of `provision_application_type`.
pub type ProvisionApplicationTypeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `unprovision_application_type`.
pub type UnprovisionApplicationTypeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_service_type_info_list`.
pub type GetServiceTypeInfoListOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_service_type_info_by_name`.
pub type GetServiceTypeInfoByNameOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_service_manifest`.
pub type GetServiceManifestOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_application_manifest`.
pub type GetApplicationManifestOptionalParams = TimeoutOptionalParams;

/// Response of `get_application_type_info_list`.
pub type GetApplicationTypeInfoListResponse = PagedApplicationTypeInfoList;
/// Response of `get_application_type_info_list_by_name`.
pub type GetApplicationTypeInfoListByNameResponse = PagedApplicationTypeInfoList;
/// Response of `get_service_type_info_list`.
pub type GetServiceTypeInfoListResponse = Vec<ServiceTypeInfo>;
/// Response of `get_service_type_info_by_name`.
pub type GetServiceTypeInfoByNameResponse = ServiceTypeInfo;
/// Response of `get_service_manifest`.
pub type GetServiceManifestResponse = ServiceTypeManifest;
/// Response of `get_application_manifest`.
pub type GetApplicationManifestResponse = ApplicationTypeManifest;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provision_descriptions_carry_kind() {
        let image_store = ProvisionApplicationTypeDescription {
            is_async: true,
            kind: ProvisionApplicationTypeKind::ImageStorePath {
                application_type_build_path: "MyAppPkg".into(),
                application_package_cleanup_policy: None,
            },
        };
        assert_eq!(
            serde_json::to_value(&image_store).expect("encode"),
            json!({"Kind": "ImageStorePath", "Async": true, "ApplicationTypeBuildPath": "MyAppPkg"})
        );

        let external: ProvisionApplicationTypeDescription = serde_json::from_value(json!({
            "Kind": "ExternalStore",
            "Async": false,
            "ApplicationPackageDownloadUri": "https://example.invalid/app.sfpkg",
            "ApplicationTypeName": "MyAppType",
            "ApplicationTypeVersion": "1.0"
        }))
        .expect("decode");
        assert!(matches!(
            external.kind,
            ProvisionApplicationTypeKind::ExternalStore { .. }
        ));
    }

    #[test]
    fn service_type_description_is_discriminated() {
        let info: ServiceTypeInfo = serde_json::from_value(json!({
            "ServiceTypeDescription": {
                "Kind": "Stateful",
                "IsStateful": true,
                "ServiceTypeName": "ActorServiceType",
                "HasPersistedState": true,
                "LoadMetrics": [],
                "ServicePlacementPolicies": [],
                "Extensions": []
            },
            "ServiceManifestName": "ActorPkg",
            "ServiceManifestVersion": "1.0.0",
            "IsServiceGroup": false
        }))
        .expect("decode");
        let description = info.service_type_description.expect("description");
        assert_eq!(
            description.kind,
            ServiceTypeKind::Stateful {
                has_persisted_state: true
            }
        );
    }

    #[test]
    fn minimal_application_type_decodes() {
        let info: ApplicationTypeInfo =
            serde_json::from_value(json!({"Name": "VotingType"})).expect("decode");
        assert_eq!(info.name.as_deref(), Some("VotingType"));
        assert!(info.default_parameter_list.is_empty());
    }
}
