//! Services: descriptions, partition schemes, placement and resolution.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::filter::HealthStateFilter;
use super::health::{HealthState, ServiceHealth};
use super::known::{UnknownVariant, open_enum, tagged_union};
use super::paging::PagedList;
use super::params::{TimeoutOptionalParams, optional_params};
use super::partition::PartitionInformation;

open_enum! {
    /// Whether a service keeps state.
    pub enum ServiceKind {
        /// Invalid.
        Invalid = "Invalid",
        /// Stateless service.
        Stateless = "Stateless",
        /// Stateful service.
        Stateful = "Stateful",
    }
}

open_enum! {
    /// Lifecycle status of a service.
    pub enum ServiceStatus {
        /// Unknown.
        Unknown = "Unknown",
        /// Active.
        Active = "Active",
        /// Upgrading.
        Upgrading = "Upgrading",
        /// Being deleted.
        Deleting = "Deleting",
        /// Being created.
        Creating = "Creating",
        /// Failed.
        Failed = "Failed",
    }
}

open_enum! {
    /// Correlation between two services.
    pub enum ServiceCorrelationScheme {
        /// Invalid.
        Invalid = "Invalid",
        /// Place together with the target service.
        Affinity = "Affinity",
        /// Place primaries and secondaries together with the target's.
        AlignedAffinity = "AlignedAffinity",
        /// Place primaries together, secondaries anywhere.
        NonAlignedAffinity = "NonAlignedAffinity",
    }
}

open_enum! {
    /// Relative weight of a load metric.
    pub enum ServiceLoadMetricWeight {
        /// Ignored by balancing.
        Zero = "Zero",
        /// Low weight.
        Low = "Low",
        /// Medium weight.
        Medium = "Medium",
        /// High weight.
        High = "High",
    }
}

open_enum! {
    /// Cost of moving a replica.
    pub enum MoveCost {
        /// No cost.
        Zero = "Zero",
        /// Low cost.
        Low = "Low",
        /// Medium cost.
        Medium = "Medium",
        /// High cost.
        High = "High",
        /// Very high cost.
        VeryHigh = "VeryHigh",
    }
}

open_enum! {
    /// Process isolation of a service package.
    pub enum ServicePackageActivationMode {
        /// Share one process per package per node.
        SharedProcess = "SharedProcess",
        /// One process per replica.
        ExclusiveProcess = "ExclusiveProcess",
    }
}

open_enum! {
    /// Role of a resolved endpoint.
    pub enum ServiceEndpointRole {
        /// Invalid.
        Invalid = "Invalid",
        /// Stateless instance.
        Stateless = "Stateless",
        /// Stateful primary.
        StatefulPrimary = "StatefulPrimary",
        /// Stateful secondary.
        StatefulSecondary = "StatefulSecondary",
    }
}

open_enum! {
    /// Sort order of loaded partition queries.
    pub enum Ordering {
        /// Descending.
        Desc = "Desc",
        /// Ascending.
        Asc = "Asc",
    }
}

/// A service of an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceInfo {
    /// Service id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Service name (`fabric:/...`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Service type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Service manifest version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_version: Option<String>,
    /// Aggregated health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_state: Option<HealthState>,
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_status: Option<ServiceStatus>,
    /// Whether the service is a service group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_service_group: Option<bool>,
    /// Stateful or stateless fields.
    #[serde(flatten)]
    pub kind: ServiceInfoKind,
}

/// Kind-specific part of [`ServiceInfo`], discriminated by `ServiceKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "ServiceKind")]
pub enum ServiceInfoKind {
    /// Stateful service.
    Stateful {
        /// Whether replicas persist state.
        #[serde(rename = "HasPersistedState", default)]
        has_persisted_state: bool,
    },
    /// Stateless service.
    Stateless,
    /// Service kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<ServiceInfoKind>),
}

tagged_union!(ServiceInfoKind, "ServiceKind", ["Stateful", "Stateless"]);

/// Page of services.
pub type PagedServiceInfoList = PagedList<ServiceInfo>;

/// Partitioning of a service, discriminated by `PartitionScheme`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "PartitionScheme")]
pub enum PartitionSchemeDescription {
    /// Partitions identified by name.
    Named {
        /// Number of partitions.
        #[serde(rename = "Count")]
        count: i32,
        /// Partition names.
        #[serde(rename = "Names")]
        names: Vec<String>,
    },
    /// A single partition.
    Singleton,
    /// Partitions covering an int64 key range evenly.
    UniformInt64Range {
        /// Number of partitions.
        #[serde(rename = "Count")]
        count: i32,
        /// Lowest key, as a decimal string.
        #[serde(rename = "LowKey")]
        low_key: String,
        /// Highest key, as a decimal string.
        #[serde(rename = "HighKey")]
        high_key: String,
    },
    /// Partition scheme added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<PartitionSchemeDescription>),
}

tagged_union!(
    PartitionSchemeDescription,
    "PartitionScheme",
    ["Named", "Singleton", "UniformInt64Range"]
);

/// Correlation with another service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceCorrelationDescription {
    /// Correlation scheme.
    pub scheme: ServiceCorrelationScheme,
    /// Target service name.
    pub service_name: String,
}

/// Load metric reported by a service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceLoadMetricDescription {
    /// Metric name.
    pub name: String,
    /// Weight relative to other metrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<ServiceLoadMetricWeight>,
    /// Default load of a primary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_default_load: Option<i64>,
    /// Default load of a secondary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_default_load: Option<i64>,
    /// Default load of an auxiliary replica.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_default_load: Option<i64>,
    /// Default load of a stateless instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_load: Option<i64>,
}

/// Placement policy of a service, discriminated by `Type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "Type")]
pub enum ServicePlacementPolicyDescription {
    /// Never place in the named domain.
    InvalidDomain {
        /// Domain name.
        #[serde(rename = "DomainName")]
        domain_name: String,
    },
    /// Place all replicas or none.
    NonPartiallyPlaceService,
    /// Prefer primaries in the named domain.
    PreferPrimaryDomain {
        /// Domain name.
        #[serde(rename = "DomainName")]
        domain_name: String,
    },
    /// Place only in the named domain.
    RequireDomain {
        /// Domain name.
        #[serde(rename = "DomainName")]
        domain_name: String,
    },
    /// Spread replicas across the named domain.
    RequireDomainDistribution {
        /// Domain name.
        #[serde(rename = "DomainName")]
        domain_name: String,
    },
    /// Allow several instances of a partition on one node.
    AllowMultipleStatelessInstancesOnNode,
    /// Placement policy added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<ServicePlacementPolicyDescription>),
}

tagged_union!(
    ServicePlacementPolicyDescription,
    "Type",
    [
        "InvalidDomain",
        "NonPartiallyPlaceService",
        "PreferPrimaryDomain",
        "RequireDomain",
        "RequireDomainDistribution",
        "AllowMultipleStatelessInstancesOnNode",
    ]
);

/// What triggers auto scaling, discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "Kind")]
pub enum ScalingTriggerDescription {
    /// Average load of a partition's instances.
    AveragePartitionLoad {
        /// Metric name.
        #[serde(rename = "MetricName")]
        metric_name: String,
        /// Scale in below this load.
        #[serde(rename = "LowerLoadThreshold")]
        lower_load_threshold: String,
        /// Scale out above this load.
        #[serde(rename = "UpperLoadThreshold")]
        upper_load_threshold: String,
        /// Evaluation interval in seconds.
        #[serde(rename = "ScaleIntervalInSeconds")]
        scale_interval_in_seconds: i64,
    },
    /// Average load of the whole service.
    AverageServiceLoad {
        /// Metric name.
        #[serde(rename = "MetricName")]
        metric_name: String,
        /// Scale in below this load.
        #[serde(rename = "LowerLoadThreshold")]
        lower_load_threshold: String,
        /// Scale out above this load.
        #[serde(rename = "UpperLoadThreshold")]
        upper_load_threshold: String,
        /// Evaluation interval in seconds.
        #[serde(rename = "ScaleIntervalInSeconds")]
        scale_interval_in_seconds: i64,
        /// Only count primary load.
        #[serde(rename = "UseOnlyPrimaryLoad", default)]
        use_only_primary_load: bool,
    },
    /// Trigger added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<ScalingTriggerDescription>),
}

tagged_union!(ScalingTriggerDescription, "Kind", ["AveragePartitionLoad", "AverageServiceLoad"]);

/// How auto scaling changes the service, discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "Kind")]
pub enum ScalingMechanismDescription {
    /// Change the instance count of each partition.
    PartitionInstanceCount {
        /// Lower bound.
        #[serde(rename = "MinInstanceCount")]
        min_instance_count: i32,
        /// Upper bound.
        #[serde(rename = "MaxInstanceCount")]
        max_instance_count: i32,
        /// Step.
        #[serde(rename = "ScaleIncrement")]
        scale_increment: i32,
    },
    /// Add or remove named partitions.
    AddRemoveIncrementalNamedPartition {
        /// Lower bound.
        #[serde(rename = "MinPartitionCount")]
        min_partition_count: i32,
        /// Upper bound.
        #[serde(rename = "MaxPartitionCount")]
        max_partition_count: i32,
        /// Step.
        #[serde(rename = "ScaleIncrement")]
        scale_increment: i32,
    },
    /// Mechanism added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<ScalingMechanismDescription>),
}

tagged_union!(
    ScalingMechanismDescription,
    "Kind",
    ["PartitionInstanceCount", "AddRemoveIncrementalNamedPartition"]
);

/// Auto scaling policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ScalingPolicyDescription {
    /// Trigger.
    pub scaling_trigger: ScalingTriggerDescription,
    /// Mechanism.
    pub scaling_mechanism: ScalingMechanismDescription,
}

/// Placement tags a node must carry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeTagsDescription {
    /// Number of tags.
    #[serde(default)]
    pub count: i32,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body of `create_service` and response of `get_service_description`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceDescription {
    /// Owning application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    /// Service name (`fabric:/...`).
    pub service_name: String,
    /// Service type name.
    pub service_type_name: String,
    /// Initialization bytes passed to the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initialization_data: Option<Vec<u8>>,
    /// Partitioning.
    pub partition_description: PartitionSchemeDescription,
    /// Placement constraint expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_constraints: Option<String>,
    /// Correlations with other services.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub correlation_scheme: Vec<ServiceCorrelationDescription>,
    /// Load metrics.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_load_metrics: Vec<ServiceLoadMetricDescription>,
    /// Placement policies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_placement_policies: Vec<ServicePlacementPolicyDescription>,
    /// Move cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_move_cost: Option<MoveCost>,
    /// Whether `default_move_cost` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default_move_cost_specified: Option<bool>,
    /// Process isolation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_package_activation_mode: Option<ServicePackageActivationMode>,
    /// DNS name of the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_dns_name: Option<String>,
    /// Auto scaling policies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scaling_policies: Vec<ScalingPolicyDescription>,
    /// Tags required to place the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_required_to_place: Option<NodeTagsDescription>,
    /// Tags required to run the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_required_to_run: Option<NodeTagsDescription>,
    /// Stateful or stateless fields.
    #[serde(flatten)]
    pub kind: ServiceDescriptionKind,
}

/// Kind-specific part of [`ServiceDescription`], discriminated by `ServiceKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "ServiceKind")]
pub enum ServiceDescriptionKind {
    /// Stateful service.
    Stateful(StatefulServiceDescription),
    /// Stateless service.
    Stateless(StatelessServiceDescription),
    /// Service kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<ServiceDescriptionKind>),
}

tagged_union!(ServiceDescriptionKind, "ServiceKind", ["Stateful", "Stateless"]);

/// Replica set settings of a stateful service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StatefulServiceDescription {
    /// Desired replica count.
    pub target_replica_set_size: i32,
    /// Minimum replicas for write quorum.
    pub min_replica_set_size: i32,
    /// Whether replicas persist state to disk.
    pub has_persisted_state: bool,
    /// Bitmask of the optional duration fields that are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<i32>,
    /// Wait before rebuilding a down replica, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_restart_wait_duration_seconds: Option<i64>,
    /// Maximum time in quorum loss, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quorum_loss_wait_duration_seconds: Option<i64>,
    /// How long standby replicas are kept, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand_by_replica_keep_duration_seconds: Option<i64>,
    /// Time limit for replica placement, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_placement_time_limit_seconds: Option<i64>,
    /// Drop the source replica before the new one is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_source_replica_on_move: Option<bool>,
    /// Auxiliary replica count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_replica_count: Option<i32>,
}

/// Instance settings of a stateless service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StatelessServiceDescription {
    /// Instance count; `-1` places one instance on every node.
    pub instance_count: i32,
    /// Minimum instance count for safety checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_instance_count: Option<i32>,
    /// Minimum instance percentage for safety checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_instance_percentage: Option<i32>,
    /// Bitmask of the optional duration fields that are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<i32>,
    /// Delay before closing an instance, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_close_delay_duration_seconds: Option<i64>,
    /// Wait before recreating a down instance, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_restart_wait_duration_seconds: Option<i64>,
}

/// Body of `update_service`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceUpdateDescription {
    /// Bitmask of fields being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    /// Placement constraint expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_constraints: Option<String>,
    /// Correlations with other services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_scheme: Option<Vec<ServiceCorrelationDescription>>,
    /// Load metrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_metrics: Option<Vec<ServiceLoadMetricDescription>>,
    /// Placement policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_placement_policies: Option<Vec<ServicePlacementPolicyDescription>>,
    /// Move cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_move_cost: Option<MoveCost>,
    /// Auto scaling policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_policies: Option<Vec<ScalingPolicyDescription>>,
    /// DNS name of the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_dns_name: Option<String>,
    /// Stateful or stateless fields.
    #[serde(flatten)]
    pub kind: ServiceUpdateKind,
}

/// Kind-specific part of [`ServiceUpdateDescription`], discriminated by `ServiceKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "ServiceKind")]
pub enum ServiceUpdateKind {
    /// Stateful service update.
    Stateful(StatefulServiceUpdateDescription),
    /// Stateless service update.
    Stateless(StatelessServiceUpdateDescription),
    /// Service kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<ServiceUpdateKind>),
}

tagged_union!(ServiceUpdateKind, "ServiceKind", ["Stateful", "Stateless"]);

/// Stateful fields of a service update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StatefulServiceUpdateDescription {
    /// Desired replica count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_replica_set_size: Option<i32>,
    /// Minimum replicas for write quorum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_replica_set_size: Option<i32>,
    /// Wait before rebuilding a down replica, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_restart_wait_duration_seconds: Option<String>,
    /// Maximum time in quorum loss, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quorum_loss_wait_duration_seconds: Option<String>,
    /// How long standby replicas are kept, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand_by_replica_keep_duration_seconds: Option<String>,
    /// Time limit for replica placement, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_placement_time_limit_seconds: Option<String>,
    /// Drop the source replica before the new one is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_source_replica_on_move: Option<bool>,
    /// Auxiliary replica count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_replica_count: Option<i32>,
}

/// Stateless fields of a service update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StatelessServiceUpdateDescription {
    /// Instance count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    /// Minimum instance count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_instance_count: Option<i32>,
    /// Minimum instance percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_instance_percentage: Option<i32>,
    /// Delay before closing an instance, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_close_delay_duration_seconds: Option<String>,
    /// Wait before recreating a down instance, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_restart_wait_duration_seconds: Option<String>,
}

/// Body of `create_service_from_template`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceFromTemplateDescription {
    /// Owning application name.
    pub application_name: String,
    /// Service name.
    pub service_name: String,
    /// Service type name of the template.
    pub service_type_name: String,
    /// Initialization bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initialization_data: Option<Vec<u8>>,
    /// Process isolation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_package_activation_mode: Option<ServicePackageActivationMode>,
    /// DNS name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_dns_name: Option<String>,
}

/// Kind of partition key passed to `resolve_service`; travels as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionKeyType {
    /// Singleton partition (1).
    None,
    /// Int64 range partition (2).
    Int64Range,
    /// Named partition (3).
    Named,
}

impl PartitionKeyType {
    /// Integer wire value.
    pub fn as_u8(self) -> u8 {
        match self {
            PartitionKeyType::None => 1,
            PartitionKeyType::Int64Range => 2,
            PartitionKeyType::Named => 3,
        }
    }
}

impl Serialize for PartitionKeyType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for PartitionKeyType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            1 => Ok(PartitionKeyType::None),
            2 => Ok(PartitionKeyType::Int64Range),
            3 => Ok(PartitionKeyType::Named),
            other => Err(serde::de::Error::custom(format!(
                "unknown partition key type {other}"
            ))),
        }
    }
}

/// An endpoint of a resolved partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ResolvedServiceEndpoint {
    /// Role of the replica behind the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ServiceEndpointRole>,
    /// Address, usually a JSON document of listener addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Result of `resolve_service`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResolvedServicePartition {
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Partition the key resolved to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_information: Option<PartitionInformation>,
    /// Endpoints.
    #[serde(default)]
    pub endpoints: Vec<ResolvedServiceEndpoint>,
    /// Version to pass as `PreviousRspVersion` when re-resolving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ResolvedServicePartition {
    /// Address of the primary, or of the first endpoint for stateless services.
    pub fn primary_address(&self) -> Option<&str> {
        self.endpoints
            .iter()
            .find(|endpoint| endpoint.kind == Some(ServiceEndpointRole::StatefulPrimary))
            .or_else(|| self.endpoints.first())
            .and_then(|endpoint| endpoint.address.as_deref())
    }
}

/// Why replicas of a service could not be placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UnplacedReplicaInformation {
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
    /// Placement diagnostics.
    #[serde(default)]
    pub unplaced_replica_details: Vec<String>,
}

/// Load of one partition for one metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct LoadedPartitionInformationResult {
    /// Service name.
    pub service_name: String,
    /// Partition id.
    pub partition_id: Uuid,
    /// Metric name.
    pub metric_name: String,
    /// Load.
    pub load: i64,
}

/// Page of loaded partitions.
pub type LoadedPartitionInformationResultList = PagedList<LoadedPartitionInformationResult>;

/// Service that owns a partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceNameInfo {
    /// Service id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

optional_params! {
    /// Optional parameters of `get_service_info_list`.
    pub struct GetServiceInfoListOptionalParams {
        /// Only services of this type.
        service_type_name: String => "ServiceTypeName",
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
    }

    /// Optional parameters of `delete_service`.
    pub struct DeleteServiceOptionalParams {
        /// Remove without waiting for graceful shutdown.
        force_remove: bool => "ForceRemove",
    }

    /// Optional parameters of `get_service_health`.
    pub struct GetServiceHealthOptionalParams {
        /// Events to include.
        events_health_state_filter: HealthStateFilter => "EventsHealthStateFilter",
        /// Partitions to include.
        partitions_health_state_filter: HealthStateFilter => "PartitionsHealthStateFilter",
        /// Leave out health statistics.
        exclude_health_statistics: bool => "ExcludeHealthStatistics",
    }

    /// Optional parameters of `report_service_health`.
    pub struct ReportServiceHealthOptionalParams {
        /// Send the report immediately.
        immediate: bool => "Immediate",
    }

    /// Optional parameters of `resolve_service`.
    pub struct ResolveServiceOptionalParams {
        /// Kind of partition key.
        partition_key_type: PartitionKeyType => "PartitionKeyType",
        /// Partition key.
        partition_key_value: String => "PartitionKeyValue",
        /// Version of a previous resolution, to force a refresh.
        previous_rsp_version: String => "PreviousRspVersion",
    }

    /// Optional parameters of `get_unplaced_replica_information`.
    pub struct GetUnplacedReplicaInformationOptionalParams {
        /// Only this partition.
        partition_id: Uuid => "PartitionId",
        /// Only primaries.
        only_query_primaries: bool => "OnlyQueryPrimaries",
    }

    /// Optional parameters of `get_loaded_partition_info_list`.
    pub struct GetLoadedPartitionInfoListOptionalParams {
        /// Only partitions of this service.
        service_name: String => "ServiceName",
        /// Sort order.
        ordering: Ordering => "Ordering",
        /// Page size.
        max_results: i64 => "MaxResults",
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
    }
}

/// Optional parameters of `get_service_health_using_policy`.
pub type GetServiceHealthUsingPolicyOptionalParams = GetServiceHealthOptionalParams;
/// Optional parameters of `get_service_info`.
pub type GetServiceInfoOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `create_service`.
pub type CreateServiceOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `create_service_from_template`.
pub type CreateServiceFromTemplateOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `update_service`.
pub type UpdateServiceOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_service_description`.
pub type GetServiceDescriptionOptionalParams = TimeoutOptionalParams;

/// Response of `get_service_info_list`.
pub type GetServiceInfoListResponse = PagedServiceInfoList;
/// Response of `get_service_info`.
pub type GetServiceInfoResponse = ServiceInfo;
/// Response of `get_service_description`.
pub type GetServiceDescriptionResponse = ServiceDescription;
/// Response of `get_service_health`.
pub type GetServiceHealthResponse = ServiceHealth;
/// Response of `get_service_health_using_policy`.
pub type GetServiceHealthUsingPolicyResponse = ServiceHealth;
/// Response of `resolve_service`.
pub type ResolveServiceResponse = ResolvedServicePartition;
/// Response of `get_unplaced_replica_information`.
pub type GetUnplacedReplicaInformationResponse = UnplacedReplicaInformation;
/// Response of `get_loaded_partition_info_list`.
pub type GetLoadedPartitionInfoListResponse = LoadedPartitionInformationResultList;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stateful_json() -> serde_json::Value {
        json!({
            "ServiceKind": "Stateful",
            "ApplicationName": "fabric:/app",
            "ServiceName": "fabric:/app/svc",
            "ServiceTypeName": "SvcType",
            "PartitionDescription": {
                "PartitionScheme": "UniformInt64Range",
                "Count": 5,
                "LowKey": "0",
                "HighKey": "4"
            },
            "TargetReplicaSetSize": 3,
            "MinReplicaSetSize": 2,
            "HasPersistedState": true
        })
    }

    #[test]
    fn stateful_description_decodes_as_stateful() {
        let description: ServiceDescription =
            serde_json::from_value(stateful_json()).expect("decode stateful");
        let ServiceDescriptionKind::Stateful(stateful) = &description.kind else {
            panic!("expected stateful description, got {:?}", description.kind);
        };
        assert_eq!(stateful.target_replica_set_size, 3);
        assert_eq!(stateful.min_replica_set_size, 2);
        assert!(stateful.has_persisted_state);
        assert!(matches!(
            description.partition_description,
            PartitionSchemeDescription::UniformInt64Range { count: 5, .. }
        ));
    }

    #[test]
    fn stateless_description_requires_instance_count() {
        let mut value = stateful_json();
        value["ServiceKind"] = json!("Stateless");
        let result: Result<ServiceDescription, _> = serde_json::from_value(value.clone());
        assert!(result.is_err(), "stateless without InstanceCount must fail");

        value["InstanceCount"] = json!(-1);
        let description: ServiceDescription = serde_json::from_value(value).expect("decode");
        assert!(matches!(
            description.kind,
            ServiceDescriptionKind::Stateless(StatelessServiceDescription {
                instance_count: -1,
                ..
            })
        ));
    }

    #[test]
    fn service_description_encodes_kind_and_skips_empty_fields() {
        let description = ServiceDescription {
            application_name: None,
            service_name: "fabric:/app/web".into(),
            service_type_name: "WebType".into(),
            initialization_data: Some(vec![1, 2]),
            partition_description: PartitionSchemeDescription::Singleton,
            placement_constraints: None,
            correlation_scheme: Vec::new(),
            service_load_metrics: Vec::new(),
            service_placement_policies: vec![ServicePlacementPolicyDescription::RequireDomain {
                domain_name: "fd:/east".into(),
            }],
            default_move_cost: None,
            is_default_move_cost_specified: None,
            service_package_activation_mode: None,
            service_dns_name: None,
            scaling_policies: Vec::new(),
            tags_required_to_place: None,
            tags_required_to_run: None,
            kind: ServiceDescriptionKind::Stateless(StatelessServiceDescription {
                instance_count: 1,
                min_instance_count: None,
                min_instance_percentage: None,
                flags: None,
                instance_close_delay_duration_seconds: None,
                instance_restart_wait_duration_seconds: None,
            }),
        };
        assert_eq!(
            serde_json::to_value(&description).expect("encode"),
            json!({
                "ServiceKind": "Stateless",
                "ServiceName": "fabric:/app/web",
                "ServiceTypeName": "WebType",
                "InitializationData": [1, 2],
                "PartitionDescription": {"PartitionScheme": "Singleton"},
                "ServicePlacementPolicies": [{"Type": "RequireDomain", "DomainName": "fd:/east"}],
                "InstanceCount": 1
            })
        );
    }

    #[test]
    fn unknown_service_kind_is_unrecognized() {
        let info: ServiceInfo = serde_json::from_value(json!({
            "ServiceKind": "Hybrid",
            "Name": "fabric:/app/x"
        }))
        .expect("decode");
        assert!(matches!(
            &info.kind,
            ServiceInfoKind::Unrecognized(unknown) if unknown.tag() == "Hybrid"
        ));
    }

    #[test]
    fn resolved_partition_prefers_primary() {
        let resolved: ResolvedServicePartition = serde_json::from_value(json!({
            "Name": "fabric:/app/svc",
            "PartitionInformation": {
                "ServicePartitionKind": "Singleton",
                "Id": "c5ce4c7c-6a0e-4b8b-8d59-9c1d8b1c8a60"
            },
            "Endpoints": [
                {"Kind": "StatefulSecondary", "Address": "s"},
                {"Kind": "StatefulPrimary", "Address": "p"}
            ],
            "Version": "7"
        }))
        .expect("decode");
        assert_eq!(resolved.primary_address(), Some("p"));
    }

    #[test]
    fn partition_key_type_is_an_integer() {
        let params = ResolveServiceOptionalParams {
            partition_key_type: Some(PartitionKeyType::Int64Range),
            partition_key_value: Some("42".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).expect("encode"),
            json!({"PartitionKeyType": 2, "PartitionKeyValue": "42"})
        );
    }
}
