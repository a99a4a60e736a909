//! Partitions: identity, status, load and replica moves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::duration::FabricDuration;
use super::filter::HealthStateFilter;
use super::health::{HealthState, PartitionHealth};
use super::known::{UnknownVariant, open_enum, tagged_union};
use super::paging::PagedList;
use super::params::{TimeoutOptionalParams, optional_params};
use super::service::ServiceNameInfo;

open_enum! {
    /// Status of a partition.
    pub enum ServicePartitionStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Write quorum is available.
        Ready = "Ready",
        /// Not yet ready.
        NotReady = "NotReady",
        /// Lost write quorum.
        InQuorumLoss = "InQuorumLoss",
        /// Reconfiguring.
        Reconfiguring = "Reconfiguring",
        /// Being deleted.
        Deleting = "Deleting",
    }
}

/// Identity and key range of a partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionInformation {
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Key range or name.
    #[serde(flatten)]
    pub kind: PartitionKindInformation,
}

/// Kind-specific part of [`PartitionInformation`], discriminated by `ServicePartitionKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "ServicePartitionKind")]
pub enum PartitionKindInformation {
    /// Int64 key range.
    Int64Range {
        /// Lowest key, as a decimal string.
        #[serde(rename = "LowKey", default, skip_serializing_if = "Option::is_none")]
        low_key: Option<String>,
        /// Highest key, as a decimal string.
        #[serde(rename = "HighKey", default, skip_serializing_if = "Option::is_none")]
        high_key: Option<String>,
    },
    /// Named partition.
    Named {
        /// Partition name.
        #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Single partition.
    Singleton,
    /// Partition kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<PartitionKindInformation>),
}

tagged_union!(
    PartitionKindInformation,
    "ServicePartitionKind",
    ["Int64Range", "Named", "Singleton"]
);

impl PartitionInformation {
    /// Short human label: the name, the key range, or `singleton`.
    pub fn label(&self) -> String {
        match &self.kind {
            PartitionKindInformation::Named { name } => name.clone().unwrap_or_default(),
            PartitionKindInformation::Int64Range { low_key, high_key } => format!(
                "{}..{}",
                low_key.as_deref().unwrap_or("?"),
                high_key.as_deref().unwrap_or("?")
            ),
            PartitionKindInformation::Singleton => "singleton".to_string(),
            PartitionKindInformation::Unrecognized(unknown) => unknown.tag().to_string(),
        }
    }
}

/// Configuration epoch of a stateful partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Epoch {
    /// Configuration version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_version: Option<String>,
    /// Data loss version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_loss_version: Option<String>,
}

/// A partition of a service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ServicePartitionInfo {
    /// Aggregated health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_state: Option<HealthState>,
    /// Partition status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_status: Option<ServicePartitionStatus>,
    /// Identity and key range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_information: Option<PartitionInformation>,
    /// Stateful or stateless fields.
    #[serde(flatten)]
    pub kind: ServicePartitionKind,
}

/// Kind-specific part of [`ServicePartitionInfo`], discriminated by `ServiceKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "ServiceKind")]
pub enum ServicePartitionKind {
    /// Stateful partition.
    Stateful {
        /// Desired replica count.
        #[serde(rename = "TargetReplicaSetSize", default, skip_serializing_if = "Option::is_none")]
        target_replica_set_size: Option<i64>,
        /// Minimum replicas for write quorum.
        #[serde(rename = "MinReplicaSetSize", default, skip_serializing_if = "Option::is_none")]
        min_replica_set_size: Option<i64>,
        /// Auxiliary replica count.
        #[serde(rename = "AuxiliaryReplicaCount", default, skip_serializing_if = "Option::is_none")]
        auxiliary_replica_count: Option<i64>,
        /// Duration of the last quorum loss.
        #[serde(rename = "LastQuorumLossDuration", default, skip_serializing_if = "Option::is_none")]
        last_quorum_loss_duration: Option<FabricDuration>,
        /// Current epoch.
        #[serde(rename = "PrimaryEpoch", default, skip_serializing_if = "Option::is_none")]
        primary_epoch: Option<Epoch>,
    },
    /// Stateless partition.
    Stateless {
        /// Instance count.
        #[serde(rename = "InstanceCount", default, skip_serializing_if = "Option::is_none")]
        instance_count: Option<i64>,
        /// Minimum instance count.
        #[serde(rename = "MinInstanceCount", default, skip_serializing_if = "Option::is_none")]
        min_instance_count: Option<i64>,
        /// Minimum instance percentage.
        #[serde(rename = "MinInstancePercentage", default, skip_serializing_if = "Option::is_none")]
        min_instance_percentage: Option<i64>,
    },
    /// Service kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<ServicePartitionKind>),
}

tagged_union!(ServicePartitionKind, "ServiceKind", ["Stateful", "Stateless"]);

/// Page of partitions.
pub type PagedServicePartitionInfoList = PagedList<ServicePartitionInfo>;

/// A load value reported for one metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct LoadMetricReport {
    /// Metric name.
    pub name: String,
    /// Reported value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Current value, with decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
    /// When the value was reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reported_utc: Option<DateTime<Utc>>,
}

/// Load of a partition by replica role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionLoadInformation {
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
    /// Primary reports.
    #[serde(default)]
    pub primary_load_metric_reports: Vec<LoadMetricReport>,
    /// Secondary reports.
    #[serde(default)]
    pub secondary_load_metric_reports: Vec<LoadMetricReport>,
    /// Auxiliary reports.
    #[serde(default)]
    pub auxiliary_load_metric_reports: Vec<LoadMetricReport>,
}

/// Load for one metric used by `update_partition_load`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MetricLoadDescription {
    /// Metric name.
    pub metric_name: String,
    /// Current load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_load: Option<i64>,
    /// Predicted load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_load: Option<i64>,
}

/// Loads for the replica on one node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicaMetricLoadDescription {
    /// Node name.
    pub node_name: String,
    /// Loads.
    #[serde(default)]
    pub replica_or_instance_load_entries: Vec<MetricLoadDescription>,
}

/// New loads for one partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionMetricLoadDescription {
    /// Partition id.
    pub partition_id: Uuid,
    /// Primary loads.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary_replica_load_entries: Vec<MetricLoadDescription>,
    /// Loads applied to every secondary or instance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_replicas_or_instances_load_entries: Vec<MetricLoadDescription>,
    /// Loads of secondaries or instances per node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_replica_or_instance_load_entries_per_node: Vec<ReplicaMetricLoadDescription>,
    /// Loads applied to every auxiliary replica.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auxiliary_replicas_load_entries: Vec<MetricLoadDescription>,
    /// Loads of auxiliary replicas per node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auxiliary_replica_load_entries_per_node: Vec<ReplicaMetricLoadDescription>,
}

/// Outcome of updating one partition's load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePartitionLoadResult {
    /// Partition id.
    pub partition_id: Uuid,
    /// Zero on success, otherwise a fabric error code.
    #[serde(default)]
    pub partition_error_code: i32,
}

/// Page of load update results.
pub type PagedUpdatePartitionLoadResultList = PagedList<UpdatePartitionLoadResult>;

optional_params! {
    /// Optional parameters of `get_partition_info_list`.
    pub struct GetPartitionInfoListOptionalParams {
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
    }

    /// Optional parameters of `get_partition_health`.
    pub struct GetPartitionHealthOptionalParams {
        /// Events to include.
        events_health_state_filter: HealthStateFilter => "EventsHealthStateFilter",
        /// Replicas to include.
        replicas_health_state_filter: HealthStateFilter => "ReplicasHealthStateFilter",
        /// Leave out health statistics.
        exclude_health_statistics: bool => "ExcludeHealthStatistics",
    }

    /// Optional parameters of `report_partition_health`.
    pub struct ReportPartitionHealthOptionalParams {
        /// Send the report immediately.
        immediate: bool => "Immediate",
    }

    /// Optional parameters of `move_primary_replica`.
    pub struct MovePrimaryReplicaOptionalParams {
        /// Target node; any node when unset.
        node_name: String => "NodeName",
        /// Ignore placement constraints.
        ignore_constraints: bool => "IgnoreConstraints",
    }

    /// Optional parameters of `move_secondary_replica` and `move_instance`.
    pub struct MoveSecondaryReplicaOptionalParams {
        /// Target node; any node when unset.
        new_node_name: String => "NewNodeName",
        /// Ignore placement constraints.
        ignore_constraints: bool => "IgnoreConstraints",
    }

    /// Optional parameters of `update_partition_load`.
    pub struct UpdatePartitionLoadOptionalParams {
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
        /// Page size.
        max_results: i64 => "MaxResults",
    }
}

/// Optional parameters of `move_instance`.
pub type MoveInstanceOptionalParams = MoveSecondaryReplicaOptionalParams;
/// Optional parameters of `get_partition_health_using_policy`.
pub type GetPartitionHealthUsingPolicyOptionalParams = GetPartitionHealthOptionalParams;
/// Optional parameters of `get_partition_info`.
pub type GetPartitionInfoOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_service_name_info`.
pub type GetServiceNameInfoOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_partition_load_information`.
pub type GetPartitionLoadInformationOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `reset_partition_load`.
pub type ResetPartitionLoadOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `recover_partition`.
pub type RecoverPartitionOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `recover_service_partitions`.
pub type RecoverServicePartitionsOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `recover_system_partitions`.
pub type RecoverSystemPartitionsOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `recover_all_partitions`.
pub type RecoverAllPartitionsOptionalParams = TimeoutOptionalParams;

/// Response of `get_partition_info_list`.
pub type GetPartitionInfoListResponse = PagedServicePartitionInfoList;
/// Response of `get_partition_info`.
pub type GetPartitionInfoResponse = ServicePartitionInfo;
/// Response of `get_service_name_info`.
pub type GetServiceNameInfoResponse = ServiceNameInfo;
/// Response of `get_partition_health`.
pub type GetPartitionHealthResponse = PartitionHealth;
/// Response of `get_partition_health_using_policy`.
pub type GetPartitionHealthUsingPolicyResponse = PartitionHealth;
/// Response of `get_partition_load_information`.
pub type GetPartitionLoadInformationResponse = PartitionLoadInformation;
/// Response of `update_partition_load`.
pub type UpdatePartitionLoadResponse = PagedUpdatePartitionLoadResultList;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn stateful_partition_decodes_kind_and_range() {
        let info: ServicePartitionInfo = serde_json::from_value(json!({
            "ServiceKind": "Stateful",
            "HealthState": "Ok",
            "PartitionStatus": "Ready",
            "PartitionInformation": {
                "ServicePartitionKind": "Int64Range",
                "Id": "0b3a6e7a-7a0c-4a38-9b40-5f53f0f0c2ab",
                "LowKey": "-9223372036854775808",
                "HighKey": "9223372036854775807"
            },
            "TargetReplicaSetSize": 3,
            "MinReplicaSetSize": 2,
            "LastQuorumLossDuration": "PT0S",
            "PrimaryEpoch": {"ConfigurationVersion": "8589934592", "DataLossVersion": "1"}
        }))
        .expect("decode");

        assert_eq!(info.partition_status, Some(ServicePartitionStatus::Ready));
        let partition = info.partition_information.expect("partition information");
        assert_eq!(
            partition.label(),
            "-9223372036854775808..9223372036854775807"
        );
        let ServicePartitionKind::Stateful {
            target_replica_set_size,
            last_quorum_loss_duration,
            ..
        } = info.kind
        else {
            panic!("expected stateful partition");
        };
        assert_eq!(target_replica_set_size, Some(3));
        assert_eq!(
            last_quorum_loss_duration,
            Some(FabricDuration(Duration::ZERO))
        );
    }

    #[test]
    fn named_and_unknown_partition_kinds() {
        let named: PartitionInformation = serde_json::from_value(json!({
            "ServicePartitionKind": "Named",
            "Name": "east"
        }))
        .expect("decode");
        assert_eq!(named.label(), "east");

        let unknown: PartitionInformation = serde_json::from_value(json!({
            "ServicePartitionKind": "Hashed",
            "Id": "0b3a6e7a-7a0c-4a38-9b40-5f53f0f0c2ab"
        }))
        .expect("decode");
        assert!(matches!(unknown.kind, PartitionKindInformation::Unrecognized(_)));
        assert_eq!(unknown.label(), "Hashed");
        assert!(unknown.id.is_some());
    }

    #[test]
    fn partition_load_update_omits_empty_entries() {
        let description = PartitionMetricLoadDescription {
            partition_id: Uuid::nil(),
            primary_replica_load_entries: vec![MetricLoadDescription {
                metric_name: "Memory".into(),
                current_load: Some(10),
                predicted_load: None,
            }],
            secondary_replicas_or_instances_load_entries: Vec::new(),
            secondary_replica_or_instance_load_entries_per_node: Vec::new(),
            auxiliary_replicas_load_entries: Vec::new(),
            auxiliary_replica_load_entries_per_node: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&description).expect("encode"),
            json!({
                "PartitionId": "00000000-0000-0000-0000-000000000000",
                "PrimaryReplicaLoadEntries": [{"MetricName": "Memory", "CurrentLoad": 10}]
            })
        );
    }
}
