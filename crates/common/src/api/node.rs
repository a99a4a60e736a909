//! Nodes: inventory, deactivation, restart, load and configuration overrides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::duration::FabricDuration;
use super::filter::HealthStateFilter;
use super::health::{HealthState, NodeHealth};
use super::known::open_enum;
use super::paging::PagedList;
use super::params::{TimeoutOptionalParams, optional_params};
use super::safety::SafetyCheckWrapper;

/// Internal node id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeId {
    /// Hex-encoded id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

open_enum! {
    /// Lifecycle status of a node.
    pub enum NodeStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Up.
        Up = "Up",
        /// Down.
        Down = "Down",
        /// Being enabled.
        Enabling = "Enabling",
        /// Being disabled.
        Disabling = "Disabling",
        /// Disabled.
        Disabled = "Disabled",
        /// Status is unknown.
        Unknown = "Unknown",
        /// Removed from the cluster.
        Removed = "Removed",
    }
}

open_enum! {
    /// Query filter on [`NodeStatus`]; wire values are lowercase.
    pub enum NodeStatusFilter {
        /// Every node except unknown and removed ones.
        Default = "default",
        /// Every node.
        All = "all",
        /// Up nodes.
        Up = "up",
        /// Down nodes.
        Down = "down",
        /// Enabling nodes.
        Enabling = "enabling",
        /// Disabling nodes.
        Disabling = "disabling",
        /// Disabled nodes.
        Disabled = "disabled",
        /// Nodes with unknown status.
        Unknown = "unknown",
        /// Removed nodes.
        Removed = "removed",
    }
}

open_enum! {
    /// Why a node is being deactivated.
    pub enum DeactivationIntent {
        /// Pause the node; replicas stay.
        Pause = "Pause",
        /// The node will restart shortly.
        Restart = "Restart",
        /// The node's data will be wiped.
        RemoveData = "RemoveData",
        /// The node will be removed from the cluster.
        RemoveNode = "RemoveNode",
    }
}

open_enum! {
    /// Progress of a node deactivation.
    pub enum NodeDeactivationStatus {
        /// No deactivation in progress.
        None = "None",
        /// Waiting on safety checks.
        SafetyCheckInProgress = "SafetyCheckInProgress",
        /// Safety checks passed.
        SafetyCheckComplete = "SafetyCheckComplete",
        /// Deactivation finished.
        Completed = "Completed",
    }
}

open_enum! {
    /// Who requested a node deactivation.
    pub enum NodeDeactivationTaskType {
        /// Invalid.
        Invalid = "Invalid",
        /// Azure infrastructure.
        Infrastructure = "Infrastructure",
        /// Repair manager.
        Repair = "Repair",
        /// A client request.
        Client = "Client",
    }
}

open_enum! {
    /// Whether a restart should produce a fabric process dump.
    pub enum CreateFabricDump {
        /// No dump.
        False = "False",
        /// Create a dump.
        True = "True",
    }
}

/// Identity of a deactivation task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeDeactivationTaskId {
    /// Task id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Requester.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_deactivation_task_type: Option<NodeDeactivationTaskType>,
}

/// A deactivation task on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeDeactivationTask {
    /// Task identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_deactivation_task_id: Option<NodeDeactivationTaskId>,
    /// Task intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_deactivation_intent: Option<DeactivationIntent>,
}

/// Deactivation state of a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeDeactivationInfo {
    /// Effective intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_deactivation_intent: Option<DeactivationIntent>,
    /// Progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_deactivation_status: Option<NodeDeactivationStatus>,
    /// Outstanding tasks.
    #[serde(default)]
    pub node_deactivation_task: Vec<NodeDeactivationTask>,
    /// Safety checks still pending.
    #[serde(default)]
    pub pending_safety_checks: Vec<SafetyCheckWrapper>,
}

/// A node in the cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeInfo {
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Address of the node.
    #[serde(
        rename = "IpAddressOrFQDN",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ip_address_or_fqdn: Option<String>,
    /// Node type.
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    /// Fabric code version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_version: Option<String>,
    /// Fabric config version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_version: Option<String>,
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_status: Option<NodeStatus>,
    /// Seconds since the node came up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_up_time_in_seconds: Option<String>,
    /// Aggregated health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_state: Option<HealthState>,
    /// Whether the node is a seed node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_seed_node: Option<bool>,
    /// Upgrade domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_domain: Option<String>,
    /// Fault domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_domain: Option<String>,
    /// Internal id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    /// Instance id; changes whenever the node restarts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Deactivation state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_deactivation_info: Option<NodeDeactivationInfo>,
    /// Whether the node was stopped through the fault API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stopped: Option<bool>,
    /// Seconds since the node went down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_down_time_in_seconds: Option<String>,
    /// When the node came up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_up_at: Option<DateTime<Utc>>,
    /// When the node went down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_down_at: Option<DateTime<Utc>>,
    /// Placement tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_tags: Vec<String>,
    /// Whether a node-by-node upgrade is running on the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_node_by_node_upgrade_in_progress: Option<bool>,
    /// Infrastructure placement id.
    #[serde(
        rename = "InfrastructurePlacementID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub infrastructure_placement_id: Option<String>,
}

/// Page of nodes.
pub type PagedNodeInfoList = PagedList<NodeInfo>;

/// Body of `disable_node`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeactivationIntentDescription {
    /// Why the node is being disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivation_intent: Option<DeactivationIntent>,
}

/// Body of `restart_node`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RestartNodeDescription {
    /// Instance id of the node to restart; `"0"` matches any instance.
    pub node_instance_id: String,
    /// Whether to dump the fabric process before restarting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_fabric_dump: Option<CreateFabricDump>,
}

impl Default for RestartNodeDescription {
    fn default() -> Self {
        RestartNodeDescription {
            node_instance_id: "0".to_string(),
            create_fabric_dump: None,
        }
    }
}

/// Load of one metric on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeLoadMetricInformation {
    /// Metric name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_capacity: Option<String>,
    /// Load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_load: Option<String>,
    /// Remaining capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_remaining_capacity: Option<String>,
    /// Whether capacity is violated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_capacity_violation: Option<bool>,
    /// Buffered capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_buffered_capacity: Option<String>,
    /// Remaining buffered capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_remaining_buffered_capacity: Option<String>,
    /// Current load as a floating point string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_node_load: Option<String>,
    /// Remaining capacity as a floating point string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_capacity_remaining: Option<String>,
    /// Remaining buffered capacity as a floating point string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffered_node_capacity_remaining: Option<String>,
    /// Load scheduled for removal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_node_load_removal: Option<String>,
}

/// Load of every metric on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeLoadInfo {
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Per-metric load.
    #[serde(default)]
    pub node_load_metric_information: Vec<NodeLoadMetricInformation>,
}

/// A configuration parameter overridden on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigParameterOverride {
    /// Section of the parameter.
    pub section_name: String,
    /// Parameter name.
    pub parameter_name: String,
    /// New value.
    pub parameter_value: String,
    /// How long the override lasts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<FabricDuration>,
    /// Keep the override after an upgrade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persist_across_upgrade: Option<bool>,
}

optional_params! {
    /// Optional parameters of `get_node_info_list`.
    pub struct GetNodeInfoListOptionalParams {
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
        /// Status filter.
        node_status_filter: NodeStatusFilter => "NodeStatusFilter",
        /// Page size.
        max_results: i64 => "MaxResults",
    }

    /// Optional parameters of `get_node_health`.
    pub struct GetNodeHealthOptionalParams {
        /// Events to include.
        events_health_state_filter: HealthStateFilter => "EventsHealthStateFilter",
    }

    /// Optional parameters of `report_node_health`.
    pub struct ReportNodeHealthOptionalParams {
        /// Send the report immediately.
        immediate: bool => "Immediate",
    }

    /// Optional parameters of `add_configuration_parameter_overrides`.
    pub struct AddConfigurationParameterOverridesOptionalParams {
        /// Override even when the parameter is already overridden.
        force: bool => "Force",
    }
}

/// Optional parameters of `get_node_health_using_policy`.
pub type GetNodeHealthUsingPolicyOptionalParams = GetNodeHealthOptionalParams;
/// Optional parameters of `get_node_info`.
pub type GetNodeInfoOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_node_load_info`.
pub type GetNodeLoadInfoOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `disable_node`.
pub type DisableNodeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `enable_node`.
pub type EnableNodeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `remove_node_state`.
pub type RemoveNodeStateOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `restart_node`.
pub type RestartNodeOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `remove_configuration_overrides`.
pub type RemoveConfigurationOverridesOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_configuration_overrides`.
pub type GetConfigurationOverridesOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `add_node_tags`.
pub type AddNodeTagsOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `remove_node_tags`.
pub type RemoveNodeTagsOptionalParams = TimeoutOptionalParams;

/// Response of `get_node_info_list`.
pub type GetNodeInfoListResponse = PagedNodeInfoList;
/// Response of `get_node_info`.
pub type GetNodeInfoResponse = NodeInfo;
/// Response of `get_node_health`.
pub type GetNodeHealthResponse = NodeHealth;
/// Response of `get_node_health_using_policy`.
pub type GetNodeHealthUsingPolicyResponse = NodeHealth;
/// Response of `get_node_load_info`.
pub type GetNodeLoadInfoResponse = NodeLoadInfo;
/// Response of `get_configuration_overrides`.
pub type GetConfigurationOverridesResponse = Vec<ConfigParameterOverride>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_page_has_no_next_page() {
        let page: PagedNodeInfoList = serde_json::from_value(json!({"Items": []})).expect("decode");
        assert!(page.items.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn node_info_decodes_renamed_fields() {
        let node: NodeInfo = serde_json::from_value(json!({
            "Name": "_Node_0",
            "IpAddressOrFQDN": "10.0.0.4",
            "Type": "NodeType0",
            "CodeVersion": "9.1.1436.9590",
            "NodeStatus": "Up",
            "NodeUpTimeInSeconds": "7262",
            "HealthState": "Ok",
            "IsSeedNode": true,
            "UpgradeDomain": "0",
            "FaultDomain": "fd:/0",
            "Id": {"Id": "3a1a9e6c7b3d4a54b2b1fb5d23e0e1f3"},
            "InstanceId": "131738352587137030",
            "NodeDeactivationInfo": {
                "NodeDeactivationIntent": "Invalid",
                "NodeDeactivationStatus": "None",
                "NodeDeactivationTask": [],
                "PendingSafetyChecks": []
            },
            "IsStopped": false,
            "NodeUpAt": "2018-05-24T08:16:03.000Z",
            "InfrastructurePlacementID": "ip-1"
        }))
        .expect("decode node");
        assert_eq!(node.ip_address_or_fqdn.as_deref(), Some("10.0.0.4"));
        assert_eq!(node.node_type.as_deref(), Some("NodeType0"));
        assert_eq!(node.node_status, Some(NodeStatus::Up));
        assert_eq!(node.infrastructure_placement_id.as_deref(), Some("ip-1"));
        let info = node.node_deactivation_info.expect("deactivation info");
        assert_eq!(
            info.node_deactivation_intent,
            Some(DeactivationIntent::Unrecognized("Invalid".into()))
        );
    }

    #[test]
    fn status_filter_uses_lowercase_wire_values() {
        let params = GetNodeInfoListOptionalParams {
            node_status_filter: Some(NodeStatusFilter::Disabled),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).expect("encode"),
            json!({"NodeStatusFilter": "disabled"})
        );
    }

    #[test]
    fn restart_defaults_to_any_instance() {
        let body = serde_json::to_value(RestartNodeDescription::default()).expect("encode");
        assert_eq!(body, json!({"NodeInstanceId": "0"}));
    }
}
