//! Fault operations: induced data loss, quorum loss, partition restarts and
//! node transitions, tracked by a caller-chosen operation id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::known::open_enum;
use super::params::TimeoutOptionalParams;

open_enum! {
    /// State of a fault operation.
    pub enum OperationState {
        /// Invalid.
        Invalid = "Invalid",
        /// Running.
        Running = "Running",
        /// Rolling back after a failure or cancel.
        RollingBack = "RollingBack",
        /// Completed.
        Completed = "Completed",
        /// Failed.
        Faulted = "Faulted",
        /// Cancelled gracefully.
        Cancelled = "Cancelled",
        /// Cancelled without rollback.
        ForceCancelled = "ForceCancelled",
    }
}

impl OperationState {
    /// Whether the operation has stopped making progress.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            OperationState::Completed
                | OperationState::Faulted
                | OperationState::Cancelled
                | OperationState::ForceCancelled
        )
    }
}

open_enum! {
    /// Kind of fault operation.
    pub enum OperationType {
        /// Invalid.
        Invalid = "Invalid",
        /// Partition data loss.
        PartitionDataLoss = "PartitionDataLoss",
        /// Partition quorum loss.
        PartitionQuorumLoss = "PartitionQuorumLoss",
        /// Partition restart.
        PartitionRestart = "PartitionRestart",
        /// Node start or stop.
        NodeTransition = "NodeTransition",
    }
}

open_enum! {
    /// How much data to lose.
    pub enum DataLossMode {
        /// Invalid.
        Invalid = "Invalid",
        /// Only the primary's progress is lost.
        PartialDataLoss = "PartialDataLoss",
        /// All replicas and state are lost.
        FullDataLoss = "FullDataLoss",
    }
}

open_enum! {
    /// Which replicas to take down for quorum loss.
    pub enum QuorumLossMode {
        /// Invalid.
        Invalid = "Invalid",
        /// A quorum of replicas.
        QuorumReplicas = "QuorumReplicas",
        /// All but the primary.
        AllReplicas = "AllReplicas",
    }
}

open_enum! {
    /// Which replicas to restart.
    pub enum RestartPartitionMode {
        /// Invalid.
        Invalid = "Invalid",
        /// Every replica or instance.
        AllReplicasOrInstances = "AllReplicasOrInstances",
        /// Only active secondaries.
        OnlyActiveSecondaries = "OnlyActiveSecondaries",
    }
}

open_enum! {
    /// Direction of a node transition.
    pub enum NodeTransitionType {
        /// Invalid.
        Invalid = "Invalid",
        /// Start a stopped node.
        Start = "Start",
        /// Stop a running node.
        Stop = "Stop",
    }
}

/// Partition targeted by a fault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SelectedPartition {
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
}

/// Outcome of a partition fault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionFaultResult {
    /// Zero on success, otherwise a fabric error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    /// Partition the fault was applied to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_partition: Option<SelectedPartition>,
}

/// Progress of `start_data_loss`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionDataLossProgress {
    /// Operation state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<OperationState>,
    /// Result once the operation finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoke_data_loss_result: Option<PartitionFaultResult>,
}

/// Progress of `start_quorum_loss`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionQuorumLossProgress {
    /// Operation state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<OperationState>,
    /// Result once the operation finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoke_quorum_loss_result: Option<PartitionFaultResult>,
}

/// Progress of `start_partition_restart`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionRestartProgress {
    /// Operation state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<OperationState>,
    /// Result once the operation finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_partition_result: Option<PartitionFaultResult>,
}

/// Node affected by a transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeResult {
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Node instance id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_instance_id: Option<String>,
}

/// Outcome of a node transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeTransitionResult {
    /// Zero on success, otherwise a fabric error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    /// Node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_result: Option<NodeResult>,
}

/// Progress of `start_node_transition`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeTransitionProgress {
    /// Operation state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<OperationState>,
    /// Result once the operation finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_transition_result: Option<NodeTransitionResult>,
}

/// A fault operation known to the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct OperationStatus {
    /// Caller-chosen id.
    pub operation_id: Uuid,
    /// State.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<OperationState>,
    /// Kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<OperationType>,
}

/// Optional parameters of `start_data_loss`.
pub type StartDataLossOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_data_loss_progress`.
pub type GetDataLossProgressOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `start_quorum_loss`.
pub type StartQuorumLossOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_quorum_loss_progress`.
pub type GetQuorumLossProgressOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `start_partition_restart`.
pub type StartPartitionRestartOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_partition_restart_progress`.
pub type GetPartitionRestartProgressOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `start_node_transition`.
pub type StartNodeTransitionOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_node_transition_progress`.
pub type GetNodeTransitionProgressOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_fault_operation_list`.
pub type GetFaultOperationListOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `cancel_operation`.
pub type CancelOperationOptionalParams = TimeoutOptionalParams;

/// Response of `get_data_loss_progress`.
pub type GetDataLossProgressResponse = PartitionDataLossProgress;
/// Response of `get_quorum_loss_progress`.
pub type GetQuorumLossProgressResponse = PartitionQuorumLossProgress;
/// Response of `get_partition_restart_progress`.
pub type GetPartitionRestartProgressResponse = PartitionRestartProgress;
/// Response of `get_node_transition_progress`.
pub type GetNodeTransitionProgressResponse = NodeTransitionProgress;
/// Response of `get_fault_operation_list`.
pub type GetFaultOperationListResponse = Vec<OperationStatus>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_loss_progress_decodes_result() {
        let progress: PartitionDataLossProgress = serde_json::from_value(json!({
            "State": "Completed",
            "InvokeDataLossResult": {
                "ErrorCode": 0,
                "SelectedPartition": {
                    "ServiceName": "fabric:/app/svc",
                    "PartitionId": "1daae3f5-7fd6-42e9-b1ba-8c05f873994d"
                }
            }
        }))
        .expect("decode");
        assert!(progress.state.as_ref().is_some_and(OperationState::is_finished));
        let result = progress.invoke_data_loss_result.expect("result");
        assert_eq!(result.error_code, Some(0));
    }

    #[test]
    fn operation_list_keeps_type_field() {
        let list: GetFaultOperationListResponse = serde_json::from_value(json!([
            {
                "OperationId": "00000000-0000-0000-0000-000000000001",
                "State": "RollingBack",
                "Type": "NodeTransition"
            }
        ]))
        .expect("decode");
        assert_eq!(list[0].r#type, Some(OperationType::NodeTransition));
        assert!(!list[0].state.as_ref().is_some_and(OperationState::is_finished));
    }
}
