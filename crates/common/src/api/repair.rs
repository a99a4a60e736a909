//! Repair tasks and their approval workflow.
//!
//! A task moves Created → Claimed → Preparing → Approved → Executing →
//! Restoring → Completed. Cancelling a task sends it straight to Restoring
//! (when it already has an impact) or Completed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::filter::RepairTaskStateFilter;
use super::known::{UnknownVariant, open_enum, tagged_union};
use super::params::{TimeoutOptionalParams, optional_params};

open_enum! {
    /// Workflow state of a repair task.
    pub enum RepairTaskState {
        /// Invalid.
        Invalid = "Invalid",
        /// Created by a requester.
        Created = "Created",
        /// Claimed by an executor.
        Claimed = "Claimed",
        /// Impact is being prepared.
        Preparing = "Preparing",
        /// Approved for execution.
        Approved = "Approved",
        /// Being executed.
        Executing = "Executing",
        /// Impact is being restored.
        Restoring = "Restoring",
        /// Finished.
        Completed = "Completed",
    }
}

impl RepairTaskState {
    fn rank(&self) -> Option<u8> {
        match self {
            RepairTaskState::Created => Some(0),
            RepairTaskState::Claimed => Some(1),
            RepairTaskState::Preparing => Some(2),
            RepairTaskState::Approved => Some(3),
            RepairTaskState::Executing => Some(4),
            RepairTaskState::Restoring => Some(5),
            RepairTaskState::Completed => Some(6),
            RepairTaskState::Invalid | RepairTaskState::Unrecognized(_) => None,
        }
    }

    /// Next state in the normal workflow; `None` once completed.
    pub fn successor(&self) -> Option<RepairTaskState> {
        match self {
            RepairTaskState::Created => Some(RepairTaskState::Claimed),
            RepairTaskState::Claimed => Some(RepairTaskState::Preparing),
            RepairTaskState::Preparing => Some(RepairTaskState::Approved),
            RepairTaskState::Approved => Some(RepairTaskState::Executing),
            RepairTaskState::Executing => Some(RepairTaskState::Restoring),
            RepairTaskState::Restoring => Some(RepairTaskState::Completed),
            RepairTaskState::Completed
            | RepairTaskState::Invalid
            | RepairTaskState::Unrecognized(_) => None,
        }
    }

    /// Whether a task in this state may move to `next`.
    ///
    /// Allowed moves are the successor, or a jump forward to Restoring or
    /// Completed as happens when a task is cancelled.
    pub fn can_advance_to(&self, next: &RepairTaskState) -> bool {
        let (Some(from), Some(to)) = (self.rank(), next.rank()) else {
            return false;
        };
        if to <= from {
            return false;
        }
        self.successor().as_ref() == Some(next)
            || matches!(next, RepairTaskState::Restoring | RepairTaskState::Completed)
    }

    /// Whether the task has finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RepairTaskState::Completed)
    }

    /// Filter bit selecting this state in `get_repair_task_list`.
    pub fn filter(&self) -> RepairTaskStateFilter {
        match self {
            RepairTaskState::Created => RepairTaskStateFilter::CREATED,
            RepairTaskState::Claimed => RepairTaskStateFilter::CLAIMED,
            RepairTaskState::Preparing => RepairTaskStateFilter::PREPARING,
            RepairTaskState::Approved => RepairTaskStateFilter::APPROVED,
            RepairTaskState::Executing => RepairTaskStateFilter::EXECUTING,
            RepairTaskState::Restoring => RepairTaskStateFilter::RESTORING,
            RepairTaskState::Completed => RepairTaskStateFilter::COMPLETED,
            RepairTaskState::Invalid | RepairTaskState::Unrecognized(_) => {
                RepairTaskStateFilter::empty()
            }
        }
    }
}

open_enum! {
    /// Final outcome of a repair task.
    pub enum ResultStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Succeeded.
        Succeeded = "Succeeded",
        /// Cancelled.
        Cancelled = "Cancelled",
        /// Interrupted.
        Interrupted = "Interrupted",
        /// Failed.
        Failed = "Failed",
        /// Not yet known.
        Pending = "Pending",
    }
}

open_enum! {
    /// Health check progress around the impact.
    pub enum RepairTaskHealthCheckState {
        /// Not started.
        NotStarted = "NotStarted",
        /// Running.
        InProgress = "InProgress",
        /// Passed.
        Succeeded = "Succeeded",
        /// Skipped.
        Skipped = "Skipped",
        /// Timed out.
        TimedOut = "TimedOut",
    }
}

open_enum! {
    /// Expected impact of a repair on a node.
    pub enum ImpactLevel {
        /// Invalid.
        Invalid = "Invalid",
        /// No impact.
        None = "None",
        /// Node restart.
        Restart = "Restart",
        /// Data on the node is lost.
        RemoveData = "RemoveData",
        /// Node leaves the cluster.
        RemoveNode = "RemoveNode",
    }
}

/// Entities a repair targets, discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "Kind")]
pub enum RepairTargetDescription {
    /// A list of nodes.
    Node {
        /// Node names.
        #[serde(rename = "NodeNames", default)]
        node_names: Vec<String>,
    },
    /// Target kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<RepairTargetDescription>),
}

tagged_union!(RepairTargetDescription, "Kind", ["Node"]);

/// Impact on one node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NodeImpact {
    /// Node name.
    pub node_name: String,
    /// Impact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_level: Option<ImpactLevel>,
}

/// Impact of a repair, discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "Kind")]
pub enum RepairImpactDescription {
    /// Impact on nodes.
    Node {
        /// Per-node impact.
        #[serde(rename = "NodeImpactList", default)]
        node_impact_list: Vec<NodeImpact>,
    },
    /// Impact kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<RepairImpactDescription>),
}

tagged_union!(RepairImpactDescription, "Kind", ["Node"]);

/// Timestamps of each workflow transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RepairTaskHistory {
    /// Created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_utc_timestamp: Option<DateTime<Utc>>,
    /// Claimed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_utc_timestamp: Option<DateTime<Utc>>,
    /// Preparing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparing_utc_timestamp: Option<DateTime<Utc>>,
    /// Approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_utc_timestamp: Option<DateTime<Utc>>,
    /// Executing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executing_utc_timestamp: Option<DateTime<Utc>>,
    /// Restoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restoring_utc_timestamp: Option<DateTime<Utc>>,
    /// Completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_utc_timestamp: Option<DateTime<Utc>>,
    /// Preparing health check started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparing_health_check_start_utc_timestamp: Option<DateTime<Utc>>,
    /// Preparing health check ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparing_health_check_end_utc_timestamp: Option<DateTime<Utc>>,
    /// Restoring health check started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restoring_health_check_start_utc_timestamp: Option<DateTime<Utc>>,
    /// Restoring health check ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restoring_health_check_end_utc_timestamp: Option<DateTime<Utc>>,
}

/// A repair task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RepairTask {
    /// Task id.
    pub task_id: String,
    /// Version used for optimistic concurrency; `"0"` skips the check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Workflow state.
    pub state: RepairTaskState,
    /// Cancellation flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<i32>,
    /// Requested action.
    pub action: String,
    /// Target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<RepairTargetDescription>,
    /// Executor that claimed the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor: Option<String>,
    /// Executor-private data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor_data: Option<String>,
    /// Impact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<RepairImpactDescription>,
    /// Outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_status: Option<ResultStatus>,
    /// Outcome code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<i32>,
    /// Outcome details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_details: Option<String>,
    /// Transition timestamps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<RepairTaskHistory>,
    /// Preparing health check state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparing_health_check_state: Option<RepairTaskHealthCheckState>,
    /// Restoring health check state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restoring_health_check_state: Option<RepairTaskHealthCheckState>,
    /// Run a health check before approval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perform_preparing_health_check: Option<bool>,
    /// Run a health check before completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perform_restoring_health_check: Option<bool>,
}

impl RepairTask {
    /// A new task in the Created state targeting `nodes`.
    pub fn for_nodes(
        task_id: impl Into<String>,
        action: impl Into<String>,
        nodes: Vec<String>,
    ) -> Self {
        RepairTask {
            task_id: task_id.into(),
            version: None,
            description: None,
            state: RepairTaskState::Created,
            flags: None,
            action: action.into(),
            target: Some(RepairTargetDescription::Node { node_names: nodes }),
            executor: None,
            executor_data: None,
            impact: None,
            result_status: None,
            result_code: None,
            result_details: None,
            history: None,
            preparing_health_check_state: None,
            restoring_health_check_state: None,
            perform_preparing_health_check: None,
            perform_restoring_health_check: None,
        }
    }
}

/// Body of `cancel_repair_task`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RepairTaskCancelDescription {
    /// Task id.
    pub task_id: String,
    /// Expected version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Abort an approved or executing task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_abort: Option<bool>,
}

/// Body of `force_approve_repair_task`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RepairTaskApproveDescription {
    /// Task id.
    pub task_id: String,
    /// Expected version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Body of `delete_repair_task`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RepairTaskDeleteDescription {
    /// Task id.
    pub task_id: String,
    /// Expected version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Body of `update_repair_task_health_policy`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RepairTaskUpdateHealthPolicyDescription {
    /// Task id.
    pub task_id: String,
    /// Expected version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Run a health check before approval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perform_preparing_health_check: Option<bool>,
    /// Run a health check before completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perform_restoring_health_check: Option<bool>,
}

/// New version of a task after a write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RepairTaskUpdateInfo {
    /// Version.
    pub version: String,
}

optional_params! {
    /// Optional parameters of `get_repair_task_list`.
    pub struct GetRepairTaskListOptionalParams {
        /// Task id prefix.
        task_id_filter: String => "TaskIdFilter",
        /// States to include.
        state_filter: RepairTaskStateFilter => "StateFilter",
        /// Executor name.
        executor_filter: String => "ExecutorFilter",
    }
}

/// Optional parameters of `create_repair_task`.
pub type CreateRepairTaskOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `cancel_repair_task`.
pub type CancelRepairTaskOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `delete_repair_task`.
pub type DeleteRepairTaskOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `force_approve_repair_task`.
pub type ForceApproveRepairTaskOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `update_repair_task_health_policy`.
pub type UpdateRepairTaskHealthPolicyOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `update_repair_execution_state`.
pub type UpdateRepairExecutionStateOptionalParams = TimeoutOptionalParams;

/// Response of `create_repair_task`.
pub type CreateRepairTaskResponse = RepairTaskUpdateInfo;
/// Response of `cancel_repair_task`.
pub type CancelRepairTaskResponse = RepairTaskUpdateInfo;
/// Response of `force_approve_repair_task`.
pub type ForceApproveRepairTaskResponse = RepairTaskUpdateInfo;
/// Response of `update_repair_task_health_policy`.
pub type UpdateRepairTaskHealthPolicyResponse = RepairTaskUpdateInfo;
/// Response of `update_repair_execution_state`.
pub type UpdateRepairExecutionStateResponse = RepairTaskUpdateInfo;
/// Response of `get_repair_task_list`.
pub type GetRepairTaskListResponse = Vec<RepairTask>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn successor_walks_the_whole_workflow() {
        let mut state = RepairTaskState::Created;
        let mut seen = vec![state.clone()];
        while let Some(next) = state.successor() {
            assert!(state.can_advance_to(&next));
            seen.push(next.clone());
            state = next;
        }
        let names: Vec<_> = seen.iter().map(RepairTaskState::as_str).collect();
        assert_eq!(
            names,
            [
                "Created",
                "Claimed",
                "Preparing",
                "Approved",
                "Executing",
                "Restoring",
                "Completed"
            ]
        );
        assert!(state.is_terminal());
    }

    #[test]
    fn cancellation_may_skip_to_restoring_or_completed() {
        assert!(RepairTaskState::Claimed.can_advance_to(&RepairTaskState::Completed));
        assert!(RepairTaskState::Approved.can_advance_to(&RepairTaskState::Restoring));
        assert!(!RepairTaskState::Created.can_advance_to(&RepairTaskState::Approved));
        assert!(!RepairTaskState::Executing.can_advance_to(&RepairTaskState::Claimed));
        assert!(!RepairTaskState::Completed.can_advance_to(&RepairTaskState::Completed));
        assert!(
            !RepairTaskState::Unrecognized("Paused".into())
                .can_advance_to(&RepairTaskState::Completed)
        );
    }

    #[test]
    fn node_task_encodes_target_union() {
        let task = RepairTask::for_nodes("Reboot/1", "System.Reboot", vec!["_Node_0".into()]);
        assert_eq!(
            serde_json::to_value(&task).expect("encode"),
            json!({
                "TaskId": "Reboot/1",
                "State": "Created",
                "Action": "System.Reboot",
                "Target": {"Kind": "Node", "NodeNames": ["_Node_0"]}
            })
        );
    }

    #[test]
    fn state_filters_combine() {
        let filter = RepairTaskState::Created.filter() | RepairTaskState::Completed.filter();
        assert_eq!(filter.bits(), 65);
        assert!(RepairTaskStateFilter::ACTIVE.contains(RepairTaskState::Executing.filter()));
    }
}
