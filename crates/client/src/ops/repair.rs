use common::api::repair::*;

use crate::{FabricClient, Result};

impl FabricClient {
    /// Creates a repair task in `Created` state; returns the new version.
    pub async fn create_repair_task(
        &self,
        task: &RepairTask,
        params: &CreateRepairTaskOptionalParams,
    ) -> Result<CreateRepairTaskResponse> {
        let req = self.post(&["$", "CreateRepairTask"], "6.0", params).json(task);
        self.send_json("create_repair_task", req).await
    }

    pub async fn cancel_repair_task(
        &self,
        description: &RepairTaskCancelDescription,
        params: &CancelRepairTaskOptionalParams,
    ) -> Result<CancelRepairTaskResponse> {
        let req = self
            .post(&["$", "CancelRepairTask"], "6.0", params)
            .json(description);
        self.send_json("cancel_repair_task", req).await
    }

    pub async fn force_approve_repair_task(
        &self,
        description: &RepairTaskApproveDescription,
        params: &ForceApproveRepairTaskOptionalParams,
    ) -> Result<ForceApproveRepairTaskResponse> {
        let req = self
            .post(&["$", "ForceApproveRepairTask"], "6.0", params)
            .json(description);
        self.send_json("force_approve_repair_task", req).await
    }

    /// Deletes a completed repair task.
    pub async fn delete_repair_task(
        &self,
        description: &RepairTaskDeleteDescription,
        params: &DeleteRepairTaskOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["$", "DeleteRepairTask"], "6.0", params)
            .json(description);
        self.send_empty("delete_repair_task", req).await
    }

    pub async fn get_repair_task_list(
        &self,
        params: &GetRepairTaskListOptionalParams,
    ) -> Result<GetRepairTaskListResponse> {
        let req = self.get(&["$", "GetRepairTaskList"], "6.0", params);
        self.send_json("get_repair_task_list", req).await
    }

    pub async fn update_repair_task_health_policy(
        &self,
        description: &RepairTaskUpdateHealthPolicyDescription,
        params: &UpdateRepairTaskHealthPolicyOptionalParams,
    ) -> Result<UpdateRepairTaskHealthPolicyResponse> {
        let req = self
            .post(&["$", "UpdateRepairTaskHealthPolicy"], "6.0", params)
            .json(description);
        self.send_json("update_repair_task_health_policy", req).await
    }

    /// Used by repair executors to move a task through its states. The
    /// transition is checked locally before the request is sent; keeping the
    /// current state only updates executor data.
    pub async fn update_repair_execution_state(
        &self,
        current: &RepairTaskState,
        task: &RepairTask,
        params: &UpdateRepairExecutionStateOptionalParams,
    ) -> Result<UpdateRepairExecutionStateResponse> {
        if *current != task.state && !current.can_advance_to(&task.state) {
            return Err(crate::ClientError::InvalidArgument(format!(
                "repair task {} cannot move from {} to {}",
                task.task_id, current, task.state
            )));
        }
        let req = self
            .post(&["$", "UpdateRepairExecutionState"], "6.0", params)
            .json(task);
        self.send_json("update_repair_execution_state", req).await
    }
}
