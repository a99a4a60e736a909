use common::api::TimeoutOptionalParams;
use common::api::fault::*;
use common::api::filter::{OperationStateFilter, OperationTypeFilter};
use uuid::Uuid;

use crate::{FabricClient, Result};

/// Partition targeted by a fault operation.
#[derive(Debug, Clone, Copy)]
struct FaultedPartition<'a> {
    service_id: &'a str,
    partition_id: Uuid,
}

impl FabricClient {
    fn partition_fault_request(
        &self,
        target: FaultedPartition<'_>,
        verb: &str,
        post: bool,
        params: &TimeoutOptionalParams,
    ) -> reqwest::RequestBuilder {
        let pid = target.partition_id.to_string();
        let segments = [
            "Faults",
            "Services",
            target.service_id,
            "$",
            "GetPartitions",
            pid.as_str(),
            "$",
            verb,
        ];
        if post {
            self.post(&segments, "6.0", params)
        } else {
            self.get(&segments, "6.0", params)
        }
    }

    /// Induces data loss on a partition. `operation_id` identifies the run
    /// in later progress calls and must be unique.
    pub async fn start_data_loss(
        &self,
        service_id: &str,
        partition_id: Uuid,
        operation_id: Uuid,
        data_loss_mode: &DataLossMode,
        params: &StartDataLossOptionalParams,
    ) -> Result<()> {
        let target = FaultedPartition { service_id, partition_id };
        let req = self
            .partition_fault_request(target, "StartDataLoss", true, params)
            .query(&[
                ("OperationId", operation_id.to_string()),
                ("DataLossMode", data_loss_mode.to_string()),
            ]);
        self.send_empty("start_data_loss", req).await
    }

    pub async fn get_data_loss_progress(
        &self,
        service_id: &str,
        partition_id: Uuid,
        operation_id: Uuid,
        params: &GetDataLossProgressOptionalParams,
    ) -> Result<GetDataLossProgressResponse> {
        let target = FaultedPartition { service_id, partition_id };
        let req = self
            .partition_fault_request(target, "GetDataLossProgress", false, params)
            .query(&[("OperationId", operation_id)]);
        self.send_json("get_data_loss_progress", req).await
    }

    /// Keeps the partition in quorum loss for `quorum_loss_duration_secs`.
    pub async fn start_quorum_loss(
        &self,
        service_id: &str,
        partition_id: Uuid,
        operation_id: Uuid,
        quorum_loss_mode: &QuorumLossMode,
        quorum_loss_duration_secs: u32,
        params: &StartQuorumLossOptionalParams,
    ) -> Result<()> {
        let target = FaultedPartition { service_id, partition_id };
        let req = self
            .partition_fault_request(target, "StartQuorumLoss", true, params)
            .query(&[
                ("OperationId", operation_id.to_string()),
                ("QuorumLossMode", quorum_loss_mode.to_string()),
                ("QuorumLossDuration", quorum_loss_duration_secs.to_string()),
            ]);
        self.send_empty("start_quorum_loss", req).await
    }

    pub async fn get_quorum_loss_progress(
        &self,
        service_id: &str,
        partition_id: Uuid,
        operation_id: Uuid,
        params: &GetQuorumLossProgressOptionalParams,
    ) -> Result<GetQuorumLossProgressResponse> {
        let target = FaultedPartition { service_id, partition_id };
        let req = self
            .partition_fault_request(target, "GetQuorumLossProgress", false, params)
            .query(&[("OperationId", operation_id)]);
        self.send_json("get_quorum_loss_progress", req).await
    }

    pub async fn start_partition_restart(
        &self,
        service_id: &str,
        partition_id: Uuid,
        operation_id: Uuid,
        restart_partition_mode: &RestartPartitionMode,
        params: &StartPartitionRestartOptionalParams,
    ) -> Result<()> {
        let target = FaultedPartition { service_id, partition_id };
        let req = self
            .partition_fault_request(target, "StartRestart", true, params)
            .query(&[
                ("OperationId", operation_id.to_string()),
                ("RestartPartitionMode", restart_partition_mode.to_string()),
            ]);
        self.send_empty("start_partition_restart", req).await
    }

    pub async fn get_partition_restart_progress(
        &self,
        service_id: &str,
        partition_id: Uuid,
        operation_id: Uuid,
        params: &GetPartitionRestartProgressOptionalParams,
    ) -> Result<GetPartitionRestartProgressResponse> {
        let target = FaultedPartition { service_id, partition_id };
        let req = self
            .partition_fault_request(target, "GetRestartProgress", false, params)
            .query(&[("OperationId", operation_id)]);
        self.send_json("get_partition_restart_progress", req).await
    }

    /// Starts or stops a node. `node_instance_id` must match the node's
    /// current instance; `stop_duration_secs` applies to stops only.
    pub async fn start_node_transition(
        &self,
        node_name: &str,
        operation_id: Uuid,
        node_transition_type: &NodeTransitionType,
        node_instance_id: &str,
        stop_duration_secs: u32,
        params: &StartNodeTransitionOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Faults", "Nodes", node_name, "$", "StartTransition", ""], "6.0", params)
            .query(&[
                ("OperationId", operation_id.to_string()),
                ("NodeTransitionType", node_transition_type.to_string()),
                ("NodeInstanceId", node_instance_id.to_string()),
                ("StopDurationInSeconds", stop_duration_secs.to_string()),
            ]);
        self.send_empty("start_node_transition", req).await
    }

    pub async fn get_node_transition_progress(
        &self,
        node_name: &str,
        operation_id: Uuid,
        params: &GetNodeTransitionProgressOptionalParams,
    ) -> Result<GetNodeTransitionProgressResponse> {
        let req = self
            .get(&["Faults", "Nodes", node_name, "$", "GetTransitionProgress"], "6.0", params)
            .query(&[("OperationId", operation_id)]);
        self.send_json("get_node_transition_progress", req).await
    }

    pub async fn get_fault_operation_list(
        &self,
        type_filter: OperationTypeFilter,
        state_filter: OperationStateFilter,
        params: &GetFaultOperationListOptionalParams,
    ) -> Result<GetFaultOperationListResponse> {
        let req = self
            .get(&["Faults", ""], "6.0", params)
            .query(&[
                ("TypeFilter", type_filter.bits()),
                ("StateFilter", state_filter.bits()),
            ]);
        self.send_json("get_fault_operation_list", req).await
    }

    /// Cancels a fault operation. With `force` the cluster skips cleanup and
    /// the affected entities may stay degraded.
    pub async fn cancel_operation(
        &self,
        operation_id: Uuid,
        force: bool,
        params: &CancelOperationOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Faults", "$", "Cancel"], "6.0", params)
            .query(&[("OperationId", operation_id.to_string()), ("Force", force.to_string())]);
        self.send_empty("cancel_operation", req).await
    }
}
