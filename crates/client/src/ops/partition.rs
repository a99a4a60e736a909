use common::api::health::{ApplicationHealthPolicy, HealthInformation};
use common::api::partition::*;
use uuid::Uuid;

use crate::{FabricClient, Result};

impl FabricClient {
    pub async fn get_partition_info_list(
        &self,
        service_id: &str,
        params: &GetPartitionInfoListOptionalParams,
    ) -> Result<GetPartitionInfoListResponse> {
        let req = self.get(&["Services", service_id, "$", "GetPartitions"], "6.0", params);
        self.send_json("get_partition_info_list", req).await
    }

    pub async fn get_partition_info(
        &self,
        partition_id: Uuid,
        params: &GetPartitionInfoOptionalParams,
    ) -> Result<Option<GetPartitionInfoResponse>> {
        let id = partition_id.to_string();
        let req = self.get(&["Partitions", &id], "6.0", params);
        self.send_optional_json("get_partition_info", req).await
    }

    /// Name of the service a partition belongs to.
    pub async fn get_service_name_info(
        &self,
        partition_id: Uuid,
        params: &GetServiceNameInfoOptionalParams,
    ) -> Result<GetServiceNameInfoResponse> {
        let id = partition_id.to_string();
        let req = self.get(&["Partitions", &id, "$", "GetServiceName"], "6.0", params);
        self.send_json("get_service_name_info", req).await
    }

    pub async fn get_partition_health(
        &self,
        partition_id: Uuid,
        params: &GetPartitionHealthOptionalParams,
    ) -> Result<GetPartitionHealthResponse> {
        let id = partition_id.to_string();
        let req = self.get(&["Partitions", &id, "$", "GetHealth"], "6.0", params);
        self.send_json("get_partition_health", req).await
    }

    pub async fn get_partition_health_using_policy(
        &self,
        partition_id: Uuid,
        policy: Option<&ApplicationHealthPolicy>,
        params: &GetPartitionHealthUsingPolicyOptionalParams,
    ) -> Result<GetPartitionHealthUsingPolicyResponse> {
        let id = partition_id.to_string();
        let mut req = self.post(&["Partitions", &id, "$", "GetHealth"], "6.0", params);
        if let Some(policy) = policy {
            req = req.json(policy);
        }
        self.send_json("get_partition_health_using_policy", req)
            .await
    }

    pub async fn report_partition_health(
        &self,
        partition_id: Uuid,
        health_information: &HealthInformation,
        params: &ReportPartitionHealthOptionalParams,
    ) -> Result<()> {
        let id = partition_id.to_string();
        let req = self
            .post(&["Partitions", &id, "$", "ReportHealth"], "6.0", params)
            .json(health_information);
        self.send_empty("report_partition_health", req).await
    }

    pub async fn get_partition_load_information(
        &self,
        partition_id: Uuid,
        params: &GetPartitionLoadInformationOptionalParams,
    ) -> Result<GetPartitionLoadInformationResponse> {
        let id = partition_id.to_string();
        let req = self.get(&["Partitions", &id, "$", "GetLoadInformation"], "6.0", params);
        self.send_json("get_partition_load_information", req).await
    }

    /// Resets reported load to the defaults from the service description.
    pub async fn reset_partition_load(
        &self,
        partition_id: Uuid,
        params: &ResetPartitionLoadOptionalParams,
    ) -> Result<()> {
        let id = partition_id.to_string();
        let req = self.post(&["Partitions", &id, "$", "ResetLoad"], "6.0", params);
        self.send_empty("reset_partition_load", req).await
    }

    /// Asks the cluster to recover a partition stuck in quorum loss.
    pub async fn recover_partition(
        &self,
        partition_id: Uuid,
        params: &RecoverPartitionOptionalParams,
    ) -> Result<()> {
        let id = partition_id.to_string();
        let req = self.post(&["Partitions", &id, "$", "Recover"], "6.0", params);
        self.send_empty("recover_partition", req).await
    }

    pub async fn recover_service_partitions(
        &self,
        service_id: &str,
        params: &RecoverServicePartitionsOptionalParams,
    ) -> Result<()> {
        let req = self.post(
            &["Services", "$", service_id, "$", "GetPartitions", "$", "Recover"],
            "6.0",
            params,
        );
        self.send_empty("recover_service_partitions", req).await
    }

    pub async fn recover_system_partitions(
        &self,
        params: &RecoverSystemPartitionsOptionalParams,
    ) -> Result<()> {
        let req = self.post(&["$", "RecoverSystemPartitions"], "6.0", params);
        self.send_empty("recover_system_partitions", req).await
    }

    pub async fn recover_all_partitions(
        &self,
        params: &RecoverAllPartitionsOptionalParams,
    ) -> Result<()> {
        let req = self.post(&["$", "RecoverAllPartitions"], "6.0", params);
        self.send_empty("recover_all_partitions", req).await
    }

    /// Moves the primary to `params.node_name`, or to a node the cluster
    /// picks when unset.
    pub async fn move_primary_replica(
        &self,
        partition_id: Uuid,
        params: &MovePrimaryReplicaOptionalParams,
    ) -> Result<()> {
        let id = partition_id.to_string();
        let req = self.post(&["Partitions", &id, "$", "MovePrimaryReplica"], "6.5", params);
        self.send_empty("move_primary_replica", req).await
    }

    pub async fn move_secondary_replica(
        &self,
        partition_id: Uuid,
        current_node_name: &str,
        params: &MoveSecondaryReplicaOptionalParams,
    ) -> Result<()> {
        let id = partition_id.to_string();
        let req = self
            .post(&["Partitions", &id, "$", "MoveSecondaryReplica"], "6.5", params)
            .query(&[("CurrentNodeName", current_node_name)]);
        self.send_empty("move_secondary_replica", req).await
    }

    /// Moves a stateless instance. Without `current_node_name` the cluster
    /// picks the instance to move.
    pub async fn move_instance(
        &self,
        service_id: &str,
        partition_id: Uuid,
        current_node_name: Option<&str>,
        params: &MoveInstanceOptionalParams,
    ) -> Result<()> {
        let id = partition_id.to_string();
        let mut req = self.post(
            &["Services", service_id, "$", "GetPartitions", &id, "$", "MoveInstance"],
            "8.0",
            params,
        );
        if let Some(node) = current_node_name {
            req = req.query(&[("CurrentNodeName", node)]);
        }
        self.send_empty("move_instance", req).await
    }

    /// Overrides the load of the listed partitions. The result lists per
    /// partition outcomes; a failed entry does not fail the call.
    pub async fn update_partition_load(
        &self,
        loads: &[PartitionMetricLoadDescription],
        params: &UpdatePartitionLoadOptionalParams,
    ) -> Result<UpdatePartitionLoadResponse> {
        let req = self
            .post(&["$", "UpdatePartitionLoad"], "7.2", params)
            .json(loads);
        self.send_json("update_partition_load", req).await
    }
}
