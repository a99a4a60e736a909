use common::api::health::{ApplicationHealthPolicy, HealthInformation};
use common::api::replica::*;
use common::api::service::ServiceKind;
use uuid::Uuid;

use crate::{FabricClient, Result};

impl FabricClient {
    pub async fn get_replica_info_list(
        &self,
        partition_id: Uuid,
        params: &GetReplicaInfoListOptionalParams,
    ) -> Result<GetReplicaInfoListResponse> {
        let id = partition_id.to_string();
        let req = self.get(&["Partitions", &id, "$", "GetReplicas"], "6.0", params);
        self.send_json("get_replica_info_list", req).await
    }

    pub async fn get_replica_info(
        &self,
        partition_id: Uuid,
        replica_id: &str,
        params: &GetReplicaInfoOptionalParams,
    ) -> Result<Option<GetReplicaInfoResponse>> {
        let id = partition_id.to_string();
        let req = self.get(&["Partitions", &id, "$", "GetReplicas", replica_id], "6.0", params);
        self.send_optional_json("get_replica_info", req).await
    }

    pub async fn get_replica_health(
        &self,
        partition_id: Uuid,
        replica_id: &str,
        params: &GetReplicaHealthOptionalParams,
    ) -> Result<GetReplicaHealthResponse> {
        let id = partition_id.to_string();
        let req = self.get(
            &["Partitions", &id, "$", "GetReplicas", replica_id, "$", "GetHealth"],
            "6.0",
            params,
        );
        self.send_json("get_replica_health", req).await
    }

    pub async fn get_replica_health_using_policy(
        &self,
        partition_id: Uuid,
        replica_id: &str,
        policy: Option<&ApplicationHealthPolicy>,
        params: &GetReplicaHealthUsingPolicyOptionalParams,
    ) -> Result<GetReplicaHealthUsingPolicyResponse> {
        let id = partition_id.to_string();
        let mut req = self.post(
            &["Partitions", &id, "$", "GetReplicas", replica_id, "$", "GetHealth"],
            "6.0",
            params,
        );
        if let Some(policy) = policy {
            req = req.json(policy);
        }
        self.send_json("get_replica_health_using_policy", req).await
    }

    /// Reports health on a replica; the cluster needs the partition's
    /// `service_kind` to route the report.
    pub async fn report_replica_health(
        &self,
        partition_id: Uuid,
        replica_id: &str,
        service_kind: &ServiceKind,
        health_information: &HealthInformation,
        params: &ReportReplicaHealthOptionalParams,
    ) -> Result<()> {
        let id = partition_id.to_string();
        let req = self
            .post(
                &["Partitions", &id, "$", "GetReplicas", replica_id, "$", "ReportHealth"],
                "6.0",
                params,
            )
            .query(&[("ServiceKind", service_kind.as_str())])
            .json(health_information);
        self.send_empty("report_replica_health", req).await
    }
}
