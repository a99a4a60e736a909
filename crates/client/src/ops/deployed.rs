use common::api::deployed::*;
use common::api::health::{ApplicationHealthPolicy, HealthInformation};
use uuid::Uuid;

use crate::{FabricClient, Result};

/// Identifies one code package of an application deployed on a node.
#[derive(Debug, Clone, Copy)]
pub struct CodePackageRef<'a> {
    pub node_name: &'a str,
    pub application_id: &'a str,
    pub service_manifest_name: &'a str,
    pub code_package_name: &'a str,
}

impl FabricClient {
    pub async fn get_deployed_application_info_list(
        &self,
        node_name: &str,
        params: &GetDeployedApplicationInfoListOptionalParams,
    ) -> Result<GetDeployedApplicationInfoListResponse> {
        let req = self.get(&["Nodes", node_name, "$", "GetApplications"], "6.1", params);
        self.send_json("get_deployed_application_info_list", req)
            .await
    }

    pub async fn get_deployed_application_info(
        &self,
        node_name: &str,
        application_id: &str,
        params: &GetDeployedApplicationInfoOptionalParams,
    ) -> Result<Option<GetDeployedApplicationInfoResponse>> {
        let req = self.get(
            &["Nodes", node_name, "$", "GetApplications", application_id],
            "6.1",
            params,
        );
        self.send_optional_json("get_deployed_application_info", req)
            .await
    }

    pub async fn get_deployed_application_health(
        &self,
        node_name: &str,
        application_id: &str,
        params: &GetDeployedApplicationHealthOptionalParams,
    ) -> Result<GetDeployedApplicationHealthResponse> {
        let req = self.get(
            &["Nodes", node_name, "$", "GetApplications", application_id, "$", "GetHealth"],
            "6.0",
            params,
        );
        self.send_json("get_deployed_application_health", req).await
    }

    pub async fn get_deployed_application_health_using_policy(
        &self,
        node_name: &str,
        application_id: &str,
        policy: Option<&ApplicationHealthPolicy>,
        params: &GetDeployedApplicationHealthUsingPolicyOptionalParams,
    ) -> Result<GetDeployedApplicationHealthResponse> {
        let mut req = self.post(
            &["Nodes", node_name, "$", "GetApplications", application_id, "$", "GetHealth"],
            "6.0",
            params,
        );
        if let Some(policy) = policy {
            req = req.json(policy);
        }
        self.send_json("get_deployed_application_health_using_policy", req)
            .await
    }

    pub async fn report_deployed_application_health(
        &self,
        node_name: &str,
        application_id: &str,
        health_information: &HealthInformation,
        params: &ReportDeployedApplicationHealthOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(
                &["Nodes", node_name, "$", "GetApplications", application_id, "$", "ReportHealth"],
                "6.0",
                params,
            )
            .json(health_information);
        self.send_empty("report_deployed_application_health", req)
            .await
    }

    pub async fn get_deployed_service_package_info_list(
        &self,
        node_name: &str,
        application_id: &str,
        params: &GetDeployedServicePackageInfoListOptionalParams,
    ) -> Result<GetDeployedServicePackageInfoListResponse> {
        let req = self.get(
            &["Nodes", node_name, "$", "GetApplications", application_id, "$", "GetServicePackages"],
            "6.0",
            params,
        );
        self.send_json("get_deployed_service_package_info_list", req)
            .await
    }

    /// Empty when the package is not deployed on the node.
    pub async fn get_deployed_service_package_info_list_by_name(
        &self,
        node_name: &str,
        application_id: &str,
        service_package_name: &str,
        params: &GetDeployedServicePackageInfoListByNameOptionalParams,
    ) -> Result<GetDeployedServicePackageInfoListByNameResponse> {
        let req = self.get(
            &[
                "Nodes",
                node_name,
                "$",
                "GetApplications",
                application_id,
                "$",
                "GetServicePackages",
                service_package_name,
            ],
            "6.0",
            params,
        );
        self.send_optional_json("get_deployed_service_package_info_list_by_name", req)
            .await
            .map(Option::unwrap_or_default)
    }

    pub async fn get_deployed_service_package_health(
        &self,
        node_name: &str,
        application_id: &str,
        service_package_name: &str,
        params: &GetDeployedServicePackageHealthOptionalParams,
    ) -> Result<GetDeployedServicePackageHealthResponse> {
        let req = self.get(
            &[
                "Nodes",
                node_name,
                "$",
                "GetApplications",
                application_id,
                "$",
                "GetServicePackages",
                service_package_name,
                "$",
                "GetHealth",
            ],
            "6.0",
            params,
        );
        self.send_json("get_deployed_service_package_health", req)
            .await
    }

    pub async fn get_deployed_service_package_health_using_policy(
        &self,
        node_name: &str,
        application_id: &str,
        service_package_name: &str,
        policy: Option<&ApplicationHealthPolicy>,
        params: &GetDeployedServicePackageHealthUsingPolicyOptionalParams,
    ) -> Result<GetDeployedServicePackageHealthResponse> {
        let mut req = self.post(
            &[
                "Nodes",
                node_name,
                "$",
                "GetApplications",
                application_id,
                "$",
                "GetServicePackages",
                service_package_name,
                "$",
                "GetHealth",
            ],
            "6.0",
            params,
        );
        if let Some(policy) = policy {
            req = req.json(policy);
        }
        self.send_json("get_deployed_service_package_health_using_policy", req)
            .await
    }

    pub async fn report_deployed_service_package_health(
        &self,
        node_name: &str,
        application_id: &str,
        service_package_name: &str,
        health_information: &HealthInformation,
        params: &ReportDeployedServicePackageHealthOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(
                &[
                    "Nodes",
                    node_name,
                    "$",
                    "GetApplications",
                    application_id,
                    "$",
                    "GetServicePackages",
                    service_package_name,
                    "$",
                    "ReportHealth",
                ],
                "6.0",
                params,
            )
            .json(health_information);
        self.send_empty("report_deployed_service_package_health", req)
            .await
    }

    /// Pre-downloads a service package's code, config and data to a node.
    pub async fn deploy_service_package_to_node(
        &self,
        node_name: &str,
        description: &DeployServicePackageToNodeDescription,
        params: &DeployServicePackageToNodeOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Nodes", node_name, "$", "DeployServicePackage"], "6.0", params)
            .json(description);
        self.send_empty("deploy_service_package_to_node", req).await
    }

    pub async fn get_deployed_code_package_info_list(
        &self,
        node_name: &str,
        application_id: &str,
        params: &GetDeployedCodePackageInfoListOptionalParams,
    ) -> Result<GetDeployedCodePackageInfoListResponse> {
        let req = self.get(
            &["Nodes", node_name, "$", "GetApplications", application_id, "$", "GetCodePackages"],
            "6.0",
            params,
        );
        self.send_json("get_deployed_code_package_info_list", req)
            .await
    }

    pub async fn restart_deployed_code_package(
        &self,
        node_name: &str,
        application_id: &str,
        description: &RestartDeployedCodePackageDescription,
        params: &RestartDeployedCodePackageOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(
                &[
                    "Nodes",
                    node_name,
                    "$",
                    "GetApplications",
                    application_id,
                    "$",
                    "GetCodePackages",
                    "$",
                    "Restart",
                ],
                "6.0",
                params,
            )
            .json(description);
        self.send_empty("restart_deployed_code_package", req).await
    }

    pub async fn get_container_logs_deployed_on_node(
        &self,
        code_package: CodePackageRef<'_>,
        params: &GetContainerLogsDeployedOnNodeOptionalParams,
    ) -> Result<GetContainerLogsDeployedOnNodeResponse> {
        let req = self
            .get(
                &[
                    "Nodes",
                    code_package.node_name,
                    "$",
                    "GetApplications",
                    code_package.application_id,
                    "$",
                    "GetCodePackages",
                    "$",
                    "ContainerLogs",
                ],
                "6.2",
                params,
            )
            .query(&[
                ("ServiceManifestName", code_package.service_manifest_name),
                ("CodePackageName", code_package.code_package_name),
            ]);
        self.send_json("get_container_logs_deployed_on_node", req)
            .await
    }

    /// Calls the container runtime API of one running code package instance.
    pub async fn invoke_container_api(
        &self,
        code_package: CodePackageRef<'_>,
        code_package_instance_id: &str,
        body: &ContainerApiRequestBody,
        params: &InvokeContainerApiOptionalParams,
    ) -> Result<InvokeContainerApiResponse> {
        let req = self
            .post(
                &[
                    "Nodes",
                    code_package.node_name,
                    "$",
                    "GetApplications",
                    code_package.application_id,
                    "$",
                    "GetCodePackages",
                    "$",
                    "ContainerApi",
                ],
                "6.2",
                params,
            )
            .query(&[
                ("ServiceManifestName", code_package.service_manifest_name),
                ("CodePackageName", code_package.code_package_name),
                ("CodePackageInstanceId", code_package_instance_id),
            ])
            .json(body);
        self.send_json("invoke_container_api", req).await
    }

    /// Empty when nothing matches on the node.
    pub async fn get_deployed_service_replica_info_list(
        &self,
        node_name: &str,
        application_id: &str,
        params: &GetDeployedServiceReplicaInfoListOptionalParams,
    ) -> Result<GetDeployedServiceReplicaInfoListResponse> {
        let req = self.get(
            &["Nodes", node_name, "$", "GetApplications", application_id, "$", "GetReplicas"],
            "6.0",
            params,
        );
        self.send_optional_json("get_deployed_service_replica_info_list", req)
            .await
            .map(Option::unwrap_or_default)
    }

    pub async fn get_deployed_service_replica_detail_info(
        &self,
        node_name: &str,
        partition_id: Uuid,
        replica_id: &str,
        params: &GetDeployedServiceReplicaDetailInfoOptionalParams,
    ) -> Result<GetDeployedServiceReplicaDetailInfoResponse> {
        let pid = partition_id.to_string();
        let req = self.get(
            &[
                "Nodes",
                node_name,
                "$",
                "GetPartitions",
                &pid,
                "$",
                "GetReplicas",
                replica_id,
                "$",
                "GetDetail",
            ],
            "6.0",
            params,
        );
        self.send_json("get_deployed_service_replica_detail_info", req)
            .await
    }

    pub async fn get_deployed_service_replica_detail_info_by_partition_id(
        &self,
        node_name: &str,
        partition_id: Uuid,
        params: &GetDeployedServiceReplicaDetailInfoByPartitionIdOptionalParams,
    ) -> Result<GetDeployedServiceReplicaDetailInfoByPartitionIdResponse> {
        let pid = partition_id.to_string();
        let req = self.get(
            &["Nodes", node_name, "$", "GetPartitions", &pid, "$", "GetReplicas"],
            "6.0",
            params,
        );
        self.send_json(
            "get_deployed_service_replica_detail_info_by_partition_id",
            req,
        )
        .await
    }

    pub async fn restart_replica(
        &self,
        node_name: &str,
        partition_id: Uuid,
        replica_id: &str,
        params: &RestartReplicaOptionalParams,
    ) -> Result<()> {
        let pid = partition_id.to_string();
        let req = self.post(
            &[
                "Nodes",
                node_name,
                "$",
                "GetPartitions",
                &pid,
                "$",
                "GetReplicas",
                replica_id,
                "$",
                "Restart",
            ],
            "6.0",
            params,
        );
        self.send_empty("restart_replica", req).await
    }

    /// Removes a replica from a node. `force_remove` skips the graceful
    /// close and may leave state behind.
    pub async fn remove_replica(
        &self,
        node_name: &str,
        partition_id: Uuid,
        replica_id: &str,
        params: &RemoveReplicaOptionalParams,
    ) -> Result<()> {
        let pid = partition_id.to_string();
        let req = self.post(
            &[
                "Nodes",
                node_name,
                "$",
                "GetPartitions",
                &pid,
                "$",
                "GetReplicas",
                replica_id,
                "$",
                "Delete",
            ],
            "6.0",
            params,
        );
        self.send_empty("remove_replica", req).await
    }

    pub async fn get_deployed_service_type_info_list(
        &self,
        node_name: &str,
        application_id: &str,
        params: &GetDeployedServiceTypeInfoListOptionalParams,
    ) -> Result<GetDeployedServiceTypeInfoListResponse> {
        let req = self.get(
            &["Nodes", node_name, "$", "GetApplications", application_id, "$", "GetServiceTypes"],
            "6.0",
            params,
        );
        self.send_json("get_deployed_service_type_info_list", req)
            .await
    }

    pub async fn get_deployed_service_type_info_by_name(
        &self,
        node_name: &str,
        application_id: &str,
        service_type_name: &str,
        params: &GetDeployedServiceTypeInfoByNameOptionalParams,
    ) -> Result<GetDeployedServiceTypeInfoByNameResponse> {
        let req = self.get(
            &[
                "Nodes",
                node_name,
                "$",
                "GetApplications",
                application_id,
                "$",
                "GetServiceTypes",
                service_type_name,
            ],
            "6.0",
            params,
        );
        self.send_optional_json("get_deployed_service_type_info_by_name", req)
            .await
            .map(Option::unwrap_or_default)
    }
}
