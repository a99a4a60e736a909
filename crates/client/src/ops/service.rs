use common::api::health::{ApplicationHealthPolicy, HealthInformation};
use common::api::service::*;

use crate::{FabricClient, Result, collect_pages};

impl FabricClient {
    pub async fn get_service_info_list(
        &self,
        application_id: &str,
        params: &GetServiceInfoListOptionalParams,
    ) -> Result<GetServiceInfoListResponse> {
        let req = self.get(&["Applications", application_id, "$", "GetServices"], "6.0", params);
        self.send_json("get_service_info_list", req).await
    }

    pub async fn get_all_services(
        &self,
        application_id: &str,
        params: &GetServiceInfoListOptionalParams,
    ) -> Result<Vec<ServiceInfo>> {
        collect_pages(|token| {
            let page_params = GetServiceInfoListOptionalParams {
                continuation_token: token,
                ..params.clone()
            };
            async move {
                self.get_service_info_list(application_id, &page_params)
                    .await
            }
        })
        .await
    }

    /// `None` when the application has no such service.
    pub async fn get_service_info(
        &self,
        application_id: &str,
        service_id: &str,
        params: &GetServiceInfoOptionalParams,
    ) -> Result<Option<GetServiceInfoResponse>> {
        let req = self.get(
            &["Applications", application_id, "$", "GetServices", service_id],
            "6.0",
            params,
        );
        self.send_optional_json("get_service_info", req).await
    }

    pub async fn create_service(
        &self,
        application_id: &str,
        description: &ServiceDescription,
        params: &CreateServiceOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(
                &["Applications", application_id, "$", "GetServices", "$", "Create"],
                "6.0",
                params,
            )
            .json(description);
        self.send_empty("create_service", req).await
    }

    /// Creates a service from a template declared in the application manifest.
    pub async fn create_service_from_template(
        &self,
        application_id: &str,
        description: &ServiceFromTemplateDescription,
        params: &CreateServiceFromTemplateOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(
                &[
                    "Applications",
                    application_id,
                    "$",
                    "GetServices",
                    "$",
                    "CreateFromTemplate",
                ],
                "6.0",
                params,
            )
            .json(description);
        self.send_empty("create_service_from_template", req).await
    }

    pub async fn delete_service(
        &self,
        service_id: &str,
        params: &DeleteServiceOptionalParams,
    ) -> Result<()> {
        let req = self.post(&["Services", service_id, "$", "Delete"], "6.0", params);
        self.send_empty("delete_service", req).await
    }

    pub async fn update_service(
        &self,
        service_id: &str,
        description: &ServiceUpdateDescription,
        params: &UpdateServiceOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Services", service_id, "$", "Update"], "6.0", params)
            .json(description);
        self.send_empty("update_service", req).await
    }

    pub async fn get_service_description(
        &self,
        service_id: &str,
        params: &GetServiceDescriptionOptionalParams,
    ) -> Result<GetServiceDescriptionResponse> {
        let req = self.get(&["Services", service_id, "$", "GetDescription"], "6.0", params);
        self.send_json("get_service_description", req).await
    }

    pub async fn get_service_health(
        &self,
        service_id: &str,
        params: &GetServiceHealthOptionalParams,
    ) -> Result<GetServiceHealthResponse> {
        let req = self.get(&["Services", service_id, "$", "GetHealth"], "6.0", params);
        self.send_json("get_service_health", req).await
    }

    pub async fn get_service_health_using_policy(
        &self,
        service_id: &str,
        policy: Option<&ApplicationHealthPolicy>,
        params: &GetServiceHealthUsingPolicyOptionalParams,
    ) -> Result<GetServiceHealthUsingPolicyResponse> {
        let mut req = self.post(&["Services", service_id, "$", "GetHealth"], "6.0", params);
        if let Some(policy) = policy {
            req = req.json(policy);
        }
        self.send_json("get_service_health_using_policy", req).await
    }

    pub async fn report_service_health(
        &self,
        service_id: &str,
        health_information: &HealthInformation,
        params: &ReportServiceHealthOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Services", service_id, "$", "ReportHealth"], "6.0", params)
            .json(health_information);
        self.send_empty("report_service_health", req).await
    }

    /// Resolves the partition serving a key. Pass the previous result's
    /// `Version` as `previous_rsp_version` to force a refresh after the
    /// cached endpoints stopped answering.
    pub async fn resolve_service(
        &self,
        service_id: &str,
        params: &ResolveServiceOptionalParams,
    ) -> Result<ResolveServiceResponse> {
        let req = self.get(&["Services", service_id, "$", "ResolvePartition"], "6.0", params);
        self.send_json("resolve_service", req).await
    }

    pub async fn get_unplaced_replica_information(
        &self,
        service_id: &str,
        params: &GetUnplacedReplicaInformationOptionalParams,
    ) -> Result<GetUnplacedReplicaInformationResponse> {
        let req = self.get(
            &["Services", service_id, "$", "GetUnplacedReplicaInformation"],
            "6.4",
            params,
        );
        self.send_json("get_unplaced_replica_information", req).await
    }

    /// Partitions ordered by their load for `metric_name`.
    pub async fn get_loaded_partition_info_list(
        &self,
        metric_name: &str,
        params: &GetLoadedPartitionInfoListOptionalParams,
    ) -> Result<GetLoadedPartitionInfoListResponse> {
        let req = self
            .get(&["$", "GetLoadedPartitionInfoList"], "8.0", params)
            .query(&[("MetricName", metric_name)]);
        self.send_json("get_loaded_partition_info_list", req).await
    }
}
