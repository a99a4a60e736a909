use common::api::application::*;
use common::api::health::{ApplicationHealthPolicy, HealthInformation};

use crate::{FabricClient, Result, collect_pages};

impl FabricClient {
    pub async fn create_application(
        &self,
        description: &ApplicationDescription,
        params: &CreateApplicationOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Applications", "$", "Create"], "6.0", params)
            .json(description);
        self.send_empty("create_application", req).await
    }

    /// Deletes the application and its services. `force_remove` skips the
    /// graceful close of replicas.
    pub async fn delete_application(
        &self,
        application_id: &str,
        params: &DeleteApplicationOptionalParams,
    ) -> Result<()> {
        let req = self.post(&["Applications", application_id, "$", "Delete"], "6.0", params);
        self.send_empty("delete_application", req).await
    }

    pub async fn get_application_load_info(
        &self,
        application_id: &str,
        params: &GetApplicationLoadInfoOptionalParams,
    ) -> Result<Option<GetApplicationLoadInfoResponse>> {
        let req = self.get(
            &["Applications", application_id, "$", "GetLoadInformation"],
            "6.0",
            params,
        );
        self.send_optional_json("get_application_load_info", req).await
    }

    pub async fn get_application_info_list(
        &self,
        params: &GetApplicationInfoListOptionalParams,
    ) -> Result<GetApplicationInfoListResponse> {
        let req = self.get(&["Applications"], "6.1", params);
        self.send_json("get_application_info_list", req).await
    }

    pub async fn get_all_applications(
        &self,
        params: &GetApplicationInfoListOptionalParams,
    ) -> Result<Vec<ApplicationInfo>> {
        collect_pages(|token| {
            let page_params = GetApplicationInfoListOptionalParams {
                continuation_token: token,
                ..params.clone()
            };
            async move { self.get_application_info_list(&page_params).await }
        })
        .await
    }

    /// `None` when no application has this id.
    pub async fn get_application_info(
        &self,
        application_id: &str,
        params: &GetApplicationInfoOptionalParams,
    ) -> Result<Option<GetApplicationInfoResponse>> {
        let req = self.get(&["Applications", application_id], "6.0", params);
        self.send_optional_json("get_application_info", req).await
    }

    pub async fn get_application_health(
        &self,
        application_id: &str,
        params: &GetApplicationHealthOptionalParams,
    ) -> Result<GetApplicationHealthResponse> {
        let req = self.get(&["Applications", application_id, "$", "GetHealth"], "6.0", params);
        self.send_json("get_application_health", req).await
    }

    pub async fn get_application_health_using_policy(
        &self,
        application_id: &str,
        policy: Option<&ApplicationHealthPolicy>,
        params: &GetApplicationHealthUsingPolicyOptionalParams,
    ) -> Result<GetApplicationHealthUsingPolicyResponse> {
        let mut req = self.post(&["Applications", application_id, "$", "GetHealth"], "6.0", params);
        if let Some(policy) = policy {
            req = req.json(policy);
        }
        self.send_json("get_application_health_using_policy", req)
            .await
    }

    pub async fn report_application_health(
        &self,
        application_id: &str,
        health_information: &HealthInformation,
        params: &ReportApplicationHealthOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Applications", application_id, "$", "ReportHealth"], "6.0", params)
            .json(health_information);
        self.send_empty("report_application_health", req).await
    }

    pub async fn start_application_upgrade(
        &self,
        application_id: &str,
        description: &ApplicationUpgradeDescription,
        params: &StartApplicationUpgradeOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Applications", application_id, "$", "Upgrade"], "6.0", params)
            .json(description);
        self.send_empty("start_application_upgrade", req).await
    }

    pub async fn get_application_upgrade(
        &self,
        application_id: &str,
        params: &GetApplicationUpgradeOptionalParams,
    ) -> Result<GetApplicationUpgradeResponse> {
        let req = self.get(
            &["Applications", application_id, "$", "GetUpgradeProgress"],
            "6.0",
            params,
        );
        self.send_json("get_application_upgrade", req).await
    }

    pub async fn update_application_upgrade(
        &self,
        application_id: &str,
        description: &ApplicationUpgradeUpdateDescription,
        params: &UpdateApplicationUpgradeOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Applications", application_id, "$", "UpdateUpgrade"], "6.0", params)
            .json(description);
        self.send_empty("update_application_upgrade", req).await
    }

    /// Changes capacity, metrics or parameters of a running application.
    pub async fn update_application(
        &self,
        application_id: &str,
        description: &ApplicationUpdateDescription,
        params: &UpdateApplicationOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Applications", application_id, "$", "Update"], "8.1", params)
            .json(description);
        self.send_empty("update_application", req).await
    }

    pub async fn resume_application_upgrade(
        &self,
        application_id: &str,
        description: &ResumeApplicationUpgradeDescription,
        params: &ResumeApplicationUpgradeOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(
                &["Applications", application_id, "$", "MoveToNextUpgradeDomain"],
                "6.0",
                params,
            )
            .json(description);
        self.send_empty("resume_application_upgrade", req).await
    }

    pub async fn rollback_application_upgrade(
        &self,
        application_id: &str,
        params: &RollbackApplicationUpgradeOptionalParams,
    ) -> Result<()> {
        let req = self.post(
            &["Applications", application_id, "$", "RollbackUpgrade"],
            "6.0",
            params,
        );
        self.send_empty("rollback_application_upgrade", req).await
    }

    /// Name of the application that owns a service.
    pub async fn get_application_name_info(
        &self,
        service_id: &str,
        params: &GetApplicationNameInfoOptionalParams,
    ) -> Result<GetApplicationNameInfoResponse> {
        let req = self.get(&["Services", service_id, "$", "GetApplicationName"], "6.0", params);
        self.send_json("get_application_name_info", req).await
    }
}
