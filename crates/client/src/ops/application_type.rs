use common::api::application_type::*;

use crate::{FabricClient, Result};

impl FabricClient {
    pub async fn get_application_type_info_list(
        &self,
        params: &GetApplicationTypeInfoListOptionalParams,
    ) -> Result<GetApplicationTypeInfoListResponse> {
        let req = self.get(&["ApplicationTypes"], "6.0", params);
        self.send_json("get_application_type_info_list", req).await
    }

    /// Versions of one application type.
    pub async fn get_application_type_info_list_by_name(
        &self,
        application_type_name: &str,
        params: &GetApplicationTypeInfoListByNameOptionalParams,
    ) -> Result<GetApplicationTypeInfoListByNameResponse> {
        let req = self.get(&["ApplicationTypes", application_type_name], "6.0", params);
        self.send_json("get_application_type_info_list_by_name", req)
            .await
    }

    /// Provisions from the image store or from an external `.sfpkg` URI,
    /// depending on the description's kind.
    pub async fn provision_application_type(
        &self,
        description: &ProvisionApplicationTypeDescription,
        params: &ProvisionApplicationTypeOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["ApplicationTypes", "$", "Provision"], "6.2", params)
            .json(description);
        self.send_empty("provision_application_type", req).await
    }

    pub async fn unprovision_application_type(
        &self,
        application_type_name: &str,
        description: &UnprovisionApplicationTypeDescriptionInfo,
        params: &UnprovisionApplicationTypeOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(
                &["ApplicationTypes", application_type_name, "$", "Unprovision"],
                "6.0",
                params,
            )
            .json(description);
        self.send_empty("unprovision_application_type", req).await
    }

    pub async fn get_service_type_info_list(
        &self,
        application_type_name: &str,
        application_type_version: &str,
        params: &GetServiceTypeInfoListOptionalParams,
    ) -> Result<GetServiceTypeInfoListResponse> {
        let req = self
            .get(
                &["ApplicationTypes", application_type_name, "$", "GetServiceTypes"],
                "6.0",
                params,
            )
            .query(&[("ApplicationTypeVersion", application_type_version)]);
        self.send_json("get_service_type_info_list", req).await
    }

    /// `None` when the service type is not part of that application type
    /// version.
    pub async fn get_service_type_info_by_name(
        &self,
        application_type_name: &str,
        application_type_version: &str,
        service_type_name: &str,
        params: &GetServiceTypeInfoByNameOptionalParams,
    ) -> Result<Option<GetServiceTypeInfoByNameResponse>> {
        let req = self
            .get(
                &[
                    "ApplicationTypes",
                    application_type_name,
                    "$",
                    "GetServiceTypes",
                    service_type_name,
                ],
                "6.0",
                params,
            )
            .query(&[("ApplicationTypeVersion", application_type_version)]);
        self.send_optional_json("get_service_type_info_by_name", req)
            .await
    }

    pub async fn get_service_manifest(
        &self,
        application_type_name: &str,
        application_type_version: &str,
        service_manifest_name: &str,
        params: &GetServiceManifestOptionalParams,
    ) -> Result<GetServiceManifestResponse> {
        let req = self
            .get(
                &["ApplicationTypes", application_type_name, "$", "GetServiceManifest"],
                "6.0",
                params,
            )
            .query(&[
                ("ApplicationTypeVersion", application_type_version),
                ("ServiceManifestName", service_manifest_name),
            ]);
        self.send_json("get_service_manifest", req).await
    }

    pub async fn get_application_manifest(
        &self,
        application_type_name: &str,
        application_type_version: &str,
        params: &GetApplicationManifestOptionalParams,
    ) -> Result<GetApplicationManifestResponse> {
        let req = self
            .get(
                &["ApplicationTypes", application_type_name, "$", "GetApplicationManifest"],
                "6.0",
                params,
            )
            .query(&[("ApplicationTypeVersion", application_type_version)]);
        self.send_json("get_application_manifest", req).await
    }
}
