//! Declarative mesh resources under `/Resources`.
//!
//! Create-or-update calls answer `200`, `201` or `202`; an accepted request
//! with no body comes back as `None`.

use common::api::mesh::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{FabricClient, Result};

const API_VERSION: &str = "6.4-preview";

impl FabricClient {
    async fn mesh_upsert<B, T>(
        &self,
        operation: &'static str,
        segments: &[&str],
        description: &B,
        params: &MeshOptionalParams,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.put(segments, API_VERSION, params).json(description);
        self.send_optional_json(operation, req).await
    }

    async fn mesh_get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        segments: &[&str],
        params: &MeshOptionalParams,
    ) -> Result<T> {
        let req = self.get(segments, API_VERSION, params);
        self.send_json(operation, req).await
    }

    async fn mesh_delete(
        &self,
        operation: &'static str,
        segments: &[&str],
        params: &MeshOptionalParams,
    ) -> Result<()> {
        let req = self.delete(segments, API_VERSION, params);
        self.send_empty(operation, req).await
    }

    pub async fn create_or_update_mesh_secret(
        &self,
        secret_name: &str,
        description: &SecretResourceDescription,
        params: &MeshOptionalParams,
    ) -> Result<Option<GetMeshSecretResponse>> {
        let segments = ["Resources", "Secrets", secret_name];
        self.mesh_upsert("create_or_update_mesh_secret", &segments, description, params)
            .await
    }

    pub async fn get_mesh_secret(
        &self,
        secret_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<GetMeshSecretResponse> {
        self.mesh_get("get_mesh_secret", &["Resources", "Secrets", secret_name], params)
            .await
    }

    /// Deleting a secret also deletes all of its values.
    pub async fn delete_mesh_secret(&self, secret_name: &str, params: &MeshOptionalParams) -> Result<()> {
        self.mesh_delete("delete_mesh_secret", &["Resources", "Secrets", secret_name], params)
            .await
    }

    pub async fn list_mesh_secrets(&self, params: &MeshOptionalParams) -> Result<ListMeshSecretsResponse> {
        self.mesh_get("list_mesh_secrets", &["Resources", "Secrets"], params)
            .await
    }

    /// Adds a value version. Versions are immutable once created.
    pub async fn add_mesh_secret_value(
        &self,
        secret_name: &str,
        version: &str,
        value: &SecretValueResourceDescription,
        params: &MeshOptionalParams,
    ) -> Result<Option<GetMeshSecretValueResponse>> {
        let segments = ["Resources", "Secrets", secret_name, "values", version];
        self.mesh_upsert("add_mesh_secret_value", &segments, value, params)
            .await
    }

    /// Metadata of a value version; the value itself needs
    /// [`FabricClient::show_mesh_secret_value`].
    pub async fn get_mesh_secret_value(
        &self,
        secret_name: &str,
        version: &str,
        params: &MeshOptionalParams,
    ) -> Result<GetMeshSecretValueResponse> {
        let segments = ["Resources", "Secrets", secret_name, "values", version];
        self.mesh_get("get_mesh_secret_value", &segments, params).await
    }

    pub async fn delete_mesh_secret_value(
        &self,
        secret_name: &str,
        version: &str,
        params: &MeshOptionalParams,
    ) -> Result<()> {
        let segments = ["Resources", "Secrets", secret_name, "values", version];
        self.mesh_delete("delete_mesh_secret_value", &segments, params)
            .await
    }

    pub async fn list_mesh_secret_values(
        &self,
        secret_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<ListMeshSecretValuesResponse> {
        let segments = ["Resources", "Secrets", secret_name, "values"];
        self.mesh_get("list_mesh_secret_values", &segments, params).await
    }

    /// Returns the unencrypted value of a secret version.
    pub async fn show_mesh_secret_value(
        &self,
        secret_name: &str,
        version: &str,
        params: &MeshOptionalParams,
    ) -> Result<ShowMeshSecretValueResponse> {
        let segments = ["Resources", "Secrets", secret_name, "values", version, "list_value"];
        let req = self.post(&segments, API_VERSION, params);
        self.send_json("show_mesh_secret_value", req).await
    }

    pub async fn create_or_update_mesh_volume(
        &self,
        volume_name: &str,
        description: &VolumeResourceDescription,
        params: &MeshOptionalParams,
    ) -> Result<Option<GetMeshVolumeResponse>> {
        let segments = ["Resources", "Volumes", volume_name];
        self.mesh_upsert("create_or_update_mesh_volume", &segments, description, params)
            .await
    }

    pub async fn get_mesh_volume(
        &self,
        volume_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<GetMeshVolumeResponse> {
        self.mesh_get("get_mesh_volume", &["Resources", "Volumes", volume_name], params)
            .await
    }

    pub async fn delete_mesh_volume(&self, volume_name: &str, params: &MeshOptionalParams) -> Result<()> {
        self.mesh_delete("delete_mesh_volume", &["Resources", "Volumes", volume_name], params)
            .await
    }

    pub async fn list_mesh_volumes(&self, params: &MeshOptionalParams) -> Result<ListMeshVolumesResponse> {
        self.mesh_get("list_mesh_volumes", &["Resources", "Volumes"], params)
            .await
    }

    pub async fn create_or_update_mesh_network(
        &self,
        network_name: &str,
        description: &NetworkResourceDescription,
        params: &MeshOptionalParams,
    ) -> Result<Option<GetMeshNetworkResponse>> {
        let segments = ["Resources", "Networks", network_name];
        self.mesh_upsert("create_or_update_mesh_network", &segments, description, params)
            .await
    }

    pub async fn get_mesh_network(
        &self,
        network_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<GetMeshNetworkResponse> {
        self.mesh_get("get_mesh_network", &["Resources", "Networks", network_name], params)
            .await
    }

    pub async fn delete_mesh_network(&self, network_name: &str, params: &MeshOptionalParams) -> Result<()> {
        self.mesh_delete("delete_mesh_network", &["Resources", "Networks", network_name], params)
            .await
    }

    pub async fn list_mesh_networks(&self, params: &MeshOptionalParams) -> Result<ListMeshNetworksResponse> {
        self.mesh_get("list_mesh_networks", &["Resources", "Networks"], params)
            .await
    }

    pub async fn create_or_update_mesh_gateway(
        &self,
        gateway_name: &str,
        description: &GatewayResourceDescription,
        params: &MeshOptionalParams,
    ) -> Result<Option<GetMeshGatewayResponse>> {
        let segments = ["Resources", "Gateways", gateway_name];
        self.mesh_upsert("create_or_update_mesh_gateway", &segments, description, params)
            .await
    }

    pub async fn get_mesh_gateway(
        &self,
        gateway_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<GetMeshGatewayResponse> {
        self.mesh_get("get_mesh_gateway", &["Resources", "Gateways", gateway_name], params)
            .await
    }

    pub async fn delete_mesh_gateway(&self, gateway_name: &str, params: &MeshOptionalParams) -> Result<()> {
        self.mesh_delete("delete_mesh_gateway", &["Resources", "Gateways", gateway_name], params)
            .await
    }

    pub async fn list_mesh_gateways(&self, params: &MeshOptionalParams) -> Result<ListMeshGatewaysResponse> {
        self.mesh_get("list_mesh_gateways", &["Resources", "Gateways"], params)
            .await
    }

    /// Creates the application or starts an upgrade of an existing one.
    pub async fn create_or_update_mesh_application(
        &self,
        application_name: &str,
        description: &ApplicationResourceDescription,
        params: &MeshOptionalParams,
    ) -> Result<Option<GetMeshApplicationResponse>> {
        let segments = ["Resources", "Applications", application_name];
        self.mesh_upsert("create_or_update_mesh_application", &segments, description, params)
            .await
    }

    pub async fn get_mesh_application(
        &self,
        application_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<GetMeshApplicationResponse> {
        let segments = ["Resources", "Applications", application_name];
        self.mesh_get("get_mesh_application", &segments, params).await
    }

    pub async fn delete_mesh_application(
        &self,
        application_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<()> {
        let segments = ["Resources", "Applications", application_name];
        self.mesh_delete("delete_mesh_application", &segments, params)
            .await
    }

    pub async fn list_mesh_applications(
        &self,
        params: &MeshOptionalParams,
    ) -> Result<ListMeshApplicationsResponse> {
        self.mesh_get("list_mesh_applications", &["Resources", "Applications"], params)
            .await
    }

    pub async fn get_mesh_application_upgrade_progress(
        &self,
        application_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<GetMeshApplicationUpgradeProgressResponse> {
        let segments = ["Resources", "Applications", application_name, "$", "GetUpgradeProgress"];
        let req = self.get(&segments, "7.0", params);
        self.send_json("get_mesh_application_upgrade_progress", req).await
    }

    pub async fn get_mesh_service(
        &self,
        application_name: &str,
        service_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<GetMeshServiceResponse> {
        let segments = ["Resources", "Applications", application_name, "Services", service_name];
        self.mesh_get("get_mesh_service", &segments, params).await
    }

    pub async fn list_mesh_services(
        &self,
        application_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<ListMeshServicesResponse> {
        let segments = ["Resources", "Applications", application_name, "Services"];
        self.mesh_get("list_mesh_services", &segments, params).await
    }

    pub async fn get_mesh_service_replica(
        &self,
        application_name: &str,
        service_name: &str,
        replica_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<GetMeshServiceReplicaResponse> {
        let segments = [
            "Resources",
            "Applications",
            application_name,
            "Services",
            service_name,
            "Replicas",
            replica_name,
        ];
        self.mesh_get("get_mesh_service_replica", &segments, params).await
    }

    pub async fn list_mesh_service_replicas(
        &self,
        application_name: &str,
        service_name: &str,
        params: &MeshOptionalParams,
    ) -> Result<ListMeshServiceReplicasResponse> {
        let segments = [
            "Resources",
            "Applications",
            application_name,
            "Services",
            service_name,
            "Replicas",
        ];
        self.mesh_get("list_mesh_service_replicas", &segments, params).await
    }

    pub async fn get_mesh_code_package_container_logs(
        &self,
        application_name: &str,
        service_name: &str,
        replica_name: &str,
        code_package_name: &str,
        params: &GetMeshCodePackageContainerLogsOptionalParams,
    ) -> Result<GetMeshCodePackageContainerLogsResponse> {
        let segments = [
            "Resources",
            "Applications",
            application_name,
            "Services",
            service_name,
            "Replicas",
            replica_name,
            "CodePackages",
            code_package_name,
            "Logs",
        ];
        let req = self.get(&segments, API_VERSION, params);
        self.send_json("get_mesh_code_package_container_logs", req).await
    }
}
