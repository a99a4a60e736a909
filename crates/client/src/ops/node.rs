use common::api::health::{ClusterHealthPolicy, HealthInformation};
use common::api::node::*;

use crate::{FabricClient, Result, collect_pages};

impl FabricClient {
    /// One page of nodes. See [`FabricClient::get_all_nodes`] to follow the
    /// continuation token.
    pub async fn get_node_info_list(
        &self,
        params: &GetNodeInfoListOptionalParams,
    ) -> Result<GetNodeInfoListResponse> {
        let req = self.get(&["Nodes"], "6.3", params);
        self.send_json("get_node_info_list", req).await
    }

    /// Every node in the cluster, across all pages.
    pub async fn get_all_nodes(&self, params: &GetNodeInfoListOptionalParams) -> Result<Vec<NodeInfo>> {
        collect_pages(|token| {
            let page_params = GetNodeInfoListOptionalParams {
                continuation_token: token,
                ..params.clone()
            };
            async move { self.get_node_info_list(&page_params).await }
        })
        .await
    }

    /// `None` when the node does not exist.
    pub async fn get_node_info(
        &self,
        node_name: &str,
        params: &GetNodeInfoOptionalParams,
    ) -> Result<Option<GetNodeInfoResponse>> {
        let req = self.get(&["Nodes", node_name], "6.0", params);
        self.send_optional_json("get_node_info", req).await
    }

    pub async fn get_node_health(
        &self,
        node_name: &str,
        params: &GetNodeHealthOptionalParams,
    ) -> Result<GetNodeHealthResponse> {
        let req = self.get(&["Nodes", node_name, "$", "GetHealth"], "6.0", params);
        self.send_json("get_node_health", req).await
    }

    pub async fn get_node_health_using_policy(
        &self,
        node_name: &str,
        policy: Option<&ClusterHealthPolicy>,
        params: &GetNodeHealthUsingPolicyOptionalParams,
    ) -> Result<GetNodeHealthUsingPolicyResponse> {
        let mut req = self.post(&["Nodes", node_name, "$", "GetHealth"], "6.0", params);
        if let Some(policy) = policy {
            req = req.json(policy);
        }
        self.send_json("get_node_health_using_policy", req).await
    }

    pub async fn report_node_health(
        &self,
        node_name: &str,
        health_information: &HealthInformation,
        params: &ReportNodeHealthOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Nodes", node_name, "$", "ReportHealth"], "6.0", params)
            .json(health_information);
        self.send_empty("report_node_health", req).await
    }

    pub async fn get_node_load_info(
        &self,
        node_name: &str,
        params: &GetNodeLoadInfoOptionalParams,
    ) -> Result<GetNodeLoadInfoResponse> {
        let req = self.get(&["Nodes", node_name, "$", "GetLoadInformation"], "6.0", params);
        self.send_json("get_node_load_info", req).await
    }

    /// Deactivates a node with the given intent. The call returns once the
    /// request is accepted; deactivation itself continues in the cluster.
    pub async fn disable_node(
        &self,
        node_name: &str,
        intent: &DeactivationIntentDescription,
        params: &DisableNodeOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Nodes", node_name, "$", "Deactivate"], "6.0", params)
            .json(intent);
        self.send_empty("disable_node", req).await
    }

    pub async fn enable_node(&self, node_name: &str, params: &EnableNodeOptionalParams) -> Result<()> {
        let req = self.post(&["Nodes", node_name, "$", "Activate"], "6.0", params);
        self.send_empty("enable_node", req).await
    }

    /// Tells the cluster the node's persisted state is permanently lost.
    pub async fn remove_node_state(
        &self,
        node_name: &str,
        params: &RemoveNodeStateOptionalParams,
    ) -> Result<()> {
        let req = self.post(&["Nodes", node_name, "$", "RemoveNodeState"], "6.0", params);
        self.send_empty("remove_node_state", req).await
    }

    pub async fn restart_node(
        &self,
        node_name: &str,
        description: &RestartNodeDescription,
        params: &RestartNodeOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Nodes", node_name, "$", "Restart"], "6.0", params)
            .json(description);
        self.send_empty("restart_node", req).await
    }

    pub async fn remove_configuration_overrides(
        &self,
        node_name: &str,
        params: &RemoveConfigurationOverridesOptionalParams,
    ) -> Result<()> {
        let req = self.delete(
            &["Nodes", node_name, "$", "RemoveConfigurationOverrides"],
            "7.0",
            params,
        );
        self.send_empty("remove_configuration_overrides", req).await
    }

    pub async fn get_configuration_overrides(
        &self,
        node_name: &str,
        params: &GetConfigurationOverridesOptionalParams,
    ) -> Result<GetConfigurationOverridesResponse> {
        let req = self.get(
            &["Nodes", node_name, "$", "GetConfigurationOverrides"],
            "7.0",
            params,
        );
        self.send_json("get_configuration_overrides", req).await
    }

    pub async fn add_configuration_parameter_overrides(
        &self,
        node_name: &str,
        overrides: &[ConfigParameterOverride],
        params: &AddConfigurationParameterOverridesOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(
                &["Nodes", node_name, "$", "AddConfigurationParameterOverrides"],
                "7.0",
                params,
            )
            .json(overrides);
        self.send_empty("add_configuration_parameter_overrides", req)
            .await
    }

    pub async fn add_node_tags(
        &self,
        node_name: &str,
        tags: &[String],
        params: &AddNodeTagsOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Nodes", node_name, "$", "AddNodeTags"], "7.2", params)
            .json(tags);
        self.send_empty("add_node_tags", req).await
    }

    pub async fn remove_node_tags(
        &self,
        node_name: &str,
        tags: &[String],
        params: &RemoveNodeTagsOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Nodes", node_name, "$", "RemoveNodeTags"], "7.2", params)
            .json(tags);
        self.send_empty("remove_node_tags", req).await
    }
}
