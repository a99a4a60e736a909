use httpmock::Method::{DELETE, GET, POST, PUT};
use httpmock::MockServer;
use serde_json::json;

use fabric_client::api::FabricErrorCodes;
use fabric_client::api::cluster::GetClusterHealthOptionalParams;
use fabric_client::api::mesh::{MeshOptionalParams, SecretResourceDescription};
use fabric_client::api::naming::{
    GetPropertyInfoOptionalParams, PropertyBatchDescriptionList, PropertyBatchInfo,
    PropertyBatchOperation, SubmitPropertyBatchOptionalParams,
};
use fabric_client::api::node::{GetNodeInfoListOptionalParams, GetNodeInfoOptionalParams};
use fabric_client::api::repair::{RepairTask, RepairTaskState, UpdateRepairExecutionStateOptionalParams};
use fabric_client::api::{HealthState, HealthStateFilter};
use fabric_client::{ClientError, FabricClient};

fn client(server: &MockServer) -> FabricClient {
    FabricClient::new(reqwest::Client::new(), &server.base_url()).expect("client")
}

#[tokio::test]
async fn cluster_health_sends_filters_and_decodes() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/$/GetClusterHealth")
            .query_param("api-version", "6.0")
            .query_param("NodesHealthStateFilter", "8")
            .query_param("timeout", "30");
        then.status(200).json_body(json!({
            "AggregatedHealthState": "Warning",
            "HealthEvents": [],
            "NodeHealthStates": [{"Name": "_Node_0", "AggregatedHealthState": "Warning"}]
        }));
    });

    let params = GetClusterHealthOptionalParams {
        nodes_health_state_filter: Some(HealthStateFilter::ERROR),
        ..Default::default()
    }
    .with_timeout(30);
    let health = client(&server)
        .get_cluster_health(&params)
        .await
        .expect("cluster health");

    mock.assert();
    assert_eq!(health.health.aggregated_health_state, Some(HealthState::Warning));
    assert_eq!(health.node_health_states.len(), 1);
}

#[tokio::test]
async fn node_listing_follows_continuation_tokens() {
    let server = MockServer::start();
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/Nodes")
            .query_param("ContinuationToken", "page-2");
        then.status(200).json_body(json!({
            "ContinuationToken": "",
            "Items": [{"Name": "_Node_1"}]
        }));
    });
    let first = server.mock(|when, then| {
        when.method(GET).path("/Nodes").query_param("api-version", "6.3");
        then.status(200).json_body(json!({
            "ContinuationToken": "page-2",
            "Items": [{"Name": "_Node_0"}]
        }));
    });

    let nodes = client(&server)
        .get_all_nodes(&GetNodeInfoListOptionalParams::default())
        .await
        .expect("all nodes");

    first.assert();
    second.assert();
    let names: Vec<_> = nodes.iter().filter_map(|n| n.name.as_deref()).collect();
    assert_eq!(names, ["_Node_0", "_Node_1"]);
}

#[tokio::test]
async fn no_content_lookup_is_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/Nodes/_Node_9");
        then.status(204);
    });

    let node = client(&server)
        .get_node_info("_Node_9", &GetNodeInfoOptionalParams::default())
        .await
        .expect("lookup");
    assert!(node.is_none());
}

#[tokio::test]
async fn fabric_errors_keep_code_and_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/Nodes/_Node_9");
        then.status(404).json_body(json!({
            "Error": {"Code": "FABRIC_E_NODE_NOT_FOUND", "Message": "Node _Node_9 not found"}
        }));
    });

    let err = client(&server)
        .get_node_info("_Node_9", &GetNodeInfoOptionalParams::default())
        .await
        .expect_err("missing node");

    assert!(err.is_not_found());
    assert_eq!(err.fabric_code(), Some(&FabricErrorCodes::NodeNotFound));
    assert!(!err.is_retryable());
    assert!(err.to_string().contains("Node _Node_9 not found"));
}

#[tokio::test]
async fn unavailable_plain_body_is_retryable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/Nodes");
        then.status(503).body("cluster is reconfiguring");
    });

    let err = client(&server)
        .get_node_info_list(&GetNodeInfoListOptionalParams::default())
        .await
        .expect_err("unavailable");

    assert!(matches!(err, ClientError::Status { .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn undecodable_body_names_the_operation() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/Nodes");
        then.status(200).body("{not json");
    });

    let err = client(&server)
        .get_node_info_list(&GetNodeInfoListOptionalParams::default())
        .await
        .expect_err("bad body");

    assert!(matches!(err, ClientError::Decode { operation: "get_node_info_list", .. }));
}

#[tokio::test]
async fn rejected_property_batch_is_a_result() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/Names/samples/apps/$/GetProperties/$/SubmitBatch")
            .json_body(json!({
                "Operations": [{"Kind": "CheckExists", "PropertyName": "owner", "Exists": true}]
            }));
        then.status(409).json_body(json!({
            "Kind": "Failed",
            "ErrorMessage": "property does not exist",
            "OperationIndex": 0
        }));
    });

    let batch = PropertyBatchDescriptionList {
        operations: vec![PropertyBatchOperation::CheckExists {
            property_name: "owner".to_string(),
            exists: true,
        }],
    };
    let outcome = client(&server)
        .submit_property_batch(
            "fabric:/samples/apps",
            &batch,
            &SubmitPropertyBatchOptionalParams::default(),
        )
        .await
        .expect("batch outcome");

    mock.assert();
    assert!(matches!(
        outcome,
        PropertyBatchInfo::Failed { operation_index: 0, .. }
    ));
}

#[tokio::test]
async fn missing_property_is_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/Names/samples/$/GetProperty")
            .query_param("PropertyName", "owner");
        then.status(404).json_body(json!({
            "Error": {"Code": "FABRIC_E_PROPERTY_DOES_NOT_EXIST"}
        }));
    });

    let property = client(&server)
        .get_property_info("samples", "owner", &GetPropertyInfoOptionalParams::default())
        .await
        .expect("lookup");
    assert!(property.is_none());
}

#[tokio::test]
async fn accepted_mesh_upsert_without_body_is_none() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/Resources/Secrets/db-password")
            .query_param("api-version", "6.4-preview")
            .json_body(json!({
                "name": "db-password",
                "properties": {"kind": "inlinedValue", "contentType": "text/plain"}
            }));
        then.status(202);
    });

    let secret: SecretResourceDescription = serde_json::from_value(json!({
        "name": "db-password",
        "properties": {"kind": "inlinedValue", "contentType": "text/plain"}
    }))
    .expect("secret");
    let created = client(&server)
        .create_or_update_mesh_secret("db-password", &secret, &MeshOptionalParams::default())
        .await
        .expect("upsert");

    mock.assert();
    assert!(created.is_none());
}

#[tokio::test]
async fn mesh_delete_uses_delete_verb() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/Resources/Volumes/logs");
        then.status(200);
    });

    client(&server)
        .delete_mesh_volume("logs", &MeshOptionalParams::default())
        .await
        .expect("delete");
    mock.assert();
}

#[tokio::test]
async fn repair_transitions_are_checked_before_sending() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/$/UpdateRepairExecutionState");
        then.status(200).json_body(json!({"Version": "7"}));
    });

    let task: RepairTask = serde_json::from_value(json!({
        "TaskId": "repair-1",
        "State": "Executing",
        "Action": "System.Reboot"
    }))
    .expect("task");
    let err = client(&server)
        .update_repair_execution_state(
            &RepairTaskState::Created,
            &task,
            &UpdateRepairExecutionStateOptionalParams::default(),
        )
        .await
        .expect_err("skipping preparation is rejected");

    assert!(matches!(err, ClientError::InvalidArgument(_)));
    mock.assert_calls(0);
}
