//! Health model: states, events, evaluations, policies and entity health.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::duration::FabricDuration;
use super::filter::HealthStateFilter;
use super::known::{UnknownVariant, open_enum, tagged_union};

open_enum! {
    /// Aggregated or reported health of an entity.
    pub enum HealthState {
        /// Health state is not set.
        Invalid = "Invalid",
        /// Healthy.
        Ok = "Ok",
        /// Degraded but within policy.
        Warning = "Warning",
        /// Unhealthy.
        Error = "Error",
        /// Health state could not be determined.
        Unknown = "Unknown",
    }
}

impl HealthState {
    /// Severity rank used to order states (`Error` is highest).
    pub fn severity(&self) -> u8 {
        match self {
            HealthState::Ok => 1,
            HealthState::Warning => 2,
            HealthState::Error => 3,
            HealthState::Invalid | HealthState::Unknown | HealthState::Unrecognized(_) => 0,
        }
    }
}

open_enum! {
    /// Kind of entity a health statistic refers to.
    pub enum EntityKind {
        /// Invalid.
        Invalid = "Invalid",
        /// Node.
        Node = "Node",
        /// Partition.
        Partition = "Partition",
        /// Service.
        Service = "Service",
        /// Application.
        Application = "Application",
        /// Replica or instance.
        Replica = "Replica",
        /// Application deployed on a node.
        DeployedApplication = "DeployedApplication",
        /// Service package deployed on a node.
        DeployedServicePackage = "DeployedServicePackage",
        /// The cluster.
        Cluster = "Cluster",
    }
}

/// Health information reported by a watchdog or system component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct HealthInformation {
    /// Identifier of the reporter.
    pub source_id: String,
    /// Property the report is about.
    pub property: String,
    /// Reported state.
    pub health_state: HealthState,
    /// How long the report stays valid.
    #[serde(
        default,
        rename = "TimeToLiveInMilliSeconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_to_live: Option<FabricDuration>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Monotonic sequence number used to discard stale reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
    /// Remove the report instead of turning it into an error when it expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_when_expired: Option<bool>,
    /// Code identifying the report, set by system components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_report_id: Option<String>,
}

impl HealthInformation {
    /// Creates a report with only the required fields set.
    pub fn new(
        source_id: impl Into<String>,
        property: impl Into<String>,
        health_state: HealthState,
    ) -> Self {
        HealthInformation {
            source_id: source_id.into(),
            property: property.into(),
            health_state,
            time_to_live: None,
            description: None,
            sequence_number: None,
            remove_when_expired: None,
            health_report_id: None,
        }
    }
}

/// Health report as stored by the health store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct HealthEvent {
    /// Reported information.
    #[serde(flatten)]
    pub information: HealthInformation,
    /// Whether the time to live has elapsed.
    #[serde(default)]
    pub is_expired: bool,
    /// When the reporter created the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_utc_timestamp: Option<DateTime<Utc>>,
    /// When the health store last changed the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_utc_timestamp: Option<DateTime<Utc>>,
    /// Last transition to Ok.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_ok_transition_at: Option<DateTime<Utc>>,
    /// Last transition to Warning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_warning_transition_at: Option<DateTime<Utc>>,
    /// Last transition to Error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_transition_at: Option<DateTime<Utc>>,
}

/// Wrapper around a [`HealthEvaluation`] as it appears in evaluation lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct HealthEvaluationWrapper {
    /// The evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_evaluation: Option<HealthEvaluation>,
}

/// Why an entity was considered unhealthy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct HealthEvaluation {
    /// State produced by this evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregated_health_state: Option<HealthState>,
    /// Summary written by the health store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Evaluation kind and its fields.
    #[serde(flatten)]
    pub kind: HealthEvaluationKind,
}

impl HealthEvaluation {
    /// Nested evaluations that contributed to this one (empty for events).
    pub fn unhealthy_evaluations(&self) -> &[HealthEvaluationWrapper] {
        use HealthEvaluationKind as K;
        match &self.kind {
            K::Application(e) => &e.unhealthy_evaluations,
            K::Applications(e) => &e.unhealthy_evaluations,
            K::ApplicationTypeApplications(e) => &e.unhealthy_evaluations,
            K::DeltaNodesCheck(e) => &e.unhealthy_evaluations,
            K::DeployedApplication(e) => &e.unhealthy_evaluations,
            K::DeployedApplications(e) => &e.unhealthy_evaluations,
            K::DeployedServicePackage(e) => &e.unhealthy_evaluations,
            K::DeployedServicePackages(e) => &e.unhealthy_evaluations,
            K::Node(e) => &e.unhealthy_evaluations,
            K::Nodes(e) => &e.unhealthy_evaluations,
            K::Partition(e) => &e.unhealthy_evaluations,
            K::Partitions(e) => &e.unhealthy_evaluations,
            K::Replica(e) => &e.unhealthy_evaluations,
            K::Replicas(e) => &e.unhealthy_evaluations,
            K::Service(e) => &e.unhealthy_evaluations,
            K::Services(e) => &e.unhealthy_evaluations,
            K::SystemApplication(e) => &e.unhealthy_evaluations,
            K::UpgradeDomainDeltaNodesCheck(e) => &e.unhealthy_evaluations,
            K::UpgradeDomainDeployedApplications(e) => &e.unhealthy_evaluations,
            K::UpgradeDomainNodes(e) => &e.unhealthy_evaluations,
            K::NodeTypeNodes(e) => &e.unhealthy_evaluations,
            K::Event(_) | K::Unrecognized(_) => &[],
        }
    }

    /// Visits this evaluation and every nested one, depth first, with its depth.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(usize, &'a HealthEvaluation)) {
        walk_evaluation(self, 0, visit);
    }
}

fn walk_evaluation<'a>(
    evaluation: &'a HealthEvaluation,
    depth: usize,
    visit: &mut dyn FnMut(usize, &'a HealthEvaluation),
) {
    visit(depth, evaluation);
    for child in evaluation.unhealthy_evaluations() {
        if let Some(nested) = child.health_evaluation.as_ref() {
            walk_evaluation(nested, depth + 1, visit);
        }
    }
}

/// Evaluation kinds, discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "Kind")]
pub enum HealthEvaluationKind {
    /// An application was evaluated.
    Application(ApplicationHealthEvaluation),
    /// The cluster's applications were evaluated against policy.
    Applications(ApplicationsHealthEvaluation),
    /// Applications of one type were evaluated against the type policy.
    ApplicationTypeApplications(ApplicationTypeApplicationsHealthEvaluation),
    /// Delta of unhealthy nodes during a cluster upgrade.
    DeltaNodesCheck(DeltaNodesCheckHealthEvaluation),
    /// An application deployed on a node was evaluated.
    DeployedApplication(DeployedApplicationHealthEvaluation),
    /// Deployed applications were evaluated against policy.
    DeployedApplications(DeployedApplicationsHealthEvaluation),
    /// A deployed service package was evaluated.
    DeployedServicePackage(DeployedServicePackageHealthEvaluation),
    /// Deployed service packages were evaluated.
    DeployedServicePackages(DeployedServicePackagesHealthEvaluation),
    /// A single health event caused the state.
    Event(EventHealthEvaluation),
    /// A node was evaluated.
    Node(NodeHealthEvaluation),
    /// The cluster's nodes were evaluated against policy.
    Nodes(NodesHealthEvaluation),
    /// A partition was evaluated.
    Partition(PartitionHealthEvaluation),
    /// A service's partitions were evaluated against policy.
    Partitions(PartitionsHealthEvaluation),
    /// A replica was evaluated.
    Replica(ReplicaHealthEvaluation),
    /// A partition's replicas were evaluated against policy.
    Replicas(ReplicasHealthEvaluation),
    /// A service was evaluated.
    Service(ServiceHealthEvaluation),
    /// Services of one type were evaluated against policy.
    Services(ServicesHealthEvaluation),
    /// The fabric:/System application was evaluated.
    SystemApplication(SystemApplicationHealthEvaluation),
    /// Delta of unhealthy nodes within an upgrade domain.
    UpgradeDomainDeltaNodesCheck(UpgradeDomainDeltaNodesCheckHealthEvaluation),
    /// Deployed applications within an upgrade domain.
    UpgradeDomainDeployedApplications(UpgradeDomainDeployedApplicationsHealthEvaluation),
    /// Nodes within an upgrade domain.
    UpgradeDomainNodes(UpgradeDomainNodesHealthEvaluation),
    /// Nodes of one node type were evaluated against the node type policy.
    NodeTypeNodes(NodeTypeNodesHealthEvaluation),
    /// Evaluation kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<HealthEvaluationKind>),
}

tagged_union!(
    HealthEvaluationKind,
    "Kind",
    [
        "Application",
        "Applications",
        "ApplicationTypeApplications",
        "DeltaNodesCheck",
        "DeployedApplication",
        "DeployedApplications",
        "DeployedServicePackage",
        "DeployedServicePackages",
        "Event",
        "Node",
        "Nodes",
        "Partition",
        "Partitions",
        "Replica",
        "Replicas",
        "Service",
        "Services",
        "SystemApplication",
        "UpgradeDomainDeltaNodesCheck",
        "UpgradeDomainDeployedApplications",
        "UpgradeDomainNodes",
        "NodeTypeNodes",
    ]
);

/// Evaluation of one application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationHealthEvaluation {
    /// Application name (`fabric:/...`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of all applications in the cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationsHealthEvaluation {
    /// Tolerated percentage of unhealthy applications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_applications: Option<u8>,
    /// Applications evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of the applications of one application type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationTypeApplicationsHealthEvaluation {
    /// Application type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_type_name: Option<String>,
    /// Tolerated percentage of unhealthy applications of the type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_applications: Option<u8>,
    /// Applications of the type evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Delta check of unhealthy nodes during a cluster upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeltaNodesCheckHealthEvaluation {
    /// Unhealthy nodes when the upgrade started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_error_count: Option<i64>,
    /// Total nodes when the upgrade started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_total_count: Option<i64>,
    /// Tolerated percentage of newly unhealthy nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_delta_unhealthy_nodes: Option<u8>,
    /// Nodes evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of an application deployed on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedApplicationHealthEvaluation {
    /// Node hosting the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of an application's deployments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedApplicationsHealthEvaluation {
    /// Tolerated percentage of unhealthy deployed applications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_deployed_applications: Option<u8>,
    /// Deployed applications evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of a deployed service package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedServicePackageHealthEvaluation {
    /// Node hosting the package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    /// Service manifest name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_manifest_name: Option<String>,
    /// Activation id of the package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_package_activation_id: Option<String>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of the service packages of a deployed application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedServicePackagesHealthEvaluation {
    /// Packages evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// A single health event determined the state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EventHealthEvaluation {
    /// Whether warnings were treated as errors.
    #[serde(default)]
    pub consider_warning_as_error: bool,
    /// The offending event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unhealthy_event: Option<HealthEvent>,
}

/// Evaluation of one node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeHealthEvaluation {
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of the cluster's nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodesHealthEvaluation {
    /// Tolerated percentage of unhealthy nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_nodes: Option<u8>,
    /// Nodes evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of one partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionHealthEvaluation {
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of a service's partitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionsHealthEvaluation {
    /// Tolerated percentage of unhealthy partitions per service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_partitions_per_service: Option<u8>,
    /// Partitions evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of one replica or instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicaHealthEvaluation {
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
    /// Replica id (stateful) or instance id (stateless).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_or_instance_id: Option<String>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of a partition's replicas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicasHealthEvaluation {
    /// Tolerated percentage of unhealthy replicas per partition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_replicas_per_partition: Option<u8>,
    /// Replicas evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of one service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceHealthEvaluation {
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of the services of one service type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ServicesHealthEvaluation {
    /// Service type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_name: Option<String>,
    /// Tolerated percentage of unhealthy services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_services: Option<u8>,
    /// Services evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Evaluation of the system application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SystemApplicationHealthEvaluation {
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Delta check of unhealthy nodes within one upgrade domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeDomainDeltaNodesCheckHealthEvaluation {
    /// Upgrade domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_domain_name: Option<String>,
    /// Unhealthy nodes in the domain when the upgrade started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_error_count: Option<i64>,
    /// Nodes in the domain when the upgrade started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_total_count: Option<i64>,
    /// Tolerated percentage of newly unhealthy nodes in the domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_upgrade_domain_delta_unhealthy_nodes: Option<u8>,
    /// Nodes evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Deployed applications within one upgrade domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeDomainDeployedApplicationsHealthEvaluation {
    /// Upgrade domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_domain_name: Option<String>,
    /// Tolerated percentage of unhealthy deployed applications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_deployed_applications: Option<u8>,
    /// Deployed applications evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Nodes within one upgrade domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeDomainNodesHealthEvaluation {
    /// Upgrade domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_domain_name: Option<String>,
    /// Tolerated percentage of unhealthy nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_nodes: Option<u8>,
    /// Nodes evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

/// Nodes of one node type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeTypeNodesHealthEvaluation {
    /// Node type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type_name: Option<String>,
    /// Tolerated percentage of unhealthy nodes of the type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_percent_unhealthy_nodes: Option<u8>,
    /// Nodes evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    /// Nested evaluations.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
}

// Policies.

/// Health policy applied to services of one type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceTypeHealthPolicy {
    /// Tolerated percentage of unhealthy partitions per service (0-100).
    #[serde(default)]
    pub max_percent_unhealthy_partitions_per_service: u8,
    /// Tolerated percentage of unhealthy replicas per partition (0-100).
    #[serde(default)]
    pub max_percent_unhealthy_replicas_per_partition: u8,
    /// Tolerated percentage of unhealthy services (0-100).
    #[serde(default)]
    pub max_percent_unhealthy_services: u8,
}

/// Entry of a service type policy map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceTypeHealthPolicyMapItem {
    /// Service type name.
    pub key: String,
    /// Policy for the type.
    pub value: ServiceTypeHealthPolicy,
}

/// Health policy applied to an application and its children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationHealthPolicy {
    /// Treat warnings as errors.
    #[serde(default)]
    pub consider_warning_as_error: bool,
    /// Tolerated percentage of unhealthy deployed applications (0-100).
    #[serde(default)]
    pub max_percent_unhealthy_deployed_applications: u8,
    /// Policy for service types without an explicit entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_service_type_health_policy: Option<ServiceTypeHealthPolicy>,
    /// Per service type policies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_type_health_policy_map: Vec<ServiceTypeHealthPolicyMapItem>,
}

/// Entry of an application policy map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationHealthPolicyMapItem {
    /// Application name.
    pub key: String,
    /// Policy for the application.
    pub value: ApplicationHealthPolicy,
}

/// Application health policies keyed by application name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationHealthPolicies {
    /// Policy per application.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_health_policy_map: Vec<ApplicationHealthPolicyMapItem>,
}

/// Entry of an application type policy map: tolerated unhealthy percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationTypeHealthPolicyMapItem {
    /// Application type name.
    pub key: String,
    /// Tolerated percentage of unhealthy applications of the type (0-100).
    pub value: u8,
}

/// Entry of a node type policy map: tolerated unhealthy percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NodeTypeHealthPolicyMapItem {
    /// Node type name.
    pub key: String,
    /// Tolerated percentage of unhealthy nodes of the type (0-100).
    pub value: u8,
}

/// Health policy used to evaluate the cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterHealthPolicy {
    /// Treat warnings as errors.
    #[serde(default)]
    pub consider_warning_as_error: bool,
    /// Tolerated percentage of unhealthy nodes (0-100).
    #[serde(default)]
    pub max_percent_unhealthy_nodes: u8,
    /// Tolerated percentage of unhealthy applications (0-100).
    #[serde(default)]
    pub max_percent_unhealthy_applications: u8,
    /// Per application type tolerances.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_type_health_policy_map: Vec<ApplicationTypeHealthPolicyMapItem>,
    /// Per node type tolerances.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_type_health_policy_map: Vec<NodeTypeHealthPolicyMapItem>,
}

/// Cluster and application policies sent with a cluster health query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterHealthPolicies {
    /// Policy per application.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_health_policy_map: Vec<ApplicationHealthPolicyMapItem>,
    /// Cluster policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_health_policy: Option<ClusterHealthPolicy>,
}

// Statistics.

/// Count of children per health state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct HealthStateCount {
    /// Children in Ok.
    #[serde(default)]
    pub ok_count: i64,
    /// Children in Warning.
    #[serde(default)]
    pub warning_count: i64,
    /// Children in Error.
    #[serde(default)]
    pub error_count: i64,
}

/// Health state counts for one kind of child entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EntityKindHealthStateCount {
    /// Child entity kind.
    pub entity_kind: EntityKind,
    /// Counts per state.
    #[serde(default)]
    pub health_state_count: HealthStateCount,
}

/// Per-kind health state counts of an entity's children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct HealthStatistics {
    /// Counts per child kind.
    #[serde(default)]
    pub health_state_count_list: Vec<EntityKindHealthStateCount>,
}

// Entity health.

/// Fields shared by every entity health response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EntityHealth {
    /// Aggregated state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregated_health_state: Option<HealthState>,
    /// Events reported on the entity.
    #[serde(default)]
    pub health_events: Vec<HealthEvent>,
    /// Evaluations explaining a non-Ok state.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
    /// Child statistics, unless excluded by the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_statistics: Option<HealthStatistics>,
}

/// Aggregated state of a child entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EntityHealthState {
    /// Aggregated state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregated_health_state: Option<HealthState>,
}

/// Node health summary inside cluster health.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeHealthState {
    /// Aggregated state.
    #[serde(flatten)]
    pub state: EntityHealthState,
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Node id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<super::node::NodeId>,
}

/// Application health summary inside cluster health.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationHealthState {
    /// Aggregated state.
    #[serde(flatten)]
    pub state: EntityHealthState,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Service health summary inside application health.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceHealthState {
    /// Aggregated state.
    #[serde(flatten)]
    pub state: EntityHealthState,
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

/// Partition health summary inside service health.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionHealthState {
    /// Aggregated state.
    #[serde(flatten)]
    pub state: EntityHealthState,
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
}

/// Replica health summary inside partition health.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicaHealthState {
    /// Aggregated state.
    #[serde(flatten)]
    pub state: EntityHealthState,
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
    /// Replica or instance identity.
    #[serde(flatten)]
    pub kind: ReplicaIdentity,
}

/// Identity of a replica (stateful) or instance (stateless), by `ServiceKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "ServiceKind")]
pub enum ReplicaIdentity {
    /// Stateful replica.
    Stateful {
        /// Replica id.
        #[serde(rename = "ReplicaId", default, skip_serializing_if = "Option::is_none")]
        replica_id: Option<String>,
    },
    /// Stateless instance.
    Stateless {
        /// Instance id.
        #[serde(rename = "InstanceId", default, skip_serializing_if = "Option::is_none")]
        instance_id: Option<String>,
    },
    /// Service kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<ReplicaIdentity>),
}

tagged_union!(ReplicaIdentity, "ServiceKind", ["Stateful", "Stateless"]);

impl ReplicaIdentity {
    /// Replica id or instance id, whichever applies.
    pub fn id(&self) -> Option<&str> {
        match self {
            ReplicaIdentity::Stateful { replica_id } => replica_id.as_deref(),
            ReplicaIdentity::Stateless { instance_id } => instance_id.as_deref(),
            ReplicaIdentity::Unrecognized(_) => None,
        }
    }
}

/// Deployed application health summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedApplicationHealthState {
    /// Aggregated state.
    #[serde(flatten)]
    pub state: EntityHealthState,
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
}

/// Deployed service package health summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedServicePackageHealthState {
    /// Aggregated state.
    #[serde(flatten)]
    pub state: EntityHealthState,
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    /// Service manifest name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_manifest_name: Option<String>,
    /// Activation id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_package_activation_id: Option<String>,
}

/// Health of the cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterHealth {
    /// Aggregated health, events and evaluations.
    #[serde(flatten)]
    pub health: EntityHealth,
    /// Node summaries selected by the nodes filter.
    #[serde(default)]
    pub node_health_states: Vec<NodeHealthState>,
    /// Application summaries selected by the applications filter.
    #[serde(default)]
    pub application_health_states: Vec<ApplicationHealthState>,
}

/// Health of a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeHealth {
    /// Aggregated health, events and evaluations.
    #[serde(flatten)]
    pub health: EntityHealth,
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Health of an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationHealth {
    /// Aggregated health, events and evaluations.
    #[serde(flatten)]
    pub health: EntityHealth,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Service summaries.
    #[serde(default)]
    pub service_health_states: Vec<ServiceHealthState>,
    /// Deployed application summaries.
    #[serde(default)]
    pub deployed_application_health_states: Vec<DeployedApplicationHealthState>,
}

/// Health of a service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceHealth {
    /// Aggregated health, events and evaluations.
    #[serde(flatten)]
    pub health: EntityHealth,
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Partition summaries.
    #[serde(default)]
    pub partition_health_states: Vec<PartitionHealthState>,
}

/// Health of a partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionHealth {
    /// Aggregated health, events and evaluations.
    #[serde(flatten)]
    pub health: EntityHealth,
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
    /// Replica summaries.
    #[serde(default)]
    pub replica_health_states: Vec<ReplicaHealthState>,
}

/// Health of a replica or instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicaHealth {
    /// Aggregated health, events and evaluations.
    #[serde(flatten)]
    pub health: EntityHealth,
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
    /// Replica or instance identity.
    #[serde(flatten)]
    pub kind: ReplicaIdentity,
}

/// Health of an application deployed on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedApplicationHealth {
    /// Aggregated health, events and evaluations.
    #[serde(flatten)]
    pub health: EntityHealth,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Service package summaries.
    #[serde(default)]
    pub deployed_service_package_health_states: Vec<DeployedServicePackageHealthState>,
}

/// Health of a service package deployed on a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedServicePackageHealth {
    /// Aggregated health, events and evaluations.
    #[serde(flatten)]
    pub health: EntityHealth,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    /// Service manifest name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_manifest_name: Option<String>,
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
}

// Health chunks.

/// Filter selecting nodes in a health chunk query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeHealthStateFilter {
    /// Exact node name; empty matches all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name_filter: Option<String>,
    /// States to include.
    #[serde(default)]
    pub health_state_filter: HealthStateFilter,
}

/// Filter selecting replicas in a health chunk query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicaHealthStateFilter {
    /// Exact replica or instance id; empty matches all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_or_instance_id_filter: Option<String>,
    /// States to include.
    #[serde(default)]
    pub health_state_filter: HealthStateFilter,
}

/// Filter selecting partitions in a health chunk query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionHealthStateFilter {
    /// Exact partition id; empty matches all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id_filter: Option<Uuid>,
    /// States to include.
    #[serde(default)]
    pub health_state_filter: HealthStateFilter,
    /// Replica filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replica_filters: Vec<ReplicaHealthStateFilter>,
}

/// Filter selecting services in a health chunk query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceHealthStateFilter {
    /// Exact service name; empty matches all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name_filter: Option<String>,
    /// States to include.
    #[serde(default)]
    pub health_state_filter: HealthStateFilter,
    /// Partition filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partition_filters: Vec<PartitionHealthStateFilter>,
}

/// Filter selecting deployed service packages in a health chunk query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedServicePackageHealthStateFilter {
    /// Exact service manifest name; empty matches all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_manifest_name_filter: Option<String>,
    /// Exact activation id; empty matches all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_package_activation_id_filter: Option<String>,
    /// States to include.
    #[serde(default)]
    pub health_state_filter: HealthStateFilter,
}

/// Filter selecting deployed applications in a health chunk query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedApplicationHealthStateFilter {
    /// Exact node name; empty matches all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name_filter: Option<String>,
    /// States to include.
    #[serde(default)]
    pub health_state_filter: HealthStateFilter,
    /// Service package filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deployed_service_package_filters: Vec<DeployedServicePackageHealthStateFilter>,
}

/// Filter selecting applications in a health chunk query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationHealthStateFilter {
    /// Exact application name; empty matches all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name_filter: Option<String>,
    /// Exact application type name; empty matches all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_type_name_filter: Option<String>,
    /// States to include.
    #[serde(default)]
    pub health_state_filter: HealthStateFilter,
    /// Service filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_filters: Vec<ServiceHealthStateFilter>,
    /// Deployed application filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deployed_application_filters: Vec<DeployedApplicationHealthStateFilter>,
}

/// Body of a cluster health chunk query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterHealthChunkQueryDescription {
    /// Node filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_filters: Vec<NodeHealthStateFilter>,
    /// Application filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_filters: Vec<ApplicationHealthStateFilter>,
    /// Cluster policy override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_health_policy: Option<ClusterHealthPolicy>,
    /// Application policy overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_health_policies: Option<ApplicationHealthPolicies>,
}

/// Chunk list with the total number of matching children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct HealthStateChunkList<T> {
    /// Children that matched the filters.
    #[serde(default)]
    pub total_count: i64,
    /// Returned children.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for HealthStateChunkList<T> {
    fn default() -> Self {
        HealthStateChunkList {
            total_count: 0,
            items: Vec::new(),
        }
    }
}

/// Replica health chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicaHealthStateChunk {
    /// Health state.
    pub health_state: HealthState,
    /// Replica or instance id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_or_instance_id: Option<String>,
}

/// Partition health chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionHealthStateChunk {
    /// Health state.
    pub health_state: HealthState,
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
    /// Replica chunks.
    #[serde(default)]
    pub replica_health_state_chunks: HealthStateChunkList<ReplicaHealthStateChunk>,
}

/// Service health chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceHealthStateChunk {
    /// Health state.
    pub health_state: HealthState,
    /// Service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Partition chunks.
    #[serde(default)]
    pub partition_health_state_chunks: HealthStateChunkList<PartitionHealthStateChunk>,
}

/// Deployed service package health chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedServicePackageHealthStateChunk {
    /// Health state.
    pub health_state: HealthState,
    /// Service manifest name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_manifest_name: Option<String>,
    /// Activation id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_package_activation_id: Option<String>,
}

/// Deployed application health chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DeployedApplicationHealthStateChunk {
    /// Health state.
    pub health_state: HealthState,
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Service package chunks.
    #[serde(default)]
    pub deployed_service_package_health_state_chunks:
        HealthStateChunkList<DeployedServicePackageHealthStateChunk>,
}

/// Application health chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationHealthStateChunk {
    /// Health state.
    pub health_state: HealthState,
    /// Application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    /// Application type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_type_name: Option<String>,
    /// Service chunks.
    #[serde(default)]
    pub service_health_state_chunks: HealthStateChunkList<ServiceHealthStateChunk>,
    /// Deployed application chunks.
    #[serde(default)]
    pub deployed_application_health_state_chunks:
        HealthStateChunkList<DeployedApplicationHealthStateChunk>,
}

/// Node health chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NodeHealthStateChunk {
    /// Health state.
    pub health_state: HealthState,
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
}

/// Cluster health chunk: the cluster state plus filtered children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterHealthChunk {
    /// Cluster health state.
    pub health_state: HealthState,
    /// Node chunks.
    #[serde(default)]
    pub node_health_state_chunks: HealthStateChunkList<NodeHealthStateChunk>,
    /// Application chunks.
    #[serde(default)]
    pub application_health_state_chunks: HealthStateChunkList<ApplicationHealthStateChunk>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn evaluation_tree_decodes_recursively() {
        let evaluation: HealthEvaluation = serde_json::from_value(json!({
            "Kind": "Nodes",
            "AggregatedHealthState": "Error",
            "Description": "100% (1/1) nodes are unhealthy.",
            "MaxPercentUnhealthyNodes": 0,
            "TotalCount": 1,
            "UnhealthyEvaluations": [{
                "HealthEvaluation": {
                    "Kind": "Node",
                    "AggregatedHealthState": "Error",
                    "NodeName": "_Node_0",
                    "UnhealthyEvaluations": [{
                        "HealthEvaluation": {
                            "Kind": "Event",
                            "AggregatedHealthState": "Error",
                            "ConsiderWarningAsError": false,
                            "UnhealthyEvent": {
                                "SourceId": "Watchdog",
                                "Property": "Disk",
                                "HealthState": "Error",
                                "TimeToLiveInMilliSeconds": "PT5M",
                                "SequenceNumber": "10",
                                "RemoveWhenExpired": true,
                                "IsExpired": false
                            }
                        }
                    }]
                }
            }]
        }))
        .expect("decode evaluation tree");

        let HealthEvaluationKind::Nodes(nodes) = &evaluation.kind else {
            panic!("expected nodes evaluation");
        };
        assert_eq!(nodes.total_count, Some(1));

        let mut seen = Vec::new();
        evaluation.walk(&mut |depth, eval| seen.push((depth, eval.aggregated_health_state.clone())));
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2].0, 2);

        let leaf = evaluation.unhealthy_evaluations()[0]
            .health_evaluation
            .as_ref()
            .expect("node evaluation")
            .unhealthy_evaluations()[0]
            .health_evaluation
            .as_ref()
            .expect("event evaluation");
        let HealthEvaluationKind::Event(event) = &leaf.kind else {
            panic!("expected event evaluation");
        };
        let unhealthy = event.unhealthy_event.as_ref().expect("event");
        assert_eq!(unhealthy.information.property, "Disk");
        assert_eq!(
            unhealthy.information.time_to_live,
            Some(FabricDuration::from_secs(300))
        );
    }

    #[test]
    fn unknown_evaluation_kind_is_tolerated() {
        let raw = json!({
            "Kind": "SomethingNew",
            "AggregatedHealthState": "Warning",
            "Description": "new evaluation",
            "Extra": {"Threshold": 1}
        });
        let evaluation: HealthEvaluation =
            serde_json::from_value(raw.clone()).expect("decode unknown kind");
        let HealthEvaluationKind::Unrecognized(unknown) = &evaluation.kind else {
            panic!("expected an unrecognized kind, got {:?}", evaluation.kind);
        };
        assert_eq!(unknown.tag(), "SomethingNew");
        assert_eq!(unknown.raw()["Extra"], json!({"Threshold": 1}));
        assert_eq!(evaluation.aggregated_health_state, Some(HealthState::Warning));
        assert!(evaluation.unhealthy_evaluations().is_empty());
        assert_eq!(serde_json::to_value(&evaluation).expect("encode"), raw);
    }

    #[test]
    fn known_evaluation_kind_with_bad_fields_fails() {
        let result = serde_json::from_value::<HealthEvaluation>(json!({
            "Kind": "Nodes",
            "AggregatedHealthState": "Error",
            "TotalCount": "many"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn evaluation_serializes_discriminator() {
        let evaluation = HealthEvaluation {
            aggregated_health_state: Some(HealthState::Warning),
            description: None,
            kind: HealthEvaluationKind::Service(ServiceHealthEvaluation {
                service_name: Some("fabric:/app/svc".into()),
                unhealthy_evaluations: Vec::new(),
            }),
        };
        let value = serde_json::to_value(&evaluation).expect("encode");
        assert_eq!(value["Kind"], json!("Service"));
        assert_eq!(value["ServiceName"], json!("fabric:/app/svc"));
        assert_eq!(value["AggregatedHealthState"], json!("Warning"));
    }

    #[test]
    fn minimal_cluster_health_decodes() {
        let health: ClusterHealth =
            serde_json::from_value(json!({"AggregatedHealthState": "Ok"})).expect("decode");
        assert_eq!(health.health.aggregated_health_state, Some(HealthState::Ok));
        assert!(health.node_health_states.is_empty());
        assert!(health.health.health_statistics.is_none());
    }

    #[test]
    fn replica_health_state_uses_service_kind() {
        let state: ReplicaHealthState = serde_json::from_value(json!({
            "ServiceKind": "Stateful",
            "AggregatedHealthState": "Ok",
            "PartitionId": "1daae3f5-7fd6-42e9-b1ba-8c05f873994d",
            "ReplicaId": "131445960286036015"
        }))
        .expect("decode");
        assert_eq!(state.kind.id(), Some("131445960286036015"));

        let stateless: ReplicaHealthState = serde_json::from_value(json!({
            "ServiceKind": "Stateless",
            "InstanceId": "7"
        }))
        .expect("decode stateless");
        assert!(matches!(stateless.kind, ReplicaIdentity::Stateless { .. }));
    }

    #[test]
    fn cluster_health_policy_omits_empty_maps() {
        let policy = ClusterHealthPolicy {
            max_percent_unhealthy_nodes: 10,
            ..Default::default()
        };
        let value = serde_json::to_value(&policy).expect("encode");
        assert_eq!(
            value,
            json!({
                "ConsiderWarningAsError": false,
                "MaxPercentUnhealthyNodes": 10,
                "MaxPercentUnhealthyApplications": 0
            })
        );
    }

    #[test]
    fn health_state_severity_orders_states() {
        assert!(HealthState::Error.severity() > HealthState::Warning.severity());
        assert!(HealthState::Warning.severity() > HealthState::Ok.severity());
        assert_eq!(HealthState::from("Mystery").severity(), 0);
    }
}
