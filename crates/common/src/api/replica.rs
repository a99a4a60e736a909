//! Replicas of stateful partitions and instances of stateless ones.

use serde::{Deserialize, Serialize};

use super::filter::HealthStateFilter;
use super::health::{HealthState, ReplicaHealth};
use super::known::{UnknownVariant, open_enum, tagged_union};
use super::paging::PagedList;
use super::params::{TimeoutOptionalParams, optional_params};

open_enum! {
    /// Lifecycle status of a replica.
    pub enum ReplicaStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Being built.
        InBuild = "InBuild",
        /// Standby.
        Standby = "Standby",
        /// Ready.
        Ready = "Ready",
        /// Down.
        Down = "Down",
        /// Dropped.
        Dropped = "Dropped",
    }
}

open_enum! {
    /// Role of a stateful replica.
    pub enum ReplicaRole {
        /// Unknown.
        Unknown = "Unknown",
        /// No role.
        None = "None",
        /// Primary.
        Primary = "Primary",
        /// Secondary being built.
        IdleSecondary = "IdleSecondary",
        /// Secondary taking part in quorum.
        ActiveSecondary = "ActiveSecondary",
        /// Auxiliary being built.
        IdleAuxiliary = "IdleAuxiliary",
        /// Auxiliary taking part in quorum.
        ActiveAuxiliary = "ActiveAuxiliary",
        /// Primary acting as auxiliary.
        PrimaryAuxiliary = "PrimaryAuxiliary",
    }
}

/// A replica or instance of a partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicaInfo {
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_status: Option<ReplicaStatus>,
    /// Aggregated health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_state: Option<HealthState>,
    /// Hosting node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Replica address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Duration of the last build, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_in_build_duration_in_seconds: Option<String>,
    /// Stateful or stateless fields.
    #[serde(flatten)]
    pub kind: ReplicaKind,
}

/// Kind-specific part of [`ReplicaInfo`], discriminated by `ServiceKind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "ServiceKind")]
pub enum ReplicaKind {
    /// Stateful replica.
    Stateful {
        /// Current role.
        #[serde(rename = "ReplicaRole", default, skip_serializing_if = "Option::is_none")]
        replica_role: Option<ReplicaRole>,
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
    Unrecognized(UnknownVariant<ReplicaKind>),
}

tagged_union!(ReplicaKind, "ServiceKind", ["Stateful", "Stateless"]);

impl ReplicaInfo {
    /// Replica id or instance id, whichever applies.
    pub fn id(&self) -> Option<&str> {
        match &self.kind {
            ReplicaKind::Stateful { replica_id, .. } => replica_id.as_deref(),
            ReplicaKind::Stateless { instance_id } => instance_id.as_deref(),
            ReplicaKind::Unrecognized(_) => None,
        }
    }

    /// Whether this is the primary replica of a stateful partition.
    pub fn is_primary(&self) -> bool {
        matches!(
            self.kind,
            ReplicaKind::Stateful {
                replica_role: Some(ReplicaRole::Primary),
                ..
            }
        )
    }
}

/// Page of replicas.
pub type PagedReplicaInfoList = PagedList<ReplicaInfo>;

optional_params! {
    /// Optional parameters of `get_replica_info_list`.
    pub struct GetReplicaInfoListOptionalParams {
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
    }

    /// Optional parameters of `get_replica_health`.
    pub struct GetReplicaHealthOptionalParams {
        /// Events to include.
        events_health_state_filter: HealthStateFilter => "EventsHealthStateFilter",
    }

    /// Optional parameters of `report_replica_health`.
    pub struct ReportReplicaHealthOptionalParams {
        /// Send the report immediately.
        immediate: bool => "Immediate",
    }
}

/// Optional parameters of `get_replica_health_using_policy`.
pub type GetReplicaHealthUsingPolicyOptionalParams = GetReplicaHealthOptionalParams;
/// Optional parameters of `get_replica_info`.
pub type GetReplicaInfoOptionalParams = TimeoutOptionalParams;

/// Response of `get_replica_info_list`.
pub type GetReplicaInfoListResponse = PagedReplicaInfoList;
/// Response of `get_replica_info`.
pub type GetReplicaInfoResponse = ReplicaInfo;
/// Response of `get_replica_health`.
pub type GetReplicaHealthResponse = ReplicaHealth;
/// Response of `get_replica_health_using_policy`.
pub type GetReplicaHealthUsingPolicyResponse = ReplicaHealth;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replica_page_mixes_kinds() {
        let page: PagedReplicaInfoList = serde_json::from_value(json!({
            "ContinuationToken": "",
            "Items": [
                {
                    "ServiceKind": "Stateful",
                    "ReplicaId": "131441",
                    "ReplicaRole": "Primary",
                    "ReplicaStatus": "Ready",
                    "HealthState": "Ok",
                    "NodeName": "_Node_0",
                    "LastInBuildDurationInSeconds": "1"
                },
                {
                    "ServiceKind": "Stateless",
                    "InstanceId": "131442",
                    "ReplicaStatus": "Ready",
                    "NodeName": "_Node_1"
                }
            ]
        }))
        .expect("decode");

        assert!(!page.has_more());
        assert_eq!(page.items.len(), 2);
        assert!(page.items[0].is_primary());
        assert_eq!(page.items[0].id(), Some("131441"));
        assert!(!page.items[1].is_primary());
        assert_eq!(page.items[1].id(), Some("131442"));
    }

    #[test]
    fn new_roles_are_kept_verbatim() {
        let info: ReplicaInfo = serde_json::from_value(json!({
            "ServiceKind": "Stateful",
            "ReplicaRole": "Witness"
        }))
        .expect("decode");
        let ReplicaKind::Stateful { replica_role, .. } = info.kind else {
            panic!("expected stateful replica");
        };
        assert_eq!(replica_role, Some(ReplicaRole::Unrecognized("Witness".into())));
    }
}
