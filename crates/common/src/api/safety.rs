//! Safety checks the cluster waits on before taking a node or replica down.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::known::{UnknownVariant, tagged_union};

/// Wrapper around a [`SafetyCheck`] as it appears in progress lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SafetyCheckWrapper {
    /// The pending check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_check: Option<SafetyCheck>,
}

/// A pending safety check, discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "Kind")]
pub enum SafetyCheck {
    /// Waits until enough seed nodes stay up to keep the cluster quorum.
    EnsureSeedNodeQuorum,
    /// Waits until the partition keeps enough available replicas.
    EnsureAvailability(PartitionSafetyCheck),
    /// Waits until the partition keeps write quorum.
    EnsurePartitionQuorum(PartitionSafetyCheck),
    /// Waits for an in-build replica to finish building.
    WaitForInbuildReplica(PartitionSafetyCheck),
    /// Waits for the primary to be placed elsewhere.
    WaitForPrimaryPlacement(PartitionSafetyCheck),
    /// Waits for the primary to be swapped out.
    WaitForPrimarySwap(PartitionSafetyCheck),
    /// Waits for an ongoing reconfiguration to finish.
    WaitForReconfiguration(PartitionSafetyCheck),
    /// Safety check added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<SafetyCheck>),
}

tagged_union!(
    SafetyCheck,
    "Kind",
    [
        "EnsureSeedNodeQuorum",
        "EnsureAvailability",
        "EnsurePartitionQuorum",
        "WaitForInbuildReplica",
        "WaitForPrimaryPlacement",
        "WaitForPrimarySwap",
        "WaitForReconfiguration",
    ]
);

impl SafetyCheck {
    /// Partition the check refers to, if it is partition scoped.
    pub fn partition_id(&self) -> Option<Uuid> {
        match self {
            SafetyCheck::EnsureAvailability(check)
            | SafetyCheck::EnsurePartitionQuorum(check)
            | SafetyCheck::WaitForInbuildReplica(check)
            | SafetyCheck::WaitForPrimaryPlacement(check)
            | SafetyCheck::WaitForPrimarySwap(check)
            | SafetyCheck::WaitForReconfiguration(check) => check.partition_id,
            SafetyCheck::EnsureSeedNodeQuorum | SafetyCheck::Unrecognized(_) => None,
        }
    }
}

/// Fields of a partition-scoped safety check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionSafetyCheck {
    /// Partition id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_partition_and_cluster_checks() {
        let checks: Vec<SafetyCheckWrapper> = serde_json::from_value(json!([
            {"SafetyCheck": {"Kind": "EnsureSeedNodeQuorum"}},
            {"SafetyCheck": {
                "Kind": "WaitForPrimarySwap",
                "PartitionId": "5f6e5a5f-6a0b-4b7e-8f4c-2b0e35a3a6f1"
            }},
            {"SafetyCheck": {"Kind": "EnsureRackQuorum", "Rack": "r1"}}
        ]))
        .expect("decode checks");

        assert_eq!(checks[0].safety_check, Some(SafetyCheck::EnsureSeedNodeQuorum));
        let swap = checks[1].safety_check.as_ref().expect("swap check");
        assert!(matches!(swap, SafetyCheck::WaitForPrimarySwap(_)));
        assert!(swap.partition_id().is_some());
        let rack = checks[2].safety_check.as_ref().expect("rack check");
        assert!(rack.partition_id().is_none());
        assert_eq!(
            serde_json::to_value(rack).expect("encode"),
            json!({"Kind": "EnsureRackQuorum", "Rack": "r1"})
        );
    }

    #[test]
    fn encodes_kind_next_to_fields() {
        let check = SafetyCheck::EnsureAvailability(PartitionSafetyCheck {
            partition_id: Some(Uuid::nil()),
        });
        assert_eq!(
            serde_json::to_value(&check).expect("encode"),
            json!({
                "Kind": "EnsureAvailability",
                "PartitionId": "00000000-0000-0000-0000-000000000000"
            })
        );
    }
}
