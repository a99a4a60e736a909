//! Rolling upgrade descriptions and progress shared by cluster and application upgrades.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::duration::FabricDuration;
use super::health::HealthEvaluationWrapper;
use super::known::open_enum;
use super::safety::SafetyCheckWrapper;

open_enum! {
    /// Kind of upgrade.
    pub enum UpgradeKind {
        /// Invalid.
        Invalid = "Invalid",
        /// Upgrade proceeds one upgrade domain at a time.
        Rolling = "Rolling",
    }
}

open_enum! {
    /// How an upgrade advances between upgrade domains.
    pub enum UpgradeMode {
        /// Invalid.
        Invalid = "Invalid",
        /// Advance automatically after health checks pass.
        UnmonitoredAuto = "UnmonitoredAuto",
        /// Wait for a manual resume after each domain.
        UnmonitoredManual = "UnmonitoredManual",
        /// Advance automatically and act on health check failures.
        Monitored = "Monitored",
        /// Deferred until the cluster is healthy.
        UnmonitoredDeferred = "UnmonitoredDeferred",
    }
}

open_enum! {
    /// Overall state of an upgrade.
    pub enum UpgradeState {
        /// Invalid.
        Invalid = "Invalid",
        /// Rolling back to the previous version.
        RollingBackInProgress = "RollingBackInProgress",
        /// Rollback finished.
        RollingBackCompleted = "RollingBackCompleted",
        /// Waiting for the next upgrade domain to be started.
        RollingForwardPending = "RollingForwardPending",
        /// Rolling forward to the target version.
        RollingForwardInProgress = "RollingForwardInProgress",
        /// Upgrade finished.
        RollingForwardCompleted = "RollingForwardCompleted",
        /// Upgrade failed and no rollback was requested.
        Failed = "Failed",
    }
}

impl UpgradeState {
    /// Whether no further progress will be reported for this upgrade.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UpgradeState::RollingBackCompleted
                | UpgradeState::RollingForwardCompleted
                | UpgradeState::Failed
        )
    }
}

open_enum! {
    /// State of one upgrade domain.
    pub enum UpgradeDomainState {
        /// Invalid.
        Invalid = "Invalid",
        /// Not started yet.
        Pending = "Pending",
        /// Currently upgrading.
        InProgress = "InProgress",
        /// Finished.
        Completed = "Completed",
    }
}

open_enum! {
    /// State of one upgrade unit (domain or node).
    pub enum UpgradeUnitState {
        /// Invalid.
        Invalid = "Invalid",
        /// Not started yet.
        Pending = "Pending",
        /// Currently upgrading.
        InProgress = "InProgress",
        /// Finished.
        Completed = "Completed",
        /// Failed.
        Failed = "Failed",
    }
}

open_enum! {
    /// Action taken when a monitored upgrade violates policy.
    pub enum FailureAction {
        /// Invalid.
        Invalid = "Invalid",
        /// Roll back to the previous version.
        Rollback = "Rollback",
        /// Switch to unmonitored manual mode.
        Manual = "Manual",
    }
}

open_enum! {
    /// Why an upgrade failed.
    pub enum FailureReason {
        /// No failure.
        None = "None",
        /// Interrupted by a user.
        Interrupted = "Interrupted",
        /// Health checks failed.
        HealthCheck = "HealthCheck",
        /// An upgrade domain timed out.
        UpgradeDomainTimeout = "UpgradeDomainTimeout",
        /// The whole upgrade timed out.
        OverallUpgradeTimeout = "OverallUpgradeTimeout",
    }
}

open_enum! {
    /// Order in which upgrade domains are processed.
    pub enum UpgradeSortOrder {
        /// Invalid.
        Invalid = "Invalid",
        /// Order specified by the cluster manifest.
        Default = "Default",
        /// Numeric order of domain names.
        Numeric = "Numeric",
        /// Lexicographical order of domain names.
        Lexicographical = "Lexicographical",
        /// Reverse numeric order.
        ReverseNumeric = "ReverseNumeric",
        /// Reverse lexicographical order.
        ReverseLexicographical = "ReverseLexicographical",
    }
}

open_enum! {
    /// Phase of a node during an upgrade.
    pub enum NodeUpgradePhase {
        /// Invalid.
        Invalid = "Invalid",
        /// Waiting for safety checks before the upgrade.
        PreUpgradeSafetyCheck = "PreUpgradeSafetyCheck",
        /// Upgrading.
        Upgrading = "Upgrading",
        /// Waiting for safety checks after the upgrade.
        PostUpgradeSafetyCheck = "PostUpgradeSafetyCheck",
    }
}

/// Health monitoring settings of a monitored upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringPolicyDescription {
    /// Action on policy violation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_action: Option<FailureAction>,
    /// Wait after a domain finishes before evaluating health.
    #[serde(
        default,
        rename = "HealthCheckWaitDurationInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_check_wait_duration: Option<FabricDuration>,
    /// How long health must stay stable before moving on.
    #[serde(
        default,
        rename = "HealthCheckStableDurationInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_check_stable_duration: Option<FabricDuration>,
    /// How long health may be retried before the failure action.
    #[serde(
        default,
        rename = "HealthCheckRetryTimeoutInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_check_retry_timeout: Option<FabricDuration>,
    /// Upper bound for the whole upgrade.
    #[serde(
        default,
        rename = "UpgradeTimeoutInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub upgrade_timeout: Option<FabricDuration>,
    /// Upper bound for each upgrade domain.
    #[serde(
        default,
        rename = "UpgradeDomainTimeoutInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub upgrade_domain_timeout: Option<FabricDuration>,
}

/// Settings that can be changed while a rolling upgrade is running.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RollingUpgradeUpdateDescription {
    /// New upgrade mode.
    pub rolling_upgrade_mode: UpgradeMode,
    /// Restart processes even when only configuration changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_restart: Option<bool>,
    /// Seconds to wait for replica safety before proceeding (unmonitored).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_set_check_timeout_in_milliseconds: Option<i64>,
    /// Action on policy violation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_action: Option<FailureAction>,
    /// Wait after a domain finishes before evaluating health.
    #[serde(
        default,
        rename = "HealthCheckWaitDurationInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_check_wait_duration: Option<FabricDuration>,
    /// Stable health duration.
    #[serde(
        default,
        rename = "HealthCheckStableDurationInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_check_stable_duration: Option<FabricDuration>,
    /// Health retry timeout.
    #[serde(
        default,
        rename = "HealthCheckRetryTimeoutInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_check_retry_timeout: Option<FabricDuration>,
    /// Overall upgrade timeout.
    #[serde(
        default,
        rename = "UpgradeTimeoutInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub upgrade_timeout: Option<FabricDuration>,
    /// Per-domain timeout.
    #[serde(
        default,
        rename = "UpgradeDomainTimeoutInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub upgrade_domain_timeout: Option<FabricDuration>,
    /// Maximum time spent processing one domain in parallel.
    #[serde(
        default,
        rename = "InstanceCloseDelayDurationInSeconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub instance_close_delay_duration_in_seconds: Option<i64>,
}

impl RollingUpgradeUpdateDescription {
    /// Update that only changes the upgrade mode.
    pub fn with_mode(mode: UpgradeMode) -> Self {
        RollingUpgradeUpdateDescription {
            rolling_upgrade_mode: mode,
            force_restart: None,
            replica_set_check_timeout_in_milliseconds: None,
            failure_action: None,
            health_check_wait_duration: None,
            health_check_stable_duration: None,
            health_check_retry_timeout: None,
            upgrade_timeout: None,
            upgrade_domain_timeout: None,
            instance_close_delay_duration_in_seconds: None,
        }
    }
}

/// Name and state of an upgrade domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeDomainInfo {
    /// Domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Domain state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<UpgradeDomainState>,
}

/// Name and state of an upgrade unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeUnitInfo {
    /// Unit name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<UpgradeUnitState>,
}

/// Progress of one node within the current upgrade domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NodeUpgradeProgressInfo {
    /// Node name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    /// Phase of the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_phase: Option<NodeUpgradePhase>,
    /// Safety checks the node is waiting on.
    #[serde(default)]
    pub pending_safety_checks: Vec<SafetyCheckWrapper>,
}

/// Progress of the upgrade domain currently being processed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentUpgradeDomainProgressInfo {
    /// Domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// Nodes in the domain.
    #[serde(default)]
    pub node_upgrade_progress_list: Vec<NodeUpgradeProgressInfo>,
}

/// Progress of the upgrade units currently being processed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentUpgradeUnitsProgressInfo {
    /// Domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// Nodes being processed.
    #[serde(default)]
    pub node_upgrade_progress_list: Vec<NodeUpgradeProgressInfo>,
}

/// Details of a failed upgrade domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct FailureUpgradeDomainProgressInfo {
    /// Domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// Nodes in the domain.
    #[serde(default)]
    pub node_upgrade_progress_list: Vec<NodeUpgradeProgressInfo>,
}

/// Fields common to cluster and application upgrade progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeProgressCommon {
    /// Upgrade domains and their states.
    #[serde(default)]
    pub upgrade_domains: Vec<UpgradeDomainInfo>,
    /// Upgrade units and their states.
    #[serde(default)]
    pub upgrade_units: Vec<UpgradeUnitInfo>,
    /// Overall state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_state: Option<UpgradeState>,
    /// Domain that will be processed next.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_upgrade_domain: Option<String>,
    /// Current mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_upgrade_mode: Option<UpgradeMode>,
    /// Elapsed time of the whole upgrade.
    #[serde(
        default,
        rename = "UpgradeDurationInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub upgrade_duration: Option<FabricDuration>,
    /// Elapsed time of the current domain.
    #[serde(
        default,
        rename = "UpgradeDomainDurationInMilliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub upgrade_domain_duration: Option<FabricDuration>,
    /// Health evaluations that blocked the upgrade.
    #[serde(default)]
    pub unhealthy_evaluations: Vec<HealthEvaluationWrapper>,
    /// Domain currently being processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_upgrade_domain_progress: Option<CurrentUpgradeDomainProgressInfo>,
    /// Units currently being processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_upgrade_units_progress: Option<CurrentUpgradeUnitsProgressInfo>,
    /// When the upgrade started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_timestamp_utc: Option<DateTime<Utc>>,
    /// When the upgrade failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_timestamp_utc: Option<DateTime<Utc>>,
    /// Why it failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<FailureReason>,
    /// Failed domain details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_domain_progress_at_failure: Option<FailureUpgradeDomainProgressInfo>,
    /// Free-form status text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_status_details: Option<String>,
    /// Whether domains are processed by node rather than domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_node_by_node: Option<bool>,
}

impl UpgradeProgressCommon {
    /// Counts domains in each state, as `(completed, total)`.
    pub fn domain_counts(&self) -> (usize, usize) {
        let completed = self
            .upgrade_domains
            .iter()
            .filter(|domain| domain.state == Some(UpgradeDomainState::Completed))
            .count();
        (completed, self.upgrade_domains.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn terminal_states() {
        assert!(UpgradeState::RollingForwardCompleted.is_terminal());
        assert!(UpgradeState::RollingBackCompleted.is_terminal());
        assert!(UpgradeState::Failed.is_terminal());
        assert!(!UpgradeState::RollingForwardInProgress.is_terminal());
        assert!(!UpgradeState::RollingForwardPending.is_terminal());
        assert!(!UpgradeState::from("Paused").is_terminal());
    }

    #[test]
    fn monitoring_policy_accepts_both_duration_formats() {
        let policy: MonitoringPolicyDescription = serde_json::from_value(json!({
            "FailureAction": "Rollback",
            "HealthCheckWaitDurationInMilliseconds": "PT0S",
            "HealthCheckStableDurationInMilliseconds": "120000",
            "UpgradeDomainTimeoutInMilliseconds": "P10675199DT02H48M05.4775807S"
        }))
        .expect("decode policy");
        assert_eq!(policy.failure_action, Some(FailureAction::Rollback));
        assert_eq!(
            policy.health_check_stable_duration,
            Some(FabricDuration::from_secs(120))
        );
        assert!(policy.upgrade_domain_timeout.is_some());

        let encoded = serde_json::to_value(&policy).expect("encode");
        assert_eq!(encoded["HealthCheckStableDurationInMilliseconds"], json!("PT2M"));
    }

    #[test]
    fn domain_counts_from_progress() {
        let progress: UpgradeProgressCommon = serde_json::from_value(json!({
            "UpgradeDomains": [
                {"Name": "UD0", "State": "Completed"},
                {"Name": "UD1", "State": "InProgress"},
                {"Name": "UD2", "State": "Pending"}
            ],
            "UpgradeState": "RollingForwardInProgress"
        }))
        .expect("decode");
        assert_eq!(progress.domain_counts(), (1, 3));
    }
}
