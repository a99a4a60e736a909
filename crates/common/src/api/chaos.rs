//! Chaos: parameters, schedule, status and the event history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::health::ClusterHealthPolicy;
use super::known::{UnknownVariant, open_enum, tagged_union};
use super::params::{TimeoutOptionalParams, optional_params};

open_enum! {
    /// Whether Chaos is running.
    pub enum ChaosStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Running.
        Running = "Running",
        /// Stopped.
        Stopped = "Stopped",
    }
}

open_enum! {
    /// Status of the Chaos schedule.
    pub enum ChaosScheduleStatus {
        /// Invalid.
        Invalid = "Invalid",
        /// Stopped.
        Stopped = "Stopped",
        /// Active.
        Active = "Active",
        /// Past its expiry date.
        Expired = "Expired",
        /// Before its start date.
        Pending = "Pending",
    }
}

/// Free-form key/value context recorded with a Chaos run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ChaosContext {
    /// Entries.
    #[serde(default)]
    pub map: BTreeMap<String, String>,
}

/// Entities Chaos may fault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ChaosTargetFilter {
    /// Node types whose nodes may be faulted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_type_inclusion_list: Vec<String>,
    /// Applications whose entities may be faulted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_inclusion_list: Vec<String>,
}

/// Settings of a Chaos run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ChaosParameters {
    /// Run time in seconds, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_run_in_seconds: Option<String>,
    /// Wait for the cluster to stabilize, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cluster_stabilization_timeout_in_seconds: Option<i64>,
    /// Concurrent faults per iteration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_faults: Option<i64>,
    /// Include replica moves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_move_replica_faults: Option<bool>,
    /// Pause between faults, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_between_faults_in_seconds: Option<i64>,
    /// Pause between iterations, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time_between_iterations_in_seconds: Option<i64>,
    /// Health policy checked between iterations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_health_policy: Option<ClusterHealthPolicy>,
    /// Context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ChaosContext>,
    /// Targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chaos_target_filter: Option<ChaosTargetFilter>,
}

/// Current Chaos state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Chaos {
    /// Parameters of the current or last run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chaos_parameters: Option<ChaosParameters>,
    /// Run status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ChaosStatus>,
    /// Schedule status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_status: Option<ChaosScheduleStatus>,
}

/// A Chaos event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ChaosEvent {
    /// When the event happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_stamp_utc: Option<DateTime<Utc>>,
    /// Event payload.
    #[serde(flatten)]
    pub kind: ChaosEventKind,
}

/// Kind-specific part of [`ChaosEvent`], discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "Kind")]
pub enum ChaosEventKind {
    /// Faults chosen for an iteration.
    ExecutingFaults {
        /// Fault descriptions.
        #[serde(rename = "Faults", default)]
        faults: Vec<String>,
    },
    /// Chaos started.
    Started {
        /// Parameters of the run.
        #[serde(rename = "ChaosParameters", default, skip_serializing_if = "Option::is_none")]
        chaos_parameters: Option<ChaosParameters>,
    },
    /// Chaos stopped.
    Stopped {
        /// Reason.
        #[serde(rename = "Reason", default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    /// Unexpected error.
    TestError {
        /// Reason.
        #[serde(rename = "Reason", default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    /// Cluster failed to stabilize.
    ValidationFailed {
        /// Reason.
        #[serde(rename = "Reason", default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    /// Waiting for the cluster to stabilize.
    Waiting {
        /// Reason.
        #[serde(rename = "Reason", default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    /// Event kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<ChaosEventKind>),
}

tagged_union!(
    ChaosEventKind,
    "Kind",
    ["ExecutingFaults", "Started", "Stopped", "TestError", "ValidationFailed", "Waiting"]
);

impl ChaosEventKind {
    /// Wire discriminator of the event.
    pub fn name(&self) -> &str {
        match self {
            ChaosEventKind::ExecutingFaults { .. } => "ExecutingFaults",
            ChaosEventKind::Started { .. } => "Started",
            ChaosEventKind::Stopped { .. } => "Stopped",
            ChaosEventKind::TestError { .. } => "TestError",
            ChaosEventKind::ValidationFailed { .. } => "ValidationFailed",
            ChaosEventKind::Waiting { .. } => "Waiting",
            ChaosEventKind::Unrecognized(unknown) => unknown.tag(),
        }
    }
}

/// Envelope of a [`ChaosEvent`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ChaosEventWrapper {
    /// Event.
    pub chaos_event: ChaosEvent,
}

/// One page of Chaos history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ChaosEventsSegment {
    /// Cursor for the next page; absent or empty when exhausted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
    /// Events, oldest first.
    #[serde(default)]
    pub history: Vec<ChaosEventWrapper>,
}

impl ChaosEventsSegment {
    /// Token to pass on the next request, or `None` when no pages remain.
    pub fn next_token(&self) -> Option<&str> {
        self.continuation_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

/// Time of day, UTC.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TimeOfDay {
    /// Hour, 0-23.
    #[serde(default)]
    pub hour: u8,
    /// Minute, 0-59.
    #[serde(default)]
    pub minute: u8,
}

/// A window during which a schedule job runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TimeRange {
    /// Start.
    #[serde(default)]
    pub start_time: TimeOfDay,
    /// End.
    #[serde(default)]
    pub end_time: TimeOfDay,
}

/// Days on which a schedule job is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ChaosScheduleJobActiveDaysOfWeek {
    /// Sunday.
    #[serde(default)]
    pub sunday: bool,
    /// Monday.
    #[serde(default)]
    pub monday: bool,
    /// Tuesday.
    #[serde(default)]
    pub tuesday: bool,
    /// Wednesday.
    #[serde(default)]
    pub wednesday: bool,
    /// Thursday.
    #[serde(default)]
    pub thursday: bool,
    /// Friday.
    #[serde(default)]
    pub friday: bool,
    /// Saturday.
    #[serde(default)]
    pub saturday: bool,
}

/// A scheduled Chaos job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ChaosScheduleJob {
    /// Key into the schedule's parameter dictionary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chaos_parameters: Option<String>,
    /// Active days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<ChaosScheduleJobActiveDaysOfWeek>,
    /// Active windows.
    #[serde(default)]
    pub times: Vec<TimeRange>,
}

/// Named parameter set referenced by schedule jobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ChaosParametersDictionaryItem {
    /// Name.
    pub key: String,
    /// Parameters.
    pub value: ChaosParameters,
}

/// Chaos schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ChaosSchedule {
    /// First active date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Expiry date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    /// Parameter sets.
    #[serde(default)]
    pub chaos_parameters_dictionary: Vec<ChaosParametersDictionaryItem>,
    /// Jobs.
    #[serde(default)]
    pub jobs: Vec<ChaosScheduleJob>,
}

/// Versioned schedule; the version must match the stored one on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ChaosScheduleDescription {
    /// Version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    /// Schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ChaosSchedule>,
}

optional_params! {
    /// Optional parameters of `get_chaos_events`.
    pub struct GetChaosEventsOptionalParams {
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
        /// Window start, as Windows file time ticks.
        start_time_utc: String => "StartTimeUtc",
        /// Window end, as Windows file time ticks.
        end_time_utc: String => "EndTimeUtc",
        /// Page size.
        max_results: i64 => "MaxResults",
    }
}

/// Optional parameters of `get_chaos`.
pub type GetChaosOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `start_chaos`.
pub type StartChaosOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `stop_chaos`.
pub type StopChaosOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_chaos_schedule`.
pub type GetChaosScheduleOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `post_chaos_schedule`.
pub type PostChaosScheduleOptionalParams = TimeoutOptionalParams;

/// Response of `get_chaos`.
pub type GetChaosResponse = Chaos;
/// Response of `get_chaos_events`.
pub type GetChaosEventsResponse = ChaosEventsSegment;
/// Response of `get_chaos_schedule`.
pub type GetChaosScheduleResponse = ChaosScheduleDescription;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_segment_decodes_every_kind() {
        let segment: ChaosEventsSegment = serde_json::from_value(json!({
            "ContinuationToken": "",
            "History": [
                {"ChaosEvent": {"Kind": "Started", "TimeStampUtc": "2024-01-01T00:00:00Z",
                    "ChaosParameters": {"MaxConcurrentFaults": 3}}},
                {"ChaosEvent": {"Kind": "ExecutingFaults", "Faults": ["RestartNode _Node_1"]}},
                {"ChaosEvent": {"Kind": "Waiting", "Reason": "stabilizing"}},
                {"ChaosEvent": {"Kind": "ValidationFailed", "Reason": "unhealthy"}},
                {"ChaosEvent": {"Kind": "TestError", "Reason": "oops"}},
                {"ChaosEvent": {"Kind": "Stopped", "Reason": "time up"}},
                {"ChaosEvent": {"Kind": "Paused"}}
            ]
        }))
        .expect("decode");

        let names: Vec<_> = segment
            .history
            .iter()
            .map(|wrapper| wrapper.chaos_event.kind.name())
            .collect();
        assert_eq!(
            names,
            [
                "Started",
                "ExecutingFaults",
                "Waiting",
                "ValidationFailed",
                "TestError",
                "Stopped",
                "Paused"
            ]
        );
        assert_eq!(segment.next_token(), None);
    }

    #[test]
    fn event_encodes_kind_literal() {
        let event = ChaosEvent {
            time_stamp_utc: None,
            kind: ChaosEventKind::Stopped {
                reason: Some("done".into()),
            },
        };
        assert_eq!(
            serde_json::to_value(&event).expect("encode"),
            json!({"Kind": "Stopped", "Reason": "done"})
        );
    }

    #[test]
    fn schedule_round_trips_jobs() {
        let description: ChaosScheduleDescription = serde_json::from_value(json!({
            "Version": 2,
            "Schedule": {
                "StartDate": "2024-01-01T00:00:00Z",
                "ExpiryDate": "2025-01-01T00:00:00Z",
                "ChaosParametersDictionary": [
                    {"Key": "weekday", "Value": {"TimeToRunInSeconds": "600"}}
                ],
                "Jobs": [{
                    "ChaosParameters": "weekday",
                    "Days": {"Monday": true, "Friday": true},
                    "Times": [{"StartTime": {"Hour": 1, "Minute": 0}, "EndTime": {"Hour": 2, "Minute": 30}}]
                }]
            }
        }))
        .expect("decode");
        let schedule = description.schedule.expect("schedule");
        let job = &schedule.jobs[0];
        let days = job.days.expect("days");
        assert!(days.monday && days.friday && !days.sunday);
        assert_eq!(job.times[0].end_time.minute, 30);
    }
}
