use ::common::api::chaos::{Chaos, ChaosEventKind, ChaosEventWrapper, ChaosScheduleDescription};

use super::format::{format_bool, format_optional, format_optional_str, format_timestamp};
use super::table::{render_fields, render_table};

pub fn render_chaos_status(chaos: &Chaos) -> String {
    let params = chaos.chaos_parameters.clone().unwrap_or_default();
    render_fields(&[
        ("STATUS", format_optional(chaos.status.as_ref())),
        ("SCHEDULE", format_optional(chaos.schedule_status.as_ref())),
        ("TIME_TO_RUN_SECS", format_optional_str(params.time_to_run_in_seconds.as_deref())),
        ("MAX_CONCURRENT_FAULTS", format_optional(params.max_concurrent_faults.as_ref())),
        ("MOVE_REPLICA_FAULTS", format_bool(params.enable_move_replica_faults)),
        (
            "WAIT_BETWEEN_FAULTS_SECS",
            format_optional(params.wait_time_between_faults_in_seconds.as_ref()),
        ),
        (
            "WAIT_BETWEEN_ITERATIONS_SECS",
            format_optional(params.wait_time_between_iterations_in_seconds.as_ref()),
        ),
    ])
}

fn event_detail(kind: &ChaosEventKind) -> String {
    match kind {
        ChaosEventKind::ExecutingFaults { faults } => faults.join("; "),
        ChaosEventKind::Stopped { reason }
        | ChaosEventKind::TestError { reason }
        | ChaosEventKind::ValidationFailed { reason }
        | ChaosEventKind::Waiting { reason } => format_optional_str(reason.as_deref()),
        ChaosEventKind::Started { .. } | ChaosEventKind::Unrecognized(_) => "-".to_string(),
    }
}

pub fn render_chaos_events(events: &[ChaosEventWrapper]) -> String {
    let rows = events
        .iter()
        .map(|wrapper| {
            let event = &wrapper.chaos_event;
            vec![
                format_timestamp(event.time_stamp_utc),
                event.kind.name().to_string(),
                event_detail(&event.kind),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["TIME", "KIND", "DETAIL"], &rows)
}

pub fn render_chaos_schedule(schedule: &ChaosScheduleDescription) -> String {
    let inner = schedule.schedule.as_ref();
    render_fields(&[
        ("VERSION", format_optional(schedule.version.as_ref())),
        ("START", format_timestamp(inner.and_then(|s| s.start_date))),
        ("EXPIRY", format_timestamp(inner.and_then(|s| s.expiry_date))),
        (
            "PARAMETER_SETS",
            inner
                .map(|s| s.chaos_parameters_dictionary.len().to_string())
                .unwrap_or_else(|| "0".to_string()),
        ),
        (
            "JOBS",
            inner
                .map(|s| s.jobs.len().to_string())
                .unwrap_or_else(|| "0".to_string()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_show_kind_and_reason() {
        let events: Vec<ChaosEventWrapper> = serde_json::from_value(json!([
            {"ChaosEvent": {"Kind": "Started", "TimeStampUtc": "2024-05-01T10:00:00Z"}},
            {"ChaosEvent": {"Kind": "ExecutingFaults", "TimeStampUtc": "2024-05-01T10:00:05Z",
                            "Faults": ["RestartNode _Node_1"]}},
            {"ChaosEvent": {"Kind": "Stopped", "TimeStampUtc": "2024-05-01T11:00:00Z",
                            "Reason": "time to run elapsed"}}
        ]))
        .expect("events");

        let table = render_chaos_events(&events);
        assert!(table.contains("Started"));
        assert!(table.contains("RestartNode _Node_1"));
        assert!(table.contains("time to run elapsed"));
        assert!(table.contains("2024-05-01T11:00:00Z"));
    }
}
