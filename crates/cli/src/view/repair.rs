use ::common::api::repair::RepairTask;

use super::format::{format_optional_str, format_timestamp};
use super::table::render_table;

pub fn render_repair_tasks(tasks: &[RepairTask]) -> String {
    let rows = tasks
        .iter()
        .map(|task| {
            vec![
                task.task_id.clone(),
                task.state.to_string(),
                task.action.clone(),
                format_optional_str(task.executor.as_deref()),
                format_optional_str(task.version.as_deref()),
                format_timestamp(task.history.as_ref().and_then(|h| h.created_utc_timestamp)),
            ]
        })
        .collect::<Vec<_>>();
    render_table(
        &["TASK_ID", "STATE", "ACTION", "EXECUTOR", "VERSION", "CREATED"],
        &rows,
    )
}
