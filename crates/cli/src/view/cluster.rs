use ::common::api::cluster::{ClusterLoadInfo, ClusterUpgradeProgressObject, ClusterVersion};
use ::common::api::health::ClusterHealth;

use super::format::{format_bool, format_optional, format_optional_str, format_timestamp};
use super::health::{ChildState, render_entity_health};
use super::table::{render_fields, render_table};

pub fn render_cluster_health(health: &ClusterHealth, colorize: bool) -> String {
    let mut children = health
        .node_health_states
        .iter()
        .map(|node| ChildState {
            label: format!("node/{}", format_optional_str(node.name.as_deref())),
            state: node.state.aggregated_health_state.as_ref(),
        })
        .collect::<Vec<_>>();
    children.extend(health.application_health_states.iter().map(|app| ChildState {
        label: format!("app/{}", format_optional_str(app.name.as_deref())),
        state: app.state.aggregated_health_state.as_ref(),
    }));

    render_entity_health("Cluster", &health.health, "ENTITY", &children, colorize)
}

pub fn render_cluster_version(version: &ClusterVersion) -> String {
    format_optional_str(version.version.as_deref())
}

pub fn render_upgrade_progress(progress: &ClusterUpgradeProgressObject) -> String {
    let common = &progress.progress;
    let mut out = render_fields(&[
        ("CODE_VERSION", format_optional_str(progress.code_version.as_deref())),
        ("CONFIG_VERSION", format_optional_str(progress.config_version.as_deref())),
        ("STATE", format_optional(common.upgrade_state.as_ref())),
        ("MODE", format_optional(common.rolling_upgrade_mode.as_ref())),
        ("NEXT_DOMAIN", format_optional_str(common.next_upgrade_domain.as_deref())),
    ]);

    if !common.upgrade_domains.is_empty() {
        let rows = common
            .upgrade_domains
            .iter()
            .map(|ud| {
                vec![
                    format_optional_str(ud.name.as_deref()),
                    format_optional(ud.state.as_ref()),
                ]
            })
            .collect::<Vec<_>>();
        out.push_str("\n\n");
        out.push_str(&render_table(&["UPGRADE_DOMAIN", "STATE"], &rows));
    }
    out
}

pub fn render_cluster_load(load: &ClusterLoadInfo) -> String {
    let header = render_fields(&[
        ("LAST_BALANCING_START", format_timestamp(load.last_balancing_start_time_utc)),
        ("LAST_BALANCING_END", format_timestamp(load.last_balancing_end_time_utc)),
    ]);
    let rows = load
        .load_metric_information
        .iter()
        .map(|metric| {
            vec![
                format_optional_str(metric.name.as_deref()),
                format_bool(metric.is_balanced_before),
                format_bool(metric.is_balanced_after),
                format_optional_str(metric.deviation_before.as_deref()),
                format_optional_str(metric.deviation_after.as_deref()),
                format_optional_str(metric.action.as_deref()),
            ]
        })
        .collect::<Vec<_>>();
    format!(
        "{header}\n\n{}",
        render_table(
            &[
                "METRIC",
                "BALANCED_BEFORE",
                "BALANCED_AFTER",
                "DEVIATION_BEFORE",
                "DEVIATION_AFTER",
                "ACTION"
            ],
            &rows
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cluster_health_lists_nodes_and_apps() {
        let health: ClusterHealth = serde_json::from_value(json!({
            "AggregatedHealthState": "Error",
            "NodeHealthStates": [{"Name": "_Node_0", "AggregatedHealthState": "Ok"}],
            "ApplicationHealthStates": [{"Name": "fabric:/shop", "AggregatedHealthState": "Error"}]
        }))
        .expect("health");

        let out = render_cluster_health(&health, false);
        assert!(out.starts_with("Cluster: Error"));
        assert!(out.contains("node/_Node_0"));
        assert!(out.contains("app/fabric:/shop"));
    }
}
