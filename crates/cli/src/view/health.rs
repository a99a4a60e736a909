use ::common::api::HealthState;
use ::common::api::health::{EntityHealth, HealthEvaluation};

use super::format::{color_health_state, format_optional_str, format_timestamp};
use super::table::render_table;

/// One child row of a health report: its label and aggregated state.
pub struct ChildState<'a> {
    pub label: String,
    pub state: Option<&'a HealthState>,
}

/// Aggregated state, child states, events and the unhealthy evaluation tree.
pub fn render_entity_health(
    title: &str,
    health: &EntityHealth,
    child_header: &str,
    children: &[ChildState<'_>],
    colorize: bool,
) -> String {
    let mut sections = vec![format!(
        "{title}: {}",
        color_health_state(health.aggregated_health_state.as_ref(), colorize)
    )];

    if !children.is_empty() {
        let rows = children
            .iter()
            .map(|child| {
                vec![
                    child.label.clone(),
                    color_health_state(child.state, colorize),
                ]
            })
            .collect::<Vec<_>>();
        sections.push(render_table(&[child_header, "HEALTH"], &rows));
    }

    if !health.health_events.is_empty() {
        let rows = health
            .health_events
            .iter()
            .map(|event| {
                vec![
                    event.information.source_id.clone(),
                    event.information.property.clone(),
                    color_health_state(Some(&event.information.health_state), colorize),
                    format_timestamp(event.source_utc_timestamp),
                    format_optional_str(event.information.description.as_deref()),
                ]
            })
            .collect::<Vec<_>>();
        sections.push(render_table(
            &["SOURCE", "PROPERTY", "HEALTH", "REPORTED", "DESCRIPTION"],
            &rows,
        ));
    }

    let mut lines = Vec::new();
    for wrapper in &health.unhealthy_evaluations {
        if let Some(evaluation) = &wrapper.health_evaluation {
            evaluation.walk(&mut |depth, eval: &HealthEvaluation| {
                lines.push(format!(
                    "{}- [{}] {}",
                    "  ".repeat(depth),
                    color_health_state(eval.aggregated_health_state.as_ref(), colorize),
                    format_optional_str(eval.description.as_deref())
                ));
            });
        }
    }
    if !lines.is_empty() {
        sections.push(format!("Unhealthy evaluations:\n{}", lines.join("\n")));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_events_and_nested_evaluations() {
        let health: EntityHealth = serde_json::from_value(json!({
            "AggregatedHealthState": "Warning",
            "HealthEvents": [{
                "SourceId": "System.FM",
                "Property": "State",
                "HealthState": "Warning",
                "Description": "node is slow",
                "SequenceNumber": "10",
                "IsExpired": false
            }],
            "UnhealthyEvaluations": [{
                "HealthEvaluation": {
                    "Kind": "Nodes",
                    "AggregatedHealthState": "Warning",
                    "Description": "1 of 5 nodes unhealthy",
                    "MaxPercentUnhealthyNodes": 0,
                    "TotalCount": 5,
                    "UnhealthyEvaluations": [{
                        "HealthEvaluation": {
                            "Kind": "Node",
                            "AggregatedHealthState": "Warning",
                            "Description": "_Node_3 is Warning",
                            "NodeName": "_Node_3",
                            "UnhealthyEvaluations": []
                        }
                    }]
                }
            }]
        }))
        .expect("health");

        let children = [ChildState {
            label: "_Node_3".into(),
            state: Some(&HealthState::Warning),
        }];
        let out = render_entity_health("Cluster", &health, "NODE", &children, false);

        assert!(out.starts_with("Cluster: Warning"));
        assert!(out.contains("System.FM"));
        assert!(out.contains("node is slow"));
        assert!(out.contains("- [Warning] 1 of 5 nodes unhealthy"));
        assert!(out.contains("  - [Warning] _Node_3 is Warning"));
    }
}
