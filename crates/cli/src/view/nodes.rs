use ::common::api::health::NodeHealth;
use ::common::api::node::NodeInfo;

use super::format::{color_health_state, format_bool, format_optional, format_optional_str};
use super::health::render_entity_health;
use super::table::{render_fields, render_table};

pub fn render_nodes_table(nodes: &[NodeInfo], colorize: bool) -> String {
    let headers = [
        "NAME", "ADDRESS", "TYPE", "STATUS", "HEALTH", "UPGRADE_DOMAIN", "FAULT_DOMAIN", "SEED",
        "VERSION",
    ];
    let rows = nodes
        .iter()
        .map(|node| {
            vec![
                format_optional_str(node.name.as_deref()),
                format_optional_str(node.ip_address_or_fqdn.as_deref()),
                format_optional_str(node.node_type.as_deref()),
                format_optional(node.node_status.as_ref()),
                color_health_state(node.health_state.as_ref(), colorize),
                format_optional_str(node.upgrade_domain.as_deref()),
                format_optional_str(node.fault_domain.as_deref()),
                format_bool(node.is_seed_node),
                format_optional_str(node.code_version.as_deref()),
            ]
        })
        .collect::<Vec<_>>();

    render_table(&headers, &rows)
}

pub fn render_node_details(node: &NodeInfo, colorize: bool) -> String {
    render_fields(&[
        ("NAME", format_optional_str(node.name.as_deref())),
        ("ADDRESS", format_optional_str(node.ip_address_or_fqdn.as_deref())),
        ("TYPE", format_optional_str(node.node_type.as_deref())),
        ("STATUS", format_optional(node.node_status.as_ref())),
        ("HEALTH", color_health_state(node.health_state.as_ref(), colorize)),
        ("UPGRADE_DOMAIN", format_optional_str(node.upgrade_domain.as_deref())),
        ("FAULT_DOMAIN", format_optional_str(node.fault_domain.as_deref())),
        ("SEED", format_bool(node.is_seed_node)),
        ("CODE_VERSION", format_optional_str(node.code_version.as_deref())),
        ("CONFIG_VERSION", format_optional_str(node.config_version.as_deref())),
        ("INSTANCE_ID", format_optional_str(node.instance_id.as_deref())),
        ("UPTIME_SECS", format_optional_str(node.node_up_time_in_seconds.as_deref())),
    ])
}

pub fn render_node_health(health: &NodeHealth, colorize: bool) -> String {
    let title = format!("Node {}", format_optional_str(health.name.as_deref()));
    render_entity_health(&title, &health.health, "", &[], colorize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_table_lists_domains_and_health() {
        let nodes: Vec<NodeInfo> = serde_json::from_value(json!([
            {
                "Name": "_Node_0",
                "IpAddressOrFQDN": "10.0.0.4",
                "Type": "NodeType0",
                "NodeStatus": "Up",
                "HealthState": "Ok",
                "IsSeedNode": true,
                "UpgradeDomain": "0",
                "FaultDomain": "fd:/0",
                "CodeVersion": "10.1.1541.9590"
            },
            { "Name": "_Node_1", "NodeStatus": "Down" }
        ]))
        .expect("nodes");

        let table = render_nodes_table(&nodes, false);
        let mut lines = table.lines();
        assert!(lines.next().expect("header").starts_with("NAME"));
        let first = lines.next().expect("row");
        assert!(first.contains("_Node_0"));
        assert!(first.contains("fd:/0"));
        assert!(first.contains("yes"));
        let second = lines.next().expect("row");
        assert!(second.contains("Down"));
        assert!(second.contains(" - "));
    }
}
