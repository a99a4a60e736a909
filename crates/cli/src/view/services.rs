use ::common::api::health::{PartitionHealth, ServiceHealth};
use ::common::api::partition::ServicePartitionInfo;
use ::common::api::replica::ReplicaInfo;
use ::common::api::service::{
    ResolvedServicePartition, ServiceDescription, ServiceDescriptionKind, ServiceInfo,
    ServiceInfoKind,
};

use super::format::{
    color_health_state, format_optional, format_optional_str, format_optional_uuid,
};
use super::health::{ChildState, render_entity_health};
use super::table::{render_fields, render_table};

fn service_kind_label(kind: &ServiceInfoKind) -> &str {
    match kind {
        ServiceInfoKind::Stateful { .. } => "Stateful",
        ServiceInfoKind::Stateless => "Stateless",
        ServiceInfoKind::Unrecognized(unknown) => unknown.tag(),
    }
}

pub fn render_services_table(services: &[ServiceInfo], colorize: bool) -> String {
    let rows = services
        .iter()
        .map(|svc| {
            vec![
                format_optional_str(svc.name.as_deref()),
                format_optional_str(svc.type_name.as_deref()),
                service_kind_label(&svc.kind).to_string(),
                format_optional(svc.service_status.as_ref()),
                color_health_state(svc.health_state.as_ref(), colorize),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["NAME", "TYPE", "KIND", "STATUS", "HEALTH"], &rows)
}

pub fn render_service_description(desc: &ServiceDescription) -> String {
    let mut fields = vec![
        ("NAME", desc.service_name.clone()),
        ("TYPE", desc.service_type_name.clone()),
        ("APPLICATION", format_optional_str(desc.application_name.as_deref())),
        (
            "PLACEMENT",
            format_optional_str(desc.placement_constraints.as_deref()),
        ),
    ];
    match &desc.kind {
        ServiceDescriptionKind::Stateful(stateful) => {
            fields.push(("KIND", "Stateful".to_string()));
            fields.push(("TARGET_REPLICAS", stateful.target_replica_set_size.to_string()));
            fields.push(("MIN_REPLICAS", stateful.min_replica_set_size.to_string()));
            fields.push(("PERSISTED", stateful.has_persisted_state.to_string()));
        }
        ServiceDescriptionKind::Stateless(stateless) => {
            fields.push(("KIND", "Stateless".to_string()));
            fields.push(("INSTANCES", stateless.instance_count.to_string()));
        }
        ServiceDescriptionKind::Unrecognized(unknown) => {
            fields.push(("KIND", unknown.tag().to_string()))
        }
    }
    render_fields(&fields)
}

pub fn render_service_health(health: &ServiceHealth, colorize: bool) -> String {
    let children = health
        .partition_health_states
        .iter()
        .map(|partition| ChildState {
            label: format_optional_uuid(partition.partition_id),
            state: partition.state.aggregated_health_state.as_ref(),
        })
        .collect::<Vec<_>>();
    let title = format!("Service {}", format_optional_str(health.name.as_deref()));
    render_entity_health(&title, &health.health, "PARTITION", &children, colorize)
}

pub fn render_resolved_partition(resolved: &ResolvedServicePartition) -> String {
    let partition = resolved
        .partition_information
        .as_ref()
        .map(|info| format!("{} ({})", format_optional_uuid(info.id), info.label()))
        .unwrap_or_else(|| "-".to_string());
    let header = render_fields(&[
        ("SERVICE", format_optional_str(resolved.name.as_deref())),
        ("PARTITION", partition),
        ("VERSION", format_optional_str(resolved.version.as_deref())),
    ]);
    let rows = resolved
        .endpoints
        .iter()
        .map(|ep| {
            vec![
                format_optional(ep.kind.as_ref()),
                format_optional_str(ep.address.as_deref()),
            ]
        })
        .collect::<Vec<_>>();
    format!("{header}\n\n{}", render_table(&["ROLE", "ADDRESS"], &rows))
}

pub fn render_partitions_table(partitions: &[ServicePartitionInfo], colorize: bool) -> String {
    let rows = partitions
        .iter()
        .map(|p| {
            let (id, label) = match &p.partition_information {
                Some(info) => (format_optional_uuid(info.id), info.label()),
                None => ("-".to_string(), "-".to_string()),
            };
            vec![
                id,
                label,
                format_optional(p.partition_status.as_ref()),
                color_health_state(p.health_state.as_ref(), colorize),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["ID", "KEY", "STATUS", "HEALTH"], &rows)
}

pub fn render_partition_health(health: &PartitionHealth, colorize: bool) -> String {
    let children = health
        .replica_health_states
        .iter()
        .map(|replica| ChildState {
            label: format_optional_str(replica.kind.id()),
            state: replica.state.aggregated_health_state.as_ref(),
        })
        .collect::<Vec<_>>();
    let title = format!("Partition {}", format_optional_uuid(health.partition_id));
    render_entity_health(&title, &health.health, "REPLICA", &children, colorize)
}

pub fn render_replicas_table(replicas: &[ReplicaInfo], colorize: bool) -> String {
    let rows = replicas
        .iter()
        .map(|r| {
            vec![
                format_optional_str(r.id()),
                if r.is_primary() { "Primary" } else { "-" }.to_string(),
                format_optional_str(r.node_name.as_deref()),
                format_optional(r.replica_status.as_ref()),
                color_health_state(r.health_state.as_ref(), colorize),
                format_optional_str(r.address.as_deref()),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["ID", "ROLE", "NODE", "STATUS", "HEALTH", "ADDRESS"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replica_table_marks_primary() {
        let replicas: Vec<ReplicaInfo> = serde_json::from_value(json!([
            {
                "ServiceKind": "Stateful",
                "ReplicaId": "131",
                "ReplicaRole": "Primary",
                "ReplicaStatus": "Ready",
                "HealthState": "Ok",
                "NodeName": "_Node_2"
            },
            {
                "ServiceKind": "Stateful",
                "ReplicaId": "132",
                "ReplicaRole": "ActiveSecondary",
                "ReplicaStatus": "Ready",
                "HealthState": "Ok",
                "NodeName": "_Node_3"
            }
        ]))
        .expect("replicas");

        let table = render_replicas_table(&replicas, false);
        let rows = table.lines().skip(1).collect::<Vec<_>>();
        assert!(rows[0].starts_with("131"));
        assert!(rows[0].contains("Primary"));
        assert!(!rows[1].contains("Primary"));
    }

    #[test]
    fn services_table_shows_kind() {
        let services: Vec<ServiceInfo> = serde_json::from_value(json!([{
            "ServiceKind": "Stateless",
            "Id": "shop~web",
            "Name": "fabric:/shop/web",
            "TypeName": "WebType",
            "ServiceStatus": "Active",
            "HealthState": "Ok"
        }]))
        .expect("services");

        let table = render_services_table(&services, false);
        assert!(table.contains("fabric:/shop/web"));
        assert!(table.contains("Stateless"));
    }
}
