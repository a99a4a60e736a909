use ::common::api::mesh::{
    ApplicationResourceDescription, GatewayResourceDescription, NetworkResourceDescription,
    NetworkResourceProperties, SecretKind, SecretResourceDescription, VolumeResourceDescription,
};

use super::format::{color_health_state, format_optional, format_optional_str};
use super::table::render_table;

pub fn render_mesh_apps(apps: &[ApplicationResourceDescription], colorize: bool) -> String {
    let rows = apps
        .iter()
        .map(|app| {
            vec![
                app.name.clone(),
                format_optional(app.properties.status.as_ref()),
                color_health_state(app.properties.health_state.as_ref(), colorize),
                app.properties.service_names.join(","),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["NAME", "STATUS", "HEALTH", "SERVICES"], &rows)
}

pub fn render_mesh_secrets(secrets: &[SecretResourceDescription]) -> String {
    let rows = secrets
        .iter()
        .map(|secret| {
            let kind = match &secret.properties.kind {
                SecretKind::InlinedValue => "inlinedValue",
                SecretKind::KeyVaultVersionedReference => "keyVaultVersionedReference",
                SecretKind::Unrecognized(unknown) => unknown.tag(),
            };
            vec![
                secret.name.clone(),
                kind.to_string(),
                format_optional_str(secret.properties.content_type.as_deref()),
                format_optional(secret.properties.status.as_ref()),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["NAME", "KIND", "CONTENT_TYPE", "STATUS"], &rows)
}

pub fn render_mesh_volumes(volumes: &[VolumeResourceDescription]) -> String {
    let rows = volumes
        .iter()
        .map(|volume| {
            let share = volume
                .properties
                .azure_file_parameters
                .as_ref()
                .map(|p| format!("{}/{}", p.account_name, p.share_name))
                .unwrap_or_else(|| "-".to_string());
            vec![
                volume.name.clone(),
                volume.properties.provider.clone(),
                share,
                format_optional(volume.properties.status.as_ref()),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["NAME", "PROVIDER", "SHARE", "STATUS"], &rows)
}

pub fn render_mesh_networks(networks: &[NetworkResourceDescription]) -> String {
    let rows = networks
        .iter()
        .map(|network| match &network.properties {
            NetworkResourceProperties::Local {
                status,
                network_address_prefix,
                ..
            } => vec![
                network.name.clone(),
                "Local".to_string(),
                format_optional_str(network_address_prefix.as_deref()),
                format_optional(status.as_ref()),
            ],
            NetworkResourceProperties::Unrecognized(unknown) => vec![
                network.name.clone(),
                unknown.tag().to_string(),
                "-".to_string(),
                "-".to_string(),
            ],
        })
        .collect::<Vec<_>>();
    render_table(&["NAME", "KIND", "ADDRESS_PREFIX", "STATUS"], &rows)
}

pub fn render_mesh_gateways(gateways: &[GatewayResourceDescription]) -> String {
    let rows = gateways
        .iter()
        .map(|gateway| {
            let props = &gateway.properties;
            vec![
                gateway.name.clone(),
                format_optional_str(props.source_network.name.as_deref()),
                format_optional_str(props.destination_network.name.as_deref()),
                format_optional_str(props.ip_address.as_deref()),
                format_optional(props.status.as_ref()),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["NAME", "SOURCE", "DESTINATION", "IP_ADDRESS", "STATUS"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn networks_of_unknown_kind_still_list_their_name() {
        let networks: Vec<NetworkResourceDescription> = serde_json::from_value(json!([
            {"name": "appnet", "properties": {"kind": "Local", "networkAddressPrefix": "10.0.0.0/22", "status": "Ready"}},
            {"name": "future", "properties": {"kind": "Overlay"}}
        ]))
        .expect("networks");

        let table = render_mesh_networks(&networks);
        assert!(table.contains("10.0.0.0/22"));
        assert!(
            table
                .lines()
                .any(|line| line.starts_with("future") && line.contains("Overlay"))
        );
    }
}
