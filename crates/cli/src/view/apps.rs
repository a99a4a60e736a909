use ::common::api::application::{ApplicationInfo, ApplicationUpgradeProgressInfo};
use ::common::api::application_type::ApplicationTypeInfo;
use ::common::api::health::ApplicationHealth;

use super::format::{color_health_state, format_optional, format_optional_str};
use super::health::{ChildState, render_entity_health};
use super::table::{render_fields, render_table};

pub fn render_app_types_table(types: &[ApplicationTypeInfo]) -> String {
    let rows = types
        .iter()
        .map(|ty| {
            vec![
                format_optional_str(ty.name.as_deref()),
                format_optional_str(ty.version.as_deref()),
                format_optional(ty.status.as_ref()),
                format_optional(ty.application_type_definition_kind.as_ref()),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["NAME", "VERSION", "STATUS", "DEFINITION"], &rows)
}

pub fn render_apps_table(apps: &[ApplicationInfo], colorize: bool) -> String {
    let rows = apps
        .iter()
        .map(|app| {
            vec![
                format_optional_str(app.name.as_deref()),
                format_optional_str(app.type_name.as_deref()),
                format_optional_str(app.type_version.as_deref()),
                format_optional(app.status.as_ref()),
                color_health_state(app.health_state.as_ref(), colorize),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["NAME", "TYPE", "VERSION", "STATUS", "HEALTH"], &rows)
}

pub fn render_app_details(app: &ApplicationInfo, colorize: bool) -> String {
    let mut out = render_fields(&[
        ("ID", format_optional_str(app.id.as_deref())),
        ("NAME", format_optional_str(app.name.as_deref())),
        ("TYPE", format_optional_str(app.type_name.as_deref())),
        ("VERSION", format_optional_str(app.type_version.as_deref())),
        ("STATUS", format_optional(app.status.as_ref())),
        ("HEALTH", color_health_state(app.health_state.as_ref(), colorize)),
    ]);
    if !app.parameters.is_empty() {
        let rows = app
            .parameters
            .iter()
            .map(|p| vec![p.key.clone(), p.value.clone()])
            .collect::<Vec<_>>();
        out.push_str("\n\n");
        out.push_str(&render_table(&["PARAMETER", "VALUE"], &rows));
    }
    out
}

pub fn render_app_health(health: &ApplicationHealth, colorize: bool) -> String {
    let children = health
        .service_health_states
        .iter()
        .map(|svc| ChildState {
            label: format_optional_str(svc.service_name.as_deref()),
            state: svc.state.aggregated_health_state.as_ref(),
        })
        .collect::<Vec<_>>();
    let title = format!("Application {}", format_optional_str(health.name.as_deref()));
    render_entity_health(&title, &health.health, "SERVICE", &children, colorize)
}

pub fn render_app_upgrade(progress: &ApplicationUpgradeProgressInfo) -> String {
    let common = &progress.progress;
    let mut out = render_fields(&[
        ("NAME", format_optional_str(progress.name.as_deref())),
        ("TYPE", format_optional_str(progress.type_name.as_deref())),
        (
            "TARGET_VERSION",
            format_optional_str(progress.target_application_type_version.as_deref()),
        ),
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn app_table_shows_type_and_health() {
        let apps: Vec<ApplicationInfo> = serde_json::from_value(json!([{
            "Id": "shop",
            "Name": "fabric:/shop",
            "TypeName": "ShopType",
            "TypeVersion": "1.2.0",
            "Status": "Ready",
            "HealthState": "Warning"
        }]))
        .expect("apps");

        let table = render_apps_table(&apps, false);
        let row = table.lines().nth(1).expect("row");
        assert!(row.contains("fabric:/shop"));
        assert!(row.contains("ShopType"));
        assert!(row.contains("Warning"));
    }
}
