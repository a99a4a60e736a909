pub mod apps;
pub mod backup;
pub mod chaos;
pub mod cluster;
pub mod format;
pub mod health;
pub mod mesh;
pub mod nodes;
pub mod repair;
pub mod services;
pub mod store;
pub mod table;

use serde::Serialize;

use crate::args::OutputMode;

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn to_pretty_yaml<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// Renders `value` per `mode`; `table` is only called for table output.
pub fn render<T, F>(mode: OutputMode, value: &T, table: F) -> anyhow::Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match mode {
        OutputMode::Json => to_pretty_json(value),
        OutputMode::Yaml => to_pretty_yaml(value),
        OutputMode::Table => Ok(table(value)),
    }
}

pub fn print_output<T, F>(mode: OutputMode, value: &T, table: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    let rendered = render(mode, value, table)?;
    println!("{}", rendered.trim_end_matches('\n'));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::common::api::node::NodeInfo;

    fn node() -> NodeInfo {
        serde_json::from_value(serde_json::json!({
            "Name": "_Node_0",
            "IpAddressOrFQDN": "10.0.0.4",
            "NodeStatus": "Up",
            "HealthState": "Ok"
        }))
        .expect("node")
    }

    #[test]
    fn json_output_keeps_wire_names() {
        let json = render(OutputMode::Json, &[node()], |_| unreachable!()).expect("render");
        assert!(json.contains("\"Name\": \"_Node_0\""));
        assert!(json.contains("\"NodeStatus\": \"Up\""));
    }

    #[test]
    fn yaml_output_lists_items() {
        let yaml = render(OutputMode::Yaml, &[node()], |_| unreachable!()).expect("render");
        assert!(yaml.contains("Name: _Node_0"));
    }

    #[test]
    fn table_output_uses_renderer() {
        let out = render(OutputMode::Table, &[node()], |nodes| nodes.len().to_string())
            .expect("render");
        assert_eq!(out, "1");
    }
}
