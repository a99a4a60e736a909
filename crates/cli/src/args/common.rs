use clap::{Args, ValueEnum};
use common::api::HealthStateFilter;
use common::api::node::{DeactivationIntent, NodeStatusFilter};

#[derive(Debug, Clone, Args)]
pub struct OutputFormatArgs {
    /// Emit JSON instead of a table.
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,
    /// Emit YAML instead of a table.
    #[arg(long, conflicts_with = "json")]
    pub yaml: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
    Yaml,
}

impl OutputFormatArgs {
    pub fn mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.yaml {
            OutputMode::Yaml
        } else {
            OutputMode::Table
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum CompletionShell {
    Bash,
    Fish,
    Zsh,
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum NodeStatusArg {
    All,
    Up,
    Down,
    Enabling,
    Disabling,
    Disabled,
    Unknown,
    Removed,
}

impl From<NodeStatusArg> for NodeStatusFilter {
    fn from(status: NodeStatusArg) -> Self {
        match status {
            NodeStatusArg::All => NodeStatusFilter::All,
            NodeStatusArg::Up => NodeStatusFilter::Up,
            NodeStatusArg::Down => NodeStatusFilter::Down,
            NodeStatusArg::Enabling => NodeStatusFilter::Enabling,
            NodeStatusArg::Disabling => NodeStatusFilter::Disabling,
            NodeStatusArg::Disabled => NodeStatusFilter::Disabled,
            NodeStatusArg::Unknown => NodeStatusFilter::Unknown,
            NodeStatusArg::Removed => NodeStatusFilter::Removed,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "kebab-case")]
pub enum DeactivationIntentArg {
    Pause,
    Restart,
    RemoveData,
    RemoveNode,
}

impl From<DeactivationIntentArg> for DeactivationIntent {
    fn from(intent: DeactivationIntentArg) -> Self {
        match intent {
            DeactivationIntentArg::Pause => DeactivationIntent::Pause,
            DeactivationIntentArg::Restart => DeactivationIntent::Restart,
            DeactivationIntentArg::RemoveData => DeactivationIntent::RemoveData,
            DeactivationIntentArg::RemoveNode => DeactivationIntent::RemoveNode,
        }
    }
}

/// Health states to include in the child lists of a health report.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum HealthFilterArg {
    All,
    Ok,
    Warning,
    Error,
    /// Warning and Error.
    Unhealthy,
}

impl From<HealthFilterArg> for HealthStateFilter {
    fn from(filter: HealthFilterArg) -> Self {
        match filter {
            HealthFilterArg::All => HealthStateFilter::ALL,
            HealthFilterArg::Ok => HealthStateFilter::OK,
            HealthFilterArg::Warning => HealthStateFilter::WARNING,
            HealthFilterArg::Error => HealthStateFilter::ERROR,
            HealthFilterArg::Unhealthy => HealthStateFilter::WARNING | HealthStateFilter::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_mode_prefers_json_then_yaml() {
        let args = OutputFormatArgs {
            json: true,
            yaml: false,
        };
        assert_eq!(args.mode(), OutputMode::Json);

        let args = OutputFormatArgs {
            json: false,
            yaml: true,
        };
        assert_eq!(args.mode(), OutputMode::Yaml);

        let args = OutputFormatArgs {
            json: false,
            yaml: false,
        };
        assert_eq!(args.mode(), OutputMode::Table);
    }

    #[test]
    fn unhealthy_filter_combines_warning_and_error() {
        let filter: HealthStateFilter = HealthFilterArg::Unhealthy.into();
        assert_eq!(filter.bits(), 12);
    }

    #[test]
    fn node_status_arg_maps_to_wire_filter() {
        let filter: NodeStatusFilter = NodeStatusArg::Disabled.into();
        assert_eq!(filter.as_str(), "disabled");
    }
}
