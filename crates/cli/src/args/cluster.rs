use super::common::{HealthFilterArg, OutputFormatArgs};
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum ClusterCommands {
    /// Print the cluster manifest XML.
    Manifest,
    /// Show aggregated cluster health with per-node and per-application states.
    Health(ClusterHealthArgs),
    /// Show the running fabric code version.
    Version(OutputOnlyArgs),
    /// Show progress of the current cluster upgrade.
    UpgradeStatus(OutputOnlyArgs),
    /// Show load and balancing state per metric.
    Load(OutputOnlyArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ClusterHealthArgs {
    /// Node health states to list.
    #[arg(long = "nodes", value_enum, default_value = "all")]
    pub nodes: HealthFilterArg,
    /// Application health states to list.
    #[arg(long = "apps", value_enum, default_value = "all")]
    pub apps: HealthFilterArg,
    /// Health events to include.
    #[arg(long = "events", value_enum)]
    pub events: Option<HealthFilterArg>,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct OutputOnlyArgs {
    #[command(flatten)]
    pub output: OutputFormatArgs,
}
