use super::common::{DeactivationIntentArg, HealthFilterArg, NodeStatusArg, OutputFormatArgs};
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum NodeCommands {
    /// List nodes with status, health and placement domains.
    List(NodeListArgs),
    /// Show one node.
    Show(NodeShowArgs),
    /// Show node health and its events.
    Health(NodeHealthArgs),
    /// Deactivate a node with the given intent.
    Disable(NodeDisableArgs),
    /// Activate a previously deactivated node.
    Enable(NodeNameArgs),
    /// Restart the fabric process of a node.
    Restart(NodeRestartArgs),
}

#[derive(Debug, Clone, Args)]
pub struct NodeListArgs {
    /// Only list nodes with this status.
    #[arg(long = "status", value_enum)]
    pub status: Option<NodeStatusArg>,
    /// Page size requested from the cluster; all pages are fetched.
    #[arg(long)]
    pub max_results: Option<i64>,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct NodeShowArgs {
    /// Node name.
    pub name: String,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct NodeHealthArgs {
    /// Node name.
    pub name: String,
    /// Health events to include.
    #[arg(long = "events", value_enum, default_value = "all")]
    pub events: HealthFilterArg,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct NodeNameArgs {
    /// Node name.
    pub name: String,
}

#[derive(Debug, Clone, Args)]
pub struct NodeDisableArgs {
    /// Node name.
    pub name: String,
    /// What the node is being deactivated for.
    #[arg(long, value_enum, default_value = "pause")]
    pub intent: DeactivationIntentArg,
}

#[derive(Debug, Clone, Args)]
pub struct NodeRestartArgs {
    /// Node name.
    pub name: String,
    /// Only restart if the node still runs this instance; "0" skips the check.
    #[arg(long, default_value = "0")]
    pub instance_id: String,
    /// Capture a dump of the fabric process before restarting.
    #[arg(long)]
    pub create_dump: bool,
}
