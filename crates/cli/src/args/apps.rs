use super::common::{HealthFilterArg, OutputFormatArgs};
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum AppTypeCommands {
    /// List provisioned application types and versions.
    List(AppTypeListArgs),
}

#[derive(Debug, Clone, Args)]
pub struct AppTypeListArgs {
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// List applications.
    List(AppListArgs),
    /// Show one application.
    Show(AppIdArgs),
    /// Show application health with per-service states.
    Health(AppHealthArgs),
    /// Show progress of the application's current upgrade.
    UpgradeStatus(AppIdArgs),
    /// Delete an application and its services.
    Delete(AppDeleteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct AppListArgs {
    /// Only list applications of this type.
    #[arg(long = "type")]
    pub type_name: Option<String>,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct AppIdArgs {
    /// Application id, e.g. `myapp` for `fabric:/myapp`.
    pub app: String,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct AppHealthArgs {
    /// Application id.
    pub app: String,
    /// Service health states to list.
    #[arg(long = "services", value_enum, default_value = "all")]
    pub services: HealthFilterArg,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct AppDeleteArgs {
    /// Application id.
    pub app: String,
    /// Skip graceful close of replicas.
    #[arg(long)]
    pub force: bool,
}
