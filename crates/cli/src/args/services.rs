use super::common::{HealthFilterArg, OutputFormatArgs};
use clap::{Args, Subcommand};
use uuid::Uuid;

#[derive(Debug, Subcommand)]
pub enum ServiceCommands {
    /// List services of an application.
    List(ServiceListArgs),
    /// Show the description a service was created with.
    Describe(ServiceIdArgs),
    /// Show service health with per-partition states.
    Health(ServiceHealthArgs),
    /// Resolve the endpoints of a service partition.
    Resolve(ServiceResolveArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServiceListArgs {
    /// Application id.
    pub app: String,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ServiceIdArgs {
    /// Service id, e.g. `myapp~svc` for `fabric:/myapp/svc`.
    pub service: String,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ServiceHealthArgs {
    /// Service id.
    pub service: String,
    /// Partition health states to list.
    #[arg(long = "partitions", value_enum, default_value = "all")]
    pub partitions: HealthFilterArg,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ServiceResolveArgs {
    /// Service id.
    pub service: String,
    /// Partition key of an Int64Range-partitioned service.
    #[arg(long, conflicts_with = "named")]
    pub int64_key: Option<i64>,
    /// Partition name of a Named-partitioned service.
    #[arg(long)]
    pub named: Option<String>,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Subcommand)]
pub enum PartitionCommands {
    /// List partitions of a service.
    List(PartitionListArgs),
    /// Show partition health with per-replica states.
    Health(PartitionIdArgs),
}

#[derive(Debug, Clone, Args)]
pub struct PartitionListArgs {
    /// Service id.
    pub service: String,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct PartitionIdArgs {
    /// Partition id.
    pub partition_id: Uuid,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Subcommand)]
pub enum ReplicaCommands {
    /// List replicas or instances of a partition.
    List(ReplicaListArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ReplicaListArgs {
    /// Partition id.
    pub partition_id: Uuid,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}
