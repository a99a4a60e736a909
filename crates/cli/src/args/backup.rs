use super::cluster::OutputOnlyArgs;
use super::common::OutputFormatArgs;
use clap::{Args, Subcommand};
use uuid::Uuid;

#[derive(Debug, Subcommand)]
pub enum BackupCommands {
    /// List backup policies.
    Policies(OutputOnlyArgs),
    /// List backups of a partition.
    List(BackupListArgs),
}

#[derive(Debug, Clone, Args)]
pub struct BackupListArgs {
    /// Partition id.
    pub partition_id: Uuid,
    /// Only the most recent backup.
    #[arg(long)]
    pub latest: bool,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}
