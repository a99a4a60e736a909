use super::cluster::OutputOnlyArgs;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum MeshCommands {
    /// List mesh applications.
    Apps(OutputOnlyArgs),
    /// List mesh secrets.
    Secrets(OutputOnlyArgs),
    /// List mesh volumes.
    Volumes(OutputOnlyArgs),
    /// List mesh networks.
    Networks(OutputOnlyArgs),
    /// List mesh gateways.
    Gateways(OutputOnlyArgs),
}
