use super::common::OutputFormatArgs;
use super::cluster::OutputOnlyArgs;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum ChaosCommands {
    /// Show whether chaos is running and with which parameters.
    Status(OutputOnlyArgs),
    /// Start a chaos run.
    Start(ChaosStartArgs),
    /// Stop the current chaos run.
    Stop,
    /// List chaos events, fetching every page.
    Events(ChaosEventsArgs),
    /// Show the chaos schedule.
    Schedule(OutputOnlyArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ChaosStartArgs {
    /// Total run time in seconds.
    #[arg(long)]
    pub time_to_run: Option<u64>,
    /// Faults induced per iteration.
    #[arg(long)]
    pub max_concurrent_faults: Option<i64>,
    /// Do not move primary or secondary replicas.
    #[arg(long)]
    pub no_move_replica_faults: bool,
    /// Seconds to wait between consecutive faults.
    #[arg(long)]
    pub wait_between_faults: Option<i64>,
    /// Seconds to wait between iterations.
    #[arg(long)]
    pub wait_between_iterations: Option<i64>,
    /// Seconds to wait for the cluster to stabilize before reporting a failure.
    #[arg(long)]
    pub stabilization_timeout: Option<i64>,
}

#[derive(Debug, Clone, Args)]
pub struct ChaosEventsArgs {
    /// Window start as a Windows file time in ticks.
    #[arg(long)]
    pub start_ticks: Option<String>,
    /// Window end as a Windows file time in ticks.
    #[arg(long)]
    pub end_ticks: Option<String>,
    /// Page size requested from the cluster.
    #[arg(long)]
    pub max_results: Option<i64>,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}
