use super::common::OutputFormatArgs;
use clap::{Args, Subcommand, ValueEnum};
use common::api::filter::RepairTaskStateFilter;

#[derive(Debug, Subcommand)]
pub enum RepairCommands {
    /// List repair tasks.
    List(RepairListArgs),
    /// Request cancellation of a repair task.
    Cancel(RepairCancelArgs),
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum RepairStateArg {
    Created,
    Claimed,
    Preparing,
    Approved,
    Executing,
    Restoring,
    Completed,
    /// Anything between created and completed.
    Active,
}

impl From<RepairStateArg> for RepairTaskStateFilter {
    fn from(state: RepairStateArg) -> Self {
        match state {
            RepairStateArg::Created => RepairTaskStateFilter::CREATED,
            RepairStateArg::Claimed => RepairTaskStateFilter::CLAIMED,
            RepairStateArg::Preparing => RepairTaskStateFilter::PREPARING,
            RepairStateArg::Approved => RepairTaskStateFilter::APPROVED,
            RepairStateArg::Executing => RepairTaskStateFilter::EXECUTING,
            RepairStateArg::Restoring => RepairTaskStateFilter::RESTORING,
            RepairStateArg::Completed => RepairTaskStateFilter::COMPLETED,
            RepairStateArg::Active => RepairTaskStateFilter::ACTIVE,
        }
    }
}

/// Combines repeated `--state` values; `None` when none were given.
pub fn state_filter(states: &[RepairStateArg]) -> Option<RepairTaskStateFilter> {
    states
        .iter()
        .map(|state| RepairTaskStateFilter::from(*state))
        .reduce(|acc, next| acc | next)
}

#[derive(Debug, Clone, Args)]
pub struct RepairListArgs {
    /// Only list tasks whose id starts with this prefix.
    #[arg(long)]
    pub task_id_prefix: Option<String>,
    /// Only list tasks in these states (repeatable).
    #[arg(long = "state", value_enum)]
    pub states: Vec<RepairStateArg>,
    /// Only list tasks claimed by this executor.
    #[arg(long)]
    pub executor: Option<String>,
    #[command(flatten)]
    pub output: OutputFormatArgs,
}

#[derive(Debug, Clone, Args)]
pub struct RepairCancelArgs {
    /// Repair task id.
    pub task_id: String,
    /// Expected task version; the request fails if the task changed since.
    #[arg(long)]
    pub version: Option<String>,
    /// Also abort a task that is already executing.
    #[arg(long)]
    pub abort: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_states_are_combined() {
        let filter = state_filter(&[RepairStateArg::Created, RepairStateArg::Completed])
            .expect("filter");
        assert_eq!(filter.bits(), 65);
        assert!(state_filter(&[]).is_none());
    }
}
