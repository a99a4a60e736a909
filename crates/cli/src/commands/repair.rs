use ::common::api::repair::{GetRepairTaskListOptionalParams, RepairTaskCancelDescription};

use crate::args::{RepairCommands, state_filter};
use crate::commands::CommandContext;
use crate::view::print_output;
use crate::view::repair::render_repair_tasks;

pub async fn handle_repair(ctx: &CommandContext, command: RepairCommands) -> anyhow::Result<()> {
    match command {
        RepairCommands::List(args) => {
            let params = GetRepairTaskListOptionalParams {
                timeout: ctx.server_timeout,
                task_id_filter: args.task_id_prefix,
                state_filter: state_filter(&args.states),
                executor_filter: args.executor,
            };
            let tasks = ctx.client.get_repair_task_list(&params).await?;
            print_output(args.output.mode(), &tasks, |t| render_repair_tasks(t))?;
        }
        RepairCommands::Cancel(args) => {
            let description = RepairTaskCancelDescription {
                task_id: args.task_id.clone(),
                version: args.version,
                request_abort: args.abort.then_some(true),
            };
            let updated = ctx
                .client
                .cancel_repair_task(&description, &ctx.timeout())
                .await?;
            println!(
                "repair task {} cancellation requested (version {})",
                args.task_id, updated.version
            );
        }
    }
    Ok(())
}
