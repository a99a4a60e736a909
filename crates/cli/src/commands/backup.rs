use ::common::api::backup::{
    BackupInfo, BackupPolicyDescription, GetBackupListOptionalParams,
    GetBackupPolicyListOptionalParams,
};
use fabric_client::collect_pages;

use crate::args::BackupCommands;
use crate::commands::CommandContext;
use crate::view::backup::{render_backup_policies, render_backups};
use crate::view::print_output;

pub async fn handle_backup(ctx: &CommandContext, command: BackupCommands) -> anyhow::Result<()> {
    match command {
        BackupCommands::Policies(args) => {
            let policies: Vec<BackupPolicyDescription> = collect_pages(|token| async move {
                let params = GetBackupPolicyListOptionalParams {
                    timeout: ctx.server_timeout,
                    continuation_token: token,
                    ..Default::default()
                };
                ctx.client.get_backup_policy_list(&params).await
            })
            .await?;
            print_output(args.output.mode(), &policies, |p| render_backup_policies(p))?;
        }
        BackupCommands::List(args) => {
            let partition_id = args.partition_id;
            let latest = args.latest.then_some(true);
            let backups: Vec<BackupInfo> = collect_pages(|token| async move {
                let params = GetBackupListOptionalParams {
                    timeout: ctx.server_timeout,
                    latest,
                    continuation_token: token,
                    ..Default::default()
                };
                ctx.client
                    .get_partition_backup_list(partition_id, &params)
                    .await
            })
            .await?;
            print_output(args.output.mode(), &backups, |b| render_backups(b))?;
        }
    }
    Ok(())
}
