use ::common::api::HealthStateFilter;
use ::common::api::cluster::GetClusterHealthOptionalParams;

use crate::args::{ClusterCommands, ClusterHealthArgs};
use crate::commands::CommandContext;
use crate::view::cluster::{
    render_cluster_health, render_cluster_load, render_cluster_version, render_upgrade_progress,
};
use crate::view::print_output;

pub async fn handle_cluster(ctx: &CommandContext, command: ClusterCommands) -> anyhow::Result<()> {
    match command {
        ClusterCommands::Manifest => {
            let manifest = ctx.client.get_cluster_manifest(&ctx.timeout()).await?;
            println!("{}", manifest.manifest.unwrap_or_default());
        }
        ClusterCommands::Health(args) => cluster_health(ctx, args).await?,
        ClusterCommands::Version(args) => {
            let version = ctx.client.get_cluster_version(&ctx.timeout()).await?;
            print_output(args.output.mode(), &version, render_cluster_version)?;
        }
        ClusterCommands::UpgradeStatus(args) => {
            let progress = ctx.client.get_cluster_upgrade_progress(&ctx.timeout()).await?;
            print_output(args.output.mode(), &progress, render_upgrade_progress)?;
        }
        ClusterCommands::Load(args) => {
            let load = ctx.client.get_cluster_load(&ctx.timeout()).await?;
            print_output(args.output.mode(), &load, render_cluster_load)?;
        }
    }
    Ok(())
}

async fn cluster_health(ctx: &CommandContext, args: ClusterHealthArgs) -> anyhow::Result<()> {
    let params = GetClusterHealthOptionalParams {
        timeout: ctx.server_timeout,
        nodes_health_state_filter: Some(HealthStateFilter::from(args.nodes)),
        applications_health_state_filter: Some(HealthStateFilter::from(args.apps)),
        events_health_state_filter: args.events.map(HealthStateFilter::from),
        ..Default::default()
    };
    let health = ctx.client.get_cluster_health(&params).await?;
    print_output(args.output.mode(), &health, |h| {
        render_cluster_health(h, ctx.colorize)
    })
}
