use ::common::api::HealthStateFilter;
use ::common::api::node::{
    CreateFabricDump, DeactivationIntentDescription, GetNodeHealthOptionalParams,
    GetNodeInfoListOptionalParams, NodeStatusFilter, RestartNodeDescription,
};
use tracing::info;

use crate::args::{NodeCommands, NodeDisableArgs, NodeListArgs, NodeRestartArgs};
use crate::commands::{CommandContext, require};
use crate::view::nodes::{render_node_details, render_node_health, render_nodes_table};
use crate::view::print_output;

pub async fn handle_nodes(ctx: &CommandContext, command: NodeCommands) -> anyhow::Result<()> {
    match command {
        NodeCommands::List(args) => list_nodes(ctx, args).await?,
        NodeCommands::Show(args) => {
            let node = ctx.client.get_node_info(&args.name, &ctx.timeout()).await?;
            let node = require(node, &format!("node '{}'", args.name))?;
            print_output(args.output.mode(), &node, |n| {
                render_node_details(n, ctx.colorize)
            })?;
        }
        NodeCommands::Health(args) => {
            let params = GetNodeHealthOptionalParams {
                timeout: ctx.server_timeout,
                events_health_state_filter: Some(HealthStateFilter::from(args.events)),
            };
            let health = ctx.client.get_node_health(&args.name, &params).await?;
            print_output(args.output.mode(), &health, |h| {
                render_node_health(h, ctx.colorize)
            })?;
        }
        NodeCommands::Disable(args) => disable_node(ctx, args).await?,
        NodeCommands::Enable(args) => {
            ctx.client.enable_node(&args.name, &ctx.timeout()).await?;
            println!("node {} activation requested", args.name);
        }
        NodeCommands::Restart(args) => restart_node(ctx, args).await?,
    }
    Ok(())
}

async fn list_nodes(ctx: &CommandContext, args: NodeListArgs) -> anyhow::Result<()> {
    let params = GetNodeInfoListOptionalParams {
        timeout: ctx.server_timeout,
        node_status_filter: args.status.map(NodeStatusFilter::from),
        max_results: args.max_results,
        ..Default::default()
    };
    let nodes = ctx.client.get_all_nodes(&params).await?;
    print_output(args.output.mode(), &nodes, |n| {
        render_nodes_table(n, ctx.colorize)
    })
}

async fn disable_node(ctx: &CommandContext, args: NodeDisableArgs) -> anyhow::Result<()> {
    let description = DeactivationIntentDescription {
        deactivation_intent: Some(args.intent.into()),
    };
    ctx.client
        .disable_node(&args.name, &description, &ctx.timeout())
        .await?;
    info!(node = %args.name, intent = ?args.intent, "deactivation requested");
    println!("node {} deactivation requested", args.name);
    Ok(())
}

async fn restart_node(ctx: &CommandContext, args: NodeRestartArgs) -> anyhow::Result<()> {
    let description = RestartNodeDescription {
        node_instance_id: args.instance_id,
        create_fabric_dump: Some(if args.create_dump {
            CreateFabricDump::True
        } else {
            CreateFabricDump::False
        }),
    };
    ctx.client
        .restart_node(&args.name, &description, &ctx.timeout())
        .await?;
    println!("node {} restart requested", args.name);
    Ok(())
}
