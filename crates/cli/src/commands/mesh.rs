use crate::args::MeshCommands;
use crate::commands::CommandContext;
use crate::view::mesh::{
    render_mesh_apps, render_mesh_gateways, render_mesh_networks, render_mesh_secrets,
    render_mesh_volumes,
};
use crate::view::print_output;

// Mesh listings return a single page; the resource API takes no continuation token.
pub async fn handle_mesh(ctx: &CommandContext, command: MeshCommands) -> anyhow::Result<()> {
    let params = ctx.timeout();
    match command {
        MeshCommands::Apps(args) => {
            let apps = ctx.client.list_mesh_applications(&params).await?.items;
            print_output(args.output.mode(), &apps, |a| render_mesh_apps(a, ctx.colorize))?;
        }
        MeshCommands::Secrets(args) => {
            let secrets = ctx.client.list_mesh_secrets(&params).await?.items;
            print_output(args.output.mode(), &secrets, |s| render_mesh_secrets(s))?;
        }
        MeshCommands::Volumes(args) => {
            let volumes = ctx.client.list_mesh_volumes(&params).await?.items;
            print_output(args.output.mode(), &volumes, |v| render_mesh_volumes(v))?;
        }
        MeshCommands::Networks(args) => {
            let networks = ctx.client.list_mesh_networks(&params).await?.items;
            print_output(args.output.mode(), &networks, |n| render_mesh_networks(n))?;
        }
        MeshCommands::Gateways(args) => {
            let gateways = ctx.client.list_mesh_gateways(&params).await?.items;
            print_output(args.output.mode(), &gateways, |g| render_mesh_gateways(g))?;
        }
    }
    Ok(())
}
