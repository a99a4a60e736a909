use ::common::api::HealthStateFilter;
use ::common::api::application::{
    DeleteApplicationOptionalParams, GetApplicationHealthOptionalParams,
    GetApplicationInfoListOptionalParams, GetApplicationInfoOptionalParams,
};
use ::common::api::application_type::{
    ApplicationTypeInfo, GetApplicationTypeInfoListOptionalParams,
};
use fabric_client::collect_pages;

use crate::args::{AppCommands, AppTypeCommands};
use crate::commands::{CommandContext, require};
use crate::view::apps::{
    render_app_details, render_app_health, render_app_types_table, render_app_upgrade,
    render_apps_table,
};
use crate::view::print_output;

pub async fn handle_app_types(
    ctx: &CommandContext,
    command: AppTypeCommands,
) -> anyhow::Result<()> {
    match command {
        AppTypeCommands::List(args) => {
            let types: Vec<ApplicationTypeInfo> = collect_pages(|token| async move {
                let params = GetApplicationTypeInfoListOptionalParams {
                    timeout: ctx.server_timeout,
                    continuation_token: token,
                    ..Default::default()
                };
                ctx.client.get_application_type_info_list(&params).await
            })
            .await?;
            print_output(args.output.mode(), &types, |t| render_app_types_table(t))?;
        }
    }
    Ok(())
}

pub async fn handle_apps(ctx: &CommandContext, command: AppCommands) -> anyhow::Result<()> {
    match command {
        AppCommands::List(args) => {
            let params = GetApplicationInfoListOptionalParams {
                timeout: ctx.server_timeout,
                application_type_name: args.type_name,
                ..Default::default()
            };
            let apps = ctx.client.get_all_applications(&params).await?;
            print_output(args.output.mode(), &apps, |a| {
                render_apps_table(a, ctx.colorize)
            })?;
        }
        AppCommands::Show(args) => {
            let params = GetApplicationInfoOptionalParams {
                timeout: ctx.server_timeout,
                ..Default::default()
            };
            let app = ctx.client.get_application_info(&args.app, &params).await?;
            let app = require(app, &format!("application '{}'", args.app))?;
            print_output(args.output.mode(), &app, |a| {
                render_app_details(a, ctx.colorize)
            })?;
        }
        AppCommands::Health(args) => {
            let params = GetApplicationHealthOptionalParams {
                timeout: ctx.server_timeout,
                services_health_state_filter: Some(HealthStateFilter::from(args.services)),
                ..Default::default()
            };
            let health = ctx.client.get_application_health(&args.app, &params).await?;
            print_output(args.output.mode(), &health, |h| {
                render_app_health(h, ctx.colorize)
            })?;
        }
        AppCommands::UpgradeStatus(args) => {
            let progress = ctx
                .client
                .get_application_upgrade(&args.app, &ctx.timeout())
                .await?;
            print_output(args.output.mode(), &progress, render_app_upgrade)?;
        }
        AppCommands::Delete(args) => {
            let params = DeleteApplicationOptionalParams {
                timeout: ctx.server_timeout,
                force_remove: args.force.then_some(true),
            };
            ctx.client.delete_application(&args.app, &params).await?;
            println!("application {} deleted", args.app);
        }
    }
    Ok(())
}
