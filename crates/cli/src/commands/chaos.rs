use ::common::api::PagedList;
use ::common::api::chaos::{ChaosEventWrapper, ChaosParameters, GetChaosEventsOptionalParams};
use fabric_client::{ClientError, collect_items, collect_pages};
use tracing::info;

use crate::args::{ChaosCommands, ChaosEventsArgs, ChaosStartArgs};
use crate::commands::CommandContext;
use crate::view::chaos::{render_chaos_events, render_chaos_schedule, render_chaos_status};
use crate::view::print_output;

pub async fn handle_chaos(ctx: &CommandContext, command: ChaosCommands) -> anyhow::Result<()> {
    match command {
        ChaosCommands::Status(args) => {
            let chaos = ctx.client.get_chaos(&ctx.timeout()).await?;
            print_output(args.output.mode(), &chaos, render_chaos_status)?;
        }
        ChaosCommands::Start(args) => {
            let parameters = chaos_parameters(&args);
            ctx.client.start_chaos(&parameters, &ctx.timeout()).await?;
            info!(time_to_run = ?parameters.time_to_run_in_seconds, "chaos start requested");
            println!("chaos started");
        }
        ChaosCommands::Stop => {
            ctx.client.stop_chaos(&ctx.timeout()).await?;
            println!("chaos stop requested");
        }
        ChaosCommands::Events(args) => chaos_events(ctx, args).await?,
        ChaosCommands::Schedule(args) => {
            let schedule = ctx.client.get_chaos_schedule(&ctx.timeout()).await?;
            print_output(args.output.mode(), &schedule, render_chaos_schedule)?;
        }
    }
    Ok(())
}

fn chaos_parameters(args: &ChaosStartArgs) -> ChaosParameters {
    ChaosParameters {
        time_to_run_in_seconds: args.time_to_run.map(|secs| secs.to_string()),
        max_cluster_stabilization_timeout_in_seconds: args.stabilization_timeout,
        max_concurrent_faults: args.max_concurrent_faults,
        enable_move_replica_faults: args.no_move_replica_faults.then_some(false),
        wait_time_between_faults_in_seconds: args.wait_between_faults,
        wait_time_between_iterations_in_seconds: args.wait_between_iterations,
        ..Default::default()
    }
}

/// `--max-results` bounds the whole listing, not just each page.
fn event_limit(max_results: Option<i64>) -> Option<usize> {
    max_results
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
}

async fn chaos_events(ctx: &CommandContext, args: ChaosEventsArgs) -> anyhow::Result<()> {
    let args = &args;
    let fetch = |token: Option<String>| async move {
        // the time range is only accepted on the first request
        let first = token.is_none();
        let params = GetChaosEventsOptionalParams {
            timeout: ctx.server_timeout,
            continuation_token: token,
            start_time_utc: args.start_ticks.clone().filter(|_| first),
            end_time_utc: args.end_ticks.clone().filter(|_| first),
            max_results: args.max_results,
        };
        let segment = ctx.client.get_chaos_events(&params).await?;
        Ok::<_, ClientError>(PagedList {
            continuation_token: segment.continuation_token,
            items: segment.history,
        })
    };
    let events: Vec<ChaosEventWrapper> = match event_limit(args.max_results) {
        Some(limit) => collect_items(limit, fetch).await?,
        None => collect_pages(fetch).await?,
    };
    print_output(args.output.mode(), &events, |e| render_chaos_events(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_arguments_map_onto_parameters() {
        let args = ChaosStartArgs {
            time_to_run: Some(600),
            max_concurrent_faults: Some(2),
            no_move_replica_faults: true,
            wait_between_faults: None,
            wait_between_iterations: Some(30),
            stabilization_timeout: Some(60),
        };
        let parameters = chaos_parameters(&args);
        assert_eq!(parameters.time_to_run_in_seconds.as_deref(), Some("600"));
        assert_eq!(parameters.enable_move_replica_faults, Some(false));
        assert_eq!(parameters.max_concurrent_faults, Some(2));
        assert_eq!(parameters.wait_time_between_iterations_in_seconds, Some(30));
        assert_eq!(parameters.max_cluster_stabilization_timeout_in_seconds, Some(60));
        assert!(parameters.wait_time_between_faults_in_seconds.is_none());
    }

    #[test]
    fn move_replica_faults_left_to_the_service_by_default() {
        let args = ChaosStartArgs {
            time_to_run: None,
            max_concurrent_faults: None,
            no_move_replica_faults: false,
            wait_between_faults: None,
            wait_between_iterations: None,
            stabilization_timeout: None,
        };
        let parameters = chaos_parameters(&args);
        assert!(parameters.enable_move_replica_faults.is_none());
        assert!(parameters.time_to_run_in_seconds.is_none());
    }

    #[test]
    fn only_positive_max_results_caps_the_listing() {
        assert_eq!(event_limit(Some(25)), Some(25));
        assert_eq!(event_limit(Some(0)), None);
        assert_eq!(event_limit(Some(-1)), None);
        assert_eq!(event_limit(None), None);
    }
}
