use ::common::api::HealthStateFilter;
use ::common::api::health::HealthState;
use ::common::api::partition::{
    GetPartitionHealthOptionalParams, GetPartitionInfoListOptionalParams, ServicePartitionInfo,
};
use ::common::api::replica::{GetReplicaInfoListOptionalParams, ReplicaInfo};
use ::common::api::service::{
    GetServiceHealthOptionalParams, GetServiceInfoListOptionalParams, PartitionKeyType,
    ResolveServiceOptionalParams,
};
use fabric_client::collect_pages;

use crate::args::{PartitionCommands, ReplicaCommands, ServiceCommands, ServiceResolveArgs};
use crate::commands::CommandContext;
use crate::view::print_output;
use crate::view::services::{
    render_partition_health, render_partitions_table, render_replicas_table,
    render_resolved_partition, render_service_description, render_service_health,
    render_services_table,
};

pub async fn handle_services(ctx: &CommandContext, command: ServiceCommands) -> anyhow::Result<()> {
    match command {
        ServiceCommands::List(args) => {
            let params = GetServiceInfoListOptionalParams {
                timeout: ctx.server_timeout,
                ..Default::default()
            };
            let services = ctx.client.get_all_services(&args.app, &params).await?;
            print_output(args.output.mode(), &services, |s| {
                render_services_table(s, ctx.colorize)
            })?;
        }
        ServiceCommands::Describe(args) => {
            let description = ctx
                .client
                .get_service_description(&args.service, &ctx.timeout())
                .await?;
            print_output(args.output.mode(), &description, render_service_description)?;
        }
        ServiceCommands::Health(args) => {
            let params = GetServiceHealthOptionalParams {
                timeout: ctx.server_timeout,
                partitions_health_state_filter: Some(HealthStateFilter::from(args.partitions)),
                ..Default::default()
            };
            let health = ctx.client.get_service_health(&args.service, &params).await?;
            print_output(args.output.mode(), &health, |h| {
                render_service_health(h, ctx.colorize)
            })?;
        }
        ServiceCommands::Resolve(args) => resolve_service(ctx, args).await?,
    }
    Ok(())
}

fn resolve_params(args: &ServiceResolveArgs, timeout: Option<u64>) -> ResolveServiceOptionalParams {
    let (partition_key_type, partition_key_value) = match (&args.int64_key, &args.named) {
        (Some(key), _) => (Some(PartitionKeyType::Int64Range), Some(key.to_string())),
        (None, Some(name)) => (Some(PartitionKeyType::Named), Some(name.clone())),
        (None, None) => (None, None),
    };
    ResolveServiceOptionalParams {
        timeout,
        partition_key_type,
        partition_key_value,
        previous_rsp_version: None,
    }
}

async fn resolve_service(ctx: &CommandContext, args: ServiceResolveArgs) -> anyhow::Result<()> {
    let params = resolve_params(&args, ctx.server_timeout);
    let resolved = ctx.client.resolve_service(&args.service, &params).await?;
    print_output(args.output.mode(), &resolved, render_resolved_partition)
}

pub async fn handle_partitions(
    ctx: &CommandContext,
    command: PartitionCommands,
) -> anyhow::Result<()> {
    match command {
        PartitionCommands::List(args) => {
            let service = args.service.as_str();
            let partitions: Vec<ServicePartitionInfo> = collect_pages(|token| async move {
                let params = GetPartitionInfoListOptionalParams {
                    timeout: ctx.server_timeout,
                    continuation_token: token,
                };
                ctx.client.get_partition_info_list(service, &params).await
            })
            .await?;
            print_output(args.output.mode(), &partitions, |p| {
                render_partitions_table(p, ctx.colorize)
            })?;
        }
        PartitionCommands::Health(args) => {
            let params = GetPartitionHealthOptionalParams {
                timeout: ctx.server_timeout,
                replicas_health_state_filter: Some(HealthStateFilter::ALL),
                ..Default::default()
            };
            let health = ctx
                .client
                .get_partition_health(args.partition_id, &params)
                .await?;
            print_output(args.output.mode(), &health, |h| {
                render_partition_health(h, ctx.colorize)
            })?;
        }
    }
    Ok(())
}

pub async fn handle_replicas(ctx: &CommandContext, command: ReplicaCommands) -> anyhow::Result<()> {
    match command {
        ReplicaCommands::List(args) => {
            let partition_id = args.partition_id;
            let mut replicas: Vec<ReplicaInfo> = collect_pages(|token| async move {
                let params = GetReplicaInfoListOptionalParams {
                    timeout: ctx.server_timeout,
                    continuation_token: token,
                };
                ctx.client.get_replica_info_list(partition_id, &params).await
            })
            .await?;
            // primaries first, then the least healthy
            replicas.sort_by_key(|r| {
                (
                    !r.is_primary(),
                    std::cmp::Reverse(r.health_state.as_ref().map_or(0, HealthState::severity)),
                )
            });
            print_output(args.output.mode(), &replicas, |r| {
                render_replicas_table(r, ctx.colorize)
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::OutputFormatArgs;

    fn resolve_args(int64_key: Option<i64>, named: Option<&str>) -> ServiceResolveArgs {
        ServiceResolveArgs {
            service: "shop~cart".into(),
            int64_key,
            named: named.map(str::to_string),
            output: OutputFormatArgs {
                json: false,
                yaml: false,
            },
        }
    }

    #[test]
    fn resolve_uses_the_given_partition_key() {
        let params = resolve_params(&resolve_args(Some(42), None), Some(10));
        assert_eq!(params.partition_key_type, Some(PartitionKeyType::Int64Range));
        assert_eq!(params.partition_key_value.as_deref(), Some("42"));
        assert_eq!(params.timeout, Some(10));

        let params = resolve_params(&resolve_args(None, Some("eu")), None);
        assert_eq!(params.partition_key_type, Some(PartitionKeyType::Named));

        let params = resolve_params(&resolve_args(None, None), None);
        assert!(params.partition_key_type.is_none());
        assert!(params.partition_key_value.is_none());
    }
}
