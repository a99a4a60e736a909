pub mod args;
pub mod commands;
pub mod profile_store;
pub mod telemetry;
#[cfg(test)]
mod test_support;
mod version;
pub mod view;

pub use args::*;
pub use commands::CommandContext;

use clap::Parser;
use fabric_client::{ClientConfig, FabricClient};
use tracing::debug;

use crate::commands::apps::{handle_app_types, handle_apps};
use crate::commands::backup::handle_backup;
use crate::commands::chaos::handle_chaos;
use crate::commands::cluster::handle_cluster;
use crate::commands::completions::generate_completions;
use crate::commands::mesh::handle_mesh;
use crate::commands::nodes::handle_nodes;
use crate::commands::profiles::handle_profiles;
use crate::commands::repair::handle_repair;
use crate::commands::services::{handle_partitions, handle_replicas, handle_services};
use crate::commands::store::handle_store;
use crate::profile_store::{Profile, ProfileStore};

/// Shared async entrypoint used by the CLI binary.
pub async fn run() -> anyhow::Result<()> {
    run_parsed(Cli::parse()).await
}

/// Execute the CLI given a pre-parsed argument struct.
pub async fn run_parsed(cli: Cli) -> anyhow::Result<()> {
    // Commands that never talk to the cluster.
    let command = match cli.command {
        Commands::Profile { command } => return handle_profiles(cli.profile, command),
        Commands::Completions { shell } => {
            generate_completions(shell);
            return Ok(());
        }
        command => command,
    };

    let store = ProfileStore::load()?;
    let profile = store.resolve(cli.profile.as_deref())?;
    if let Some((name, _)) = profile {
        debug!(profile = name, "using profile");
    }

    let cfg = resolve_config(ClientConfig::load()?, profile.map(|(_, p)| p), &cli.globals)?;
    debug!(endpoint = %cfg.endpoint, "connecting");
    let client = FabricClient::from_config(&cfg)?;
    let ctx = CommandContext::new(client, cli.globals.server_timeout);

    match command {
        Commands::Cluster { command } => handle_cluster(&ctx, command).await?,
        Commands::Node { command } => handle_nodes(&ctx, command).await?,
        Commands::AppType { command } => handle_app_types(&ctx, command).await?,
        Commands::App { command } => handle_apps(&ctx, command).await?,
        Commands::Service { command } => handle_services(&ctx, command).await?,
        Commands::Partition { command } => handle_partitions(&ctx, command).await?,
        Commands::Replica { command } => handle_replicas(&ctx, command).await?,
        Commands::Chaos { command } => handle_chaos(&ctx, command).await?,
        Commands::Repair { command } => handle_repair(&ctx, command).await?,
        Commands::Store { command } => handle_store(&ctx, command).await?,
        Commands::Backup { command } => handle_backup(&ctx, command).await?,
        Commands::Mesh { command } => handle_mesh(&ctx, command).await?,
        Commands::Profile { .. } | Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Precedence: flags and `FABRICCTL_*` env > profile > `base`.
fn resolve_config(
    mut cfg: ClientConfig,
    profile: Option<&Profile>,
    globals: &GlobalArgs,
) -> anyhow::Result<ClientConfig> {
    if let Some(profile) = profile {
        profile.apply(&mut cfg);
    }
    globals.apply(&mut cfg);
    cfg.endpoint = cfg.endpoint.trim().to_string();
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_win_over_profile_and_profile_over_base() {
        let base = ClientConfig::new("http://localhost:19080");
        let profile = Profile {
            endpoint: Some("https://prod.example:19080".into()),
            token: Some("from-profile".into()),
            request_timeout_secs: Some(15),
            ..Default::default()
        };
        let globals = GlobalArgs {
            token: Some("from-flag".into()),
            ..Default::default()
        };

        let cfg = resolve_config(base, Some(&profile), &globals).expect("config");
        assert_eq!(cfg.endpoint, "https://prod.example:19080");
        assert_eq!(cfg.bearer_token.as_deref(), Some("from-flag"));
        assert_eq!(cfg.request_timeout_secs, 15);
    }

    #[test]
    fn half_configured_client_certificate_is_rejected() {
        let globals = GlobalArgs {
            client_cert: Some("/etc/fabric/client.pem".into()),
            ..Default::default()
        };
        let err = resolve_config(ClientConfig::default(), None, &globals).expect_err("invalid");
        assert!(err.to_string().contains("client_key_path"));
    }
}
