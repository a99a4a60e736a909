use clap::{Args, Parser, Subcommand};

use crate::version;

pub mod apps;
pub mod backup;
pub mod chaos;
pub mod cluster;
pub mod common;
pub mod mesh;
pub mod nodes;
pub mod profiles;
pub mod repair;
pub mod services;
pub mod store;

pub use self::common::*;
pub use apps::*;
pub use backup::*;
pub use chaos::*;
pub use cluster::*;
pub use mesh::*;
pub use nodes::*;
pub use profiles::*;
pub use repair::*;
pub use services::*;
pub use store::*;

#[derive(Debug, Parser)]
#[command(
    name = "fabricctl",
    version = version::VERSION,
    long_version = version::FULL_VERSION,
    about = "fabricctl - inspect and operate Service Fabric clusters"
)]
pub struct Cli {
    /// Name of the saved profile to use (from ~/.config/fabricctl/config.toml).
    #[arg(long, env = "FABRICCTL_PROFILE", global = true)]
    pub profile: Option<String>,

    #[command(flatten)]
    pub globals: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection settings. Each one, when given, wins over the selected
/// profile, which wins over `fabric-client.toml` and `FABRIC_CLIENT_*`.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Cluster HTTP gateway, e.g. https://cluster.example:19080
    #[arg(long, env = "FABRICCTL_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// PEM bundle trusted in addition to the system roots.
    #[arg(long, env = "FABRICCTL_CA_CERT", global = true, value_name = "PATH")]
    pub ca_cert: Option<String>,

    /// PEM client certificate for secured clusters.
    #[arg(long, env = "FABRICCTL_CLIENT_CERT", global = true, value_name = "PATH")]
    pub client_cert: Option<String>,

    /// PEM private key matching --client-cert.
    #[arg(long, env = "FABRICCTL_CLIENT_KEY", global = true, value_name = "PATH")]
    pub client_key: Option<String>,

    /// Skip TLS certificate verification (development clusters only).
    #[arg(long, env = "FABRICCTL_INSECURE", global = true)]
    pub insecure: bool,

    /// Bearer token for AAD-secured clusters.
    #[arg(long, env = "FABRICCTL_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Client-side HTTP timeout in seconds.
    #[arg(long, env = "FABRICCTL_REQUEST_TIMEOUT", global = true, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Server-side operation timeout in seconds, sent as `timeout`.
    #[arg(long, env = "FABRICCTL_SERVER_TIMEOUT", global = true, value_name = "SECS")]
    pub server_timeout: Option<u64>,
}

impl GlobalArgs {
    /// Overwrites the settings given on the command line or in the environment.
    pub fn apply(&self, cfg: &mut fabric_client::ClientConfig) {
        if let Some(endpoint) = &self.endpoint {
            cfg.endpoint = endpoint.clone();
        }
        if self.ca_cert.is_some() {
            cfg.ca_cert_path = self.ca_cert.clone();
        }
        if self.client_cert.is_some() {
            cfg.client_cert_path = self.client_cert.clone();
        }
        if self.client_key.is_some() {
            cfg.client_key_path = self.client_key.clone();
        }
        if self.insecure {
            cfg.tls_insecure_skip_verify = true;
        }
        if self.token.is_some() {
            cfg.bearer_token = self.token.clone();
        }
        if let Some(secs) = self.request_timeout {
            cfg.request_timeout_secs = secs;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Cluster-wide manifest, health, version, upgrade and load.
    Cluster {
        #[command(subcommand)]
        command: ClusterCommands,
    },
    /// Node inspection and lifecycle.
    Node {
        #[command(subcommand)]
        command: NodeCommands,
    },
    /// Provisioned application types.
    AppType {
        #[command(subcommand)]
        command: AppTypeCommands,
    },
    /// Application inspection and removal.
    App {
        #[command(subcommand)]
        command: AppCommands,
    },
    /// Services of an application.
    Service {
        #[command(subcommand)]
        command: ServiceCommands,
    },
    /// Partitions of a service.
    Partition {
        #[command(subcommand)]
        command: PartitionCommands,
    },
    /// Replicas and instances of a partition.
    Replica {
        #[command(subcommand)]
        command: ReplicaCommands,
    },
    /// Chaos fault injection.
    Chaos {
        #[command(subcommand)]
        command: ChaosCommands,
    },
    /// Repair tasks.
    Repair {
        #[command(subcommand)]
        command: RepairCommands,
    },
    /// Image store content.
    Store {
        #[command(subcommand)]
        command: StoreCommands,
    },
    /// Periodic backup configuration.
    Backup {
        #[command(subcommand)]
        command: BackupCommands,
    },
    /// Declarative mesh resources.
    Mesh {
        #[command(subcommand)]
        command: MeshCommands,
    },
    /// Saved connection profiles.
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Generate shell completions for the CLI.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn globals_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "fabricctl",
            "node",
            "list",
            "--endpoint",
            "https://cluster.example:19080",
            "--server-timeout",
            "15",
        ])
        .expect("parse");
        assert_eq!(
            cli.globals.endpoint.as_deref(),
            Some("https://cluster.example:19080")
        );
        assert_eq!(cli.globals.server_timeout, Some(15));
    }

    #[test]
    fn globals_override_only_what_was_given() {
        let mut cfg = fabric_client::ClientConfig::new("http://localhost:19080");
        cfg.bearer_token = Some("from-profile".into());
        let globals = GlobalArgs {
            request_timeout: Some(5),
            ..Default::default()
        };

        globals.apply(&mut cfg);
        assert_eq!(cfg.endpoint, "http://localhost:19080");
        assert_eq!(cfg.request_timeout_secs, 5);
        assert_eq!(cfg.bearer_token.as_deref(), Some("from-profile"));
    }
}
