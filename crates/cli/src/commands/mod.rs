use std::io::IsTerminal;

use ::common::api::TimeoutOptionalParams;
use fabric_client::FabricClient;

pub mod apps;
pub mod backup;
pub mod chaos;
pub mod cluster;
pub mod completions;
pub mod mesh;
pub mod nodes;
pub mod profiles;
pub mod repair;
pub mod services;
pub mod store;

#[derive(Clone)]
pub struct CommandContext {
    pub client: FabricClient,
    /// Sent as `timeout` on every request when set.
    pub server_timeout: Option<u64>,
    /// Colour health states in table output.
    pub colorize: bool,
}

impl CommandContext {
    pub fn new(client: FabricClient, server_timeout: Option<u64>) -> Self {
        Self {
            client,
            server_timeout,
            colorize: std::io::stdout().is_terminal(),
        }
    }

    /// Params for operations whose only option is the server timeout.
    pub fn timeout(&self) -> TimeoutOptionalParams {
        TimeoutOptionalParams {
            timeout: self.server_timeout,
        }
    }
}

/// Turns a 204/absent lookup into an error naming what was missing.
pub fn require<T>(value: Option<T>, what: &str) -> anyhow::Result<T> {
    value.ok_or_else(|| anyhow::anyhow!("{what} not found"))
}
