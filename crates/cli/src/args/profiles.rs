use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum ProfileCommands {
    /// List configured profiles.
    List,
    /// Show a single profile (defaults to the selected/default profile).
    Show(ProfileShowArgs),
    /// Create or update a profile.
    Set(ProfileSetArgs),
    /// Set the default profile name.
    Use(ProfileNameArgs),
    /// Delete a profile.
    Remove(ProfileNameArgs),
}

#[derive(Debug, Args)]
pub struct ProfileShowArgs {
    /// Profile name (defaults to selected/default profile).
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct ProfileNameArgs {
    /// Profile name.
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ProfileSetArgs {
    /// Profile name to create/update.
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,

    /// Cluster HTTP gateway, e.g. https://cluster.example:19080
    #[arg(long = "cluster-endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// PEM bundle trusted in addition to the system roots.
    #[arg(long = "ca-cert-path", value_name = "PATH")]
    pub ca_cert_path: Option<String>,

    /// PEM client certificate.
    #[arg(long = "client-cert-path", value_name = "PATH")]
    pub client_cert_path: Option<String>,

    /// PEM private key matching the client certificate.
    #[arg(long = "client-key-path", value_name = "PATH")]
    pub client_key_path: Option<String>,

    /// Bearer token sent on every request.
    #[arg(long = "bearer-token", value_name = "TOKEN")]
    pub token: Option<String>,

    /// Skip TLS certificate verification.
    #[arg(long = "skip-verify", value_name = "BOOL")]
    pub insecure: Option<bool>,

    /// Client-side HTTP timeout in seconds.
    #[arg(long = "http-timeout", value_name = "SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Also make this the default profile.
    #[arg(long)]
    pub default: bool,
}
