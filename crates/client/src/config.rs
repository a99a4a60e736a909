use std::path::Path;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::warn;

use crate::error::{ClientError, Result};

pub const ENV_PREFIX: &str = "FABRIC_CLIENT";
pub const DEFAULT_CONFIG_FILE: &str = "fabric-client";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:19080";

/// Connection settings for a [`crate::FabricClient`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Cluster HTTP gateway, e.g. `https://cluster.example:19080`.
    pub endpoint: String,
    /// PEM bundle trusted in addition to the system roots.
    #[serde(default)]
    pub ca_cert_path: Option<String>,
    /// PEM client certificate presented to secured clusters.
    #[serde(default)]
    pub client_cert_path: Option<String>,
    /// PEM private key matching `client_cert_path`.
    #[serde(default)]
    pub client_key_path: Option<String>,
    #[serde(default)]
    pub tls_insecure_skip_verify: bool,
    /// Sent as `Authorization: Bearer <token>` for AAD-secured clusters.
    #[serde(default)]
    pub bearer_token: Option<String>,
    /// Whole-request timeout on the HTTP side; 0 disables it.
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            ca_cert_path: None,
            client_cert_path: None,
            client_key_path: None,
            tls_insecure_skip_verify: false,
            bearer_token: None,
            request_timeout_secs: 90,
            connect_timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Loads defaults, then `fabric-client.toml` from the working directory
    /// if present, then `FABRIC_CLIENT_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Like [`ClientConfig::load`], reading `path` instead of the default
    /// file. An explicit path must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let defaults = ClientConfig::default();
        let env = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(false);

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let cfg = config::Config::builder()
            .set_default("endpoint", defaults.endpoint)
            .and_then(|b| b.set_default("tls_insecure_skip_verify", false))
            .and_then(|b| b.set_default("request_timeout_secs", defaults.request_timeout_secs))
            .and_then(|b| b.set_default("connect_timeout_secs", defaults.connect_timeout_secs))
            .map_err(config_error)?
            .add_source(file)
            .add_source(env)
            .build()
            .map_err(config_error)?;

        let mut loaded: ClientConfig = cfg.try_deserialize().map_err(config_error)?;
        loaded.endpoint = loaded.endpoint.trim().to_string();
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(ClientError::Config("endpoint cannot be empty".into()));
        }
        match (&self.client_cert_path, &self.client_key_path) {
            (Some(_), None) => Err(ClientError::Config(
                "client_cert_path is set but client_key_path is missing".into(),
            )),
            (None, Some(_)) => Err(ClientError::Config(
                "client_key_path is set but client_cert_path is missing".into(),
            )),
            _ => Ok(()),
        }
    }
}

fn config_error(err: config::ConfigError) -> ClientError {
    ClientError::Config(err.to_string())
}

/// Builds the HTTP client described by `cfg`.
pub fn build_http_client(cfg: &ClientConfig) -> Result<reqwest::Client> {
    cfg.validate()?;

    let mut builder = reqwest::Client::builder()
        .user_agent(concat!("fabric-client/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs));

    if cfg.request_timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(cfg.request_timeout_secs));
    }

    if let Some(ca_path) = cfg.ca_cert_path.as_ref() {
        let pem = std::fs::read(ca_path).map_err(|err| {
            ClientError::Config(format!("failed to read ca_cert_path {ca_path}: {err}"))
        })?;
        let cert = reqwest::Certificate::from_pem(&pem).map_err(|err| {
            ClientError::Config(format!("invalid certificate in {ca_path}: {err}"))
        })?;
        builder = builder.add_root_certificate(cert);
    }

    if let (Some(cert_path), Some(key_path)) = (&cfg.client_cert_path, &cfg.client_key_path) {
        let mut pem = std::fs::read(cert_path).map_err(|err| {
            ClientError::Config(format!("failed to read client_cert_path {cert_path}: {err}"))
        })?;
        let key = std::fs::read(key_path).map_err(|err| {
            ClientError::Config(format!("failed to read client_key_path {key_path}: {err}"))
        })?;
        pem.push(b'\n');
        pem.extend_from_slice(&key);
        let identity = reqwest::Identity::from_pem(&pem).map_err(|err| {
            ClientError::Config(format!("invalid client identity in {cert_path}: {err}"))
        })?;
        builder = builder.identity(identity);
    }

    if cfg.tls_insecure_skip_verify {
        warn!("TLS certificate verification is disabled; use only for development");
        builder = builder.danger_accept_invalid_certs(true);
    }

    if let Some(token) = cfg.bearer_token.as_deref().filter(|t| !t.trim().is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|err| ClientError::Config(format!("invalid bearer token: {err}")))?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        builder = builder.default_headers(headers);
    }

    builder.build().map_err(ClientError::Transport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_explicit_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        writeln!(
            file,
            "endpoint = \" https://cluster.example:19080 \"\nrequest_timeout_secs = 5\nbearer_token = \"abc\""
        )
        .expect("write");

        let cfg = ClientConfig::load_from(Some(file.path())).expect("load");
        assert_eq!(cfg.endpoint, "https://cluster.example:19080");
        assert_eq!(cfg.request_timeout_secs, 5);
        assert_eq!(cfg.connect_timeout_secs, 10);
        assert_eq!(cfg.bearer_token.as_deref(), Some("abc"));
        assert!(!cfg.tls_insecure_skip_verify);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ClientConfig::load_from(Some(&dir.path().join("absent.toml")))
            .expect_err("missing file");
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn half_configured_identity_is_rejected() {
        let cfg = ClientConfig {
            client_cert_path: Some("/tmp/cert.pem".into()),
            ..ClientConfig::default()
        };
        let err = build_http_client(&cfg).expect_err("key missing");
        assert!(err.to_string().contains("client_key_path"));
    }

    #[test]
    fn unreadable_ca_is_reported() {
        let cfg = ClientConfig {
            ca_cert_path: Some("/nonexistent/ca.pem".into()),
            ..ClientConfig::default()
        };
        let err = build_http_client(&cfg).expect_err("missing ca");
        assert!(err.to_string().contains("ca_cert_path"));
    }

    #[test]
    fn default_config_builds() {
        build_http_client(&ClientConfig::default()).expect("client");
    }
}
