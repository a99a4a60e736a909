//! Async client for the Service Fabric cluster management REST API.
//!
//! [`FabricClient`] exposes one method per REST operation, grouped by entity
//! family under `ops`. Request and response types come from
//! [`common::api`]; every method takes the operation's optional-parameter
//! bag and sends it as the query string next to `api-version`.

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub mod config;
pub mod error;
mod ops;
pub mod paging;

pub use common::api;
pub use config::{ClientConfig, build_http_client};
pub use error::{ClientError, Result};
pub use ops::CodePackageRef;
pub use paging::{DEFAULT_MAX_PAGES, collect_items, collect_pages};

#[derive(Clone, Debug)]
pub struct FabricClient {
    http: reqwest::Client,
    base: Url,
}

impl FabricClient {
    /// Wraps an existing HTTP client. `endpoint` is the cluster's HTTP
    /// gateway, e.g. `http://localhost:19080`.
    pub fn new(http: reqwest::Client, endpoint: &str) -> Result<Self> {
        let base = Url::parse(endpoint.trim())
            .map_err(|err| ClientError::Config(format!("invalid endpoint {endpoint}: {err}")))?;
        match base.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ClientError::Config(format!(
                    "unsupported endpoint scheme: {other}"
                )));
            }
        }
        if base.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "endpoint {endpoint} cannot carry a path"
            )));
        }
        Ok(Self { http, base })
    }

    pub fn from_config(cfg: &ClientConfig) -> Result<Self> {
        let http = build_http_client(cfg)?;
        Self::new(http, &cfg.endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.base
    }

    /// Builds the URL for `segments` below the endpoint, encoding each one.
    pub(crate) fn url<S: AsRef<str>>(&self, segments: &[S]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.push(segment.as_ref());
            }
        }
        url
    }

    pub(crate) fn request<S, Q>(
        &self,
        method: Method,
        segments: &[S],
        api_version: &str,
        params: &Q,
    ) -> RequestBuilder
    where
        S: AsRef<str>,
        Q: Serialize + ?Sized,
    {
        self.http
            .request(method, self.url(segments))
            .query(&[("api-version", api_version)])
            .query(params)
    }

    async fn execute(&self, operation: &'static str, req: RequestBuilder) -> Result<Response> {
        let request = req.build()?;
        debug!(
            operation,
            method = %request.method(),
            url = %request.url(),
            "sending request"
        );
        let response = self.http.execute(request).await.map_err(|err| {
            warn!(operation, ?err, "request failed");
            err
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ClientError::from_response(status, body);
        warn!(operation, %status, error = %err, "request returned error");
        Err(err)
    }

    pub(crate) async fn send_json<T>(&self, operation: &'static str, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(operation, req).await?;
        let bytes = response.bytes().await?;
        decode(operation, &bytes)
    }

    /// Like [`FabricClient::send_json`], mapping `204 No Content` (and an
    /// empty body) to `None`.
    pub(crate) async fn send_optional_json<T>(
        &self,
        operation: &'static str,
        req: RequestBuilder,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(operation, req).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        decode(operation, &bytes).map(Some)
    }

    pub(crate) async fn send_empty(&self, operation: &'static str, req: RequestBuilder) -> Result<()> {
        let response = self.execute(operation, req).await?;
        let _ = response.bytes().await?;
        Ok(())
    }
}

/// Converts an entity name such as `fabric:/shop/cart` into the id used in
/// request paths (`shop~cart`). Ids pass through unchanged.
pub fn name_to_id(name: &str) -> String {
    name.trim()
        .trim_start_matches("fabric:")
        .trim_start_matches('/')
        .replace('/', "~")
}

fn decode<T: DeserializeOwned>(operation: &'static str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|source| ClientError::Decode { operation, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str) -> FabricClient {
        FabricClient::new(reqwest::Client::new(), endpoint).expect("client")
    }

    #[test]
    fn segments_are_encoded_below_the_endpoint() {
        let c = client("http://localhost:19080");
        let url = c.url(&["Nodes", "node 1", "$", "GetHealth"]);
        assert_eq!(url.as_str(), "http://localhost:19080/Nodes/node%201/$/GetHealth");

        let prefixed = client("https://gateway.example/sf/");
        let url = prefixed.url(&["Applications", "app~v1"]);
        assert_eq!(url.as_str(), "https://gateway.example/sf/Applications/app~v1");
    }

    #[test]
    fn slashes_inside_a_segment_are_escaped() {
        let c = client("http://localhost:19080");
        let url = c.url(&["Names", "fabric:/app/svc"]);
        assert_eq!(url.path(), "/Names/fabric:%2Fapp%2Fsvc");
    }

    #[test]
    fn query_carries_api_version_and_params() {
        let c = client("http://localhost:19080");
        let params = api::TimeoutOptionalParams::default().with_timeout(30);
        let req = c
            .request(Method::GET, &["$", "GetClusterManifest"], "6.0", &params)
            .build()
            .expect("request");
        assert_eq!(req.url().query(), Some("api-version=6.0&timeout=30"));
    }

    #[test]
    fn names_map_to_ids() {
        assert_eq!(name_to_id("fabric:/shop/cart"), "shop~cart");
        assert_eq!(name_to_id("shop~cart"), "shop~cart");
        assert_eq!(name_to_id("/shop"), "shop");
    }

    #[test]
    fn rejects_unusable_endpoints() {
        assert!(FabricClient::new(reqwest::Client::new(), "not a url").is_err());
        assert!(FabricClient::new(reqwest::Client::new(), "ftp://host").is_err());
        assert!(FabricClient::new(reqwest::Client::new(), "mailto:ops@example.com").is_err());
    }
}
