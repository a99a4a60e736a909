use common::api::{FabricError, FabricErrorCodes};
use reqwest::StatusCode;
use thiserror::Error;

/// Result type returned by every [`crate::FabricClient`] operation.
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The cluster answered with a `FabricError` envelope.
    #[error("cluster returned {status}: {error}")]
    Fabric {
        status: StatusCode,
        error: FabricError,
    },
    /// Non-success status whose body was not a `FabricError`.
    #[error("request failed with status {status}{}", render_body(body))]
    Status { status: StatusCode, body: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode response of {operation}: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid client configuration: {0}")]
    Config(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A paged listing did not terminate.
    #[error("pagination aborted: {0}")]
    Paging(String),
}

fn render_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

impl ClientError {
    /// Classifies an error response, preferring the `FabricError` envelope.
    pub(crate) fn from_response(status: StatusCode, body: String) -> Self {
        match serde_json::from_str::<FabricError>(&body) {
            Ok(error) => ClientError::Fabric { status, error },
            Err(_) => ClientError::Status { status, body },
        }
    }

    /// HTTP status of the failed response, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Fabric { status, .. } | ClientError::Status { status, .. } => {
                Some(*status)
            }
            ClientError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Error code reported by the cluster.
    pub fn fabric_code(&self) -> Option<&FabricErrorCodes> {
        match self {
            ClientError::Fabric { error, .. } => Some(&error.error.code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Whether repeating the same request may succeed.
    ///
    /// True for 503/504 responses, for codes the cluster documents as
    /// transient, and for timeouts or refused connections. The client never
    /// retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Fabric { status, error } => {
                is_retryable_status(*status) || error.error.code.is_retryable()
            }
            ClientError::Status { status, .. } => is_retryable_status(*status),
            ClientError::Transport(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fabric_envelope_is_recognised() {
        let err = ClientError::from_response(
            StatusCode::NOT_FOUND,
            r#"{"Error":{"Code":"FABRIC_E_NODE_NOT_FOUND","Message":"node n9 not found"}}"#
                .to_string(),
        );
        assert!(matches!(err, ClientError::Fabric { .. }));
        assert_eq!(err.fabric_code(), Some(&FabricErrorCodes::NodeNotFound));
        assert!(err.is_not_found());
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("node n9 not found"));
    }

    #[test]
    fn plain_body_falls_back_to_status() {
        let err = ClientError::from_response(StatusCode::BAD_GATEWAY, "upstream down".into());
        assert!(matches!(err, ClientError::Status { .. }));
        assert_eq!(
            err.to_string(),
            "request failed with status 502 Bad Gateway: upstream down"
        );

        let empty = ClientError::from_response(StatusCode::BAD_GATEWAY, String::new());
        assert_eq!(
            empty.to_string(),
            "request failed with status 502 Bad Gateway"
        );
    }

    #[test]
    fn retryable_statuses_and_codes() {
        let unavailable = ClientError::from_response(StatusCode::SERVICE_UNAVAILABLE, "".into());
        assert!(unavailable.is_retryable());

        let not_primary = ClientError::from_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"Error":{"Code":"FABRIC_E_NOT_PRIMARY"}}"#.into(),
        );
        assert!(not_primary.is_retryable());

        let conflict = ClientError::from_response(
            StatusCode::CONFLICT,
            r#"{"Error":{"Code":"FABRIC_E_APPLICATION_ALREADY_EXISTS"}}"#.into(),
        );
        assert!(!conflict.is_retryable());
        assert!(!ClientError::Config("bad".into()).is_retryable());
    }
}
