//! Optional-parameter bags shared by every operation.
//!
//! Each REST operation has an `<Operation>OptionalParams` type serialized into
//! the query string. All of them carry the server-side `timeout` (seconds);
//! when it is omitted the service applies [`DEFAULT_SERVER_TIMEOUT_SECS`].
//! The client never fills it in on the caller's behalf.

/// Timeout the service applies when a request omits `timeout`.
pub const DEFAULT_SERVER_TIMEOUT_SECS: u64 = 60;

/// Declares one or more optional-parameter structs.
///
/// Every struct gets `timeout: Option<u64>` plus the listed fields, each an
/// `Option` renamed to its query-string name and skipped when unset.
macro_rules! optional_params {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty => $wire:literal,
            )*
        }
    )+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize)]
        pub struct $name {
            /// Server-side timeout in seconds (the service default is 60).
            #[serde(rename = "timeout", skip_serializing_if = "Option::is_none")]
            pub timeout: Option<u64>,
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Sets the server-side timeout in seconds.
            pub fn with_timeout(mut self, secs: u64) -> Self {
                self.timeout = Some(secs);
                self
            }
        }
    )+};
}

pub(crate) use optional_params;

optional_params! {
    /// Parameters for operations whose only option is the server timeout.
    pub struct TimeoutOptionalParams {}
}

#[cfg(test)]
mod tests {
    use super::*;

    optional_params! {
        /// Sample bag used to exercise the macro.
        pub struct SampleOptionalParams {
            /// Continuation token.
            continuation_token: String => "ContinuationToken",
            /// Page size.
            max_results: i64 => "MaxResults",
        }
    }

    #[test]
    fn unset_fields_are_omitted() {
        let params = SampleOptionalParams::default();
        assert_eq!(serde_json::to_value(&params).expect("encode"), serde_json::json!({}));
    }

    #[test]
    fn fields_use_wire_names() {
        let params = SampleOptionalParams {
            continuation_token: Some("abc".into()),
            max_results: Some(10),
            ..Default::default()
        }
        .with_timeout(30);
        assert_eq!(
            serde_json::to_value(&params).expect("encode"),
            serde_json::json!({"timeout": 30, "ContinuationToken": "abc", "MaxResults": 10})
        );
    }

    #[test]
    fn timeout_only_params_serialize_timeout() {
        let params = TimeoutOptionalParams::default().with_timeout(DEFAULT_SERVER_TIMEOUT_SECS);
        assert_eq!(
            serde_json::to_value(&params).expect("encode"),
            serde_json::json!({"timeout": 60})
        );
    }
}
