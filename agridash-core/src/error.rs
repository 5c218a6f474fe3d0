use thiserror::Error;

/// Errors returned by the remote backend client.
///
/// The dashboard flows do not distinguish between these cases: every variant
/// is collapsed into the fixed user-facing message of the flow that hit it.
/// The detail here is for logs and for callers that want the cause.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("backend request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
