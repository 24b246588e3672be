use shiftplan_core::error::CoreError;

/// Errors surfaced by the client library.
///
/// Server-side rejections arrive as [`ClientError::Api`] with the `code`
/// string from the response body, so callers can pattern-match scheduling
/// conflicts (`BLOCKED_DAY`, `ALREADY_BLOCKED`, `SHIFTS_EXIST`) apart from
/// plain validation failures. Nothing here is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure: connection refused, timeout, TLS, bad URL.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error payload.
    #[error("{message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// A 2xx response carried a body this client cannot parse.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured token cannot be carried in an HTTP header.
    #[error("invalid API token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// Failure raised locally, before any request is made.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    /// The error code reported by the server, if this is an API rejection.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// True when the server rejected the request with the given code.
    pub fn is_code(&self, code: &str) -> bool {
        self.code() == Some(code)
    }
}
