//! Error types for the API client.

/// Error code for a server response with status >= 400 that carried no `code`.
pub const HTTP_ERROR: &str = "HTTP_ERROR";
/// Error code for a request that exceeded the configured timeout.
pub const TIMEOUT_ERROR: &str = "TIMEOUT_ERROR";
/// Error code for a request that could not reach the server.
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
/// Error code for any other transport failure.
pub const REQUEST_ERROR: &str = "REQUEST_ERROR";
/// Error code for a successful response whose body was not the expected JSON.
pub const JSON_DECODE_ERROR: &str = "JSON_DECODE_ERROR";

/// Errors that can occur when making API requests.
///
/// Every variant exposes the same three facets through [`Error::message`],
/// [`Error::status_code`] and [`Error::error_code`]. `status_code` is 0
/// whenever no HTTP response was obtained.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The server answered with status >= 400.
    ///
    /// `code` and `message` come from the response body when it is a JSON
    /// object carrying them, otherwise they are synthesized from the status.
    #[error("{message}")]
    HttpStatus {
        status: u16,
        code: String,
        message: String,
    },
    /// The request exceeded the configured timeout.
    #[error("Request timeout")]
    Timeout,
    /// The server could not be reached.
    #[error("Network error: Unable to connect to FVChain server")]
    Network,
    /// Any other transport or request construction failure.
    #[error("Request error: {0}")]
    Request(String),
    /// A successful response body was not valid JSON of the expected shape.
    #[error("Invalid JSON response from server")]
    JsonDecode,
}

impl Error {
    /// Builds an [`Error::HttpStatus`] from a failed response's status and body.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let field = |name: &str| {
            parsed
                .as_ref()
                .and_then(|v| v.get(name))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };
        Error::HttpStatus {
            status,
            code: field("code").unwrap_or_else(|| HTTP_ERROR.to_string()),
            message: field("message").unwrap_or_else(|| format!("HTTP {} Error", status)),
        }
    }

    /// Classifies a transport failure reported by reqwest.
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Network
        } else {
            Error::Request(err.to_string())
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status of the failed response, or 0 if none was received.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::HttpStatus { status, .. } => *status,
            _ => 0,
        }
    }

    /// Error tag: a server-supplied code or one of the constants in this module.
    pub fn error_code(&self) -> &str {
        match self {
            Error::HttpStatus { code, .. } => code,
            Error::Timeout => TIMEOUT_ERROR,
            Error::Network => NETWORK_ERROR,
            Error::Request(_) => REQUEST_ERROR,
            Error::JsonDecode => JSON_DECODE_ERROR,
        }
    }
}
