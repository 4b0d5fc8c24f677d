/// Unified error type for API calls
///
/// Every failure a caller can see from the client maps to one of three
/// variants:
///
/// - `Transport`: the request never produced an HTTP response (connect,
///   DNS, TLS, timeout). Surfaced to users as a generic unable-to-load
///   message.
/// - `Status`: the server answered with a non-2xx status. The user-facing
///   message is taken from the parsed error body's `message` (or `error`)
///   field; when the body is unparsable the message falls back to
///   `"API request failed"` and `details` is `None`.
/// - `Decode`: a 2xx body did not match the expected shape where a shape
///   was required (reads of single entities).
///
/// Callers never retry automatically; retries are user-triggered re-calls.

use serde_json::Value as JsonValue;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Fallback message when an error body carries no usable message
pub const GENERIC_FAILURE: &str = "API request failed";

/// Unified API error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request failed before an HTTP response existed
    #[error("request to {path} failed: {message}")]
    Transport {
        /// Request path for logging
        path: String,
        /// Underlying transport error text
        message: String,
    },

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// User-facing message (server-provided or the generic fallback)
        message: String,
        /// Parsed error body, `None` when the body was unparsable
        details: Option<JsonValue>,
    },

    /// A successful response did not decode into the expected type
    #[error("unexpected response shape from {path}: {message}")]
    Decode {
        /// Request path for logging
        path: String,
        /// Decode failure text
        message: String,
    },
}

impl ApiError {
    /// Builds a `Status` error from a raw non-2xx body
    ///
    /// The message is resolved in order: `details.message`, `details.error`,
    /// then the generic fallback. An unparsable body yields `details: None`.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let details: Option<JsonValue> = serde_json::from_slice(body).ok();

        let message = details
            .as_ref()
            .and_then(|d| {
                d.get("message")
                    .or_else(|| d.get("error"))
                    .and_then(JsonValue::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());

        ApiError::Status {
            status,
            message,
            details,
        }
    }

    /// HTTP status code, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The message a section should surface to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport { .. } => "Unable to reach the server".to_string(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Decode { .. } => GENERIC_FAILURE.to_string(),
        }
    }
}
