use std::fmt;
use std::path::PathBuf;

/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the ConnectIPS client
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Private key file missing or unparsable
    #[error("Failed to load private key from {}: {reason}", path.display())]
    KeyLoad { path: PathBuf, reason: String },

    /// RSA signing failed
    #[error("Signature failed: {0}")]
    Signature(String),

    /// Transport failure, non-success status, or malformed gateway response.
    /// `body` holds the raw response body when one was received.
    #[error("Gateway call to {endpoint} failed ({failure}): {body}")]
    GatewayCall {
        endpoint: String,
        failure: GatewayFailure,
        body: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Why a gateway call did not yield a usable response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayFailure {
    /// The request never produced an HTTP response
    Transport(String),
    /// The gateway answered with a non-2xx status
    Status(u16),
    /// A 2xx response whose body is not a JSON object
    MalformedResponse(String),
}

impl fmt::Display for GatewayFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayFailure::Transport(reason) => write!(f, "transport error: {}", reason),
            GatewayFailure::Status(code) => write!(f, "HTTP {}", code),
            GatewayFailure::MalformedResponse(reason) => {
                write!(f, "malformed response: {}", reason)
            }
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn key_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AppError::KeyLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn signature(msg: impl Into<String>) -> Self {
        AppError::Signature(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn gateway_call(
        endpoint: impl Into<String>,
        failure: GatewayFailure,
        body: impl Into<String>,
    ) -> Self {
        AppError::GatewayCall {
            endpoint: endpoint.into(),
            failure,
            body: body.into(),
        }
    }

    /// Raw response body carried by a `GatewayCall` error
    pub fn response_body(&self) -> Option<&str> {
        match self {
            AppError::GatewayCall { body, .. } => Some(body),
            _ => None,
        }
    }
}
