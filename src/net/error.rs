//! Error taxonomy for admin API calls.
//!
//! DESIGN
//! ======
//! Only two failure families exist on the wire: no response at all, or a
//! non-2xx response that may carry a `message`. Decoding failures of a 2xx
//! body are kept separate so logs can tell a schema drift from an outage,
//! but callers treat all three the same way.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback text shown when a failed login carries no server message.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, etc.).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("API response error: status {status}")]
    Status { status: u16, message: Option<String> },

    /// A success response whose body did not match the expected envelope.
    #[error("API response parse failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Stable machine-readable code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_API_TRANSPORT",
            Self::Status { .. } => "E_API_STATUS",
            Self::Decode(_) => "E_API_DECODE",
        }
    }

    /// The server-provided message, if the backend sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text suitable for the login form: server message or the generic fallback.
    pub fn user_message(&self) -> String {
        self.server_message().unwrap_or(LOGIN_FAILED_MESSAGE).to_owned()
    }
}
