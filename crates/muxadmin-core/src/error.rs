//! Error types module
//!
//! Every fallible operation in the admin client reports an `AdminError`. The
//! taxonomy separates failures caught before any request is sent
//! (`Validation`, `NotPermitted`, `Busy`, `InvalidState`, `Config`) from
//! failures reported by the transport (`Network`) or by the CMS (`Server`).

use serde_json::Value as JsonValue;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors such as user input mistakes
    Debug,
    /// Errors reported by the server
    Warn,
    /// Transport failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// Missing or invalid user input. `field` names the form field the
    /// message should be attached to, if any.
    #[error("Validation error: {message}")]
    Validation {
        field: Option<&'static str>,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status. `body` holds the parsed JSON body when the
    /// server sent one.
    #[error("Server error: status {status}")]
    Server {
        status: u16,
        body: Option<JsonValue>,
    },

    #[error("A request is already in progress")]
    Busy,

    #[error("Not permitted: {0}")]
    NotPermitted(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdminError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AdminError::Validation {
            field: Some(field),
            message: message.into(),
        }
    }

    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Validation { .. } => "VALIDATION_ERROR",
            AdminError::Network(_) => "NETWORK_ERROR",
            AdminError::Server { .. } => "SERVER_ERROR",
            AdminError::Busy => "BUSY",
            AdminError::NotPermitted(_) => "NOT_PERMITTED",
            AdminError::InvalidState(_) => "INVALID_STATE",
            AdminError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Mutations are never retried automatically; only a `Busy` rejection
    /// may be attempted again once the outstanding request resolves.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AdminError::Busy)
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            AdminError::Validation { .. }
            | AdminError::Busy
            | AdminError::NotPermitted(_)
            | AdminError::InvalidState(_) => LogLevel::Debug,
            AdminError::Server { .. } => LogLevel::Warn,
            AdminError::Network(_) | AdminError::Config(_) => LogLevel::Error,
        }
    }

    /// Form field this error belongs to. `None` means the error should be
    /// shown as a banner rather than inline.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AdminError::Validation { field, .. } => *field,
            _ => None,
        }
    }

    /// Best-effort human message extracted from a server error body.
    /// The CMS wraps errors as `{ "error": { "message": ... } }`; plain
    /// `{ "message": ... }` bodies are accepted too.
    pub fn server_message(&self) -> Option<&str> {
        let AdminError::Server {
            body: Some(body), ..
        } = self
        else {
            return None;
        };
        body.pointer("/error/message")
            .or_else(|| body.get("message"))
            .and_then(JsonValue::as_str)
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Network(format!("JSON parsing error: {}", err))
    }
}

pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_error_carries_field() {
        let err = AdminError::validation("title", "No title specified");
        assert_eq!(err.field(), Some("title"));
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.log_level(), LogLevel::Debug);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn server_message_reads_nested_error() {
        let err = AdminError::Server {
            status: 400,
            body: Some(json!({ "error": { "status": 400, "message": "Bad title" } })),
        };
        assert_eq!(err.server_message(), Some("Bad title"));
        assert_eq!(err.field(), None);
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn server_message_reads_flat_message() {
        let err = AdminError::Server {
            status: 500,
            body: Some(json!({ "message": "boom" })),
        };
        assert_eq!(err.server_message(), Some("boom"));
    }

    #[test]
    fn server_message_absent_without_body() {
        let err = AdminError::Server {
            status: 502,
            body: None,
        };
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "Server error: status 502");
    }

    #[test]
    fn only_busy_is_recoverable() {
        assert!(AdminError::Busy.is_recoverable());
        assert!(!AdminError::Network("reset".into()).is_recoverable());
    }
}
