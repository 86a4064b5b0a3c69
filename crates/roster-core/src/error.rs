//! Error types for roster operations.
//!
//! Every failure a caller can see is one of four kinds: the request never
//! completed ([`TransportError`]), the server answered outside the 2xx range
//! ([`HttpStatusError`]), the server answered 2xx without the body the call
//! expects ([`Error::EmptyBody`]), or the input was rejected before any
//! request was made ([`InvalidInputError`]).

use std::fmt;
use thiserror::Error;

/// The unified error type for roster operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, undecodable body).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server replied with a non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpStatusError),

    /// The server replied 2xx but without the expected body.
    #[error("empty response body while trying to {operation}")]
    EmptyBody { operation: Operation },

    /// Client-side validation failed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP status code if the server rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http(err) => Some(err.status),
            _ => None,
        }
    }

    /// Check if the server reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// The remote call an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListStudents,
    GetStudent,
    CreateStudent,
    UpdateStudent,
    DeleteStudent,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Operation::ListStudents => "fetch students",
            Operation::GetStudent => "fetch student",
            Operation::CreateStudent => "create student",
            Operation::UpdateStudent => "update student",
            Operation::DeleteStudent => "delete student",
        };
        f.write_str(action)
    }
}

/// Transport-level errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The response body could not be decoded.
    #[error("invalid response body: {message}")]
    Decode { message: String },

    /// Any other HTTP client failure.
    #[error("HTTP error: {message}")]
    Other { message: String },
}

/// A non-2xx reply from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpStatusError {
    /// The call that was rejected.
    pub operation: Operation,
    /// HTTP status code.
    pub status: u16,
    /// Error text from the server, if it sent any.
    pub message: Option<String>,
}

impl HttpStatusError {
    /// Create a new HTTP status error.
    pub fn new(operation: Operation, status: u16, message: Option<String>) -> Self {
        Self {
            operation,
            status,
            message,
        }
    }
}

impl fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to {}: HTTP {}", self.operation, self.status)?;
        if let Some(ref message) = self.message {
            write!(f, " ({})", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpStatusError {}

/// Input validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// A required text field is blank.
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },

    /// Invalid student id.
    #[error("invalid student id '{value}': {reason}")]
    StudentId { value: String, reason: String },

    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// The record has no id but the operation needs one.
    #[error("student has no id; it must be created before it can be {action}")]
    MissingId { action: &'static str },

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_contains_status() {
        let err = Error::from(HttpStatusError::new(Operation::DeleteStudent, 404, None));
        assert_eq!(err.to_string(), "failed to delete student: HTTP 404");
        assert!(err.is_not_found());
    }

    #[test]
    fn http_error_includes_server_text() {
        let err = HttpStatusError::new(
            Operation::ListStudents,
            500,
            Some("database unavailable".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "failed to fetch students: HTTP 500 (database unavailable)"
        );
    }

    #[test]
    fn empty_body_message() {
        let err = Error::EmptyBody {
            operation: Operation::CreateStudent,
        };
        assert_eq!(
            err.to_string(),
            "empty response body while trying to create student"
        );
        assert_eq!(err.status(), None);
    }
}
