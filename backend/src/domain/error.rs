//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps each
//! [`ErrorCode`] to a status and writes only the client-safe message; the
//! operator-facing cause is logged where the failure is first observed.

use serde::{Deserialize, Serialize};

use super::TraceId;

/// Client-facing message for a failed holder search.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed";

/// Client-facing message for a failed firearm lookup.
pub const LOOKUP_FAILED_MESSAGE: &str = "Failed to fetch firearms";

/// Client-facing message for a failed health check.
pub const HEALTH_CHECK_FAILED_MESSAGE: &str = "Health check failed";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request could not be decoded.
    InvalidRequest,
    /// The holder search could not be served by the store.
    SearchFailed,
    /// The firearm lookup could not be served by the store.
    LookupFailed,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Domain error payload.
///
/// The message is always safe to show to clients. Construction captures the
/// current [`TraceId`] when one is in scope.
///
/// # Examples
/// ```
/// use registry_backend::domain::{Error, ErrorCode, SEARCH_FAILED_MESSAGE};
///
/// let err = Error::search_failed();
/// assert_eq!(err.code(), ErrorCode::SearchFailed);
/// assert_eq!(err.message(), SEARCH_FAILED_MESSAGE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error with the given code and client-facing message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Client-facing message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured at construction, if any.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach an explicit trace identifier.
    ///
    /// # Examples
    /// ```
    /// use registry_backend::domain::Error;
    ///
    /// let err = Error::internal("boom").with_trace_id("abc");
    /// assert_eq!(err.trace_id(), Some("abc"));
    /// ```
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// The generic holder search failure.
    pub fn search_failed() -> Self {
        Self::new(ErrorCode::SearchFailed, SEARCH_FAILED_MESSAGE)
    }

    /// The generic firearm lookup failure.
    pub fn lookup_failed() -> Self {
        Self::new(ErrorCode::LookupFailed, LOOKUP_FAILED_MESSAGE)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
