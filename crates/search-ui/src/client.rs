//! Port through which the session reaches the registry query endpoints.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::dto::{FirearmDto, LicenceHolderDto};

/// Failure reaching or decoding a registry query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request could not be built or sent.
    #[error("registry request failed: {message}")]
    Transport {
        /// Transport detail.
        message: String,
    },
    /// The request did not complete within the client timeout.
    #[error("registry request timed out: {message}")]
    Timeout {
        /// Timeout detail.
        message: String,
    },
    /// The endpoint answered with a non-success status.
    #[error("registry responded with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the body, or a preview of it.
        message: String,
    },
    /// The body was not the expected JSON shape.
    #[error("registry response could not be decoded: {message}")]
    Decode {
        /// Decoder detail.
        message: String,
    },
    /// The task running the query panicked or was cancelled.
    #[error("registry query ended abnormally: {message}")]
    Aborted {
        /// Task failure detail.
        message: String,
    },
}

impl ClientError {
    /// Build a [`ClientError::Transport`].
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`ClientError::Timeout`].
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`ClientError::Status`].
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Build a [`ClientError::Decode`].
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Build a [`ClientError::Aborted`].
    #[must_use]
    pub fn aborted(message: impl Into<String>) -> Self {
        Self::Aborted {
            message: message.into(),
        }
    }

    /// Short reason suitable for showing to the user.
    ///
    /// Server-provided messages are already client-safe and pass through;
    /// transport and decode detail is summarised.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Timeout { .. } => "Request timed out".to_owned(),
            Self::Transport { .. } => "Registry unreachable".to_owned(),
            Self::Decode { .. } => "Unexpected response".to_owned(),
            Self::Aborted { .. } => "Request failed".to_owned(),
        }
    }
}

/// Registry queries used by the search session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Search licence holders by name.
    async fn search_holders(&self, term: &str) -> Result<Vec<LicenceHolderDto>, ClientError>;

    /// List the firearms registered to `holder_id`.
    async fn list_firearms(&self, holder_id: Uuid) -> Result<Vec<FirearmDto>, ClientError>;
}
