//! Driven port for reading firearms registered to a holder.

use async_trait::async_trait;

use crate::domain::{Firearm, HolderId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading firearms.
    pub enum FirearmRepositoryError {
        /// The store could not be reached.
        Connection => "firearm read connection failed: {message}",
        /// The query failed during execution or row conversion.
        Query => "firearm read query failed: {message}",
    }
}

/// Port for per-holder firearm reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FirearmRepository: Send + Sync {
    /// Return every firearm owned by `holder`, ordered by make then model.
    ///
    /// A holder that does not exist simply owns nothing: the result is empty
    /// rather than an error.
    async fn list_for_holder(&self, holder: &HolderId)
    -> Result<Vec<Firearm>, FirearmRepositoryError>;
}
