//! Driven port for reading licence holders from the registry store.

use async_trait::async_trait;

use crate::domain::{LicenceHolder, SearchTerm};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading licence holders.
    pub enum LicenceHolderRepositoryError {
        /// The store could not be reached.
        Connection => "licence holder read connection failed: {message}",
        /// The query failed during execution or row conversion.
        Query => "licence holder read query failed: {message}",
    }
}

/// Port for name-based licence holder reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LicenceHolderRepository: Send + Sync {
    /// Return holders whose full, first, or last name contains `term`
    /// case-insensitively, ordered by full name ascending, at most `limit`.
    ///
    /// The term is matched literally: LIKE metacharacters carry no meaning.
    async fn search_by_name(
        &self,
        term: &SearchTerm,
        limit: usize,
    ) -> Result<Vec<LicenceHolder>, LicenceHolderRepositoryError>;
}
