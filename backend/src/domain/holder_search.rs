//! Holder search service.
//!
//! Implements [`HolderSearchQuery`] over a [`LicenceHolderRepository`]:
//! short terms short-circuit to an empty result, store failures are logged
//! with their cause and replaced by the generic search failure.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{HolderSearchQuery, LicenceHolderRepository, LicenceHolderRepositoryError};
use crate::domain::{Error, LicenceHolder, SearchTerm, TraceId};

/// Maximum number of holders returned by one search.
pub const HOLDER_SEARCH_LIMIT: usize = 50;

/// Holder search service implementing the driving port.
#[derive(Clone)]
pub struct HolderSearchService<R> {
    repository: Arc<R>,
}

impl<R> HolderSearchService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(err: &LicenceHolderRepositoryError) -> Error {
    let kind = match err {
        LicenceHolderRepositoryError::Connection { .. } => "connection",
        LicenceHolderRepositoryError::Query { .. } => "query",
    };
    error!(
        trace_id = ?TraceId::current(),
        kind,
        error = %err,
        "licence holder search failed"
    );
    Error::search_failed()
}

#[async_trait]
impl<R> HolderSearchQuery for HolderSearchService<R>
where
    R: LicenceHolderRepository,
{
    async fn search_holders(&self, raw_term: &str) -> Result<Vec<LicenceHolder>, Error> {
        let term = match SearchTerm::new(raw_term) {
            Ok(term) => term,
            Err(reason) => {
                debug!(%reason, "holder search short-circuited");
                return Ok(Vec::new());
            }
        };

        self.repository
            .search_by_name(&term, HOLDER_SEARCH_LIMIT)
            .await
            .map_err(|err| map_repository_error(&err))
    }
}
