//! Firearm lookup service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{FirearmLookupQuery, FirearmRepository, FirearmRepositoryError};
use crate::domain::{Error, Firearm, HolderId, TraceId};

/// Firearm lookup service implementing the driving port.
///
/// Holder existence is not checked: an unknown holder and a holder without
/// firearms both produce an empty list.
#[derive(Clone)]
pub struct FirearmLookupService<R> {
    repository: Arc<R>,
}

impl<R> FirearmLookupService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(holder: HolderId, err: &FirearmRepositoryError) -> Error {
    error!(
        trace_id = ?TraceId::current(),
        %holder,
        error = %err,
        "firearm lookup failed"
    );
    Error::lookup_failed()
}

#[async_trait]
impl<R> FirearmLookupQuery for FirearmLookupService<R>
where
    R: FirearmRepository,
{
    async fn firearms_for_holder(&self, raw_holder_id: &str) -> Result<Vec<Firearm>, Error> {
        // Identifiers are UUIDs in the store, so anything else names nobody.
        let Ok(holder) = raw_holder_id.parse::<HolderId>() else {
            debug!(raw_holder_id, "holder identifier is not a UUID; no firearms");
            return Ok(Vec::new());
        };

        self.repository
            .list_for_holder(&holder)
            .await
            .map_err(|err| map_repository_error(holder, &err))
    }
}
