//! Driving port for the firearm lookup use-case.

use async_trait::async_trait;

use crate::domain::{Error, Firearm};

/// Domain use-case port for listing a holder's firearms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FirearmLookupQuery: Send + Sync {
    /// List the firearms owned by the holder named by `raw_holder_id`.
    ///
    /// The identifier is opaque to callers. One that names no holder, or
    /// cannot name one at all, yields an empty list. Store failures surface
    /// as [`Error::lookup_failed`].
    async fn firearms_for_holder(&self, raw_holder_id: &str) -> Result<Vec<Firearm>, Error>;
}

/// Query returning no firearms, for wiring tests that do not exercise lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFirearmLookupQuery;

#[async_trait]
impl FirearmLookupQuery for FixtureFirearmLookupQuery {
    async fn firearms_for_holder(&self, _raw_holder_id: &str) -> Result<Vec<Firearm>, Error> {
        Ok(Vec::new())
    }
}
