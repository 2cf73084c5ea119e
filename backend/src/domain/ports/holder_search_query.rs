//! Driving port for the holder search use-case.
//!
//! The HTTP adapter hands over the raw `q` parameter; validation, the
//! short-term short circuit, and error redaction happen behind this port.

use async_trait::async_trait;

use crate::domain::{Error, LicenceHolder};

/// Domain use-case port for searching licence holders by name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HolderSearchQuery: Send + Sync {
    /// Search holders by a partial name.
    ///
    /// Terms shorter than the minimum length yield an empty list without a
    /// store read. Store failures surface as [`Error::search_failed`].
    async fn search_holders(&self, raw_term: &str) -> Result<Vec<LicenceHolder>, Error>;
}

/// Query returning no holders, for wiring tests that do not exercise search.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHolderSearchQuery;

#[async_trait]
impl HolderSearchQuery for FixtureHolderSearchQuery {
    async fn search_holders(&self, _raw_term: &str) -> Result<Vec<LicenceHolder>, Error> {
        Ok(Vec::new())
    }
}
