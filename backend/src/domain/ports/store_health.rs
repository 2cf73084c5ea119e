//! Driven port used by the health endpoint to probe the registry store.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by a store health probe.
    pub enum StoreHealthError {
        /// No connection could be checked out.
        Connection => "store health connection failed: {message}",
        /// The probe statement failed.
        Probe => "store health probe failed: {message}",
    }
}

/// Port for checking that the store answers queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Run a trivial round trip against the store.
    async fn ping(&self) -> Result<(), StoreHealthError>;
}

/// Probe that always succeeds, for wiring tests without a database.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureStoreHealth;

#[async_trait]
impl StoreHealth for FixtureStoreHealth {
    async fn ping(&self) -> Result<(), StoreHealthError> {
        Ok(())
    }
}
