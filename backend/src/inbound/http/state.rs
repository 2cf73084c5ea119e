//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend only on
//! the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FirearmLookupQuery, FixtureFirearmLookupQuery, FixtureHolderSearchQuery, HolderSearchQuery,
};

/// Dependency bundle for the licence holder handlers.
#[derive(Clone)]
pub struct HttpState {
    pub holder_search: Arc<dyn HolderSearchQuery>,
    pub firearm_lookup: Arc<dyn FirearmLookupQuery>,
}

impl HttpState {
    /// Bundle the two query ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use registry_backend::domain::ports::{FixtureFirearmLookupQuery, FixtureHolderSearchQuery};
    /// use registry_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureHolderSearchQuery),
    ///     Arc::new(FixtureFirearmLookupQuery),
    /// );
    /// let _search = state.holder_search.clone();
    /// ```
    pub fn new(
        holder_search: Arc<dyn HolderSearchQuery>,
        firearm_lookup: Arc<dyn FirearmLookupQuery>,
    ) -> Self {
        Self {
            holder_search,
            firearm_lookup,
        }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureHolderSearchQuery),
            Arc::new(FixtureFirearmLookupQuery),
        )
    }
}
