//! Adapter wiring for the HTTP and health state.

use std::sync::Arc;

use mockable::DefaultClock;

use registry_backend::domain::{FirearmLookupService, HolderSearchService};
use registry_backend::inbound::http::health::HealthState;
use registry_backend::inbound::http::state::HttpState;
use registry_backend::outbound::persistence::{
    DbPool, DieselFirearmRepository, DieselLicenceHolderRepository, DieselStoreHealth,
};

/// Build the query services over Diesel repositories sharing `pool`.
pub(crate) fn build_http_state(pool: &DbPool) -> HttpState {
    let holders = Arc::new(DieselLicenceHolderRepository::new(pool.clone()));
    let firearms = Arc::new(DieselFirearmRepository::new(pool.clone()));
    HttpState::new(
        Arc::new(HolderSearchService::new(holders)),
        Arc::new(FirearmLookupService::new(firearms)),
    )
}

/// Build the health state probing the store through `pool`.
pub(crate) fn build_health_state(pool: &DbPool) -> HealthState {
    HealthState::new(
        Arc::new(DieselStoreHealth::new(pool.clone())),
        Arc::new(DefaultClock),
    )
}
