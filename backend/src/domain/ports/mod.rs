//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Query`) are consumed by inbound adapters; driven ports
//! (`*Repository`, [`StoreHealth`]) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod firearm_lookup_query;
mod firearm_repository;
mod holder_search_query;
mod licence_holder_repository;
mod store_health;

#[cfg(test)]
pub use firearm_lookup_query::MockFirearmLookupQuery;
pub use firearm_lookup_query::{FirearmLookupQuery, FixtureFirearmLookupQuery};
#[cfg(test)]
pub use firearm_repository::MockFirearmRepository;
pub use firearm_repository::{FirearmRepository, FirearmRepositoryError};
#[cfg(test)]
pub use holder_search_query::MockHolderSearchQuery;
pub use holder_search_query::{FixtureHolderSearchQuery, HolderSearchQuery};
#[cfg(test)]
pub use licence_holder_repository::MockLicenceHolderRepository;
pub use licence_holder_repository::{LicenceHolderRepository, LicenceHolderRepositoryError};
#[cfg(test)]
pub use store_health::MockStoreHealth;
pub use store_health::{FixtureStoreHealth, StoreHealth, StoreHealthError};
