//! PostgreSQL persistence adapters using Diesel.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Rows (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool through
//! `diesel-async`.
//!
//! ```ignore
//! use registry_backend::outbound::persistence::{
//!     DbPool, DieselLicenceHolderRepository, PoolConfig,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/registry")).await?;
//! let holders = DieselLicenceHolderRepository::new(pool.clone());
//! ```

mod diesel_firearm_repository;
pub(crate) mod diesel_helpers;
mod diesel_licence_holder_repository;
mod diesel_store_health;
mod models;
mod pool;
mod schema;

pub use diesel_firearm_repository::DieselFirearmRepository;
pub use diesel_licence_holder_repository::DieselLicenceHolderRepository;
pub use diesel_store_health::DieselStoreHealth;
pub use pool::{DbPool, PoolConfig, PoolError};
