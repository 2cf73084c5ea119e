//! Domain primitives, read models, and query services.
//!
//! Purpose: define the strongly typed licence registry entities consumed by
//! the HTTP adapter and produced by the persistence adapters, together with
//! the services implementing the two driving query ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - LicenceHolder / HolderId / LicenceType: licence holder read model.
//! - Firearm / FirearmId / TransferStatus: firearm read model.
//! - SearchTerm: validated holder search input.
//! - HolderSearchService / FirearmLookupService: driving port implementations.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod firearm;
mod firearm_lookup;
mod holder_search;
pub mod licence_holder;
pub mod ports;
pub mod search_term;
pub mod trace_id;

pub use self::error::{
    Error, ErrorCode, HEALTH_CHECK_FAILED_MESSAGE, LOOKUP_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE,
};
pub use self::firearm::{Firearm, FirearmId, TransferStatus};
pub use self::firearm_lookup::FirearmLookupService;
pub use self::holder_search::{HOLDER_SEARCH_LIMIT, HolderSearchService};
pub use self::licence_holder::{HolderId, LicenceHolder, LicenceType};
pub use self::search_term::{MIN_SEARCH_TERM_CHARS, SearchTerm, SearchTermError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Parse failure for enumerated columns stored as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
