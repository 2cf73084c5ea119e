//! In-memory registry store for tests.
//!
//! [`InMemoryRegistry`] implements both repository ports and the store health
//! port with the same ordering and matching rules as the PostgreSQL adapters,
//! and can be switched into a failing mode to exercise error paths. Enabled
//! by the `test-support` feature.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::ports::{
    FirearmRepository, FirearmRepositoryError, LicenceHolderRepository,
    LicenceHolderRepositoryError, StoreHealth, StoreHealthError,
};
use crate::domain::{
    Firearm, FirearmId, FirearmLookupService, HolderId, HolderSearchService, LicenceHolder,
    LicenceType, SearchTerm, TransferStatus,
};
use crate::inbound::http::state::HttpState;

/// Failure mode injected into every store read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFailure {
    /// Behave as if no connection can be checked out.
    Connection,
    /// Behave as if the statement failed.
    Query,
}

#[derive(Debug, Default)]
struct RegistryState {
    holders: Vec<LicenceHolder>,
    firearms: Vec<Firearm>,
    failure: Option<StoreFailure>,
    holder_reads: usize,
    firearm_reads: usize,
}

/// Shared in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    state: Mutex<RegistryState>,
}

impl InMemoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a holder.
    pub fn insert_holder(&self, holder: LicenceHolder) {
        self.state().holders.push(holder);
    }

    /// Add a firearm.
    pub fn insert_firearm(&self, firearm: Firearm) {
        self.state().firearms.push(firearm);
    }

    /// Make every subsequent read fail.
    pub fn fail_with(&self, failure: StoreFailure) {
        self.state().failure = Some(failure);
    }

    /// Clear any injected failure.
    pub fn recover(&self) {
        self.state().failure = None;
    }

    /// Number of holder searches that reached the store.
    pub fn holder_reads(&self) -> usize {
        self.state().holder_reads
    }

    /// Number of firearm lookups that reached the store.
    pub fn firearm_reads(&self) -> usize {
        self.state().firearm_reads
    }
}

#[async_trait]
impl LicenceHolderRepository for InMemoryRegistry {
    async fn search_by_name(
        &self,
        term: &SearchTerm,
        limit: usize,
    ) -> Result<Vec<LicenceHolder>, LicenceHolderRepositoryError> {
        let mut state = self.state();
        state.holder_reads += 1;
        match state.failure {
            Some(StoreFailure::Connection) => {
                return Err(LicenceHolderRepositoryError::connection("store unavailable"));
            }
            Some(StoreFailure::Query) => {
                return Err(LicenceHolderRepositoryError::query("statement failed"));
            }
            None => {}
        }

        let mut matches: Vec<LicenceHolder> = state
            .holders
            .iter()
            .filter(|holder| holder.name_contains(term.as_str()))
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            a.full_name
                .cmp(&b.full_name)
                .then_with(|| a.holder_id.cmp(&b.holder_id))
        });
        matches.truncate(limit);
        Ok(matches)
    }
}

#[async_trait]
impl FirearmRepository for InMemoryRegistry {
    async fn list_for_holder(
        &self,
        holder: &HolderId,
    ) -> Result<Vec<Firearm>, FirearmRepositoryError> {
        let mut state = self.state();
        state.firearm_reads += 1;
        match state.failure {
            Some(StoreFailure::Connection) => {
                return Err(FirearmRepositoryError::connection("store unavailable"));
            }
            Some(StoreFailure::Query) => {
                return Err(FirearmRepositoryError::query("statement failed"));
            }
            None => {}
        }

        let mut owned: Vec<Firearm> = state
            .firearms
            .iter()
            .filter(|firearm| firearm.holder_id == *holder)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.listing_key().cmp(&b.listing_key()));
        Ok(owned)
    }
}

#[async_trait]
impl StoreHealth for InMemoryRegistry {
    async fn ping(&self) -> Result<(), StoreHealthError> {
        match self.state().failure {
            Some(StoreFailure::Connection) => {
                Err(StoreHealthError::connection("store unavailable"))
            }
            Some(StoreFailure::Query) => Err(StoreHealthError::probe("statement failed")),
            None => Ok(()),
        }
    }
}

/// Build handler state whose query services read from `registry`.
pub fn http_state_for(registry: &Arc<InMemoryRegistry>) -> HttpState {
    HttpState::new(
        Arc::new(HolderSearchService::new(Arc::clone(registry))),
        Arc::new(FirearmLookupService::new(Arc::clone(registry))),
    )
}

/// Deterministic holder identifier for fixtures.
pub fn holder_id(n: u128) -> HolderId {
    HolderId::from_uuid(Uuid::from_u128(n))
}

fn fixture_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Holder fixture with plausible values for every required field.
pub fn holder(id: HolderId, first_name: &str, last_name: &str) -> LicenceHolder {
    let stamp = Utc
        .with_ymd_and_hms(2024, 1, 10, 9, 0, 0)
        .single()
        .unwrap_or_default();
    LicenceHolder {
        holder_id: id,
        licence_number_raw: format!("FAC/{}", id.as_uuid().simple()),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        full_name: format!("{first_name} {last_name}"),
        dob: fixture_date(1979, 8, 21),
        address_line: "12 Station Road".to_owned(),
        town: "Bideford".to_owned(),
        postcode: "EX39 2AB".to_owned(),
        phone: Some("01237 000000".to_owned()),
        email: None,
        licence_type: LicenceType::FirearmCertificate,
        valid_from: fixture_date(2022, 4, 1),
        valid_to: fixture_date(2027, 3, 31),
        created_at: stamp,
        updated_at: stamp,
    }
}

/// Firearm fixture owned by `holder`.
pub fn firearm(n: u128, holder: HolderId, make: &str, model: &str) -> Firearm {
    let stamp = Utc
        .with_ymd_and_hms(2024, 2, 5, 15, 30, 0)
        .single()
        .unwrap_or_default();
    Firearm {
        firearm_id: FirearmId::from_uuid(Uuid::from_u128(n)),
        holder_id: holder,
        serial_number_raw: format!("{make}-{model}-{n}").to_uppercase(),
        make: make.to_owned(),
        model: model.to_owned(),
        calibre: "9mm".to_owned(),
        firearm_type: "pistol".to_owned(),
        action: "semi-automatic".to_owned(),
        barrel_length_mm: Some(112.0),
        chamber_size_mm: None,
        manufacture_year: Some(2004),
        proof_date: None,
        condition: "good".to_owned(),
        notes: None,
        transfer_status: TransferStatus::Held,
        created_at: stamp,
        updated_at: stamp,
    }
}
