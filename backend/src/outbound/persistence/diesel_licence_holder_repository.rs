//! PostgreSQL-backed licence holder read adapter.

use async_trait::async_trait;
use diesel::dsl::{AsSelect, SqlTypeOf};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LicenceHolderRepository, LicenceHolderRepositoryError};
use crate::domain::{HolderId, LicenceHolder, LicenceType, SearchTerm};

use super::diesel_helpers::{
    collect_rows, contains_pattern, limit_to_i64, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::LicenceHolderRow;
use super::pool::{DbPool, PoolError};
use super::schema::licence_holders;

/// Diesel-backed implementation of the licence holder read port.
#[derive(Clone)]
pub struct DieselLicenceHolderRepository {
    pool: DbPool,
}

impl DieselLicenceHolderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

type HolderSearchStatement<'a> =
    licence_holders::BoxedQuery<'a, Pg, SqlTypeOf<AsSelect<LicenceHolderRow, Pg>>>;

/// Case-insensitive substring match over the three name columns, ordered by
/// full name with the identifier as tie-break.
fn search_statement(pattern: &str, limit: i64) -> HolderSearchStatement<'_> {
    licence_holders::table
        .select(LicenceHolderRow::as_select())
        .filter(
            licence_holders::full_name
                .ilike(pattern)
                .escape('\\')
                .or(licence_holders::first_name.ilike(pattern).escape('\\'))
                .or(licence_holders::last_name.ilike(pattern).escape('\\')),
        )
        .order((
            licence_holders::full_name.asc(),
            licence_holders::holder_id.asc(),
        ))
        .limit(limit)
        .into_boxed()
}

fn map_pool_error(error: PoolError) -> LicenceHolderRepositoryError {
    map_basic_pool_error(error, LicenceHolderRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> LicenceHolderRepositoryError {
    map_basic_diesel_error(
        error,
        "licence holder search",
        LicenceHolderRepositoryError::query,
        LicenceHolderRepositoryError::connection,
    )
}

fn row_to_licence_holder(row: LicenceHolderRow) -> Result<LicenceHolder, String> {
    let licence_type: LicenceType = row.licence_type.parse().map_err(|e| {
        format!("licence holder {}: {e}", row.holder_id)
    })?;
    Ok(LicenceHolder {
        holder_id: HolderId::from_uuid(row.holder_id),
        licence_number_raw: row.licence_number_raw,
        first_name: row.first_name,
        last_name: row.last_name,
        full_name: row.full_name,
        dob: row.dob,
        address_line: row.address_line,
        town: row.town,
        postcode: row.postcode,
        phone: row.phone,
        email: row.email,
        licence_type,
        valid_from: row.valid_from,
        valid_to: row.valid_to,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl LicenceHolderRepository for DieselLicenceHolderRepository {
    async fn search_by_name(
        &self,
        term: &SearchTerm,
        limit: usize,
    ) -> Result<Vec<LicenceHolder>, LicenceHolderRepositoryError> {
        let pattern = contains_pattern(term.as_str());
        let mut conn = self.pool.checkout().await.map_err(map_pool_error)?;

        let rows = search_statement(&pattern, limit_to_i64(limit))
            .load::<LicenceHolderRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(
            rows.into_iter().map(row_to_licence_holder),
            LicenceHolderRepositoryError::query,
        )
    }
}
