//! PostgreSQL-backed firearm read adapter.

use async_trait::async_trait;
use diesel::dsl::{AsSelect, SqlTypeOf};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{FirearmRepository, FirearmRepositoryError};
use crate::domain::{Firearm, FirearmId, HolderId, TransferStatus};

use super::diesel_helpers::{collect_rows, map_basic_diesel_error, map_basic_pool_error};
use super::models::FirearmRow;
use super::pool::{DbPool, PoolError};
use super::schema::firearms;

/// Diesel-backed implementation of the firearm read port.
#[derive(Clone)]
pub struct DieselFirearmRepository {
    pool: DbPool,
}

impl DieselFirearmRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

type FirearmListStatement =
    firearms::BoxedQuery<'static, Pg, SqlTypeOf<AsSelect<FirearmRow, Pg>>>;

fn list_statement(holder: Uuid) -> FirearmListStatement {
    firearms::table
        .select(FirearmRow::as_select())
        .filter(firearms::holder_id.eq(holder))
        .order((
            firearms::make.asc(),
            firearms::model.asc(),
            firearms::firearm_id.asc(),
        ))
        .into_boxed()
}

fn map_pool_error(error: PoolError) -> FirearmRepositoryError {
    map_basic_pool_error(error, FirearmRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> FirearmRepositoryError {
    map_basic_diesel_error(
        error,
        "firearm lookup",
        FirearmRepositoryError::query,
        FirearmRepositoryError::connection,
    )
}

fn row_to_firearm(row: FirearmRow) -> Result<Firearm, String> {
    let transfer_status: TransferStatus = row
        .transfer_status
        .parse()
        .map_err(|e| format!("firearm {}: {e}", row.firearm_id))?;
    Ok(Firearm {
        firearm_id: FirearmId::from_uuid(row.firearm_id),
        holder_id: HolderId::from_uuid(row.holder_id),
        serial_number_raw: row.serial_number_raw,
        make: row.make,
        model: row.model,
        calibre: row.calibre,
        firearm_type: row.firearm_type,
        action: row.action,
        barrel_length_mm: row.barrel_length_mm,
        chamber_size_mm: row.chamber_size_mm,
        manufacture_year: row.manufacture_year,
        proof_date: row.proof_date,
        condition: row.condition,
        notes: row.notes,
        transfer_status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl FirearmRepository for DieselFirearmRepository {
    async fn list_for_holder(
        &self,
        holder: &HolderId,
    ) -> Result<Vec<Firearm>, FirearmRepositoryError> {
        let mut conn = self.pool.checkout().await.map_err(map_pool_error)?;

        let rows = list_statement(*holder.as_uuid())
            .load::<FirearmRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(
            rows.into_iter().map(row_to_firearm),
            FirearmRepositoryError::query,
        )
    }
}
