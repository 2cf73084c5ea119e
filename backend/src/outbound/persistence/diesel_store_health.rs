//! Store health probe over the shared pool.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StoreHealth, StoreHealthError};

use super::diesel_helpers::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::DbPool;

/// Pings PostgreSQL with `SELECT 1` on a pooled connection.
#[derive(Clone)]
pub struct DieselStoreHealth {
    pool: DbPool,
}

impl DieselStoreHealth {
    /// Create a probe sharing the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for DieselStoreHealth {
    async fn ping(&self) -> Result<(), StoreHealthError> {
        let mut conn = self
            .pool
            .checkout()
            .await
            .map_err(|err| map_basic_pool_error(err, StoreHealthError::connection))?;

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    "store health probe",
                    StoreHealthError::probe,
                    StoreHealthError::connection,
                )
            })
    }
}
