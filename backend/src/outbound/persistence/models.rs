//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; the repositories convert
//! them into domain values.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{firearms, licence_holders};

/// Row struct for reading from the licence_holders table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = licence_holders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LicenceHolderRow {
    pub holder_id: Uuid,
    pub licence_number_raw: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub dob: NaiveDate,
    pub address_line: String,
    pub town: String,
    pub postcode: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub licence_type: String,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row struct for reading from the firearms table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = firearms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FirearmRow {
    pub firearm_id: Uuid,
    pub holder_id: Uuid,
    pub serial_number_raw: String,
    pub make: String,
    pub model: String,
    pub calibre: String,
    pub firearm_type: String,
    pub action: String,
    pub barrel_length_mm: Option<f64>,
    pub chamber_size_mm: Option<f64>,
    pub manufacture_year: Option<i32>,
    pub proof_date: Option<NaiveDate>,
    pub condition: String,
    pub notes: Option<String>,
    pub transfer_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
