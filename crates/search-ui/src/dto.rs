//! Wire representations of the registry query responses.
//!
//! These mirror the JSON the backend emits (snake_case fields, `type` for
//! the firearm category) without depending on backend domain types. Enum
//! values such as `licence_type` stay as text because the UI only displays
//! them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A licence holder as returned by `GET /api/licence-holders/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenceHolderDto {
    /// Opaque holder identifier.
    pub holder_id: Uuid,
    /// Licence number as issued.
    pub licence_number_raw: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Display name.
    pub full_name: String,
    /// Date of birth.
    pub dob: NaiveDate,
    /// Street address.
    pub address_line: String,
    /// Town.
    pub town: String,
    /// Postcode.
    pub postcode: String,
    /// Contact telephone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Licence category.
    pub licence_type: String,
    /// First day the licence is valid.
    pub valid_from: NaiveDate,
    /// Last day the licence is valid.
    pub valid_to: NaiveDate,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
    /// Record update time.
    pub updated_at: DateTime<Utc>,
}

/// A firearm as returned by `GET /api/licence-holders/{holder_id}/firearms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirearmDto {
    /// Opaque firearm identifier.
    pub firearm_id: Uuid,
    /// Owning holder.
    pub holder_id: Uuid,
    /// Serial number as recorded.
    pub serial_number_raw: String,
    /// Manufacturer.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Calibre.
    pub calibre: String,
    /// Firearm category.
    #[serde(rename = "type")]
    pub firearm_type: String,
    /// Action type.
    pub action: String,
    /// Barrel length in millimetres.
    #[serde(default)]
    pub barrel_length_mm: Option<f64>,
    /// Chamber size in millimetres.
    #[serde(default)]
    pub chamber_size_mm: Option<f64>,
    /// Year of manufacture.
    #[serde(default)]
    pub manufacture_year: Option<i32>,
    /// Proof house date.
    #[serde(default)]
    pub proof_date: Option<NaiveDate>,
    /// Recorded condition.
    pub condition: String,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Ownership transfer state.
    pub transfer_status: String,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
    /// Record update time.
    pub updated_at: DateTime<Utc>,
}

/// Body of `{"holders": [...]}` responses.
#[derive(Debug, Deserialize)]
pub(crate) struct HoldersEnvelope {
    pub(crate) holders: Vec<LicenceHolderDto>,
}

/// Body of `{"firearms": [...]}` responses.
#[derive(Debug, Deserialize)]
pub(crate) struct FirearmsEnvelope {
    pub(crate) firearms: Vec<FirearmDto>,
}

/// Body of `{"error": "..."}` responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Hand-built DTOs shared by unit tests.

    use super::*;

    pub(crate) fn holder(n: u128, full_name: &str) -> LicenceHolderDto {
        let (first_name, last_name) = full_name.split_once(' ').unwrap_or((full_name, ""));
        let date = NaiveDate::from_ymd_opt(1980, 5, 17).expect("valid date");
        let stamp = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
        LicenceHolderDto {
            holder_id: Uuid::from_u128(n),
            licence_number_raw: format!("FAC/{n:04}"),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            full_name: full_name.to_owned(),
            dob: date,
            address_line: "3 Mill Lane".to_owned(),
            town: "Hexham".to_owned(),
            postcode: "NE46 1AA".to_owned(),
            phone: None,
            email: Some("holder@example.test".to_owned()),
            licence_type: "shotgun_certificate".to_owned(),
            valid_from: date,
            valid_to: date,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    pub(crate) fn firearm(n: u128, holder: u128, make: &str, model: &str) -> FirearmDto {
        let stamp = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
        FirearmDto {
            firearm_id: Uuid::from_u128(n),
            holder_id: Uuid::from_u128(holder),
            serial_number_raw: format!("SN{n}"),
            make: make.to_owned(),
            model: model.to_owned(),
            calibre: "12 bore".to_owned(),
            firearm_type: "shotgun".to_owned(),
            action: "over and under".to_owned(),
            barrel_length_mm: Some(710.0),
            chamber_size_mm: None,
            manufacture_year: Some(1998),
            proof_date: None,
            condition: "fair".to_owned(),
            notes: None,
            transfer_status: "held".to_owned(),
            created_at: stamp,
            updated_at: stamp,
        }
    }
}
