//! Licence holder read model.
//!
//! Holders are created and maintained by the registry's system of record;
//! this service only reads them. Field names serialise in snake_case to match
//! the store columns exposed by the original API.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UnknownVariant;

/// Stable, opaque identifier of a licence holder.
///
/// # Examples
/// ```
/// use registry_backend::domain::HolderId;
///
/// let id: HolderId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().expect("uuid");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!("H1".parse::<HolderId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolderId(Uuid);

impl HolderId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for HolderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for HolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category of licence granted to a holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenceType {
    /// Section 1 firearm certificate.
    FirearmCertificate,
    /// Section 2 shotgun certificate.
    ShotgunCertificate,
    /// Firearm and shotgun certificates issued together.
    Coterminous,
    /// Time-limited permit for a visiting shooter.
    VisitorPermit,
}

impl LicenceType {
    /// Stored text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirearmCertificate => "firearm_certificate",
            Self::ShotgunCertificate => "shotgun_certificate",
            Self::Coterminous => "coterminous",
            Self::VisitorPermit => "visitor_permit",
        }
    }
}

impl FromStr for LicenceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firearm_certificate" => Ok(Self::FirearmCertificate),
            "shotgun_certificate" => Ok(Self::ShotgunCertificate),
            "coterminous" => Ok(Self::Coterminous),
            "visitor_permit" => Ok(Self::VisitorPermit),
            other => Err(UnknownVariant::new("licence type", other)),
        }
    }
}

impl fmt::Display for LicenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registered licence holder with every attribute needed for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenceHolder {
    pub holder_id: HolderId,
    pub licence_number_raw: String,
    pub first_name: String,
    pub last_name: String,
    /// Denormalised display name; the search ordering key.
    pub full_name: String,
    pub dob: NaiveDate,
    pub address_line: String,
    pub town: String,
    pub postcode: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub licence_type: LicenceType,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LicenceHolder {
    /// Whether any searchable name field contains `needle`, ignoring case.
    ///
    /// Mirrors the store-side predicate so in-memory adapters and the
    /// PostgreSQL adapter agree on which holders match.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.full_name, &self.first_name, &self.last_name]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn holder(first: &str, last: &str) -> LicenceHolder {
        let stamp = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .expect("timestamp")
            .with_timezone(&Utc);
        LicenceHolder {
            holder_id: HolderId::from_uuid(Uuid::nil()),
            licence_number_raw: "FAC/0001".to_owned(),
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            full_name: format!("{first} {last}"),
            dob: NaiveDate::from_ymd_opt(1980, 4, 12).expect("date"),
            address_line: "1 High Street".to_owned(),
            town: "Exeter".to_owned(),
            postcode: "EX1 1AA".to_owned(),
            phone: None,
            email: None,
            licence_type: LicenceType::FirearmCertificate,
            valid_from: NaiveDate::from_ymd_opt(2022, 1, 1).expect("date"),
            valid_to: NaiveDate::from_ymd_opt(2027, 1, 1).expect("date"),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[rstest]
    #[case("an", true)]
    #[case("ANNA", true)]
    #[case("mith", true)]
    #[case("na sm", true)]
    #[case("joe", false)]
    fn name_contains_is_case_insensitive_substring(#[case] needle: &str, #[case] expected: bool) {
        assert_eq!(holder("Anna", "Smith").name_contains(needle), expected);
    }

    #[rstest]
    #[case(LicenceType::FirearmCertificate)]
    #[case(LicenceType::ShotgunCertificate)]
    #[case(LicenceType::Coterminous)]
    #[case(LicenceType::VisitorPermit)]
    fn licence_type_text_matches_serde_name(#[case] licence_type: LicenceType) {
        let json = serde_json::to_value(licence_type).expect("serialise");
        assert_eq!(json.as_str(), Some(licence_type.as_str()));
        assert_eq!(licence_type.as_str().parse::<LicenceType>(), Ok(licence_type));
    }

    #[test]
    fn unknown_licence_type_is_rejected() {
        let err = "dealer".parse::<LicenceType>().expect_err("unknown type");
        assert_eq!(err.to_string(), "unknown licence type value: dealer");
    }

    #[test]
    fn holder_serialises_with_store_field_names() {
        let value = serde_json::to_value(holder("Anna", "Smith")).expect("serialise");
        assert_eq!(value["full_name"], "Anna Smith");
        assert_eq!(value["dob"], "1980-04-12");
        assert_eq!(value["licence_type"], "firearm_certificate");
        assert_eq!(value["holder_id"], "00000000-0000-0000-0000-000000000000");
    }
}
