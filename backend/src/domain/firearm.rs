//! Firearm read model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HolderId, UnknownVariant};

/// Stable, opaque identifier of a registered firearm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FirearmId(Uuid);

impl FirearmId {
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

impl fmt::Display for FirearmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a firearm sits in the ownership transfer process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    /// Held by the registered owner.
    Held,
    /// A transfer to another holder has been notified but not completed.
    PendingTransfer,
    /// Ownership has passed to another holder.
    Transferred,
    /// Surrendered to the police.
    Surrendered,
}

impl TransferStatus {
    /// Stored text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Held => "held",
            Self::PendingTransfer => "pending_transfer",
            Self::Transferred => "transferred",
            Self::Surrendered => "surrendered",
        }
    }
}

impl FromStr for TransferStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "held" => Ok(Self::Held),
            "pending_transfer" => Ok(Self::PendingTransfer),
            "transferred" => Ok(Self::Transferred),
            "surrendered" => Ok(Self::Surrendered),
            other => Err(UnknownVariant::new("transfer status", other)),
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One firearm registered to exactly one holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Firearm {
    pub firearm_id: FirearmId,
    pub holder_id: HolderId,
    pub serial_number_raw: String,
    pub make: String,
    pub model: String,
    pub calibre: String,
    #[serde(rename = "type")]
    pub firearm_type: String,
    pub action: String,
    pub barrel_length_mm: Option<f64>,
    pub chamber_size_mm: Option<f64>,
    pub manufacture_year: Option<i32>,
    pub proof_date: Option<NaiveDate>,
    pub condition: String,
    pub notes: Option<String>,
    pub transfer_status: TransferStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Firearm {
    /// Ordering key used by lookups: make, then model, then identifier.
    #[must_use]
    pub fn listing_key(&self) -> (&str, &str, &FirearmId) {
        (self.make.as_str(), self.model.as_str(), &self.firearm_id)
    }
}
