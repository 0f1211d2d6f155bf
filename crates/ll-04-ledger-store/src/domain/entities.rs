//! Ledger record entities.

use serde::{Deserialize, Serialize};
use shared_types::{truncate_middle, BloodGroup, Organ, Timestamp};
use std::fmt;

/// Record id length in hex characters.
pub const RECORD_ID_HEX_LEN: usize = 4;

/// Transaction hash length in hex characters.
pub const TX_HASH_HEX_LEN: usize = 64;

/// Lifecycle of a ledger record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Validated,
    Matched,
}

impl RecordStatus {
    /// Only single forward steps are allowed.
    pub fn can_advance_to(&self, next: RecordStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Validated) | (Self::Validated, Self::Matched)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Validated => "validated",
            Self::Matched => "matched",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Donor fields captured by the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorDetails {
    pub name: String,
    pub age: u8,
    pub blood_group: BloodGroup,
    pub organs: Vec<Organ>,
    pub city: String,
}

/// One fabricated on-chain registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRecord {
    /// Random hex id, not guaranteed unique.
    pub id: String,
    pub created_at: Timestamp,
    pub donor: DonorDetails,
    /// Full wallet address; see [`LedgerRecord::short_wallet`].
    pub wallet_address: String,
    /// 64 hex chars, no `0x` prefix.
    pub tx_hash: String,
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_description: Option<String>,
}

impl LedgerRecord {
    /// Display form of the wallet, e.g. `0x71C7...976F`.
    pub fn short_wallet(&self) -> String {
        truncate_middle(&self.wallet_address, 6, 4)
    }

    /// Display form of the transaction hash, e.g. `0x3fa9c1...be07`.
    pub fn short_hash(&self) -> String {
        format!("0x{}", truncate_middle(&self.tx_hash, 6, 4))
    }
}
