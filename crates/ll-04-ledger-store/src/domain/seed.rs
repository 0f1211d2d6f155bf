//! Fixed example records present at startup.

use shared_types::{BloodGroup, Organ};

use super::entities::{DonorDetails, LedgerRecord, RecordStatus};

/// The two seed records, newest first.
pub fn seed_records() -> Vec<LedgerRecord> {
    vec![
        LedgerRecord {
            id: "7c2e".to_string(),
            created_at: 1_714_560_000_000,
            donor: DonorDetails {
                name: "Marcus Lee".to_string(),
                age: 45,
                blood_group: BloodGroup::ANegative,
                organs: vec![Organ::Cornea],
                city: "Chicago".to_string(),
            },
            wallet_address: "0x2B5AD5c4795c026514f8317c7a215E218DcCD6cF".to_string(),
            tx_hash: "9d4c2f8a1e7b3c6d0f5a8e2b4c7d1f9a3e6b8c0d2f4a7e1b5c9d3f6a8e0b2c4d"
                .to_string(),
            status: RecordStatus::Validated,
            match_description: None,
        },
        LedgerRecord {
            id: "a1f3".to_string(),
            created_at: 1_714_300_000_000,
            donor: DonorDetails {
                name: "Emily Carter".to_string(),
                age: 34,
                blood_group: BloodGroup::OPositive,
                organs: vec![Organ::Kidney, Organ::Liver],
                city: "New York".to_string(),
            },
            wallet_address: "0x6813Eb9362372EEF6200f3b1dbC3f819671cBA69".to_string(),
            tx_hash: "4e8f1a3c5b7d9e2f0a6c8b1d3e5f7a9c2b4d6e8f0a1c3e5b7d9f2a4c6e8b0d1f"
                .to_string(),
            status: RecordStatus::Matched,
            match_description: Some("Kidney matched with recipient R2007 (New York)".to_string()),
        },
    ]
}
