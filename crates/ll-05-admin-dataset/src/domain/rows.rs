//! Admin table rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared_types::{BloodGroup, Organ};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonorStatus {
    Pending,
    Matched,
    Completed,
}

impl DonorStatus {
    pub const ALL: [DonorStatus; 3] = [Self::Pending, Self::Matched, Self::Completed];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientStatus {
    Searching,
    Matched,
    Completed,
}

impl RecipientStatus {
    pub const ALL: [RecipientStatus; 3] = [Self::Searching, Self::Matched, Self::Completed];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    Pending,
    Approved,
    InProgress,
    Completed,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 4] = [
        Self::Pending,
        Self::Approved,
        Self::InProgress,
        Self::Completed,
    ];
}

/// Dates serialize as `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorRow {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub blood_group: BloodGroup,
    pub organs: Vec<Organ>,
    pub city: String,
    pub registered_at: NaiveDate,
    pub status: DonorStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientRow {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub blood_group: BloodGroup,
    pub organ_needed: Organ,
    pub city: String,
    pub requested_at: NaiveDate,
    pub status: RecipientStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRow {
    pub id: String,
    pub donor_id: String,
    pub donor_name: String,
    pub recipient_id: String,
    pub recipient_name: String,
    pub organ: Organ,
    pub match_date: NaiveDate,
    pub status: MatchStatus,
}
