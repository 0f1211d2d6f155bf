//! Dataset generation and filtering.

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared_types::{BloodGroup, Organ, ADMIN_CITIES};

use super::rows::{
    DonorRow, DonorStatus, MatchRow, MatchStatus, RecipientRow, RecipientStatus,
};

pub const DONOR_COUNT: usize = 20;
pub const RECIPIENT_COUNT: usize = 15;
pub const MATCH_COUNT: usize = 10;

/// How far back each kind of date may reach.
pub const DONOR_WINDOW_DAYS: u64 = 30;
pub const RECIPIENT_WINDOW_DAYS: u64 = 20;
pub const MATCH_WINDOW_DAYS: u64 = 10;

/// The three admin tables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDataset {
    pub donors: Vec<DonorRow>,
    pub recipients: Vec<RecipientRow>,
    pub matches: Vec<MatchRow>,
}

/// Row counts per table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCounts {
    pub donors: usize,
    pub recipients: usize,
    pub matches: usize,
}

fn pick<T: Copy, R: Rng + ?Sized>(values: &[T], rng: &mut R) -> T {
    // Every caller passes a non-empty constant table.
    values[rng.gen_range(0..values.len())]
}

fn days_before<R: Rng + ?Sized>(today: NaiveDate, window: u64, rng: &mut R) -> NaiveDate {
    let back = rng.gen_range(0..window.max(1));
    today.checked_sub_days(Days::new(back)).unwrap_or(today)
}

/// Draw 1-3 organs with replacement and keep the distinct ones.
fn draw_organs<R: Rng + ?Sized>(rng: &mut R) -> Vec<Organ> {
    let draws = rng.gen_range(1..=3);
    let mut organs = Vec::with_capacity(draws);
    for _ in 0..draws {
        let organ = pick(&Organ::ALL, rng);
        if !organs.contains(&organ) {
            organs.push(organ);
        }
    }
    organs
}

impl AdminDataset {
    /// Generate a fresh dataset dated relative to `today`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Self {
        let donors: Vec<DonorRow> = (1..=DONOR_COUNT)
            .map(|i| DonorRow {
                id: format!("D{}", 1000 + i),
                name: format!("Donor {i}"),
                age: rng.gen_range(20..=59),
                blood_group: pick(&BloodGroup::ALL, rng),
                organs: draw_organs(rng),
                city: pick(&ADMIN_CITIES, rng).to_string(),
                registered_at: days_before(today, DONOR_WINDOW_DAYS, rng),
                status: pick(&DonorStatus::ALL, rng),
            })
            .collect();

        let recipients: Vec<RecipientRow> = (1..=RECIPIENT_COUNT)
            .map(|i| RecipientRow {
                id: format!("R{}", 2000 + i),
                name: format!("Recipient {i}"),
                age: rng.gen_range(20..=59),
                blood_group: pick(&BloodGroup::ALL, rng),
                organ_needed: pick(&Organ::ALL, rng),
                city: pick(&ADMIN_CITIES, rng).to_string(),
                requested_at: days_before(today, RECIPIENT_WINDOW_DAYS, rng),
                status: pick(&RecipientStatus::ALL, rng),
            })
            .collect();

        let matches = (1..=MATCH_COUNT)
            .filter_map(|i| {
                let donor = donors.choose(rng)?;
                let recipient = recipients.choose(rng)?;
                Some(MatchRow {
                    id: format!("M{}", 3000 + i),
                    donor_id: donor.id.clone(),
                    donor_name: donor.name.clone(),
                    recipient_id: recipient.id.clone(),
                    recipient_name: recipient.name.clone(),
                    organ: recipient.organ_needed,
                    match_date: days_before(today, MATCH_WINDOW_DAYS, rng),
                    status: pick(&MatchStatus::ALL, rng),
                })
            })
            .collect();

        Self {
            donors,
            recipients,
            matches,
        }
    }

    /// Case-insensitive substring filter applied to each table.
    ///
    /// Donors and recipients match on name, id or city; matches on donor
    /// name, recipient name or id. An empty term keeps everything; any other
    /// term is matched as typed, surrounding whitespace included.
    pub fn filter(&self, term: &str) -> AdminDataset {
        let needle = term.to_lowercase();
        let hit = |fields: &[&str]| {
            needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
        };

        AdminDataset {
            donors: self
                .donors
                .iter()
                .filter(|d| hit(&[d.name.as_str(), d.id.as_str(), d.city.as_str()]))
                .cloned()
                .collect(),
            recipients: self
                .recipients
                .iter()
                .filter(|r| hit(&[r.name.as_str(), r.id.as_str(), r.city.as_str()]))
                .cloned()
                .collect(),
            matches: self
                .matches
                .iter()
                .filter(|m| hit(&[m.donor_name.as_str(), m.recipient_name.as_str(), m.id.as_str()]))
                .cloned()
                .collect(),
        }
    }

    pub fn counts(&self) -> AdminCounts {
        AdminCounts {
            donors: self.donors.len(),
            recipients: self.recipients.len(),
            matches: self.matches.len(),
        }
    }
}
