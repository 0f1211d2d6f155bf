//! Raw registration form and its validation.

use ll_04_ledger_store::DonorDetails;
use serde::{Deserialize, Serialize};
use shared_types::{BloodGroup, Organ};
use std::ops::RangeInclusive;

use super::errors::RegistrationError;

/// Ages accepted by the registration form.
pub const DONOR_AGE_RANGE: RangeInclusive<u8> = 18..=80;

/// Form fields exactly as the page submits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub name: String,
    pub age: String,
    pub blood_group: String,
    pub organs: Vec<String>,
    pub city: String,
}

impl RegistrationForm {
    /// Add `organ` if absent, remove it if present (checkbox behavior).
    pub fn toggle_organ(&mut self, organ: Organ) {
        let name = organ.as_str();
        match self.organs.iter().position(|o| o == name) {
            Some(index) => {
                self.organs.remove(index);
            }
            None => self.organs.push(name.to_string()),
        }
    }

    /// Check every field and build the donor details.
    ///
    /// Presence is checked for all fields before any value is parsed.
    pub fn validate(&self) -> Result<DonorDetails, RegistrationError> {
        let name = self.name.trim();
        let age = self.age.trim();
        let blood_group = self.blood_group.trim();
        let city = self.city.trim();

        if name.is_empty() {
            return Err(RegistrationError::MissingField("name"));
        }
        if age.is_empty() {
            return Err(RegistrationError::MissingField("age"));
        }
        if blood_group.is_empty() {
            return Err(RegistrationError::MissingField("bloodGroup"));
        }
        if self.organs.iter().all(|o| o.trim().is_empty()) {
            return Err(RegistrationError::MissingField("organs"));
        }
        if city.is_empty() {
            return Err(RegistrationError::MissingField("city"));
        }

        let age: u32 = age
            .parse()
            .map_err(|_| RegistrationError::InvalidAge(age.to_string()))?;
        let age = u8::try_from(age)
            .ok()
            .filter(|a| DONOR_AGE_RANGE.contains(a))
            .ok_or(RegistrationError::AgeOutOfRange {
                age,
                min: *DONOR_AGE_RANGE.start(),
                max: *DONOR_AGE_RANGE.end(),
            })?;

        let blood_group = blood_group.parse::<BloodGroup>()?;

        let mut organs: Vec<Organ> = Vec::with_capacity(self.organs.len());
        for raw in self.organs.iter().map(|o| o.trim()).filter(|o| !o.is_empty()) {
            let organ = raw.parse::<Organ>()?;
            if !organs.contains(&organ) {
                organs.push(organ);
            }
        }

        Ok(DonorDetails {
            name: name.to_string(),
            age,
            blood_group,
            organs,
            city: city.to_string(),
        })
    }
}
