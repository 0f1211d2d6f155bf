//! # Core Domain Vocabulary
//!
//! Blood groups, organs and the fixed city lists used by search, registration
//! and the admin dataset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::VocabularyError;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Cities offered by the recipient search form.
pub const SEARCH_CITIES: [&str; 8] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
];

/// Cities used when fabricating admin dashboard rows.
pub const ADMIN_CITIES: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];

/// ABO/Rh blood group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// All blood groups in form display order.
    pub const ALL: [BloodGroup; 8] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::AbPositive,
        Self::AbNegative,
        Self::OPositive,
        Self::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| VocabularyError::UnknownBloodGroup(trimmed.to_string()))
    }
}

/// Organ that can be donated or requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Organ {
    Kidney,
    Liver,
    Heart,
    Lung,
    Pancreas,
    Cornea,
}

impl Organ {
    /// All organs in form display order.
    pub const ALL: [Organ; 6] = [
        Self::Kidney,
        Self::Liver,
        Self::Heart,
        Self::Lung,
        Self::Pancreas,
        Self::Cornea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kidney => "Kidney",
            Self::Liver => "Liver",
            Self::Heart => "Heart",
            Self::Lung => "Lung",
            Self::Pancreas => "Pancreas",
            Self::Cornea => "Cornea",
        }
    }
}

impl fmt::Display for Organ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Organ {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|organ| organ.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| VocabularyError::UnknownOrgan(trimmed.to_string()))
    }
}
