//! Match search entities.

use serde::{Deserialize, Serialize};
use shared_types::{BloodGroup, Organ};
use std::ops::RangeInclusive;

use super::errors::SearchError;

/// Compatibility tier of a mock candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    High,
    Medium,
    Low,
}

impl Compatibility {
    pub const ALL: [Compatibility; 3] = [Self::High, Self::Medium, Self::Low];

    /// Match percentage band for this tier.
    pub fn band(&self) -> RangeInclusive<u8> {
        match self {
            Self::High => 90..=99,
            Self::Medium => 75..=89,
            Self::Low => 60..=74,
        }
    }

    /// Badge text shown on a result card.
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High Compatibility",
            Self::Medium => "Medium Compatibility",
            Self::Low => "Low Compatibility",
        }
    }
}

/// One fabricated donor returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub blood_group: BloodGroup,
    pub organ: Organ,
    pub city: String,
    pub match_percentage: u8,
    pub compatibility: Compatibility,
}

/// Raw search form as submitted by the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchForm {
    pub organ: String,
    pub blood_group: String,
    pub city: String,
}

/// Validated search criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub organ: Organ,
    pub blood_group: BloodGroup,
    /// `None` means "any city".
    pub city: Option<String>,
}

impl SearchQuery {
    pub fn new(organ: Organ, blood_group: BloodGroup, city: Option<String>) -> Self {
        Self {
            organ,
            blood_group,
            city: city.filter(|c| !c.trim().is_empty()),
        }
    }
}

impl TryFrom<&SearchForm> for SearchQuery {
    type Error = SearchError;

    fn try_from(form: &SearchForm) -> Result<Self, Self::Error> {
        if form.organ.trim().is_empty() {
            return Err(SearchError::MissingField("organ"));
        }
        if form.blood_group.trim().is_empty() {
            return Err(SearchError::MissingField("bloodGroup"));
        }

        let organ = form.organ.parse::<Organ>()?;
        let blood_group = form.blood_group.parse::<BloodGroup>()?;
        let city = Some(form.city.trim().to_string());

        Ok(Self::new(organ, blood_group, city))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::VocabularyError;

    fn form(organ: &str, blood_group: &str, city: &str) -> SearchForm {
        SearchForm {
            organ: organ.into(),
            blood_group: blood_group.into(),
            city: city.into(),
        }
    }

    #[test]
    fn test_bands_do_not_overlap() {
        let high = Compatibility::High.band();
        let medium = Compatibility::Medium.band();
        let low = Compatibility::Low.band();
        assert_eq!(*low.end() + 1, *medium.start());
        assert_eq!(*medium.end() + 1, *high.start());
    }

    #[test]
    fn test_form_to_query() {
        let query = SearchQuery::try_from(&form("Kidney", "O+", "")).unwrap();
        assert_eq!(query.organ, Organ::Kidney);
        assert_eq!(query.blood_group, BloodGroup::OPositive);
        assert_eq!(query.city, None);

        let query = SearchQuery::try_from(&form("Liver", "AB-", " Phoenix ")).unwrap();
        assert_eq!(query.city.as_deref(), Some("Phoenix"));
    }

    #[test]
    fn test_form_requires_organ_and_blood_group() {
        assert_eq!(
            SearchQuery::try_from(&form("", "O+", "")),
            Err(SearchError::MissingField("organ"))
        );
        assert_eq!(
            SearchQuery::try_from(&form("Heart", " ", "")),
            Err(SearchError::MissingField("bloodGroup"))
        );
    }

    #[test]
    fn test_form_rejects_unknown_values() {
        assert_eq!(
            SearchQuery::try_from(&form("Spleen", "O+", "")),
            Err(SearchError::UnknownValue(VocabularyError::UnknownOrgan(
                "Spleen".into()
            )))
        );
    }

    #[test]
    fn test_candidate_wire_format() {
        let candidate = MatchCandidate {
            id: "donor-1-0".into(),
            name: "Donor 1".into(),
            age: 33,
            blood_group: BloodGroup::OPositive,
            organ: Organ::Kidney,
            city: "Chicago".into(),
            match_percentage: 92,
            compatibility: Compatibility::High,
        };
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["matchPercentage"], 92);
        assert_eq!(json["compatibility"], "high");
        assert_eq!(json["bloodGroup"], "O+");
    }
}
