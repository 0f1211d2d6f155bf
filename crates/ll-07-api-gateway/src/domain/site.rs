//! Static, display-only site information.

use serde::{Deserialize, Serialize};
use shared_types::{BloodGroup, Organ, ADMIN_CITIES, SEARCH_CITIES};

pub const TEST_NETWORK: &str = "Polygon Mumbai";
pub const HERO_SCENE_URL: &str = "https://prod.spline.design/6PCD7WsZv9IJH3gN/scene.splinecode";

/// Labels and vocabularies the pages render. None of these are integrations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub name: String,
    pub network: String,
    pub hero_scene_url: String,
    pub blood_groups: Vec<BloodGroup>,
    pub organs: Vec<Organ>,
    pub search_cities: Vec<String>,
    pub admin_cities: Vec<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "LifeLink".to_string(),
            network: TEST_NETWORK.to_string(),
            hero_scene_url: HERO_SCENE_URL.to_string(),
            blood_groups: BloodGroup::ALL.to_vec(),
            organs: Organ::ALL.to_vec(),
            search_cities: SEARCH_CITIES.iter().map(|c| c.to_string()).collect(),
            admin_cities: ADMIN_CITIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}
