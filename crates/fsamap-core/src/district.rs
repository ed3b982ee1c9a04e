//! Provincial electoral districts and their sitting members.

use serde::{Deserialize, Serialize};

/// Number of provincial electoral districts; ids run `1..=DISTRICT_COUNT`.
pub const DISTRICT_COUNT: u16 = 124;

/// District held by the Premier (Etobicoke North).
pub const PREMIER_DISTRICT_ID: u16 = 30;

/// Every district id, ascending.
pub fn district_ids() -> impl Iterator<Item = u16> {
    1..=DISTRICT_COUNT
}

#[must_use]
pub fn is_known_district(id: u16) -> bool {
    (1..=DISTRICT_COUNT).contains(&id)
}

/// One entry of the raw district listing, as published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDistrict {
    pub id: u16,
    pub name: String,
    pub municipalities: serde_json::Value,
    pub population: u64,
    pub area_square_km: f64,
    pub mpp_url: String,
    pub mpp_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Designation {
    Premier,
    Minister,
    #[serde(rename = "MPP")]
    Mpp,
}

impl std::fmt::Display for Designation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Designation::Premier => write!(f, "Premier"),
            Designation::Minister => write!(f, "Minister"),
            Designation::Mpp => write!(f, "MPP"),
        }
    }
}

/// A district merged with what its member's page says about them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRecord {
    pub id: u16,
    pub name: String,
    pub municipalities: serde_json::Value,
    pub population: u64,
    pub area_square_km: f64,
    pub mpp_url: String,
    pub mpp_name: String,
    pub url: String,
    pub mpp_designation: Designation,
    pub mpp_first_name: String,
    pub mpp_last_name: String,
    pub mpp_party: Option<String>,
    pub mpp_email: Option<String>,
    pub mpp_phone: Option<String>,
}
