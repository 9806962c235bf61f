use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Region of a country as reported by the countries dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Antarctic,
    Asia,
    #[serde(rename = "Central America")]
    CentralAmerica,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    Oceania,
    #[serde(rename = "South America")]
    SouthAmerica,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Africa => "Africa",
            Region::Antarctic => "Antarctic",
            Region::Asia => "Asia",
            Region::CentralAmerica => "Central America",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::Oceania => "Oceania",
            Region::SouthAmerica => "South America",
            Region::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub country: String,
    pub region: Region,
}

/// Envelope returned by the countries endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesEnvelope {
    pub status: String,
    #[serde(rename = "status-code")]
    pub status_code: i64,
    pub version: String,
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    pub data: BTreeMap<String, CountryEntry>,
}

/// One row of the country screen: the dataset key plus its entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub code: String,
    pub entry: CountryEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityEntry {
    pub name: String,
    #[serde(default)]
    pub domains: Vec<String>,
    pub alpha_two_code: String,
    #[serde(rename = "state-province", default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub web_pages: Vec<String>,
    pub country: String,
}
