//! Country records as served by the REST Countries API
//!
//! Only the fields the query pipeline reads are typed. Everything else the
//! upstream sends (capital, currencies, flags, languages, translations, ...)
//! is kept verbatim and serialized back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Common and official name of a country
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CountryName {
    pub common: String,
    pub official: String,
    /// Remaining name fields, e.g. `nativeName`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One country as decoded from the upstream payload
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CountryRecord {
    pub name: CountryName,
    pub population: u64,
    pub region: String,
    /// Opaque passthrough payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CountryRecord {
    /// Build a record with no passthrough fields
    pub fn new(common: &str, official: &str, population: u64, region: &str) -> Self {
        Self {
            name: CountryName {
                common: common.to_string(),
                official: official.to_string(),
                extra: Map::new(),
            },
            population,
            region: region.to_string(),
            extra: Map::new(),
        }
    }
}

/// Decode an upstream payload into records
///
/// The payload must be a JSON array of country-shaped objects.
pub fn parse_countries(payload: &[u8]) -> Result<Vec<CountryRecord>, serde_json::Error> {
    serde_json::from_slice(payload)
}
