use serde::{Deserialize, Serialize};

/// A single country record from the REST Countries v2 API.
///
/// The payload carries many more fields (region, population, flags, ...);
/// only the subset rendered by the UI is decoded. The three fields below
/// are required — a response missing any of them fails to decode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Country {
    pub name: String,
    pub capital: String,
    #[serde(rename = "altSpellings")]
    pub alt_spellings: Vec<String>,
}
