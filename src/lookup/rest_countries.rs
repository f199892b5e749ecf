//! REST Countries v2 client.
//!
//! One GET per lookup: `<base>/name/<country-name>` with the name as a
//! percent-encoded path segment. No auth, no custom headers, no retries,
//! no timeout beyond reqwest's defaults.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::lookup::source::{CountrySource, LookupError};
use crate::lookup::types::Country;

/// Production lookup backend against the REST Countries v2 API.
pub struct RestCountriesClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public API)
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| "https://restcountries.com/v2".to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Builds `<base>/name/<country-name>` with the name pushed as a path
    /// segment, so spaces become `%20` and other reserved characters are
    /// escaped too. Fails before any network call if the base URL itself
    /// cannot host path segments.
    fn request_url(&self, country_name: &str) -> Result<reqwest::Url, LookupError> {
        let mut url =
            reqwest::Url::parse(&self.base_url).map_err(|_| LookupError::InvalidInput)?;
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidInput)?
            .push("name")
            .push(country_name);
        Ok(url)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn lookup(&self, country_name: &str) -> Result<Country, LookupError> {
        // An empty path segment would hit a different route entirely, so
        // blank input is rejected locally.
        if country_name.trim().is_empty() {
            warn!("Rejecting blank country name before the network call");
            return Err(LookupError::InvalidInput);
        }

        let url = self.request_url(country_name)?;
        debug!("Lookup request: GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Lookup response status: {}", status);

        if status.as_u16() != 200 {
            warn!("Lookup for '{}' answered {}", country_name, status);
            return Err(LookupError::InvalidName {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;
        debug!("Lookup response body: {} bytes", body.len());

        let mut countries: Vec<Country> =
            serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))?;
        if countries.is_empty() {
            return Err(LookupError::Decode("empty country array".to_string()));
        }

        // The API returns every partial-name match; the first entry wins and
        // the rest are dropped.
        let country = countries.swap_remove(0);
        info!("Resolved '{}' to {}", country_name, country.name);
        Ok(country)
    }
}
