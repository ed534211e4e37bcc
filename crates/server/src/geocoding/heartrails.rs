//! HeartRails Geo API client.
//!
//! See <https://geoapi.heartrails.com/api.html> for the upstream API.

use async_trait::async_trait;
use tracing::instrument;
use url::Url;

use postal_lookup_core::{GeocodeEnvelope, GeocodeResult, PostalCode};

use super::{GeocodeError, Geocoder};
use crate::config::GeocodingConfig;

/// Lookup method for postal code searches.
const SEARCH_BY_POSTAL: &str = "searchByPostal";

/// HeartRails Geo API client.
#[derive(Clone)]
pub struct HeartRailsClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HeartRailsClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// URL for a postal code search. The postal code is sent as a
    /// percent-encoded query value.
    fn search_url(&self, postal_code: &PostalCode) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("method", SEARCH_BY_POSTAL)
            .append_pair("postal", postal_code.as_str());
        url
    }
}

#[async_trait]
impl Geocoder for HeartRailsClient {
    #[instrument(skip(self), fields(postal_code = %postal_code))]
    async fn search_by_postal(
        &self,
        postal_code: &PostalCode,
    ) -> Result<GeocodeResult, GeocodeError> {
        let response = self.client.get(self.search_url(postal_code)).send().await?;

        // The API reports unknown postal codes in the body, so the status is
        // informational only and the body is always parsed.
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Geocoding API returned non-success status");
        }

        let body = response.bytes().await?;
        let envelope: GeocodeEnvelope = serde_json::from_slice(&body)?;
        let locations = envelope.into_locations();

        tracing::debug!(hits = locations.len(), "Geocoding lookup complete");
        Ok(locations)
    }
}
