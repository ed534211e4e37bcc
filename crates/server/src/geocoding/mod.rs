//! Geocoding API client.
//!
//! # Architecture
//!
//! - One outbound GET per `/address` request, no caching, no retries
//! - The HeartRails Geo API is the only backend; [`Geocoder`] is the seam
//!   the HTTP layer depends on so tests can substitute a stub
//!
//! # Example
//!
//! ```rust,ignore
//! use postal_lookup_server::geocoding::{Geocoder, HeartRailsClient};
//!
//! let client = HeartRailsClient::new(&config.geocoding)?;
//! let locations = client.search_by_postal(&PostalCode::new("1000001")).await?;
//! ```

mod heartrails;

pub use heartrails::HeartRailsClient;

use async_trait::async_trait;
use thiserror::Error;

use postal_lookup_core::{GeocodeResult, PostalCode};

/// Errors that can occur when querying the geocoding API.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not the expected JSON envelope.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Resolves a postal code to its candidate locations.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Look up every location registered for `postal_code`.
    ///
    /// An unknown postal code yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns `GeocodeError` on network failure or a malformed response.
    async fn search_by_postal(
        &self,
        postal_code: &PostalCode,
    ) -> Result<GeocodeResult, GeocodeError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GeocodeError::from(err);
        assert!(err.to_string().starts_with("JSON parse error: "));
    }
}
