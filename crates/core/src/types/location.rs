//! Geocoding candidates as returned by the HeartRails Geo API.
//!
//! The API wraps its results in an envelope:
//!
//! ```json
//! {"response": {"location": [{"city": "千代田区", "town": "千代田", "x": "139.753634", "y": "35.685175", "prefecture": "東京都", "postal": "1000001"}]}}
//! ```
//!
//! When a postal code has no match the envelope carries an `error` string
//! instead of `location`, which deserializes to an empty [`GeocodeResult`].

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// One candidate place for a postal code.
///
/// Coordinates are kept as the decimal strings the API delivers; use
/// [`Location::coordinate`] to get numbers. Absent fields deserialize to
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub town: String,
    /// Longitude as a decimal string.
    pub x: String,
    /// Latitude as a decimal string.
    pub y: String,
    pub prefecture: String,
    pub postal: String,
}

impl Location {
    /// The address string used for prefix aggregation: prefecture, city and
    /// town concatenated without separators.
    #[must_use]
    pub fn address(&self) -> String {
        let mut address =
            String::with_capacity(self.prefecture.len() + self.city.len() + self.town.len());
        address.push_str(&self.prefecture);
        address.push_str(&self.city);
        address.push_str(&self.town);
        address
    }

    /// Parsed coordinate; malformed fields become `0.0`.
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::parse_lenient(&self.x, &self.y)
    }
}

/// Ordered candidate locations for one lookup.
pub type GeocodeResult = Vec<Location>;

/// Top-level JSON envelope of the geocoding API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeEnvelope {
    #[serde(default)]
    pub response: GeocodeBody,
}

/// Body of the geocoding envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeBody {
    #[serde(default)]
    pub location: Vec<Location>,
    /// Set by the API when nothing matched.
    #[serde(default)]
    pub error: Option<String>,
}

impl GeocodeEnvelope {
    /// Unwrap the envelope into its candidate list.
    #[must_use]
    pub fn into_locations(self) -> GeocodeResult {
        self.response.location
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope_with_locations() {
        let body = r#"{"response":{"location":[
            {"city":"千代田区","city_kana":"ちよだく","town":"千代田","town_kana":"ちよだ","x":"139.753634","y":"35.685175","prefecture":"東京都","postal":"1000001"}
        ]}}"#;

        let envelope: GeocodeEnvelope = serde_json::from_str(body).unwrap();
        let locations = envelope.into_locations();

        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].address(), "東京都千代田区千代田");
        assert_eq!(locations[0].postal, "1000001");
        assert_eq!(
            locations[0].coordinate(),
            Coordinate::new(139.753_634, 35.685_175)
        );
    }

    #[test]
    fn test_parse_no_match_envelope_is_empty() {
        let body = r#"{"response":{"error":"Postal code does not exist."}}"#;

        let envelope: GeocodeEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.response.error.as_deref(),
            Some("Postal code does not exist.")
        );
        assert!(envelope.into_locations().is_empty());
    }

    #[test]
    fn test_parse_empty_object_is_empty() {
        let envelope: GeocodeEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_locations().is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let body = r#"{"response":{"location":[{"prefecture":"大阪府"}]}}"#;

        let envelope: GeocodeEnvelope = serde_json::from_str(body).unwrap();
        let location = &envelope.response.location[0];
        assert_eq!(location.address(), "大阪府");
        assert_eq!(location.coordinate(), Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(serde_json::from_str::<GeocodeEnvelope>("<html>502</html>").is_err());
    }
}
