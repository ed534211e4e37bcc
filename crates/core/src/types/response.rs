//! JSON payloads returned by the HTTP API.

use serde::{Deserialize, Serialize};

use super::postal_code::PostalCode;

/// Result of `GET /address`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppResponse {
    /// The postal code exactly as requested.
    pub postal_code: PostalCode,
    /// Number of candidate locations the geocoding API returned.
    pub hit_count: usize,
    /// Longest common prefix of the candidate addresses.
    pub address: String,
    /// Maximum distance from Tokyo Station in km, rounded to one decimal.
    pub tokyo_sta_distance: f64,
}

/// Request count for one postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessLogSummary {
    pub postal_code: PostalCode,
    pub request_count: i64,
}

/// Result of `GET /address/access_logs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessLogsResponse {
    pub access_logs: Vec<AccessLogSummary>,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
