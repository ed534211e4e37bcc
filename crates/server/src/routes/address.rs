//! Address lookup and access log route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use tracing::instrument;

use postal_lookup_core::{AccessLogsResponse, AppResponse, PostalCode, summarize};

use crate::error::Result;
use crate::state::AppState;

/// Name of the query parameter carrying the postal code.
pub const POSTAL_CODE_PARAM: &str = "postal_code";

/// First `postal_code` value in the query, or an empty code when absent.
///
/// Repeated parameters never reject the request; later values are ignored.
#[must_use]
pub fn first_postal_code(params: &[(String, String)]) -> PostalCode {
    params
        .iter()
        .find(|(name, _)| name == POSTAL_CODE_PARAM)
        .map(|(_, value)| PostalCode::new(value.as_str()))
        .unwrap_or_default()
}

/// Resolve a postal code to its common address and distance from Tokyo Station.
///
/// The access log row is written before the lookup and is kept even if the
/// lookup fails.
#[instrument(skip_all, fields(postal_code))]
pub async fn show(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<AppResponse>> {
    let postal_code = first_postal_code(&params);
    tracing::Span::current().record("postal_code", postal_code.as_str());

    state
        .access_logs()
        .record_access(&postal_code, Utc::now())
        .await?;

    let locations = state.geocoder().search_by_postal(&postal_code).await?;
    let response = summarize(postal_code, &locations);

    tracing::info!(
        hit_count = response.hit_count,
        address = %response.address,
        tokyo_sta_distance = response.tokyo_sta_distance,
        "Address resolved"
    );

    Ok(Json(response))
}

/// Request counts per postal code, most requested first.
#[instrument(skip(state))]
pub async fn access_logs(State(state): State<AppState>) -> Result<Json<AccessLogsResponse>> {
    let access_logs = state.access_logs().summarize_access().await?;
    Ok(Json(AccessLogsResponse { access_logs }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn test_first_postal_code_missing_is_empty() {
        assert!(first_postal_code(&[]).is_empty());
        assert!(first_postal_code(&params(&[("zip", "1000001")])).is_empty());
    }

    #[test]
    fn test_first_postal_code_takes_first_of_repeats() {
        let query = params(&[
            ("other", "x"),
            ("postal_code", "1000001"),
            ("postal_code", "1500001"),
        ]);
        assert_eq!(first_postal_code(&query).as_str(), "1000001");
    }

    #[test]
    fn test_first_postal_code_keeps_empty_value() {
        let query = params(&[("postal_code", ""), ("postal_code", "1500001")]);
        assert!(first_postal_code(&query).is_empty());
    }
}
