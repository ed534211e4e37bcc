//! Reduce a list of geocoding candidates to one address and one distance.
//!
//! A postal code can map to several towns. The service reports the part of
//! the address every candidate agrees on, and the distance from Tokyo
//! Station to the farthest candidate.

use crate::types::{AppResponse, Coordinate, GeocodeResult, Location, PostalCode, TOKYO_STATION};

/// Returned by [`common_prefix`] when there are no candidates at all.
///
/// Clients depend on this exact text, so it must not change.
pub const COMMON_PREFIX_EMPTY_SENTINEL: &str = "Error: func commonPrefix";

/// Returned by [`common_prefix`] when the candidates share no prefix.
pub const NO_COMMON_PREFIX: &str = "None";

/// Build the `prefecture + city + town` string for every candidate.
#[must_use]
pub fn candidate_addresses(locations: &[Location]) -> Vec<String> {
    locations.iter().map(Location::address).collect()
}

/// Longest prefix shared by every string, compared by `char`.
///
/// Returns [`COMMON_PREFIX_EMPTY_SENTINEL`] for an empty slice and
/// [`NO_COMMON_PREFIX`] when the shared prefix is empty.
///
/// # Examples
///
/// ```
/// use postal_lookup_core::common_prefix;
///
/// let addresses = vec!["東京都千代田区丸の内".to_string(), "東京都千代田区大手町".to_string()];
/// assert_eq!(common_prefix(&addresses), "東京都千代田区");
/// ```
#[must_use]
pub fn common_prefix<S: AsRef<str>>(strs: &[S]) -> String {
    let Some((first, rest)) = strs.split_first() else {
        return COMMON_PREFIX_EMPTY_SENTINEL.to_owned();
    };

    let first = first.as_ref();
    // Byte length of the prefix shared so far; always on a char boundary of `first`.
    let mut prefix_len = first.len();

    for s in rest {
        let shared: usize = first
            .chars()
            .zip(s.as_ref().chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        prefix_len = prefix_len.min(shared);
        if prefix_len == 0 {
            break;
        }
    }

    match first.get(..prefix_len) {
        Some(prefix) if !prefix.is_empty() => prefix.to_owned(),
        _ => NO_COMMON_PREFIX.to_owned(),
    }
}

/// Largest distance from `reference` to any candidate, in kilometers.
///
/// Starts from `0.0`, so an empty slice yields `0.0`.
#[must_use]
pub fn max_distance_km(locations: &[Location], reference: Coordinate) -> f64 {
    locations
        .iter()
        .map(|location| reference.distance_km(&location.coordinate()))
        .fold(0.0, f64::max)
}

/// Round to one decimal place, halves away from zero.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Build the `/address` response for a postal code and its candidates.
#[must_use]
pub fn summarize(postal_code: PostalCode, locations: &GeocodeResult) -> AppResponse {
    let addresses = candidate_addresses(locations);

    AppResponse {
        postal_code,
        hit_count: locations.len(),
        address: common_prefix(&addresses),
        tokyo_sta_distance: round_to_tenth(max_distance_km(locations, TOKYO_STATION)),
    }
}
