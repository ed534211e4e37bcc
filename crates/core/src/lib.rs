//! Postal Lookup Core - Shared types library.
//!
//! This crate provides the domain types and pure computations used by the
//! postal lookup service:
//! - `server` - HTTP API, database access and the geocoding client
//! - `integration-tests` - Router-level and live database tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and easy to test.
//!
//! # Modules
//!
//! - [`types`] - Postal codes, geocoding candidates, coordinates and API payloads
//! - [`aggregate`] - Longest common address prefix and distance to Tokyo Station

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod aggregate;
pub mod types;

pub use aggregate::{
    COMMON_PREFIX_EMPTY_SENTINEL, NO_COMMON_PREFIX, candidate_addresses, common_prefix,
    max_distance_km, round_to_tenth, summarize,
};
pub use types::*;
