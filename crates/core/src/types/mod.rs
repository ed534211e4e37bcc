//! Core types for the postal lookup service.
//!
//! This module provides type-safe wrappers for the domain concepts shared
//! between the geocoding client, the access log store and the HTTP layer.

pub mod coordinate;
pub mod location;
pub mod postal_code;
pub mod response;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM, TOKYO_STATION};
pub use location::{GeocodeBody, GeocodeEnvelope, GeocodeResult, Location};
pub use postal_code::PostalCode;
pub use response::{AccessLogSummary, AccessLogsResponse, AppResponse, ErrorResponse};
