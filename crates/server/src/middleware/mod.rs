//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added by the binary)
//! 2. `TraceLayer` (request span with method, URI, status, latency)
//! 3. Request ID (add unique ID to each request and its span)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
