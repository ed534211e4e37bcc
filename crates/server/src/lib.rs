//! Postal lookup server library.
//!
//! This crate provides the service as a library, allowing the router to be
//! tested with stub collaborators and reused by the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod geocoding;
pub mod middleware;
pub mod routes;
pub mod state;
