//! Mapstats Core - Domain models, configuration, and port definitions
//!
//! This crate holds the types shared by the place-search and dashboard
//! pipelines, along with the traits their adapters implement.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

pub use error::{MapstatsError, Result};
