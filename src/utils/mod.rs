//! Utility functions shared across the application.
//!
//! - [`key_generator`] - Short key generation
//! - [`extract_host`] - Host extraction from HTTP headers

pub mod extract_host;
pub mod key_generator;
