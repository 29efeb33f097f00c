//! Configuration module
//!
//! Compile-time drive and board parameters.

pub mod params;

// Re-export the main constants
pub use params::*;
