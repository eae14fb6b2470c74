//! Foundation module - Core utilities and types
//!
//! - Packed API version numbers
//! - Logging utilities

pub mod logging;
pub mod version;

pub use version::{ApiVersion, ParseVersionError};
