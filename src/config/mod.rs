//! Application configuration and constants.
//!
//! This module provides:
//! - Accounting constants (entry size, serialization tag names)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
