//! Application initialization.
//!
//! Currently only the logger needs process-wide setup; the accounting state
//! itself is plain data built by the caller.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
