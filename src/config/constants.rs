//! Configuration constants.
//!
//! This module defines the constants used for usage estimation and for the
//! element names of the status document.

/// Size in bytes of one URL fingerprint.
pub const URL_FPRINT_SIZE: u64 = 8;

/// Size in bytes of one visiting record kept alongside a fingerprint.
///
/// Covers the fingerprint copy, first-seen/last-access/last-change times and
/// the change counters.
pub const VISITING_RECORD_SIZE: u64 = 32;

/// Estimated byte cost of one tracked URL ("fingerprint + visiting record").
///
/// Usage figures are estimates built from this unit, not measured values.
pub const DEFAULT_ENTRY_SIZE: u64 = URL_FPRINT_SIZE + VISITING_RECORD_SIZE;

/// Timestamp encoding for "never updated".
pub const NEVER_UPDATED: i64 = -1;

// Element names used in the status document
pub const RUNTIME_INFO_TAG: &str = "RuntimeInfo";
pub const APPLICATION_INFO_TAG: &str = "ApplicationInfo";
pub const SITE_INFO_TAG: &str = "SiteInfo";
pub const URL_PROVIDER_INFO_TAG: &str = "UrlProviderInfo";

/// Default interval between usage recomputations in watch mode.
pub const DEFAULT_MONITOR_INTERVAL_SECS: u64 = 60;
