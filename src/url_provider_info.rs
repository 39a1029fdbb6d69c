//! Outcome of the most recent run of one URL provider.

use chrono::{DateTime, Utc};

use crate::error_handling::SaveError;
use crate::output::OutputNode;

/// Last-run snapshot of a URL provider.
///
/// A provider that has never run has no `last_update` (written as `-1`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlProviderInfo {
    success: bool,
    last_update: Option<DateTime<Utc>>,
    urls_count: u64,
}

impl UrlProviderInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.success = false;
        self.last_update = None;
        self.urls_count = 0;
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub fn urls_count(&self) -> u64 {
        self.urls_count
    }

    /// True until the provider records its first run.
    pub fn never_run(&self) -> bool {
        self.last_update.is_none()
    }

    pub fn set_success(&mut self, success: bool) {
        self.success = success;
    }

    pub fn set_last_update(&mut self, at: Option<DateTime<Utc>>) {
        self.last_update = at;
    }

    pub fn set_urls_count(&mut self, count: u64) {
        self.urls_count = count;
    }

    /// Records a finished run at `at`.
    pub fn record_run(&mut self, success: bool, urls_count: u64, at: DateTime<Utc>) {
        self.success = success;
        self.urls_count = urls_count;
        self.last_update = Some(at);
    }

    /// Writes `success`, `last_update` and `urls_count` onto `node`.
    ///
    /// Never fails; the `Result` only mirrors the site entries' signature.
    pub fn save<N: OutputNode>(&self, node: &mut N) -> Result<(), SaveError> {
        node.set_bool_attribute("success", self.success);
        node.set_time_attribute("last_update", self.last_update);
        node.set_attribute("urls_count", self.urls_count);
        Ok(())
    }
}
