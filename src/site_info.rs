//! Per-site resource counters.
//!
//! Crawling code updates the raw URL counts as it goes. The derived
//! `memory_used`/`disk_used` figures are only written by
//! [`ApplicationInfo::recompute_usage`](crate::ApplicationInfo::recompute_usage).

use crate::error_handling::SaveError;
use crate::output::OutputNode;

/// What the application-wide accounting needs from a site entry.
pub trait SiteResource {
    /// Creates a default-initialized entry carrying `site_id`.
    fn with_site_id(site_id: &str) -> Self;

    /// Clears the entry's state. The identifier is kept.
    fn reset(&mut self);

    fn url_in_memory(&self) -> u64;
    fn url_in_database(&self) -> u64;
    fn url_in_tempfile(&self) -> u64;

    fn memory_used(&self) -> u64;
    fn disk_used(&self) -> u64;
    fn set_memory_used(&mut self, bytes: u64);
    fn set_disk_used(&mut self, bytes: u64);

    /// Writes the entry onto `node`.
    fn save<N: OutputNode>(&self, node: &mut N) -> Result<(), SaveError>;
}

/// Resource counters of one crawled site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteInfo {
    site_id: String,
    url_in_memory: u64,
    url_in_database: u64,
    url_in_tempfile: u64,
    memory_used: u64,
    disk_used: u64,
}

impl SiteInfo {
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn set_url_in_memory(&mut self, count: u64) {
        self.url_in_memory = count;
    }

    pub fn set_url_in_database(&mut self, count: u64) {
        self.url_in_database = count;
    }

    pub fn set_url_in_tempfile(&mut self, count: u64) {
        self.url_in_tempfile = count;
    }
}

impl SiteResource for SiteInfo {
    fn with_site_id(site_id: &str) -> Self {
        Self {
            site_id: site_id.to_string(),
            ..Default::default()
        }
    }

    fn reset(&mut self) {
        *self = Self {
            site_id: std::mem::take(&mut self.site_id),
            ..Default::default()
        };
    }

    fn url_in_memory(&self) -> u64 {
        self.url_in_memory
    }

    fn url_in_database(&self) -> u64 {
        self.url_in_database
    }

    fn url_in_tempfile(&self) -> u64 {
        self.url_in_tempfile
    }

    fn memory_used(&self) -> u64 {
        self.memory_used
    }

    fn disk_used(&self) -> u64 {
        self.disk_used
    }

    fn set_memory_used(&mut self, bytes: u64) {
        self.memory_used = bytes;
    }

    fn set_disk_used(&mut self, bytes: u64) {
        self.disk_used = bytes;
    }

    fn save<N: OutputNode>(&self, node: &mut N) -> Result<(), SaveError> {
        if self.site_id.is_empty() {
            return Err(SaveError::MissingSiteId);
        }

        node.set_attribute("site_id", self.site_id.as_str());
        node.set_attribute("url_in_memory", self.url_in_memory);
        node.set_attribute("url_in_database", self.url_in_database);
        node.set_attribute("url_in_tempfile", self.url_in_tempfile);
        node.set_attribute("memory_used", self.memory_used);
        node.set_attribute("disk_used", self.disk_used);
        Ok(())
    }
}
