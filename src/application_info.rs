//! Application-wide resource accounting.
//!
//! Usage totals are pulled, not pushed: crawling code bumps the raw URL counts
//! on each site entry, and the totals only change when
//! [`ApplicationInfo::recompute_usage`] runs. Read the totals after a
//! recompute, never in between.
//!
//! Nothing here is synchronized. Callers sharing an `ApplicationInfo` across
//! threads wrap the whole value in one lock.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;

use crate::config::{DEFAULT_ENTRY_SIZE, SITE_INFO_TAG};
use crate::error_handling::SaveError;
use crate::output::OutputNode;
use crate::site_info::{SiteInfo, SiteResource};

/// Memory/disk usage of the whole service, rolled up from its sites.
///
/// Sites are kept in identifier order so that serialized snapshots are
/// reproducible.
#[derive(Debug, Clone)]
pub struct ApplicationInfo<S = SiteInfo> {
    entry_size: u64,
    memory_used: u64,
    disk_used: u64,
    start_time: DateTime<Utc>,
    sites: BTreeMap<String, S>,
}

impl ApplicationInfo {
    /// Creates accounting state with [`DEFAULT_ENTRY_SIZE`] as the per-URL estimate.
    pub fn new() -> Self {
        Self::with_entry_size(DEFAULT_ENTRY_SIZE)
    }

    /// Creates accounting state that charges `entry_size` bytes per tracked URL.
    pub fn with_entry_size(entry_size: u64) -> Self {
        Self::with_entry_size_for(entry_size)
    }
}

impl<S: SiteResource> Default for ApplicationInfo<S> {
    fn default() -> Self {
        Self::with_entry_size_for(DEFAULT_ENTRY_SIZE)
    }
}

impl<S: SiteResource> ApplicationInfo<S> {
    /// Like [`ApplicationInfo::with_entry_size`], for a custom site entry type.
    pub fn with_entry_size_for(entry_size: u64) -> Self {
        Self {
            entry_size,
            memory_used: 0,
            disk_used: 0,
            start_time: Utc::now(),
            sites: BTreeMap::new(),
        }
    }

    pub fn entry_size(&self) -> u64 {
        self.entry_size
    }

    /// Total estimated memory bytes as of the last [`recompute_usage`](Self::recompute_usage).
    pub fn memory_used(&self) -> u64 {
        self.memory_used
    }

    /// Total estimated disk bytes as of the last [`recompute_usage`](Self::recompute_usage).
    pub fn disk_used(&self) -> u64 {
        self.disk_used
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Zeroes the totals, restarts the clock and resets every site in place.
    ///
    /// Site entries stay in the table.
    pub fn reset(&mut self) {
        self.memory_used = 0;
        self.disk_used = 0;
        self.start_time = Utc::now();

        for site in self.sites.values_mut() {
            site.reset();
        }
        debug!("Reset application info ({} sites kept)", self.sites.len());
    }

    /// Recomputes every site's usage from its raw counts, then the totals.
    ///
    /// Writes `memory_used`/`disk_used` back into each site entry as well.
    pub fn recompute_usage(&mut self) {
        let entry_size = self.entry_size;
        let mut memory_used: u64 = 0;
        let mut disk_used: u64 = 0;

        for site in self.sites.values_mut() {
            let on_disk = site.url_in_database().saturating_add(site.url_in_tempfile());
            site.set_memory_used(entry_size.saturating_mul(site.url_in_memory()));
            site.set_disk_used(entry_size.saturating_mul(on_disk));

            memory_used = memory_used.saturating_add(site.memory_used());
            disk_used = disk_used.saturating_add(site.disk_used());
        }

        self.memory_used = memory_used;
        self.disk_used = disk_used;
        debug!(
            "Recomputed usage over {} sites: memory_used={} disk_used={}",
            self.sites.len(),
            memory_used,
            disk_used
        );
    }

    /// Writes totals and start time onto `node`, then one `SiteInfo` child per site.
    ///
    /// Stops at the first site that fails and returns its error. Children
    /// appended before the failure (including the failing one) stay attached.
    pub fn save<N: OutputNode>(&self, node: &mut N) -> Result<(), SaveError> {
        node.set_attribute("memory_used", self.memory_used);
        node.set_attribute("disk_used", self.disk_used);
        node.set_time_attribute("start_time", Some(self.start_time));

        for site in self.sites.values() {
            let child = node.append_child(SITE_INFO_TAG);
            site.save(child)?;
        }
        Ok(())
    }

    /// Looks up a site without creating it.
    pub fn site(&self, site_id: &str) -> Option<&S> {
        self.sites.get(site_id)
    }

    pub fn site_mut(&mut self, site_id: &str) -> Option<&mut S> {
        self.sites.get_mut(site_id)
    }

    /// Returns the entry for `site_id`, creating a fresh one if it is missing.
    ///
    /// An existing entry is returned untouched.
    pub fn add_site(&mut self, site_id: &str) -> &mut S {
        match self.sites.entry(site_id.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!("Tracking new site '{}'", site_id);
                entry.insert(S::with_site_id(site_id))
            }
        }
    }

    /// Drops every site entry.
    pub fn clear_sites(&mut self) {
        debug!("Clearing {} sites", self.sites.len());
        self.sites.clear();
    }

    /// Iterates over sites in identifier order.
    pub fn sites(&self) -> impl Iterator<Item = (&str, &S)> {
        self.sites.iter().map(|(id, site)| (id.as_str(), site))
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }
}
