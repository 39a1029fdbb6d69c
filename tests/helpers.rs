// Shared test helpers for building accounting state and listing files.

use std::path::{Path, PathBuf};

use sitemap_status::ApplicationInfo;

/// Builds an application info with the given `(site_id, in_memory, in_database, in_tempfile)` rows.
#[allow(dead_code)] // Used by other test files
pub fn app_with_sites(entry_size: u64, rows: &[(&str, u64, u64, u64)]) -> ApplicationInfo {
    let mut app = ApplicationInfo::with_entry_size(entry_size);
    for (id, in_memory, in_database, in_tempfile) in rows {
        let site = app.add_site(id);
        site.set_url_in_memory(*in_memory);
        site.set_url_in_database(*in_database);
        site.set_url_in_tempfile(*in_tempfile);
    }
    app
}

/// Writes a sites listing into `dir` and returns its path.
#[allow(dead_code)] // Used by other test files
pub fn write_listing(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("sites.txt");
    std::fs::write(&path, contents).expect("Failed to write sites listing");
    path
}
