//! Plain-text site count listing used by the CLI.
//!
//! One site per line: `<site_id> <url_in_memory> <url_in_database> <url_in_tempfile>`.
//! Blank lines and lines starting with `#` are skipped.

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;

use crate::application_info::ApplicationInfo;

/// Parses `contents` into `app`, returning the number of site lines read.
///
/// A repeated site id updates the counts of the existing entry.
pub fn load_sites_str(app: &mut ApplicationInfo, contents: &str) -> Result<usize> {
    let mut loaded = 0;
    for (index, raw) in contents.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [site_id, in_memory, in_database, in_tempfile] = fields.as_slice() else {
            bail!(
                "line {}: expected 4 fields (site_id, in_memory, in_database, in_tempfile), found {}",
                line_no,
                fields.len()
            );
        };
        let parse = |name: &str, value: &str| -> Result<u64> {
            value
                .parse::<u64>()
                .with_context(|| format!("line {}: invalid {} count '{}'", line_no, name, value))
        };
        let in_memory = parse("in_memory", *in_memory)?;
        let in_database = parse("in_database", *in_database)?;
        let in_tempfile = parse("in_tempfile", *in_tempfile)?;

        let site = app.add_site(*site_id);
        site.set_url_in_memory(in_memory);
        site.set_url_in_database(in_database);
        site.set_url_in_tempfile(in_tempfile);
        loaded += 1;
    }
    debug!("Loaded {} site lines", loaded);
    Ok(loaded)
}

/// Reads a listing file into `app`.
pub fn load_sites_file(app: &mut ApplicationInfo, path: &Path) -> Result<usize> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sites file {}", path.display()))?;
    load_sites_str(app, &contents)
        .with_context(|| format!("Failed to parse sites file {}", path.display()))
}
