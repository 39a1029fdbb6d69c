//! Snapshot rendering and writing.
//!
//! A snapshot is rendered completely in memory before anything touches the
//! destination, then swapped into place through a temporary file in the same
//! directory. Readers see either the previous snapshot or the new one.

use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::config::OutputFormat;
use crate::error_handling::SnapshotError;
use crate::runtime::RuntimeInfo;

/// Renders `runtime` as an XML or JSON document.
///
/// Both formats are produced by the same `save` calls, so they fail on the
/// same states and share attribute encodings.
pub fn render_snapshot(
    runtime: &RuntimeInfo,
    format: OutputFormat,
) -> Result<String, SnapshotError> {
    match format {
        OutputFormat::Xml => Ok(runtime.to_document()?.to_xml_string()),
        OutputFormat::Json => {
            let mut json = runtime.to_json_document()?.to_json_string()?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Renders `runtime` and atomically replaces the file at `path` with it.
///
/// # Errors
///
/// Returns `SnapshotError::Save` if the state cannot be serialized (the
/// existing file is left untouched), or an I/O / persist error if the
/// temporary file cannot be written or moved into place.
pub fn write_snapshot(
    path: &Path,
    runtime: &RuntimeInfo,
    format: OutputFormat,
) -> Result<(), SnapshotError> {
    let rendered = render_snapshot(runtime, format)?;
    replace_file(path, rendered.as_bytes())
}

/// Writes `contents` to a temporary file next to `path`, then renames it over `path`.
pub(crate) fn replace_file(path: &Path, contents: &[u8]) -> Result<(), SnapshotError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    debug!("Wrote {} byte snapshot to {}", contents.len(), path.display());
    Ok(())
}
