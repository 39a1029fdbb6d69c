//! Snapshot rendering, atomic file writing and the one-shot run.

use sitemap_status::export::{render_snapshot, write_snapshot};
use sitemap_status::{run, Config, OutputFormat, RuntimeInfo, SnapshotError};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{app_with_sites, write_listing};

#[test]
fn test_write_snapshot_creates_and_replaces_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("status.xml");

    let mut runtime = RuntimeInfo::new(app_with_sites(40, &[("a", 1, 0, 0)]));
    runtime.recompute_usage();
    write_snapshot(&path, &runtime, OutputFormat::Xml).expect("first write");
    let first = std::fs::read_to_string(&path).expect("read snapshot");
    assert!(first.contains("memory_used=\"40\""));

    runtime.application_mut().add_site("a").set_url_in_memory(2);
    runtime.recompute_usage();
    write_snapshot(&path, &runtime, OutputFormat::Xml).expect("second write");
    let second = std::fs::read_to_string(&path).expect("read snapshot");
    assert!(second.contains("memory_used=\"80\""));
}

#[test]
fn test_failed_render_leaves_previous_snapshot() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("status.xml");
    std::fs::write(&path, "previous").expect("seed file");

    let runtime = RuntimeInfo::new(app_with_sites(40, &[("", 1, 0, 0)]));
    let result = write_snapshot(&path, &runtime, OutputFormat::Xml);

    assert!(matches!(result, Err(SnapshotError::Save(_))));
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "previous");
}

#[test]
fn test_json_snapshot_contains_provider_state() {
    let mut runtime = RuntimeInfo::new(app_with_sites(40, &[("a", 0, 2, 1)]));
    runtime.provider("file_scanner").set_urls_count(3);
    runtime.recompute_usage();

    let json = render_snapshot(&runtime, OutputFormat::Json).expect("render");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert_eq!(value["children"][0]["attributes"]["disk_used"], 120);
    let provider = &value["children"][1];
    assert_eq!(provider["attributes"]["name"], "file_scanner");
    assert_eq!(provider["attributes"]["urls_count"], 3);
    assert_eq!(provider["attributes"]["last_update"], -1);
}

#[test]
fn test_json_snapshot_with_unnamed_site_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("status.json");
    std::fs::write(&path, "previous").expect("seed file");

    let runtime = RuntimeInfo::new(app_with_sites(40, &[("", 1, 0, 0), ("b", 1, 0, 0)]));
    let result = write_snapshot(&path, &runtime, OutputFormat::Json);

    assert!(matches!(result, Err(SnapshotError::Save(_))));
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "previous");
}

#[tokio::test]
async fn test_run_writes_snapshot_file() {
    let dir = TempDir::new().expect("temp dir");
    let sites = write_listing(dir.path(), "# id mem db tmp\na 10 0 0\nb 5 1 1\n");
    let output = dir.path().join("status.xml");

    let config = Config {
        sites,
        output: Some(output.clone()),
        entry_size: 40,
        ..Default::default()
    };
    let report = run(config).await.expect("run should succeed");

    assert_eq!(report.sites, 2);
    assert_eq!(report.memory_used, 600);
    assert_eq!(report.disk_used, 80);
    assert_eq!(report.output.as_deref(), Some(output.as_path()));
    assert!(report.rendered.is_none());

    let xml = std::fs::read_to_string(&output).expect("snapshot should exist");
    assert!(xml.contains("<ApplicationInfo memory_used=\"600\" disk_used=\"80\""));
}

#[tokio::test]
async fn test_run_without_output_returns_rendered_json() {
    let dir = TempDir::new().expect("temp dir");
    let sites = write_listing(dir.path(), "only 1 2 3\n");

    let config = Config {
        sites,
        format: OutputFormat::Json,
        entry_size: 10,
        ..Default::default()
    };
    let report = run(config).await.expect("run should succeed");

    let rendered = report.rendered.expect("rendered snapshot");
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");
    let site = &value["children"][0]["children"][0];
    assert_eq!(site["attributes"]["site_id"], "only");
    assert_eq!(site["attributes"]["disk_used"], 50);
}

#[tokio::test]
async fn test_run_with_bad_listing_fails() {
    let dir = TempDir::new().expect("temp dir");
    let sites = write_listing(dir.path(), "broken line\n");

    let config = Config {
        sites,
        ..Default::default()
    };
    let err = run(config).await.unwrap_err();
    assert!(format!("{:#}", err).contains("line 1"));
}
