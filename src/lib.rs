//! sitemap_status library: resource accounting and status snapshots
//!
//! Tracks, per crawled site and in aggregate, an estimate of the memory and
//! disk a sitemap service instance uses, together with the outcome of each
//! URL provider's last run, and serializes that state into a status
//! document.
//!
//! # Example
//!
//! ```
//! use sitemap_status::{ApplicationInfo, RuntimeInfo};
//!
//! let mut app = ApplicationInfo::with_entry_size(40);
//! app.add_site("example").set_url_in_memory(10);
//! app.recompute_usage();
//! assert_eq!(app.memory_used(), 400);
//!
//! let runtime = RuntimeInfo::new(app);
//! let xml = runtime.to_document().unwrap().to_xml_string();
//! assert!(xml.contains("<SiteInfo site_id=\"example\""));
//! ```

mod application_info;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod monitor;
pub mod output;
mod runtime;
mod site_info;
pub mod sites_file;
mod url_provider_info;

// Re-export public API
pub use application_info::ApplicationInfo;
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{InitializationError, SaveError, SnapshotError};
pub use output::{AttributeValue, JsonNode, OutputNode, XmlElement};
pub use run::{run, RunReport};
pub use runtime::RuntimeInfo;
pub use site_info::{SiteInfo, SiteResource};
pub use url_provider_info::UrlProviderInfo;

// Internal run module (CLI orchestration)
mod run {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use log::info;
    use tokio::sync::Mutex;
    use tokio_util::sync::CancellationToken;

    use crate::export::{render_snapshot, write_snapshot};
    use crate::monitor::{spawn_usage_monitor, SnapshotTarget};
    use crate::sites_file::load_sites_file;
    use crate::{ApplicationInfo, Config, RuntimeInfo};

    /// Summary of one run.
    #[derive(Debug)]
    pub struct RunReport {
        pub sites: usize,
        pub memory_used: u64,
        pub disk_used: u64,
        /// Where the snapshot was written, if a destination was configured
        pub output: Option<PathBuf>,
        /// The rendered snapshot when no destination was configured
        pub rendered: Option<String>,
    }

    /// Loads the site listing, recomputes usage and produces the snapshot.
    ///
    /// With `watch_interval_secs` set, keeps recomputing (and rewriting the
    /// snapshot) on that interval until Ctrl-C, then produces a final one.
    pub async fn run(config: Config) -> Result<RunReport> {
        let mut app = ApplicationInfo::with_entry_size(config.entry_size);
        let loaded = load_sites_file(&mut app, &config.sites)?;
        info!(
            "Loaded {} site lines ({} sites) from {}",
            loaded,
            app.site_count(),
            config.sites.display()
        );

        let state = Arc::new(Mutex::new(RuntimeInfo::new(app)));

        if let Some(secs) = config.watch_interval_secs {
            let cancel = CancellationToken::new();
            let target = config.output.clone().map(|path| SnapshotTarget {
                path,
                format: config.format,
            });
            let handle = spawn_usage_monitor(
                Arc::clone(&state),
                Duration::from_secs(secs.max(1)),
                target,
                cancel.clone(),
            );
            info!("Watching usage every {}s, press Ctrl-C to stop", secs.max(1));

            tokio::signal::ctrl_c()
                .await
                .context("Failed to listen for Ctrl-C")?;
            cancel.cancel();
            handle.await.context("Usage monitor task failed")?;
        }

        let mut runtime = state.lock().await;
        runtime.recompute_usage();
        let app = runtime.application();
        info!(
            "Usage estimate: memory_used={} disk_used={} across {} sites",
            app.memory_used(),
            app.disk_used(),
            app.site_count()
        );

        let rendered = match &config.output {
            Some(path) => {
                write_snapshot(path, &runtime, config.format)
                    .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
                None
            }
            None => Some(
                render_snapshot(&runtime, config.format).context("Failed to render snapshot")?,
            ),
        };

        Ok(RunReport {
            sites: app.site_count(),
            memory_used: app.memory_used(),
            disk_used: app.disk_used(),
            output: config.output.clone(),
            rendered,
        })
    }
}
