//! Periodic usage recomputation.
//!
//! Usage totals are only refreshed on demand. In watch mode this task is the
//! demand: every tick it takes the state lock, recomputes, and optionally
//! rewrites the snapshot file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

use crate::config::OutputFormat;
use crate::export::{render_snapshot, replace_file};
use crate::runtime::RuntimeInfo;

/// Where and how the monitor writes snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotTarget {
    pub path: PathBuf,
    pub format: OutputFormat,
}

/// Spawns the usage monitor. It stops when `cancel` is cancelled.
///
/// The whole `RuntimeInfo` is locked while recomputing and rendering, so
/// the snapshot never mixes totals from two different recomputations.
/// Write failures are logged and retried on the next tick.
pub fn spawn_usage_monitor(
    state: Arc<Mutex<RuntimeInfo>>,
    period: Duration,
    snapshot: Option<SnapshotTarget>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period.max(Duration::from_millis(1)));
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let rendered = {
                        let mut runtime = state.lock().await;
                        runtime.recompute_usage();
                        debug!(
                            "Usage: memory_used={} disk_used={} sites={}",
                            runtime.application().memory_used(),
                            runtime.application().disk_used(),
                            runtime.application().site_count()
                        );
                        snapshot
                            .as_ref()
                            .map(|target| render_snapshot(&runtime, target.format))
                    };

                    let (Some(target), Some(rendered)) = (snapshot.as_ref(), rendered) else {
                        continue;
                    };
                    let written = match rendered {
                        Ok(contents) => {
                            let path = target.path.clone();
                            tokio::task::spawn_blocking(move || {
                                replace_file(&path, contents.as_bytes())
                            })
                            .await
                            .map_err(|e| e.to_string())
                            .and_then(|r| r.map_err(|e| e.to_string()))
                        }
                        Err(e) => Err(e.to_string()),
                    };
                    if let Err(e) = written {
                        warn!("Failed to write snapshot to {}: {}", target.path.display(), e);
                    }
                }
                _ = cancel.cancelled() => {
                    debug!("Usage monitor shutting down");
                    break;
                }
            }
        }
    })
}
