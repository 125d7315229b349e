//! Background cleanup of aged session artifacts

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use jiff::Timestamp;
use tokio_util::sync::CancellationToken;

use crate::{ArtifactStore, session_stamp};

/// Bounds applied to stored session audio
///
/// Only timestamp-named session files participate; fixed-name artifacts
/// such as the seeded sample are never deleted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetentionPolicy {
    /// Keep at most this many session files, newest first
    pub max_files: Option<u64>,
    /// Delete session files older than this
    pub max_age: Option<Duration>,
}

/// Delete session artifacts that fall outside the policy bounds
///
/// Age is derived from the millisecond stamp embedded in the filename, so
/// no metadata calls are needed. Files that vanish mid-sweep are ignored.
///
/// Returns the number of files deleted.
///
/// # Errors
///
/// Returns an error only when the directory itself cannot be listed; a
/// missing directory counts as empty.
pub async fn sweep(dir: &Path, policy: &RetentionPolicy) -> std::io::Result<usize> {
    let mut reader = match tokio::fs::read_dir(dir).await {
        Ok(reader) => reader,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let Some(stamp) = session_stamp(name) else { continue };

        entries.push((stamp, entry.path()));
    }

    // Newest first, so the count bound keeps the most recent artifacts
    entries.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    let mut expired = Vec::new();

    if let Some(max_files) = policy.max_files {
        let keep = usize::try_from(max_files).unwrap_or(usize::MAX);
        if entries.len() > keep {
            expired.extend(entries.split_off(keep));
        }
    }

    if let Some(max_age) = policy.max_age {
        let now = Timestamp::now().as_millisecond();
        let cutoff = now.saturating_sub(i64::try_from(max_age.as_millis()).unwrap_or(i64::MAX));
        let split = entries.partition_point(|(stamp, _)| *stamp >= cutoff);
        expired.extend(entries.split_off(split));
    }

    let mut deleted = 0;

    for (_, path) in expired {
        match tokio::fs::remove_file(&path).await {
            Ok(()) => deleted += 1,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "failed to delete expired artifact");
            }
        }
    }

    Ok(deleted)
}

/// Periodically apply the retention policy until shutdown
///
/// Sweep failures are logged and never stop the loop.
pub async fn run_sweeper(
    store: Arc<ArtifactStore>,
    policy: RetentionPolicy,
    period: Duration,
    shutdown: CancellationToken,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            () = shutdown.cancelled() => break,
            _ = ticker.tick() => {
                match sweep(store.audio_dir(), &policy).await {
                    Ok(0) => {}
                    Ok(deleted) => tracing::info!(deleted, "retention sweep removed expired audio"),
                    Err(e) => tracing::warn!(error = %e, "retention sweep failed"),
                }
            }
        }
    }
}
