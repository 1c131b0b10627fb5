//! Persisted local-cache tier.
//!
//! A single small string (the base URL) written outside the request path, so
//! a value learned in one process run survives into the next. This is
//! independent of the in-memory resolution cache: writing here does not
//! change what `resolve()` returns until the cache is invalidated.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default location of the persisted base URL, under the platform config
/// directory (e.g. `~/.config/swarm-gcs/server_url.txt` on Linux).
///
/// Returns `None` when the platform has no config directory, which disables
/// the local-cache tier.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("swarm-gcs").join("server_url.txt"))
}

/// Read the persisted base URL, if any.
///
/// A missing file, unreadable contents, or a blank value all count as "tier
/// not available"; validation of the value itself is the resolver's job.
pub(crate) async fn read(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => {
            let value = contents.trim();
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }
        Err(e) => {
            tracing::debug!("endpoint store not readable at {}: {}", path.display(), e);
            None
        }
    }
}

/// Persist a base URL for future process runs.
///
/// Creates parent directories as needed.
pub(crate) async fn write(path: &Path, url: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, url.trim()).await?;
    tracing::debug!("persisted endpoint {} to {}", url.trim(), path.display());
    Ok(())
}
