//! Application state.
//!
//! Shared state for all request handlers: the current config snapshot and the
//! file it came from.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::{ConfigError, SiteConfig, load_config};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Current config. Requests clone the `Arc` and never hold the lock while rendering.
    config: RwLock<Arc<SiteConfig>>,
    /// File the config was loaded from (`None` disables reload).
    config_path: Option<PathBuf>,
}

impl AppState {
    pub(crate) fn new(config: SiteConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config: RwLock::new(Arc::new(config)),
            config_path,
        }
    }

    /// Snapshot of the current config.
    pub(crate) async fn config(&self) -> Arc<SiteConfig> {
        Arc::clone(&*self.config.read().await)
    }

    /// Re-read the config file and swap it in.
    ///
    /// On failure the previous config stays active. The listener is already
    /// bound, so a changed `server_ip` only takes effect after a restart.
    pub(crate) async fn reload(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.config_path else {
            tracing::debug!("No config file to reload");
            return Ok(());
        };
        let fresh = load_config(path)?;

        let mut current = self.config.write().await;
        if fresh.server_ip != current.server_ip {
            tracing::warn!(
                old = %current.server_ip,
                new = %fresh.server_ip,
                "server_ip changed; restart to bind the new address"
            );
        }
        *current = Arc::new(fresh);
        tracing::info!(path = %path.display(), "Config reloaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[tokio::test]
    async fn reload_swaps_config() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "articles_per_page = 3\n");
        let state = AppState::new(load_config(&path).unwrap(), Some(path.clone()));
        assert_eq!(state.config().await.articles_per_page, 3);

        fs::write(&path, "articles_per_page = 7\nread_more_text = \"More\"\n").unwrap();
        state.reload().await.unwrap();

        let config = state.config().await;
        assert_eq!(config.articles_per_page, 7);
        assert_eq!(config.read_more_text, "More");
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_config() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "articles_per_page = 3\n");
        let state = AppState::new(load_config(&path).unwrap(), Some(path.clone()));

        fs::write(&path, "articles_per_page = 0\n").unwrap();
        assert!(matches!(
            state.reload().await,
            Err(ConfigError::Validation(_))
        ));
        assert_eq!(state.config().await.articles_per_page, 3);
    }

    #[tokio::test]
    async fn snapshot_survives_reload() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "read_more_text = \"Old\"\n");
        let state = AppState::new(load_config(&path).unwrap(), Some(path.clone()));

        let before = state.config().await;
        fs::write(&path, "read_more_text = \"New\"\n").unwrap();
        state.reload().await.unwrap();

        assert_eq!(before.read_more_text, "Old");
        assert_eq!(state.config().await.read_more_text, "New");
    }

    #[tokio::test]
    async fn reload_without_file_is_noop() {
        let state = AppState::new(SiteConfig::default(), None);
        state.reload().await.unwrap();
        assert_eq!(*state.config().await, SiteConfig::default());
    }
}
