//! Model provisioning: local resolution, hub fetch, and the fastText backend.

use std::path::{Path, PathBuf};

use tracing::warn;

mod error;
pub use error::ModelError;

pub mod fetch;
pub mod locate;

pub use fetch::{MODEL_REPO, fetch_model};
pub use locate::{MODEL_FILE_NAME, resolve_model_path};

#[cfg(feature = "fasttext")]
mod detector;
#[cfg(feature = "fasttext")]
pub use detector::FastTextDetector;

/// Resolve a usable model file, fetching the canonical artifact when the
/// configured location holds nothing.
pub async fn ensure_model_file(configured: &Path, cache_dir: &Path) -> Result<PathBuf, ModelError> {
    if let Some(path) = resolve_model_path(configured) {
        return Ok(path);
    }
    warn!(
        configured = %configured.display(),
        "no model file at configured path, fetching from the hub"
    );
    fetch_model(cache_dir).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_file_wins_over_cache() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join(MODEL_FILE_NAME);
        std::fs::write(&local, b"local model").unwrap();

        // Cache directory deliberately empty: it must not be consulted.
        let cache = tempfile::tempdir().unwrap();
        let resolved = ensure_model_file(&local, cache.path()).await.unwrap();
        assert_eq!(resolved, local);
    }

    #[tokio::test]
    async fn missing_local_falls_back_to_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();
        let cached = fetch::cached_model_path(cache.path(), MODEL_REPO, MODEL_FILE_NAME);
        std::fs::create_dir_all(cached.parent().unwrap()).unwrap();
        std::fs::write(&cached, b"cached model").unwrap();

        let resolved = ensure_model_file(&dir.path().join("absent"), cache.path())
            .await
            .unwrap();
        assert_eq!(resolved, cached);
    }
}
