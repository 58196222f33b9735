//! Fallback fetch of the canonical GlotLID model from the Hugging Face Hub.
//!
//! The artifact lands in a cache directory laid out like the hub client's
//! (`models--{org}--{name}`); a file already present there short-circuits the
//! network entirely. Downloads stream to a `.part` file and are renamed into
//! place, so an interrupted transfer is never mistaken for a complete model.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::ModelError;
use crate::locate::MODEL_FILE_NAME;

/// Hub repository holding the pretrained GlotLID model.
pub const MODEL_REPO: &str = "cis-lmu/glotlid";

/// Download URL for a file in a hub repository.
pub fn artifact_url(repo: &str, file: &str) -> String {
    format!("https://huggingface.co/{repo}/resolve/main/{file}")
}

/// Cache location for a hub file: `<cache>/models--{org}--{name}/<file>`.
pub fn cached_model_path(cache_dir: &Path, repo: &str, file: &str) -> PathBuf {
    let repo_dir = format!("models--{}", repo.replace('/', "--"));
    cache_dir.join(repo_dir).join(file)
}

/// Fetch the canonical model into `cache_dir`, returning the local path.
///
/// A cached copy is returned without touching the network.
pub async fn fetch_model(cache_dir: &Path) -> Result<PathBuf, ModelError> {
    fetch_file(cache_dir, MODEL_REPO, MODEL_FILE_NAME).await
}

async fn fetch_file(cache_dir: &Path, repo: &str, file: &str) -> Result<PathBuf, ModelError> {
    let target = cached_model_path(cache_dir, repo, file);
    if target.is_file() {
        info!(path = %target.display(), "model already cached");
        return Ok(target);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).await?;
    }

    let url = artifact_url(repo, file);
    info!(url = %url, "downloading model");
    let client = reqwest::Client::new();
    let mut resp = client.get(&url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ModelError::Server {
            status: status.as_u16(),
            body,
        });
    }

    // Stream into a partial file, then rename: a crash mid-download leaves
    // only a .part behind.
    let partial = target.with_file_name(format!("{file}.part"));
    let mut out = fs::File::create(&partial).await?;
    let mut written: u64 = 0;
    while let Some(chunk) = resp.chunk().await? {
        out.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    out.flush().await?;
    drop(out);
    fs::rename(&partial, &target).await?;

    info!(
        path = %target.display(),
        size_mb = written / (1024 * 1024),
        "model downloaded"
    );
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_url_for_hub_file() {
        assert_eq!(
            artifact_url("cis-lmu/glotlid", "model.bin"),
            "https://huggingface.co/cis-lmu/glotlid/resolve/main/model.bin"
        );
    }

    #[test]
    fn cache_path_flattens_repo_name() {
        let path = cached_model_path(Path::new("/tmp/hf_cache"), "cis-lmu/glotlid", "model.bin");
        assert_eq!(
            path,
            Path::new("/tmp/hf_cache/models--cis-lmu--glotlid/model.bin")
        );
    }

    #[tokio::test]
    async fn cached_file_short_circuits_the_network() {
        let dir = tempfile::tempdir().unwrap();
        let target = cached_model_path(dir.path(), MODEL_REPO, MODEL_FILE_NAME);
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, b"stub model bytes").unwrap();

        // No server is running, so anything but a cache hit would error.
        let fetched = fetch_model(dir.path()).await.unwrap();
        assert_eq!(fetched, target);
        assert_eq!(std::fs::read(&fetched).unwrap(), b"stub model bytes");
    }
}
