//! Prefetch the model artifact into the local cache, for container builds.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use glotserve_model::fetch_model;

/// Download the language-identification model into the local cache.
#[derive(Parser, Debug)]
#[command(name = "fetch-model", version, about)]
struct FetchArgs {
    /// Cache directory the model is downloaded into.
    #[arg(long, env = "MODEL_CACHE_DIR", default_value = "/tmp/hf_cache")]
    cache_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = FetchArgs::parse();
    let path = fetch_model(&args.cache_dir).await?;

    let size_mb = std::fs::metadata(&path)?.len() as f64 / (1024.0 * 1024.0);
    info!(path = %path.display(), size_mb = format!("{size_mb:.1}"), "model ready");
    Ok(())
}
