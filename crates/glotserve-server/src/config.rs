//! Server configuration from flags and environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Language identification server.
#[derive(Parser, Debug, Clone)]
#[command(name = "glotserve", version, about)]
pub struct ServerConfig {
    /// Path to the model file, or a directory containing `model.bin`.
    #[arg(long, env = "MODEL_PATH", default_value = "./model.bin")]
    pub model_path: PathBuf,

    /// Cache directory for the fallback model download.
    #[arg(long, env = "MODEL_CACHE_DIR", default_value = "/tmp/hf_cache")]
    pub cache_dir: PathBuf,

    /// Socket address the server listens on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind_addr: SocketAddr,
}
