//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "weather-image-api")]
#[command(about = "Weather station image upload API")]
pub struct Config {
    /// Listen address
    #[arg(short, long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen: String,

    /// Redis connection URL for the record store
    #[arg(long, env = "REDIS_URL", default_value = "redis://localhost:6379/0")]
    pub redis_url: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in megabytes
    #[arg(long, env = "MAX_UPLOAD_MB", default_value = "20")]
    pub max_upload_mb: usize,

    /// Append a random suffix to record keys so same-second uploads from
    /// one station are all kept
    #[arg(long, env = "UNIQUE_KEYS")]
    pub unique_keys: bool,

    /// Keep records in process memory instead of Redis
    #[arg(long, env = "MEMORY_STORE")]
    pub memory_store: bool,

    /// Number of tokio worker threads (default: number of CPU cores)
    #[arg(long, env = "TOKIO_WORKER_THREADS")]
    pub worker_threads: Option<usize>,
}

impl Config {
    /// Tracing level, falling back to INFO for unknown names.
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listen.parse()?)
    }
}
