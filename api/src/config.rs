use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::exchangerate::DEFAULT_BASE_URL;
use crate::domain::entities::ApiKey;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    /// Upstream account key; `None` when unset or blank
    pub exchange_api_key: Option<ApiKey>,
    /// Upstream base URL, without the key segment
    pub exchange_api_url: String,
    /// Bound on every outbound call
    pub upstream_timeout: Duration,
    pub port: u16,
    /// Directory holding the UI entry page and its assets
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            exchange_api_key: env::var("EXCHANGE_API_KEY")
                .ok()
                .and_then(|raw| ApiKey::parse(&raw)),
            exchange_api_url: env::var("EXCHANGE_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            upstream_timeout: parse_timeout(env::var("UPSTREAM_TIMEOUT_SECS").ok().as_deref()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_static_dir()),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
