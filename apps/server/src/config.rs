use std::{net::SocketAddr, time::Duration};

use cambio_core::constants::{DEFAULT_DIRECTORY_TTL, DEFAULT_QUOTE_TIMEOUT};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub directory_ttl: Duration,
    pub quote_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("CAMBIO_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .expect("Invalid CAMBIO_LISTEN_ADDR");
        let db_path = std::env::var("CAMBIO_DB_PATH").unwrap_or_else(|_| "./db/cambio.db".into());
        let cors_allow = std::env::var("CAMBIO_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("CAMBIO_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let directory_ttl = std::env::var("CAMBIO_DIRECTORY_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_DIRECTORY_TTL);
        let quote_timeout = std::env::var("CAMBIO_QUOTE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_QUOTE_TIMEOUT);
        Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            directory_ttl,
            quote_timeout,
        }
    }
}
