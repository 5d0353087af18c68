/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, subject response header, timeout など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderName;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SUBJECT_HEADER: &str = "x-jwt-sub";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_REQUEST_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,

    // Response header carrying the subject back to the gateway.
    pub subject_header: HeaderName,

    pub request_timeout: Duration,
    pub request_body_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            subject_header: HeaderName::from_static(DEFAULT_SUBJECT_HEADER),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            request_body_limit_bytes: DEFAULT_REQUEST_BODY_LIMIT_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (env in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = lookup("PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let subject_header = match lookup("SUBJECT_RESPONSE_HEADER") {
            Some(name) => HeaderName::from_bytes(name.trim().as_bytes())
                .map_err(|_| ConfigError::Invalid("SUBJECT_RESPONSE_HEADER"))?,
            None => HeaderName::from_static(DEFAULT_SUBJECT_HEADER),
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        };

        let request_body_limit_bytes = match lookup("REQUEST_BODY_LIMIT_BYTES") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES"))?,
            None => DEFAULT_REQUEST_BODY_LIMIT_BYTES,
        };

        Ok(Self {
            addr,
            subject_header,
            request_timeout,
            request_body_limit_bytes,
        })
    }
}
