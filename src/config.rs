//! Configuration loading and validation.
//!
//! Everything comes from the process environment (a `.env` file is honored
//! if present). The three secrets are required; operational tunables fall
//! back to defaults. Secrets are never read from files.

use std::time::Duration;

use teloxide::types::ChatId;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::ConfigError;

/// Review endpoint used unless `PRACTICUM_API_URL` overrides it.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;
const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_HTTP_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Immutable process configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the review API.
    pub practicum_token: String,
    /// Bot token from @BotFather.
    pub telegram_token: String,
    /// Chat that receives the notifications.
    pub chat_id: ChatId,
    /// Review endpoint URL.
    pub endpoint: Url,
    /// Sleep between poll cycles.
    pub poll_interval: Duration,
    pub http: HttpConfig,
}

/// Explicit HTTP timeouts; the client library defaults are not relied on.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when a required variable is
    /// absent or empty, and [`ConfigError::InvalidValue`] when a value does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let practicum_token = require("PRACTICUM_TOKEN")?;
        let telegram_token = require("TELEGRAM_TOKEN")?;

        let chat_id = require("TELEGRAM_CHAT_ID")?
            .parse::<i64>()
            .map(ChatId)
            .map_err(|err| ConfigError::InvalidValue {
                field: "TELEGRAM_CHAT_ID",
                reason: err.to_string(),
            })?;

        let endpoint = optional("PRACTICUM_API_URL")
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint).map_err(|err| ConfigError::InvalidValue {
            field: "PRACTICUM_API_URL",
            reason: err.to_string(),
        })?;

        let poll_interval = Duration::from_secs(parse_or(
            "POLL_INTERVAL_SECS",
            DEFAULT_POLL_INTERVAL_SECS,
        )?);

        let http = HttpConfig {
            timeout: Duration::from_millis(parse_or("HTTP_TIMEOUT_MS", DEFAULT_HTTP_TIMEOUT_MS)?),
            connect_timeout: Duration::from_millis(parse_or(
                "HTTP_CONNECT_TIMEOUT_MS",
                DEFAULT_HTTP_CONNECT_TIMEOUT_MS,
            )?),
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
            endpoint,
            poll_interval,
            http,
        })
    }
}

/// Install the global tracing subscriber.
///
/// Level comes from `RUST_LOG` (default `info`); `LOG_FORMAT=json` switches
/// from pretty output to JSON lines. Logs go to stderr.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match optional("LOG_FORMAT").as_deref() {
        Some("json") => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn require(field: &'static str) -> Result<String, ConfigError> {
    match std::env::var(field) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingField { field }),
    }
}

fn optional(field: &'static str) -> Option<String> {
    std::env::var(field).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or(field: &'static str, default: u64) -> Result<u64, ConfigError> {
    match optional(field) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|err: std::num::ParseIntError| ConfigError::InvalidValue {
                field,
                reason: err.to_string(),
            }),
        None => Ok(default),
    }
}
