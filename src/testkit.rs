//! Shared test doubles available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use teloxide::types::ChatId;
use url::Url;

use crate::api::HomeworkApi;
use crate::config::{Config, HttpConfig};
use crate::error::{FetchError, NotifyError};
use crate::notify::Notifier;

/// Canonical config for tests; `endpoint` is the only knob tests care about.
pub fn test_config(endpoint: &str) -> Config {
    Config {
        practicum_token: "test-practicum-token".to_string(),
        telegram_token: "test-bot-token".to_string(),
        chat_id: ChatId(1),
        endpoint: Url::parse(endpoint).expect("test endpoint must be a valid URL"),
        poll_interval: Duration::from_secs(600),
        http: HttpConfig {
            timeout: Duration::from_millis(500),
            connect_timeout: Duration::from_millis(500),
        },
    }
}

/// A response holding a single homework record.
pub fn homework_response(name: &str, status: &str) -> Value {
    json!({
        "homeworks": [{"homework_name": name, "status": status}],
        "current_date": 1_700_000_000,
    })
}

/// Scripted [`HomeworkApi`]: pops pre-seeded results call by call and falls
/// back to a fixed response once the script is exhausted.
pub struct ScriptedApi {
    script: Mutex<VecDeque<Result<Value, FetchError>>>,
    fallback: Value,
    from_dates: Mutex<Vec<i64>>,
}

impl ScriptedApi {
    /// Create an API whose every call returns `fallback`.
    pub fn new(fallback: Value) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback,
            from_dates: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response ahead of the fallback.
    pub fn push_response(&self, response: Value) {
        self.script.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a fetch failure ahead of the fallback.
    pub fn push_error(&self, err: FetchError) {
        self.script.lock().unwrap().push_back(Err(err));
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.from_dates.lock().unwrap().len()
    }

    /// `from_date` arguments observed so far, in call order.
    pub fn from_dates(&self) -> Vec<i64> {
        self.from_dates.lock().unwrap().clone()
    }
}

#[async_trait]
impl HomeworkApi for ScriptedApi {
    async fn get_homework_statuses(&self, from_date: i64) -> Result<Value, FetchError> {
        self.from_dates.lock().unwrap().push(from_date);
        match self.script.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(self.fallback.clone()),
        }
    }
}

/// A fetch failure that is easy to construct in tests.
pub fn bad_status_error() -> FetchError {
    FetchError::BadStatus {
        url: "http://localhost/".to_string(),
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Recording [`Notifier`]: stores every delivered text, optionally failing
/// the first `n` sends.
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
    failures_remaining: AtomicUsize,
}

impl RecordingNotifier {
    /// A notifier that accepts every send.
    pub fn new() -> Self {
        Self::failing_times(0)
    }

    /// A notifier whose first `n` sends fail with a delivery error.
    pub fn failing_times(n: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failures_remaining: AtomicUsize::new(n),
        }
    }

    /// Texts delivered so far, in send order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            let cause = std::io::Error::other("scripted delivery failure");
            return Err(NotifyError::Telegram(cause.into()));
        }

        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
