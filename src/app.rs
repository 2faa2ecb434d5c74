//! Poll loop orchestration.
//!
//! One cycle fetches the review API, validates the response, formats the
//! first homework's status, and delivers it to the chat when it differs
//! from the previous notification. The loop sleeps the configured interval
//! after every cycle, successful or not.

use chrono::Utc;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::api::HomeworkApi;
use crate::config::Config;
use crate::domain;
use crate::error::{Error, Result};
use crate::notify::Notifier;

/// Outcome of a cycle that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new status message was delivered and the cursor advanced.
    Notified,
    /// The latest status matches the last delivered message.
    NoChange,
}

/// The polling application.
///
/// Owns the poll cursor and the last delivered message; collaborators are
/// borrowed. State is mutated only between cycles, by this struct alone.
pub struct App<'a> {
    config: &'a Config,
    api: &'a dyn HomeworkApi,
    notifier: &'a dyn Notifier,
    /// Lower bound for the next fetch's `from_date`. Advanced only after a
    /// delivered notification.
    cursor: i64,
    /// Text of the most recent delivered notification.
    last_notified: String,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(config: &'a Config, api: &'a dyn HomeworkApi, notifier: &'a dyn Notifier) -> Self {
        Self {
            config,
            api,
            notifier,
            cursor: 0,
            last_notified: String::new(),
        }
    }

    /// Run the poll loop until the process is terminated.
    pub async fn run(mut self) {
        info!(
            endpoint = %self.config.endpoint,
            interval_secs = self.config.poll_interval.as_secs(),
            "Poll loop started"
        );

        loop {
            match self.cycle().await {
                Ok(CycleOutcome::Notified) => {
                    info!("Cycle completed, status change delivered");
                }
                Ok(CycleOutcome::NoChange) => {
                    debug!("No new statuses in the response");
                }
                Err(Error::Notify(err)) => {
                    // The same message is recomputed next cycle, so a failed
                    // delivery needs no escalation beyond the log.
                    debug!(error = %err, "Status message not delivered, will retry next cycle");
                }
                Err(err) => {
                    error!(error = %err, "Cycle failed");
                    self.report(&err).await;
                }
            }

            // Runs regardless of the cycle outcome; this is the only rate
            // limit on the review API.
            sleep(self.config.poll_interval).await;
        }
    }

    /// Fetch, validate, format, and (if changed) deliver one status update.
    ///
    /// # Errors
    ///
    /// Propagates fetch, protocol, and delivery errors; the caller decides
    /// which of them reach the chat.
    pub async fn cycle(&mut self) -> Result<CycleOutcome> {
        let response = self.api.get_homework_statuses(self.cursor).await?;
        let homeworks = domain::check_response(&response)?;
        let message = domain::parse_status(&homeworks[0])?;

        if message == self.last_notified {
            return Ok(CycleOutcome::NoChange);
        }

        self.notifier.send(&message).await?;

        self.cursor = Utc::now().timestamp();
        self.last_notified = message;
        Ok(CycleOutcome::Notified)
    }

    /// Best-effort error report to the chat. A failed report is dropped.
    async fn report(&self, err: &Error) {
        let text = format!("Сбой в работе программы: {err}");
        if let Err(send_err) = self.notifier.send(&text).await {
            debug!(error = %send_err, "Error report not delivered");
        }
    }

    /// Current poll cursor (Unix seconds).
    #[must_use]
    pub const fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Text of the last delivered notification; empty before the first one.
    #[must_use]
    pub fn last_notified(&self) -> &str {
        &self.last_notified
    }
}
