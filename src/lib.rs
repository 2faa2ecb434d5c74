//! hwwatch - homework review status watcher.
//!
//! Polls the Practicum homework-review API on a fixed interval and relays
//! status changes for the latest submission to a Telegram chat. The whole
//! program is one sequential loop: fetch, validate, format, notify, sleep.
//!
//! # Modules
//!
//! - [`config`] - environment-based configuration and logging setup
//! - [`error`] - error taxonomy, one enum per failure category
//! - [`domain`] - status codes, verdicts, response validation and formatting
//! - [`api`] - review API client behind the [`api::HomeworkApi`] trait
//! - [`notify`] - Telegram delivery behind the [`notify::Notifier`] trait
//! - [`app`] - the poll loop
//!
//! # Example
//!
//! ```no_run
//! use hwwatch::api::PracticumClient;
//! use hwwatch::app::App;
//! use hwwatch::config::Config;
//! use hwwatch::notify::TelegramNotifier;
//!
//! # async fn run() -> Result<(), hwwatch::error::Error> {
//! let config = Config::from_env()?;
//! let client = PracticumClient::new(&config);
//! let notifier = TelegramNotifier::new(&config.telegram_token, config.chat_id);
//!
//! App::new(&config, &client, &notifier).run().await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod notify;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
