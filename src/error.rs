//! Error types for the crate.
//!
//! Each failure category gets its own enum; the top-level [`Error`] unites
//! them so the poll loop can match on category to decide whether a failure
//! is reported to the chat or only logged.

use thiserror::Error;

/// Configuration-related errors with structured variants.
///
/// These are the only fatal errors: they occur before the poll loop starts
/// and the process refuses to run while they stand.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors raised while fetching from the review API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure: DNS, connection, timeout.
    #[error("request to the review API failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with something other than 200 OK.
    #[error("endpoint {url} returned status {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not valid JSON.
    #[error("failed to decode the review API response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Shape violations in an otherwise well-formed JSON response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("expected a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },

    #[error("response has no \"{key}\" key")]
    MissingKey { key: &'static str },

    #[error("\"homeworks\" is not an array")]
    NotAnArray,

    #[error("the homeworks list is empty")]
    EmptyHomeworks,

    #[error("unknown homework status: {status}")]
    UnknownStatus { status: String },
}

/// Failure to deliver a message to the chat.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("failed to send Telegram message: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

pub type Result<T> = std::result::Result<T, Error>;
