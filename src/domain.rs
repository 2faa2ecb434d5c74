//! Homework review statuses and response handling.
//!
//! [`check_response`] validates the shape of a raw API response and extracts
//! the homework list; [`parse_status`] turns a single homework record into
//! the message text delivered to the chat.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::ProtocolError;

/// Review status of a homework submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Every status the review API may report.
    pub const ALL: [Self; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Human-readable verdict for this status.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(ProtocolError::UnknownStatus {
                status: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate the overall response shape and extract the homework list.
///
/// The records themselves are not inspected here; [`parse_status`] decodes
/// one record when the loop needs it.
///
/// # Errors
///
/// Returns a [`ProtocolError`] when the response is not an object, has no
/// `homeworks` key, the value is not an array, or the array is empty.
pub fn check_response(response: &Value) -> Result<&[Value], ProtocolError> {
    let object = response.as_object().ok_or(ProtocolError::NotAnObject {
        kind: json_kind(response),
    })?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ProtocolError::MissingKey { key: "homeworks" })?;

    let homeworks = homeworks.as_array().ok_or(ProtocolError::NotAnArray)?;

    if homeworks.is_empty() {
        return Err(ProtocolError::EmptyHomeworks);
    }

    Ok(homeworks)
}

/// Build the notification text for a single homework record.
///
/// # Errors
///
/// Returns a [`ProtocolError`] when `homework_name` or `status` is missing,
/// or the status is not one of the known codes.
pub fn parse_status(record: &Value) -> Result<String, ProtocolError> {
    let name = field_str(record, "homework_name")?;
    let status: HomeworkStatus = field_str(record, "status")?.parse()?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}

fn field_str<'a>(record: &'a Value, key: &'static str) -> Result<&'a str, ProtocolError> {
    record
        .get(key)
        .and_then(Value::as_str)
        .ok_or(ProtocolError::MissingKey { key })
}

/// Name of a JSON value's type, for type-mismatch errors.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
