pub mod auth;
pub mod google;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ServiceAccount;

/// How the spreadsheet interprets appended cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Values are stored as-is.
    Raw,
    /// Values are parsed as if typed into the UI, so dates and numbers are coerced.
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

/// Whether appended rows are inserted or overwrite whatever follows the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsertDataOption {
    Overwrite,
    InsertRows,
}

impl InsertDataOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertDataOption::Overwrite => "OVERWRITE",
            InsertDataOption::InsertRows => "INSERT_ROWS",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppendRequest {
    pub range: String,
    pub rows: Vec<Vec<String>>,
    pub value_input: ValueInputOption,
    pub insert_data: InsertDataOption,
}

impl AppendRequest {
    /// The only shape of append this service performs: typed-in values, new rows.
    pub fn insert_rows(range: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            range: range.into(),
            rows,
            value_input: ValueInputOption::UserEntered,
            insert_data: InsertDataOption::InsertRows,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppendResponse {
    pub updated_range: String,
}

#[derive(Debug)]
pub enum SheetsError {
    /// Signing the assertion or exchanging it for an access token failed.
    Auth(String),
    /// The request never produced an HTTP response.
    Request(String),
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
    /// The API answered 2xx with a body we could not read.
    Decode(String),
}

impl std::fmt::Display for SheetsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetsError::Auth(msg) => write!(f, "Authentication failed: {msg}"),
            SheetsError::Request(msg) => write!(f, "Request failed: {msg}"),
            SheetsError::Api { status, message } => write!(f, "API error ({status}): {message}"),
            SheetsError::Decode(msg) => write!(f, "Invalid API response: {msg}"),
        }
    }
}

impl std::error::Error for SheetsError {}

/// Append-only access to a spreadsheet. Each call authenticates with the
/// given service account and performs exactly one append.
#[async_trait]
pub trait SheetsApi: Send + Sync {
    async fn append(
        &self,
        account: &ServiceAccount,
        request: &AppendRequest,
    ) -> Result<AppendResponse, SheetsError>;
}
