use std::net::IpAddr;

use chrono::FixedOffset;

pub const SHEET_ID_VAR: &str = "GOOGLE_SHEET_ID";
pub const SERVICE_ACCOUNT_EMAIL_VAR: &str = "GOOGLE_SERVICE_ACCOUNT_EMAIL";
pub const PRIVATE_KEY_VAR: &str = "GOOGLE_PRIVATE_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub sheet_range: String,
    pub display_offset: FixedOffset,
    pub google: GoogleConfig,
}

/// Spreadsheet secrets as found in the environment. Any of them may be
/// absent; presence is checked per request by [`GoogleConfig::service_account`].
#[derive(Debug, Clone, Default)]
pub struct GoogleConfig {
    pub sheet_id: Option<String>,
    pub client_email: Option<String>,
    pub private_key: Option<String>,
}

/// A complete set of credentials for one append.
#[derive(Debug, Clone)]
pub struct ServiceAccount {
    pub sheet_id: String,
    pub client_email: String,
    pub private_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MissingConfig {
    pub missing: Vec<&'static str>,
}

impl std::fmt::Display for MissingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} must be set", self.missing.join(", "))
    }
}

impl GoogleConfig {
    pub fn from_env() -> Self {
        Self {
            sheet_id: env_non_empty(SHEET_ID_VAR),
            client_email: env_non_empty(SERVICE_ACCOUNT_EMAIL_VAR),
            private_key: env_non_empty(PRIVATE_KEY_VAR).map(|k| unescape_newlines(&k)),
        }
    }

    pub fn service_account(&self) -> Result<ServiceAccount, MissingConfig> {
        let mut missing = Vec::new();
        if self.sheet_id.is_none() {
            missing.push(SHEET_ID_VAR);
        }
        if self.client_email.is_none() {
            missing.push(SERVICE_ACCOUNT_EMAIL_VAR);
        }
        if self.private_key.is_none() {
            missing.push(PRIVATE_KEY_VAR);
        }

        match (&self.sheet_id, &self.client_email, &self.private_key) {
            (Some(sheet_id), Some(client_email), Some(private_key)) => Ok(ServiceAccount {
                sheet_id: sheet_id.clone(),
                client_email: client_email.clone(),
                private_key: private_key.clone(),
            }),
            _ => Err(MissingConfig { missing }),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("FORMSHEET_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMSHEET_HOST: {e}"))?;

        let port: u16 = env_or("FORMSHEET_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FORMSHEET_PORT: {e}"))?;

        let max_body_size: usize = env_or("FORMSHEET_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid FORMSHEET_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FORMSHEET_LOG_LEVEL", "info");

        let sheet_range = env_or("FORMSHEET_SHEET_RANGE", "Sheet1!A:E");
        if sheet_range.trim().is_empty() {
            return Err("Invalid FORMSHEET_SHEET_RANGE: must not be empty".to_string());
        }

        let display_offset: FixedOffset = env_or("FORMSHEET_DISPLAY_OFFSET", "+00:00")
            .parse()
            .map_err(|e| format!("Invalid FORMSHEET_DISPLAY_OFFSET: {e}"))?;

        Ok(Config {
            host,
            port,
            max_body_size,
            log_level,
            sheet_range,
            display_offset,
            google: GoogleConfig::from_env(),
        })
    }
}

/// Private keys pasted into a single-line env var carry literal `\n` sequences.
pub fn unescape_newlines(key: &str) -> String {
    key.replace("\\n", "\n")
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
