use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use super::SheetsError;
use crate::config::ServiceAccount;

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(client_email: &str, audience: &str) -> Self {
        let now = Utc::now();
        Self {
            iss: client_email.to_string(),
            scope: SPREADSHEETS_SCOPE.to_string(),
            aud: audience.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenError {
    error: String,
    error_description: Option<String>,
}

/// Sign a service-account assertion with the account's RSA key.
pub fn sign_assertion(account: &ServiceAccount, audience: &str) -> Result<String, SheetsError> {
    let key = EncodingKey::from_rsa_pem(account.private_key.as_bytes())
        .map_err(|e| SheetsError::Auth(format!("Invalid private key: {e}")))?;

    encode(
        &Header::new(Algorithm::RS256),
        &Claims::new(&account.client_email, audience),
        &key,
    )
    .map_err(|e| SheetsError::Auth(format!("JWT encode failed: {e}")))
}

/// Exchange a signed assertion for a short-lived access token.
pub async fn fetch_access_token(
    client: &reqwest::Client,
    token_url: &str,
    account: &ServiceAccount,
) -> Result<String, SheetsError> {
    let assertion = sign_assertion(account, token_url)?;

    let resp = client
        .post(token_url)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await
        .map_err(|e| SheetsError::Auth(format!("Token request failed: {e}")))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| SheetsError::Auth(format!("Token response unreadable: {e}")))?;

    if !status.is_success() {
        let message = match serde_json::from_str::<TokenError>(&body) {
            Ok(err) => match err.error_description {
                Some(desc) => format!("{}: {desc}", err.error),
                None => err.error,
            },
            Err(_) => body.chars().take(512).collect(),
        };
        return Err(SheetsError::Auth(format!(
            "Token endpoint returned {}: {message}",
            status.as_u16()
        )));
    }

    serde_json::from_str::<TokenResponse>(&body)
        .map(|t| t.access_token)
        .map_err(|e| SheetsError::Auth(format!("Invalid token response: {e}")))
}
