use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::json;

use super::auth;
use super::{AppendRequest, AppendResponse, SheetsApi, SheetsError};
use crate::config::ServiceAccount;

pub const API_BASE: &str = "https://sheets.googleapis.com";

/// Sheets v4 client authenticating as a service account.
pub struct GoogleSheetsClient {
    client: reqwest::Client,
    token_url: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendValuesResponse {
    updates: Option<UpdateValuesResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateValuesResponse {
    updated_range: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GoogleSheetsClient {
    pub fn new() -> Result<Self, String> {
        Self::with_endpoints(auth::TOKEN_URL, API_BASE)
    }

    /// Point the client at alternative token and API hosts.
    pub fn with_endpoints(token_url: &str, api_base: &str) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            token_url: token_url.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn append_url(&self, sheet_id: &str, request: &AppendRequest) -> Result<Url, SheetsError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| SheetsError::Request(format!("Invalid API base URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| SheetsError::Request("API base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(&["v4", "spreadsheets", sheet_id, "values"])
            .push(&format!("{}:append", request.range));

        url.query_pairs_mut()
            .append_pair("valueInputOption", request.value_input.as_str())
            .append_pair("insertDataOption", request.insert_data.as_str());

        Ok(url)
    }
}

#[async_trait]
impl SheetsApi for GoogleSheetsClient {
    async fn append(
        &self,
        account: &ServiceAccount,
        request: &AppendRequest,
    ) -> Result<AppendResponse, SheetsError> {
        let token = auth::fetch_access_token(&self.client, &self.token_url, account).await?;
        let url = self.append_url(&account.sheet_id, request)?;

        tracing::debug!("Appending {} row(s) to {}", request.rows.len(), request.range);

        let resp = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&json!({ "values": &request.rows }))
            .send()
            .await
            .map_err(|e| SheetsError::Request(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SheetsError::Request(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| body.chars().take(512).collect());
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AppendValuesResponse =
            serde_json::from_str(&body).map_err(|e| SheetsError::Decode(e.to_string()))?;

        let updated_range = parsed
            .updates
            .and_then(|u| u.updated_range)
            .ok_or_else(|| SheetsError::Decode("missing updates.updatedRange".to_string()))?;

        Ok(AppendResponse { updated_range })
    }
}
