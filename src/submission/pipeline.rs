use chrono::Utc;

use crate::error::{AppError, REQUIRED_FIELDS_MESSAGE};
use crate::sheets::AppendRequest;
use crate::state::AppState;

use super::fields;
use super::timestamp;

pub const SUCCESS_MESSAGE: &str = "Data berhasil disimpan ke Google Sheets";

pub struct PipelineResult {
    pub message: &'static str,
    pub updated_range: String,
}

/// Validate a parsed submission and append it as one spreadsheet row.
///
/// Independent of how the request arrived; the route adapters only parse the
/// body and render the result.
pub async fn run(state: &AppState, raw_data: serde_json::Value) -> Result<PipelineResult, AppError> {
    let submission = fields::extract(&raw_data).map_err(|missing| {
        tracing::debug!("Rejected submission, missing fields: {missing:?}");
        AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string())
    })?;

    let warnings = fields::validate_fields(&submission);
    if !warnings.is_empty() {
        tracing::debug!("Validation warnings: {:?}", warnings);
    }

    let account = state.config.google.service_account()?;

    let row = vec![
        submission.name,
        submission.email,
        submission.phone,
        submission.message,
        timestamp::display(
            submission.timestamp.as_deref(),
            state.config.display_offset,
            Utc::now(),
        ),
    ];
    let request = AppendRequest::insert_rows(state.config.sheet_range.clone(), vec![row]);

    let response = state.sheets.append(&account, &request).await?;

    tracing::info!("Data appended successfully: {}", response.updated_range);

    Ok(PipelineResult {
        message: SUCCESS_MESSAGE,
        updated_range: response.updated_range,
    })
}
