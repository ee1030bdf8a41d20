//! Calculator submission endpoint.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use estimate_core::{
    CalculationForm, CalculationKind, CalculationRequest, CalculationResult, HistoryRecord,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::{identity_from_headers, AppState};

/// Form body for a calculation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    #[serde(flatten)]
    pub form: CalculationForm,
    /// Record the calculation in history.
    #[serde(default = "default_save")]
    pub save: bool,
}

fn default_save() -> bool {
    true
}

/// Estimate plus what happened to its history record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub calculation_type: CalculationKind,
    pub results: CalculationResult,
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<HistoryRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_error: Option<String>,
}

/// Validate, estimate, and optionally record a calculation.
pub async fn calculate_api(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>> {
    let request = CalculationRequest::try_from(body.form)?;
    let pipeline = state.pipeline_for(identity_from_headers(&headers));

    if !body.save {
        let results = pipeline.estimate(&request).await?;
        return Ok(Json(CalculateResponse {
            calculation_type: request.kind(),
            results,
            saved: false,
            record: None,
            save_error: None,
        }));
    }

    let outcome = pipeline.calculate_and_record(&request).await?;
    let (record, save_error) = match outcome.saved {
        Ok(record) => (Some(record), None),
        Err(err) => (None, Some(err.to_string())),
    };

    Ok(Json(CalculateResponse {
        calculation_type: request.kind(),
        results: outcome.result,
        saved: record.is_some(),
        record,
        save_error,
    }))
}
