//! Calculation history endpoint.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use estimate_core::HistoryRecord;
use serde::Serialize;

use crate::error::Result;
use crate::state::{identity_from_headers, AppState};

/// History of the calling user.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub records: Vec<HistoryRecord>,
}

/// List the caller's calculations, newest first.
pub async fn history_api(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<HistoryResponse>> {
    let pipeline = state.pipeline_for(identity_from_headers(&headers));
    let records = pipeline.history().await?;
    Ok(Json(HistoryResponse { records }))
}
