use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use np_core::Report;

use crate::error::ApiError;
use crate::report::generate_report;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub company_name: String,
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    1
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Report>, ApiError> {
    let report = generate_report(
        state.source.as_ref(),
        &state.analyzer,
        &request.company_name,
        request.days,
    )
    .await?;
    Ok(Json(report))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
