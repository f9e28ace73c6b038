use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::{CalculateRequest, CalculationResponse, HistoryResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use lands_types::fee::FeeCalculationResult;
use lands_types::ids::ReferenceNumber;

pub async fn create_calculation(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CalculateRequest>,
) -> Result<Json<CalculationResponse>, AppError> {
    let (request, exemption_id) = payload.into_parts()?;

    // Pure computation, no lock held
    let result = state
        .engine
        .calculate_with_exemption_id(&request, exemption_id.as_deref())?;

    let evicted = state.history.write().await.record(result.clone());
    if let Some(old) = evicted {
        tracing::debug!(reference = %old.reference_number(), "Evicted oldest calculation");
    }

    Ok(Json(CalculationResponse::from(result)))
}

pub async fn list_calculations(State(state): State<AppState>) -> Json<HistoryResponse> {
    let history = state.history.read().await;
    Json(HistoryResponse::from(&*history))
}

pub async fn get_calculation(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<FeeCalculationResult>, AppError> {
    let reference: ReferenceNumber = reference.parse()?;

    let history = state.history.read().await;
    history
        .find(&reference)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Calculation {}", reference)))
}
