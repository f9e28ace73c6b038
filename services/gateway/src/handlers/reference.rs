use crate::models::HealthResponse;
use crate::state::AppState;
use axum::{Json, extract::State};
use lands_types::exemption::ExemptionRule;
use lands_types::fee::FeeSchedule;

pub async fn list_exemptions(State(state): State<AppState>) -> Json<Vec<ExemptionRule>> {
    Json(state.engine.exemptions().to_vec())
}

pub async fn get_schedule(State(state): State<AppState>) -> Json<FeeSchedule> {
    Json(state.engine.schedule().clone())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: fee_engine::SERVICE_VERSION,
    })
}
