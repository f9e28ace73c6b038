use crate::handlers::{calculation, reference};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/stamp-duty/calculations",
            post(calculation::create_calculation).get(calculation::list_calculations),
        )
        .route(
            "/stamp-duty/calculations/{reference}",
            get(calculation::get_calculation),
        )
        .route("/stamp-duty/exemptions", get(reference::list_exemptions))
        .route("/stamp-duty/schedule", get(reference::get_schedule));

    Router::new()
        .route("/health", get(reference::health))
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
