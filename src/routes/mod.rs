//! HTTP routes

pub mod bookings;
pub mod sales;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::responses::HealthResponse;
use crate::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/records", get(sales::list).post(sales::create))
        .route("/records/sum", get(sales::sum))
        .route("/records/averages", get(sales::averages))
        .route("/records/peak-month", get(sales::peak_month))
        .route("/records/min-by-category", get(sales::min_by_category))
        .route("/bookings", get(bookings::list).post(bookings::create))
        .route("/bookings/summary", get(bookings::summary))
        .route("/bookings/tariffs", get(bookings::tariffs))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        store: state.store.backend(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
