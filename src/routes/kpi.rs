// src/routes/kpi.rs
//
// JSON mirror of the live-outputs section. Same fixed query set, same
// cache, no parameters to bind anywhere.

use axum::{extract::State, Json};

use super::internal_error;
use crate::models::{KpiSummary, PaymentMethodCount, TopCustomer, VehicleRating};
use crate::{queries, AppState};

pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<KpiSummary>, (axum::http::StatusCode, String)> {
    let summary = queries::kpi_summary(&state.pool, &state.cache)
        .await
        .map_err(internal_error)?;
    Ok(Json(summary))
}

pub async fn payment_methods(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentMethodCount>>, (axum::http::StatusCode, String)> {
    let rows = queries::payment_methods(&state.pool, &state.cache)
        .await
        .map_err(internal_error)?;
    Ok(Json(rows))
}

pub async fn top_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopCustomer>>, (axum::http::StatusCode, String)> {
    let rows = queries::top_customers(&state.pool, &state.cache)
        .await
        .map_err(internal_error)?;
    Ok(Json(rows))
}

pub async fn vehicle_ratings(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleRating>>, (axum::http::StatusCode, String)> {
    let rows = queries::vehicle_ratings(&state.pool, &state.cache)
        .await
        .map_err(internal_error)?;
    Ok(Json(rows))
}
