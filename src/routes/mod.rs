use axum::http::StatusCode;

pub mod health;
pub mod kpi;
pub mod pages;

// Common error mapper
pub fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {e}"))
}
