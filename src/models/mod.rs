// src/models/mod.rs
//
// Row shapes of the KPI views plus the DTOs the endpoints return. Every
// view row derives Deserialize as well so the query cache can hand rows
// back without re-hitting the pool.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ───────────────────────────────────────
// View rows: single-value KPIs
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct TotalSuccessfulBookings {
    pub total_successful_bookings: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct CustomerCancellations {
    pub customer_cancellations: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct DriverCancellations {
    pub driver_cancellations: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct TotalSuccessfulRevenue {
    pub total_successful_revenue: i64,
}

// ───────────────────────────────────────
// View rows: tabular KPIs
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct PaymentMethodCount {
    pub payment_method: String,
    pub total_transactions: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct TopCustomer {
    pub customer_id: String,
    pub total_rides: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct VehicleRating {
    pub vehicle_type: String,
    pub avg_customer_rating: f64,
    pub avg_driver_rating: f64,
}

// ───────────────────────────────────────
// DTOs for endpoints
// ───────────────────────────────────────
#[derive(Debug, Serialize)]
pub struct KpiSummary {
    pub successful_bookings: i64,
    pub customer_cancellations: i64,
    pub driver_cancellations: i64,
    pub total_revenue: i64,
    /// `total_revenue` with rupee prefix and thousands separators.
    pub total_revenue_display: String,
}
