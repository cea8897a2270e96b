// src/queries.rs
//
// The fixed, read-only query set. All KPI logic lives in the database as
// views (see sql/views.sql); this module only knows which view to select
// from and what the rows look like. Nothing here writes.

use sqlx::{Pool, Postgres};

use crate::cache::QueryCache;
use crate::db::run_query;
use crate::format;
use crate::models::{
    CustomerCancellations, DriverCancellations, KpiSummary, PaymentMethodCount, TopCustomer,
    TotalSuccessfulBookings, TotalSuccessfulRevenue, VehicleRating,
};

pub const SELECT_TOTAL_SUCCESSFUL_BOOKINGS: &str = "SELECT * FROM vw_total_successful_bookings";
pub const SELECT_CUSTOMER_CANCELLATIONS: &str = "SELECT * FROM vw_customer_cancellations";
pub const SELECT_DRIVER_CANCELLATIONS: &str = "SELECT * FROM vw_driver_cancellations";
pub const SELECT_TOTAL_SUCCESSFUL_REVENUE: &str = "SELECT * FROM vw_total_successful_revenue";
pub const SELECT_PAYMENT_METHOD_DISTRIBUTION: &str =
    "SELECT * FROM vw_payment_method_distribution";
pub const SELECT_TOP_5_CUSTOMERS: &str = "SELECT * FROM vw_top_5_customers";
pub const SELECT_AVG_RATINGS_BY_VEHICLE: &str = "SELECT * FROM vw_avg_ratings_by_vehicle";

/// One documented KPI view, as shown on the "SQL Business Logic" section.
/// `ddl` is the same text shipped in sql/views.sql.
pub struct ViewDefinition {
    pub view: &'static str,
    pub title: &'static str,
    pub query: &'static str,
    pub ddl: &'static str,
}

pub const VIEW_DEFINITIONS: &[ViewDefinition] = &[
    ViewDefinition {
        view: "vw_total_successful_bookings",
        title: "KPI 1: Total Successful Bookings",
        query: SELECT_TOTAL_SUCCESSFUL_BOOKINGS,
        ddl: "CREATE OR REPLACE VIEW vw_total_successful_bookings AS\n\
              SELECT COUNT(*) AS total_successful_bookings\n\
              FROM rides\n\
              WHERE UPPER(TRIM(\"Booking_Status\")) = 'SUCCESS';",
    },
    ViewDefinition {
        view: "vw_customer_cancellations",
        title: "KPI 2: Customer Cancellations",
        query: SELECT_CUSTOMER_CANCELLATIONS,
        ddl: "CREATE OR REPLACE VIEW vw_customer_cancellations AS\n\
              SELECT COUNT(*) AS customer_cancellations\n\
              FROM rides\n\
              WHERE UPPER(TRIM(\"Booking_Status\")) = 'CANCELED BY CUSTOMER';",
    },
    ViewDefinition {
        view: "vw_driver_cancellations",
        title: "KPI 3: Driver Cancellations",
        query: SELECT_DRIVER_CANCELLATIONS,
        ddl: "CREATE OR REPLACE VIEW vw_driver_cancellations AS\n\
              SELECT COUNT(*) AS driver_cancellations\n\
              FROM rides\n\
              WHERE UPPER(TRIM(\"Booking_Status\")) = 'CANCELED BY DRIVER';",
    },
    ViewDefinition {
        view: "vw_total_successful_revenue",
        title: "KPI 4: Total Revenue (Successful Rides)",
        query: SELECT_TOTAL_SUCCESSFUL_REVENUE,
        ddl: "CREATE OR REPLACE VIEW vw_total_successful_revenue AS\n\
              SELECT COALESCE(SUM(\"Booking_Value\"), 0)::bigint AS total_successful_revenue\n\
              FROM rides\n\
              WHERE UPPER(TRIM(\"Booking_Status\")) = 'SUCCESS';",
    },
    ViewDefinition {
        view: "vw_payment_method_distribution",
        title: "KPI 5: Revenue by Payment Method",
        query: SELECT_PAYMENT_METHOD_DISTRIBUTION,
        ddl: "CREATE OR REPLACE VIEW vw_payment_method_distribution AS\n\
              SELECT\n\
                  \"Payment_Method\" AS payment_method,\n\
                  COUNT(*) AS total_transactions\n\
              FROM rides\n\
              GROUP BY \"Payment_Method\";",
    },
    ViewDefinition {
        view: "vw_top_5_customers",
        title: "KPI 6: Top 5 Customers by Rides",
        query: SELECT_TOP_5_CUSTOMERS,
        ddl: "CREATE OR REPLACE VIEW vw_top_5_customers AS\n\
              SELECT\n\
                  \"Customer_ID\" AS customer_id,\n\
                  COUNT(*) AS total_rides\n\
              FROM rides\n\
              WHERE UPPER(TRIM(\"Booking_Status\")) = 'SUCCESS'\n\
              GROUP BY \"Customer_ID\"\n\
              ORDER BY total_rides DESC\n\
              LIMIT 5;",
    },
    ViewDefinition {
        view: "vw_avg_ratings_by_vehicle",
        title: "KPI 7: Average Ratings by Vehicle Type",
        query: SELECT_AVG_RATINGS_BY_VEHICLE,
        ddl: "CREATE OR REPLACE VIEW vw_avg_ratings_by_vehicle AS\n\
              SELECT\n\
                  \"Vehicle_Type\" AS vehicle_type,\n\
                  ROUND(AVG(\"Customer_Rating\")::numeric, 2)::double precision AS avg_customer_rating,\n\
                  ROUND(AVG(\"Driver_Ratings\")::numeric, 2)::double precision AS avg_driver_rating\n\
              FROM rides\n\
              WHERE UPPER(TRIM(\"Booking_Status\")) = 'SUCCESS'\n\
              GROUP BY \"Vehicle_Type\"\n\
              ORDER BY \"Vehicle_Type\";",
    },
];

fn first_or_zero<T>(rows: &[T], pick: impl Fn(&T) -> i64) -> i64 {
    rows.first().map(pick).unwrap_or(0)
}

/// The headline metrics: counts plus revenue, with the revenue already
/// formatted for display. Empty views count as zero.
pub async fn kpi_summary(pool: &Pool<Postgres>, cache: &QueryCache) -> anyhow::Result<KpiSummary> {
    let bookings: Vec<TotalSuccessfulBookings> =
        run_query(pool, cache, SELECT_TOTAL_SUCCESSFUL_BOOKINGS).await?;
    let customer: Vec<CustomerCancellations> =
        run_query(pool, cache, SELECT_CUSTOMER_CANCELLATIONS).await?;
    let driver: Vec<DriverCancellations> =
        run_query(pool, cache, SELECT_DRIVER_CANCELLATIONS).await?;
    let revenue: Vec<TotalSuccessfulRevenue> =
        run_query(pool, cache, SELECT_TOTAL_SUCCESSFUL_REVENUE).await?;

    let total_revenue = first_or_zero(&revenue, |r| r.total_successful_revenue);
    Ok(KpiSummary {
        successful_bookings: first_or_zero(&bookings, |r| r.total_successful_bookings),
        customer_cancellations: first_or_zero(&customer, |r| r.customer_cancellations),
        driver_cancellations: first_or_zero(&driver, |r| r.driver_cancellations),
        total_revenue,
        total_revenue_display: format::inr(total_revenue),
    })
}

pub async fn payment_methods(
    pool: &Pool<Postgres>,
    cache: &QueryCache,
) -> anyhow::Result<Vec<PaymentMethodCount>> {
    run_query(pool, cache, SELECT_PAYMENT_METHOD_DISTRIBUTION).await
}

pub async fn top_customers(
    pool: &Pool<Postgres>,
    cache: &QueryCache,
) -> anyhow::Result<Vec<TopCustomer>> {
    run_query(pool, cache, SELECT_TOP_5_CUSTOMERS).await
}

pub async fn vehicle_ratings(
    pool: &Pool<Postgres>,
    cache: &QueryCache,
) -> anyhow::Result<Vec<VehicleRating>> {
    run_query(pool, cache, SELECT_AVG_RATINGS_BY_VEHICLE).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_query_selects_from_its_documented_view() {
        for def in VIEW_DEFINITIONS {
            assert_eq!(
                def.query,
                format!("SELECT * FROM {}", def.view),
                "query for {} drifted from its view",
                def.view
            );
        }
    }

    #[test]
    fn every_ddl_creates_its_own_view() {
        for def in VIEW_DEFINITIONS {
            assert!(
                def.ddl
                    .starts_with(&format!("CREATE OR REPLACE VIEW {} AS", def.view)),
                "DDL for {} does not create it",
                def.view
            );
        }
    }

    #[test]
    fn queries_are_read_only() {
        for def in VIEW_DEFINITIONS {
            assert!(def.query.starts_with("SELECT "));
        }
        for sql in [
            SELECT_TOTAL_SUCCESSFUL_BOOKINGS,
            SELECT_CUSTOMER_CANCELLATIONS,
            SELECT_DRIVER_CANCELLATIONS,
            SELECT_TOTAL_SUCCESSFUL_REVENUE,
            SELECT_PAYMENT_METHOD_DISTRIBUTION,
            SELECT_TOP_5_CUSTOMERS,
            SELECT_AVG_RATINGS_BY_VEHICLE,
        ] {
            assert!(sql.starts_with("SELECT * FROM vw_"));
        }
    }

    #[test]
    fn catalog_covers_the_whole_query_set() {
        assert_eq!(VIEW_DEFINITIONS.len(), 7);
    }
}
