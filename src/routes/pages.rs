// src/routes/pages.rs
//
// Server-rendered dashboard. One handler resolves the sidebar slug to a
// section and renders that section's template; only "live-outputs"
// touches the database.

use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::Utc;

use super::internal_error;
use crate::content::{Section, BI_SCREENSHOTS};
use crate::models::{KpiSummary, PaymentMethodCount, TopCustomer, VehicleRating};
use crate::queries::{self, ViewDefinition, VIEW_DEFINITIONS};
use crate::AppState;

const NAV: &[Section] = &Section::ALL;

#[derive(Template)]
#[template(path = "about.html")]
struct AboutPage {
    nav: &'static [Section],
    active: Section,
}

#[derive(Template)]
#[template(path = "questions.html")]
struct QuestionsPage {
    nav: &'static [Section],
    active: Section,
}

#[derive(Template)]
#[template(path = "sql_logic.html")]
struct SqlLogicPage {
    nav: &'static [Section],
    active: Section,
    views: &'static [ViewDefinition],
}

#[derive(Template)]
#[template(path = "live_outputs.html")]
struct LiveOutputsPage {
    nav: &'static [Section],
    active: Section,
    summary: KpiSummary,
    payment_methods: Vec<PaymentMethodCount>,
    top_customers: Vec<TopCustomer>,
    vehicle_ratings: Vec<VehicleRating>,
    refreshed_at: String,
}

#[derive(Template)]
#[template(path = "bi_dashboard.html")]
struct BiDashboardPage {
    nav: &'static [Section],
    active: Section,
    report_url: String,
    screenshots: &'static [(&'static str, &'static str)],
}

pub async fn index() -> Redirect {
    Redirect::to("/sections/about")
}

pub async fn section(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, (StatusCode, String)> {
    let Some(active) = Section::from_slug(&slug) else {
        return Err((StatusCode::NOT_FOUND, format!("unknown section: {slug}")));
    };

    match active {
        Section::About => render(AboutPage { nav: NAV, active }),
        Section::BusinessQuestions => render(QuestionsPage { nav: NAV, active }),
        Section::SqlLogic => render(SqlLogicPage {
            nav: NAV,
            active,
            views: VIEW_DEFINITIONS,
        }),
        Section::LiveOutputs => {
            let summary = queries::kpi_summary(&state.pool, &state.cache)
                .await
                .map_err(internal_error)?;
            let payment_methods = queries::payment_methods(&state.pool, &state.cache)
                .await
                .map_err(internal_error)?;
            let top_customers = queries::top_customers(&state.pool, &state.cache)
                .await
                .map_err(internal_error)?;
            let vehicle_ratings = queries::vehicle_ratings(&state.pool, &state.cache)
                .await
                .map_err(internal_error)?;
            render(LiveOutputsPage {
                nav: NAV,
                active,
                summary,
                payment_methods,
                top_customers,
                vehicle_ratings,
                refreshed_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
            })
        }
        Section::BiDashboard => render(BiDashboardPage {
            nav: NAV,
            active,
            report_url: state.bi_report_url.clone(),
            screenshots: BI_SCREENSHOTS,
        }),
    }
}

fn render<T: Template>(page: T) -> Result<Response, (StatusCode, String)> {
    let body = page.render().map_err(internal_error)?;
    Ok(Html(body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format;

    fn sample_summary() -> KpiSummary {
        let total_revenue = 8_223_957;
        KpiSummary {
            successful_bookings: 62_967,
            customer_cancellations: 10_499,
            driver_cancellations: 18_434,
            total_revenue,
            total_revenue_display: format::inr(total_revenue),
        }
    }

    #[test]
    fn about_section_renders_its_narrative() {
        let html = AboutPage {
            nav: NAV,
            active: Section::About,
        }
        .render()
        .unwrap();
        assert!(html.contains("About This Project"));
        assert!(html.contains("Business Problem"));
        assert!(html.contains("PostgreSQL"));
    }

    #[test]
    fn questions_section_renders_all_five_problems() {
        let html = QuestionsPage {
            nav: NAV,
            active: Section::BusinessQuestions,
        }
        .render()
        .unwrap();
        for problem in [
            "Booking Performance",
            "Ride Cancellations",
            "Revenue Contribution",
            "Customer Value",
            "Service Quality",
        ] {
            assert!(html.contains(problem), "missing problem: {problem}");
        }
    }

    #[test]
    fn sql_logic_section_documents_every_view() {
        let html = SqlLogicPage {
            nav: NAV,
            active: Section::SqlLogic,
            views: VIEW_DEFINITIONS,
        }
        .render()
        .unwrap();
        for def in VIEW_DEFINITIONS {
            assert!(html.contains(def.view), "missing view: {}", def.view);
        }
    }

    #[test]
    fn live_outputs_section_formats_revenue() {
        let html = LiveOutputsPage {
            nav: NAV,
            active: Section::LiveOutputs,
            summary: sample_summary(),
            payment_methods: vec![PaymentMethodCount {
                payment_method: "UPI".into(),
                total_transactions: 41_234,
            }],
            top_customers: vec![TopCustomer {
                customer_id: "CID785112".into(),
                total_rides: 6,
            }],
            vehicle_ratings: vec![VehicleRating {
                vehicle_type: "Prime Sedan".into(),
                avg_customer_rating: 4.01,
                avg_driver_rating: 3.98,
            }],
            refreshed_at: "2026-01-01 00:00 UTC".into(),
        }
        .render()
        .unwrap();
        assert!(html.contains("₹ 8,223,957"));
        assert!(html.contains("UPI"));
        assert!(html.contains("CID785112"));
        assert!(html.contains("Prime Sedan"));
    }

    #[test]
    fn bi_section_links_the_report_and_screenshots() {
        let html = BiDashboardPage {
            nav: NAV,
            active: Section::BiDashboard,
            report_url: "https://example.com/report".into(),
            screenshots: BI_SCREENSHOTS,
        }
        .render()
        .unwrap();
        assert!(html.contains("https://example.com/report"));
        for (_, file) in BI_SCREENSHOTS {
            assert!(html.contains(file), "missing screenshot: {file}");
        }
    }

    #[test]
    fn sidebar_lists_every_section_on_every_page() {
        let html = AboutPage {
            nav: NAV,
            active: Section::About,
        }
        .render()
        .unwrap();
        for s in Section::ALL {
            assert!(html.contains(s.title()), "missing nav entry: {}", s.title());
            assert!(html.contains(&format!("/sections/{}", s.slug())));
        }
    }
}
