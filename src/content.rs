// src/content.rs
//
// The five dashboard sections and the static bits the templates need.
// The narrative text itself lives in templates/; this module only owns
// the routing metadata (slug, title, order) and the external BI report
// wiring.

/// One entry of the sidebar. Order of `ALL` is the sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    BusinessQuestions,
    SqlLogic,
    LiveOutputs,
    BiDashboard,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::BusinessQuestions,
        Section::SqlLogic,
        Section::LiveOutputs,
        Section::BiDashboard,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::BusinessQuestions => "business-questions",
            Section::SqlLogic => "sql-logic",
            Section::LiveOutputs => "live-outputs",
            Section::BiDashboard => "bi-dashboard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About Project",
            Section::BusinessQuestions => "Business Questions & Answers",
            Section::SqlLogic => "SQL Business Logic",
            Section::LiveOutputs => "SQL Outputs (Live)",
            Section::BiDashboard => "Power BI Dashboard",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

/// Published Power BI report. Overridable via `BI_REPORT_URL`.
pub const DEFAULT_BI_REPORT_URL: &str = "https://app.powerbi.com/groups/me/reports/932fd5d0-11cf-40f1-91a2-4258be3e49cb/cd964a6e0e127189e221?experience=power-bi";

/// Report screenshots bundled under `images/`, shown on the BI section.
pub const BI_SCREENSHOTS: &[(&str, &str)] = &[
    ("Overall Performance", "overall.png"),
    ("Vehicle Type Analysis", "vehicle_type.png"),
    ("Revenue Analysis", "revenue.png"),
    ("Cancellation Analysis", "cancellation.png"),
    ("Ratings Analysis", "ratings.png"),
];
