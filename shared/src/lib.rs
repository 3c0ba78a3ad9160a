//! Domain logic for the PAR dashboard: data model, PAR normalization, the
//! embedded sample portfolio, the Data Resolver and the session state that
//! drives it. Nothing in this crate touches the browser.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod kpi;
pub mod models;
pub mod officers;
pub mod par;
pub mod resolver;
pub mod samples;
pub mod tracker;
pub mod wire;

pub use charts::{pie_slices, ChartSeries, PieSlice};
pub use config::{ApiBase, ApiBaseSource, DashboardConfig};
pub use dashboard::Dashboard;
pub use endpoints::{export_filename, export_url, officer_url, overall_url, ExportFormat};
pub use error::FetchError;
pub use kpi::{weekly_rows, KpiSummary, WeeklyRow};
pub use models::{
    CategoryShare, ChartVariant, KpiSnapshot, OfficerDetails, OfficerPayload, OverallPayload,
    RiskCategory, Selection, Snapshot, WeeklyPoint, ALL_OFFICERS,
};
pub use officers::officer_options;
pub use par::{Par, RiskTier, Trend, TrendDirection};
pub use resolver::{resolve, DataSource, FetchOutcome, ResolvedView};
pub use tracker::{FetchKind, FetchTicket, RequestTracker};
pub use wire::decode_payload;
