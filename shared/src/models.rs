use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::par::Par;

/// Sentinel officer name for the aggregate portfolio view.
pub const ALL_OFFICERS: &str = "All Officers";

/// One week of portfolio figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    /// Display label, e.g. "20 Sep"
    #[serde(default)]
    pub week: String,
    #[serde(default)]
    pub outstanding: f64,
    #[serde(default)]
    pub provision: f64,
    /// Raw ratio as sent upstream, either `4.19` or `0.0419`
    #[serde(default)]
    pub par: f64,
    /// ISO date of the week, when known (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl WeeklyPoint {
    pub fn new(week: &str, outstanding: f64, provision: f64, par: f64) -> Self {
        Self {
            week: week.to_string(),
            outstanding,
            provision,
            par,
            date: None,
        }
    }

    /// Normalized PAR for this week.
    pub fn par(&self) -> Par {
        Par::from_raw(self.par)
    }
}

/// Summary block as returned by the backend. Every field is optional on the
/// wire; a null `week` means there was no data for the requested date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub week: Option<String>,
    pub total_outstanding: Option<f64>,
    pub total_gross_provision: Option<f64>,
    #[serde(rename = "overallPAR")]
    pub overall_par: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Payload of `GET /api/overall`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallPayload {
    pub snapshot: Option<Snapshot>,
    pub weekly: Vec<WeeklyPoint>,
    pub officers: Vec<String>,
}

/// Payload of `GET /api/officer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficerPayload {
    pub snapshot: Option<Snapshot>,
    pub weekly: Vec<WeeklyPoint>,
}

/// The snapshot actually shown in the KPI cards, with every field filled.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSnapshot {
    pub week: String,
    pub total_outstanding: f64,
    pub total_gross_provision: f64,
    pub overall_par: Par,
}

impl KpiSnapshot {
    /// Synthesize a snapshot from the latest week of a series.
    pub fn from_point(point: &WeeklyPoint) -> Self {
        Self {
            week: point.week.clone(),
            total_outstanding: point.outstanding,
            total_gross_provision: point.provision,
            overall_par: point.par(),
        }
    }

    /// Overlay a backend snapshot on top of a series-derived one. Returns
    /// `None` when the backend snapshot has no week, meaning "no data".
    pub fn from_backend(snapshot: &Snapshot, fallback: &KpiSnapshot) -> Option<Self> {
        let week = snapshot.week.clone()?;
        Some(Self {
            week,
            total_outstanding: snapshot.total_outstanding.unwrap_or(fallback.total_outstanding),
            total_gross_provision: snapshot
                .total_gross_provision
                .unwrap_or(fallback.total_gross_provision),
            overall_par: snapshot
                .overall_par
                .map(Par::from_raw)
                .unwrap_or(fallback.overall_par),
        })
    }

    /// Gross provision as a share of the outstanding book, in percent.
    pub fn provision_coverage(&self) -> f64 {
        if self.total_outstanding == 0.0 {
            return 0.0;
        }
        self.total_gross_provision / self.total_outstanding * 100.0
    }
}

/// Fixed risk-category enumeration used by the performance breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskCategory {
    Performing,
    Watch,
    Substandard,
    Doubtful,
    Loss,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 5] = [
        RiskCategory::Performing,
        RiskCategory::Watch,
        RiskCategory::Substandard,
        RiskCategory::Doubtful,
        RiskCategory::Loss,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RiskCategory::Performing => "Performing",
            RiskCategory::Watch => "Watch",
            RiskCategory::Substandard => "Substandard",
            RiskCategory::Doubtful => "Doubtful",
            RiskCategory::Loss => "Loss",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskCategory::Performing => "Loans with no payment issues",
            RiskCategory::Watch => "1-30 days past due",
            RiskCategory::Substandard => "31-90 days past due",
            RiskCategory::Doubtful => "91-180 days past due",
            RiskCategory::Loss => "Over 180 days past due",
        }
    }

    /// Hex colour used by the breakdown popover and the pie chart.
    pub fn color_hex(self) -> &'static str {
        match self {
            RiskCategory::Performing => "#10b981",
            RiskCategory::Watch => "#f59e0b",
            RiskCategory::Substandard => "#f97316",
            RiskCategory::Doubtful => "#ef4444",
            RiskCategory::Loss => "#7c2d12",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            RiskCategory::Performing => (16, 185, 129),
            RiskCategory::Watch => (245, 158, 11),
            RiskCategory::Substandard => (249, 115, 22),
            RiskCategory::Doubtful => (239, 68, 68),
            RiskCategory::Loss => (124, 45, 18),
        }
    }
}

/// Share of the book in one risk category. Shares are not required to sum
/// to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: RiskCategory,
    pub percent: f64,
}

/// Officer-level figures that only exist in the embedded samples.
#[derive(Debug, Clone, PartialEq)]
pub struct OfficerDetails {
    pub avg_loan_size: f64,
    pub collection_rate: f64,
    pub current_par: Par,
}

/// Chart rendering variant picked in the chart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartVariant {
    #[default]
    Trend,
    Compare,
    Distribution,
    Combined,
}

impl ChartVariant {
    pub const ALL: [ChartVariant; 4] = [
        ChartVariant::Trend,
        ChartVariant::Compare,
        ChartVariant::Distribution,
        ChartVariant::Combined,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartVariant::Trend => "Trend",
            ChartVariant::Compare => "Compare",
            ChartVariant::Distribution => "Distribution",
            ChartVariant::Combined => "Combined",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartVariant::Trend | ChartVariant::Compare => "PAR Trend Analysis",
            ChartVariant::Distribution => "Portfolio Distribution",
            ChartVariant::Combined => "Combined Analysis",
        }
    }
}

/// What the user has currently picked. Lives for the page session only.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub officer: String,
    pub date: NaiveDate,
    pub chart: ChartVariant,
}

impl Selection {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            officer: ALL_OFFICERS.to_string(),
            date: today,
            chart: ChartVariant::default(),
        }
    }

    pub fn is_all_officers(&self) -> bool {
        is_all_officers(&self.officer)
    }

    pub fn date_param(&self) -> String {
        date_param(self.date)
    }
}

pub fn is_all_officers(officer: &str) -> bool {
    officer == ALL_OFFICERS
}

/// ISO `YYYY-MM-DD` form used in query strings and file names.
pub fn date_param(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
