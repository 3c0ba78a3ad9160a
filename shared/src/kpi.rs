//! Figures derived from a resolved view: KPI cards and weekly table rows.

use crate::models::{KpiSnapshot, WeeklyPoint};
use crate::par::{percent_change, Par, RiskTier, Trend};
use crate::resolver::ResolvedView;

#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    pub snapshot: KpiSnapshot,
    /// Provision as a percentage of outstanding
    pub provision_coverage: f64,
    /// Week-over-week outstanding growth in percent; `None` without a baseline
    pub outstanding_growth: Option<f64>,
    /// `None` when the series has a single week
    pub par_trend: Option<Trend>,
}

impl KpiSummary {
    pub fn from_view(view: &ResolvedView) -> Self {
        let (previous, current) = last_two(&view.weekly);

        let outstanding_growth = match (previous, current) {
            (Some(prev), Some(cur)) => percent_change(cur.outstanding, prev.outstanding),
            _ => None,
        };
        let par_trend = match (previous, current) {
            (Some(prev), Some(cur)) => Some(Trend::between(cur.par(), Some(prev.par()))),
            _ => None,
        };

        Self {
            provision_coverage: view.snapshot.provision_coverage(),
            snapshot: view.snapshot.clone(),
            outstanding_growth,
            par_trend,
        }
    }
}

fn last_two(weekly: &[WeeklyPoint]) -> (Option<&WeeklyPoint>, Option<&WeeklyPoint>) {
    match weekly {
        [.., prev, cur] => (Some(prev), Some(cur)),
        [cur] => (None, Some(cur)),
        [] => (None, None),
    }
}

/// One row of the weekly breakdown table.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyRow {
    pub week: String,
    pub outstanding: f64,
    pub provision: f64,
    pub par: Par,
    pub tier: RiskTier,
    /// Change against the previous row; the first row has none
    pub trend: Option<Trend>,
}

pub fn weekly_rows(weekly: &[WeeklyPoint]) -> Vec<WeeklyRow> {
    let mut previous: Option<Par> = None;
    weekly
        .iter()
        .map(|point| {
            let par = point.par();
            let trend = previous.map(|prev| Trend::between(par, Some(prev)));
            previous = Some(par);
            WeeklyRow {
                week: point.week.clone(),
                outstanding: point.outstanding,
                provision: point.provision,
                par,
                tier: par.risk_tier(),
                trend,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Selection, ALL_OFFICERS};
    use crate::par::TrendDirection;
    use crate::resolver::{resolve, FetchOutcome};
    use crate::samples;
    use chrono::NaiveDate;

    fn sample_view(officer: &str) -> ResolvedView {
        let mut selection = Selection::new(NaiveDate::from_ymd_opt(2024, 9, 20).unwrap());
        selection.officer = officer.to_string();
        resolve(&selection, &FetchOutcome::NotYetResolved, &FetchOutcome::NotYetResolved, &[])
    }

    #[test]
    fn test_summary_for_embedded_aggregate() {
        let summary = KpiSummary::from_view(&sample_view(ALL_OFFICERS));
        assert_eq!(summary.snapshot.overall_par.to_string(), "4.19%");
        assert!((summary.provision_coverage - 4.1879).abs() < 1e-3);
        assert!(summary.outstanding_growth.unwrap() > 0.0);
        assert_eq!(summary.par_trend.unwrap().direction, TrendDirection::Improving);
    }

    #[test]
    fn test_single_week_has_no_growth() {
        let mut view = sample_view(ALL_OFFICERS);
        view.weekly.truncate(1);
        let summary = KpiSummary::from_view(&view);
        assert_eq!(summary.outstanding_growth, None);
        assert_eq!(summary.par_trend, None);
    }

    #[test]
    fn test_weekly_rows_carry_tier_and_trend() {
        let rows = weekly_rows(&samples::weekly_for("Steve Kibor"));
        assert_eq!(rows.len(), 4);
        assert!(rows[0].trend.is_none());
        assert_eq!(rows[1].trend.unwrap().direction, TrendDirection::Adverse);
        assert_eq!(rows[3].tier, RiskTier::High);
        assert_eq!(rows[3].par.to_string(), "4.60%");
    }
}
