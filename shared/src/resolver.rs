//! The Data Resolver.
//!
//! Given the current selection and whatever the two backend fetches have
//! produced so far, decide which snapshot, weekly series and performance
//! breakdown the dashboard shows. Resolution is total: every combination of
//! outcomes yields a non-empty series, falling back to the embedded samples
//! when nothing live is usable.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::FetchError;
use crate::models::{
    CategoryShare, KpiSnapshot, OfficerDetails, OfficerPayload, OverallPayload, Selection,
    Snapshot, WeeklyPoint,
};
use crate::officers::officer_options;
use crate::samples;

/// State of one backend fetch slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchOutcome<T> {
    #[default]
    NotYetResolved,
    Succeeded(T),
    Failed(FetchError),
}

impl<T> FetchOutcome<T> {
    pub fn succeeded(&self) -> Option<&T> {
        match self {
            FetchOutcome::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

}

/// Which link of the fallback chain produced the weekly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    LiveOfficer,
    LiveAggregate,
    SampleOfficer,
    SampleAggregate,
}

impl DataSource {
    pub fn is_live(self) -> bool {
        matches!(self, DataSource::LiveOfficer | DataSource::LiveAggregate)
    }

    pub fn label(self) -> &'static str {
        match self {
            DataSource::LiveOfficer => "live officer data",
            DataSource::LiveAggregate => "live portfolio data",
            DataSource::SampleOfficer => "sample officer data",
            DataSource::SampleAggregate => "sample portfolio data",
        }
    }
}

/// Everything the dashboard renders for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedView {
    pub snapshot: KpiSnapshot,
    /// True when the snapshot came from the backend rather than the series
    pub snapshot_from_backend: bool,
    /// Ordered by week ascending, never empty
    pub weekly: Vec<WeeklyPoint>,
    pub breakdown: Vec<CategoryShare>,
    pub source: DataSource,
    pub officer_details: Option<OfficerDetails>,
    pub officers: Vec<String>,
}

/// Run the fallback chain for `selection`.
///
/// The outcomes must belong to the current selection; the session discards
/// anything stale before it gets here.
pub fn resolve(
    selection: &Selection,
    aggregate: &FetchOutcome<OverallPayload>,
    officer: &FetchOutcome<OfficerPayload>,
    backend_officers: &[String],
) -> ResolvedView {
    let (live, backend_snapshot) = if selection.is_all_officers() {
        let payload = aggregate.succeeded();
        (
            payload.map(|p| (p.weekly.as_slice(), DataSource::LiveAggregate)),
            payload.and_then(|p| p.snapshot.as_ref()),
        )
    } else {
        let payload = officer.succeeded();
        (
            payload.map(|p| (p.weekly.as_slice(), DataSource::LiveOfficer)),
            payload.and_then(|p| p.snapshot.as_ref()),
        )
    };

    let (weekly, source) = match live {
        Some((points, source)) if !points.is_empty() => {
            (order_weekly(points.to_vec(), selection.date), source)
        }
        _ => embedded_series(&selection.officer),
    };

    let (snapshot, snapshot_from_backend) = pick_snapshot(backend_snapshot, &weekly);

    let sample = samples::officer(&selection.officer);
    let breakdown = samples::performance_for(&selection.officer);
    let officer_details = sample.map(|s| OfficerDetails {
        current_par: snapshot.overall_par,
        ..s.details()
    });

    debug!(
        officer = %selection.officer,
        date = %selection.date_param(),
        source = source.label(),
        weeks = weekly.len(),
        snapshot_from_backend,
        "resolved dashboard view"
    );

    ResolvedView {
        snapshot,
        snapshot_from_backend,
        weekly,
        breakdown,
        source,
        officer_details,
        officers: officer_options(backend_officers),
    }
}

fn embedded_series(officer: &str) -> (Vec<WeeklyPoint>, DataSource) {
    match samples::officer(officer) {
        Some(sample) => (sample.weekly(), DataSource::SampleOfficer),
        None => (samples::aggregate_weekly(), DataSource::SampleAggregate),
    }
}

/// Backend snapshot when it names a week, otherwise the last point of the
/// series. Missing backend numbers are filled from the series.
fn pick_snapshot(backend: Option<&Snapshot>, weekly: &[WeeklyPoint]) -> (KpiSnapshot, bool) {
    let synthesized = match weekly.last() {
        Some(point) => KpiSnapshot::from_point(point),
        None => latest_sample_snapshot(),
    };
    match backend.and_then(|s| KpiSnapshot::from_backend(s, &synthesized)) {
        Some(snapshot) => (snapshot, true),
        None => (synthesized, false),
    }
}

fn latest_sample_snapshot() -> KpiSnapshot {
    let weekly = samples::aggregate_weekly();
    match weekly.last() {
        Some(point) => KpiSnapshot::from_point(point),
        None => KpiSnapshot::from_point(&WeeklyPoint::new("", 0.0, 0.0, 0.0)),
    }
}

/// Place a week on the calendar: an explicit `date` field, an ISO label, or
/// a "D Mon" label anchored to the year of `as_of`. Labels that would land
/// after `as_of` belong to the previous year.
pub fn week_date(point: &WeeklyPoint, as_of: NaiveDate) -> Option<NaiveDate> {
    let iso = |s: &str| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok();
    if let Some(date) = point.date.as_deref().and_then(iso) {
        return Some(date);
    }
    if let Some(date) = iso(&point.week) {
        return Some(date);
    }

    let label = point.week.trim();
    let anchored =
        NaiveDate::parse_from_str(&format!("{} {}", label, as_of.year()), "%d %b %Y").ok()?;
    if anchored > as_of {
        NaiveDate::parse_from_str(&format!("{} {}", label, as_of.year() - 1), "%d %b %Y").ok()
    } else {
        Some(anchored)
    }
}

/// Stable sort by calendar week when every label can be placed, otherwise
/// the order is left as received.
pub fn order_weekly(points: Vec<WeeklyPoint>, as_of: NaiveDate) -> Vec<WeeklyPoint> {
    let dates: Option<Vec<NaiveDate>> = points.iter().map(|p| week_date(p, as_of)).collect();
    let Some(dates) = dates else {
        debug!(weeks = points.len(), "unplaceable week labels, keeping backend order");
        return points;
    };

    let mut keyed: Vec<(NaiveDate, WeeklyPoint)> = dates.into_iter().zip(points).collect();
    keyed.sort_by_key(|(date, _)| *date);
    keyed.into_iter().map(|(_, point)| point).collect()
}
