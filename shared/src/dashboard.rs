//! Dashboard session state.
//!
//! [`Dashboard`] owns the selection and both fetch slots. The UI layer calls
//! a `select_*` method on every user change, issues the returned tickets, and
//! hands each response back through `complete_*`. Responses whose ticket is
//! no longer live are dropped there.
//!
//! A slot keeps its last successful payload while a newer request is in
//! flight and after that request fails. Only a change of officer empties the
//! officer slot.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::models::{is_all_officers, ChartVariant, OfficerPayload, OverallPayload, Selection};
use crate::officers::clean_officer_names;
use crate::resolver::{resolve, FetchOutcome, ResolvedView};
use crate::tracker::{FetchKind, FetchTicket, RequestTracker};

#[derive(Debug)]
pub struct Dashboard {
    selection: Selection,
    tracker: RequestTracker,
    aggregate: FetchOutcome<OverallPayload>,
    officer: FetchOutcome<OfficerPayload>,
    aggregate_pending: bool,
    officer_pending: bool,
    /// Last officer list the backend sent; survives later failures
    backend_officers: Vec<String>,
    aggregate_unavailable: bool,
    officer_unavailable: bool,
}

impl Dashboard {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selection: Selection::new(today),
            tracker: RequestTracker::new(),
            aggregate: FetchOutcome::NotYetResolved,
            officer: FetchOutcome::NotYetResolved,
            aggregate_pending: false,
            officer_pending: false,
            backend_officers: Vec::new(),
            aggregate_unavailable: false,
            officer_unavailable: false,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Tickets to issue when the dashboard mounts.
    pub fn start(&mut self) -> Vec<FetchTicket> {
        let mut tickets = vec![self.issue_aggregate()];
        if !self.selection.is_all_officers() {
            tickets.push(self.issue_officer());
        }
        tickets
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Vec<FetchTicket> {
        if date == self.selection.date {
            return Vec::new();
        }
        self.selection.date = date;
        self.start()
    }

    pub fn select_officer(&mut self, officer: &str) -> Option<FetchTicket> {
        if officer == self.selection.officer {
            return None;
        }
        self.selection.officer = officer.to_string();

        // The held payload belongs to the previous officer.
        self.officer = FetchOutcome::NotYetResolved;
        self.officer_unavailable = false;

        if is_all_officers(officer) {
            self.tracker.invalidate(FetchKind::Officer);
            self.officer_pending = false;
            return None;
        }
        Some(self.issue_officer())
    }

    pub fn select_chart(&mut self, chart: ChartVariant) {
        self.selection.chart = chart;
    }

    /// Apply an aggregate response. Returns false when it was stale.
    pub fn complete_aggregate(
        &mut self,
        ticket: &FetchTicket,
        result: Result<OverallPayload, FetchError>,
    ) -> bool {
        if ticket.kind != FetchKind::Aggregate
            || !self.tracker.is_live(ticket)
            || ticket.date != self.selection.date
        {
            debug!(date = %ticket.date_param(), "discarding stale aggregate response");
            return false;
        }

        match result {
            Ok(payload) => {
                let officers = clean_officer_names(&payload.officers);
                if !officers.is_empty() {
                    self.backend_officers = officers;
                }
                self.aggregate_unavailable = false;
                self.aggregate = FetchOutcome::Succeeded(payload);
            }
            Err(err) => {
                warn!(date = %ticket.date_param(), error = %err, "aggregate fetch failed");
                self.aggregate_unavailable = true;
                record_failure(&mut self.aggregate, err);
            }
        }
        self.aggregate_pending = false;
        true
    }

    /// Apply an officer response. Returns false when it was stale.
    pub fn complete_officer(
        &mut self,
        ticket: &FetchTicket,
        result: Result<OfficerPayload, FetchError>,
    ) -> bool {
        if ticket.kind != FetchKind::Officer
            || !self.tracker.is_live(ticket)
            || ticket.officer != self.selection.officer
            || ticket.date != self.selection.date
        {
            debug!(
                officer = %ticket.officer,
                date = %ticket.date_param(),
                "discarding stale officer response"
            );
            return false;
        }

        match result {
            Ok(payload) => {
                self.officer_unavailable = false;
                self.officer = FetchOutcome::Succeeded(payload);
            }
            Err(err) => {
                warn!(officer = %ticket.officer, error = %err, "officer fetch failed");
                self.officer_unavailable = true;
                record_failure(&mut self.officer, err);
            }
        }
        self.officer_pending = false;
        true
    }

    /// Drives the "backend offline" badge.
    pub fn is_backend_unavailable(&self) -> bool {
        self.aggregate_unavailable || self.officer_unavailable
    }

    pub fn is_loading(&self) -> bool {
        self.aggregate_pending || (!self.selection.is_all_officers() && self.officer_pending)
    }

    pub fn view(&self) -> ResolvedView {
        resolve(
            &self.selection,
            &self.aggregate,
            &self.officer,
            &self.backend_officers,
        )
    }

    fn issue_aggregate(&mut self) -> FetchTicket {
        self.aggregate_pending = true;
        self.tracker.issue_aggregate(self.selection.date)
    }

    fn issue_officer(&mut self) -> FetchTicket {
        self.officer_pending = true;
        self.tracker
            .issue_officer(&self.selection.officer, self.selection.date)
    }
}

/// A failure never replaces a payload that was already shown.
fn record_failure<T>(slot: &mut FetchOutcome<T>, err: FetchError) {
    if slot.succeeded().is_none() {
        *slot = FetchOutcome::Failed(err);
    }
}
