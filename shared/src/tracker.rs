//! Stale-response suppression.
//!
//! Network requests cannot be aborted, so superseded responses are dropped
//! on arrival instead. Each slot keeps a sequence number; issuing a new
//! ticket for a slot makes every older ticket of that slot dead.

use chrono::NaiveDate;

use crate::models::{date_param, ALL_OFFICERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Aggregate,
    Officer,
}

/// Handle for one in-flight request. Carries the selection it was issued
/// for so the caller can build the URL from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub kind: FetchKind,
    pub officer: String,
    pub date: NaiveDate,
    seq: u64,
}

impl FetchTicket {
    pub fn date_param(&self) -> String {
        date_param(self.date)
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    aggregate_seq: u64,
    officer_seq: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue_aggregate(&mut self, date: NaiveDate) -> FetchTicket {
        self.aggregate_seq += 1;
        FetchTicket {
            kind: FetchKind::Aggregate,
            officer: ALL_OFFICERS.to_string(),
            date,
            seq: self.aggregate_seq,
        }
    }

    pub fn issue_officer(&mut self, officer: &str, date: NaiveDate) -> FetchTicket {
        self.officer_seq += 1;
        FetchTicket {
            kind: FetchKind::Officer,
            officer: officer.to_string(),
            date,
            seq: self.officer_seq,
        }
    }

    /// Kill every outstanding ticket of a slot without issuing a new one.
    pub fn invalidate(&mut self, kind: FetchKind) {
        match kind {
            FetchKind::Aggregate => self.aggregate_seq += 1,
            FetchKind::Officer => self.officer_seq += 1,
        }
    }

    /// Whether the ticket is still the latest one for its slot.
    pub fn is_live(&self, ticket: &FetchTicket) -> bool {
        let current = match ticket.kind {
            FetchKind::Aggregate => self.aggregate_seq,
            FetchKind::Officer => self.officer_seq,
        };
        ticket.seq == current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue_aggregate(day(12));
        let second = tracker.issue_aggregate(day(20));
        assert!(!tracker.is_live(&first));
        assert!(tracker.is_live(&second));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut tracker = RequestTracker::new();
        let aggregate = tracker.issue_aggregate(day(20));
        let officer = tracker.issue_officer("Steve Kibor", day(20));
        assert!(tracker.is_live(&aggregate));
        assert!(tracker.is_live(&officer));

        tracker.issue_officer("Ochieng Stephen", day(20));
        assert!(tracker.is_live(&aggregate));
        assert!(!tracker.is_live(&officer));
    }

    #[test]
    fn test_invalidate_kills_outstanding_ticket() {
        let mut tracker = RequestTracker::new();
        let officer = tracker.issue_officer("Steve Kibor", day(20));
        tracker.invalidate(FetchKind::Officer);
        assert!(!tracker.is_live(&officer));
    }

    #[test]
    fn test_ticket_carries_selection() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.issue_officer("Steve Kibor", day(5));
        assert_eq!(ticket.officer, "Steve Kibor");
        assert_eq!(ticket.date_param(), "2024-09-05");
        assert_eq!(ticket.kind, FetchKind::Officer);
    }
}
