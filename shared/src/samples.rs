//! Embedded sample portfolio.
//!
//! This is the last link of the fallback chain: whatever happens to the
//! backend, these figures are always available so the dashboard never
//! renders an empty chart.

use crate::models::{CategoryShare, OfficerDetails, RiskCategory, WeeklyPoint, ALL_OFFICERS};
use crate::par::Par;

struct SampleWeek {
    week: &'static str,
    date: &'static str,
    par: f64,
    outstanding: f64,
    provision: f64,
}

impl SampleWeek {
    fn to_point(&self) -> WeeklyPoint {
        WeeklyPoint {
            week: self.week.to_string(),
            outstanding: self.outstanding,
            provision: self.provision,
            par: self.par,
            date: Some(self.date.to_string()),
        }
    }
}

/// Embedded series for one collection officer.
pub struct OfficerSample {
    pub name: &'static str,
    weeks: [SampleWeek; 4],
    /// Percentages in `RiskCategory::ALL` order
    performance: [f64; 5],
    pub avg_loan_size: f64,
    pub collection_rate: f64,
}

impl OfficerSample {
    pub fn weekly(&self) -> Vec<WeeklyPoint> {
        self.weeks.iter().map(SampleWeek::to_point).collect()
    }

    pub fn performance(&self) -> Vec<CategoryShare> {
        shares(&self.performance)
    }

    pub fn details(&self) -> OfficerDetails {
        let current_par = self
            .weeks
            .last()
            .map(|w| Par::from_raw(w.par))
            .unwrap_or_default();
        OfficerDetails {
            avg_loan_size: self.avg_loan_size,
            collection_rate: self.collection_rate,
            current_par,
        }
    }
}

static AGGREGATE_WEEKS: [SampleWeek; 4] = [
    SampleWeek { week: "31 Aug", date: "2024-08-31", par: 3.98, outstanding: 10_800_000_000.0, provision: 430_000_000.0 },
    SampleWeek { week: "5 Sep", date: "2024-09-05", par: 4.84, outstanding: 11_000_000_000.0, provision: 532_400_000.0 },
    SampleWeek { week: "12 Sep", date: "2024-09-12", par: 4.47, outstanding: 11_100_000_000.0, provision: 495_970_000.0 },
    SampleWeek { week: "20 Sep", date: "2024-09-20", par: 4.19, outstanding: 11_197_315_657.0, provision: 468_927_167.0 },
];

static AGGREGATE_PERFORMANCE: [f64; 5] = [74.25, 15.5, 6.75, 2.75, 0.75];

static OFFICERS: [OfficerSample; 4] = [
    OfficerSample {
        name: "Joseph Kiwia Mwanya",
        weeks: [
            SampleWeek { week: "31 Aug", date: "2024-08-31", par: 3.2, outstanding: 2_700_000_000.0, provision: 86_400_000.0 },
            SampleWeek { week: "5 Sep", date: "2024-09-05", par: 4.1, outstanding: 2_750_000_000.0, provision: 112_750_000.0 },
            SampleWeek { week: "12 Sep", date: "2024-09-12", par: 3.8, outstanding: 2_800_000_000.0, provision: 106_400_000.0 },
            SampleWeek { week: "20 Sep", date: "2024-09-20", par: 3.5, outstanding: 2_850_000_000.0, provision: 99_750_000.0 },
        ],
        performance: [79.0, 12.0, 5.0, 3.0, 1.0],
        avg_loan_size: 6_333_333.0,
        collection_rate: 96.5,
    },
    OfficerSample {
        name: "Ochieng Stephen",
        weeks: [
            SampleWeek { week: "31 Aug", date: "2024-08-31", par: 4.2, outstanding: 2_800_000_000.0, provision: 117_600_000.0 },
            SampleWeek { week: "5 Sep", date: "2024-09-05", par: 5.1, outstanding: 2_900_000_000.0, provision: 147_900_000.0 },
            SampleWeek { week: "12 Sep", date: "2024-09-12", par: 4.8, outstanding: 2_950_000_000.0, provision: 141_600_000.0 },
            SampleWeek { week: "20 Sep", date: "2024-09-20", par: 4.4, outstanding: 2_980_000_000.0, provision: 131_120_000.0 },
        ],
        performance: [73.0, 15.0, 7.0, 4.0, 1.0],
        avg_loan_size: 7_095_238.0,
        collection_rate: 95.6,
    },
    OfficerSample {
        name: "Steve Kibor",
        weeks: [
            SampleWeek { week: "31 Aug", date: "2024-08-31", par: 4.5, outstanding: 2_650_000_000.0, provision: 119_250_000.0 },
            SampleWeek { week: "5 Sep", date: "2024-09-05", par: 5.3, outstanding: 2_700_000_000.0, provision: 143_100_000.0 },
            SampleWeek { week: "12 Sep", date: "2024-09-12", par: 4.9, outstanding: 2_750_000_000.0, provision: 134_750_000.0 },
            SampleWeek { week: "20 Sep", date: "2024-09-20", par: 4.6, outstanding: 2_800_000_000.0, provision: 128_800_000.0 },
        ],
        performance: [71.0, 16.0, 8.0, 4.0, 1.0],
        avg_loan_size: 7_368_421.0,
        collection_rate: 95.4,
    },
    OfficerSample {
        name: "Protus Bwire Wandera",
        weeks: [
            SampleWeek { week: "31 Aug", date: "2024-08-31", par: 3.8, outstanding: 2_650_000_000.0, provision: 100_700_000.0 },
            SampleWeek { week: "5 Sep", date: "2024-09-05", par: 4.7, outstanding: 2_650_000_000.0, provision: 124_550_000.0 },
            SampleWeek { week: "12 Sep", date: "2024-09-12", par: 4.3, outstanding: 2_700_000_000.0, provision: 116_100_000.0 },
            SampleWeek { week: "20 Sep", date: "2024-09-20", par: 4.0, outstanding: 2_767_315_657.0, provision: 110_692_626.0 },
        ],
        performance: [75.0, 15.0, 6.0, 3.0, 1.0],
        avg_loan_size: 6_749_304.0,
        collection_rate: 96.0,
    },
];

fn shares(values: &[f64; 5]) -> Vec<CategoryShare> {
    RiskCategory::ALL
        .iter()
        .zip(values.iter())
        .map(|(&category, &percent)| CategoryShare { category, percent })
        .collect()
}

pub fn aggregate_weekly() -> Vec<WeeklyPoint> {
    AGGREGATE_WEEKS.iter().map(SampleWeek::to_point).collect()
}

pub fn aggregate_performance() -> Vec<CategoryShare> {
    shares(&AGGREGATE_PERFORMANCE)
}

pub fn officer(name: &str) -> Option<&'static OfficerSample> {
    OFFICERS.iter().find(|o| o.name == name)
}

pub fn officer_names() -> impl Iterator<Item = &'static str> {
    OFFICERS.iter().map(|o| o.name)
}

/// Embedded weekly series for a selection: the officer's own series when
/// one exists, the aggregate otherwise.
pub fn weekly_for(officer_name: &str) -> Vec<WeeklyPoint> {
    if officer_name == ALL_OFFICERS {
        return aggregate_weekly();
    }
    officer(officer_name)
        .map(OfficerSample::weekly)
        .unwrap_or_else(aggregate_weekly)
}

/// Performance breakdown for a selection, defaulting to the aggregate mix.
pub fn performance_for(officer_name: &str) -> Vec<CategoryShare> {
    officer(officer_name)
        .map(OfficerSample::performance)
        .unwrap_or_else(aggregate_performance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_ends_on_latest_week() {
        let weekly = aggregate_weekly();
        assert_eq!(weekly.len(), 4);
        let last = weekly.last().unwrap();
        assert_eq!(last.week, "20 Sep");
        assert_eq!(last.par, 4.19);
        assert_eq!(last.outstanding, 11_197_315_657.0);
        assert_eq!(last.provision, 468_927_167.0);
    }

    #[test]
    fn test_weekly_for_unknown_officer_uses_aggregate() {
        assert_eq!(weekly_for("Nobody In Particular"), aggregate_weekly());
        assert_eq!(weekly_for(ALL_OFFICERS), aggregate_weekly());
    }

    #[test]
    fn test_officer_sample_lookup() {
        let steve = officer("Steve Kibor").unwrap();
        assert_eq!(steve.weekly().last().unwrap().par, 4.6);
        assert_eq!(steve.details().collection_rate, 95.4);
        assert_eq!(steve.performance()[0].category, RiskCategory::Performing);
        assert_eq!(steve.performance()[0].percent, 71.0);
    }

    #[test]
    fn test_performance_defaults_to_aggregate_mix() {
        let mix = performance_for(ALL_OFFICERS);
        let values: Vec<f64> = mix.iter().map(|s| s.percent).collect();
        assert_eq!(values, vec![74.25, 15.5, 6.75, 2.75, 0.75]);
    }

    #[test]
    fn test_officer_names_order() {
        let names: Vec<&str> = officer_names().collect();
        assert_eq!(
            names,
            vec!["Joseph Kiwia Mwanya", "Ochieng Stephen", "Steve Kibor", "Protus Bwire Wandera"]
        );
    }
}
