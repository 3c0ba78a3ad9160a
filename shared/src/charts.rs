//! Chart series preparation. Drawing happens in the frontend; everything
//! here is plain data so it can be tested natively.

use std::f64::consts::TAU;

use crate::models::{CategoryShare, RiskCategory, WeeklyPoint};

/// Weekly values laid out for the line, bar and combined charts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    /// Normalized PAR percentages
    pub par: Vec<f64>,
    pub outstanding: Vec<f64>,
}

impl ChartSeries {
    pub fn from_weekly(weekly: &[WeeklyPoint]) -> Self {
        Self {
            labels: weekly.iter().map(|p| p.week.clone()).collect(),
            par: weekly.iter().map(|p| p.par().percent()).collect(),
            outstanding: weekly.iter().map(|p| p.outstanding).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// PAR axis from zero with headroom above the highest week.
    pub fn par_bounds(&self) -> (f64, f64) {
        let max = self.par.iter().cloned().fold(0.0_f64, f64::max);
        (0.0, (max * 1.2).ceil().max(1.0))
    }

    /// Outstanding axis padded 5% on either side.
    pub fn outstanding_bounds(&self) -> (f64, f64) {
        let min = self.outstanding.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self.outstanding.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() || !max.is_finite() {
            return (0.0, 1.0);
        }
        if min == max {
            let pad = if max == 0.0 { 1.0 } else { max.abs() * 0.05 };
            return (min - pad, max + pad);
        }
        (min * 0.95, max * 1.05)
    }
}

/// One wedge of the distribution chart. Angles are radians, clockwise from
/// twelve o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: RiskCategory,
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn label(&self) -> String {
        format!("{} {:.2}%", self.category.name(), self.percent)
    }
}

/// Wedges sized by share of the total. Shares need not add up to 100.
pub fn pie_slices(shares: &[CategoryShare]) -> Vec<PieSlice> {
    let total: f64 = shares.iter().map(|s| s.percent.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    shares
        .iter()
        .filter(|s| s.percent > 0.0)
        .map(|share| {
            let sweep = share.percent / total * TAU;
            let slice = PieSlice {
                category: share.category,
                percent: share.percent,
                start_angle: angle,
                end_angle: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    #[test]
    fn test_series_normalizes_par() {
        let weekly = vec![
            WeeklyPoint::new("12 Sep", 10.0, 1.0, 0.0447),
            WeeklyPoint::new("20 Sep", 12.0, 1.0, 4.19),
        ];
        let series = ChartSeries::from_weekly(&weekly);
        assert_eq!(series.labels, vec!["12 Sep", "20 Sep"]);
        assert!((series.par[0] - 4.47).abs() < 1e-9);
        assert_eq!(series.par[1], 4.19);
        assert_eq!(series.par_bounds(), (0.0, 6.0));
    }

    #[test]
    fn test_outstanding_bounds_pad_flat_series() {
        let weekly = vec![WeeklyPoint::new("20 Sep", 100.0, 1.0, 4.0)];
        let (lo, hi) = ChartSeries::from_weekly(&weekly).outstanding_bounds();
        assert!(lo < 100.0 && hi > 100.0);
        assert_eq!(ChartSeries::from_weekly(&[]).outstanding_bounds(), (0.0, 1.0));
    }

    #[test]
    fn test_pie_slices_cover_full_circle() {
        let slices = pie_slices(&samples::aggregate_performance());
        assert_eq!(slices.len(), 5);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[4].end_angle - TAU).abs() < 1e-9);
        assert_eq!(slices[0].label(), "Performing 74.25%");
    }

    #[test]
    fn test_pie_slices_scale_when_not_summing_to_hundred() {
        let shares = vec![
            CategoryShare { category: RiskCategory::Performing, percent: 30.0 },
            CategoryShare { category: RiskCategory::Loss, percent: 10.0 },
        ];
        let slices = pie_slices(&shares);
        assert!((slices[0].end_angle - 0.75 * TAU).abs() < 1e-9);
        assert!(pie_slices(&[]).is_empty());
    }
}
