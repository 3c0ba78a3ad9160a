//! Portfolio-at-Risk ratio handling.
//!
//! Upstream sources disagree on the scale of the PAR ratio: some send a
//! percentage (`4.19`), others a fraction (`0.0419`). [`Par`] stores the
//! percentage form and [`Par::from_raw`] is the single place where the
//! ambiguous scale is resolved. Once a value is a `Par` it is never rescaled
//! again.

use std::fmt;

/// Fraction above which a week is flagged high risk.
pub const HIGH_RISK_FRACTION: f64 = 0.045;
/// Fraction above which a week is flagged medium risk.
pub const MEDIUM_RISK_FRACTION: f64 = 0.04;

/// A PAR ratio held on the percentage scale (`4.19` means 4.19%).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Par(f64);

impl Par {
    /// Interpret a raw upstream value.
    ///
    /// Values strictly below `1` are fractions and are multiplied by 100,
    /// anything else is already a percentage. This is a compatibility shim
    /// for legacy payloads and embedded samples.
    pub fn from_raw(raw: f64) -> Self {
        if raw < 1.0 {
            Par(raw * 100.0)
        } else {
            Par(raw)
        }
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// The same ratio on the 0..1 scale.
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    pub fn risk_tier(self) -> RiskTier {
        RiskTier::classify(self.fraction())
    }
}

impl fmt::Display for Par {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Badge bucket for a weekly row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskTier {
    Normal,
    Medium,
    High,
}

impl RiskTier {
    /// Thresholds apply to the fraction scale, not the displayed percentage.
    pub fn classify(fraction: f64) -> Self {
        if fraction > HIGH_RISK_FRACTION {
            RiskTier::High
        } else if fraction > MEDIUM_RISK_FRACTION {
            RiskTier::Medium
        } else {
            RiskTier::Normal
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskTier::Normal => "risk-badge normal",
            RiskTier::Medium => "risk-badge medium",
            RiskTier::High => "risk-badge high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Normal => "Normal",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High risk",
        }
    }
}

/// Which way a PAR movement points. Rising PAR is bad news.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Adverse,
    Improving,
    Neutral,
}

impl TrendDirection {
    pub fn css_class(self) -> &'static str {
        match self {
            TrendDirection::Adverse => "trend adverse",
            TrendDirection::Improving => "trend improving",
            TrendDirection::Neutral => "trend neutral",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            TrendDirection::Adverse => "↗",
            TrendDirection::Improving => "↘",
            TrendDirection::Neutral => "→",
        }
    }
}

/// Relative change between two PAR readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Absolute percent change, always non-negative.
    pub magnitude: f64,
}

impl Trend {
    pub fn neutral() -> Self {
        Self {
            direction: TrendDirection::Neutral,
            magnitude: 0.0,
        }
    }

    /// Percent change from `previous` to `current`.
    ///
    /// A missing or zero previous reading yields a neutral trend instead of
    /// dividing by zero.
    pub fn between(current: Par, previous: Option<Par>) -> Self {
        let previous = match previous {
            Some(p) if !p.is_zero() => p,
            _ => return Self::neutral(),
        };

        let change = (current.percent() - previous.percent()) / previous.percent() * 100.0;
        let direction = if change > 0.0 {
            TrendDirection::Adverse
        } else if change < 0.0 {
            TrendDirection::Improving
        } else {
            TrendDirection::Neutral
        };

        Self {
            direction,
            magnitude: change.abs(),
        }
    }

    pub fn magnitude_label(&self) -> String {
        format!("{:.2}", self.magnitude)
    }
}

/// Plain percent change, used for balances where neither direction is
/// inherently adverse. `None` when there is no usable baseline.
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_scales_fractions() {
        assert!((Par::from_raw(0.0419).percent() - 4.19).abs() < 1e-9);
        assert_eq!(Par::from_raw(0.5).percent(), 50.0);
        assert_eq!(Par::from_raw(0.0).percent(), 0.0);
    }

    #[test]
    fn test_from_raw_keeps_percentages() {
        assert_eq!(Par::from_raw(4.19).percent(), 4.19);
        assert_eq!(Par::from_raw(1.0).percent(), 1.0);
        assert_eq!(Par::from_raw(12.5).percent(), 12.5);
    }

    #[test]
    fn test_normalized_value_is_not_rescaled() {
        // 0.5% arrives as the fraction 0.005; once wrapped it must stay 0.5%
        // even though 0.5 itself would look like a fraction.
        let par = Par::from_raw(0.005);
        assert!((par.percent() - 0.5).abs() < 1e-12);
        assert_eq!(par.to_string(), "0.50%");
        assert_eq!(par.risk_tier(), RiskTier::Normal);
    }

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(Par::from_raw(4.19).to_string(), "4.19%");
        assert_eq!(Par::from_raw(0.0419).to_string(), "4.19%");
        assert_eq!(Par::from_raw(3.5).to_string(), "3.50%");
    }

    #[test]
    fn test_risk_tier_thresholds_use_fraction_scale() {
        assert_eq!(Par::from_raw(4.6).risk_tier(), RiskTier::High);
        assert_eq!(Par::from_raw(0.046).risk_tier(), RiskTier::High);
        assert_eq!(Par::from_raw(4.4).risk_tier(), RiskTier::Medium);
        assert_eq!(Par::from_raw(4.5).risk_tier(), RiskTier::Medium);
        assert_eq!(Par::from_raw(4.0).risk_tier(), RiskTier::Normal);
        assert_eq!(Par::from_raw(3.2).risk_tier(), RiskTier::Normal);
    }

    #[test]
    fn test_trend_zero_previous_is_neutral() {
        let trend = Trend::between(Par::from_raw(4.19), Some(Par::from_raw(0.0)));
        assert_eq!(trend.direction, TrendDirection::Neutral);
        assert_eq!(trend.magnitude, 0.0);

        let trend = Trend::between(Par::from_raw(4.19), None);
        assert_eq!(trend, Trend::neutral());
    }

    #[test]
    fn test_trend_increase_is_adverse() {
        let trend = Trend::between(Par::from_raw(4.84), Some(Par::from_raw(3.98)));
        assert_eq!(trend.direction, TrendDirection::Adverse);
        assert!((trend.magnitude - 21.6080402).abs() < 1e-6);
    }

    #[test]
    fn test_trend_decrease_is_improving() {
        let trend = Trend::between(Par::from_raw(4.19), Some(Par::from_raw(4.47)));
        assert_eq!(trend.direction, TrendDirection::Improving);
        assert_eq!(trend.magnitude_label(), "6.26");
    }

    #[test]
    fn test_trend_mixed_scales_compare_normalized() {
        // 0.0447 and 4.19 are both percentages after normalization.
        let trend = Trend::between(Par::from_raw(4.19), Some(Par::from_raw(0.0447)));
        assert_eq!(trend.direction, TrendDirection::Improving);
        assert_eq!(trend.magnitude_label(), "6.26");
    }

    #[test]
    fn test_trend_unchanged_is_neutral() {
        let trend = Trend::between(Par::from_raw(4.0), Some(Par::from_raw(4.0)));
        assert_eq!(trend.direction, TrendDirection::Neutral);
        assert_eq!(trend.magnitude, 0.0);
    }

    #[test]
    fn test_percent_change() {
        assert!((percent_change(110.0, 100.0).unwrap() - 10.0).abs() < 1e-9);
        assert!((percent_change(90.0, 100.0).unwrap() + 10.0).abs() < 1e-9);
        assert_eq!(percent_change(5.0, 0.0), None);
    }
}
