use chrono::NaiveDate;

/// `KES 11,197,315,657`. Cents are shown only when non-zero.
pub fn currency_full(prefix: &str, value: f64) -> String {
    format!("{} {}", prefix, group_thousands(value))
}

/// `KES 11.20B`, `KES 2.85M`, `KES 7.37K`, falling back to the full form.
pub fn currency_compact(prefix: &str, value: f64) -> String {
    if value >= 1e9 {
        format!("{} {:.2}B", prefix, value / 1e9)
    } else if value >= 1e6 {
        format!("{} {:.2}M", prefix, value / 1e6)
    } else if value >= 1e3 {
        format!("{} {:.2}K", prefix, value / 1e3)
    } else {
        currency_full(prefix, value)
    }
}

/// Plain percentage with two decimals, e.g. `96.50%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Signed percentage, e.g. `+0.88%` or `-0.28%`.
pub fn signed_percent(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Short week label as shown in the picker button, e.g. `20 Sep`.
pub fn week_label(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

fn group_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if fraction != 0 {
        let cents = format!("{:02}", fraction);
        grouped.push('.');
        grouped.push_str(cents.trim_end_matches('0'));
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_full() {
        assert_eq!(currency_full("KES", 11_197_315_657.0), "KES 11,197,315,657");
        assert_eq!(currency_full("KES", 999.0), "KES 999");
        assert_eq!(currency_full("KES", 1000.0), "KES 1,000");
        assert_eq!(currency_full("KES", 0.0), "KES 0");
        assert_eq!(currency_full("KES", 1234.5), "KES 1,234.5");
        assert_eq!(currency_full("KES", -1234.56), "KES -1,234.56");
    }

    #[test]
    fn test_currency_compact() {
        assert_eq!(currency_compact("KES", 11_197_315_657.0), "KES 11.20B");
        assert_eq!(currency_compact("KES", 2_850_000.0), "KES 2.85M");
        assert_eq!(currency_compact("KES", 7_368.0), "KES 7.37K");
        assert_eq!(currency_compact("KES", 512.0), "KES 512");
    }

    #[test]
    fn test_percent_helpers() {
        assert_eq!(percent(96.5), "96.50%");
        assert_eq!(signed_percent(0.8811), "+0.88%");
        assert_eq!(signed_percent(-0.28), "-0.28%");
    }

    #[test]
    fn test_week_label() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 5).unwrap();
        assert_eq!(week_label(date), "5 Sep");
    }
}
