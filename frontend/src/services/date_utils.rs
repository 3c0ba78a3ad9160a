use chrono::NaiveDate;
use shared::models::date_param;

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Parse the value of an `<input type="date">`. Empty or partial input
/// yields `None`.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Value for an `<input type="date">`.
pub fn input_value(date: NaiveDate) -> String {
    date_param(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_date() {
        assert_eq!(parse_input_date("2024-09-20"), NaiveDate::from_ymd_opt(2024, 9, 20));
        assert_eq!(parse_input_date(" 2024-09-05 "), NaiveDate::from_ymd_opt(2024, 9, 5));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("2024-13-01"), None);
    }

    #[test]
    fn test_input_value_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
        assert_eq!(parse_input_date(&input_value(date)), Some(date));
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_is_a_real_date() {
        assert!(today() > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
