//! URL and file-name construction for the backend API.

use chrono::NaiveDate;

use crate::models::{date_param, is_all_officers};

/// Export formats the backend can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Png,
    Excel,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Png, ExportFormat::Excel];

    /// Value of the `format` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
            ExportFormat::Excel => "excel",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
            ExportFormat::Excel => "xlsx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Png => "PNG",
            ExportFormat::Excel => "Excel",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Png => "image/png",
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

pub fn overall_url(base: &str, date: NaiveDate) -> String {
    format!("{}/api/overall?date={}", base, date_param(date))
}

pub fn officer_url(base: &str, officer: &str, date: NaiveDate) -> String {
    format!(
        "{}/api/officer?name={}&date={}",
        base,
        urlencoding::encode(officer),
        date_param(date)
    )
}

/// The officer parameter is left out entirely for the aggregate view.
pub fn export_url(base: &str, format: ExportFormat, officer: &str, date: NaiveDate) -> String {
    let officer_param = if is_all_officers(officer) {
        String::new()
    } else {
        format!("&officer={}", urlencoding::encode(officer))
    };
    format!(
        "{}/api/export?format={}{}&week={}",
        base,
        format.query_value(),
        officer_param,
        date_param(date)
    )
}

/// Lower-cased officer name with whitespace runs collapsed to `_`.
pub fn officer_slug(officer: &str) -> String {
    if is_all_officers(officer) {
        return "overall".to_string();
    }
    let mut slug = String::with_capacity(officer.len());
    let mut in_whitespace = false;
    for c in officer.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

/// `PAR_<slug>_<YYYY-MM-DD>.<ext>`
pub fn export_filename(officer: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "PAR_{}_{}.{}",
        officer_slug(officer),
        date_param(date),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ALL_OFFICERS;

    fn sept_20() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 20).unwrap()
    }

    #[test]
    fn test_overall_url() {
        assert_eq!(
            overall_url("http://127.0.0.1:10000", sept_20()),
            "http://127.0.0.1:10000/api/overall?date=2024-09-20"
        );
    }

    #[test]
    fn test_officer_url_encodes_name() {
        assert_eq!(
            officer_url("", "Steve Kibor", sept_20()),
            "/api/officer?name=Steve%20Kibor&date=2024-09-20"
        );
    }

    #[test]
    fn test_export_url_omits_officer_for_aggregate() {
        assert_eq!(
            export_url("", ExportFormat::Excel, ALL_OFFICERS, sept_20()),
            "/api/export?format=excel&week=2024-09-20"
        );
        assert_eq!(
            export_url("", ExportFormat::Pdf, "Ochieng Stephen", sept_20()),
            "/api/export?format=pdf&officer=Ochieng%20Stephen&week=2024-09-20"
        );
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename(ALL_OFFICERS, sept_20(), ExportFormat::Excel),
            "PAR_overall_2024-09-20.xlsx"
        );
        assert_eq!(
            export_filename("Protus  Bwire\tWandera", sept_20(), ExportFormat::Png),
            "PAR_protus_bwire_wandera_2024-09-20.png"
        );
        assert_eq!(
            export_filename("Steve Kibor", sept_20(), ExportFormat::Pdf),
            "PAR_steve_kibor_2024-09-20.pdf"
        );
    }
}
