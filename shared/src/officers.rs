use crate::models::ALL_OFFICERS;
use crate::samples;

/// Trim backend officer names, dropping blanks and repeats.
pub fn clean_officer_names(names: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.trim();
        if name.is_empty() || cleaned.iter().any(|n| n == name) {
            continue;
        }
        cleaned.push(name.to_string());
    }
    cleaned
}

/// Options for the officer selector: backend names first, then the
/// aggregate sentinel, then the embedded officers. First occurrence wins.
pub fn officer_options(backend_officers: &[String]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    let candidates = clean_officer_names(backend_officers)
        .into_iter()
        .chain(std::iter::once(ALL_OFFICERS.to_string()))
        .chain(samples::officer_names().map(str::to_string));

    for name in candidates {
        if !options.contains(&name) {
            options.push(name);
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_without_backend() {
        let options = officer_options(&[]);
        assert_eq!(
            options,
            vec![
                "All Officers",
                "Joseph Kiwia Mwanya",
                "Ochieng Stephen",
                "Steve Kibor",
                "Protus Bwire Wandera"
            ]
        );
    }

    #[test]
    fn test_backend_officers_come_first_without_duplicates() {
        let backend = vec![
            "Steve Kibor".to_string(),
            " Mary Wanjiku ".to_string(),
            "".to_string(),
            "Steve Kibor".to_string(),
        ];
        let options = officer_options(&backend);
        assert_eq!(options[0], "Steve Kibor");
        assert_eq!(options[1], "Mary Wanjiku");
        assert_eq!(options[2], ALL_OFFICERS);
        assert_eq!(options.iter().filter(|o| *o == "Steve Kibor").count(), 1);
        assert_eq!(options.len(), 6);
    }
}
