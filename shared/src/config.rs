/// Dashboard-wide settings, decided once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Explicit API base, wins over every heuristic when set
    pub api_base_override: Option<String>,
    /// Base used when the page itself is served from a development host
    pub local_api_base: String,
    pub local_hosts: Vec<String>,
    pub currency_prefix: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_override: None,
            local_api_base: "http://127.0.0.1:10000".to_string(),
            local_hosts: vec!["localhost".to_string(), "127.0.0.1".to_string()],
            currency_prefix: "KES".to_string(),
        }
    }
}

/// Which rule produced the API base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiBaseSource {
    Override,
    LocalHost,
    SameOrigin,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiBase {
    /// Base URL without a trailing slash; empty means same origin
    pub url: String,
    pub source: ApiBaseSource,
}

impl DashboardConfig {
    /// Default config with an optional override, typically the
    /// `PAR_API_BASE` value baked in at build time. Blank overrides are
    /// ignored.
    pub fn with_override(api_base: Option<&str>) -> Self {
        let api_base_override = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self {
            api_base_override,
            ..Self::default()
        }
    }

    /// Explicit override, then the localhost heuristic, then same origin.
    pub fn resolve_api_base(&self, page_hostname: &str) -> ApiBase {
        if let Some(url) = &self.api_base_override {
            return ApiBase {
                url: url.trim_end_matches('/').to_string(),
                source: ApiBaseSource::Override,
            };
        }

        if self.local_hosts.iter().any(|h| h == page_hostname) {
            return ApiBase {
                url: self.local_api_base.trim_end_matches('/').to_string(),
                source: ApiBaseSource::LocalHost,
            };
        }

        ApiBase {
            url: String::new(),
            source: ApiBaseSource::SameOrigin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let config = DashboardConfig::with_override(Some("https://par.example.com/"));
        let base = config.resolve_api_base("localhost");
        assert_eq!(base.url, "https://par.example.com");
        assert_eq!(base.source, ApiBaseSource::Override);
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = DashboardConfig::with_override(Some("   "));
        assert_eq!(config.api_base_override, None);
        assert_eq!(config.resolve_api_base("localhost").source, ApiBaseSource::LocalHost);
    }

    #[test]
    fn test_localhost_heuristic() {
        let config = DashboardConfig::default();
        let base = config.resolve_api_base("127.0.0.1");
        assert_eq!(base.url, "http://127.0.0.1:10000");
        assert_eq!(base.source, ApiBaseSource::LocalHost);
    }

    #[test]
    fn test_same_origin_otherwise() {
        let base = DashboardConfig::default().resolve_api_base("par.example.com");
        assert_eq!(base.url, "");
        assert_eq!(base.source, ApiBaseSource::SameOrigin);
    }
}
