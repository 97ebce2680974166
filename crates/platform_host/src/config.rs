//! Backend endpoint configuration.

/// Base URL used when no build-time override is present.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Resolved backend endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("DESKTOP_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl ApiConfig {
    /// Creates a configuration for `base_url`, dropping trailing slashes.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn url_joins_without_duplicate_slashes() {
        let config = ApiConfig::new("http://127.0.0.1:5000/");
        assert_eq!(config.url("/users"), "http://127.0.0.1:5000/users");
        assert_eq!(config.url("history"), "http://127.0.0.1:5000/history");
    }
}
