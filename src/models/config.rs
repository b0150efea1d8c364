//! Application configuration structures.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "API_URL";

/// Legacy name of the API base URL variable, still honoured.
pub const LEGACY_API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

/// Environment variable overriding `server.bind`.
pub const BIND_ADDR_ENV: &str = "BIND_ADDR";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend CMS API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Branding shown in page chrome
    #[serde(default)]
    pub site: SiteConfig,

    /// SEO record ids per page
    #[serde(default)]
    pub seo: SeoConfig,

    /// Page sizes and result limits
    #[serde(default)]
    pub listing: ListingConfig,

    /// Search box behavior
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let api_url = lookup(API_URL_ENV)
            .or_else(|| lookup(LEGACY_API_URL_ENV))
            .filter(|v| !v.trim().is_empty());
        if let Some(url) = api_url {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(bind) = lookup(BIND_ADDR_ENV).filter(|v| !v.trim().is_empty()) {
            self.server.bind = bind.trim().to_string();
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::validation("api.base_url is empty"));
        }
        url::Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is not a URL: {e}")))?;
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.server.bind.trim().is_empty() {
            return Err(AppError::validation("server.bind is empty"));
        }
        if self.listing.blog_page_size == 0 {
            return Err(AppError::validation("listing.blog_page_size must be > 0"));
        }
        if self.listing.course_page_size == 0 {
            return Err(AppError::validation(
                "listing.course_page_size must be > 0",
            ));
        }
        if self.listing.suggestion_limit == 0 {
            return Err(AppError::validation(
                "listing.suggestion_limit must be > 0",
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            seo: SeoConfig::default(),
            listing: ListingConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

/// Backend CMS API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for backend requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "defaults::bind")]
    pub bind: String,

    /// Public origin used for canonical and Open Graph URLs
    #[serde(default = "defaults::site_url")]
    pub site_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: defaults::bind(),
            site_url: defaults::site_url(),
        }
    }
}

/// Branding shown in page chrome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Institute name
    #[serde(default = "defaults::site_name")]
    pub name: String,

    /// Logo used when the header settings carry none
    #[serde(default = "defaults::logo")]
    pub logo: String,

    /// Phone number sent with footer newsletter sign-ups
    #[serde(default = "defaults::newsletter_phone")]
    pub newsletter_phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: defaults::site_name(),
            logo: defaults::logo(),
            newsletter_phone: defaults::newsletter_phone(),
        }
    }
}

/// SEO record id for each page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoConfig {
    #[serde(default = "defaults::seo_home")]
    pub home: u32,
    #[serde(default = "defaults::seo_courses")]
    pub courses: u32,
    #[serde(default = "defaults::seo_corporate_training")]
    pub corporate_training: u32,
    #[serde(default = "defaults::seo_on_job_support")]
    pub on_job_support: u32,
    #[serde(default = "defaults::seo_about")]
    pub about: u32,
    #[serde(default = "defaults::seo_blog")]
    pub blog: u32,
    #[serde(default = "defaults::seo_contact")]
    pub contact: u32,
    #[serde(default = "defaults::seo_terms")]
    pub terms: u32,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            home: defaults::seo_home(),
            courses: defaults::seo_courses(),
            corporate_training: defaults::seo_corporate_training(),
            on_job_support: defaults::seo_on_job_support(),
            about: defaults::seo_about(),
            blog: defaults::seo_blog(),
            contact: defaults::seo_contact(),
            terms: defaults::seo_terms(),
        }
    }
}

/// Page sizes and result limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Blog cards per page
    #[serde(default = "defaults::blog_page_size")]
    pub blog_page_size: usize,

    /// Course cards per carousel page
    #[serde(default = "defaults::course_page_size")]
    pub course_page_size: usize,

    /// Recent blogs shown on home and blog detail pages
    #[serde(default = "defaults::recent_blogs")]
    pub recent_blogs: usize,

    /// Skill suggestions returned by the search box
    #[serde(default = "defaults::suggestion_limit")]
    pub suggestion_limit: usize,

    /// Blog title suggestions
    #[serde(default = "defaults::blog_suggestion_limit")]
    pub blog_suggestion_limit: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            blog_page_size: defaults::blog_page_size(),
            course_page_size: defaults::course_page_size(),
            recent_blogs: defaults::recent_blogs(),
            suggestion_limit: defaults::suggestion_limit(),
            blog_suggestion_limit: defaults::blog_suggestion_limit(),
        }
    }
}

/// Search box behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Keystroke debounce before asking for suggestions
    #[serde(default = "defaults::debounce_ms")]
    pub debounce_ms: u64,

    /// Short query aliases, e.g. `ml` -> `Machine Learning`
    #[serde(default = "defaults::aliases")]
    pub aliases: HashMap<String, String>,

    /// Terms that earn a ranking boost on the home page
    #[serde(default = "defaults::boost_terms")]
    pub boost_terms: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: defaults::debounce_ms(),
            aliases: defaults::aliases(),
            boost_terms: defaults::boost_terms(),
        }
    }
}

mod defaults {
    use std::collections::HashMap;

    // API defaults
    pub fn base_url() -> String {
        "http://127.0.0.1:8000/api".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; catalog-site/0.1)".into()
    }
    pub fn timeout() -> u64 {
        10
    }

    // Server defaults
    pub fn bind() -> String {
        "127.0.0.1:3000".into()
    }
    pub fn site_url() -> String {
        "http://127.0.0.1:3000".into()
    }

    // Branding defaults
    pub fn site_name() -> String {
        "Course Catalog".into()
    }
    pub fn logo() -> String {
        "/logo.png".into()
    }
    pub fn newsletter_phone() -> String {
        "+91 9999999999".into()
    }

    // SEO record ids
    pub fn seo_home() -> u32 {
        1
    }
    pub fn seo_courses() -> u32 {
        2
    }
    pub fn seo_corporate_training() -> u32 {
        3
    }
    pub fn seo_on_job_support() -> u32 {
        4
    }
    pub fn seo_about() -> u32 {
        5
    }
    pub fn seo_blog() -> u32 {
        6
    }
    pub fn seo_contact() -> u32 {
        7
    }
    pub fn seo_terms() -> u32 {
        8
    }

    // Listing defaults
    pub fn blog_page_size() -> usize {
        9
    }
    pub fn course_page_size() -> usize {
        3
    }
    pub fn recent_blogs() -> usize {
        6
    }
    pub fn suggestion_limit() -> usize {
        15
    }
    pub fn blog_suggestion_limit() -> usize {
        10
    }

    // Search defaults
    pub fn debounce_ms() -> u64 {
        200
    }
    pub fn aliases() -> HashMap<String, String> {
        [
            ("ml", "Machine Learning"),
            ("ai", "Artificial Intelligence"),
            ("dl", "Deep Learning"),
            ("ds", "Data Science"),
            ("cv", "Computer Vision"),
            ("gcp", "Google Cloud"),
            ("reactjs", "React"),
            ("nextjs", "Next.js"),
            ("node", "Node.js"),
            ("laravel", "PHP Laravel"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }
    pub fn boost_terms() -> Vec<String> {
        vec!["aws".into(), "sap".into(), "data".into(), "cloud".into()]
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.api.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_relative_base_url() {
        let mut config = Config::default();
        config.api.base_url = "/api".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.listing.blog_page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://cms.example.com/api\"\n\n[listing]\nblog_page_size = 12"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://cms.example.com/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.listing.blog_page_size, 12);
        assert_eq!(config.listing.course_page_size, 3);
        assert_eq!(config.seo.blog, 6);
        assert_eq!(
            config.search.aliases.get("ml").map(String::as_str),
            Some("Machine Learning")
        );
    }

    #[test]
    fn sample_config_lists_default_aliases() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("site.toml");
        let config = Config::load(path).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.aliases, defaults::aliases());
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(Config::load(&path).is_err());
        let config = Config::load_or_default(&path);
        assert_eq!(config.listing.suggestion_limit, 15);
    }

    #[test]
    fn env_override_prefers_api_url() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            API_URL_ENV => Some("https://new.example.com/api".to_string()),
            LEGACY_API_URL_ENV => Some("https://old.example.com/api".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "https://new.example.com/api");
    }

    #[test]
    fn env_override_falls_back_to_legacy_name() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            LEGACY_API_URL_ENV => Some("https://old.example.com/api".to_string()),
            BIND_ADDR_ENV => Some("0.0.0.0:8080".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "https://old.example.com/api");
        assert_eq!(config.server.bind, "0.0.0.0:8080");
    }
}
