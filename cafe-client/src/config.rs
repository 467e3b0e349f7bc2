//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

use chrono_tz::Tz;

/// Shortest allowed waitlist refresh period
pub const MIN_WAITLIST_REFRESH: Duration = Duration::from_secs(15);
/// Longest allowed waitlist refresh period
pub const MAX_WAITLIST_REFRESH: Duration = Duration::from_secs(30);
/// How often content documents are pulled from the backend
pub const DEFAULT_CONTENT_REFRESH: Duration = Duration::from_secs(5);

/// Client configuration for talking to the café backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CAFE_API_URL | http://localhost:8000 | Backend base URL |
/// | CAFE_API_TOKEN | - | Pre-issued bearer token |
/// | REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |
/// | CAFE_BRANCH_ID | 1 | Branch the views are scoped to |
/// | CAFE_TIMEZONE | Europe/Lisbon | Branch timezone for calendar days |
/// | WAITLIST_REFRESH_SECS | 15 | Waitlist refetch period (clamped 15–30) |
/// | CONTENT_REFRESH_SECS | 5 | Content document pull period |
/// | CONTENT_SNAPSHOT_PATH | - | File the content store persists to |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Branch the admin views are scoped to
    pub branch_id: i64,

    /// Branch timezone used for calendar day boundaries
    pub timezone: Tz,

    /// Waitlist data refresh period
    pub waitlist_refresh: Duration,

    /// Content document pull period
    pub content_refresh: Duration,

    /// Where the content store snapshot lives, if persisted
    pub content_snapshot_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a configuration with defaults for everything but the URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            branch_id: 1,
            timezone: shared::models::default_timezone(),
            waitlist_refresh: MIN_WAITLIST_REFRESH,
            content_refresh: DEFAULT_CONTENT_REFRESH,
            content_snapshot_path: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("CAFE_API_URL").unwrap_or_else(|_| "http://localhost:8000".into()),
        );
        config.token = std::env::var("CAFE_API_TOKEN").ok().filter(|t| !t.is_empty());
        config.timeout = parse_env("REQUEST_TIMEOUT_SECS", 30);
        config.branch_id = parse_env("CAFE_BRANCH_ID", 1);
        config.timezone = parse_env("CAFE_TIMEZONE", shared::models::default_timezone());
        config = config.with_refresh_interval(Duration::from_secs(parse_env(
            "WAITLIST_REFRESH_SECS",
            MIN_WAITLIST_REFRESH.as_secs(),
        )));
        config.content_refresh = Duration::from_secs(
            parse_env("CONTENT_REFRESH_SECS", DEFAULT_CONTENT_REFRESH.as_secs()).max(1),
        );
        config.content_snapshot_path = std::env::var("CONTENT_SNAPSHOT_PATH")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_branch(mut self, branch_id: i64) -> Self {
        self.branch_id = branch_id;
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Set the waitlist refresh period, clamped to 15–30 seconds
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.waitlist_refresh = interval.clamp(MIN_WAITLIST_REFRESH, MAX_WAITLIST_REFRESH);
        self
    }

    pub fn with_content_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_snapshot_path = Some(path.into());
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Invalid {key} value '{raw}': {e}, using default");
            default
        }),
        Err(_) => default,
    }
}
