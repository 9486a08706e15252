//! Build-time client configuration.
//!
//! The browser bundle has no process environment, so values are baked in at
//! compile time through `option_env!` and fall back to defaults when absent or
//! unparseable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "admin_token";
pub const DEFAULT_LOGIN_PATH: &str = "/admin/login";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix joined in front of every admin endpoint path, without trailing `/`.
    pub api_base_url: String,
    /// Local-storage key holding the raw bearer token.
    pub token_storage_key: String,
    /// Where the guard sends unauthenticated navigations.
    pub login_path: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `BOOKING_ADMIN_API_BASE_URL`: default `/api`
    /// - `BOOKING_ADMIN_LOG_LEVEL`: `error`..`trace`, default `info`
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BOOKING_ADMIN_API_BASE_URL"),
            option_env!("BOOKING_ADMIN_LOG_LEVEL"),
        )
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base_url: parse_base_url(base_url),
            log_level: parse_log_level(log_level),
            ..Self::default()
        }
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
