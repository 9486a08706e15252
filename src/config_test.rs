use super::*;

#[test]
fn defaults_match_backend_contract() {
    let config = AppConfig::default();
    assert_eq!(config.api_base_url, "/api");
    assert_eq!(config.token_storage_key, "admin_token");
    assert_eq!(config.login_path, "/admin/login");
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn base_url_trailing_slashes_are_trimmed() {
    assert_eq!(parse_base_url(Some("https://api.example.com/v1//")), "https://api.example.com/v1");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    assert_eq!(parse_base_url(Some("   ")), DEFAULT_API_BASE_URL);
    assert_eq!(parse_base_url(None), DEFAULT_API_BASE_URL);
}

#[test]
fn log_level_parses_case_insensitively() {
    assert_eq!(parse_log_level(Some("DEBUG")), log::Level::Debug);
    assert_eq!(parse_log_level(Some(" warn ")), log::Level::Warn);
}

#[test]
fn invalid_log_level_falls_back_to_default() {
    assert_eq!(parse_log_level(Some("chatty")), DEFAULT_LOG_LEVEL);
}

#[test]
fn from_values_keeps_storage_key_and_login_path() {
    let config = AppConfig::from_values(Some("http://localhost:8000/api/"), Some("error"));
    assert_eq!(config.api_base_url, "http://localhost:8000/api");
    assert_eq!(config.log_level, log::Level::Error);
    assert_eq!(config.token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
    assert_eq!(config.login_path, DEFAULT_LOGIN_PATH);
}
