use super::*;

#[test]
fn from_values_defaults() {
    let cfg = ClientConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.auth_base_url, DEFAULT_AUTH_BASE_URL);
    assert_eq!(cfg.log_level, log::Level::Info);
}

#[test]
fn from_values_blank_strings_use_defaults() {
    let cfg = ClientConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn from_values_parses_overrides() {
    let cfg = ClientConfig::from_values(Some("https://auth.example.test/api/v1/user/"), Some("debug")).unwrap();
    assert_eq!(cfg.auth_base_url, "https://auth.example.test/api/v1/user");
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn root_relative_auth_url_is_accepted() {
    let cfg = ClientConfig::from_values(Some("/api/v1/user"), None).unwrap();
    assert_eq!(cfg.auth_base_url, "/api/v1/user");
}

#[test]
fn bare_host_auth_url_errors() {
    let err = ClientConfig::from_values(Some("localhost:3000"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidAuthUrl("localhost:3000".to_owned()));
    assert!(err.to_string().contains("COUNTRY_EXPLORER_AUTH_URL"));
}

#[test]
fn unknown_log_level_errors() {
    let err = ClientConfig::from_values(None, Some("loud")).unwrap_err();
    assert!(err.to_string().contains("unknown COUNTRY_EXPLORER_LOG_LEVEL"));
}

#[test]
fn from_env_matches_build_environment() {
    // The test binary is normally built without overrides.
    if option_env!("COUNTRY_EXPLORER_AUTH_URL").is_none() && option_env!("COUNTRY_EXPLORER_LOG_LEVEL").is_none() {
        assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());
    }
}
