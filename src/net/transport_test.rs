use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header(Some("abc")), Some("Bearer abc".to_owned()));
}

#[test]
fn bearer_header_omits_absent_or_blank_token() {
    assert_eq!(bearer_header(None), None);
    assert_eq!(bearer_header(Some("")), None);
    assert_eq!(bearer_header(Some("   ")), None);
}

#[test]
fn only_network_errors_are_retryable() {
    assert!(TransportError::Network("offline".into()).retryable());
    assert!(!TransportError::Unauthorized { status: 401, message: None }.retryable());
    assert!(!TransportError::Malformed("no token".into()).retryable());
}

#[test]
fn user_message_prefers_server_error_text() {
    let err = TransportError::Unauthorized { status: 400, message: Some("Username already exists".into()) };
    assert_eq!(err.user_message("Failed to signup"), "Username already exists");
}

#[test]
fn user_message_for_bare_rejection_is_invalid_credentials() {
    let err = TransportError::Unauthorized { status: 401, message: Some("  ".into()) };
    assert_eq!(err.user_message("Failed to login"), REJECTED_MESSAGE);
}

#[test]
fn user_message_distinguishes_network_and_malformed() {
    assert_eq!(TransportError::Network("x".into()).user_message("Failed to login"), NETWORK_FAILURE_MESSAGE);
    assert_eq!(TransportError::Malformed("x".into()).user_message("Failed to login"), "Failed to login");
}

#[test]
fn display_includes_status() {
    let err = TransportError::Unauthorized { status: 403, message: None };
    assert_eq!(err.to_string(), "rejected by identity service: status 403");
}
