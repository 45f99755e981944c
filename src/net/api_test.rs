use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:3000/api/v1/user", "login"), "http://localhost:3000/api/v1/user/login");
    assert_eq!(endpoint("/api/v1/user", "/user-by"), "/api/v1/user/user-by");
}

#[test]
fn new_trims_trailing_slash() {
    let transport = HttpAuthTransport::new("http://localhost:3000/api/v1/user/");
    assert_eq!(transport.base_url(), "http://localhost:3000/api/v1/user");
}

#[test]
fn rejection_extracts_error_text() {
    assert_eq!(
        rejection(401, r#"{"error":"Invalid password"}"#),
        TransportError::Unauthorized { status: 401, message: Some("Invalid password".to_owned()) }
    );
}

#[test]
fn rejection_tolerates_non_json_body() {
    assert_eq!(
        rejection(502, "<html>Bad Gateway</html>"),
        TransportError::Unauthorized { status: 502, message: None }
    );
}

#[test]
fn token_from_requires_non_empty_token() {
    assert_eq!(token_from(TokenResponse { token: Some("t1".to_owned()) }), Ok("t1".to_owned()));
    assert!(matches!(token_from(TokenResponse { token: None }), Err(TransportError::Malformed(_))));
    assert!(matches!(token_from(TokenResponse { token: Some(" ".to_owned()) }), Err(TransportError::Malformed(_))));
}

#[test]
fn user_from_requires_user_object() {
    assert!(matches!(user_from(UserEnvelope { user: None }), Err(TransportError::Malformed(_))));
}

#[test]
fn bearer_round_trips_through_default_header() {
    let transport = HttpAuthTransport::new("/api");
    assert_eq!(transport.authorization(), None);
    transport.set_bearer(Some("tok"));
    assert_eq!(transport.authorization().as_deref(), Some("Bearer tok"));
    transport.set_bearer(None);
    assert_eq!(transport.authorization(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn calls_fail_as_network_errors_outside_browser() {
    let transport = HttpAuthTransport::new("/api");
    let err = futures::executor::block_on(transport.login("u", "p")).unwrap_err();
    assert!(err.retryable());
}

#[test]
fn fetch_current_user_rejects_blank_token_without_request() {
    let transport = HttpAuthTransport::new("/api");
    let err = futures::executor::block_on(transport.fetch_current_user("")).unwrap_err();
    assert_eq!(err, TransportError::Unauthorized { status: 401, message: None });
}
