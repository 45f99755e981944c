use super::*;

#[test]
fn validate_signup_input_builds_account_with_default_role() {
    let account = validate_signup_input(" alice ", " a@example.com ", "secret1", "secret1").unwrap();
    assert_eq!(account.username, "alice");
    assert_eq!(account.email, "a@example.com");
    assert_eq!(account.password, "secret1");
    assert_eq!(account.roles, vec!["User".to_owned()]);
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(validate_signup_input("", "a@b.c", "secret1", "secret1"), Err(MISSING_FIELDS));
    assert_eq!(validate_signup_input("a", "  ", "secret1", "secret1"), Err(MISSING_FIELDS));
    assert_eq!(validate_signup_input("a", "a@b.c", "secret1", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_signup_input_checks_in_form_order() {
    // Mismatch is reported before length.
    assert_eq!(validate_signup_input("a", "a@b.c", "abc", "abd"), Err(PASSWORD_MISMATCH));
    assert_eq!(validate_signup_input("a", "a@b.c", "abc", "abc"), Err(PASSWORD_TOO_SHORT));
    assert_eq!(validate_signup_input("a", "not-an-email", "secret1", "secret1"), Err(INVALID_EMAIL));
}

#[test]
fn validate_signup_input_accepts_exact_minimum_length() {
    assert!(validate_signup_input("a", "a@b.c", "123456", "123456").is_ok());
    assert_eq!(validate_signup_input("a", "a@b.c", "12345", "12345"), Err(PASSWORD_TOO_SHORT));
}
