use super::*;
use serde_json::json;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_accepts_integer_id() {
    let user: UserProfile = serde_json::from_value(json!({"id": 1, "username": "alice"})).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, None);
    assert!(user.role.is_empty());
}

#[test]
fn user_profile_accepts_mongo_object_id_alias() {
    let user: UserProfile = serde_json::from_value(json!({
        "_id": "65f0c0ffee",
        "username": "bob",
        "email": "bob@example.com",
        "role": ["User", "Admin"]
    }))
    .unwrap();
    assert_eq!(user.id, "65f0c0ffee");
    assert_eq!(user.email.as_deref(), Some("bob@example.com"));
    assert!(user.has_role("Admin"));
    assert!(!user.has_role("Owner"));
}

#[test]
fn user_profile_rejects_missing_username() {
    let parsed = serde_json::from_value::<UserProfile>(json!({"id": 1}));
    assert!(parsed.is_err());
}

#[test]
fn user_profile_rejects_empty_string_id() {
    let parsed = serde_json::from_value::<UserProfile>(json!({"id": "", "username": "x"}));
    assert!(parsed.is_err());
}

#[test]
fn user_envelope_reads_capitalized_user_key() {
    let env: UserEnvelope = serde_json::from_value(json!({"User": {"id": 7, "username": "c"}})).unwrap();
    assert_eq!(env.user.unwrap().id, "7");

    let empty: UserEnvelope = serde_json::from_value(json!({"user": {"id": 7}})).unwrap();
    assert!(empty.user.is_none());
}

// =============================================================
// NewAccount / SignupRequest
// =============================================================

#[test]
fn new_account_defaults_to_user_role() {
    let account = NewAccount::new("alice", "a@example.com", "secret1");
    assert_eq!(account.roles, vec!["User".to_owned()]);
}

#[test]
fn signup_request_serializes_role_field() {
    let account = NewAccount::new("alice", "a@example.com", "secret1").with_roles(["Admin"]);
    let body = serde_json::to_value(SignupRequest::from(&account)).unwrap();
    assert_eq!(
        body,
        json!({"username": "alice", "email": "a@example.com", "password": "secret1", "role": ["Admin"]})
    );
}

// =============================================================
// FavoriteEntry
// =============================================================

#[test]
fn favorite_entry_keys_on_alpha3_code() {
    let entry: FavoriteEntry = serde_json::from_value(json!({"name": "Test", "alpha3Code": "TST"})).unwrap();
    assert_eq!(entry.code(), "TST");
    assert_eq!(entry.name(), Some("Test"));
}

#[test]
fn favorite_entry_prefers_cca3_and_reads_common_name() {
    let entry = FavoriteEntry::from_value(json!({
        "name": {"common": "Norway", "official": "Kingdom of Norway"},
        "cca3": "NOR",
        "alpha3Code": "XXX"
    }))
    .unwrap();
    assert_eq!(entry.code(), "NOR");
    assert_eq!(entry.name(), Some("Norway"));
}

#[test]
fn favorite_entry_rejects_records_without_code() {
    assert_eq!(
        FavoriteEntry::from_value(json!({"name": "Nowhere"})),
        Err(InvalidFavorite::MissingCode)
    );
    assert_eq!(FavoriteEntry::from_value(json!({"cca3": ""})), Err(InvalidFavorite::MissingCode));
    assert_eq!(FavoriteEntry::from_value(json!("TST")), Err(InvalidFavorite::MissingCode));
}

#[test]
fn favorite_entry_serializes_record_verbatim() {
    let raw = json!({"name": "Test", "alpha3Code": "TST", "population": 42});
    let entry = FavoriteEntry::from_value(raw.clone()).unwrap();
    assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
}
