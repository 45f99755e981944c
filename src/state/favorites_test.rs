use super::*;
use serde_json::json;

fn country(code: &str, name: &str) -> FavoriteEntry {
    FavoriteEntry::from_value(json!({"name": name, "alpha3Code": code})).unwrap()
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn from_json_loads_valid_array() {
    let favorites = Favorites::from_json(r#"[{"name":"Test","alpha3Code":"TST"}]"#);
    assert_eq!(favorites.len(), 1);
    assert!(favorites.contains("TST"));
}

#[test]
fn from_json_malformed_is_empty() {
    assert!(Favorites::from_json("{not json").is_empty());
    assert!(Favorites::from_json("").is_empty());
}

#[test]
fn from_json_non_array_is_empty() {
    assert!(Favorites::from_json(r#"{"alpha3Code":"TST"}"#).is_empty());
    assert!(Favorites::from_json("null").is_empty());
}

#[test]
fn from_json_drops_keyless_entries_and_duplicates() {
    let favorites = Favorites::from_json(
        r#"[{"name":"A","cca3":"AAA"},{"name":"nameless"},{"name":"A again","alpha3Code":"AAA"},{"cca3":"BBB"}]"#,
    );
    let codes: Vec<&str> = favorites.iter().map(FavoriteEntry::code).collect();
    assert_eq!(codes, vec!["AAA", "BBB"]);
    assert_eq!(favorites.as_slice()[0].name(), Some("A"));
}

// =============================================================
// Set operations
// =============================================================

#[test]
fn insert_rejects_duplicate_code() {
    let mut favorites = Favorites::new();
    assert!(favorites.insert(country("TST", "Test")));
    assert!(!favorites.insert(country("TST", "Test again")));
    assert_eq!(favorites.len(), 1);
}

#[test]
fn remove_absent_code_is_noop() {
    let mut favorites = Favorites::new();
    favorites.insert(country("TST", "Test"));
    let before = favorites.clone();
    assert!(!favorites.remove("NOPE"));
    assert_eq!(favorites, before);
}

#[test]
fn remove_keeps_order_of_remaining_entries() {
    let mut favorites = Favorites::new();
    favorites.insert(country("AAA", "A"));
    favorites.insert(country("BBB", "B"));
    favorites.insert(country("CCC", "C"));
    assert!(favorites.remove("BBB"));
    let codes: Vec<&str> = favorites.iter().map(FavoriteEntry::code).collect();
    assert_eq!(codes, vec!["AAA", "CCC"]);
}

#[test]
fn to_json_of_empty_collection_is_empty_array() {
    assert_eq!(Favorites::new().to_json().unwrap(), "[]");
}

#[test]
fn to_json_reloads_to_same_collection() {
    let mut favorites = Favorites::new();
    favorites.insert(country("AAA", "A"));
    favorites.insert(country("BBB", "B"));
    let reloaded = Favorites::from_json(&favorites.to_json().unwrap());
    assert_eq!(reloaded, favorites);
}
