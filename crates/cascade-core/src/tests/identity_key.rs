use crate::IdentityKey;

#[test]
fn given_email_identity_when_normalized_then_dots_and_at_become_underscores() {
    let key = IdentityKey::from_identity("a.b@example.com");

    assert_eq!(key.as_str(), "a_b_example_com");
}

#[test]
fn given_identity_without_unsafe_characters_when_normalized_then_unchanged() {
    let key = IdentityKey::from_identity("carol");

    assert_eq!(key.as_str(), "carol");
}

#[test]
fn given_key_when_file_name_requested_then_json_extension_appended() {
    let key = IdentityKey::from_identity("a.b@example.com");

    assert_eq!(key.file_name(), "a_b_example_com.json");
}

#[test]
fn given_key_when_displayed_then_shows_normalized_form() {
    let key = IdentityKey::from_identity("first.last@corp.example");

    assert_eq!(key.to_string(), "first_last_corp_example");
}
