use crate::{StateField, UserState};

use googletest::assert_that;
use googletest::prelude::{eq, ok};

// =========================================================================
// Wire Shape
// =========================================================================

#[test]
fn given_default_state_when_serialized_then_uses_camel_case_wire_name() {
    let state = UserState::default();

    let json = serde_json::to_string(&state).unwrap();

    assert_eq!(json, r#"{"canAccessConfigPage":false}"#);
}

#[test]
fn given_full_document_when_deserialized_then_fields_populated() {
    let state: UserState = serde_json::from_str(r#"{"canAccessConfigPage":true}"#).unwrap();

    assert!(state.can_access_config_page);
}

#[test]
fn given_empty_document_when_deserialized_then_all_fields_default() {
    let result = serde_json::from_str::<UserState>("{}");

    assert_that!(result, ok(eq(&UserState::default())));
}

#[test]
fn given_document_with_unknown_member_when_deserialized_then_member_ignored() {
    let state: UserState =
        serde_json::from_str(r#"{"canAccessConfigPage":true,"themeName":"dark"}"#).unwrap();

    assert!(state.can_access_config_page);
}

// =========================================================================
// Field Access
// =========================================================================

#[test]
fn given_new_value_when_set_then_reports_changed() {
    let mut state = UserState::default();

    let changed = state.set(StateField::CanAccessConfigPage, true);

    assert!(changed);
    assert!(state.get(StateField::CanAccessConfigPage));
}

#[test]
fn given_same_value_when_set_then_reports_unchanged() {
    let mut state = UserState::default();

    let changed = state.set(StateField::CanAccessConfigPage, false);

    assert!(!changed);
    assert_that!(state, eq(UserState::default()));
}

#[test]
fn given_record_when_applied_then_every_known_field_copied() {
    let mut live = UserState::default();
    let record = UserState {
        can_access_config_page: true,
    };

    live.apply(&record);

    assert_that!(live, eq(record));
}
