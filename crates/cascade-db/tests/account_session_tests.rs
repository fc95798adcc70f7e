use cascade_core::AuthSession;
use cascade_db::{Account, AccountSession};

use googletest::prelude::*;

#[test]
fn given_new_session_when_queried_then_anonymous() {
    let session = AccountSession::new();

    assert!(!session.is_authenticated());
    assert_that!(session.identity_name(), none());
    assert_that!(session.identity_key(), none());
    assert_that!(session.current(), none());
}

#[test]
fn given_signed_in_account_when_queried_then_identity_exposed() {
    let session = AccountSession::new();
    let account = Account::new("a.b@example.com");

    session.sign_in(account.clone());

    assert!(session.is_authenticated());
    assert_that!(
        session.identity_name(),
        some(eq(&"a.b@example.com".to_string()))
    );
    assert_that!(session.current(), some(eq(&account)));
}

#[test]
fn given_signed_in_account_when_key_derived_then_email_normalized() {
    let session = AccountSession::new();
    session.sign_in(Account::new("a.b@example.com"));

    let key = session.identity_key().unwrap();

    assert_that!(key.as_str(), eq("a_b_example_com"));
}

#[test]
fn given_signed_out_session_when_queried_then_anonymous_again() {
    let session = AccountSession::new();
    session.sign_in(Account::new("leaver@example.com"));

    session.sign_out();

    assert!(!session.is_authenticated());
    assert_that!(session.identity_name(), none());
}

#[test]
fn given_replacement_sign_in_when_queried_then_latest_identity_wins() {
    let session = AccountSession::new();
    session.sign_in(Account::new("first@example.com"));

    session.sign_in(Account::new("second@example.com"));

    assert_that!(
        session.identity_name(),
        some(eq(&"second@example.com".to_string()))
    );
}
