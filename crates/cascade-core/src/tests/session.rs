use crate::{AuthSession, IdentityKey, StaticSession};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_authenticated_session_when_queried_then_reports_identity() {
    let session = StaticSession::authenticated("a.b@example.com");

    assert!(session.is_authenticated());
    assert_that!(session.identity_name(), some(eq("a.b@example.com")));
}

#[test]
fn given_anonymous_session_when_queried_then_no_identity() {
    let session = StaticSession::anonymous();

    assert!(!session.is_authenticated());
    assert_that!(session.identity_name(), none());
}

#[test]
fn given_authenticated_session_when_key_resolved_then_normalized() {
    let session = StaticSession::authenticated("a.b@example.com");

    assert_that!(
        session.identity_key(),
        some(eq(&IdentityKey::from_identity("a.b@example.com")))
    );
}

#[test]
fn given_anonymous_session_when_key_resolved_then_none() {
    let session = StaticSession::anonymous();

    assert_that!(session.identity_key(), none());
}

#[test]
fn given_authenticated_session_without_name_when_key_resolved_then_none() {
    // A session can claim authentication while exposing no stable name;
    // the key resolution must still degrade to None.
    struct Nameless;

    impl AuthSession for Nameless {
        fn is_authenticated(&self) -> bool {
            true
        }

        fn identity_name(&self) -> Option<String> {
            None
        }
    }

    assert_that!(Nameless.identity_key(), none());
}
