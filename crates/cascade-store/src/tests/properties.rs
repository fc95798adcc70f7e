use crate::StoreConfig;
use crate::user_state_store::UserStateStore;

use std::sync::Arc;

use cascade_core::{AuthSession, StateField, StaticSession};
use proptest::prelude::*;
use tempfile::TempDir;

// =========================================================================
// Property-Based Tests - Durability Round Trip
// =========================================================================

proptest! {
    #[test]
    fn given_any_toggle_sequence_when_flushed_then_fresh_store_loads_same_state(
        values in prop::collection::vec(any::<bool>(), 1..16)
    ) {
        let temp = TempDir::new().unwrap();
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let (live, reloaded) = rt.block_on(async {
            let config = StoreConfig::default();
            let session: Arc<dyn AuthSession> =
                Arc::new(StaticSession::authenticated("prop@example.com"));

            let store = UserStateStore::new(session.clone(), temp.path(), &config);
            for value in &values {
                store.set_flag(StateField::CanAccessConfigPage, *value);
            }
            store.flush().await.unwrap();
            let live = store.state();

            let fresh = UserStateStore::new(session, temp.path(), &config);
            fresh.ensure_loaded().await;
            (live, fresh.state())
        });

        prop_assert_eq!(live, reloaded);
    }
}
