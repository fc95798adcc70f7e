use cascade_db::AccountContext;

/// Creates an in-memory account database with schema applied
pub async fn create_test_context() -> AccountContext {
    AccountContext::connect_in_memory()
        .await
        .expect("Failed to create test database")
}
