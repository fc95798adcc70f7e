use crate::error::StoreError;
use crate::state_file::StateFile;

use cascade_core::{IdentityKey, UserState};
use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use tempfile::TempDir;

fn sample_key() -> IdentityKey {
    IdentityKey::from_identity("user@example.com")
}

#[test]
fn given_key_when_path_resolved_then_under_fixed_namespace() {
    let temp = TempDir::new().unwrap();
    let file = StateFile::new(temp.path());

    let path = file.path_for(&sample_key());

    assert_that!(
        path,
        eq(&temp
            .path()
            .join("Data")
            .join("TempAppState")
            .join("user_example_com.json"))
    );
}

#[tokio::test]
async fn given_no_record_when_read_then_none() {
    let temp = TempDir::new().unwrap();
    let file = StateFile::new(temp.path());

    let loaded = file.read(&sample_key()).await.unwrap();

    assert_that!(loaded, none());
}

#[tokio::test]
async fn given_written_record_when_read_then_round_trips() {
    let temp = TempDir::new().unwrap();
    let file = StateFile::new(temp.path());
    let state = UserState {
        can_access_config_page: true,
    };

    file.write(&sample_key(), &state).await.unwrap();
    let loaded = file.read(&sample_key()).await.unwrap();

    assert_that!(loaded, some(eq(state)));
}

#[tokio::test]
async fn given_missing_namespace_when_written_then_directories_created() {
    let temp = TempDir::new().unwrap();
    let file = StateFile::new(temp.path().join("nested").join("root"));

    file.write(&sample_key(), &UserState::default())
        .await
        .unwrap();

    assert!(file.path_for(&sample_key()).exists());
}

#[tokio::test]
async fn given_written_record_when_inspected_then_pretty_camel_case_json() {
    let temp = TempDir::new().unwrap();
    let file = StateFile::new(temp.path());
    let state = UserState {
        can_access_config_page: true,
    };

    file.write(&sample_key(), &state).await.unwrap();

    let contents = std::fs::read_to_string(file.path_for(&sample_key())).unwrap();
    assert!(contents.contains("\"canAccessConfigPage\": true"));
}

#[tokio::test]
async fn given_write_complete_when_dir_listed_then_no_temp_file_remains() {
    let temp = TempDir::new().unwrap();
    let file = StateFile::new(temp.path());

    file.write(&sample_key(), &UserState::default())
        .await
        .unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(file.namespace_dir())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "Expected no temp files: {leftovers:?}");
}

#[tokio::test]
async fn given_corrupted_record_when_read_then_decode_error() {
    let temp = TempDir::new().unwrap();
    let file = StateFile::new(temp.path());
    std::fs::create_dir_all(file.namespace_dir()).unwrap();
    std::fs::write(file.path_for(&sample_key()), "not json at all").unwrap();

    let result = file.read(&sample_key()).await;

    assert!(matches!(result, Err(StoreError::Decode { .. })));
}

#[tokio::test]
async fn given_existing_record_when_written_again_then_replaced() {
    let temp = TempDir::new().unwrap();
    let file = StateFile::new(temp.path());

    file.write(
        &sample_key(),
        &UserState {
            can_access_config_page: true,
        },
    )
    .await
    .unwrap();
    file.write(&sample_key(), &UserState::default())
        .await
        .unwrap();

    let loaded = file.read(&sample_key()).await.unwrap();
    assert_that!(loaded, some(eq(UserState::default())));
}

#[tokio::test]
async fn given_empty_object_record_when_read_then_defaults() {
    let temp = TempDir::new().unwrap();
    let file = StateFile::new(temp.path());
    std::fs::create_dir_all(file.namespace_dir()).unwrap();
    std::fs::write(file.path_for(&sample_key()), "{}").unwrap();

    let loaded = file.read(&sample_key()).await.unwrap();

    assert_that!(loaded, some(eq(UserState::default())));
}
