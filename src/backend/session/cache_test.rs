use tempfile::TempDir;
use uuid::Uuid;

use super::*;

fn sample_session() -> CachedSession {
    CachedSession {
        access_token: "access-token".to_string(),
        refresh_token: "refresh-token".to_string(),
        expires_at: Some(1_700_000_000),
        account: Account {
            id: Uuid::new_v4(),
            email: "sam@example.com".to_string(),
            display_name: Some("Sam".to_string()),
        },
    }
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let session = sample_session();

    session.save_to(dir.path()).await.unwrap();
    let loaded = CachedSession::load_from(dir.path()).await;

    assert_eq!(loaded, Some(session));
}

#[tokio::test]
async fn load_without_a_cache_file_is_none() {
    let dir = TempDir::new().unwrap();
    assert_eq!(CachedSession::load_from(dir.path()).await, None);
}

#[tokio::test]
async fn load_of_a_corrupt_cache_is_none() {
    let dir = TempDir::new().unwrap();
    tokio::fs::write(dir.path().join(SESSION_FILE), "{not json")
        .await
        .unwrap();
    assert_eq!(CachedSession::load_from(dir.path()).await, None);
}

#[tokio::test]
async fn hint_is_false_for_an_empty_dir() {
    let dir = TempDir::new().unwrap();
    assert!(!cached_credentials_present_in(dir.path()));
}

#[tokio::test]
async fn hint_sees_the_session_file() {
    let dir = TempDir::new().unwrap();
    sample_session().save_to(dir.path()).await.unwrap();
    assert!(cached_credentials_present_in(dir.path()));
}

#[tokio::test]
async fn hint_sees_the_legacy_marker_alone() {
    let dir = TempDir::new().unwrap();
    tokio::fs::write(dir.path().join(LEGACY_TOKEN_FILE), "old-token")
        .await
        .unwrap();
    assert!(cached_credentials_present_in(dir.path()));
}

#[tokio::test]
async fn hint_ignores_empty_marker_files() {
    let dir = TempDir::new().unwrap();
    tokio::fs::write(dir.path().join(SESSION_FILE), "").await.unwrap();
    assert!(!cached_credentials_present_in(dir.path()));
}

#[test]
fn hint_reads_a_missing_dir_as_false() {
    let dir = TempDir::new().unwrap();
    let gone = dir.path().join("never-created");
    assert!(!cached_credentials_present_in(&gone));
}

#[tokio::test]
async fn clear_removes_both_markers() {
    let dir = TempDir::new().unwrap();
    sample_session().save_to(dir.path()).await.unwrap();
    tokio::fs::write(dir.path().join(LEGACY_TOKEN_FILE), "old-token")
        .await
        .unwrap();

    clear_in(dir.path()).await.unwrap();

    assert!(!cached_credentials_present_in(dir.path()));
    assert_eq!(CachedSession::load_from(dir.path()).await, None);
}

#[tokio::test]
async fn clear_of_an_empty_dir_is_fine() {
    let dir = TempDir::new().unwrap();
    clear_in(dir.path()).await.unwrap();
}

#[test]
fn stored_expiry_decides_expiration() {
    let mut session = sample_session();
    session.expires_at = Some(1000);
    assert!(session.is_expired(1000));
    assert!(session.is_expired(950));
    assert!(!session.is_expired(1000 - EXPIRY_LEEWAY_SECS - 1));
}

#[test]
fn missing_expiry_falls_back_to_the_token() {
    let mut session = sample_session();
    session.expires_at = None;
    // Not a JWT at all: unreadable reads as expired.
    assert!(session.is_expired(0));
}
