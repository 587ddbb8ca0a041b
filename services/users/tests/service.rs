//! User service behavior independent of HTTP

mod support;

use std::sync::Arc;

use support::{Failure, FailingStore, MemoryUserStore};
use users::{error::ApiError, service::UserService};

#[tokio::test]
async fn test_create_then_list_includes_user() {
    let service = UserService::new(Arc::new(MemoryUserStore::default()));

    let user = service
        .create_user(br#"{"name":" Dana ","email":"  dana@example.com "}"#)
        .await
        .unwrap();

    assert!(user.id > 0);
    assert_eq!(user.name, "Dana");
    assert_eq!(user.email, "dana@example.com");
    assert!(user.created_at <= chrono::Utc::now());

    let users = service.list_users().await.unwrap();
    assert_eq!(users, vec![user]);
}

#[tokio::test]
async fn test_concurrent_duplicate_creation_has_single_winner() {
    let store = Arc::new(MemoryUserStore::default());
    let service = UserService::new(store.clone());
    let body = br#"{"name":"Eve","email":"eve@example.com"}"#;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.create_user(body).await })
        })
        .collect();

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(ApiError::Conflict(msg)) => {
                assert_eq!(msg, "Email already exists");
                conflicts += 1;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_ids_increase_and_are_not_reused() {
    let service = UserService::new(Arc::new(MemoryUserStore::default()));

    let first = service
        .create_user(br#"{"name":"A","email":"a@example.com"}"#)
        .await
        .unwrap();
    let _ = service
        .create_user(br#"{"name":"A again","email":"a@example.com"}"#)
        .await
        .unwrap_err();
    let second = service
        .create_user(br#"{"name":"B","email":"b@example.com"}"#)
        .await
        .unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_storage_errors_map_to_taxonomy() {
    let connection = UserService::new(Arc::new(FailingStore(Failure::Connection)));
    assert!(matches!(
        connection.list_users().await,
        Err(ApiError::Connection(_))
    ));

    let query = UserService::new(Arc::new(FailingStore(Failure::Query)));
    match query
        .create_user(br#"{"name":"F","email":"f@example.com"}"#)
        .await
    {
        Err(ApiError::Storage(msg, _)) => assert_eq!(msg, "Failed to create user"),
        other => panic!("expected storage error, got {other:?}"),
    }
}
