//! End-to-end checks against a live PostgreSQL database
//!
//! Run with `cargo test -p users -- --ignored` and the `DB_*` variables
//! pointing at a disposable database.

use std::sync::Arc;

use common::database::{DatabaseConfig, ensure_schema, init_pool};
use users::{error::ApiError, repositories::PgUserRepository, service::UserService};

async fn service() -> UserService {
    let config = DatabaseConfig::from_env().expect("database config");
    let pool = init_pool(&config).await.expect("database pool");
    ensure_schema(&pool).await.expect("schema");
    UserService::new(Arc::new(PgUserRepository::new(pool)))
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_postgres_create_list_and_conflict() {
    let service = service().await;
    let email = format!("pg-{}@example.com", std::process::id());
    let body = format!(r#"{{"name":"  Pat  ","email":"{email}"}}"#);

    let user = service.create_user(body.as_bytes()).await.unwrap();
    assert!(user.id > 0);
    assert_eq!(user.name, "Pat");

    let listed = service.list_users().await.unwrap();
    assert!(listed.iter().any(|u| u.id == user.id));
    assert!(listed.windows(2).all(|w| w[0].id > w[1].id));

    let duplicate = service.create_user(body.as_bytes()).await;
    assert!(matches!(duplicate, Err(ApiError::Conflict(_))));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_postgres_concurrent_duplicates() {
    let service = service().await;
    let email = format!("race-{}@example.com", std::process::id());
    let body = format!(r#"{{"name":"Racer","email":"{email}"}}"#);

    let (a, b) = tokio::join!(
        service.create_user(body.as_bytes()),
        service.create_user(body.as_bytes())
    );

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(successes, 1);
}
