use std::sync::Arc;

use skinquiz::{catalog::Catalog, db::Db, AppState};

pub async fn create_test_db() -> Db {
    Db::new("sqlite::memory:")
        .await
        .expect("failed to create test database")
}

#[allow(dead_code)]
pub async fn create_test_state() -> AppState {
    AppState {
        db: create_test_db().await,
        catalog: Arc::new(Catalog::builtin().expect("builtin catalog should load")),
        secure_cookies: false,
    }
}
