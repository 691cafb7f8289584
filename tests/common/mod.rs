#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use fake::{
    faker::lorem::en::{Sentence, Word},
    Fake,
};
use inventory_api::{
    app_router,
    config::AppConfig,
    db::{self, DbPool},
    entities::{CategoryModel, GoodModel, UnitModel},
    repositories::{CreateCategoryParams, CreateGoodParams, CreateUnitParams},
    store::{SqlStore, Store},
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Helper harness for spinning up the application backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub store: Arc<SqlStore>,
    pub db: Arc<DbPool>,
}

impl TestApp {
    /// Construct a new test application with a fresh, migrated schema.
    pub async fn new() -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        // an in-memory database lives and dies with its single connection
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let db = Arc::new(pool);
        let store = Arc::new(SqlStore::new(db.clone()));
        let state = AppState::new(store.clone(), cfg);

        Self {
            router: app_router(state),
            store,
            db,
        }
    }

    /// Send a request against the router, with a JSON body when given.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    pub async fn seed_category(&self) -> CategoryModel {
        self.store
            .create_category(random_category())
            .await
            .expect("seed category")
    }

    pub async fn seed_unit(&self) -> UnitModel {
        self.store
            .create_unit(random_unit())
            .await
            .expect("seed unit")
    }

    pub async fn seed_good(&self, category: i64, unit: i64) -> GoodModel {
        self.store
            .create_good(random_good(category, unit))
            .await
            .expect("seed good")
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

pub fn random_category() -> CreateCategoryParams {
    CreateCategoryParams {
        category_name: Word().fake(),
        section_name: format!("{}{}", Word().fake::<String>(), (1..99).fake::<u8>()),
    }
}

pub fn random_unit() -> CreateUnitParams {
    CreateUnitParams {
        unit_name: Word().fake(),
        unit_value: (0..1_000).fake::<i64>(),
    }
}

pub fn random_good(category: i64, unit: i64) -> CreateGoodParams {
    CreateGoodParams {
        category,
        model: format!("{}-{}", Word().fake::<String>(), (100..999).fake::<u16>()),
        unit,
        amount: (1..10_000).fake::<i64>(),
        good_desc: Sentence(3..8).fake(),
    }
}
