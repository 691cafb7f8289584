//! Store facade: one object exposing every query the service runs.
//!
//! Handlers depend on the [`Store`] trait through `AppState`, which keeps the
//! transport layer testable against a mock. [`SqlStore`] is the relational
//! implementation; it holds nothing but the shared connection pool.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use metrics::{counter, histogram};
use sea_orm::DatabaseTransaction;
use tracing::{debug, instrument, warn};

use crate::db::{transaction::BoxFuture, with_transaction, DbPool};
use crate::entities::{CategoryModel, GoodModel, UnitModel};
use crate::errors::{ErrorKind, ServiceError};
use crate::repositories::{
    CreateCategoryParams, CreateGoodParams, CreateUnitParams, ListCategoriesParams,
    ListGoodsParams, ListUnitsParams, Queries, UpdateCategoryParams, UpdateGoodParams,
    UpdateUnitParams,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_category(
        &self,
        params: CreateCategoryParams,
    ) -> Result<CategoryModel, ServiceError>;
    async fn get_category(&self, id: i64) -> Result<CategoryModel, ServiceError>;
    async fn list_categories(
        &self,
        params: ListCategoriesParams,
    ) -> Result<Vec<CategoryModel>, ServiceError>;
    async fn update_category(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<CategoryModel, ServiceError>;
    async fn delete_category(&self, id: i64) -> Result<(), ServiceError>;

    async fn create_unit(&self, params: CreateUnitParams) -> Result<UnitModel, ServiceError>;
    async fn get_unit(&self, id: i64) -> Result<UnitModel, ServiceError>;
    async fn list_units(&self, params: ListUnitsParams) -> Result<Vec<UnitModel>, ServiceError>;
    async fn update_unit(&self, params: UpdateUnitParams) -> Result<UnitModel, ServiceError>;
    async fn delete_unit(&self, id: i64) -> Result<(), ServiceError>;

    async fn create_good(&self, params: CreateGoodParams) -> Result<GoodModel, ServiceError>;
    async fn get_good(&self, id: i64) -> Result<GoodModel, ServiceError>;
    async fn list_goods(&self, params: ListGoodsParams) -> Result<Vec<GoodModel>, ServiceError>;
    async fn update_good(&self, params: UpdateGoodParams) -> Result<GoodModel, ServiceError>;
    async fn delete_good(&self, id: i64) -> Result<(), ServiceError>;

    /// Round trip to the backing store, used by the health endpoint.
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// [`Store`] over a sea-orm connection pool.
#[derive(Debug, Clone)]
pub struct SqlStore {
    db: Arc<DbPool>,
}

impl SqlStore {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Underlying connection handle
    pub fn connection(&self) -> &DbPool {
        &self.db
    }

    fn queries(&self) -> Queries<'_, DbPool> {
        Queries::new(self.db.as_ref())
    }

    /// Runs a multi-step unit of work in one transaction.
    ///
    /// `f` receives the repositories bound to the transaction. The transaction
    /// commits when `f` returns `Ok` and rolls back on any `Err`, leaving no
    /// partial writes behind.
    pub async fn exec_tx<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: for<'a> FnOnce(Queries<'a, DatabaseTransaction>) -> BoxFuture<'a, Result<T, ServiceError>>
            + Send,
        T: Send,
    {
        observe(
            "exec_tx",
            with_transaction(self.db.as_ref(), |txn| f(Queries::new(txn))),
        )
        .await
    }
}

/// Records duration and outcome of one store call.
async fn observe<T, Fut>(operation: &'static str, fut: Fut) -> Result<T, ServiceError>
where
    Fut: Future<Output = Result<T, ServiceError>>,
{
    let start = Instant::now();
    let result = fut.await;
    let elapsed = start.elapsed();

    histogram!(
        "inventory_store.duration_seconds",
        elapsed.as_secs_f64(),
        "operation" => operation,
    );

    match &result {
        Ok(_) => {
            debug!(operation, elapsed_ms = elapsed.as_millis() as u64, "store call completed");
        }
        Err(err) => {
            let kind = match err.kind() {
                ErrorKind::Validation => "validation",
                ErrorKind::NotFound => "not_found",
                ErrorKind::Internal => "internal",
            };
            counter!(
                "inventory_store.errors_total",
                1,
                "operation" => operation,
                "kind" => kind,
            );
            if err.kind() == ErrorKind::Internal {
                warn!(operation, error = %err, "store call failed");
            } else {
                debug!(operation, error = %err, "store call returned no result");
            }
        }
    }

    result
}

#[async_trait]
impl Store for SqlStore {
    #[instrument(skip(self))]
    async fn create_category(
        &self,
        params: CreateCategoryParams,
    ) -> Result<CategoryModel, ServiceError> {
        observe("create_category", self.queries().categories.create(params)).await
    }

    #[instrument(skip(self))]
    async fn get_category(&self, id: i64) -> Result<CategoryModel, ServiceError> {
        observe("get_category", self.queries().categories.get(id)).await
    }

    #[instrument(skip(self))]
    async fn list_categories(
        &self,
        params: ListCategoriesParams,
    ) -> Result<Vec<CategoryModel>, ServiceError> {
        observe("list_categories", self.queries().categories.list(params)).await
    }

    #[instrument(skip(self))]
    async fn update_category(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<CategoryModel, ServiceError> {
        observe("update_category", self.queries().categories.update(params)).await
    }

    #[instrument(skip(self))]
    async fn delete_category(&self, id: i64) -> Result<(), ServiceError> {
        observe("delete_category", self.queries().categories.delete(id)).await
    }

    #[instrument(skip(self))]
    async fn create_unit(&self, params: CreateUnitParams) -> Result<UnitModel, ServiceError> {
        observe("create_unit", self.queries().units.create(params)).await
    }

    #[instrument(skip(self))]
    async fn get_unit(&self, id: i64) -> Result<UnitModel, ServiceError> {
        observe("get_unit", self.queries().units.get(id)).await
    }

    #[instrument(skip(self))]
    async fn list_units(&self, params: ListUnitsParams) -> Result<Vec<UnitModel>, ServiceError> {
        observe("list_units", self.queries().units.list(params)).await
    }

    #[instrument(skip(self))]
    async fn update_unit(&self, params: UpdateUnitParams) -> Result<UnitModel, ServiceError> {
        observe("update_unit", self.queries().units.update(params)).await
    }

    #[instrument(skip(self))]
    async fn delete_unit(&self, id: i64) -> Result<(), ServiceError> {
        observe("delete_unit", self.queries().units.delete(id)).await
    }

    #[instrument(skip(self))]
    async fn create_good(&self, params: CreateGoodParams) -> Result<GoodModel, ServiceError> {
        observe("create_good", self.queries().goods.create(params)).await
    }

    #[instrument(skip(self))]
    async fn get_good(&self, id: i64) -> Result<GoodModel, ServiceError> {
        observe("get_good", self.queries().goods.get(id)).await
    }

    #[instrument(skip(self))]
    async fn list_goods(&self, params: ListGoodsParams) -> Result<Vec<GoodModel>, ServiceError> {
        observe("list_goods", self.queries().goods.list(params)).await
    }

    #[instrument(skip(self))]
    async fn update_good(&self, params: UpdateGoodParams) -> Result<GoodModel, ServiceError> {
        observe("update_good", self.queries().goods.update(params)).await
    }

    #[instrument(skip(self))]
    async fn delete_good(&self, id: i64) -> Result<(), ServiceError> {
        observe("delete_good", self.queries().goods.delete(id)).await
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        observe("ping", crate::db::check_connection(&self.db)).await
    }
}
