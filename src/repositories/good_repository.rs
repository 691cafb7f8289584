use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entities::good::{
    ActiveModel as GoodActiveModel, Column, Entity as Good, Model as GoodModel,
};
use crate::errors::ServiceError;
use crate::repositories::Repository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGoodParams {
    pub category: i64,
    pub model: String,
    pub unit: i64,
    pub amount: i64,
    pub good_desc: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListGoodsParams {
    pub category: i64,
    pub limit: u64,
    pub offset: u64,
}

/// Only the unit and the amount of a good can change after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateGoodParams {
    pub id: i64,
    pub unit: i64,
    pub amount: i64,
}

/// Repository for good rows
#[derive(Debug)]
pub struct GoodRepository<'c, C> {
    db: &'c C,
}

impl<C> Clone for GoodRepository<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for GoodRepository<'_, C> {}

impl<'c, C: ConnectionTrait> Repository<'c, C> for GoodRepository<'c, C> {
    fn get_db(&self) -> &'c C {
        self.db
    }
}

impl<'c, C: ConnectionTrait> GoodRepository<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    /// Insert a good; `created_at` is stamped on insert.
    ///
    /// A `category` or `unit` that does not exist is rejected by the engine's
    /// foreign keys and surfaces as a database error.
    pub async fn create(&self, params: CreateGoodParams) -> Result<GoodModel, ServiceError> {
        let row = GoodActiveModel {
            id: ActiveValue::NotSet,
            category: Set(params.category),
            model: Set(params.model),
            unit: Set(params.unit),
            amount: Set(params.amount),
            good_desc: Set(params.good_desc),
            created_at: ActiveValue::NotSet,
        };

        Ok(row.insert(self.get_db()).await?)
    }

    pub async fn get(&self, id: i64) -> Result<GoodModel, ServiceError> {
        Good::find_by_id(id)
            .one(self.get_db())
            .await?
            .ok_or_else(|| ServiceError::not_found("Good", id))
    }

    /// Page of goods filed under one category, ascending id order
    pub async fn list(&self, params: ListGoodsParams) -> Result<Vec<GoodModel>, ServiceError> {
        Ok(Good::find()
            .filter(Column::Category.eq(params.category))
            .order_by_asc(Column::Id)
            .limit(params.limit)
            .offset(params.offset)
            .all(self.get_db())
            .await?)
    }

    pub async fn update(&self, params: UpdateGoodParams) -> Result<GoodModel, ServiceError> {
        let id = params.id;
        let row = GoodActiveModel {
            id: ActiveValue::Unchanged(id),
            unit: Set(params.unit),
            amount: Set(params.amount),
            ..Default::default()
        };

        row.update(self.get_db()).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ServiceError::not_found("Good", id),
            other => ServiceError::from(other),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let result = Good::delete_by_id(id).exec(self.get_db()).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Good", id));
        }
        Ok(())
    }
}
