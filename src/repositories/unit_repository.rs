use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
    Set,
};

use crate::entities::unit::{
    ActiveModel as UnitActiveModel, Column, Entity as Unit, Model as UnitModel,
};
use crate::errors::ServiceError;
use crate::repositories::Repository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUnitParams {
    pub unit_name: String,
    pub unit_value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListUnitsParams {
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUnitParams {
    pub id: i64,
    pub unit_name: String,
    pub unit_value: i64,
}

/// Repository for unit rows
#[derive(Debug)]
pub struct UnitRepository<'c, C> {
    db: &'c C,
}

impl<C> Clone for UnitRepository<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for UnitRepository<'_, C> {}

impl<'c, C: ConnectionTrait> Repository<'c, C> for UnitRepository<'c, C> {
    fn get_db(&self) -> &'c C {
        self.db
    }
}

impl<'c, C: ConnectionTrait> UnitRepository<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateUnitParams) -> Result<UnitModel, ServiceError> {
        let row = UnitActiveModel {
            id: ActiveValue::NotSet,
            unit_name: Set(params.unit_name),
            unit_value: Set(params.unit_value),
        };

        Ok(row.insert(self.get_db()).await?)
    }

    pub async fn get(&self, id: i64) -> Result<UnitModel, ServiceError> {
        Unit::find_by_id(id)
            .one(self.get_db())
            .await?
            .ok_or_else(|| ServiceError::not_found("Unit", id))
    }

    pub async fn list(&self, params: ListUnitsParams) -> Result<Vec<UnitModel>, ServiceError> {
        Ok(Unit::find()
            .order_by_asc(Column::Id)
            .limit(params.limit)
            .offset(params.offset)
            .all(self.get_db())
            .await?)
    }

    pub async fn update(&self, params: UpdateUnitParams) -> Result<UnitModel, ServiceError> {
        let id = params.id;
        let row = UnitActiveModel {
            id: ActiveValue::Unchanged(id),
            unit_name: Set(params.unit_name),
            unit_value: Set(params.unit_value),
        };

        row.update(self.get_db()).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ServiceError::not_found("Unit", id),
            other => ServiceError::from(other),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let result = Unit::delete_by_id(id).exec(self.get_db()).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Unit", id));
        }
        Ok(())
    }
}
