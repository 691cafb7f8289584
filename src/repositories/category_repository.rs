use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
    Set,
};

use crate::entities::category::{
    ActiveModel as CategoryActiveModel, Column, Entity as Category, Model as CategoryModel,
};
use crate::errors::ServiceError;
use crate::repositories::Repository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryParams {
    pub category_name: String,
    pub section_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCategoriesParams {
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryParams {
    pub id: i64,
    pub category_name: String,
    pub section_name: String,
}

/// Repository for category rows
#[derive(Debug)]
pub struct CategoryRepository<'c, C> {
    db: &'c C,
}

impl<C> Clone for CategoryRepository<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for CategoryRepository<'_, C> {}

impl<'c, C: ConnectionTrait> Repository<'c, C> for CategoryRepository<'c, C> {
    fn get_db(&self) -> &'c C {
        self.db
    }
}

impl<'c, C: ConnectionTrait> CategoryRepository<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self { db }
    }

    /// Insert a category and return it with its generated id
    pub async fn create(&self, params: CreateCategoryParams) -> Result<CategoryModel, ServiceError> {
        let row = CategoryActiveModel {
            id: ActiveValue::NotSet,
            category_name: Set(params.category_name),
            section_name: Set(params.section_name),
        };

        Ok(row.insert(self.get_db()).await?)
    }

    pub async fn get(&self, id: i64) -> Result<CategoryModel, ServiceError> {
        Category::find_by_id(id)
            .one(self.get_db())
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id))
    }

    /// Page of categories in ascending id order
    pub async fn list(
        &self,
        params: ListCategoriesParams,
    ) -> Result<Vec<CategoryModel>, ServiceError> {
        Ok(Category::find()
            .order_by_asc(Column::Id)
            .limit(params.limit)
            .offset(params.offset)
            .all(self.get_db())
            .await?)
    }

    pub async fn update(&self, params: UpdateCategoryParams) -> Result<CategoryModel, ServiceError> {
        let id = params.id;
        let row = CategoryActiveModel {
            id: ActiveValue::Unchanged(id),
            category_name: Set(params.category_name),
            section_name: Set(params.section_name),
        };

        row.update(self.get_db()).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ServiceError::not_found("Category", id),
            other => ServiceError::from(other),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let result = Category::delete_by_id(id).exec(self.get_db()).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Category", id));
        }
        Ok(())
    }
}
