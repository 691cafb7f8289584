use serde::{Deserialize, Serialize};
use validator::Validate;

use super::pagination::page_window;
use super::present;
use crate::errors::ServiceError;
use crate::repositories::{CreateGoodParams, ListGoodsParams, UpdateGoodParams};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateGoodRequest {
    #[validate(required, range(min = 1, message = "category must be a positive id"))]
    pub category: Option<i64>,
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,
    #[validate(required, range(min = 1, message = "unit must be a positive id"))]
    pub unit: Option<i64>,
    #[validate(required, range(min = 1, message = "amount must be greater than zero"))]
    pub amount: Option<i64>,
    #[validate(length(min = 1, message = "good_desc must not be empty"))]
    pub good_desc: String,
}

impl CreateGoodRequest {
    pub fn into_params(self) -> Result<CreateGoodParams, ServiceError> {
        Ok(CreateGoodParams {
            category: present(self.category, "category")?,
            model: self.model,
            unit: present(self.unit, "unit")?,
            amount: present(self.amount, "amount")?,
            good_desc: self.good_desc,
        })
    }
}

/// Only `unit` and `amount` of a stored good can change.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct UpdateGoodRequest {
    #[validate(required, range(min = 1, message = "unit must be a positive id"))]
    pub unit: Option<i64>,
    #[validate(required, range(min = 1, message = "amount must be greater than zero"))]
    pub amount: Option<i64>,
}

impl UpdateGoodRequest {
    pub fn into_params(self, id: i64) -> Result<UpdateGoodParams, ServiceError> {
        Ok(UpdateGoodParams {
            id,
            unit: present(self.unit, "unit")?,
            amount: present(self.amount, "amount")?,
        })
    }
}

/// Query string of `GET /goods`: one page of goods within a category
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Validate)]
pub struct ListGoodsQuery {
    #[validate(range(min = 1, message = "page_id must be at least 1"))]
    pub page_id: i64,
    #[validate(range(min = 5, max = 10, message = "page_size must be between 5 and 10"))]
    pub page_size: i64,
    #[validate(range(min = 1, message = "category must be a positive id"))]
    pub category: i64,
}

impl ListGoodsQuery {
    pub fn into_params(self) -> Result<ListGoodsParams, ServiceError> {
        let (limit, offset) = page_window(self.page_id, self.page_size)?;
        Ok(ListGoodsParams {
            category: self.category,
            limit,
            offset,
        })
    }
}
