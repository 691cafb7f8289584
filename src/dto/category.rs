use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repositories::{CreateCategoryParams, UpdateCategoryParams};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "category_name must not be empty"))]
    pub category_name: String,
    #[validate(length(min = 1, message = "section_name must not be empty"))]
    pub section_name: String,
}

impl From<CreateCategoryRequest> for CreateCategoryParams {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            category_name: req.category_name,
            section_name: req.section_name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, message = "category_name must not be empty"))]
    pub category_name: String,
    #[validate(length(min = 1, message = "section_name must not be empty"))]
    pub section_name: String,
}

impl UpdateCategoryRequest {
    pub fn into_params(self, id: i64) -> UpdateCategoryParams {
        UpdateCategoryParams {
            id,
            category_name: self.category_name,
            section_name: self.section_name,
        }
    }
}
