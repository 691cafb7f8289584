//! Request and response bodies of the HTTP API.
//!
//! Every request type derives `Validate`; handlers only see values that
//! passed validation, so no store call is made for a rejected request.

pub mod category;
pub mod good;
pub mod pagination;
pub mod unit;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ServiceError;

pub use category::{CreateCategoryRequest, UpdateCategoryRequest};
pub use good::{CreateGoodRequest, ListGoodsQuery, UpdateGoodRequest};
pub use pagination::PageQuery;
pub use unit::{CreateUnitRequest, UpdateUnitRequest};

/// Record id taken from the request path
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct IdPath {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,
}

/// Body returned by delete endpoints
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Unwraps a field that `#[validate(required)]` already checked.
pub(crate) fn present<T>(value: Option<T>, field: &str) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::ValidationError(format!("{}: field is required", field)))
}
