use serde::{Deserialize, Serialize};
use validator::Validate;

use super::present;
use crate::errors::ServiceError;
use crate::repositories::{CreateUnitParams, UpdateUnitParams};

/// `unit_value` is optional on the wire so that a missing value can be told
/// apart from an explicit zero.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateUnitRequest {
    #[validate(length(min = 1, message = "unit_name must not be empty"))]
    pub unit_name: String,
    #[validate(required)]
    pub unit_value: Option<i64>,
}

impl CreateUnitRequest {
    pub fn into_params(self) -> Result<CreateUnitParams, ServiceError> {
        Ok(CreateUnitParams {
            unit_name: self.unit_name,
            unit_value: present(self.unit_value, "unit_value")?,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct UpdateUnitRequest {
    #[validate(length(min = 1, message = "unit_name must not be empty"))]
    pub unit_name: String,
    #[validate(required)]
    pub unit_value: Option<i64>,
}

impl UpdateUnitRequest {
    pub fn into_params(self, id: i64) -> Result<UpdateUnitParams, ServiceError> {
        Ok(UpdateUnitParams {
            id,
            unit_name: self.unit_name,
            unit_value: present(self.unit_value, "unit_value")?,
        })
    }
}
