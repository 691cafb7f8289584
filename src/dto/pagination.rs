use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ServiceError;
use crate::repositories::{ListCategoriesParams, ListUnitsParams};

pub const MIN_PAGE_SIZE: i64 = 5;
pub const MAX_PAGE_SIZE: i64 = 10;

/// `?page_id=&page_size=` of the list endpoints. Pages are 1-based.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Validate)]
pub struct PageQuery {
    #[validate(range(min = 1, message = "page_id must be at least 1"))]
    pub page_id: i64,
    #[validate(range(min = 5, max = 10, message = "page_size must be between 5 and 10"))]
    pub page_size: i64,
}

impl PageQuery {
    /// `(limit, offset)` of the requested page
    pub fn window(&self) -> Result<(u64, u64), ServiceError> {
        page_window(self.page_id, self.page_size)
    }
}

impl TryFrom<PageQuery> for ListCategoriesParams {
    type Error = ServiceError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        let (limit, offset) = query.window()?;
        Ok(Self { limit, offset })
    }
}

impl TryFrom<PageQuery> for ListUnitsParams {
    type Error = ServiceError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        let (limit, offset) = query.window()?;
        Ok(Self { limit, offset })
    }
}

/// offset = (page_id - 1) * page_size, rejecting out-of-range input
/// instead of wrapping.
pub fn page_window(page_id: i64, page_size: i64) -> Result<(u64, u64), ServiceError> {
    if page_id < 1 {
        return Err(ServiceError::ValidationError(
            "page_id must be at least 1".to_string(),
        ));
    }
    if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(ServiceError::ValidationError(format!(
            "page_size must be between {} and {}",
            MIN_PAGE_SIZE, MAX_PAGE_SIZE
        )));
    }

    let offset = (page_id - 1)
        .checked_mul(page_size)
        .ok_or_else(|| ServiceError::ValidationError("page_id is too large".to_string()))?;

    // both operands are non-negative here
    Ok((page_size as u64, offset as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(page_window(1, 5).unwrap(), (5, 0));
        assert_eq!(page_window(2, 5).unwrap(), (5, 5));
        assert_eq!(page_window(4, 10).unwrap(), (10, 30));
    }

    #[test]
    fn out_of_policy_page_sizes_are_rejected() {
        let query = PageQuery {
            page_id: 1,
            page_size: 10000,
        };
        assert!(query.validate().is_err());
        assert_matches!(query.window(), Err(ServiceError::ValidationError(_)));
        assert_matches!(page_window(1, 4), Err(ServiceError::ValidationError(_)));
    }

    #[test]
    fn page_zero_is_rejected() {
        let query = PageQuery {
            page_id: 0,
            page_size: 5,
        };
        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("page_id"));
    }

    #[test]
    fn overflowing_offset_is_a_validation_error() {
        assert_matches!(
            page_window(i64::MAX, 10),
            Err(ServiceError::ValidationError(_))
        );
    }
}
