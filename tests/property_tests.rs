//! Property-based tests for pagination and request validation.

use inventory_api::{
    dto::{
        pagination::{page_window, MAX_PAGE_SIZE, MIN_PAGE_SIZE},
        CreateGoodRequest, PageQuery,
    },
    errors::ServiceError,
};
use proptest::prelude::*;
use validator::Validate;

fn page_size_strategy() -> impl Strategy<Value = i64> {
    MIN_PAGE_SIZE..=MAX_PAGE_SIZE
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn adjacent_pages_never_overlap(page_id in 1i64..100_000, page_size in page_size_strategy()) {
        let (limit, offset) = page_window(page_id, page_size).unwrap();
        let (_, next_offset) = page_window(page_id + 1, page_size).unwrap();
        prop_assert_eq!(limit as i64, page_size);
        prop_assert_eq!(offset + limit, next_offset);
    }

    #[test]
    fn page_sizes_outside_policy_are_rejected(page_size in prop_oneof![i64::MIN..MIN_PAGE_SIZE, (MAX_PAGE_SIZE + 1)..i64::MAX]) {
        let query = PageQuery { page_id: 1, page_size };
        prop_assert!(query.validate().is_err());
        prop_assert!(matches!(query.window(), Err(ServiceError::ValidationError(_))));
    }

    #[test]
    fn page_window_never_panics(page_id in any::<i64>(), page_size in any::<i64>()) {
        match page_window(page_id, page_size) {
            Ok((limit, offset)) => {
                prop_assert!(page_id >= 1);
                prop_assert_eq!(offset, (page_id as u64 - 1) * limit);
            }
            Err(err) => prop_assert!(matches!(err, ServiceError::ValidationError(_))),
        }
    }

    #[test]
    fn amount_must_be_positive(amount in any::<i64>()) {
        let req = CreateGoodRequest {
            category: Some(1),
            model: "m".into(),
            unit: Some(1),
            amount: Some(amount),
            good_desc: "d".into(),
        };
        prop_assert_eq!(req.validate().is_ok(), amount >= 1);
    }
}
