use sea_orm::ConnectionTrait;

pub mod category_repository;
pub mod good_repository;
pub mod unit_repository;

pub use category_repository::{
    CategoryRepository, CreateCategoryParams, ListCategoriesParams, UpdateCategoryParams,
};
pub use good_repository::{CreateGoodParams, GoodRepository, ListGoodsParams, UpdateGoodParams};
pub use unit_repository::{CreateUnitParams, ListUnitsParams, UnitRepository, UpdateUnitParams};

/// Repository trait for common database operations
///
/// Repositories borrow a connection rather than owning a pool, so the same
/// code runs against a `DatabaseConnection` or inside a `DatabaseTransaction`.
pub trait Repository<'c, C: ConnectionTrait> {
    fn get_db(&self) -> &'c C;
}

/// All entity repositories bound to one connection handle.
pub struct Queries<'c, C: ConnectionTrait> {
    pub categories: CategoryRepository<'c, C>,
    pub units: UnitRepository<'c, C>,
    pub goods: GoodRepository<'c, C>,
}

impl<'c, C: ConnectionTrait> Queries<'c, C> {
    pub fn new(db: &'c C) -> Self {
        Self {
            categories: CategoryRepository::new(db),
            units: UnitRepository::new(db),
            goods: GoodRepository::new(db),
        }
    }
}
