pub mod categories;
pub mod common;
pub mod goods;
pub mod health;
pub mod units;

pub use categories::category_routes;
pub use goods::good_routes;
pub use health::health_routes;
pub use units::unit_routes;
