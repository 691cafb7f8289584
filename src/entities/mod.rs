//! Persisted records of the inventory service.

pub mod category;
pub mod good;
pub mod unit;

pub use category::{Entity as Category, Model as CategoryModel};
pub use good::{Entity as Good, Model as GoodModel};
pub use unit::{Entity as Unit, Model as UnitModel};
