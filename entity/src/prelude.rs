pub use super::category::Entity as Category;
pub use super::product::Entity as Product;
pub use super::storage::Entity as Storage;
pub use super::unit::Entity as Unit;
