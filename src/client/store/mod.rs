pub mod edit;
pub mod inventory;
pub mod selection;
