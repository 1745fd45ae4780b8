pub mod cascade;
pub mod inventory;
