//! sea-orm entities for the inventory schema.

pub mod prelude;

pub mod category;
pub mod product;
pub mod storage;
pub mod unit;
