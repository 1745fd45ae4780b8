//! Data access layer repositories.
//!
//! One repository per table. Repositories return sea-orm models and errors unchanged;
//! translating them for the client happens in the service layer.

pub mod category;
pub mod product;
pub mod storage;
pub mod unit;
