//! Data transfer types shared by the client core and the store implementations.

pub mod product;
pub mod resource;
