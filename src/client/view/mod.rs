pub mod expiration;
pub mod filter_sort;
