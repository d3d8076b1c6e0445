//! Products domain module.
//!
//! Catalog items and an in-memory catalog, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod product;

pub use catalog::{CatalogStats, ProductCatalog};
pub use product::{DEFAULT_EXPENSIVE_THRESHOLD, Product};
