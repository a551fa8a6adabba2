//! Product catalog module.
//!
//! The catalog is supplied by the external commerce platform and is
//! read-only from the core's perspective.

mod product;

pub mod fixtures;

pub use product::{Catalog, Product, WineType};
