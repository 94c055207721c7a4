//! Catalog module: the read-only product list for a kiosk session.
//!
//! Loading happens once at startup; everything after that is pure lookup.

pub mod catalog;
pub mod error;
pub mod product;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use product::{Category, Product};
