//! Catalog query layer.
//!
//! This crate contains the product catalog and the logic that turns a client's
//! query (category + free text, or a single id) into an ordered result set, plus the
//! mapping between that query and a shareable URL. Pure domain logic: no IO, no HTTP.

pub mod catalog;
pub mod category;
pub mod product;
pub mod query;
pub mod seed;
pub mod url;

pub use catalog::{CatalogStore, InMemoryCatalog};
pub use category::{Category, CategoryFilter};
pub use product::{NewProduct, Price, Product, Rating};
pub use query::{QueryState, filter_by_category, filter_by_search, get_by_id, resolve};
pub use showcase_core::{CatalogError, CatalogResult, ProductId};
