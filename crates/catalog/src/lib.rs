//! Catalog ranking, filtering and pagination.
//!
//! This crate turns a raw product snapshot and a navigation intent into the
//! ordered, paginated slice a storefront shows. Everything is deterministic
//! and synchronous (no IO, no rendering, no shared mutable state).

pub mod card;
pub mod config;
pub mod filter;
pub mod intent;
pub mod numeric;
pub mod pagination;
pub mod product;
pub mod ranking;
pub mod session;

pub use alyomi_core::ProductId;
pub use card::ProductCard;
pub use config::CatalogConfig;
pub use intent::{
    InfoPage, NavigationIntent, NavigationRequest, PRICE_CEILING_DEFAULT, SpecialView,
};
pub use numeric::{NumericValue, normalize};
pub use pagination::{DEFAULT_PAGE_SIZE, PageEntry, PageResult, paginate};
pub use product::Product;
pub use ranking::{Ranked, performance_score, rank};
pub use session::{CatalogSession, CatalogView, Listing};
