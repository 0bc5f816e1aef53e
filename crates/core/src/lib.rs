//! `bundlebench-core` — pricing building blocks shared by both composite variants.
//!
//! This crate holds everything the heap and stack catalogs agree on: the discount
//! strategies, the line format used when a tree is displayed, the benchmark fixture
//! parameters and the error model. It performs **no allocation-strategy decisions**;
//! those belong to the variant crates.

pub mod discount;
pub mod display;
pub mod error;
pub mod fixture;
pub mod strategy_spec;

pub use discount::{DiscountStrategy, FixedDiscount, NoDiscount, PercentageDiscount};
pub use display::{LineKind, write_line};
pub use error::{CatalogError, CatalogResult};
pub use fixture::{
    FIXTURE_BUNDLE_NAME, FIXTURE_DISCOUNT_PERCENT, FIXTURE_SIZE, expected_fixture_subtotal,
    fixture_price, fixture_product_name,
};
pub use strategy_spec::StrategySpec;
