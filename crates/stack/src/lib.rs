//! Static composition of the product catalog.
//!
//! Node types carry their strategy type as a parameter (`Product<S>`,
//! `ProductBundle<C, S>`), so total computation is monomorphized and children
//! sit contiguously in one `Vec<C>`. The price paid is homogeneity: all children
//! of a bundle share one concrete type, and replacing a strategy consumes the
//! node and returns a differently-typed value.

pub mod bundle;
pub mod component;
pub mod product;

pub use bundle::ProductBundle;
pub use component::ProductComponent;
pub use product::Product;

use bundlebench_core::{NoDiscount, PercentageDiscount};

/// Concrete type of the benchmark bundle.
pub type FixtureBundle = ProductBundle<Product<NoDiscount>, PercentageDiscount>;

/// Build the benchmark bundle with `size` products (see `bundlebench_core::fixture`).
pub fn fixture(size: usize) -> FixtureBundle {
    FixtureBundle::fixture(size)
}
