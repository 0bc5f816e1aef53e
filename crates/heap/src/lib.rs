//! Dynamic composition of the product catalog.
//!
//! Every node lives behind a `Box<dyn ProductComponent>` and owns a
//! `Box<dyn DiscountStrategy>`. Bundles may freely mix products, nested bundles
//! and observable products; replacing a strategy mutates the node in place.

pub mod bundle;
pub mod component;
pub mod observer;
pub mod product;

pub use bundle::ProductBundle;
pub use component::ProductComponent;
pub use observer::{LoggingObserver, ObservableProduct, PriceChange, PriceObserver, RecordingObserver};
pub use product::Product;

/// Build the benchmark bundle with `size` products (see `bundlebench_core::fixture`).
pub fn fixture(size: usize) -> ProductBundle {
    ProductBundle::fixture(size)
}
