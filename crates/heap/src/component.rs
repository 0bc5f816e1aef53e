//! Uniform node interface for the heap catalog.

use std::io::Write;

use bundlebench_core::{CatalogResult, DiscountStrategy};

/// Node in a heterogeneous catalog tree.
///
/// Object safe: bundles store children as `Box<dyn ProductComponent>`.
pub trait ProductComponent {
    fn name(&self) -> &str;

    /// Discounted total of this node (and its subtree, for bundles).
    fn total_price(&self) -> f64;

    /// Name of the strategy currently applied at this node.
    fn strategy_name(&self) -> &'static str;

    /// Write this node's line at `depth`, then its children at `depth + 2`.
    fn display(&self, depth: usize, out: &mut dyn Write) -> CatalogResult<()>;

    /// Replace this node's own strategy. Children keep theirs.
    fn set_discount_strategy(&mut self, strategy: Box<dyn DiscountStrategy>);
}

impl<T: ProductComponent + ?Sized> ProductComponent for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn total_price(&self) -> f64 {
        (**self).total_price()
    }

    fn strategy_name(&self) -> &'static str {
        (**self).strategy_name()
    }

    fn display(&self, depth: usize, out: &mut dyn Write) -> CatalogResult<()> {
        (**self).display(depth, out)
    }

    fn set_discount_strategy(&mut self, strategy: Box<dyn DiscountStrategy>) {
        (**self).set_discount_strategy(strategy)
    }
}
