//! Leaf node with its strategy baked into the type.

use std::io::Write;

use bundlebench_core::{CatalogResult, DiscountStrategy, LineKind, write_line};

use crate::component::ProductComponent;

#[derive(Debug, Clone, PartialEq)]
pub struct Product<S: DiscountStrategy> {
    name: String,
    price: f64,
    discount_strategy: S,
}

impl<S: DiscountStrategy> Product<S> {
    pub fn new(name: impl Into<String>, price: f64, strategy: S) -> Self {
        Self {
            name: name.into(),
            price,
            discount_strategy: strategy,
        }
    }

    pub fn base_price(&self) -> f64 {
        self.price
    }

    pub fn discount_strategy(&self) -> &S {
        &self.discount_strategy
    }

    /// Rebuild this product under another strategy type.
    pub fn with_strategy<T: DiscountStrategy>(self, strategy: T) -> Product<T> {
        tracing::debug!(
            product = %self.name,
            from = self.discount_strategy.strategy_name(),
            to = strategy.strategy_name(),
            "rebuilding product with new discount strategy"
        );
        Product {
            name: self.name,
            price: self.price,
            discount_strategy: strategy,
        }
    }
}

impl<S: DiscountStrategy> ProductComponent for Product<S> {
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn total_price(&self) -> f64 {
        self.discount_strategy.apply_discount(self.price)
    }

    fn strategy_name(&self) -> &'static str {
        self.discount_strategy.strategy_name()
    }

    fn display<W: Write + ?Sized>(&self, depth: usize, out: &mut W) -> CatalogResult<()> {
        write_line(
            out,
            depth,
            LineKind::Product,
            &self.name,
            self.total_price(),
            self.strategy_name(),
        )
    }
}
