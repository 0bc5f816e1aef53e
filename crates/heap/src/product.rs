//! Leaf node: a single priced item.

use std::io::Write;

use bundlebench_core::{CatalogResult, DiscountStrategy, LineKind, write_line};

use crate::component::ProductComponent;

pub struct Product {
    name: String,
    price: f64,
    discount_strategy: Box<dyn DiscountStrategy>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        strategy: impl DiscountStrategy + 'static,
    ) -> Self {
        Self::with_boxed_strategy(name, price, Box::new(strategy))
    }

    pub fn with_boxed_strategy(
        name: impl Into<String>,
        price: f64,
        strategy: Box<dyn DiscountStrategy>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            discount_strategy: strategy,
        }
    }

    /// Undiscounted price.
    pub fn base_price(&self) -> f64 {
        self.price
    }
}

impl core::fmt::Debug for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Product")
            .field("name", &self.name)
            .field("price", &self.price)
            .field("strategy", &self.discount_strategy.strategy_name())
            .finish()
    }
}

impl ProductComponent for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn total_price(&self) -> f64 {
        self.discount_strategy.apply_discount(self.price)
    }

    fn strategy_name(&self) -> &'static str {
        self.discount_strategy.strategy_name()
    }

    fn display(&self, depth: usize, out: &mut dyn Write) -> CatalogResult<()> {
        write_line(
            out,
            depth,
            LineKind::Product,
            &self.name,
            self.total_price(),
            self.strategy_name(),
        )
    }

    fn set_discount_strategy(&mut self, strategy: Box<dyn DiscountStrategy>) {
        tracing::debug!(
            product = %self.name,
            from = self.discount_strategy.strategy_name(),
            to = strategy.strategy_name(),
            "replacing product discount strategy"
        );
        self.discount_strategy = strategy;
    }
}
