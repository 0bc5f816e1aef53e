//! Composite node: an ordered, heterogeneous collection of components.

use std::io::Write;

use bundlebench_core::{
    CatalogResult, DiscountStrategy, FIXTURE_BUNDLE_NAME, FIXTURE_DISCOUNT_PERCENT, LineKind,
    NoDiscount, PercentageDiscount, fixture_price, fixture_product_name, write_line,
};

use crate::component::ProductComponent;
use crate::product::Product;

/// Bundle of boxed components under one discount strategy.
///
/// The bundle exclusively owns its children and its strategy. Its total is its
/// strategy applied to the children's totals summed in insertion order.
pub struct ProductBundle {
    name: String,
    components: Vec<Box<dyn ProductComponent>>,
    discount_strategy: Box<dyn DiscountStrategy>,
}

impl ProductBundle {
    pub fn new(name: impl Into<String>, strategy: impl DiscountStrategy + 'static) -> Self {
        Self::with_boxed_strategy(name, Box::new(strategy))
    }

    pub fn with_boxed_strategy(
        name: impl Into<String>,
        strategy: Box<dyn DiscountStrategy>,
    ) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
            discount_strategy: strategy,
        }
    }

    /// Append a child. Products, bundles and observable products mix freely.
    pub fn add(&mut self, component: impl ProductComponent + 'static) {
        self.components.push(Box::new(component));
    }

    pub fn add_boxed(&mut self, component: Box<dyn ProductComponent>) {
        self.components.push(component);
    }

    pub fn components(&self) -> &[Box<dyn ProductComponent>] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [Box<dyn ProductComponent>] {
        &mut self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Children's totals summed in insertion order, before this bundle's discount.
    pub fn subtotal(&self) -> f64 {
        self.components
            .iter()
            .fold(0.0, |sum, component| sum + component.total_price())
    }

    /// Benchmark workload: "Gaming Bundle" at 15% off holding `size` undiscounted products.
    pub fn fixture(size: usize) -> Self {
        let mut bundle = Self::new(
            FIXTURE_BUNDLE_NAME,
            PercentageDiscount::new(FIXTURE_DISCOUNT_PERCENT),
        );
        bundle.components.reserve_exact(size);
        for i in 0..size {
            bundle.add(Product::new(fixture_product_name(i), fixture_price(i), NoDiscount));
        }
        tracing::debug!(size, "built heap fixture bundle");
        bundle
    }

    pub fn new_test() -> Self {
        Self::fixture(bundlebench_core::FIXTURE_SIZE)
    }
}

impl core::fmt::Debug for ProductBundle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductBundle")
            .field("name", &self.name)
            .field("components", &self.components.len())
            .field("strategy", &self.discount_strategy.strategy_name())
            .finish()
    }
}

impl ProductComponent for ProductBundle {
    fn name(&self) -> &str {
        &self.name
    }

    fn total_price(&self) -> f64 {
        self.discount_strategy.apply_discount(self.subtotal())
    }

    fn strategy_name(&self) -> &'static str {
        self.discount_strategy.strategy_name()
    }

    fn display(&self, depth: usize, out: &mut dyn Write) -> CatalogResult<()> {
        write_line(
            out,
            depth,
            LineKind::Bundle,
            &self.name,
            self.total_price(),
            self.strategy_name(),
        )?;
        for component in &self.components {
            component.display(depth + 2, out)?;
        }
        Ok(())
    }

    fn set_discount_strategy(&mut self, strategy: Box<dyn DiscountStrategy>) {
        tracing::debug!(
            bundle = %self.name,
            from = self.discount_strategy.strategy_name(),
            to = strategy.strategy_name(),
            "replacing bundle discount strategy"
        );
        self.discount_strategy = strategy;
    }
}
