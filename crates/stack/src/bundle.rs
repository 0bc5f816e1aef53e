//! Composite node over a homogeneous, contiguous child collection.

use std::io::Write;

use bundlebench_core::{
    CatalogResult, DiscountStrategy, FIXTURE_BUNDLE_NAME, FIXTURE_DISCOUNT_PERCENT, FIXTURE_SIZE,
    LineKind, NoDiscount, PercentageDiscount, fixture_price, fixture_product_name, write_line,
};

use crate::component::ProductComponent;
use crate::product::Product;

/// Bundle whose children all have type `C` and whose strategy has type `S`.
///
/// Bundles are components too, so bundles of bundles work as long as every
/// inner bundle has the same `ProductBundle<C', S'>` type.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductBundle<C: ProductComponent, S: DiscountStrategy> {
    name: String,
    components: Vec<C>,
    discount_strategy: S,
}

impl<C: ProductComponent, S: DiscountStrategy> ProductBundle<C, S> {
    pub fn new(name: impl Into<String>, components: Vec<C>, strategy: S) -> Self {
        Self {
            name: name.into(),
            components,
            discount_strategy: strategy,
        }
    }

    pub fn components(&self) -> &[C] {
        &self.components
    }

    pub fn discount_strategy(&self) -> &S {
        &self.discount_strategy
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Children's totals summed in insertion order, before this bundle's discount.
    #[inline]
    pub fn subtotal(&self) -> f64 {
        self.components
            .iter()
            .fold(0.0, |sum, component| sum + component.total_price())
    }

    /// Consume the bundle and rebuild it under a new strategy type.
    ///
    /// Children are moved as they are; their own strategies are untouched.
    pub fn with_discount_strategy<T: DiscountStrategy>(self, strategy: T) -> ProductBundle<C, T> {
        tracing::debug!(
            bundle = %self.name,
            from = self.discount_strategy.strategy_name(),
            to = strategy.strategy_name(),
            "rebuilding bundle with new discount strategy"
        );
        ProductBundle {
            name: self.name,
            components: self.components,
            discount_strategy: strategy,
        }
    }

    /// Rebuild every child with `f`, keeping order and this bundle's strategy.
    pub fn map_components<D: ProductComponent>(self, f: impl FnMut(C) -> D) -> ProductBundle<D, S> {
        ProductBundle {
            name: self.name,
            components: self.components.into_iter().map(f).collect(),
            discount_strategy: self.discount_strategy,
        }
    }
}

impl ProductBundle<Product<NoDiscount>, PercentageDiscount> {
    /// Benchmark workload: "Gaming Bundle" at 15% off holding `size` undiscounted products.
    pub fn fixture(size: usize) -> Self {
        let components = (0..size)
            .map(|i| Product::new(fixture_product_name(i), fixture_price(i), NoDiscount))
            .collect::<Vec<_>>();
        tracing::debug!(size, "built stack fixture bundle");
        Self::new(
            FIXTURE_BUNDLE_NAME,
            components,
            PercentageDiscount::new(FIXTURE_DISCOUNT_PERCENT),
        )
    }

    pub fn new_test() -> Self {
        Self::fixture(FIXTURE_SIZE)
    }
}

impl<C: ProductComponent, S: DiscountStrategy> ProductComponent for ProductBundle<C, S> {
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn total_price(&self) -> f64 {
        self.discount_strategy.apply_discount(self.subtotal())
    }

    fn strategy_name(&self) -> &'static str {
        self.discount_strategy.strategy_name()
    }

    fn display<W: Write + ?Sized>(&self, depth: usize, out: &mut W) -> CatalogResult<()> {
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
}
