//! Discount strategies: interchangeable price adjustments applied per catalog node.
//!
//! Every strategy is a small `Copy` value. The heap catalog stores them behind
//! `Box<dyn DiscountStrategy>`; the stack catalog bakes the concrete type into the
//! node's type parameters. The trait is therefore kept object safe.

use serde::{Deserialize, Serialize};

/// Pricing adjustment applied to a node's price (leaf) or children sum (bundle).
///
/// Implementations have no side effects and never fail. Parameters are not
/// validated: a percentage above 100 produces a negative price and a negative
/// fixed amount raises the price.
pub trait DiscountStrategy {
    /// Adjust `price` according to this strategy.
    fn apply_discount(&self, price: f64) -> f64;

    /// Human-readable strategy name, as shown in display lines.
    fn strategy_name(&self) -> &'static str;
}

impl<T: DiscountStrategy + ?Sized> DiscountStrategy for Box<T> {
    fn apply_discount(&self, price: f64) -> f64 {
        (**self).apply_discount(price)
    }

    fn strategy_name(&self) -> &'static str {
        (**self).strategy_name()
    }
}

impl<T: DiscountStrategy + ?Sized> DiscountStrategy for &T {
    fn apply_discount(&self, price: f64) -> f64 {
        (**self).apply_discount(price)
    }

    fn strategy_name(&self) -> &'static str {
        (**self).strategy_name()
    }
}

/// Identity strategy.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn apply_discount(&self, price: f64) -> f64 {
        price
    }

    fn strategy_name(&self) -> &'static str {
        "No Discount"
    }
}

/// Scales the price by `1 - percentage / 100`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PercentageDiscount(pub f64);

impl PercentageDiscount {
    pub fn new(percentage: f64) -> Self {
        Self(percentage)
    }

    pub fn percentage(&self) -> f64 {
        self.0
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn apply_discount(&self, price: f64) -> f64 {
        price * (1.0 - self.0 / 100.0)
    }

    fn strategy_name(&self) -> &'static str {
        "Percentage Discount"
    }
}

/// Subtracts a fixed amount, floored at zero.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedDiscount(pub f64);

impl FixedDiscount {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl DiscountStrategy for FixedDiscount {
    fn apply_discount(&self, price: f64) -> f64 {
        (price - self.0).max(0.0)
    }

    fn strategy_name(&self) -> &'static str {
        "Fixed Discount"
    }
}
