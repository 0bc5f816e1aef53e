//! Price observers: get told when a product's discounted price changes.
//!
//! `ObservableProduct` decorates a `Product` and notifies every registered
//! observer with the new total after each strategy replacement. Observers are
//! shared (`Arc`) so one observer can watch many products.

use std::io::Write;
use std::sync::{Arc, Mutex};

use bundlebench_core::{CatalogResult, DiscountStrategy};

use crate::component::ProductComponent;
use crate::product::Product;

/// Receives price change notifications.
pub trait PriceObserver {
    fn price_changed(&self, product_name: &str, new_total: f64);
}

/// A single recorded notification.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChange {
    pub product_name: String,
    pub new_total: f64,
}

/// Keeps every notification it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    changes: Mutex<Vec<PriceChange>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> Vec<PriceChange> {
        self.changes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl PriceObserver for RecordingObserver {
    fn price_changed(&self, product_name: &str, new_total: f64) {
        self.changes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(PriceChange {
                product_name: product_name.to_string(),
                new_total,
            });
    }
}

/// Emits an `info` tracing event per notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl PriceObserver for LoggingObserver {
    fn price_changed(&self, product_name: &str, new_total: f64) {
        tracing::info!(product = %product_name, new_total, "price updated");
    }
}

pub struct ObservableProduct {
    product: Product,
    observers: Vec<Arc<dyn PriceObserver>>,
}

impl ObservableProduct {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        strategy: impl DiscountStrategy + 'static,
    ) -> Self {
        Self::from_product(Product::new(name, price, strategy))
    }

    pub fn from_product(product: Product) -> Self {
        Self {
            product,
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Arc<dyn PriceObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    fn notify(&self) {
        let total = self.product.total_price();
        for observer in &self.observers {
            observer.price_changed(self.product.name(), total);
        }
    }
}

impl ProductComponent for ObservableProduct {
    fn name(&self) -> &str {
        self.product.name()
    }

    fn total_price(&self) -> f64 {
        self.product.total_price()
    }

    fn strategy_name(&self) -> &'static str {
        self.product.strategy_name()
    }

    fn display(&self, depth: usize, out: &mut dyn Write) -> CatalogResult<()> {
        self.product.display(depth, out)
    }

    fn set_discount_strategy(&mut self, strategy: Box<dyn DiscountStrategy>) {
        self.product.set_discount_strategy(strategy);
        self.notify();
    }
}
