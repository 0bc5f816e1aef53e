//! The demonstration run.
//!
//! For every selected variant: print its label, build the fixture, display it,
//! swap the root strategy, print a separator and display again. All output goes
//! to the caller's sink.

use std::io::Write;
use std::time::Instant;

use bundlebench_core::{CatalogResult, DiscountStrategy};
use bundlebench_heap::ProductComponent as _;
use bundlebench_stack::ProductComponent as _;

use crate::config::DemoConfig;

pub const AFTER_CHANGE_HEADING: &str = "After changing the strategy:";

/// Totals observed for one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSummary {
    pub label: &'static str,
    pub total_before: f64,
    pub total_after: f64,
    pub strategy_after: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub heap: Option<VariantSummary>,
    pub stack: Option<VariantSummary>,
}

/// Run the demo for the configured variants, writing display output to `out`.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> CatalogResult<RunSummary> {
    let mut summary = RunSummary::default();

    if config.variant.includes_heap() {
        summary.heap = Some(run_heap(config, out)?);
    }
    if config.variant.includes_stack() {
        if summary.heap.is_some() {
            writeln!(out)?;
        }
        summary.stack = Some(run_stack(config, out)?);
    }

    Ok(summary)
}

fn run_heap<W: Write>(config: &DemoConfig, out: &mut W) -> CatalogResult<VariantSummary> {
    writeln!(out, "Heap")?;

    let started = Instant::now();
    let mut bundle = bundlebench_heap::fixture(config.fixture_size);
    tracing::info!(
        variant = "heap",
        size = config.fixture_size,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fixture built"
    );

    let total_before = bundle.total_price();
    bundle.display(0, out)?;

    bundle.set_discount_strategy(config.heap_strategy.into_boxed());
    writeln!(out, "\n{AFTER_CHANGE_HEADING}")?;
    let total_after = bundle.total_price();
    bundle.display(0, out)?;

    tracing::info!(variant = "heap", total_before, total_after, "display finished");
    Ok(VariantSummary {
        label: "Heap",
        total_before,
        total_after,
        strategy_after: bundle.strategy_name(),
    })
}

fn run_stack<W: Write>(config: &DemoConfig, out: &mut W) -> CatalogResult<VariantSummary> {
    writeln!(out, "Stack")?;

    let started = Instant::now();
    let bundle = bundlebench_stack::fixture(config.fixture_size);
    tracing::info!(
        variant = "stack",
        size = config.fixture_size,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fixture built"
    );

    let total_before = bundle.total_price();
    bundle.display(0, out)?;

    // The replacement is a new value of a new type; the original bundle is consumed.
    let bundle = bundle.with_discount_strategy(config.stack_strategy);
    writeln!(out, "\n{AFTER_CHANGE_HEADING}")?;
    let total_after = bundle.total_price();
    bundle.display(0, out)?;

    tracing::info!(variant = "stack", total_before, total_after, "display finished");
    Ok(VariantSummary {
        label: "Stack",
        total_before,
        total_after,
        strategy_after: bundle.discount_strategy().strategy_name(),
    })
}
