//! `bundlebench` demonstration program: configuration and the display run.

pub mod config;
pub mod demo;

pub use config::{DemoConfig, Variant};
pub use demo::{RunSummary, VariantSummary, run};
