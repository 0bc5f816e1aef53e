//! Demo configuration.
//!
//! Defaults reproduce the reference run: the full 100,000-product fixture,
//! heap root switched to 20% off, stack root switched to a fixed 3000 off.
//! A JSON file named by `BUNDLEBENCH_CONFIG` may override the defaults and
//! individual environment variables override both.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use bundlebench_core::{CatalogError, CatalogResult, FIXTURE_SIZE, StrategySpec};

pub const ENV_CONFIG_FILE: &str = "BUNDLEBENCH_CONFIG";
pub const ENV_FIXTURE_SIZE: &str = "BUNDLEBENCH_FIXTURE_SIZE";
pub const ENV_HEAP_STRATEGY: &str = "BUNDLEBENCH_HEAP_STRATEGY";
pub const ENV_STACK_STRATEGY: &str = "BUNDLEBENCH_STACK_STRATEGY";
pub const ENV_VARIANT: &str = "BUNDLEBENCH_VARIANT";

/// Which catalog variants the demo runs.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Heap,
    Stack,
    #[default]
    Both,
}

impl Variant {
    pub fn includes_heap(self) -> bool {
        matches!(self, Variant::Heap | Variant::Both)
    }

    pub fn includes_stack(self) -> bool {
        matches!(self, Variant::Stack | Variant::Both)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Heap => "heap",
            Variant::Stack => "stack",
            Variant::Both => "both",
        })
    }
}

impl FromStr for Variant {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heap" => Ok(Variant::Heap),
            "stack" => Ok(Variant::Stack),
            "both" => Ok(Variant::Both),
            other => Err(CatalogError::invalid_config(format!(
                "unknown variant {other:?} (expected heap, stack or both)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub fixture_size: usize,
    /// Strategy installed on the heap root after the first display.
    pub heap_strategy: StrategySpec,
    /// Strategy the stack root is rebuilt with after the first display.
    pub stack_strategy: StrategySpec,
    pub variant: Variant,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            fixture_size: FIXTURE_SIZE,
            heap_strategy: StrategySpec::Percentage(20.0),
            stack_strategy: StrategySpec::Fixed(3000.0),
            variant: Variant::Both,
        }
    }
}

impl DemoConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> CatalogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which plays the role of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CatalogResult<Self> {
        let mut config = match lookup(ENV_CONFIG_FILE) {
            Some(path) => {
                tracing::info!(path = %path, "loading demo configuration file");
                Self::from_json(&std::fs::read_to_string(&path)?)?
            }
            None => Self::default(),
        };

        if let Some(raw) = lookup(ENV_FIXTURE_SIZE) {
            config.fixture_size = raw.trim().parse().map_err(|e| {
                CatalogError::invalid_config(format!("{ENV_FIXTURE_SIZE}={raw:?}: {e}"))
            })?;
        }
        if let Some(raw) = lookup(ENV_HEAP_STRATEGY) {
            config.heap_strategy = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_STACK_STRATEGY) {
            config.stack_strategy = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_VARIANT) {
            config.variant = raw.parse()?;
        }

        if config.fixture_size != FIXTURE_SIZE {
            tracing::warn!(
                fixture_size = config.fixture_size,
                reference_size = FIXTURE_SIZE,
                "fixture size differs from the reference workload; totals are not comparable"
            );
        }

        Ok(config)
    }

    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        serde_json::from_str(raw).map_err(|e| CatalogError::invalid_config(e.to_string()))
    }
}
