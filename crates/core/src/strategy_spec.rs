//! Strategy specifications: discount strategies described as data.
//!
//! Configuration names a strategy as text (`percentage:20`) or JSON
//! (`{"kind":"percentage","value":20.0}`). A `StrategySpec` is the parsed form;
//! it can be boxed for the heap catalog or used directly as an enum-dispatched
//! strategy in the stack catalog.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::discount::{DiscountStrategy, FixedDiscount, NoDiscount, PercentageDiscount};
use crate::error::CatalogError;

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum StrategySpec {
    #[default]
    None,
    Percentage(f64),
    Fixed(f64),
}

impl StrategySpec {
    /// Build the heap-friendly trait object for this spec.
    pub fn into_boxed(self) -> Box<dyn DiscountStrategy> {
        match self {
            StrategySpec::None => Box::new(NoDiscount),
            StrategySpec::Percentage(pct) => Box::new(PercentageDiscount(pct)),
            StrategySpec::Fixed(amount) => Box::new(FixedDiscount(amount)),
        }
    }
}

impl DiscountStrategy for StrategySpec {
    fn apply_discount(&self, price: f64) -> f64 {
        match self {
            StrategySpec::None => NoDiscount.apply_discount(price),
            StrategySpec::Percentage(pct) => PercentageDiscount(*pct).apply_discount(price),
            StrategySpec::Fixed(amount) => FixedDiscount(*amount).apply_discount(price),
        }
    }

    fn strategy_name(&self) -> &'static str {
        match self {
            StrategySpec::None => NoDiscount.strategy_name(),
            StrategySpec::Percentage(pct) => PercentageDiscount(*pct).strategy_name(),
            StrategySpec::Fixed(amount) => FixedDiscount(*amount).strategy_name(),
        }
    }
}

impl From<NoDiscount> for StrategySpec {
    fn from(_: NoDiscount) -> Self {
        StrategySpec::None
    }
}

impl From<PercentageDiscount> for StrategySpec {
    fn from(d: PercentageDiscount) -> Self {
        StrategySpec::Percentage(d.0)
    }
}

impl From<FixedDiscount> for StrategySpec {
    fn from(d: FixedDiscount) -> Self {
        StrategySpec::Fixed(d.0)
    }
}

impl fmt::Display for StrategySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategySpec::None => write!(f, "none"),
            StrategySpec::Percentage(pct) => write!(f, "percentage:{pct}"),
            StrategySpec::Fixed(amount) => write!(f, "fixed:{amount}"),
        }
    }
}

impl FromStr for StrategySpec {
    type Err = CatalogError;

    /// Accepts `none`, `percentage:<pct>`, `percent:<pct>`, `<pct>%` and `fixed:<amount>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Ok(StrategySpec::None);
        }
        if let Some(pct) = s.strip_suffix('%') {
            return parse_number(s, pct).map(StrategySpec::Percentage);
        }

        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| CatalogError::invalid_strategy(format!("expected <kind>:<value>, got {s:?}")))?;

        match kind.trim().to_ascii_lowercase().as_str() {
            "percentage" | "percent" => parse_number(s, value).map(StrategySpec::Percentage),
            "fixed" => parse_number(s, value).map(StrategySpec::Fixed),
            other => Err(CatalogError::invalid_strategy(format!(
                "unknown strategy kind {other:?}"
            ))),
        }
    }
}

fn parse_number(input: &str, raw: &str) -> Result<f64, CatalogError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| CatalogError::invalid_strategy(format!("{input:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_textual_forms() {
        assert_eq!("none".parse::<StrategySpec>().unwrap(), StrategySpec::None);
        assert_eq!(" NONE ".parse::<StrategySpec>().unwrap(), StrategySpec::None);
        assert_eq!(
            "percentage:20".parse::<StrategySpec>().unwrap(),
            StrategySpec::Percentage(20.0)
        );
        assert_eq!(
            "percent: 12.5".parse::<StrategySpec>().unwrap(),
            StrategySpec::Percentage(12.5)
        );
        assert_eq!("15%".parse::<StrategySpec>().unwrap(), StrategySpec::Percentage(15.0));
        assert_eq!(
            "fixed:3000".parse::<StrategySpec>().unwrap(),
            StrategySpec::Fixed(3000.0)
        );
    }

    #[test]
    fn does_not_range_check_values() {
        assert_eq!(
            "percentage:250".parse::<StrategySpec>().unwrap(),
            StrategySpec::Percentage(250.0)
        );
        assert_eq!("fixed:-5".parse::<StrategySpec>().unwrap(), StrategySpec::Fixed(-5.0));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "fixed", "fixed:abc", "bogus:1", "%"] {
            let err = bad.parse::<StrategySpec>().unwrap_err();
            match err {
                CatalogError::InvalidStrategy(_) => {}
                other => panic!("Expected InvalidStrategy for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for spec in [
            StrategySpec::None,
            StrategySpec::Percentage(15.0),
            StrategySpec::Fixed(3000.5),
        ] {
            assert_eq!(spec.to_string().parse::<StrategySpec>().unwrap(), spec);
        }
    }

    #[test]
    fn deserializes_tagged_json() {
        let spec: StrategySpec =
            serde_json::from_str(r#"{"kind":"percentage","value":20.0}"#).unwrap();
        assert_eq!(spec, StrategySpec::Percentage(20.0));

        let spec: StrategySpec = serde_json::from_str(r#"{"kind":"none"}"#).unwrap();
        assert_eq!(spec, StrategySpec::None);
    }

    #[test]
    fn delegates_to_concrete_strategies() {
        let cases: [(StrategySpec, Box<dyn DiscountStrategy>); 3] = [
            (StrategySpec::None, Box::new(NoDiscount)),
            (StrategySpec::Percentage(15.0), Box::new(PercentageDiscount(15.0))),
            (StrategySpec::Fixed(50.0), Box::new(FixedDiscount(50.0))),
        ];

        for (spec, concrete) in cases {
            assert_eq!(spec.apply_discount(300.0), concrete.apply_discount(300.0));
            assert_eq!(spec.strategy_name(), concrete.strategy_name());

            let boxed = spec.into_boxed();
            assert_eq!(boxed.apply_discount(300.0), concrete.apply_discount(300.0));
            assert_eq!(boxed.strategy_name(), concrete.strategy_name());
        }
    }
}
