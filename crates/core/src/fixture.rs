//! Benchmark workload parameters.
//!
//! Both catalog variants build the same fixture: one bundle holding `FIXTURE_SIZE`
//! undiscounted products, priced `(i + 1) * 100.0`, under a 15% bundle discount.
//! Totals are only comparable across variants if these stay in lockstep.

pub const FIXTURE_BUNDLE_NAME: &str = "Gaming Bundle";
pub const FIXTURE_SIZE: usize = 100_000;
pub const FIXTURE_DISCOUNT_PERCENT: f64 = 15.0;

pub fn fixture_product_name(index: usize) -> String {
    format!("Product {index}")
}

pub fn fixture_price(index: usize) -> f64 {
    (index + 1) as f64 * 100.0
}

/// Undiscounted sum of a fixture with `size` products: `100 * n(n+1)/2`.
pub fn expected_fixture_subtotal(size: usize) -> f64 {
    let n = size as u128;
    (100 * n * (n + 1) / 2) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_fixture_products() {
        assert_eq!(fixture_product_name(0), "Product 0");
        assert_eq!(fixture_price(0), 100.0);
        assert_eq!(fixture_product_name(FIXTURE_SIZE - 1), "Product 99999");
        assert_eq!(fixture_price(FIXTURE_SIZE - 1), 10_000_000.0);
    }

    #[test]
    fn closed_form_subtotal_matches_sequential_sum() {
        let sequential: f64 = (0..FIXTURE_SIZE).map(fixture_price).sum();
        assert_eq!(expected_fixture_subtotal(FIXTURE_SIZE), 500_005_000_000.0);
        assert_eq!(sequential, 500_005_000_000.0);
        assert_eq!(expected_fixture_subtotal(0), 0.0);
        assert_eq!(expected_fixture_subtotal(2), 300.0);
    }
}
