//! Statically dispatched node interface.

use std::io::Write;

use bundlebench_core::CatalogResult;

/// Node in a homogeneous catalog tree.
///
/// Not meant for `dyn` use: `display` is generic over the sink, and strategy
/// replacement lives on the concrete types because it changes the node's type.
pub trait ProductComponent {
    fn name(&self) -> &str;

    fn total_price(&self) -> f64;

    fn strategy_name(&self) -> &'static str;

    fn display<W: Write + ?Sized>(&self, depth: usize, out: &mut W) -> CatalogResult<()>;
}
