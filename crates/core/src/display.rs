//! Display line format shared by both catalog variants.
//!
//! Output goes to an injected `io::Write` sink instead of the process stdout, so
//! golden-output tests can render into a `Vec<u8>`.

use std::io::Write;

use crate::error::CatalogResult;

/// Currency glyph appended to every rendered amount.
pub const CURRENCY_SYMBOL: &str = "₺";

/// Which label a display line carries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Leaf line, labelled `Price`.
    Product,
    /// Composite line, labelled `Total`.
    Bundle,
}

impl LineKind {
    pub fn label(self) -> &'static str {
        match self {
            LineKind::Product => "Price",
            LineKind::Bundle => "Total",
        }
    }
}

/// Write one node line, indented by `depth` spaces:
/// `- {name} | {Price|Total}: {total:.2}₺ | Strategy: {strategy}`.
pub fn write_line<W: Write + ?Sized>(
    out: &mut W,
    depth: usize,
    kind: LineKind,
    name: &str,
    total: f64,
    strategy_name: &str,
) -> CatalogResult<()> {
    writeln!(
        out,
        "{:indent$}- {name} | {label}: {total:.2}{CURRENCY_SYMBOL} | Strategy: {strategy_name}",
        "",
        indent = depth,
        label = kind.label(),
    )?;
    Ok(())
}
