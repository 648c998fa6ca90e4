//! Symbol sequence → bit sequence.

use tracing::debug;

use crate::bit::Bit;
use crate::code::CodeTable;
use crate::error::{CodeError, Result};
use crate::symbol::Symbol;

/// Concatenate the codeword of every symbol, in input order.
///
/// # Errors
/// Returns `CodeError::UnknownSymbol` for the first symbol without a
/// codeword. This only happens when the table was derived from a different
/// input than `symbols`.
pub fn encode<S: Symbol>(symbols: &[S], table: &CodeTable<S>) -> Result<Vec<Bit>> {
    let mut bits = Vec::new();
    encode_into(symbols, table, &mut bits)?;
    Ok(bits)
}

/// Like [`encode`], appending to an existing buffer.
///
/// On error `out` keeps the bits of the symbols before the unknown one.
pub fn encode_into<S: Symbol>(
    symbols: &[S],
    table: &CodeTable<S>,
    out: &mut Vec<Bit>,
) -> Result<()> {
    let start = out.len();
    for (position, symbol) in symbols.iter().enumerate() {
        let code = table.get(symbol).ok_or_else(|| CodeError::UnknownSymbol {
            symbol: format!("{symbol:?}"),
            position,
        })?;
        out.extend_from_slice(code.bits());
    }
    debug!(
        symbols = symbols.len(),
        bits = out.len() - start,
        "encoded sequence"
    );
    Ok(())
}
