use log::debug;

use crate::errors::{HuffmanError, Result};
use crate::huffman_coding::bit_string::BitString;
use crate::huffman_coding::code_table::CodeTable;

/// Replace every character of the text with its code, in text order.
///
/// A character without a code is an error; nothing is dropped or substituted.
pub fn encode(text: &str, table: &CodeTable) -> Result<BitString> {
    // Every code is at least one step, and there are no more chars than bytes.
    let mut bits = BitString::with_capacity(text.len());
    for (position, symbol) in text.chars().enumerate() {
        let code = table
            .code(symbol)
            .ok_or(HuffmanError::UnknownSymbol { symbol, position })?;
        bits.extend_from(code);
    }
    debug!("Encoded {} bytes of text into {} steps", text.len(), bits.len());
    Ok(bits)
}
