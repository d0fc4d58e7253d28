use log::{debug, error};

use crate::errors::{HuffmanError, Result};
use crate::huffman_coding::bit_string::BitString;
use crate::huffman_coding::code_table::CodeTable;

/// Turn a sequence of code steps back into text.
///
/// Steps are gathered into a candidate code until it matches a table entry, which is emitted before
/// starting over. Because the codes are prefix-free the first match is the right one. Input that
/// ends on an unmatched candidate, or whose candidate outgrows the longest code, is rejected.
pub fn decode(bits: &BitString, table: &CodeTable) -> Result<String> {
    let mut text = String::new();
    let mut candidate = BitString::with_capacity(table.max_len());

    for (position, step) in bits.iter().enumerate() {
        candidate.push(step);
        if let Some(symbol) = table.symbol(&candidate) {
            text.push(symbol);
            candidate.clear();
        } else if candidate.len() >= table.max_len() {
            error!("No code matches {} at step {}", candidate, position);
            return Err(HuffmanError::MalformedCode {
                position,
                pending: candidate.to_string(),
            });
        }
    }

    if !candidate.is_empty() {
        error!("Code sequence ends inside a code: {}", candidate);
        return Err(HuffmanError::MalformedCode {
            position: bits.len(),
            pending: candidate.to_string(),
        });
    }
    debug!("Decoded {} steps into {} bytes of text", bits.len(), text.len());
    Ok(text)
}
