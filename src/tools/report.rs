use std::fmt::{Display, Formatter};

use crate::huffman_coding::code_table::CodeTable;
use crate::tools::freq_count::FreqTable;

/// Total encoded length in steps: the sum over symbols of count times code length.
/// Symbols missing from the table contribute nothing.
pub fn weighted_length(freqs: &FreqTable, table: &CodeTable) -> u64 {
    freqs
        .sorted()
        .iter()
        .filter_map(|&(s, c)| table.code(s).map(|code| c * code.len() as u64))
        .sum()
}

/// Steps needed by a fixed-width code over the same alphabet (never less than one step per symbol).
pub fn fixed_width_length(freqs: &FreqTable) -> u64 {
    if freqs.is_empty() {
        return 0;
    }
    freqs.total() * fixed_width(freqs.len()) as u64
}

/// ceil(log2(k)), at least 1.
fn fixed_width(k: usize) -> u32 {
    (usize::BITS - (k.max(2) - 1).leading_zeros()).max(1)
}

/// Summary of how well a code table does on the text it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub symbols: u64,
    pub distinct: usize,
    pub encoded_bits: u64,
    pub fixed_bits: u64,
    pub raw_bits: u64,
}

impl Report {
    pub fn new(text: &str, freqs: &FreqTable, table: &CodeTable) -> Self {
        Self {
            symbols: freqs.total(),
            distinct: freqs.len(),
            encoded_bits: weighted_length(freqs, table),
            fixed_bits: fixed_width_length(freqs),
            raw_bits: text.len() as u64 * 8,
        }
    }

    /// Encoded size over raw size. Zero for empty text.
    pub fn ratio(&self) -> f64 {
        if self.raw_bits == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.raw_bits as f64
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} symbols ({} distinct): {} bits encoded, {} bits fixed-width, {} bits raw, ratio {:.3}",
            self.symbols,
            self.distinct,
            self.encoded_bits,
            self.fixed_bits,
            self.raw_bits,
            self.ratio()
        )
    }
}
