use log::{error, info};

use super::compress::encode;
use super::decompress::decode;
use crate::errors::{HuffmanError, Result};
use crate::huffman_coding::bit_string::BitString;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::freq_count::FreqTable;
use crate::tools::report::Report;

/// Everything built from one text: its frequencies, the tree (none for empty text) and the code table.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    freqs: FreqTable,
    tree: Option<HuffmanTree>,
    table: CodeTable,
}

impl HuffmanCodec {
    /// Count, build the tree, then the code table.
    pub fn build(text: &str) -> Self {
        let freqs = FreqTable::from_text(text);
        let tree = HuffmanTree::from_freqs(&freqs);
        let table = CodeTable::from_tree(tree.as_ref());
        info!(
            "Built {} codes from {} symbols",
            table.len(),
            freqs.total()
        );
        Self { freqs, tree, table }
    }

    pub fn encode(&self, text: &str) -> Result<BitString> {
        encode(text, &self.table)
    }

    pub fn decode(&self, bits: &BitString) -> Result<String> {
        decode(bits, &self.table)
    }

    /// Decode `bits` and make sure it gives back `text` exactly.
    pub fn verify(&self, text: &str, bits: &BitString) -> Result<()> {
        let decoded = self.decode(bits)?;
        if decoded == text {
            return Ok(());
        }
        let position = decoded
            .chars()
            .zip(text.chars())
            .take_while(|(a, b)| a == b)
            .count();
        error!("Round trip mismatch at character {}", position);
        Err(HuffmanError::RoundTripMismatch { position })
    }

    pub fn freqs(&self) -> &FreqTable {
        &self.freqs
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Size statistics for encoding `text` (normally the text the codec was built from).
    pub fn report(&self, text: &str) -> Report {
        Report::new(text, &self.freqs, &self.table)
    }
}
