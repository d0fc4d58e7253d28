//! The tools module provides helper functions around the Huffman core.
//!
//! The tools are:
//! - cli: Command line interface.
//! - data_in: Read a text file into memory.
//! - freq_count: Frequency count of the symbols of a text.
//! - report: Encoded length statistics for a code table.
//!
pub mod cli;
pub mod data_in;
pub mod freq_count;
pub mod report;
