//! The compression module turns text into code steps and back.
//!
//! - compress: Encode text with a built code table.
//! - decompress: Decode code steps with a built code table.
//! - codec: One-shot build of frequency table, tree and code table from a text, with encode/decode on top.
//!
//! Both directions need the code table to exist first. They only read it.

pub mod codec;
pub mod compress;
pub mod decompress;
