//! The huffman module builds the code used to compress text.
//!
//! A Huffman tree is built from the symbol frequencies: the two lightest nodes are merged until one
//! root remains, so frequent symbols end up near the root. The path from the root to a leaf
//! ("0" for left, "1" for right) is that leaf's code. No code is a prefix of another, which is what
//! lets the decoder read codes back without any separators.
//!
//! - huffman: Tree nodes and the tree builder.
//! - bit_string: Sequences of code steps.
//! - code_table: Symbol to code and code to symbol lookups, built from the tree.
//!

pub mod bit_string;
pub mod code_table;
pub mod huffman;
