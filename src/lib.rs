//! Static Huffman coding of text.
//!
//! Builds a prefix-free code from the character frequencies of a text, then uses it to turn the
//! text into a sequence of code steps and back.
//!
//! Basic usage:
//!
//! ```
//! use huffman_text::HuffmanCodec;
//!
//! let text = "abracadabra\n";
//! let codec = HuffmanCodec::build(text);
//! let bits = codec.encode(text).unwrap();
//! assert_eq!(codec.decode(&bits).unwrap(), text);
//! ```
//!
//! From the command line:
//!
//! `$> huff -t -c test.txt`
//!
//! This prints the code table for test.txt and checks that the encoded text decodes back.
//!
pub mod compression;
pub mod errors;
pub mod huffman_coding;
pub mod tools;

pub use compression::codec::HuffmanCodec;
pub use errors::HuffmanError;
pub use huffman_coding::bit_string::BitString;
