use std::io;
use std::path::PathBuf;

/// Everything that can go wrong between reading the text and getting it back out of the codes.
///
/// None of these are retryable. They are reported by the call that detects them.
#[derive(Debug, thiserror::Error)]
pub enum HuffmanError {
    /// The text source does not exist. Nothing gets built.
    #[error("nonexistent file: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Any other failure while reading the text source.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The text holds a symbol the code table was never built for.
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    /// The code sequence ran out (or went past any valid code) while a partial code was pending.
    #[error("malformed code sequence: unmatched steps {pending:?} ending at step {position}")]
    MalformedCode { position: usize, pending: String },

    /// Decoding the encoded text did not give back the text it was encoded from.
    #[error("round trip mismatch at character {position}")]
    RoundTripMismatch { position: usize },

    /// A textual code sequence held something other than '0' or '1'.
    #[error("invalid code step {step:?} at position {position}")]
    InvalidStep { step: char, position: usize },
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
