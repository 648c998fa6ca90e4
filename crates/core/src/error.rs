//! Error types for the huffcode system.
//!
//! All operations return structured errors rather than panicking. The core is
//! purely functional over its inputs, so none of these are transient: nothing
//! is retried, and there is no partial-result mode.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Code: tree construction, encoding or decoding
/// - Bit: parsing a textual bit string
/// - I/O: reading input text (application only)
#[derive(Debug, Error)]
pub enum Error {
    /// Prefix-code error (empty input, unknown symbol, truncated code)
    #[error("prefix code error: {0}")]
    Code(#[from] CodeError),

    /// Malformed textual bit string
    #[error("bit string error: {0}")]
    Bit(#[from] BitError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the build → derive → encode → decode pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    /// No symbols to build a tree from. Callers handle the "nothing to
    /// encode" case before asking for a tree.
    #[error("empty input: cannot build a code from zero symbols")]
    EmptyInput,

    /// A symbol in the sequence has no codeword in the table.
    ///
    /// The symbol is kept as its `Debug` rendering so this type stays
    /// independent of the symbol type.
    #[error("symbol {symbol} at position {position} has no codeword")]
    UnknownSymbol { symbol: String, position: usize },

    /// The bit sequence ended strictly between the root and a leaf.
    #[error("bit sequence truncated after {consumed} bits ({dangling} bits into an unfinished codeword)")]
    TruncatedCode { consumed: usize, dangling: usize },
}

/// Errors parsing a textual bit string such as `"0110"`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitError {
    /// A character other than `'0'` or `'1'`
    #[error("invalid bit digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
