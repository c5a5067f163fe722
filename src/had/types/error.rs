//! Custom error types for the had-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum HadError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The trie buffer is not a whole number of fixed-size records.
    #[error("Malformed trie data: {len} bytes is not a multiple of the {record_size}-byte record size")]
    MalformedTrieData { len: usize, record_size: usize },

    /// Decoding was attempted with a trie that has no nodes.
    #[error("Trie has no nodes")]
    EmptyTrie,

    /// The bit walk reached a child reference that does not exist.
    #[error("Invalid bit sequence in byte at offset {offset}")]
    InvalidBitSequence { offset: usize },

    /// The input ended before the terminator symbol was decoded.
    #[error("Unterminated text stream: no terminator within {len} bytes")]
    UnterminatedStream { len: usize },

    /// A trie leaf carries a value that is not a Unicode scalar value.
    #[error("Invalid code point: {0:#x}")]
    InvalidCodePoint(u32),

    /// Decoded bytes did not form valid UTF-8.
    #[error("Invalid UTF-8 in decoded text: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A buffer or field has an unexpected size.
    #[error("Size mismatch for {context}: expected {expected} bytes, but found {found} bytes")]
    SizeMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    /// The data is structurally invalid.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// A convenience `Result` type alias using the crate's `HadError` type.
pub type Result<T> = std::result::Result<T, HadError>;
