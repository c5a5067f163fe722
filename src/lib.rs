//! # had-reader
//!
//! A reader for `.had` asset files. Strings in these files are stored as a
//! bit-packed prefix code described by a separate `trie.bin` table; palettes
//! pair a prefix-coded name with seven RGB555 colors.
//!
//! Only decoding is supported.
pub mod had;

// Re-export the main types for convenience
pub use had::{
    build_trie,
    decode_text,
    format::palette::parse_palettes,
    types::models::{Child, Color, Cursor, DecodedText, Palette, TrieNode, TERMINATOR},
    utils::load_bytes,
    HadError,
    HadReader,
    Result,
    TextTrie,
};
