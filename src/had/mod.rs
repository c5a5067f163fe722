//! Core `.had` asset reader module
//!
//! Decoding happens in two explicit steps: build a [`TextTrie`] from the
//! trie file, then pass it by reference to every text decode. There is no
//! hidden global trie.

pub mod codec;
pub mod format;
pub mod reader;
pub mod text;
pub mod trie;
pub mod types;
pub mod utils;

pub use reader::HadReader;
pub use text::decode_text;
pub use trie::{build_trie, TextTrie};
pub use types::error::{HadError, Result};
