//! Prefix-coded text decoding.
//!
//! Strings are stored as a bit-packed walk through the [`TextTrie`]: each
//! bit selects `child0` or `child1`, landing on a symbol node emits that
//! symbol and restarts at the root, and landing on the terminator ends the
//! string. The final byte is padded, so a decoded string always consumes a
//! whole number of bytes.

use log::trace;
use super::codec::bits::BitReader;
use super::codec::utf8;
use super::trie::TextTrie;
use super::types::error::{HadError, Result};
use super::types::models::{Cursor, DecodedText, Symbol};

/// Decodes one terminated string from the start of `encoded`.
///
/// # Errors
/// - `EmptyTrie` if the trie has no root
/// - `InvalidBitSequence` if a bit leads to a missing child
/// - `UnterminatedStream` if `encoded` ends before the terminator
/// - `InvalidCodePoint` if a leaf holds a non-scalar value
pub fn decode_text(encoded: &[u8], trie: &TextTrie) -> Result<DecodedText> {
    let root = trie.root().ok_or(HadError::EmptyTrie)?;
    if root.symbol() != Symbol::None {
        return Err(HadError::InvalidFormat(
            "Trie root carries a symbol and cannot start a walk".to_string(),
        ));
    }

    let mut output = Vec::new();
    let mut symbols = 0usize;
    let mut current = root;
    let mut bits = BitReader::new(encoded);

    while let Some(bit) = bits.read_bool() {
        let next = current
            .child(bit)
            .index()
            .and_then(|index| trie.node(index))
            .ok_or(HadError::InvalidBitSequence {
                offset: bits.byte_offset(),
            })?;

        match next.symbol() {
            Symbol::None => current = next,
            Symbol::CodePoint(code_point) => {
                utf8::push_code_point(&mut output, code_point)?;
                symbols += 1;
                current = root;
            }
            Symbol::Terminator => {
                let bytes_consumed = bits.bytes_consumed();
                let text = String::from_utf8(output).map_err(|e| e.utf8_error())?;
                trace!(
                    "Decoded {} symbols from {} bytes ({} bits)",
                    symbols,
                    bytes_consumed,
                    bits.bit_count()
                );
                return Ok(DecodedText {
                    text,
                    bytes_consumed,
                });
            }
        }
    }

    Err(HadError::UnterminatedStream { len: encoded.len() })
}

impl<'a> Cursor<'a> {
    /// Decodes a string at the cursor and returns the cursor past it.
    pub fn read_text(self, trie: &TextTrie) -> Result<(String, Cursor<'a>)> {
        let decoded = decode_text(self.remaining(), trie)?;
        let next = self.advance(decoded.bytes_consumed)?;
        Ok((decoded.text, next))
    }
}
