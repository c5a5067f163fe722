//! Palette list parsing.
//!
//! # Layout
//! ```text
//! [1 byte ] palette count
//! per palette:
//!   [N bytes] prefix-coded name, padded to a byte boundary
//!   [7 x 2  ] colors, big-endian u16, RRRRRGGGGGBBBBBx
//! ```

use log::{debug, trace};
use crate::had::trie::TextTrie;
use crate::had::types::error::Result;
use crate::had::types::models::{Color, Cursor, Palette, COLORS_PER_PALETTE};

/// Bytes taken by the color block of one palette.
pub const COLOR_BLOCK_SIZE: usize = COLORS_PER_PALETTE * 2;

/// Parses a complete palette list from the start of `data`.
pub fn parse_palettes(data: &[u8], trie: &TextTrie) -> Result<Vec<Palette>> {
    let (palettes, rest) = read_palette_list(Cursor::new(data), trie)?;
    if !rest.is_empty() {
        debug!("{} bytes follow the palette list", rest.remaining_len());
    }
    Ok(palettes)
}

/// Reads the count byte and every palette after it.
pub fn read_palette_list<'a>(
    cursor: Cursor<'a>,
    trie: &TextTrie,
) -> Result<(Vec<Palette>, Cursor<'a>)> {
    let (count, mut cursor) = cursor.read_u8("palette count")?;
    let count = count as usize;
    debug!("Palette count: {}", count);

    let mut palettes = Vec::with_capacity(count);
    for _ in 0..count {
        let (palette, next) = read_palette(cursor, trie)?;
        palettes.push(palette);
        cursor = next;
    }
    Ok((palettes, cursor))
}

/// Reads one palette: its name followed by its color block.
pub fn read_palette<'a>(cursor: Cursor<'a>, trie: &TextTrie) -> Result<(Palette, Cursor<'a>)> {
    let start = cursor.offset();
    let (name, mut cursor) = cursor.read_text(trie)?;

    let mut colors = [Color::from_raw(0); COLORS_PER_PALETTE];
    for color in colors.iter_mut() {
        let (raw, next) = cursor.read_u16_be("palette color")?;
        *color = Color::from_raw(raw);
        cursor = next;
    }

    trace!("Palette {:?} at offset {}", name, start);
    Ok((Palette { name, colors }, cursor))
}
