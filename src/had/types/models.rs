//! Core data structures for `.had` asset components.
//!
//! This module defines the fundamental types used throughout the library:
//! - Trie nodes and child references for the text prefix code
//! - Decoded text results and the byte cursor used to walk an asset
//! - Palette and color values

use std::fmt;
use byteorder::{BigEndian, ByteOrder};
use super::error::{HadError, Result};

/// Code point value reserved for the end-of-text terminator.
pub const TERMINATOR: u32 = 0xFFFF_FFFF;

/// A reference from a trie node to one of its children.
///
/// On disk a child index of 0 means "no child". That value is also the
/// root's index, so the two meanings are split here: the root is never a
/// valid child target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child {
    None,
    Node(usize),
}

impl Child {
    /// Maps an on-disk child byte to a reference.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Child::None,
            index => Child::Node(index as usize),
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Child::None => None,
            Child::Node(index) => Some(*index),
        }
    }
}

/// What a trie node stands for once the walk reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Internal node; keep walking.
    None,
    /// End of the encoded text.
    Terminator,
    /// A literal code point to emit.
    CodePoint(u32),
}

/// A single node of the text prefix-code trie.
///
/// Nodes are stored in file order; that order defines the indices used by
/// `child0`/`child1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieNode {
    /// 0 for internal nodes, [`TERMINATOR`] for end-of-text, otherwise a code point.
    pub code_point: u32,
    /// Symbol frequency the trie was built from. Not used for decoding.
    pub frequency: u16,
    /// Bit pattern of the symbol's code. Not used for decoding.
    pub code: u16,
    /// Followed on a 0 bit.
    pub child0: Child,
    /// Followed on a 1 bit.
    pub child1: Child,
}

impl TrieNode {
    pub fn symbol(&self) -> Symbol {
        match self.code_point {
            0 => Symbol::None,
            TERMINATOR => Symbol::Terminator,
            code_point => Symbol::CodePoint(code_point),
        }
    }

    /// Returns the child taken for `bit`.
    #[inline]
    pub fn child(&self, bit: bool) -> Child {
        if bit {
            self.child1
        } else {
            self.child0
        }
    }
}

/// Result of decoding one prefix-coded string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Decoded text, without the terminator.
    pub text: String,
    /// Number of input bytes used, including the padded byte that holds the terminator.
    pub bytes_consumed: usize,
}

impl DecodedText {
    /// The part of `encoded` that follows the decoded string.
    pub fn remaining<'a>(&self, encoded: &'a [u8]) -> &'a [u8] {
        &encoded[self.bytes_consumed.min(encoded.len())..]
    }
}

/// A read position inside a borrowed buffer.
///
/// Cursors are `Copy`; every read returns a new cursor instead of
/// mutating the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Offset of the next unread byte, relative to the start of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Unread bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.offset..]
    }

    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining_len() == 0
    }

    /// Returns a cursor `count` bytes further on.
    pub fn advance(self, count: usize) -> Result<Cursor<'a>> {
        let found = self.remaining_len();
        if count > found {
            return Err(HadError::SizeMismatch {
                context: "cursor advance",
                expected: count,
                found,
            });
        }
        Ok(Cursor {
            data: self.data,
            offset: self.offset + count,
        })
    }

    /// Splits off the next `count` bytes.
    pub fn take(self, count: usize, context: &'static str) -> Result<(&'a [u8], Cursor<'a>)> {
        let found = self.remaining_len();
        if count > found {
            return Err(HadError::SizeMismatch {
                context,
                expected: count,
                found,
            });
        }
        let bytes = &self.remaining()[..count];
        Ok((bytes, self.advance(count)?))
    }

    /// Reads a single byte.
    pub fn read_u8(self, context: &'static str) -> Result<(u8, Cursor<'a>)> {
        let (bytes, next) = self.take(1, context)?;
        Ok((bytes[0], next))
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16_be(self, context: &'static str) -> Result<(u16, Cursor<'a>)> {
        let (bytes, next) = self.take(2, context)?;
        Ok((BigEndian::read_u16(bytes), next))
    }
}

/// A color stored as a 16-bit `RRRRRGGGGGBBBBBx` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    raw: u16,
}

impl Color {
    pub fn from_raw(raw: u16) -> Self {
        Self { raw }
    }

    /// The stored 16-bit value.
    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// Red channel stretched from 5 to 8 bits.
    pub fn red(&self) -> u8 {
        Self::channel(self.raw >> 11)
    }

    /// Green channel stretched from 5 to 8 bits.
    pub fn green(&self) -> u8 {
        Self::channel(self.raw >> 6)
    }

    /// Blue channel stretched from 5 to 8 bits; the low bit is ignored.
    pub fn blue(&self) -> u8 {
        Self::channel(self.raw >> 1)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// `#rrggbb` form of the expanded channels.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }

    #[inline]
    fn channel(bits: u16) -> u8 {
        ((bits & 0x1F) * 8) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04X} = {}, {}, {}",
            self.raw,
            self.red(),
            self.green(),
            self.blue()
        )
    }
}

/// Number of colors stored per palette. Color 0 is transparent and not stored.
pub const COLORS_PER_PALETTE: usize = 7;

/// A named palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    pub colors: [Color; COLORS_PER_PALETTE],
}
