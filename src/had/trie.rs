//! Text trie construction.
//!
//! The trie file is a flat run of 10-byte big-endian records, with no
//! header:
//!
//! ```text
//! [4 bytes] code point (0 = internal node, 0xFFFFFFFF = terminator)
//! [2 bytes] frequency
//! [2 bytes] code
//! [1 byte ] child index for bit 0 (0 = none)
//! [1 byte ] child index for bit 1 (0 = none)
//! ```
//!
//! Record order defines node indices; node 0 is the root.

use std::collections::HashSet;
use byteorder::{BigEndian, ReadBytesExt};
use log::debug;
use super::types::error::{HadError, Result};
use super::types::models::{Child, Symbol, TrieNode};

/// Size of one on-disk trie record.
pub const RECORD_SIZE: usize = 10;

/// An immutable prefix-code trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTrie {
    nodes: Vec<TrieNode>,
}

/// Parses raw trie bytes into a [`TextTrie`].
///
/// Child indices and the terminator count are not checked here; see
/// [`TextTrie::verify`].
///
/// # Errors
/// `MalformedTrieData` if the length is not a multiple of [`RECORD_SIZE`].
pub fn build_trie(raw: &[u8]) -> Result<TextTrie> {
    if raw.len() % RECORD_SIZE != 0 {
        return Err(HadError::MalformedTrieData {
            len: raw.len(),
            record_size: RECORD_SIZE,
        });
    }

    let nodes = raw
        .chunks_exact(RECORD_SIZE)
        .map(parse_record)
        .collect::<Result<Vec<_>>>()?;

    debug!("Built text trie with {} nodes", nodes.len());
    Ok(TextTrie { nodes })
}

fn parse_record(mut record: &[u8]) -> Result<TrieNode> {
    let code_point = record.read_u32::<BigEndian>()?;
    let frequency = record.read_u16::<BigEndian>()?;
    let code = record.read_u16::<BigEndian>()?;
    let child0 = Child::from_raw(record.read_u8()?);
    let child1 = Child::from_raw(record.read_u8()?);
    Ok(TrieNode {
        code_point,
        frequency,
        code,
        child0,
        child1,
    })
}

impl TextTrie {
    pub fn from_nodes(nodes: Vec<TrieNode>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[TrieNode] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, index: usize) -> Option<&TrieNode> {
        self.nodes.get(index)
    }

    pub fn root(&self) -> Option<&TrieNode> {
        self.nodes.first()
    }

    /// Checks the structural preconditions decoding relies on.
    ///
    /// Every child reference must point at an existing node, and exactly one
    /// node must carry the terminator.
    pub fn verify(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(HadError::EmptyTrie);
        }

        let mut terminators = 0;
        for (index, node) in self.nodes.iter().enumerate() {
            for child in [node.child0, node.child1] {
                if let Child::Node(target) = child {
                    if target >= self.nodes.len() {
                        return Err(HadError::InvalidFormat(format!(
                            "Trie node {} points at node {} but only {} nodes exist",
                            index,
                            target,
                            self.nodes.len()
                        )));
                    }
                }
            }
            if node.symbol() == Symbol::Terminator {
                terminators += 1;
            }
        }

        if terminators != 1 {
            return Err(HadError::InvalidFormat(format!(
                "Trie must contain exactly one terminator, found {}",
                terminators
            )));
        }
        Ok(())
    }

    /// Characters that have a leaf reachable from the root.
    pub fn symbols(&self) -> HashSet<char> {
        let mut found = HashSet::new();
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![0usize];
        while let Some(index) = stack.pop() {
            let Some(node) = self.nodes.get(index) else {
                continue;
            };
            if std::mem::replace(&mut seen[index], true) {
                continue;
            }
            match node.symbol() {
                Symbol::CodePoint(code_point) => {
                    if let Some(c) = char::from_u32(code_point) {
                        found.insert(c);
                    }
                }
                Symbol::Terminator => {}
                Symbol::None => {
                    stack.extend(node.child0.index());
                    stack.extend(node.child1.index());
                }
            }
        }
        found
    }

    /// Whether every character of `text` can be represented by this trie.
    ///
    /// Text is compared upper-cased, matching how the editor stores names.
    pub fn supports(&self, text: &str) -> bool {
        let symbols = self.symbols();
        text.to_uppercase().chars().all(|c| symbols.contains(&c))
    }
}
