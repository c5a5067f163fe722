use std::path::Path;
use log::info;

use super::format::palette;
use super::text;
use super::trie::{self, TextTrie};
use super::types::error::{HadError, Result};
use super::types::models::{DecodedText, Palette};
use super::utils;

/// The main reader for `.had` asset files.
///
/// Owns the asset bytes and the text trie used to decode strings inside
/// them. The trie is built once, when the reader is created, and is only
/// borrowed afterwards.
#[derive(Debug)]
pub struct HadReader {
    data: Vec<u8>,
    trie: TextTrie,
}

impl HadReader {
    /// Loads an asset file and the trie file it was encoded with.
    ///
    /// # Arguments
    /// * `asset_path` - Path to the `.had` asset
    /// * `trie_path` - Path to the `trie.bin` prefix-code table
    ///
    /// # Errors
    /// Returns an error if:
    /// - Either file cannot be read
    /// - The trie file is not a whole number of records
    /// - The trie has dangling child indices or not exactly one terminator
    pub fn new(asset_path: impl AsRef<Path>, trie_path: impl AsRef<Path>) -> Result<Self> {
        let asset_path = asset_path.as_ref();
        info!("Opening asset file: {}", asset_path.display());
        let trie_bytes = utils::load_bytes(trie_path)?;
        let data = utils::load_bytes(asset_path)?;
        Self::from_bytes(data, &trie_bytes)
    }

    /// Builds a reader from bytes already in memory.
    pub fn from_bytes(data: Vec<u8>, trie_bytes: &[u8]) -> Result<Self> {
        let trie = trie::build_trie(trie_bytes)?;
        trie.verify()?;
        info!(
            "Asset ready: {} bytes, {} trie nodes",
            data.len(),
            trie.len()
        );
        Ok(Self { data, trie })
    }

    pub fn trie(&self) -> &TextTrie {
        &self.trie
    }

    /// Raw asset bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Parses the palette list at the start of the asset.
    pub fn palettes(&self) -> Result<Vec<Palette>> {
        palette::parse_palettes(&self.data, &self.trie)
    }

    /// Decodes the string that starts at `offset` in the asset.
    pub fn decode_text_at(&self, offset: usize) -> Result<DecodedText> {
        let encoded = self.data.get(offset..).ok_or_else(|| {
            HadError::InvalidFormat(format!(
                "Text offset {} is beyond the asset size of {} bytes",
                offset,
                self.data.len()
            ))
        })?;
        text::decode_text(encoded, &self.trie)
    }
}
