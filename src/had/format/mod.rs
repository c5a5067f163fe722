//! Container parsing layer for `.had` asset files.
//!
//! # Architecture
//!
//! ```text
//! Palette section:
//! ┌─────────────────┐
//! │  Count (u8)     │ ← palette::read_palette_list()
//! ├─────────────────┤
//! │  Name (bits)    │ ← text::decode_text()
//! │  7 x RGB555     │ ← palette::read_palette()
//! ├─────────────────┤
//! │  ...            │
//! └─────────────────┘
//! ```

pub mod palette;
