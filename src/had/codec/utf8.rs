//! Code point to UTF-8 conversion.

use crate::had::types::error::{HadError, Result};

/// Number of UTF-8 bytes needed for `code_point`, by range.
#[inline]
pub fn encoded_len(code_point: u32) -> usize {
    if code_point < 0x80 {
        1
    } else if code_point < 0x800 {
        2
    } else if code_point < 0x10000 {
        3
    } else {
        4
    }
}

/// Appends the UTF-8 encoding of `code_point` to `output`.
///
/// Returns the number of bytes written.
///
/// # Errors
/// `InvalidCodePoint` for surrogates and values above `0x10FFFF`, which
/// have no valid UTF-8 form.
pub fn push_code_point(output: &mut Vec<u8>, code_point: u32) -> Result<usize> {
    if (0xD800..=0xDFFF).contains(&code_point) || code_point > 0x10FFFF {
        return Err(HadError::InvalidCodePoint(code_point));
    }

    let c = code_point;
    let len = encoded_len(c);
    match len {
        1 => output.push(c as u8),
        2 => output.extend_from_slice(&[
            0xC0 | (c >> 6) as u8,
            0x80 | (c & 0x3F) as u8,
        ]),
        3 => output.extend_from_slice(&[
            0xE0 | (c >> 12) as u8,
            0x80 | ((c >> 6) & 0x3F) as u8,
            0x80 | (c & 0x3F) as u8,
        ]),
        _ => output.extend_from_slice(&[
            0xF0 | (c >> 18) as u8,
            0x80 | ((c >> 12) & 0x3F) as u8,
            0x80 | ((c >> 6) & 0x3F) as u8,
            0x80 | (c & 0x3F) as u8,
        ]),
    }
    Ok(len)
}
