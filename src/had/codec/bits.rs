//! Bit processing utilities
//!
//! Encoded text is packed most-significant bit first; the last byte of a
//! string is padded with zero bits.

/// Reads single bits, MSB first, from a bounded byte slice.
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_position: 0,
        }
    }

    /// Next bit, or `None` once the slice is exhausted.
    #[inline]
    pub fn read_bool(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.bit_position / 8)?;
        let shift = 7 - (self.bit_position % 8);
        self.bit_position += 1;
        Some((byte >> shift) & 1 != 0)
    }

    /// Offset of the byte holding the most recently read bit.
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.bit_position.saturating_sub(1) / 8
    }

    /// Number of bytes touched so far, counting a partly read byte as whole.
    #[inline]
    pub fn bytes_consumed(&self) -> usize {
        (self.bit_position + 7) / 8
    }

    /// Number of bits read so far.
    pub fn bit_count(&self) -> usize {
        self.bit_position
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.read_bool()
    }
}
