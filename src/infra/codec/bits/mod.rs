//! Bit-field primitives shared by every payload codec.
//!
//! FRC payloads describe their fields MSB-first inside each byte, with byte 0
//! being the first byte on the wire. A field either lives inside a single byte
//! or straddles two adjacent bytes; in the latter case the most-significant
//! part sits in the first byte and the least-significant part in the next one:
//!
//! ```text
//! byte0: -----HHH   high part: lsb 0, mask 0b111
//! byte1: LLL-----   low part:  lsb 5, mask 0b111, shift 3
//! value = (HHH << 3) | LLL
//! ```
//!
//! The free functions operate on raw buffers; [`BitField`] and [`SplitField`]
//! bundle their arguments into `const` descriptors so message layouts read as
//! tables.
//!
//! # Panics
//!
//! Every function indexes the buffer directly and panics when `byte_index`
//! is out of range. Descriptors are declared against fixed-size buffers, so
//! an out-of-range index is a layout bug, not a runtime condition.

/// Read `(buffer[byte_index] >> lsb) & mask`.
#[inline]
pub fn extract_single(buffer: &[u8], byte_index: usize, lsb: u8, mask: u8) -> u8 {
    (buffer[byte_index] >> lsb) & mask
}

/// Read a field split across two bytes and merge both parts.
///
/// The high part is shifted left by `shift` (the width of the low part)
/// before being OR-ed with the low part.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn extract_pair(
    buffer: &[u8],
    byte_hi: usize,
    lsb_hi: u8,
    mask_hi: u8,
    byte_lo: usize,
    lsb_lo: u8,
    mask_lo: u8,
    shift: u8,
) -> u16 {
    let high = extract_single(buffer, byte_hi, lsb_hi, mask_hi) as u16;
    let low = extract_single(buffer, byte_lo, lsb_lo, mask_lo) as u16;
    (high << shift) | low
}

/// Read-modify-write of a bit range inside one byte.
///
/// The target range is cleared, `value` is truncated to `mask`, then OR-ed in
/// at `lsb`. Bits outside the range are preserved.
#[inline]
pub fn insert_single(buffer: &mut [u8], value: u16, byte_index: usize, lsb: u8, mask: u8) {
    let cleared = buffer[byte_index] & !(mask << lsb);
    let bits = (value as u8) & mask;
    buffer[byte_index] = cleared | (bits << lsb);
}

/// Write a field split across two bytes.
///
/// `value >> shift` goes into the high part, the remaining low bits into the
/// low part. Bits above the combined width are dropped.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn insert_pair(
    buffer: &mut [u8],
    value: u16,
    byte_hi: usize,
    lsb_hi: u8,
    mask_hi: u8,
    byte_lo: usize,
    lsb_lo: u8,
    mask_lo: u8,
    shift: u8,
) {
    insert_single(buffer, value >> shift, byte_hi, lsb_hi, mask_hi);
    insert_single(buffer, value, byte_lo, lsb_lo, mask_lo);
}

//==================================================================================BIT_FIELD
/// Location of a field contained in a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    /// Index of the byte holding the field.
    pub byte: usize,
    /// Position of the field's least-significant bit inside the byte.
    pub lsb: u8,
    /// Right-aligned mask, e.g. `0x1F` for a 5-bit field.
    pub mask: u8,
}

impl BitField {
    pub const fn new(byte: usize, lsb: u8, mask: u8) -> Self {
        Self { byte, lsb, mask }
    }

    /// Number of bits covered by the mask.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.mask.count_ones()
    }

    #[inline]
    pub fn get(&self, buffer: &[u8]) -> u8 {
        extract_single(buffer, self.byte, self.lsb, self.mask)
    }

    #[inline]
    pub fn set(&self, buffer: &mut [u8], value: u8) {
        insert_single(buffer, value as u16, self.byte, self.lsb, self.mask)
    }
}

//==================================================================================SPLIT_FIELD
/// Location of a field straddling two adjacent bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SplitField {
    /// Most-significant part.
    pub high: BitField,
    /// Least-significant part.
    pub low: BitField,
    /// Left shift applied to the high part; equals the width of `low`.
    pub shift: u8,
}

impl SplitField {
    pub const fn new(high: BitField, low: BitField, shift: u8) -> Self {
        Self { high, low, shift }
    }

    /// Total width of the logical field.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.high.width() + self.low.width()
    }

    #[inline]
    pub fn get(&self, buffer: &[u8]) -> u16 {
        extract_pair(
            buffer,
            self.high.byte,
            self.high.lsb,
            self.high.mask,
            self.low.byte,
            self.low.lsb,
            self.low.mask,
            self.shift,
        )
    }

    #[inline]
    pub fn set(&self, buffer: &mut [u8], value: u16) {
        insert_pair(
            buffer,
            value,
            self.high.byte,
            self.high.lsb,
            self.high.mask,
            self.low.byte,
            self.low.lsb,
            self.low.mask,
            self.shift,
        )
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
