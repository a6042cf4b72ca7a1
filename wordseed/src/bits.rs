//! Fixed-width, MSB-first bit packing.
//!
//! Mnemonics pack entropy bytes, a short checksum, and 11-bit word indices
//! into one contiguous bit string of at most 264 bits. [`BitWriter`] and
//! [`BitReader`] move values of up to 16 bits in and out of that string
//! without ever materialising it as a big integer.
//!
//! # Example
//! ```
//! use wordseed::bits::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0x7ff, 11);
//!
//! let mut reader = BitReader::new(writer.as_bytes());
//! assert_eq!(reader.read_bits(3), Some(0b101));
//! assert_eq!(reader.read_bits(11), Some(0x7ff));
//! ```

use zeroize::Zeroize;

/// Capacity in bytes: 256 entropy bits + 8 checksum bits.
pub const CAPACITY: usize = 33;

/// Capacity in bits.
pub const CAPACITY_BITS: usize = CAPACITY * 8;

/// Writes values MSB-first into a fixed 33-byte buffer.
///
/// The buffer is zeroized on drop since it holds entropy.
///
/// # Invariants
/// - `len` never exceeds [`CAPACITY_BITS`]
/// - bits past `len` are always zero
#[derive(Clone)]
pub struct BitWriter {
    buf: [u8; CAPACITY],
    len: usize,
}

impl BitWriter {
    /// Create an empty writer.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; CAPACITY],
            len: 0,
        }
    }

    /// Append the low `count` bits of `value`, most significant first.
    ///
    /// Returns `false` and writes nothing if `count` exceeds 16 or the
    /// bits would not fit.
    pub fn write_bits(&mut self, value: u16, count: usize) -> bool {
        if count > 16 || self.len + count > CAPACITY_BITS {
            return false;
        }
        for i in (0..count).rev() {
            if (value >> i) & 1 == 1 {
                self.buf[self.len / 8] |= 0x80 >> (self.len % 8);
            }
            self.len += 1;
        }
        true
    }

    /// Append whole bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> bool {
        if self.len + bytes.len() * 8 > CAPACITY_BITS {
            return false;
        }
        bytes.iter().all(|&b| self.write_bits(u16::from(b), 8))
    }

    /// Number of bits written so far.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The written bits, padded with zeros to a whole byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len.div_ceil(8)]
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BitWriter {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

impl core::fmt::Debug for BitWriter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BitWriter({} bits)", self.len)
    }
}

/// Reads values MSB-first from a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Start reading at the first bit of `bytes`.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Read the next `count` bits as an unsigned value.
    ///
    /// Returns `None` if `count` exceeds 16 or fewer than `count` bits
    /// remain.
    pub fn read_bits(&mut self, count: usize) -> Option<u16> {
        if count > 16 || count > self.remaining() {
            return None;
        }
        let mut value = 0u16;
        for _ in 0..count {
            let bit = (self.bytes[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | u16::from(bit);
            self.pos += 1;
        }
        Some(value)
    }

    /// Fill `out` with the next `out.len()` whole bytes.
    pub fn read_bytes(&mut self, out: &mut [u8]) -> Option<()> {
        if out.len() * 8 > self.remaining() {
            return None;
        }
        for byte in out.iter_mut() {
            *byte = self.read_bits(8)? as u8;
        }
        Some(())
    }

    /// Bits not yet read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.bytes.len() * 8 - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_single_bits() {
        let mut w = BitWriter::new();
        assert!(w.write_bits(1, 1));
        assert!(w.write_bits(0, 1));
        assert!(w.write_bits(1, 1));
        assert_eq!(w.len(), 3);
        assert_eq!(w.as_bytes(), &[0b1010_0000]);
    }

    #[test]
    fn test_eleven_bit_groups_cross_bytes() {
        let mut w = BitWriter::new();
        assert!(w.write_bits(0x7ff, 11));
        assert!(w.write_bits(0x001, 11));
        // 11111111 111 00000 000001 00
        assert_eq!(w.as_bytes(), &[0xff, 0xe0, 0x04]);

        let mut r = BitReader::new(w.as_bytes());
        assert_eq!(r.read_bits(11), Some(0x7ff));
        assert_eq!(r.read_bits(11), Some(0x001));
        assert_eq!(r.remaining(), 2);
    }

    #[test]
    fn test_value_is_masked_to_count() {
        let mut w = BitWriter::new();
        assert!(w.write_bits(0xffff, 4));
        assert_eq!(w.as_bytes(), &[0xf0]);
    }

    #[test]
    fn test_bytes_then_checksum() {
        let mut w = BitWriter::new();
        assert!(w.write_bytes(&[0xab, 0xcd]));
        assert!(w.write_bits(0x5, 4));
        assert_eq!(w.len(), 20);

        let mut r = BitReader::new(w.as_bytes());
        let mut out = [0u8; 2];
        assert_eq!(r.read_bytes(&mut out), Some(()));
        assert_eq!(out, [0xab, 0xcd]);
        assert_eq!(r.read_bits(4), Some(0x5));
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut w = BitWriter::new();
        assert!(w.write_bytes(&[0u8; 32]));
        assert!(w.write_bits(0xff, 8));
        assert_eq!(w.len(), CAPACITY_BITS);
        assert!(!w.write_bits(1, 1));
        assert!(!w.write_bytes(&[0]));
        assert_eq!(w.len(), CAPACITY_BITS);
    }

    #[test]
    fn test_oversized_count_rejected() {
        let mut w = BitWriter::new();
        assert!(!w.write_bits(0, 17));
        assert!(w.is_empty());

        let mut r = BitReader::new(&[0u8; 4]);
        assert_eq!(r.read_bits(17), None);
    }

    #[test]
    fn test_reader_stops_at_end() {
        let mut r = BitReader::new(&[0xff]);
        assert_eq!(r.read_bits(5), Some(0b11111));
        assert_eq!(r.read_bits(4), None);
        assert_eq!(r.read_bits(3), Some(0b111));
        assert_eq!(r.read_bits(1), None);

        let mut out = [0u8; 1];
        assert_eq!(BitReader::new(&[]).read_bytes(&mut out), None);
    }
}
