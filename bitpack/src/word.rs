//! A packed word that carries its fields by [`Field`] descriptor.
//!
//! ```rust
//! use bitpack::{Field, PackedWord};
//!
//! const KIND: Field = Field::new(2, 62);
//! const DELTA: Field = Field::new(16, 0);
//!
//! let word = PackedWord::default()
//!     .with_unsigned(KIND, 2)?
//!     .with_signed(DELTA, -300)?;
//!
//! assert_eq!(word.get_unsigned(KIND), 2);
//! assert_eq!(word.get_signed(DELTA), -300);
//! # Ok::<(), bitpack::BitpackError>(())
//! ```

use core::fmt;

use bytemuck_derive::{Pod, Zeroable};

use crate::{BitpackError, Field};

type Result<T> = core::result::Result<T, BitpackError>;

/// A 64-bit word holding packed fields.
///
/// `Pod`, so slices of words can be viewed as bytes with `bytemuck`.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct PackedWord(u64);

impl PackedWord {
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw bit pattern.
    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn get_unsigned(self, field: Field) -> u64 {
        field.get_unsigned(self.0)
    }

    pub const fn get_signed(self, field: Field) -> i64 {
        field.get_signed(self.0)
    }

    /// Overwrites `field` with `value`. On error the word is left unchanged.
    pub fn set_unsigned(&mut self, field: Field, value: u64) -> Result<()> {
        self.0 = field.new_unsigned(self.0, value)?;
        Ok(())
    }

    /// Overwrites `field` with `value`. On error the word is left unchanged.
    pub fn set_signed(&mut self, field: Field, value: i64) -> Result<()> {
        self.0 = field.new_signed(self.0, value)?;
        Ok(())
    }

    pub fn with_unsigned(self, field: Field, value: u64) -> Result<Self> {
        field.new_unsigned(self.0, value).map(Self)
    }

    pub fn with_signed(self, field: Field, value: i64) -> Result<Self> {
        field.new_signed(self.0, value).map(Self)
    }
}

impl From<u64> for PackedWord {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<PackedWord> for u64 {
    fn from(word: PackedWord) -> Self {
        word.0
    }
}

impl fmt::LowerHex for PackedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for PackedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for PackedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOW: Field = Field::new(8, 0);
    const HIGH: Field = Field::new(8, 56);

    #[test]
    fn set_and_get() -> Result<()> {
        let mut word = PackedWord::new(0);
        word.set_unsigned(LOW, 0xAB)?;
        word.set_signed(HIGH, -1)?;
        assert_eq!(word.get(), 0xFF00_0000_0000_00AB);
        assert_eq!(word.get_unsigned(LOW), 0xAB);
        assert_eq!(word.get_signed(HIGH), -1);
        Ok(())
    }

    #[test]
    fn failed_set_keeps_word() {
        let mut word = PackedWord::new(0x1234);
        assert!(word.set_unsigned(LOW, 0x100).is_err());
        assert!(word.set_signed(LOW, 128).is_err());
        assert_eq!(word.get(), 0x1234);
    }

    #[test]
    fn builder_chain_stops_on_overflow() {
        let res = PackedWord::default()
            .with_unsigned(LOW, 1)
            .and_then(|w| w.with_unsigned(HIGH, 256));
        assert!(matches!(res, Err(BitpackError::Overflow { width: 8, .. })));
    }

    #[test]
    fn bytes_view_is_native_endian_word() {
        let words = [PackedWord::new(0x0102_0304_0506_0708), PackedWord::new(u64::MAX)];
        let bytes: &[u8] = bytemuck::cast_slice(&words);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..8], &0x0102_0304_0506_0708u64.to_ne_bytes());

        let back: &[PackedWord] = bytemuck::cast_slice(bytes);
        assert_eq!(back, &words);
    }

    #[test]
    fn formatting() {
        extern crate std;
        use std::format;

        let word = PackedWord::from(0xA0u64);
        assert_eq!(format!("{:x}", word), "a0");
        assert_eq!(format!("{:#X}", word), "0xA0");
        assert_eq!(format!("{:b}", word), "10100000");
        assert_eq!(u64::from(word), 0xA0);
    }
}
