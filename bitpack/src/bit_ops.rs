//! Field extraction and insertion on a single 64-bit word.
//!
//! A field is described by its `width` in bits and the index of its least
//! significant bit, `lsb`. Every function here panics when
//! `width + lsb > 64`: a field running off the top of the word is a layout
//! bug, not bad input. Values that don't fit their field are reported as
//! [`BitpackError::Overflow`] and leave the word untouched.
//!
//! ```rust
//! use bitpack::{get_signed, get_unsigned, new_unsigned};
//!
//! assert_eq!(get_unsigned(0xFF00, 8, 8), 0xFF);
//! assert_eq!(get_signed(0xFF00, 8, 8), -1);
//!
//! let word = new_unsigned(0, 4, 4, 0xA)?;
//! assert_eq!(word, 0xA0);
//! # Ok::<(), bitpack::BitpackError>(())
//! ```

use crate::BitpackError;

/// Number of bits in a word.
pub const WORD_BITS: u32 = u64::BITS;

type Result<T> = core::result::Result<T, BitpackError>;

#[inline(always)]
#[track_caller]
const fn check_geometry(width: u32, lsb: u32) {
    assert!(
        width <= WORD_BITS && lsb <= WORD_BITS - width,
        "field runs past the top of the word (width + lsb > 64)"
    );
}

/// Mask with `width` ones starting at bit `lsb`. Geometry must already be valid.
#[inline(always)]
pub(crate) const fn field_mask(width: u32, lsb: u32) -> u64 {
    if width == 0 {
        0
    } else {
        (u64::MAX >> (WORD_BITS - width)) << lsb
    }
}

/// Returns `true` if `n` fits in `width` unsigned bits.
///
/// Width 64 is rejected for every `n`, even though a 64-bit field could hold
/// any `u64`. Callers packing whole words should not go through this path.
///
/// ```rust
/// use bitpack::fits_unsigned;
///
/// assert!(fits_unsigned(15, 4));
/// assert!(!fits_unsigned(16, 4));
/// assert!(fits_unsigned(0, 0));
/// assert!(!fits_unsigned(0, 64));
/// ```
#[inline]
pub const fn fits_unsigned(n: u64, width: u32) -> bool {
    width < WORD_BITS && n < (1u64 << width)
}

/// Returns `true` if `n` fits in `width` bits of two's complement.
///
/// ```rust
/// use bitpack::fits_signed;
///
/// assert!(fits_signed(-8, 4));
/// assert!(fits_signed(7, 4));
/// assert!(!fits_signed(8, 4));
/// assert!(!fits_signed(0, 0));
/// assert!(fits_signed(i64::MIN, 64));
/// ```
#[inline]
pub const fn fits_signed(n: i64, width: u32) -> bool {
    if width == 0 || width > WORD_BITS {
        return false;
    }
    // Round-tripping through the top of the word keeps n only if the bits
    // above `width - 1` are copies of the sign bit.
    let shift = WORD_BITS - width;
    (n << shift) >> shift == n
}

/// Extracts the `width`-bit field at `lsb`, right justified.
///
/// # Panics
///
/// Panics if `width + lsb > 64`.
#[inline]
#[track_caller]
pub const fn get_unsigned(word: u64, width: u32, lsb: u32) -> u64 {
    check_geometry(width, lsb);
    if width == 0 {
        return 0;
    }
    (word & field_mask(width, lsb)) >> lsb
}

/// Extracts the `width`-bit field at `lsb` and sign-extends it from its top bit.
///
/// # Panics
///
/// Panics if `width + lsb > 64`.
///
/// ```rust
/// use bitpack::get_signed;
///
/// assert_eq!(get_signed(0b1000, 4, 0), -8);
/// assert_eq!(get_signed(0b0111, 4, 0), 7);
/// ```
#[inline]
#[track_caller]
pub const fn get_signed(word: u64, width: u32, lsb: u32) -> i64 {
    let raw = get_unsigned(word, width, lsb);
    if width == 0 {
        return 0;
    }
    let shift = WORD_BITS - width;
    ((raw << shift) as i64) >> shift
}

/// Returns `word` with the `width`-bit field at `lsb` replaced by `value`.
///
/// # Errors
///
/// Returns [`BitpackError::Overflow`] if `value` does not satisfy
/// [`fits_unsigned`]. The range check runs before the geometry check.
///
/// # Panics
///
/// Panics if `width + lsb > 64`.
///
/// ```rust
/// use bitpack::{BitpackError, new_unsigned};
///
/// assert_eq!(new_unsigned(0xFFFF, 4, 4, 0)?, 0xFF0F);
/// assert!(matches!(new_unsigned(0, 4, 0, 16), Err(BitpackError::Overflow { .. })));
/// # Ok::<(), BitpackError>(())
/// ```
#[track_caller]
pub fn new_unsigned(word: u64, width: u32, lsb: u32, value: u64) -> Result<u64> {
    if !fits_unsigned(value, width) {
        tracing::trace!(target: "bitpack::bit_ops", width, lsb, value, "unsigned value rejected");
        return Err(BitpackError::unsigned_overflow(value, width));
    }
    check_geometry(width, lsb);
    if width == 0 {
        return Ok(word);
    }
    Ok((word & !field_mask(width, lsb)) | (value << lsb))
}

/// Returns `word` with the `width`-bit field at `lsb` replaced by the two's
/// complement encoding of `value`.
///
/// Sign bits above the field are masked off, so neighbouring fields survive
/// negative values.
///
/// # Errors
///
/// Returns [`BitpackError::Overflow`] if `value` does not satisfy
/// [`fits_signed`].
///
/// # Panics
///
/// Panics if `width + lsb > 64`.
///
/// ```rust
/// use bitpack::{get_signed, new_signed};
///
/// let word = new_signed(0xF000, 4, 4, -1)?;
/// assert_eq!(word, 0xF0F0);
/// assert_eq!(get_signed(word, 4, 4), -1);
/// # Ok::<(), bitpack::BitpackError>(())
/// ```
#[track_caller]
pub fn new_signed(word: u64, width: u32, lsb: u32, value: i64) -> Result<u64> {
    if !fits_signed(value, width) {
        tracing::trace!(target: "bitpack::bit_ops", width, lsb, value, "signed value rejected");
        return Err(BitpackError::signed_overflow(value, width));
    }
    check_geometry(width, lsb);
    let mask = field_mask(width, lsb);
    Ok((word & !mask) | (((value as u64) << lsb) & mask))
}
