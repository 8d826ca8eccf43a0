//! Validated field descriptors.
//!
//! A [`Field`] bundles a width and an lsb offset that are known to fit in a
//! word. Declaring fields as `const` items moves the geometry check to
//! compile time:
//!
//! ```rust
//! use bitpack::Field;
//!
//! const OPCODE: Field = Field::new(4, 28);
//! const RA: Field = Field::new(3, 6);
//! const RB: Field = RA.below(3);
//!
//! let word = OPCODE.new_unsigned(0, 13)?;
//! let word = RA.new_unsigned(word, 5)?;
//! assert_eq!(OPCODE.get_unsigned(word), 13);
//! assert_eq!(RA.get_unsigned(word), 5);
//! assert_eq!(RB.lsb(), 3);
//! # Ok::<(), bitpack::BitpackError>(())
//! ```

use core::fmt;

use crate::BitpackError;
use crate::bit_ops::{self, WORD_BITS, field_mask};

type Result<T> = core::result::Result<T, BitpackError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    width: u32,
    lsb: u32,
}

impl Field {
    /// Creates a field descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `width + lsb > 64`. In a `const` item this is a compile error.
    #[track_caller]
    pub const fn new(width: u32, lsb: u32) -> Self {
        match Self::try_new(width, lsb) {
            Some(field) => field,
            None => panic!("field runs past the top of the word (width + lsb > 64)"),
        }
    }

    /// Creates a field descriptor, or `None` if it would not fit in a word.
    ///
    /// ```rust
    /// use bitpack::Field;
    ///
    /// assert!(Field::try_new(8, 56).is_some());
    /// assert!(Field::try_new(8, 57).is_none());
    /// ```
    pub const fn try_new(width: u32, lsb: u32) -> Option<Self> {
        if width <= WORD_BITS && lsb <= WORD_BITS - width {
            Some(Self { width, lsb })
        } else {
            None
        }
    }

    /// The field of `width` bits directly above this one.
    ///
    /// # Panics
    ///
    /// Panics if the new field would run past the top of the word.
    #[track_caller]
    pub const fn above(self, width: u32) -> Self {
        Self::new(width, self.lsb + self.width)
    }

    /// The field of `width` bits directly below this one.
    ///
    /// # Panics
    ///
    /// Panics if `width` exceeds this field's lsb.
    #[track_caller]
    pub const fn below(self, width: u32) -> Self {
        if width > self.lsb {
            panic!("field runs past the bottom of the word");
        }
        Self::new(width, self.lsb - width)
    }

    pub const fn width(self) -> u32 {
        self.width
    }

    pub const fn lsb(self) -> u32 {
        self.lsb
    }

    /// Index of the field's highest bit, `None` for an empty field.
    pub const fn msb(self) -> Option<u32> {
        if self.width == 0 {
            None
        } else {
            Some(self.lsb + self.width - 1)
        }
    }

    /// The bits this field occupies within a word.
    pub const fn mask(self) -> u64 {
        field_mask(self.width, self.lsb)
    }

    /// Largest unsigned value the field's bits can hold.
    ///
    /// A 64-bit field reports `u64::MAX`, but [`Field::fits_unsigned`] still
    /// rejects every value at that width.
    pub const fn max_unsigned(self) -> u64 {
        if self.width == 0 {
            0
        } else {
            u64::MAX >> (WORD_BITS - self.width)
        }
    }

    /// Smallest signed value, `None` for an empty field.
    pub const fn min_signed(self) -> Option<i64> {
        if self.width == 0 {
            None
        } else {
            Some(i64::MIN >> (WORD_BITS - self.width))
        }
    }

    /// Largest signed value, `None` for an empty field.
    pub const fn max_signed(self) -> Option<i64> {
        if self.width == 0 {
            None
        } else {
            Some(i64::MAX >> (WORD_BITS - self.width))
        }
    }

    pub const fn fits_unsigned(self, n: u64) -> bool {
        bit_ops::fits_unsigned(n, self.width)
    }

    pub const fn fits_signed(self, n: i64) -> bool {
        bit_ops::fits_signed(n, self.width)
    }

    pub const fn get_unsigned(self, word: u64) -> u64 {
        bit_ops::get_unsigned(word, self.width, self.lsb)
    }

    pub const fn get_signed(self, word: u64) -> i64 {
        bit_ops::get_signed(word, self.width, self.lsb)
    }

    /// See [`bit_ops::new_unsigned`](crate::new_unsigned).
    pub fn new_unsigned(self, word: u64, value: u64) -> Result<u64> {
        bit_ops::new_unsigned(word, self.width, self.lsb, value)
    }

    /// See [`bit_ops::new_signed`](crate::new_signed).
    pub fn new_signed(self, word: u64, value: i64) -> Result<u64> {
        bit_ops::new_signed(word, self.width, self.lsb, value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.width, self.lsb)
    }
}
