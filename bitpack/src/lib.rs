//! # bitpack
//!
//! A `no_std` compatible library for packing small integers into a 64-bit word.
//!
//! Fields are addressed by width and lsb offset and read back as unsigned or
//! two's-complement signed values. Insertion range-checks the value first and
//! returns [`BitpackError::Overflow`] instead of truncating.
//!
//! ```rust
//! use bitpack::{get_signed, get_unsigned, new_signed, new_unsigned};
//!
//! // opcode in bits 28..32, signed 16-bit immediate in bits 0..16
//! let word = new_unsigned(0, 4, 28, 0xD)?;
//! let word = new_signed(word, 16, 0, -42)?;
//!
//! assert_eq!(get_unsigned(word, 4, 28), 0xD);
//! assert_eq!(get_signed(word, 16, 0), -42);
//!
//! // 16 needs five bits
//! assert!(new_unsigned(word, 4, 28, 16).is_err());
//! # Ok::<(), bitpack::BitpackError>(())
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitpackError;

pub mod bit_ops;
pub use bit_ops::{
    WORD_BITS, fits_signed, fits_unsigned, get_signed, get_unsigned, new_signed, new_unsigned,
};

pub mod field;
pub use field::Field;

pub mod word;
pub use word::PackedWord;
