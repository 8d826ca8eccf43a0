#[cfg(feature = "std")]
use thiserror::Error;

/// The one recoverable failure of the packing functions.
///
/// Malformed field geometry (`width + lsb > 64`) is not represented here; it
/// is a layout bug and panics instead.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitpackError {
    /// `value` cannot be represented in a field `width` bits wide.
    #[cfg_attr(
        feature = "std",
        error("Value {value} does not fit in {width} {} bits", interpretation(.signed))
    )]
    Overflow {
        value: i128,
        width: u32,
        signed: bool,
    },
}

impl BitpackError {
    pub(crate) fn unsigned_overflow(value: u64, width: u32) -> Self {
        BitpackError::Overflow {
            value: value as i128,
            width,
            signed: false,
        }
    }

    pub(crate) fn signed_overflow(value: i64, width: u32) -> Self {
        BitpackError::Overflow {
            value: value as i128,
            width,
            signed: true,
        }
    }

    /// Field width the value was rejected for.
    pub fn width(&self) -> u32 {
        match self {
            BitpackError::Overflow { width, .. } => *width,
        }
    }
}

fn interpretation(signed: &bool) -> &'static str {
    if *signed { "signed" } else { "unsigned" }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitpackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitpackError::Overflow {
                value,
                width,
                signed,
            } => {
                write!(
                    f,
                    "Value {} does not fit in {} {} bits",
                    value,
                    width,
                    interpretation(signed)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_message_names_interpretation() {
        extern crate std;
        use std::string::ToString;

        let err = BitpackError::unsigned_overflow(16, 4);
        assert_eq!(err.to_string(), "Value 16 does not fit in 4 unsigned bits");

        let err = BitpackError::signed_overflow(-9, 4);
        assert_eq!(err.to_string(), "Value -9 does not fit in 4 signed bits");
        assert_eq!(err.width(), 4);
    }
}
