//! Error types for codec operations

/// Errors raised at the codec boundary, before a pass starts
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodecError {
    /// Input token is not a bit (`0`/`1`)
    InvalidSymbol { index: usize, symbol: char },
    /// Numeric bit value is not `0`/`1`
    InvalidBit { index: usize, value: u8 },
    /// Signal level is not representable in the scheme
    InvalidLevel { index: usize, level: i8 },
    /// Signal length is incompatible with the scheme
    MalformedSignal { len: usize },
    /// Output does not fit the buffer capacity
    CapacityExceeded { needed: usize, capacity: usize },
    /// Input is longer than the configured limit
    TooLong { len: usize, max: usize },
    /// Signal was produced by a different scheme than the decoder's
    SchemeMismatch,
}

#[cfg(feature = "std")]
impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::InvalidSymbol { index, symbol } => {
                write!(f, "Invalid symbol {:?} at position {}: only 0 or 1 allowed", symbol, index)
            }
            CodecError::InvalidBit { index, value } => {
                write!(f, "Invalid bit value {} at position {}: only 0 or 1 allowed", value, index)
            }
            CodecError::InvalidLevel { index, level } => {
                write!(f, "Invalid signal level {} at position {}", level, index)
            }
            CodecError::MalformedSignal { len } => {
                write!(f, "Malformed signal: length {} is not a whole number of symbols", len)
            }
            CodecError::CapacityExceeded { needed, capacity } => {
                write!(f, "Buffer too small: need {}, capacity {}", needed, capacity)
            }
            CodecError::TooLong { len, max } => {
                write!(f, "Input of {} bits exceeds the limit of {}", len, max)
            }
            CodecError::SchemeMismatch => write!(f, "Signal does not match the decoder scheme"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}

/// Check that `needed` items fit a buffer of `N`
pub(crate) fn ensure_capacity<const N: usize>(needed: usize) -> Result<(), CodecError> {
    if needed > N {
        return Err(CodecError::CapacityExceeded { needed, capacity: N });
    }
    Ok(())
}
