//! Boundary validation of bit and level sequences
//!
//! Codecs assume well-formed input; everything coming from outside goes
//! through here first.

use heapless::Vec;

use crate::error::{ensure_capacity, CodecError};
use crate::types::{Bit, Polarity, Sample};

impl TryFrom<u8> for Bit {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(other),
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            other => Err(other),
        }
    }
}

impl TryFrom<i8> for Sample {
    type Error = i8;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Sample::Negative),
            0 => Ok(Sample::Zero),
            1 => Ok(Sample::Positive),
            other => Err(other),
        }
    }
}

impl TryFrom<i8> for Polarity {
    type Error = i8;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Polarity::Negative),
            1 => Ok(Polarity::Positive),
            other => Err(other),
        }
    }
}

impl TryFrom<Sample> for Polarity {
    type Error = Sample;

    fn try_from(value: Sample) -> Result<Self, Self::Error> {
        value.polarity().ok_or(value)
    }
}

/// Parse a text bit string such as `"1011 0000"`.
///
/// ASCII whitespace is skipped; any other character that is not `0`/`1`
/// fails with its character position. Symbols are checked before capacity.
pub fn parse_bits<const N: usize>(text: &str) -> Result<Vec<Bit, N>, CodecError> {
    let symbols = || {
        text.chars()
            .enumerate()
            .filter(|(_, symbol)| !symbol.is_ascii_whitespace())
            .map(|(index, symbol)| Bit::try_from(symbol).map_err(|symbol| CodecError::InvalidSymbol { index, symbol }))
    };

    let mut needed = 0;
    for bit in symbols() {
        bit?;
        needed += 1;
    }
    ensure_capacity::<N>(needed)?;

    symbols().collect()
}

/// Convert numeric bits (`0`/`1`) into [`Bit`]s
pub fn bits_from_levels<const N: usize>(values: &[u8]) -> Result<Vec<Bit, N>, CodecError> {
    ensure_capacity::<N>(values.len())?;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Bit::try_from(*value).map_err(|value| CodecError::InvalidBit { index, value })
        })
        .collect()
}

/// Convert integer levels (`-1`/`0`/`1`) into ternary [`Sample`]s
pub fn samples_from_levels<const N: usize>(levels: &[i8]) -> Result<Vec<Sample, N>, CodecError> {
    ensure_capacity::<N>(levels.len())?;
    levels
        .iter()
        .enumerate()
        .map(|(index, level)| Sample::try_from(*level).map_err(|level| CodecError::InvalidLevel { index, level }))
        .collect()
}

/// Convert integer levels (`-1`/`1`) into [`Polarity`] samples
pub fn polarities_from_levels<const N: usize>(levels: &[i8]) -> Result<Vec<Polarity, N>, CodecError> {
    ensure_capacity::<N>(levels.len())?;
    levels
        .iter()
        .enumerate()
        .map(|(index, level)| Polarity::try_from(*level).map_err(|level| CodecError::InvalidLevel { index, level }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Bit::{One, Zero};

    #[test]
    fn test_parse_bits_skips_whitespace() {
        let bits = parse_bits::<8>("10 01\t1").unwrap();
        assert_eq!(bits.as_slice(), [One, Zero, Zero, One, One]);
    }

    #[test]
    fn test_parse_bits_reports_position() {
        assert_eq!(
            parse_bits::<8>("10x1"),
            Err(CodecError::InvalidSymbol { index: 2, symbol: 'x' })
        );
        assert_eq!(
            parse_bits::<8>("2"),
            Err(CodecError::InvalidSymbol { index: 0, symbol: '2' })
        );
    }

    #[test]
    fn test_parse_bits_capacity() {
        assert_eq!(
            parse_bits::<2>("101"),
            Err(CodecError::CapacityExceeded { needed: 3, capacity: 2 })
        );
        // counts every bit of the input, not the position where it overflowed
        assert_eq!(
            parse_bits::<2>("1 0 1 1 0"),
            Err(CodecError::CapacityExceeded { needed: 5, capacity: 2 })
        );
        // a bad symbol is reported even past the capacity
        assert_eq!(
            parse_bits::<2>("1011x"),
            Err(CodecError::InvalidSymbol { index: 4, symbol: 'x' })
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let bits = bits_from_levels::<8>(&[1, 0, 1, 1]).unwrap();
        let raw: std::vec::Vec<u8> = bits.iter().map(|b| b.as_u8()).collect();
        let again = bits_from_levels::<8>(&raw).unwrap();
        assert_eq!(bits, again);
    }

    #[test]
    fn test_bits_from_levels_rejects_non_binary() {
        assert_eq!(
            bits_from_levels::<8>(&[1, 0, 7]),
            Err(CodecError::InvalidBit { index: 2, value: 7 })
        );
        assert_eq!(
            bits_from_levels::<8>(&[200]),
            Err(CodecError::InvalidBit { index: 0, value: 200 })
        );
    }

    #[test]
    fn test_levels_to_samples() {
        let samples = samples_from_levels::<4>(&[1, 0, -1]).unwrap();
        assert_eq!(samples.as_slice(), [Sample::Positive, Sample::Zero, Sample::Negative]);
        assert_eq!(
            samples_from_levels::<4>(&[1, 2]),
            Err(CodecError::InvalidLevel { index: 1, level: 2 })
        );
    }

    #[test]
    fn test_zero_is_not_a_polarity() {
        assert_eq!(
            polarities_from_levels::<4>(&[1, 0]),
            Err(CodecError::InvalidLevel { index: 1, level: 0 })
        );
        assert_eq!(Polarity::try_from(Sample::Zero), Err(Sample::Zero));
        assert_eq!(Polarity::try_from(Sample::Negative), Ok(Polarity::Negative));
    }
}
