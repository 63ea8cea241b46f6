//! Alternate Mark Inversion

use heapless::Vec;

use crate::error::{ensure_capacity, CodecError};
use crate::types::{Bit, Polarity, Sample};

/// Encode bits with AMI: marks alternate +1/-1 starting at +1, spaces are 0.
///
/// Output has the same length as the input.
pub fn ami_encode<const N: usize>(bits: &[Bit]) -> Result<Vec<Sample, N>, CodecError> {
    ensure_capacity::<N>(bits.len())?;

    let mut polarity = Polarity::Positive;
    let mut samples = Vec::new();
    for bit in bits {
        let sample = match bit {
            Bit::One => {
                let pulse = polarity.to_sample();
                polarity = polarity.flip();
                pulse
            }
            Bit::Zero => Sample::Zero,
        };
        // capacity checked above
        let _ = samples.push(sample);
    }

    #[cfg(feature = "defmt")]
    defmt::trace!("AMI: {} bits encoded", bits.len());

    Ok(samples)
}
