//! HDB3 encoder and decoder
//!
//! The encoder starts from the AMI signal and overwrites every completed run
//! of four zero bits with a violation pattern picked by the parity of the
//! pulses sent so far. The decoder is a windowed scan that collapses each
//! violation group back into a single zero bit.

use heapless::Vec;

use crate::ami::ami_encode;
use crate::error::{ensure_capacity, CodecError};
use crate::types::{Bit, Sample, Substitution, SubstitutionKind};

/// Zero bits that trigger a substitution
pub const ZERO_RUN_LIMIT: u8 = 4;

/// Output of [`hdb3_encode`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hdb3Encoding<const N: usize> {
    /// Line signal, one sample per input bit
    pub samples: Vec<Sample, N>,
    /// Substitutions applied, in encounter order
    pub substitutions: Vec<Substitution, N>,
}

impl<const N: usize> Hdb3Encoding<N> {
    /// Returns true if at least one zero run was scrambled
    pub fn was_scrambled(&self) -> bool {
        !self.substitutions.is_empty()
    }
}

/// Scan state of the HDB3 encoder
///
/// Owned by a single encoding pass; nothing is shared between calls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Hdb3Encoder {
    zero_run: u8,
    pulses: usize,
}

impl Hdb3Encoder {
    /// Create an encoder at the start of a stream
    pub const fn new() -> Self {
        Self { zero_run: 0, pulses: 0 }
    }

    /// Consecutive zero bits seen since the last mark or substitution
    pub fn zero_run(&self) -> u8 {
        self.zero_run
    }

    /// Pulses counted so far (marks and substitutions)
    pub fn pulse_count(&self) -> usize {
        self.pulses
    }

    /// Advance over the bit at `index`, rewriting `samples` when a zero run completes.
    ///
    /// `samples` must hold the AMI signal of the stream up to and including `index`.
    /// A completed run whose window does not fit `samples` fails with
    /// `MalformedSignal` and leaves the encoder unchanged.
    pub fn step(&mut self, index: usize, bit: Bit, samples: &mut [Sample]) -> Result<Option<Substitution>, CodecError> {
        match bit {
            Bit::One => {
                self.pulses += 1;
                self.zero_run = 0;
                Ok(None)
            }
            Bit::Zero if self.zero_run + 1 < ZERO_RUN_LIMIT => {
                self.zero_run += 1;
                Ok(None)
            }
            Bit::Zero => {
                let malformed = CodecError::MalformedSignal { len: samples.len() };
                let start = index.checked_sub(ZERO_RUN_LIMIT as usize - 1).ok_or(malformed)?;
                let window = samples.get_mut(start..=index).ok_or(malformed)?;

                let kind = SubstitutionKind::for_pulse_count(self.pulses);
                window.copy_from_slice(&kind.samples());
                self.zero_run = 0;
                self.pulses += 1;

                #[cfg(feature = "defmt")]
                defmt::debug!("HDB3: {:?} at {}", kind, start);

                Ok(Some(Substitution { start, kind }))
            }
        }
    }

    /// Reset to the start-of-stream state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Encode bits with HDB3.
///
/// Returns the line signal together with the substitutions applied. A zero
/// run cut short by the end of the input is left as plain zeros.
pub fn hdb3_encode<const N: usize>(bits: &[Bit]) -> Result<Hdb3Encoding<N>, CodecError> {
    let mut samples = ami_encode::<N>(bits)?;
    let mut substitutions = Vec::new();
    let mut encoder = Hdb3Encoder::new();

    for (index, bit) in bits.iter().enumerate() {
        if let Some(substitution) = encoder.step(index, *bit, &mut samples)? {
            // at most one substitution per four bits, so this fits in N
            let _ = substitutions.push(substitution);
        }
    }

    #[cfg(feature = "defmt")]
    defmt::trace!(
        "HDB3: {} bits, {} substitutions, {} pulses",
        bits.len(),
        substitutions.len(),
        encoder.pulse_count()
    );

    Ok(Hdb3Encoding { samples, substitutions })
}

/// Decode an HDB3 line signal.
///
/// A window of `[0, 0, 0, ±1]` is read as one zero bit; any other pulse is a
/// one and any other zero level is a zero. This does not restore the four
/// zero bits behind a substitution.
pub fn hdb3_decode<const N: usize>(samples: &[Sample]) -> Result<Vec<Bit, N>, CodecError> {
    ensure_capacity::<N>(samples.len())?;

    let mut bits = Vec::new();
    let mut cursor = 0;
    while cursor < samples.len() {
        let window = &samples[cursor..];
        let (bit, advance) = match window {
            [Sample::Zero, Sample::Zero, Sample::Zero, fourth, ..] if fourth.is_pulse() => (Bit::Zero, 4),
            [Sample::Zero, ..] => (Bit::Zero, 1),
            [_, ..] => (Bit::One, 1),
            [] => break,
        };
        // never more bits than samples
        let _ = bits.push(bit);
        cursor += advance;
    }

    #[cfg(feature = "defmt")]
    defmt::trace!("HDB3: {} samples decoded to {} bits", samples.len(), bits.len());

    Ok(bits)
}
