//! Codec configuration and the scheme-dispatching line coder

use heapless::Vec;

use crate::diff_manchester::{diff_manchester_decode, diff_manchester_encode};
use crate::error::CodecError;
use crate::hdb3::{hdb3_decode, hdb3_encode, Hdb3Encoding};
use crate::types::{Bit, Polarity, Sample, Scheme};
use crate::validate::{polarities_from_levels, samples_from_levels};

/// Handling of a Differential Manchester signal with a dangling half cell
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OddLengthPolicy {
    /// Fail with `MalformedSignal`
    Reject,
    /// Drop the final sample and decode the rest
    Truncate,
}

/// Line coder configuration parameters
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineCodeConfig {
    /// Line code in use
    pub scheme: Scheme,
    /// Odd-length Differential Manchester input
    pub odd_length: OddLengthPolicy,
    /// Longest bit stream accepted
    pub max_bits: usize,
}

impl Default for LineCodeConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::Hdb3,
            odd_length: OddLengthPolicy::Reject,
            max_bits: 64,
        }
    }
}

impl LineCodeConfig {
    /// Create a new configuration with validation
    pub fn new(scheme: Scheme, odd_length: OddLengthPolicy, max_bits: usize) -> Result<Self, &'static str> {
        if max_bits == 0 || max_bits > 4096 {
            return Err("max_bits must be between 1 and 4096");
        }
        Ok(Self {
            scheme,
            odd_length,
            max_bits,
        })
    }

    /// Longest line signal this configuration can produce
    pub fn max_samples(&self) -> usize {
        self.max_bits * self.scheme.samples_per_bit()
    }
}

/// Line signal produced by [`LineCoder::encode`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Encoded<const N: usize> {
    Hdb3(Hdb3Encoding<N>),
    DiffManchester(Vec<Polarity, N>),
}

impl<const N: usize> Encoded<N> {
    /// Scheme that produced this signal
    pub fn scheme(&self) -> Scheme {
        match self {
            Encoded::Hdb3(_) => Scheme::Hdb3,
            Encoded::DiffManchester(_) => Scheme::DiffManchester,
        }
    }

    /// Number of line samples
    pub fn len(&self) -> usize {
        match self {
            Encoded::Hdb3(encoding) => encoding.samples.len(),
            Encoded::DiffManchester(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at `index` as a ternary level
    pub fn sample(&self, index: usize) -> Option<Sample> {
        match self {
            Encoded::Hdb3(encoding) => encoding.samples.get(index).copied(),
            Encoded::DiffManchester(samples) => samples.get(index).map(|p| p.to_sample()),
        }
    }

    /// Iterate the signal as ternary samples
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(move |index| self.sample(index))
    }

    /// The signal as integer levels
    pub fn levels(&self) -> Vec<i8, N> {
        self.samples().map(|s| s.level()).collect()
    }
}

/// Scheme-dispatching encoder/decoder
pub struct LineCoder {
    config: LineCodeConfig,
}

impl LineCoder {
    /// Create a new line coder with given configuration
    pub fn new(config: LineCodeConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &LineCodeConfig {
        &self.config
    }

    /// Encode bits with the configured scheme
    pub fn encode<const N: usize>(&self, bits: &[Bit]) -> Result<Encoded<N>, CodecError> {
        self.check_length(bits.len())?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Encoding {} bits with {:?}", bits.len(), self.config.scheme);

        match self.config.scheme {
            Scheme::Hdb3 => hdb3_encode(bits).map(Encoded::Hdb3),
            Scheme::DiffManchester => diff_manchester_encode(bits).map(Encoded::DiffManchester),
        }
    }

    /// Decode a signal produced by [`LineCoder::encode`]
    pub fn decode<const N: usize>(&self, encoded: &Encoded<N>) -> Result<Vec<Bit, N>, CodecError> {
        if encoded.scheme() != self.config.scheme {
            return Err(CodecError::SchemeMismatch);
        }
        match encoded {
            Encoded::Hdb3(encoding) => self.decode_ternary(&encoding.samples),
            Encoded::DiffManchester(samples) => self.decode_differential(samples),
        }
    }

    /// Validate raw integer levels and decode them with the configured scheme
    pub fn decode_levels<const N: usize>(&self, levels: &[i8]) -> Result<Vec<Bit, N>, CodecError> {
        match self.config.scheme {
            Scheme::Hdb3 => {
                let samples: Vec<Sample, N> = samples_from_levels(levels)?;
                self.decode_ternary(&samples)
            }
            Scheme::DiffManchester => {
                let samples: Vec<Polarity, N> = polarities_from_levels(levels)?;
                self.decode_differential(&samples)
            }
        }
    }

    fn decode_ternary<const N: usize>(&self, samples: &[Sample]) -> Result<Vec<Bit, N>, CodecError> {
        self.check_length(samples.len())?;
        hdb3_decode(samples)
    }

    fn decode_differential<const N: usize>(&self, samples: &[Polarity]) -> Result<Vec<Bit, N>, CodecError> {
        let samples = match (self.config.odd_length, samples.len() % 2) {
            (OddLengthPolicy::Truncate, 1) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Dropping dangling half cell of {}-sample signal", samples.len());
                &samples[..samples.len() - 1]
            }
            _ => samples,
        };
        self.check_length(samples.len() / 2)?;
        diff_manchester_decode(samples)
    }

    fn check_length(&self, len: usize) -> Result<(), CodecError> {
        if len > self.config.max_bits {
            return Err(CodecError::TooLong {
                len,
                max: self.config.max_bits,
            });
        }
        Ok(())
    }
}
