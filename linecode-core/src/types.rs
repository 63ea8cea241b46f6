//! Core data types for the line codes

use core::ops::Neg;

/// Binary symbol of the input stream
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bit {
    /// Space (logical 0)
    Zero,
    /// Mark (logical 1)
    One,
}

impl Bit {
    /// Returns the numeric value of this bit
    pub const fn as_u8(&self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }

    /// Returns the character used for this bit in text form
    pub const fn as_char(&self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    /// Returns true for a mark
    pub const fn is_one(&self) -> bool {
        matches!(self, Bit::One)
    }
}

/// Pulse polarity of a non-zero line level
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// +1
    Positive,
    /// -1
    Negative,
}

impl Polarity {
    /// Returns the opposite polarity
    pub const fn flip(&self) -> Polarity {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
        }
    }

    /// Returns the integer level (+1 or -1)
    pub const fn level(&self) -> i8 {
        match self {
            Polarity::Positive => 1,
            Polarity::Negative => -1,
        }
    }

    /// Returns the ternary sample carrying this polarity
    pub const fn to_sample(&self) -> Sample {
        match self {
            Polarity::Positive => Sample::Positive,
            Polarity::Negative => Sample::Negative,
        }
    }
}

impl Neg for Polarity {
    type Output = Polarity;

    fn neg(self) -> Polarity {
        self.flip()
    }
}

/// One sample of a ternary line signal
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(Hash))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sample {
    /// -1
    Negative,
    /// 0
    #[default]
    Zero,
    /// +1
    Positive,
}

impl Sample {
    /// Returns the integer level (-1, 0 or +1)
    pub const fn level(&self) -> i8 {
        match self {
            Sample::Negative => -1,
            Sample::Zero => 0,
            Sample::Positive => 1,
        }
    }

    /// Returns true for a pulse of either polarity
    pub const fn is_pulse(&self) -> bool {
        !matches!(self, Sample::Zero)
    }

    /// Returns the polarity of a pulse, `None` for the zero level
    pub const fn polarity(&self) -> Option<Polarity> {
        match self {
            Sample::Negative => Some(Polarity::Negative),
            Sample::Zero => None,
            Sample::Positive => Some(Polarity::Positive),
        }
    }
}

impl From<Polarity> for Sample {
    fn from(polarity: Polarity) -> Self {
        polarity.to_sample()
    }
}

/// Supported line coding schemes
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scheme {
    /// High-Density Bipolar order 3 (AMI with zero-run substitution)
    Hdb3,
    /// Differential Manchester (two samples per bit)
    DiffManchester,
}

impl Scheme {
    /// Number of line samples produced per input bit
    pub const fn samples_per_bit(&self) -> usize {
        match self {
            Scheme::Hdb3 => 1,
            Scheme::DiffManchester => 2,
        }
    }

    /// Human-readable scheme name
    pub const fn name(&self) -> &'static str {
        match self {
            Scheme::Hdb3 => "HDB3",
            Scheme::DiffManchester => "Differential Manchester",
        }
    }
}

/// Pattern written over a run of four zero bits
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubstitutionKind {
    /// `[+1, 0, 0, -1]`, chosen when the pulse count is even
    PulseViolation,
    /// `[0, 0, 0, +1]`, chosen when the pulse count is odd
    Violation,
}

impl SubstitutionKind {
    /// Select the pattern for the given running pulse count
    pub const fn for_pulse_count(pulses: usize) -> SubstitutionKind {
        if pulses % 2 == 0 {
            SubstitutionKind::PulseViolation
        } else {
            SubstitutionKind::Violation
        }
    }

    /// The four samples written in place of the zero run
    pub const fn samples(&self) -> [Sample; 4] {
        match self {
            SubstitutionKind::PulseViolation => {
                [Sample::Positive, Sample::Zero, Sample::Zero, Sample::Negative]
            }
            SubstitutionKind::Violation => {
                [Sample::Zero, Sample::Zero, Sample::Zero, Sample::Positive]
            }
        }
    }

    /// The pattern as integer levels
    pub fn levels(&self) -> [i8; 4] {
        self.samples().map(|s| s.level())
    }
}

/// Record of one substitution applied by the HDB3 encoder
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Substitution {
    /// Index of the first sample of the four-sample window
    pub start: usize,
    /// Pattern written
    pub kind: SubstitutionKind,
}

impl Substitution {
    /// Index range covered in the line signal
    pub fn span(&self) -> core::ops::Range<usize> {
        self.start..self.start + 4
    }
}
