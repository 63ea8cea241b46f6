//! Hardware Abstraction Layer for driving a line signal

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::types::Sample;

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError {
    /// GPIO operation failed
    GpioError,
    /// Invalid configuration
    InvalidConfig,
}

#[cfg(feature = "std")]
impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
            HalError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Trait for a ternary line output
pub trait LineDriver {
    type Error: From<HalError>;

    /// Put `sample` on the line until the next call
    fn drive(&mut self, sample: Sample) -> Result<(), Self::Error>;

    /// Return the line to the zero level
    fn idle(&mut self) -> Result<(), Self::Error> {
        self.drive(Sample::Zero)
    }
}

/// Line driver over two embedded-hal output pins
///
/// The positive pin is high for `+1`, the negative pin is high for `-1`,
/// both are low for `0`. The inactive pin is always released first so the
/// two rails are never high together.
pub struct EmbeddedHalLineDriver<P, N> {
    positive: P,
    negative: N,
}

impl<P, N> EmbeddedHalLineDriver<P, N>
where
    P: OutputPin,
    N: OutputPin,
{
    pub fn new(positive: P, negative: N) -> Self {
        Self { positive, negative }
    }

    /// Release the pins
    pub fn release(self) -> (P, N) {
        (self.positive, self.negative)
    }
}

impl<P, N> LineDriver for EmbeddedHalLineDriver<P, N>
where
    P: OutputPin,
    N: OutputPin,
{
    type Error = HalError;

    fn drive(&mut self, sample: Sample) -> Result<(), Self::Error> {
        match sample {
            Sample::Positive => {
                self.negative.set_low().map_err(|_| HalError::GpioError)?;
                self.positive.set_high().map_err(|_| HalError::GpioError)
            }
            Sample::Negative => {
                self.positive.set_low().map_err(|_| HalError::GpioError)?;
                self.negative.set_high().map_err(|_| HalError::GpioError)
            }
            Sample::Zero => {
                self.positive.set_low().map_err(|_| HalError::GpioError)?;
                self.negative.set_low().map_err(|_| HalError::GpioError)
            }
        }
    }
}

/// Clock `samples` onto the line, one every `symbol_ns`, then idle the line.
///
/// Returns the number of samples sent.
pub fn transmit<D, T>(driver: &mut D, samples: &[Sample], delay: &mut T, symbol_ns: u32) -> Result<usize, D::Error>
where
    D: LineDriver,
    T: DelayNs,
{
    if symbol_ns == 0 {
        return Err(HalError::InvalidConfig.into());
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("Transmitting {} samples at {} ns/symbol", samples.len(), symbol_ns);

    for sample in samples {
        driver.drive(*sample)?;
        delay.delay_ns(symbol_ns);
    }
    driver.idle()?;
    Ok(samples.len())
}

/// Async task draining a sample queue onto the line
///
/// Runs until the driver fails, then returns its error.
#[cfg(feature = "embassy-time")]
pub async fn transmitter_task<D: LineDriver, const N: usize>(
    mut queue_consumer: heapless::spsc::Consumer<'_, Sample, N>,
    driver: &mut D,
    symbol: embassy_time::Duration,
) -> D::Error {
    use embassy_time::Timer;

    loop {
        let result = match queue_consumer.dequeue() {
            Some(sample) => driver.drive(sample),
            // Nothing queued, hold the line at zero
            None => driver.idle(),
        };
        if let Err(err) = result {
            #[cfg(feature = "defmt")]
            defmt::warn!("Line driver failed, transmitter stopped");
            return err;
        }
        Timer::after(symbol).await;
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock implementations for testing

    use super::*;

    /// Line driver that records every driven sample
    #[derive(Default, Debug)]
    pub struct MockLineDriver {
        driven: heapless::Vec<Sample, 256>,
        fail_after: Option<usize>,
    }

    impl MockLineDriver {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fail with `GpioError` once `count` samples were driven
        pub fn failing_after(count: usize) -> Self {
            Self {
                driven: heapless::Vec::new(),
                fail_after: Some(count),
            }
        }

        pub fn driven(&self) -> &[Sample] {
            &self.driven
        }

        /// Level currently on the line
        pub fn level(&self) -> Sample {
            self.driven.last().copied().unwrap_or_default()
        }
    }

    impl LineDriver for MockLineDriver {
        type Error = HalError;

        fn drive(&mut self, sample: Sample) -> Result<(), Self::Error> {
            if self.fail_after.is_some_and(|count| self.driven.len() >= count) {
                return Err(HalError::GpioError);
            }
            self.driven.push(sample).map_err(|_| HalError::InvalidConfig)
        }
    }

    /// Delay that only counts requested nanoseconds
    #[derive(Default, Debug)]
    pub struct MockDelay {
        pub total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }
}
