//! Line signal inspection

use crate::types::{Polarity, Sample};

/// Length of the longest run of zero samples
pub fn longest_zero_run(samples: &[Sample]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for sample in samples {
        if sample.is_pulse() {
            run = 0;
        } else {
            run += 1;
            longest = longest.max(run);
        }
    }
    longest
}

/// Length of the zero run at the end of the signal
pub fn trailing_zero_run(samples: &[Sample]) -> usize {
    samples.iter().rev().take_while(|s| !s.is_pulse()).count()
}

/// Returns true if no zero run longer than `max` occurs before the trailing run
pub fn is_zero_run_bounded(samples: &[Sample], max: usize) -> bool {
    let body = &samples[..samples.len() - trailing_zero_run(samples)];
    longest_zero_run(body) <= max
}

/// Returns true if the pulses strictly alternate in polarity, starting positive
pub fn marks_alternate(samples: &[Sample]) -> bool {
    let mut expected = Polarity::Positive;
    for polarity in samples.iter().filter_map(Sample::polarity) {
        if polarity != expected {
            return false;
        }
        expected = expected.flip();
    }
    true
}

/// Count of pulses with the same polarity as the previous pulse
pub fn bipolar_violations(samples: &[Sample]) -> usize {
    let mut last: Option<Polarity> = None;
    let mut violations = 0;
    for polarity in samples.iter().filter_map(Sample::polarity) {
        if last == Some(polarity) {
            violations += 1;
        }
        last = Some(polarity);
    }
    violations
}

/// Sum of all sample levels; zero for a DC-balanced signal
pub fn running_disparity(samples: &[Sample]) -> i32 {
    samples.iter().map(|s| i32::from(s.level())).sum()
}

/// Summary of a ternary line signal
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalSummary {
    pub len: usize,
    pub pulses: usize,
    pub longest_zero_run: usize,
    pub trailing_zero_run: usize,
    pub bipolar_violations: usize,
    pub disparity: i32,
}

impl SignalSummary {
    pub fn of(samples: &[Sample]) -> Self {
        Self {
            len: samples.len(),
            pulses: samples.iter().filter(|s| s.is_pulse()).count(),
            longest_zero_run: longest_zero_run(samples),
            trailing_zero_run: trailing_zero_run(samples),
            bipolar_violations: bipolar_violations(samples),
            disparity: running_disparity(samples),
        }
    }

    /// Returns true if the signal is DC balanced
    pub fn is_balanced(&self) -> bool {
        self.disparity == 0
    }
}
