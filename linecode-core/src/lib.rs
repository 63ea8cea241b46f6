#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! # Linecode Core
//!
//! Line coding library for embedded systems.
//! Converts bit streams into HDB3 (ternary, zero-run limited) and
//! Differential Manchester (two samples per bit) line signals and back.

pub mod types;
pub mod error;
pub mod validate;
pub mod ami;
pub mod hdb3;
pub mod diff_manchester;
pub mod analysis;
pub mod config;
pub mod hal;

pub use types::*;
pub use error::CodecError;
pub use validate::*;
pub use ami::ami_encode;
pub use hdb3::{hdb3_decode, hdb3_encode, Hdb3Encoder, Hdb3Encoding};
pub use diff_manchester::{diff_manchester_decode, diff_manchester_encode};
pub use analysis::SignalSummary;
pub use config::*;
pub use hal::{HalError, LineDriver, EmbeddedHalLineDriver, transmit};

/// Linecode library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration: HDB3, strict decoding, 64-bit frames
pub fn default_config() -> LineCodeConfig {
    LineCodeConfig {
        scheme: Scheme::Hdb3,
        odd_length: OddLengthPolicy::Reject,
        max_bits: 64,
    }
}
