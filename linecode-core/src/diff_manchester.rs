//! Differential Manchester encoder and decoder
//!
//! Every bit cell carries a mid-cell transition. A zero starts the cell on
//! the reference polarity; a one starts it on the opposite polarity and
//! flips the reference for the cells that follow.

use heapless::Vec;

use crate::error::{ensure_capacity, CodecError};
use crate::types::{Bit, Polarity};

/// Encode bits as two samples per bit, starting from a positive line state.
pub fn diff_manchester_encode<const N: usize>(bits: &[Bit]) -> Result<Vec<Polarity, N>, CodecError> {
    ensure_capacity::<N>(bits.len() * 2)?;

    let mut state = Polarity::Positive;
    let mut samples = Vec::new();
    for bit in bits {
        let cell = match bit {
            Bit::Zero => [state, -state],
            Bit::One => {
                let cell = [-state, state];
                state = -state;
                cell
            }
        };
        // capacity checked above
        let _ = samples.extend_from_slice(&cell);
    }

    #[cfg(feature = "defmt")]
    defmt::trace!("DiffManchester: {} bits encoded", bits.len());

    Ok(samples)
}

/// Decode a Differential Manchester signal.
///
/// Odd-length input is rejected with [`CodecError::MalformedSignal`].
pub fn diff_manchester_decode<const N: usize>(samples: &[Polarity]) -> Result<Vec<Bit, N>, CodecError> {
    if samples.len() % 2 != 0 {
        return Err(CodecError::MalformedSignal { len: samples.len() });
    }
    ensure_capacity::<N>(samples.len() / 2)?;

    let mut state = Polarity::Positive;
    let mut bits = Vec::new();
    for cell in samples.chunks_exact(2) {
        let bit = if cell[0] == state {
            Bit::Zero
        } else {
            state = state.flip();
            Bit::One
        };
        let _ = bits.push(bit);
    }

    #[cfg(feature = "defmt")]
    defmt::trace!("DiffManchester: {} samples decoded", samples.len());

    Ok(bits)
}
