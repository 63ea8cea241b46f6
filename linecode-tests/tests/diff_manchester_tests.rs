//! Differential Manchester encoding tests

use linecode_core::{
    diff_manchester_decode, diff_manchester_encode, parse_bits, polarities_from_levels, Bit, CodecError, Polarity,
};
use proptest::prelude::*;
use rstest::rstest;

const CAP: usize = 512;

fn bits(text: &str) -> heapless::Vec<Bit, CAP> {
    parse_bits(text).unwrap()
}

#[rstest]
#[case("", &[])]
#[case("0", &[1, -1])]
#[case("1", &[-1, 1])]
#[case("00", &[1, -1, 1, -1])]
#[case("11", &[-1, 1, 1, -1])]
#[case("1011", &[-1, 1, -1, 1, 1, -1, -1, 1])]
fn test_known_encodings(#[case] input: &str, #[case] expected: &[i8]) {
    let samples = diff_manchester_encode::<CAP>(&bits(input)).unwrap();
    let levels: Vec<i8> = samples.iter().map(|p| p.level()).collect();
    assert_eq!(levels, expected);
}

#[rstest]
#[case(&[-1, 1, -1, 1, 1, -1, -1, 1], "1011")]
#[case(&[-1, 1, -1, 1, -1, 1, -1, 1], "1000")]
#[case(&[1, -1, -1, 1], "01")]
fn test_known_decodings(#[case] levels: &[i8], #[case] expected: &str) {
    let samples: heapless::Vec<Polarity, CAP> = polarities_from_levels(levels).unwrap();
    let decoded = diff_manchester_decode::<CAP>(&samples).unwrap();
    assert_eq!(decoded, bits(expected));
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(9)]
fn test_odd_length_is_malformed(#[case] len: usize) {
    let samples = vec![Polarity::Positive; len];
    assert_eq!(
        diff_manchester_decode::<CAP>(&samples),
        Err(CodecError::MalformedSignal { len })
    );
}

fn bit_stream(max_len: usize) -> impl Strategy<Value = Vec<Bit>> {
    prop::collection::vec(any::<bool>(), 0..max_len)
        .prop_map(|v| v.into_iter().map(|b| if b { Bit::One } else { Bit::Zero }).collect())
}

fn polarity_stream(max_cells: usize) -> impl Strategy<Value = Vec<Polarity>> {
    prop::collection::vec(any::<(bool, bool)>(), 0..max_cells).prop_map(|cells| {
        cells
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .map(|p| if p { Polarity::Positive } else { Polarity::Negative })
            .collect()
    })
}

proptest! {
    // Property: decode inverts encode
    #[test]
    fn test_round_trip(bits in bit_stream(CAP / 2)) {
        let samples = diff_manchester_encode::<CAP>(&bits).unwrap();
        let decoded = diff_manchester_decode::<CAP>(&samples).unwrap();
        prop_assert_eq!(decoded.as_slice(), bits.as_slice());
    }

    // Property: two samples per bit, with a transition in the middle of every cell
    #[test]
    fn test_mid_cell_transition(bits in bit_stream(CAP / 2)) {
        let samples = diff_manchester_encode::<CAP>(&bits).unwrap();
        prop_assert_eq!(samples.len(), 2 * bits.len());
        for cell in samples.chunks_exact(2) {
            prop_assert_ne!(cell[0], cell[1]);
        }
    }

    // Property: a one holds the level across the cell boundary, a zero toggles it
    #[test]
    fn test_boundary_level_encodes_bit(bits in bit_stream(CAP / 2)) {
        let samples = diff_manchester_encode::<CAP>(&bits).unwrap();
        // the line ends every cell opposite to the reference, which starts positive
        let mut previous = Polarity::Negative;
        for (bit, cell) in bits.iter().zip(samples.chunks_exact(2)) {
            prop_assert_eq!(*bit == Bit::One, cell[0] == previous);
            previous = cell[1];
        }
    }

    // Property: any even-length signal decodes to one bit per cell
    #[test]
    fn test_decode_accepts_any_even_signal(samples in polarity_stream(CAP / 2)) {
        let decoded = diff_manchester_decode::<CAP>(&samples).unwrap();
        prop_assert_eq!(decoded.len(), samples.len() / 2);
    }
}
