//! Host-side helpers shared by the `linecode` front-end and the integration tests

use anyhow::{bail, Context, Result};
use linecode_core::{Bit, Sample};

/// Longest bit string accepted by the front-end
pub const MAX_BITS: usize = 256;

/// Buffer capacity for one encoded frame (two samples per bit at most)
pub const SIGNAL_CAPACITY: usize = MAX_BITS * 2;

/// Render bits as a `0`/`1` string
pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(|b| b.as_char()).collect()
}

/// Render samples as a bracketed level list, e.g. `[1, 0, -1]`
pub fn format_levels<I>(samples: I) -> String
where
    I: IntoIterator<Item = Sample>,
{
    let levels: Vec<String> = samples.into_iter().map(|s| s.level().to_string()).collect();
    format!("[{}]", levels.join(", "))
}

/// Parse a list of signal levels separated by commas and/or whitespace
pub fn parse_levels(text: &str) -> Result<Vec<i8>> {
    let levels = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token
                .trim_start_matches('+')
                .parse::<i8>()
                .with_context(|| format!("level {} ({:?}) is not an integer", index, token))
        })
        .collect::<Result<Vec<i8>>>()?;

    if levels.is_empty() {
        bail!("no signal levels given");
    }
    Ok(levels)
}

/// Draw the signal as a three-row step plot with a reference zero line.
///
/// Each sample occupies two columns; the `0` row is drawn as the zero
/// reference wherever the signal is away from it.
pub fn render_step_plot(samples: &[Sample]) -> String {
    const ROWS: [(Sample, &str); 3] = [
        (Sample::Positive, "+1 |"),
        (Sample::Zero, " 0 +"),
        (Sample::Negative, "-1 |"),
    ];

    let mut plot = String::new();
    for (level, label) in ROWS {
        plot.push_str(label);
        for sample in samples {
            let cell = match (*sample == level, level) {
                (true, _) => "##",
                (false, Sample::Zero) => "--",
                (false, _) => "  ",
            };
            plot.push_str(cell);
        }
        plot.push('\n');
    }

    let mut axis = String::from("    ");
    for index in 0..samples.len() {
        axis.push_str(&format!("{:<2}", index % 100));
    }
    plot.push_str(axis.trim_end());
    plot.push('\n');
    plot
}
