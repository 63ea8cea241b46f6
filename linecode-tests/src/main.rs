//! linecode: encode a bit string with HDB3 or Differential Manchester,
//! show the line signal and optionally decode it back.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linecode_core::analysis::SignalSummary;
use linecode_core::{parse_bits, Encoded, LineCodeConfig, LineCoder, OddLengthPolicy, Scheme};
use linecode_tests::{format_bits, format_levels, parse_levels, render_step_plot, MAX_BITS, SIGNAL_CAPACITY};

#[derive(Parser)]
#[command(name = "linecode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum SchemeArg {
    #[default]
    Hdb3,
    DiffManchester,
}

impl From<SchemeArg> for Scheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Hdb3 => Scheme::Hdb3,
            SchemeArg::DiffManchester => Scheme::DiffManchester,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a bit string
    Encode {
        /// Bits to encode, e.g. "1000 0110"
        bits: String,

        /// Line code
        #[arg(short, long, value_enum, default_value_t = SchemeArg::Hdb3)]
        scheme: SchemeArg,

        /// Decode the encoded signal again
        #[arg(long)]
        decode: bool,

        /// Draw a step plot of the signal
        #[arg(long)]
        plot: bool,
    },

    /// Decode a line signal given as levels, e.g. "1,0,0,-1"
    Decode {
        /// Signal levels separated by commas or spaces
        levels: String,

        /// Line code
        #[arg(short, long, value_enum, default_value_t = SchemeArg::Hdb3)]
        scheme: SchemeArg,

        /// Drop a dangling half cell instead of failing (Differential Manchester)
        #[arg(long)]
        truncate: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match cli.command {
        Commands::Encode { bits, scheme, decode, plot } => encode(&bits, scheme.into(), decode, plot),
        Commands::Decode { levels, scheme, truncate } => decode(&levels, scheme.into(), truncate),
    }
}

fn coder_for(scheme: Scheme, truncate: bool) -> Result<LineCoder> {
    let odd_length = if truncate { OddLengthPolicy::Truncate } else { OddLengthPolicy::Reject };
    let config = LineCodeConfig::new(scheme, odd_length, MAX_BITS).map_err(anyhow::Error::msg)?;
    Ok(LineCoder::new(config))
}

fn encode(text: &str, scheme: Scheme, decode: bool, plot: bool) -> Result<()> {
    tracing::info!("Encoding {:?} with {}", text, scheme.name());

    let bits = parse_bits::<MAX_BITS>(text).context("invalid bit string")?;
    let coder = coder_for(scheme, false)?;
    let encoded = coder.encode::<SIGNAL_CAPACITY>(&bits)?;

    println!("Binary Data: {}", format_bits(&bits));
    println!("{} Encoded Data: {}", scheme.name(), format_levels(encoded.samples()));

    if let Encoded::Hdb3(encoding) = &encoded {
        if encoding.was_scrambled() {
            println!("Scrambled Signal Produced:");
            for substitution in &encoding.substitutions {
                println!(
                    "  bits {}..{}: {}",
                    substitution.start,
                    substitution.start + 4,
                    format_levels(substitution.kind.samples())
                );
            }
        } else {
            println!("No scrambling was necessary in the encoded data.");
        }

        let summary = SignalSummary::of(&encoding.samples);
        tracing::debug!(?summary, "HDB3 signal");
    }

    if plot {
        let samples: Vec<_> = encoded.samples().collect();
        print!("{}", render_step_plot(&samples));
    }

    if decode {
        let decoded = coder.decode(&encoded)?;
        println!("Decoded Data: {}", format_bits(&decoded));
    } else {
        tracing::info!("Decoding skipped");
    }

    Ok(())
}

fn decode(text: &str, scheme: Scheme, truncate: bool) -> Result<()> {
    tracing::info!("Decoding {:?} with {}", text, scheme.name());

    let levels = parse_levels(text)?;
    let coder = coder_for(scheme, truncate)?;
    let bits = coder
        .decode_levels::<SIGNAL_CAPACITY>(&levels)
        .with_context(|| format!("cannot decode {} levels as {}", levels.len(), scheme.name()))?;

    println!("Decoded Data: {}", format_bits(&bits));
    Ok(())
}
