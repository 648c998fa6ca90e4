//! huffcode: encode text with a Huffman code and decode it back.
//!
//! Pipeline: text -> frequency table -> tree -> code table -> bits -> text.
//! Everything algorithmic lives in `huffcode-core`; this binary obtains the
//! text, prints the code, and checks the round trip.

mod config;
mod input_gen;

use huffcode_core::bit::{format_bits, parse_bits};
use huffcode_core::{Error, HuffmanCodec, LeavesBySymbol, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{Config, Source, TieBreak};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Run one encode/decode cycle. Returns whether the round trip matched and
/// any `--decode` bits decoded cleanly.
fn run(config: &Config) -> Result<bool> {
    println!("{}", input_header(&config.source));
    let text = load_text(&config.source)?;
    let symbols: Vec<char> = text.chars().collect();

    if symbols.is_empty() {
        println!("Nothing to encode: input is empty.");
        return Ok(true);
    }

    let codec = match config.tie_break {
        TieBreak::Insertion => HuffmanCodec::from_symbols(&symbols)?,
        TieBreak::Symbol => HuffmanCodec::with_policy(&symbols, LeavesBySymbol)?,
    };
    info!(
        chars = symbols.len(),
        distinct = codec.table().len(),
        tie_break = config.tie_break.as_str(),
        "built code"
    );

    println!("Original Data: {text}");
    println!();
    println!("Huffman Code:");
    for (symbol, code) in codec.table().iter() {
        println!(
            "  {:<6} {:<8} {}",
            format!("{symbol:?}"),
            codec.frequencies().count(symbol),
            code
        );
    }
    println!();

    let bits = codec.encode(&symbols)?;
    println!("Encoded Data: {}", format_bits(&bits));
    println!("Encoded length: {} bits", bits.len());

    let decoded: String = codec.decode(&bits)?.into_iter().collect();
    println!();
    println!("Decoded Data: {decoded}");

    if config.show_tree {
        println!();
        println!("Huffman Tree:");
        print!("{}", codec.tree().render());
    }

    println!();
    let verified = decoded == text;
    if verified {
        println!("✓ Round trip verified");
    } else {
        warn!("decoded text differs from input");
        println!("✗ Round trip mismatch");
    }

    let mut extra_ok = true;
    if let Some(raw) = &config.decode_bits {
        println!();
        match decode_extra(&codec, raw) {
            Ok(message) => println!("Decoded --decode bits: {message}"),
            Err(e) => {
                warn!(error = %e, "could not decode --decode bits");
                println!("Could not decode --decode bits: {e}");
                extra_ok = false;
            }
        }
    }

    Ok(verified && extra_ok)
}

/// Decode a user-supplied bit string against the code built for the input.
fn decode_extra(codec: &HuffmanCodec<char>, raw: &str) -> Result<String> {
    let bits = parse_bits(raw)?;
    Ok(codec.decode(&bits)?.into_iter().collect())
}

/// First line of output, naming where the text came from.
///
/// A generated sample always shows its seed so the run can be repeated.
fn input_header(source: &Source) -> String {
    match source {
        Source::Text(_) => "Input: --text argument".to_string(),
        Source::File(path) => format!("Input: file {}", path.display()),
        Source::Sample { seed, len } => {
            format!("Input: generated sample (seed {seed}, {len} chars)")
        }
    }
}

fn load_text(source: &Source) -> Result<String> {
    match source {
        Source::Text(text) => Ok(text.clone()),
        Source::File(path) => {
            let text = std::fs::read_to_string(path).map_err(Error::Io)?;
            info!(path = %path.display(), chars = text.chars().count(), "read input file");
            Ok(text)
        }
        Source::Sample { seed, len } => {
            info!(seed, len, "generating sample text");
            Ok(input_gen::generate_sample_text(*seed, *len))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_sample_header_shows_seed() {
        let header = input_header(&Source::Sample {
            seed: 1_234_567,
            len: 64,
        });
        assert_eq!(header, "Input: generated sample (seed 1234567, 64 chars)");
    }

    #[test]
    fn test_other_headers() {
        assert_eq!(
            input_header(&Source::Text("abc".to_string())),
            "Input: --text argument"
        );
        let header = input_header(&Source::File(PathBuf::from("in.txt")));
        assert_eq!(header, "Input: file in.txt");
    }

    #[test]
    fn test_decode_extra() {
        let symbols: Vec<char> = "abracadabra".chars().collect();
        let codec = HuffmanCodec::from_symbols(&symbols).unwrap();
        // a=0 b=110 r=111
        assert_eq!(decode_extra(&codec, "0110111").unwrap(), "abr");
    }

    #[test]
    fn test_decode_extra_reports_errors() {
        let symbols: Vec<char> = "abracadabra".chars().collect();
        let codec = HuffmanCodec::from_symbols(&symbols).unwrap();
        assert!(matches!(decode_extra(&codec, "01x"), Err(Error::Bit(_))));
        assert!(matches!(decode_extra(&codec, "011"), Err(Error::Code(_))));
    }
}
