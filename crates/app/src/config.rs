//! Configuration for the huffcode application.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: with no text given it encodes a
//! generated sample. The seed behind that sample is always printed so a run
//! can be repeated exactly.

use std::path::PathBuf;

/// Which tie-break policy the tree builder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Earlier-queued node first
    Insertion,
    /// Leaves by symbol, then internal nodes by insertion
    Symbol,
}

impl TieBreak {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "insertion" => Ok(TieBreak::Insertion),
            "symbol" => Ok(TieBreak::Symbol),
            other => Err(format!(
                "invalid tie-break {other:?} (expected \"insertion\" or \"symbol\")"
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TieBreak::Insertion => "insertion",
            TieBreak::Symbol => "symbol",
        }
    }
}

/// Where the text to encode comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Given literally with --text
    Text(String),
    /// Read from a file with --in
    File(PathBuf),
    /// Generated from the seed
    Sample { seed: u64, len: usize },
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Text source
    pub source: Source,

    /// Tie-break policy for tree construction
    pub tie_break: TieBreak,

    /// Bit string to decode against the built tree
    pub decode_bits: Option<String>,

    /// Print an indented dump of the tree
    pub show_tree: bool,

    /// Print the resolved configuration
    pub print_config: bool,

    /// tracing filter directive (e.g. "debug", "huffcode_core=trace")
    pub log_filter: String,
}

impl Config {
    /// Parse configuration from command-line arguments (without argv[0]).
    ///
    /// If neither --text nor --in is given, a sample is generated. Its seed
    /// is --seed when provided, otherwise time-based.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut text: Option<String> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_len: Option<usize> = None;
        let mut tie_break = TieBreak::Insertion;
        let mut decode_bits: Option<String> = None;
        let mut show_tree = false;
        let mut print_config = false;
        let mut log_filter: Option<String> = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--text" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--text requires a string".to_string());
                    }
                    text = Some(args[i].clone());
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-len" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-len requires a number".to_string());
                    }
                    sample_len = Some(args[i].parse().map_err(|_| "invalid sample-len")?);
                }
                "--tie-break" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--tie-break requires a policy name".to_string());
                    }
                    tie_break = TieBreak::parse(&args[i])?;
                }
                "--decode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--decode requires a bit string".to_string());
                    }
                    decode_bits = Some(args[i].clone());
                }
                "--log" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--log requires a filter".to_string());
                    }
                    log_filter = Some(args[i].clone());
                }
                "--show-tree" => {
                    show_tree = true;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        if (text.is_some() || input_file.is_some()) && (seed.is_some() || sample_len.is_some()) {
            return Err("--seed and --sample-len only apply to a generated sample".to_string());
        }

        let source = match (text, input_file) {
            (Some(_), Some(_)) => {
                return Err("--text and --in are mutually exclusive".to_string());
            }
            (Some(text), None) => Source::Text(text),
            (None, Some(path)) => Source::File(path),
            (None, None) => Source::Sample {
                seed: seed.unwrap_or_else(time_seed),
                len: sample_len.unwrap_or(64),
            },
        };

        Ok(Config {
            source,
            tie_break,
            decode_bits,
            show_tree,
            print_config,
            log_filter: log_filter.unwrap_or_else(|| "warn".to_string()),
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.source {
            Source::Text(text) => println!("Input: --text ({} chars)", text.chars().count()),
            Source::File(path) => println!("Input file: {}", path.display()),
            Source::Sample { seed, len } => {
                println!("Input: generated sample");
                println!("Seed: {seed}");
                println!("Sample length: {len} chars");
            }
        }
        println!("Tie-break: {}", self.tie_break.as_str());
        println!("Log filter: {}", self.log_filter);
        println!();
    }
}

/// Seed derived from the wall clock; 0 if the clock is before the epoch.
fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn print_help() {
    println!("huffcode: Huffman prefix codes for text");
    println!();
    println!("USAGE:");
    println!("    huffcode [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --text <STRING>         Text to encode");
    println!("    --in <PATH>             Read text to encode from a file");
    println!("    --seed <N>              Seed for the generated sample (default: time based)");
    println!("    --sample-len <N>        Generated sample length in chars (default: 64)");
    println!();
    println!("    --tie-break <POLICY>    insertion | symbol (default: insertion)");
    println!("    --decode <BITS>         Also decode this bit string with the built tree");
    println!("    --show-tree             Print the tree");
    println!();
    println!("    --print-config          Print resolved configuration");
    println!("    --log <FILTER>          Log filter, e.g. debug (default: warn, or RUST_LOG)");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffcode                                  # Encode a random sample");
    println!("    huffcode --seed 42                        # Deterministic sample");
    println!("    huffcode --text abracadabra --show-tree   # Encode given text");
    println!("    huffcode --text abracadabra --decode 1000110");
    println!();
}
