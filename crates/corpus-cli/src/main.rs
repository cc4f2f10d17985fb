/// Corpus decoder: turn saved fuzz inputs back into arithmetic expressions.
///
/// The fuzz harness for the multiprecision integer library feeds raw byte
/// buffers of the form `selector ‖ X ‖ Y`. When it saves a crash or an
/// interesting input, this tool recovers the `X <op> Y` it exercised.
///
/// # Usage
///
/// ```text
/// corpus-decode <PATH> [OPTIONS]
///
/// Arguments:
///   <PATH>             A corpus entry, or a directory walked recursively
///
/// Options:
///   --op <OP>          Only report these operators (/ * << >> or div mul shl shr),
///                      repeatable or comma-separated
///   --mode <MODE>      plain (default) | detailed | json
///   -q, --quiet        Do not report malformed entries
///   -v, --verbose      Also report skipped entries and a final summary
///   -h, --help         Print help
///   -V, --version      Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                             |
/// |------|-----------------------------------------------------|
/// | 0    | Every entry was visited (skips are not failures)    |
/// | 1    | Output could not be written                         |
/// | 2    | Usage error, e.g. missing PATH (nothing is decoded) |
///
/// Decoded cases go to stdout. Diagnostics go to stderr so stdout can be
/// piped cleanly.
use std::io::{self, IsTerminal as _};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use corpus_driver::OutputMode;
use corpus_types::Operator;
use tracing_subscriber::EnvFilter;

mod cmd_decode;
mod locate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Decode fuzz corpus entries into readable `X <op> Y` expressions.
#[derive(Parser)]
#[command(name = "corpus-decode", version, about = "Fuzz corpus entry decoder")]
pub struct Cli {
    /// Corpus entry file, or a directory of entries (walked recursively).
    pub path: PathBuf,

    /// Only report these operators. Accepts symbols (`/ * << >>`) or
    /// names (`div mul shl shr`). Without it every operator is reported.
    #[arg(long = "op", value_name = "OP", value_delimiter = ',', value_parser = parse_operator)]
    pub ops: Vec<Operator>,

    /// Output format: `plain`, `detailed`, or `json`.
    #[arg(long, default_value = "plain")]
    pub mode: OutputMode,

    /// Skip malformed entries silently instead of reporting them on stderr.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also log skipped entries and a summary of the run.
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_operator(s: &str) -> Result<Operator, String> {
    Operator::from_symbol(s)
        .ok_or_else(|| format!("unknown operator {s:?}, expected one of / * << >> (div mul shl shr)"))
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // A missing PATH makes clap print usage and exit(2) here, before any
    // entry is read.
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = cmd_decode::run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
