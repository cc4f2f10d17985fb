//! The decode pipeline: locate entries, then read, decode and render each.
//!
//! ```text
//! PATH ──▶ locate() ──▶ for each entry:
//!                          fs::read ──▶ EntryDecoder::decode ──▶ DefaultRenderer ──▶ stdout
//!                             │                 │
//!                        read error       malformed / skipped
//!                             └────────┬────────┘
//!                                stderr (tracing)
//! ```
//!
//! Every per-entry failure is local: the entry is counted, optionally
//! reported, and the walk moves on. Only a failure to write stdout ends
//! the run early, and by then every earlier case has been written whole.
//! A closed stdout (`corpus-decode DIR | head -1`) ends the run quietly.

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use corpus_decoder::{DecodeOutcome, DecoderConfig, EntryDecoder, OperatorFilter};
use corpus_driver::{CaseRenderer, DefaultRenderer, RenderConfig};

use crate::Cli;
use crate::locate::locate;

/// Tally of what happened to each entry in one run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub decoded: usize,
    pub malformed: usize,
    pub unknown_operator: usize,
    pub filtered: usize,
    pub unreadable: usize,
    pub unrenderable: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.decoded
            + self.malformed
            + self.unknown_operator
            + self.filtered
            + self.unreadable
            + self.unrenderable
    }
}

/// Run the decoder over everything `cli.path` names.
///
/// # Errors
///
/// Returns an error only if a rendered case cannot be written to stdout.
/// Unreadable and undecodable entries are skipped.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let filter: OperatorFilter = cli.ops.iter().copied().collect();
    let decoder = EntryDecoder::new(DecoderConfig { filter });
    let render_config = RenderConfig { mode: cli.mode };

    let entries = locate(&cli.path);
    if entries.is_empty() {
        tracing::warn!(path = %cli.path.display(), "no corpus entries found");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    decode_entries(&entries, &decoder, &render_config, !cli.quiet, &mut out)
}

/// Decode `entries` in order, writing each rendered case to `out`.
///
/// # Errors
///
/// Returns an error if `out` fails for any reason other than the reader
/// having gone away.
fn decode_entries(
    entries: &[PathBuf],
    decoder: &EntryDecoder,
    render_config: &RenderConfig,
    report_malformed: bool,
    out: &mut impl io::Write,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    let written = entries
        .iter()
        .try_for_each(|path| {
            process_entry(
                path,
                decoder,
                render_config,
                report_malformed,
                &mut *out,
                &mut summary,
            )
        })
        .and_then(|()| out.flush().context("cannot write to stdout"));
    match written {
        Ok(()) => {}
        Err(e) if is_broken_pipe(&e) => {
            tracing::debug!("stdout closed, stopping");
        }
        Err(e) => return Err(e),
    }

    tracing::debug!(
        entries = summary.total(),
        decoded = summary.decoded,
        malformed = summary.malformed,
        unknown_operator = summary.unknown_operator,
        filtered = summary.filtered,
        unreadable = summary.unreadable,
        unrenderable = summary.unrenderable,
        "corpus walk finished"
    );

    Ok(summary)
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

/// Read, decode and render a single entry, updating `summary`.
///
/// # Errors
///
/// Returns an error only when writing to `out` fails.
fn process_entry(
    path: &Path,
    decoder: &EntryDecoder,
    render_config: &RenderConfig,
    report_malformed: bool,
    out: &mut impl io::Write,
    summary: &mut RunSummary,
) -> Result<()> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read corpus entry");
            summary.unreadable += 1;
            return Ok(());
        }
    };

    let case = match decoder.decode(&bytes) {
        Ok(DecodeOutcome::Case(case)) => case,
        Ok(DecodeOutcome::UnknownOperator { selector }) => {
            tracing::debug!(path = %path.display(), selector, "reserved operator selector, skipped");
            summary.unknown_operator += 1;
            return Ok(());
        }
        Ok(DecodeOutcome::Filtered { operator }) => {
            tracing::debug!(path = %path.display(), op = %operator, "operator filtered out");
            summary.filtered += 1;
            return Ok(());
        }
        Err(e) => {
            if report_malformed {
                tracing::warn!(
                    path = %path.display(),
                    entry_len = bytes.len(),
                    arg_size = ?e.arg_size(),
                    "{e}"
                );
            }
            summary.malformed += 1;
            return Ok(());
        }
    };

    let rendered = match DefaultRenderer.render(&case, Some(path), render_config) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "cannot render decoded case");
            summary.unrenderable += 1;
            return Ok(());
        }
    };

    writeln!(out, "{rendered}").context("cannot write to stdout")?;
    summary.decoded += 1;
    Ok(())
}
