// src/cli.rs
use anyhow::{Result, bail};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Settings;
use crate::core::analyzer::analyze;
use crate::core::populator::populate;
use crate::error::OpError;
use crate::utils::{TokenReader, parse_file_count, prompt};

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to create and populate (prompted for when omitted)
    pub directory: Option<PathBuf>,

    /// Number of files to create (prompted for when omitted)
    pub count: Option<u64>,

    /// Only analyze DIRECTORY; do not create or move any files
    #[arg(short = 'a', long)]
    pub analyze_only: bool,

    /// TOML file overriding name length, content length, extension and backup folder
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Exit with a failure status when any operation fails
    #[arg(short = 's', long)]
    pub strict: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Which top-level operations failed during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub input_failed: bool,
    pub populate_failed: bool,
    pub analyze_failed: bool,
}

impl RunOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !self.input_failed && !self.populate_failed && !self.analyze_failed
    }

    /// Maps the outcome to the process result: failures only surface as an
    /// error under `--strict`.
    ///
    /// # Errors
    ///
    /// Returns an error if `strict` is set and any step failed.
    pub fn into_result(self, strict: bool) -> Result<()> {
        if strict && !self.is_success() {
            bail!("one or more operations failed");
        }
        Ok(())
    }
}

/// Runs against the process's standard streams.
///
/// # Errors
///
/// Returns an error for an unusable settings file, or, with `--strict`,
/// when any step failed.
pub fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let strict = args.strict;

    run_with(args, stdin.lock(), &mut stdout.lock(), &mut stderr.lock())?.into_result(strict)
}

/// Populates then analyzes, reading missing arguments from `input`.
///
/// Input and operation failures are written to `err` and recorded in the
/// returned [`RunOutcome`]. An unreadable count falls back to zero files, and
/// analysis runs even when population failed.
///
/// # Errors
///
/// Returns an error if the settings file is invalid or `out`/`err` cannot be
/// written.
pub fn run_with<R, W, E>(args: Args, input: R, out: &mut W, err: &mut E) -> Result<RunOutcome>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let settings = Settings::load(args.config.as_deref())?;
    let mut tokens = TokenReader::new(input);
    let mut outcome = RunOutcome::default();

    let directory = match args.directory {
        Some(dir) => dir,
        None => match prompt(&mut tokens, out, "Enter directory name: ") {
            Ok(name) => PathBuf::from(name),
            Err(e) => {
                report_input_error(err, &e)?;
                outcome.input_failed = true;
                return Ok(outcome);
            }
        },
    };

    if args.analyze_only {
        outcome.analyze_failed = !report_analysis(&directory, out, err)?;
        return Ok(outcome);
    }

    let count = match args.count {
        Some(count) => count,
        None => match prompt(&mut tokens, out, "Enter number of files to create: ")
            .and_then(|token| parse_file_count(&token))
        {
            Ok(count) => count,
            Err(e) => {
                report_input_error(err, &e)?;
                outcome.input_failed = true;
                0
            }
        },
    };

    if let Err(e) = populate(&directory, count, &settings, out) {
        report_error(err, &e)?;
        outcome.populate_failed = true;
    }

    writeln!(out, "\nAnalyzing directory...")?;
    let backup = directory.join(&settings.backup_dir);
    outcome.analyze_failed = !report_analysis(&backup, out, err)?;

    Ok(outcome)
}

fn report_analysis<W: Write, E: Write>(
    dir: &Path,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    match analyze(dir) {
        Ok(report) => {
            report.render(out)?;
            Ok(true)
        }
        Err(e) => {
            report_error(err, &e)?;
            Ok(false)
        }
    }
}

fn report_error<E: Write>(err: &mut E, error: &OpError) -> Result<()> {
    debug!(filesystem = error.is_filesystem(), "{}", error.message());
    writeln!(err, "{error}")?;
    Ok(())
}

fn report_input_error<E: Write>(err: &mut E, error: &anyhow::Error) -> Result<()> {
    debug!("input rejected: {error:#}");
    writeln!(err, "{}", OpError::Generic(format!("{error:#}")))?;
    Ok(())
}
