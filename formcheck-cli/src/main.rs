mod args;
mod error;
mod output;
mod script;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use formcheck::FormValidator;
use formcheck::paths;
use formcheck::policy::FormPolicy;
use formcheck::sink::SubmissionSink;
use log::{debug, info};
use simplelog::{Config, WriteLogger};

use crate::args::Args;
use crate::error::CliError;
use crate::output::ConsoleSink;
use crate::script::Events;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<(), CliError> {
    if let Err(e) = init_logger(&args) {
        eprintln!("Warning: {}; file logging disabled", e);
    }

    let policy = load_policy(args.policy.as_deref(), paths::policy_file())?;
    debug!("Using policy {:?}", policy);

    let reader: Box<dyn BufRead> = match &args.events {
        Some(path) => Box::new(BufReader::new(File::open(path).map_err(|source| {
            CliError::Open {
                path: path.clone(),
                source,
            }
        })?)),
        None => Box::new(io::stdin().lock()),
    };

    let mut form = FormValidator::with_sink(ConsoleSink::new(args.quiet)).with_policy(policy)?;
    run_script(reader, &mut form, &mut io::stdout().lock())?;

    info!(
        "Script finished after {} submit attempt(s), form {:?}",
        form.attempts(),
        form.state()
    );
    Ok(())
}

/// Feed every event of a script to the form, writing one report per submit.
///
/// Stops at the first line that fails to decode.
fn run_script<S: SubmissionSink>(
    reader: impl BufRead,
    form: &mut FormValidator<S>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    for event in Events::new(reader) {
        if let Some(outcome) = form.dispatch(event?) {
            output::write_outcome(out, form.attempts(), &outcome)?;
        }
    }
    Ok(())
}

/// Log to a file, the way the terminal apps do; skipped when no path resolves.
fn init_logger(args: &Args) -> Result<(), CliError> {
    let Some(path) = args.log_file.clone().or_else(paths::log_file) else {
        return Ok(());
    };
    let log_file = open_log_file(&path)?;
    WriteLogger::init(args.log_level.into(), Config::default(), log_file)?;
    Ok(())
}

/// Create the log file, and its parent directories if needed.
fn open_log_file(path: &Path) -> Result<File, CliError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| CliError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    File::create(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// An explicit policy file must load; the platform one is optional.
fn load_policy(
    explicit: Option<&Path>,
    platform: Option<PathBuf>,
) -> Result<FormPolicy, CliError> {
    if let Some(path) = explicit {
        return Ok(FormPolicy::load(path)?);
    }
    match platform {
        Some(path) => Ok(FormPolicy::load_or_default(path)?),
        None => Ok(FormPolicy::default()),
    }
}
