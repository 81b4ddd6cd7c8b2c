use std::{ffi::OsString, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{Level, debug, error, log_enabled};
use lsl_engine::list_directory;
use lsl_fs::{CachedIdentity, ListError, SystemIdentity};
use lsl_runtime::{DIRECTORY_NOT_FOUND, PROGRAM_NAME, default_target_dir, usage, worker_threads};

use super::Status;
use crate::printer::ListingPrinter;

/// The only accepted form is `lsl -l [DIRECTORY]`.
#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    about = "List a directory in long format",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct ListArgs {
    /// Use the long listing format (the only supported format)
    #[arg(short = 'l', required = true)]
    pub long: bool,

    /// Directory to list; defaults to the current directory
    #[arg(allow_hyphen_values = true)]
    pub directory: Option<PathBuf>,
}

/// Validate the raw argument vector, program name included.
///
/// The first argument must be `-l` and at most one more token may follow.
/// That token is always the directory, even when it looks like a flag.
fn parse_args(mut args: Vec<OsString>) -> Result<ListArgs, ListError> {
    if args.len() < 2 || args.len() > 3 || args[1].as_os_str() != "-l" {
        return Err(ListError::Usage);
    }

    // `--` keeps a directory such as `-x` or `--help` positional.
    if args.len() == 3 {
        args.insert(2, OsString::from("--"));
    }

    ListArgs::try_parse_from(args).map_err(|e| {
        debug!("[args] rejected: {:?}", e.kind());
        ListError::Usage
    })
}

pub fn run<I, P>(args: I, printer: &mut P) -> Status
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    P: ListingPrinter,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let result = parse_args(args)
        .map_err(anyhow::Error::from)
        .and_then(|list_args| execute(list_args, printer));

    let status = match result {
        Ok(()) => Status::Success,
        Err(e) => report(&e, printer),
    };

    if let Err(e) = printer.finish() {
        error!("[error] failed to flush output: {e}");
        return Status::Failure;
    }

    status
}

fn execute<P: ListingPrinter>(args: ListArgs, printer: &mut P) -> Result<()> {
    let ListArgs { long, directory } = args;
    debug_assert!(long);

    let dir = directory.unwrap_or_else(default_target_dir);
    let ids = CachedIdentity::new(SystemIdentity);
    let threads = worker_threads();

    let listing = list_directory(&dir, &ids, threads, log_enabled!(Level::Debug))?;

    for line in &listing.lines {
        printer
            .print_line(line)
            .map_err(ListError::Output)
            .with_context(|| format!("listing {}", dir.display()))?;
    }

    Ok(())
}

/// Print the user-facing message for `err` and pick the exit status.
fn report<P: ListingPrinter>(err: &anyhow::Error, printer: &mut P) -> Status {
    let (message, status) = match err.downcast_ref::<ListError>() {
        Some(ListError::Usage) => (Some(usage()), Status::Usage),
        Some(ListError::DirectoryNotFound { path, source }) => {
            debug!("[list] {}: {source}", path.display());
            (Some(DIRECTORY_NOT_FOUND.to_owned()), Status::Failure)
        }
        _ => {
            error!("[error] {err:#}");
            (None, Status::Failure)
        }
    };

    if let Some(msg) = message
        && let Err(e) = printer.print_message(&msg)
    {
        error!("[error] failed to write message: {e}");
    }

    status
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
