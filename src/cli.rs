use std::io::Write;

use clap::Parser;
use serde::Serialize;
use tracing::warn;

use crate::config::{LATEST_VERSION, SYSTEM_VERSION};
use crate::version::error::ResolveError;
use crate::version::lister::VersionLister;
use crate::version::probe::SystemProbe;
use crate::version::resolver::VersionResolver;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "goenv-installed",
    version,
    about = "Print the installed Go version matching a version specifier"
)]
pub struct Cli {
    /// Version specifier: latest, system, 1, 23, 1.23, 1.23rc1 or 1.23.4
    #[arg(value_name = "VERSION", default_value = LATEST_VERSION)]
    pub specifier: String,

    /// Print completion candidates and exit
    #[arg(long)]
    pub complete: bool,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Resolved<'a> {
    version: &'a str,
}

#[derive(Serialize)]
struct Failure<'a> {
    error: &'a str,
    message: String,
}

/// Exit code for a failed argument parse
///
/// `--help` and `--version` exit successfully; usage errors exit with
/// `EXIT_FAILURE` like every other failure.
pub fn parse_error_exit_code(error: &clap::Error) -> u8 {
    if error.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

/// Run the command, writing results to `out` and diagnostics to `err`.
///
/// Returns the process exit code.
pub fn run<L, P>(
    cli: &Cli,
    resolver: &VersionResolver<L, P>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<u8>
where
    L: VersionLister,
    P: SystemProbe,
{
    if cli.complete {
        print_completions(resolver, out)?;
        return Ok(EXIT_SUCCESS);
    }

    match resolver.resolve(&cli.specifier) {
        Ok(version) => {
            if cli.json {
                serde_json::to_writer(&mut *out, &Resolved { version: &version })?;
                writeln!(out)?;
            } else {
                writeln!(out, "{version}")?;
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            report_failure(&e, cli.json, err)?;
            Ok(EXIT_FAILURE)
        }
    }
}

fn print_completions<L, P>(
    resolver: &VersionResolver<L, P>,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    L: VersionLister,
    P: SystemProbe,
{
    writeln!(out, "{LATEST_VERSION}")?;
    writeln!(out, "{SYSTEM_VERSION}")?;

    match resolver.installed() {
        Ok(installed) => {
            for version in installed.as_slice() {
                writeln!(out, "{version}")?;
            }
        }
        Err(e) => warn!("Failed to list installed versions: {}", e),
    }

    Ok(())
}

fn report_failure(error: &ResolveError, json: bool, err: &mut impl Write) -> anyhow::Result<()> {
    if json {
        let failure = Failure {
            error: error.kind(),
            message: error.to_string(),
        };
        serde_json::to_writer(&mut *err, &failure)?;
        writeln!(err)?;
    } else {
        writeln!(err, "goenv: {error}")?;
    }
    Ok(())
}
