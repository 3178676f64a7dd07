use std::process::ExitCode;

use clap::Parser;

use goenv_installed::cli::{Cli, parse_error_exit_code, run};
use goenv_installed::config::Config;
use goenv_installed::logging;
use goenv_installed::version::listers::VersionsDirLister;
use goenv_installed::version::probes::PathSystemProbe;
use goenv_installed::version::resolver::VersionResolver;

fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(ExitCode::from(parse_error_exit_code(&e)));
        }
    };
    let config = Config::from_env();
    logging::init(config.debug);

    let resolver = VersionResolver::new(
        VersionsDirLister::new(config.versions_dir()),
        PathSystemProbe::from_env(config.shims_dir()),
        config.supported_majors.clone(),
    );

    let code = run(
        &cli,
        &resolver,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;
    Ok(ExitCode::from(code))
}
