mod cli;
mod error;
mod logging;
mod progress;
mod scan;
mod ui;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use error::CliError;
use scan::ScanArgs;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}

fn run(cli: Cli) -> error::Result<()> {
    logging::init(&cli.log_level, cli.verbose)?;

    if let Some(path) = cli.init_config {
        return scan::init_config(&path, cli.force);
    }

    let key = cli
        .key
        .ok_or_else(|| CliError::Other("An API key is required (use --key)".to_string()))?;

    scan::execute(ScanArgs {
        key,
        output: cli.output,
        config_path: cli.config,
        discovery_url: cli.discovery_url,
        timeout: cli.timeout,
        delay_ms: cli.delay_ms,
        insecure: cli.insecure,
        format: cli.format,
        show_errors: cli.show_errors,
        verbose: cli.verbose,
    })
}
