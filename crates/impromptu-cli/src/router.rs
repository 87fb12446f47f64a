//! Command routing logic for CLI

use crate::args::Cli;
use crate::commands::run::{self, RunOptions};
use crate::console::CliConsole;
use crate::logging;
use impromptu_core::RunStatus;
use impromptu_core::config::{Config, load_config};
use impromptu_core::error::ImpromptuResult;
use std::process::ExitCode;

/// Load configuration, set up logging and run the command.
///
/// Exits with success for both a presented quote and "no location"; only failures are
/// reported through the exit status.
pub async fn route(cli: Cli) -> ExitCode {
    let console = CliConsole::new(cli.verbose);

    let config = match load_logged(&cli.config_file, cli.verbose) {
        Ok(config) => config,
        Err(e) => {
            console.error(&format!("Failed to load configuration: {}", e));
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.logging, cli.verbose);

    let options = RunOptions {
        source: &cli.source,
        html: cli.html.as_deref(),
    };
    match run::execute(options, config, console).await {
        Ok(status) => exit_code(&status),
        Err(e) => {
            console.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Load configuration with a bootstrap subscriber in scope, so loader diagnostics and
/// failures are logged before the configured subscriber exists
fn load_logged(path: &str, verbose: bool) -> ImpromptuResult<Config> {
    tracing::subscriber::with_default(logging::bootstrap(verbose), || {
        load_config(path).inspect_err(|e| {
            tracing::error!(path, code = e.error_code(), error = %e, "failed to load configuration")
        })
    })
}

fn exit_code(status: &RunStatus) -> ExitCode {
    if status.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
