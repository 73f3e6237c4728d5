use wpac_core::logging;

mod cli;

use crate::cli::CliCommand;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // File logging first; if the state dir is unusable, log to stderr instead.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match CliCommand::run_from_args().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("wpac error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
