use deftype_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible.
    if let Err(file_err) = logging::init_logging() {
        if let Err(err) = logging::init_logging_stderr() {
            eprintln!("deftype: logging disabled: {:#} ({:#})", file_err, err);
        }
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("deftype error: {:#}", err);
        std::process::exit(1);
    }
}
