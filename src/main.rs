//! meme: build memegen.link image URLs from the command line.
//!
//! This is the main entry point for the `meme` CLI. It parses arguments,
//! loads the optional config file, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

mod cli;
mod commands;
mod logging;

use cli::Cli;
use clap::{CommandFactory, Parser};
use memegen_url::config::Config;
use memegen_url::exit_codes;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let code = run(std::env::args_os(), &mut std::io::stdout().lock());
    ExitCode::from(code)
}

/// Run the CLI against `args` (program name first), writing results to `out`.
///
/// Returns the process exit code.
fn run<I, T>(args: I, out: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests also arrive here, on stdout with code 0
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            return code as u8;
        }
    };

    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        let _ = write!(out, "{}", Cli::command().render_help());
        return exit_codes::SUCCESS as u8;
    };

    let result = Config::load_or_default(cli.config.as_deref())
        .and_then(|config| commands::dispatch(command, &config, out));

    match result {
        Ok(()) => exit_codes::SUCCESS as u8,
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            err.exit_code() as u8
        }
    }
}
