//! Command implementations for meme.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command writes its result to the given output
//! (stdout in the binary); diagnostics go through `tracing` to stderr.

mod generate;
mod list_templates;
mod suggest;

use crate::cli::Command;
use memegen_url::config::Config;
use memegen_url::error::{MemeError, Result};
use std::io::{ErrorKind, Write};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args, config, out),
        Command::ListTemplates(args) => list_templates::cmd_list_templates(args, out),
        Command::Suggest(args) => suggest::cmd_suggest(args, config, out),
    }
}

/// Write one command result followed by a newline.
///
/// A closed pipe (e.g. `meme list-templates | head -3`) ends output quietly;
/// any other write failure is an output error.
pub(crate) fn emit(out: &mut dyn Write, text: &str) -> Result<()> {
    match writeln!(out, "{}", text).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(MemeError::Output(format!("failed to write output: {}", e))),
    }
}
