//! Implementation of the `meme list-templates` command.

use super::emit;
use crate::cli::ListTemplatesArgs;
use memegen_url::error::{MemeError, Result};
use memegen_url::meme::list_templates;
use std::io::Write;

/// Execute the `meme list-templates` command.
pub fn cmd_list_templates(args: ListTemplatesArgs, out: &mut dyn Write) -> Result<()> {
    let output = if args.json {
        render_json()?
    } else {
        render_text()
    };

    emit(out, &output)
}

/// One `name: description` line per template, sorted by name.
fn render_text() -> String {
    let templates = list_templates();
    let width = templates.keys().map(|name| name.len()).max().unwrap_or(0);

    templates
        .iter()
        .map(|(name, description)| {
            let label = format!("{name}:");
            format!("{label:<pad$}  {description}", pad = width + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_json() -> Result<String> {
    serde_json::to_string_pretty(&list_templates())
        .map_err(|e| MemeError::Output(format!("failed to serialize templates: {}", e)))
}
