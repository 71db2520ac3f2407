//! CLI argument parsing for meme.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build memegen.link image URLs from templates and captions.
///
/// Nothing is downloaded: every command prints a URL or template name that
/// can be pasted into a browser, chat message or markdown document.
#[derive(Parser, Debug)]
#[command(name = "meme")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML config file overriding the API base URL and defaults.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for meme.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meme URL.
    ///
    /// Captions are escaped for the memegen path format. The template is not
    /// checked against the built-in catalog.
    Generate(GenerateArgs),

    /// List the built-in templates with their use cases.
    ListTemplates(ListTemplatesArgs),

    /// Suggest a template for a situation.
    ///
    /// Matches keywords such as "success", "failure" or "deployment" in the
    /// description.
    Suggest(SuggestArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Template name (e.g., buzz, drake).
    pub template: String,

    /// Top text.
    pub top: String,

    /// Bottom text.
    pub bottom: Option<String>,

    /// Image format (png, jpg, webp, gif). Defaults to the configured extension.
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Image width in pixels.
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Layout (top, bottom, default).
    #[arg(short, long)]
    pub layout: Option<String>,

    /// Alternate style or custom background image URL.
    #[arg(short, long)]
    pub style: Option<String>,

    /// Font name.
    #[arg(short, long)]
    pub font: Option<String>,

    /// Output as markdown.
    #[arg(short, long)]
    pub markdown: bool,

    /// Alt text for markdown output.
    #[arg(long, default_value = memegen_url::meme::DEFAULT_ALT_TEXT)]
    pub alt: String,
}

/// Arguments for the `list-templates` command.
#[derive(Parser, Debug)]
pub struct ListTemplatesArgs {
    /// Print the catalog as a JSON object.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `suggest` command.
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Context description (e.g., "deployment success").
    pub context: String,

    /// Print every candidate template instead of the best one.
    #[arg(long)]
    pub all: bool,
}
