//! Implementation of the `meme generate` command.

use super::emit;
use crate::cli::GenerateArgs;
use memegen_url::config::Config;
use memegen_url::error::Result;
use memegen_url::meme::catalog::is_known_template;
use memegen_url::meme::{MemeRequest, to_markdown};
use std::io::Write;
use tracing::debug;

/// Execute the `meme generate` command.
///
/// Prints the meme URL, or an embeddable image snippet with `--markdown`.
pub fn cmd_generate(args: GenerateArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    emit(out, &render_generate(args, config))
}

fn render_generate(args: GenerateArgs, config: &Config) -> String {
    if !is_known_template(&args.template) {
        debug!(
            template = %args.template,
            "template is not in the built-in catalog, passing it through"
        );
    }

    let width = args.width;
    let request = MemeRequest::new(args.template, args.top, args.bottom.unwrap_or_default())
        .with_extension(
            args.extension
                .unwrap_or_else(|| config.default_extension.clone()),
        )
        .with_width(width)
        .with_height(args.height)
        .with_layout(args.layout)
        .with_style(args.style)
        .with_font(args.font);

    let url = config.generator().generate(&request);

    if args.markdown {
        to_markdown(&url, &args.alt, width)
    } else {
        url
    }
}
