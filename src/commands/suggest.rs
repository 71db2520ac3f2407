//! Implementation of the `meme suggest` command.

use super::emit;
use crate::cli::SuggestArgs;
use memegen_url::config::Config;
use memegen_url::error::Result;
use memegen_url::meme::{suggest_all, suggest_or};
use std::io::Write;
use tracing::debug;

/// Execute the `meme suggest` command.
///
/// Prints the best template for the context, or every candidate with `--all`.
pub fn cmd_suggest(args: SuggestArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    emit(out, &render_suggest(&args, config))
}

fn render_suggest(args: &SuggestArgs, config: &Config) -> String {
    if args.all {
        let candidates = suggest_all(&args.context);
        if !candidates.is_empty() {
            return candidates.join("\n");
        }
        debug!(context = %args.context, "no context keyword matched");
        return config.fallback_template.clone();
    }

    suggest_or(&args.context, &config.fallback_template).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(context: &str, all: bool) -> SuggestArgs {
        SuggestArgs {
            context: context.to_string(),
            all,
        }
    }

    #[test]
    fn prints_first_match() {
        assert_eq!(
            render_suggest(&args("deployment success", false), &Config::default()),
            "success"
        );
    }

    #[test]
    fn prints_default_when_nothing_matches() {
        assert_eq!(
            render_suggest(&args("obscure nonsense", false), &Config::default()),
            "buzz"
        );
    }

    #[test]
    fn configured_fallback_is_used() {
        let config = Config::from_yaml("fallback_template: doge").unwrap();
        assert_eq!(render_suggest(&args("obscure nonsense", false), &config), "doge");
        assert_eq!(render_suggest(&args("obscure nonsense", true), &config), "doge");
    }

    #[test]
    fn all_prints_one_candidate_per_line() {
        assert_eq!(
            render_suggest(&args("a comparison of failure modes", true), &Config::default()),
            "fine\nyuno\ndrake\nawesome\ndistracted"
        );
    }
}
