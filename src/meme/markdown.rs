//! Embedding snippets for generated meme URLs.

/// Alt text used when the caller has none.
pub const DEFAULT_ALT_TEXT: &str = "Meme";

/// Render a meme URL as an embeddable image.
///
/// With a width this is an HTML `<img>` tag, since markdown image syntax has
/// no size attribute. A width of zero counts as absent.
pub fn to_markdown(url: &str, alt_text: &str, width: Option<u32>) -> String {
    match width.filter(|w| *w > 0) {
        Some(width) => format!(r#"<img src="{url}" alt="{alt_text}" width="{width}"/>"#),
        None => format!("![{alt_text}]({url})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.memegen.link/images/buzz/memes/memes_everywhere.png";

    #[test]
    fn markdown_image_without_width() {
        assert_eq!(
            to_markdown(URL, DEFAULT_ALT_TEXT, None),
            format!("![Meme]({URL})")
        );
    }

    #[test]
    fn html_tag_with_width() {
        assert_eq!(
            to_markdown(URL, "Buzz", Some(300)),
            format!(r#"<img src="{URL}" alt="Buzz" width="300"/>"#)
        );
    }

    #[test]
    fn zero_width_falls_back_to_markdown() {
        assert_eq!(to_markdown(URL, "x", Some(0)), format!("![x]({URL})"));
    }

    #[test]
    fn alt_text_is_verbatim() {
        assert_eq!(to_markdown("u", "a [b]", None), "![a [b]](u)");
    }
}
