//! Tests for meme URL construction.

use crate::meme::{DEFAULT_BASE_URL, MemeGenerator, MemeRequest};

fn generator() -> MemeGenerator {
    MemeGenerator::default()
}

#[test]
fn test_build_without_options_has_no_query() {
    assert_eq!(
        generator().build("buzz", "memes", "memes everywhere"),
        "https://api.memegen.link/images/buzz/memes/memes_everywhere.png"
    );
}

#[test]
fn test_build_with_width() {
    let request = MemeRequest::new("drake", "a", "b").with_width(Some(200));
    assert_eq!(
        generator().generate(&request),
        "https://api.memegen.link/images/drake/a/b.png?width=200"
    );
}

#[test]
fn test_empty_captions_use_placeholder() {
    assert_eq!(
        generator().build("fine", "", ""),
        "https://api.memegen.link/images/fine/_/_.png"
    );
}

#[test]
fn test_unknown_template_is_passed_through() {
    assert_eq!(
        generator().build("not-a-template", "x", "y"),
        "https://api.memegen.link/images/not-a-template/x/y.png"
    );
}

#[test]
fn test_captions_are_escaped_but_template_is_not() {
    assert_eq!(
        generator().build("fry", "not sure if 50% off?", "or #1/2"),
        "https://api.memegen.link/images/fry/not_sure_if_50~p_off~q/or_~h1~s2.png"
    );
}

#[test]
fn test_custom_extension() {
    let request = MemeRequest::new("doge", "much", "wow").with_extension("webp");
    assert_eq!(
        generator().generate(&request),
        "https://api.memegen.link/images/doge/much/wow.webp"
    );
}

#[test]
fn test_all_query_params_in_order() {
    let request = MemeRequest::new("buzz", "a", "b")
        .with_width(Some(800))
        .with_height(Some(600))
        .with_layout(Some("top".to_string()))
        .with_style(Some("animated".to_string()))
        .with_font(Some("impact".to_string()));

    assert_eq!(
        generator().generate(&request),
        "https://api.memegen.link/images/buzz/a/b.png?width=800&height=600&layout=top&style=animated&font=impact"
    );
}

#[test]
fn test_empty_and_zero_options_are_omitted() {
    let request = MemeRequest::new("buzz", "a", "b")
        .with_width(Some(0))
        .with_height(None)
        .with_layout(Some(String::new()))
        .with_font(Some("titilliumweb".to_string()));

    assert_eq!(
        generator().generate(&request),
        "https://api.memegen.link/images/buzz/a/b.png?font=titilliumweb"
    );
}

#[test]
fn test_query_values_are_form_encoded() {
    let request = MemeRequest::new("buzz", "a", "b")
        .with_style(Some("https://example.com/bg.png".to_string()));

    assert_eq!(
        generator().generate(&request),
        "https://api.memegen.link/images/buzz/a/b.png?style=https%3A%2F%2Fexample.com%2Fbg.png"
    );
}

#[test]
fn test_query_values_skip_dialect_escaping() {
    let request = MemeRequest::new("buzz", "a", "b").with_layout(Some("my layout".to_string()));

    assert_eq!(
        generator().generate(&request),
        "https://api.memegen.link/images/buzz/a/b.png?layout=my+layout"
    );
}

#[test]
fn test_custom_base_url_trailing_slash_is_trimmed() {
    let generator = MemeGenerator::new("http://localhost:5000/");
    assert_eq!(generator.base_url(), "http://localhost:5000");
    assert_eq!(
        generator.build("buzz", "a", "b"),
        "http://localhost:5000/images/buzz/a/b.png"
    );
}

#[test]
fn test_default_generator_uses_public_api() {
    assert_eq!(generator().base_url(), DEFAULT_BASE_URL);
}

#[test]
fn test_generate_is_deterministic() {
    let request = MemeRequest::new("success", "tests", "passed").with_height(Some(400));
    assert_eq!(generator().generate(&request), generator().generate(&request));
}

#[test]
fn test_query_encoding_follows_form_urlencoded_rules() {
    // `~` is percent-encoded and `*` is left as-is in query values
    let request = MemeRequest::new("buzz", "a", "b").with_font(Some("a~b*c".to_string()));

    assert_eq!(
        generator().generate(&request),
        "https://api.memegen.link/images/buzz/a/b.png?font=a%7Eb*c"
    );
}
