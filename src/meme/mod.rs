//! memegen.link URL construction.
//!
//! A [`MemeGenerator`] turns a [`MemeRequest`] into an image URL of the form
//! `{base}/images/{template}/{top}/{bottom}.{extension}[?{query}]`. Nothing
//! here performs network I/O; the URL is handed back to the caller.

pub mod catalog;
pub mod escape;
pub mod markdown;

#[cfg(test)]
mod tests;

use tracing::debug;
use url::form_urlencoded;

pub use catalog::{list_templates, suggest, suggest_all, suggest_or};
pub use escape::escape;
pub use markdown::{DEFAULT_ALT_TEXT, to_markdown};

/// Public memegen API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.memegen.link";

/// Image format used when none is requested.
pub const DEFAULT_EXTENSION: &str = "png";

/// Parameters for one meme image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemeRequest {
    pub template: String,
    pub top: String,
    pub bottom: String,
    pub extension: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// `top`, `bottom` or `default`.
    pub layout: Option<String>,
    /// Alternate style name or a custom background URL.
    pub style: Option<String>,
    pub font: Option<String>,
}

impl MemeRequest {
    pub fn new(
        template: impl Into<String>,
        top: impl Into<String>,
        bottom: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            top: top.into(),
            bottom: bottom.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            width: None,
            height: None,
            layout: None,
            style: None,
            font: None,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_width(mut self, width: Option<u32>) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Option<u32>) -> Self {
        self.height = height;
        self
    }

    pub fn with_layout(mut self, layout: Option<String>) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_style(mut self, style: Option<String>) -> Self {
        self.style = style;
        self
    }

    pub fn with_font(mut self, font: Option<String>) -> Self {
        self.font = font;
        self
    }

    /// Query parameters that are set, in URL order.
    ///
    /// Zero dimensions and empty strings are treated as unset.
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let dimensions = [("width", self.width), ("height", self.height)]
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| *v > 0).map(|v| (key, v.to_string())));

        let options = [
            ("layout", &self.layout),
            ("style", &self.style),
            ("font", &self.font),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (key, v.to_string()))
        });

        dimensions.chain(options).collect()
    }
}

/// Builds meme URLs against a memegen deployment.
#[derive(Debug, Clone)]
pub struct MemeGenerator {
    base_url: String,
}

impl Default for MemeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl MemeGenerator {
    /// Create a generator for the given base URL. A trailing `/` is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for a template with two captions and default options.
    pub fn build(&self, template: &str, top: &str, bottom: &str) -> String {
        self.generate(&MemeRequest::new(template, top, bottom))
    }

    /// URL for a fully specified request.
    ///
    /// The template is passed through as-is; whether it exists is up to the
    /// remote service.
    pub fn generate(&self, request: &MemeRequest) -> String {
        let mut url = format!(
            "{}/images/{}/{}/{}.{}",
            self.base_url,
            request.template,
            escape(&request.top),
            escape(&request.bottom),
            request.extension
        );

        let params = request.query_params();
        if !params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params)
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        debug!(template = %request.template, %url, "built meme url");
        url
    }
}
