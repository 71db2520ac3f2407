//! Build memegen.link image URLs.
//!
//! The library half of the `meme` CLI:
//! - `meme`: caption escaping, URL building, the template catalog and
//!   context suggestions, markdown rendering.
//! - `config`: optional YAML settings (base URL and defaults).
//! - `error` / `exit_codes`: error type and its process exit codes.
//!
//! ```
//! use memegen_url::meme::MemeGenerator;
//!
//! let url = MemeGenerator::default().build("buzz", "memes", "memes everywhere");
//! assert_eq!(url, "https://api.memegen.link/images/buzz/memes/memes_everywhere.png");
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod meme;
