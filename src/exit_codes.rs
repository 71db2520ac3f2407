//! Exit code constants for the meme CLI.
//!
//! - 0: Success
//! - 1: User error (unreadable or invalid config)
//! - 2: Usage error (reported by clap when arguments do not parse)
//! - 3: Output failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unreadable or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Usage error: clap exits with this code on malformed invocations.
pub const USAGE_ERROR: i32 = 2;

/// Output failure: a result could not be rendered.
pub const OUTPUT_FAILURE: i32 = 3;
