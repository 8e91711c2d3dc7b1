//! Limits and defaults for parsing and validation.
//!
//! The parser is designed to run on untrusted input, so input size and
//! variation nesting are bounded. Nesting is bounded because each nested
//! `(...)` group is one level of recursion.

/// Maximum accepted document size in bytes (64 MiB).
pub const MAX_INPUT_SIZE: usize = 64 * 1024 * 1024;

/// Maximum depth of nested variations.
pub const MAX_NESTING_DEPTH: usize = 1_000;

/// Board size used when the root node has no `SZ` property.
pub const DEFAULT_BOARD_SIZE: u8 = 19;

/// Largest board dimension the coordinate alphabet can address.
pub const MAX_BOARD_SIZE: u8 = 52;

/// Charset used when the root node has no `CA` property.
pub const DEFAULT_CHARSET: &str = "ISO-8859-1";
