//! SGF: parsing and validation of Smart Game Format game records.
//!
//! This crate reads SGF collections (`FF[4]`, with the usual `FF[3]`
//! leniencies) into navigable game trees and checks them against the
//! property schema.
//!
//! # Overview
//!
//! Reading a document happens in two passes:
//! - **Parsing**: a recursive-descent grammar over the raw bytes drives a
//!   [`GameTreeBuilder`]. Every property value comes out as [`Value::Raw`].
//! - **Validation**: known properties are decoded into typed values against
//!   the board size and charset declared in the root node.
//!
//! # Quick Start
//!
//! ```rust
//! use sgf_tree::{Point, Value, parse};
//!
//! let trees = parse(b"(;GM[1]SZ[9];B[cc](;W[gg])(;W[gc]))").unwrap();
//! let tree = &trees[0];
//!
//! assert_eq!(tree.len(), 4);
//! let first_move = tree.main_line()[1];
//! assert_eq!(
//!     tree.node(first_move).unwrap().value("B"),
//!     Some(&Value::Point(Point::new(2, 2)))
//! );
//! ```
//!
//! # Modules
//!
//! - [`model`]: Game trees, nodes, properties, values and builders
//! - [`codec`]: Byte cursor and grammar productions
//! - [`validate`]: Property schema and semantic validation
//! - [`error`]: Error types
//! - [`limits`]: Limits and defaults
//!
//! # Security
//!
//! The parser is meant for untrusted input:
//! - Input size and variation nesting are bounded
//! - Every failure is an error value carrying a byte offset; nothing panics

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod validate;

use tracing::debug;

// Re-export commonly used types at crate root
pub use codec::Cursor;
pub use error::{Error, ErrorCode, ParseError, ParseErrorKind, ValidationError};
pub use model::{
    BoardSize, Charset, Color, DotBuilder, Double, GameTree, GameTreeBuilder, GameTreeNode,
    NodeId, Point, Property, PropertyIdentifier, TreeBuilder, Value,
};
pub use validate::{
    Cardinality, PropertyType, Schema, ValidationContext, ValueType, validate_collection,
    validate_game_tree, validate_game_tree_with_schema,
};

use limits::{MAX_INPUT_SIZE, MAX_NESTING_DEPTH};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options for [`parse_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Documents longer than this are rejected before parsing.
    pub max_input_size: usize,
    /// Deepest accepted `(...)` nesting.
    pub max_nesting_depth: usize,
    /// Run validation on every parsed tree.
    pub validate: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_input_size: MAX_INPUT_SIZE,
            max_nesting_depth: MAX_NESTING_DEPTH,
            validate: true,
        }
    }
}

impl ParseOptions {
    /// Creates the default options: standard limits, validation on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that stop after parsing; values stay raw.
    pub fn unvalidated() -> Self {
        Self {
            validate: false,
            ..Self::default()
        }
    }
}

/// Parses and validates an SGF collection.
pub fn parse(input: &[u8]) -> Result<Vec<GameTree>, Error> {
    parse_with_options(input, ParseOptions::default())
}

/// Parses an SGF collection with explicit limits.
pub fn parse_with_options(input: &[u8], options: ParseOptions) -> Result<Vec<GameTree>, Error> {
    check_size(input, options.max_input_size)?;

    let mut trees = codec::grammar::parse_collection_limited(
        Cursor::new(input),
        TreeBuilder::new,
        options.max_nesting_depth,
    )?;
    debug!(bytes = input.len(), trees = trees.len(), "parsed collection");

    if options.validate {
        validate_collection(&mut trees)?;
    }
    Ok(trees)
}

/// Parses an SGF collection with a builder of the caller's choice.
///
/// Each game tree gets a fresh builder from `make_builder`. No validation
/// is done.
pub fn parse_collection_with<B, F>(input: &[u8], make_builder: F) -> Result<Vec<B::Output>, Error>
where
    B: GameTreeBuilder,
    F: FnMut() -> B,
{
    check_size(input, MAX_INPUT_SIZE)?;
    Ok(codec::parse_collection(Cursor::new(input), make_builder)?)
}

fn check_size(input: &[u8], max: usize) -> Result<(), ParseError> {
    if input.len() > max {
        return Err(ParseError::new(
            0,
            ParseErrorKind::InputTooLarge {
                len: input.len(),
                max,
            },
        ));
    }
    Ok(())
}
