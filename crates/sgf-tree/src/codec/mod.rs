//! Text decoding of SGF documents.
//!
//! The cursor and the recursive-descent productions that drive a
//! [`GameTreeBuilder`](crate::model::GameTreeBuilder).

pub mod cursor;
pub mod grammar;

pub use cursor::{Cursor, is_whitespace};
pub use grammar::{
    parse_collection, parse_game_tree, parse_node, parse_property, parse_property_identifier,
    parse_property_value, parse_sequence,
};
