//! Data model types for SGF game records.
//!
//! - Points and board sizes
//! - Values (raw and typed property values)
//! - Nodes and properties
//! - Game trees (arena of nodes)
//! - Builders (what the parser drives)

pub mod builder;
pub mod node;
pub mod point;
pub mod tree;
pub mod value;

pub use builder::{DotBuilder, GameTreeBuilder, TreeBuilder};
pub use node::{GameTreeNode, Property, PropertyIdentifier};
pub use point::{BoardSize, Point, coordinate_index, coordinate_letter};
pub use tree::{GameTree, NodeId, PreOrder};
pub use value::{Charset, Color, Double, Value};
