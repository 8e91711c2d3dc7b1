//! Builders driven by the grammar while it walks a game tree.
//!
//! The parser only talks to [`GameTreeBuilder`]; what gets built is up to
//! the implementation the caller picks.
//!
//! # Example
//!
//! ```rust
//! use sgf_tree::model::DotBuilder;
//! use sgf_tree::parse_collection_with;
//!
//! let dots = parse_collection_with(b"(;B[aa](;W[bb])(;W[cc]))", DotBuilder::new).unwrap();
//! assert_eq!(dots[0], "digraph game {\n    1 -> 2;\n    1 -> 3;\n}\n");
//! ```

use std::fmt::Write;

use crate::model::{GameTree, GameTreeNode, NodeId};

/// Receives nodes and variation boundaries in document order.
pub trait GameTreeBuilder {
    type Output;

    /// Called on entering a `(...)` group.
    fn start_variation(&mut self);

    /// Called on leaving a `(...)` group; restores the parent that was
    /// active when the group started.
    fn end_variation(&mut self);

    /// Attaches `node` to the active parent and makes it the active parent.
    fn add_node(&mut self, node: GameTreeNode);

    /// Returns the result once the outermost group has closed.
    fn get_game_tree(self) -> Self::Output;
}

/// Builds a [`GameTree`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: GameTree,
    active: Option<NodeId>,
    variations: Vec<Option<NodeId>>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameTreeBuilder for TreeBuilder {
    type Output = GameTree;

    fn start_variation(&mut self) {
        self.variations.push(self.active);
    }

    fn end_variation(&mut self) {
        self.active = self.variations.pop().flatten();
    }

    fn add_node(&mut self, node: GameTreeNode) {
        self.active = Some(self.tree.add_node(node, self.active));
    }

    fn get_game_tree(self) -> GameTree {
        self.tree
    }
}

/// Records only parent→child edges and renders them as a Graphviz digraph.
///
/// Nodes are labelled 1, 2, 3, ... in document order; node contents are
/// dropped.
#[derive(Debug)]
pub struct DotBuilder {
    active: Option<usize>,
    variations: Vec<Option<usize>>,
    next_label: usize,
    edges: Vec<(usize, usize)>,
}

impl DotBuilder {
    pub fn new() -> Self {
        Self {
            active: None,
            variations: Vec::new(),
            next_label: 1,
            edges: Vec::new(),
        }
    }

    /// Edges recorded so far, in document order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

impl Default for DotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameTreeBuilder for DotBuilder {
    type Output = String;

    fn start_variation(&mut self) {
        self.variations.push(self.active);
    }

    fn end_variation(&mut self) {
        self.active = self.variations.pop().flatten();
    }

    fn add_node(&mut self, _node: GameTreeNode) {
        let label = self.next_label;
        if let Some(parent) = self.active {
            self.edges.push((parent, label));
        }
        self.active = Some(label);
        self.next_label += 1;
    }

    fn get_game_tree(self) -> String {
        let mut out = String::from("digraph game {\n");
        for (from, to) in &self.edges {
            // Writing to a String cannot fail
            let _ = writeln!(out, "    {from} -> {to};");
        }
        out.push_str("}\n");
        out
    }
}
