//! Game trees stored as node arenas.

use crate::model::{BoardSize, Charset, GameTreeNode};

/// Stable index of a node within its [`GameTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    node: GameTreeNode,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A rooted tree of nodes: the main line plus its variations.
///
/// Nodes live in an arena in insertion order; parent and child links are
/// indices, and children keep the order they were added in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameTree {
    slots: Vec<Slot>,
    root: Option<NodeId>,
    board_size: Option<BoardSize>,
    charset: Option<Charset>,
}

impl GameTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `node` under `parent`, or as the root when `parent` is `None`.
    pub fn add_node(&mut self, node: GameTreeNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            node,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.slots[p.0].children.push(id),
            None => self.root = Some(id),
        }
        id
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub fn root(&self) -> Option<&GameTreeNode> {
        self.root.map(|id| &self.slots[id.0].node)
    }

    pub fn node(&self, id: NodeId) -> Option<&GameTreeNode> {
        self.slots.get(id.0).map(|s| &s.node)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut GameTreeNode> {
        self.slots.get_mut(id.0).map(|s| &mut s.node)
    }

    /// Children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots.get(id.0).map_or(&[][..], |s| s.children.as_slice())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|s| s.parent)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Node ids in pre-order: each node before its children, children in
    /// insertion order.
    pub fn iter_preorder(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// The root followed by the first child of every node.
    pub fn main_line(&self) -> Vec<NodeId> {
        let mut line = Vec::new();
        let mut next = self.root;
        while let Some(id) = next {
            line.push(id);
            next = self.children(id).first().copied();
        }
        line
    }

    /// Effective board size, set by validation.
    pub fn board_size(&self) -> Option<BoardSize> {
        self.board_size
    }

    /// Effective charset, set by validation.
    pub fn charset(&self) -> Option<Charset> {
        self.charset
    }

    pub(crate) fn set_defaults(&mut self, board_size: BoardSize, charset: Charset) {
        self.board_size = Some(board_size);
        self.charset = Some(charset);
    }
}

/// Pre-order traversal over a [`GameTree`].
pub struct PreOrder<'a> {
    tree: &'a GameTree,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.children(id).iter().rev());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(pos: usize) -> GameTreeNode {
        GameTreeNode::new(pos)
    }

    #[test]
    fn test_add_and_navigate() {
        let mut tree = GameTree::new();
        let root = tree.add_node(node(0), None);
        let a = tree.add_node(node(1), Some(root));
        let b = tree.add_node(node(2), Some(root));
        let c = tree.add_node(node(3), Some(a));

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.root_id(), Some(root));
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.node(b).map(GameTreeNode::position), Some(2));
    }

    #[test]
    fn test_preorder_and_main_line() {
        let mut tree = GameTree::new();
        let root = tree.add_node(node(0), None);
        let a = tree.add_node(node(1), Some(root));
        let b = tree.add_node(node(2), Some(root));
        let c = tree.add_node(node(3), Some(a));
        let d = tree.add_node(node(4), Some(b));

        let order: Vec<_> = tree.iter_preorder().collect();
        assert_eq!(order, vec![root, a, c, b, d]);
        assert_eq!(tree.main_line(), vec![root, a, c]);
    }

    #[test]
    fn test_empty_tree() {
        let tree = GameTree::new();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.iter_preorder().count(), 0);
        assert!(tree.main_line().is_empty());
        assert!(tree.board_size().is_none());
    }
}
