//! Binary search tree arena
//!
//! Same arena scheme as the list: id-keyed nodes, `left`/`right` links as
//! ids. Insertion only ever creates fresh leaves, so a well-formed tree has
//! no cycles, but snapshot walks still guard against dangling ids.

use crate::trace::NodeId;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct TreeArena {
    nodes: FxHashMap<NodeId, TreeNode>,
    root: Option<NodeId>,
    next_id: u32,
}

impl TreeArena {
    pub fn new() -> Self {
        TreeArena {
            nodes: FxHashMap::default(),
            root: None,
            next_id: 0,
        }
    }

    /// BST-insert each value in order.
    pub fn from_values(values: &[i64]) -> Self {
        let mut arena = TreeArena::new();
        for &v in values {
            arena.bst_insert(v);
        }
        arena
    }

    /// Seed tree used by the demo scenarios.
    pub fn sample() -> Self {
        TreeArena::from_values(&[50, 30, 70, 20, 40, 60, 80])
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub fn alloc(&mut self, value: i64) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            TreeNode {
                value,
                left: None,
                right: None,
            },
        );
        id
    }

    pub fn remove(&mut self, id: NodeId) -> Option<TreeNode> {
        self.nodes.remove(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn value(&self, id: NodeId) -> i64 {
        self.nodes.get(&id).map(|n| n.value).unwrap_or(0)
    }

    pub fn left_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.left)
    }

    pub fn right_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.right)
    }

    pub fn set_left(&mut self, id: NodeId, left: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.left = left;
        }
    }

    pub fn set_right(&mut self, id: NodeId, right: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.right = right;
        }
    }

    pub fn set_value(&mut self, id: NodeId, value: i64) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.value = value;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Silent BST insert (no frames); duplicates go right.
    pub fn bst_insert(&mut self, value: i64) -> NodeId {
        let id = self.alloc(value);
        let Some(mut cursor) = self.root else {
            self.root = Some(id);
            return id;
        };
        loop {
            if value < self.value(cursor) {
                match self.left_of(cursor) {
                    Some(left) => cursor = left,
                    None => {
                        self.set_left(cursor, Some(id));
                        return id;
                    }
                }
            } else {
                match self.right_of(cursor) {
                    Some(right) => cursor = right,
                    None => {
                        self.set_right(cursor, Some(id));
                        return id;
                    }
                }
            }
        }
    }

    /// Node holding `value` and its parent, by BST descent.
    pub fn find_with_parent(&self, value: i64) -> Option<(NodeId, Option<NodeId>)> {
        let mut parent = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let v = self.value(id);
            if value == v {
                return Some((id, parent));
            }
            parent = Some(id);
            cursor = if value < v {
                self.left_of(id)
            } else {
                self.right_of(id)
            };
        }
        None
    }

    /// Leftmost node of the subtree rooted at `id`, with its parent within
    /// that subtree (None when `id` itself is leftmost).
    pub fn min_with_parent(&self, id: NodeId) -> (NodeId, Option<NodeId>) {
        let mut parent = None;
        let mut cursor = id;
        while let Some(left) = self.left_of(cursor) {
            parent = Some(cursor);
            cursor = left;
        }
        (cursor, parent)
    }

    /// Height in nodes (empty subtree = 0).
    pub fn height(&self, id: Option<NodeId>) -> usize {
        match id {
            None => 0,
            Some(id) => {
                1 + self
                    .height(self.left_of(id))
                    .max(self.height(self.right_of(id)))
            }
        }
    }
}

impl Default for TreeArena {
    fn default() -> Self {
        TreeArena::new()
    }
}
