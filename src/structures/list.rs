//! Linked-list arena
//!
//! Nodes live in an id-keyed map; `next`/`prev` are [`NodeId`]s, so circular
//! lists and mid-mutation states (half-reversed chains, deliberately
//! introduced loops) are all representable. Walks are cycle-safe: they carry
//! a visited set and stop on the first repeat.

use crate::trace::NodeId;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Singly,
    Doubly,
    Circular,
}

impl ListKind {
    pub fn label(&self) -> &'static str {
        match self {
            ListKind::Singly => "singly",
            ListKind::Doubly => "doubly",
            ListKind::Circular => "circular",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListNode {
    pub value: i64,
    pub next: Option<NodeId>,
    /// Maintained only for doubly lists.
    pub prev: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct ListArena {
    kind: ListKind,
    nodes: FxHashMap<NodeId, ListNode>,
    head: Option<NodeId>,
    next_id: u32,
}

impl ListArena {
    pub fn new(kind: ListKind) -> Self {
        ListArena {
            kind,
            nodes: FxHashMap::default(),
            head: None,
            next_id: 0,
        }
    }

    /// Build a list from values, wired per kind (circular tail points back
    /// at the head, doubly gets prev links).
    pub fn from_values(kind: ListKind, values: &[i64]) -> Self {
        let mut arena = ListArena::new(kind);
        let ids: Vec<NodeId> = values.iter().map(|&v| arena.alloc(v)).collect();
        for pair in ids.windows(2) {
            arena.set_next(pair[0], Some(pair[1]));
            if kind == ListKind::Doubly {
                arena.set_prev(pair[1], Some(pair[0]));
            }
        }
        if kind == ListKind::Circular {
            if let (Some(&last), Some(&first)) = (ids.last(), ids.first()) {
                arena.set_next(last, Some(first));
            }
        }
        arena.head = ids.first().copied();
        arena
    }

    /// Seed contents used by the demo scenarios: 1 -> 3 -> 5.
    pub fn sample(kind: ListKind) -> Self {
        ListArena::from_values(kind, &[1, 3, 5])
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn set_head(&mut self, head: Option<NodeId>) {
        self.head = head;
    }

    pub fn alloc(&mut self, value: i64) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            ListNode {
                value,
                next: None,
                prev: None,
            },
        );
        id
    }

    /// Drop a node from the arena. Links pointing at it become dangling and
    /// must be rewired by the caller before the next snapshot.
    pub fn remove(&mut self, id: NodeId) -> Option<ListNode> {
        self.nodes.remove(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&ListNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn value(&self, id: NodeId) -> i64 {
        self.nodes.get(&id).map(|n| n.value).unwrap_or(0)
    }

    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.next)
    }

    pub fn prev_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.prev)
    }

    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.next = next;
        }
    }

    pub fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.prev = prev;
        }
    }

    pub fn set_value(&mut self, id: NodeId, value: i64) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.value = value;
        }
    }

    /// Node ids in walk order from the head, following `next`, stopping on
    /// the first revisit. This is the canonical presentation order.
    pub fn iter_ids(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut seen = FxHashSet::default();
        let mut cursor = self.head;
        while let Some(id) = cursor {
            if !seen.insert(id) {
                break;
            }
            order.push(id);
            cursor = self.next_of(id);
        }
        order
    }

    /// Number of distinct nodes reachable from the head via `next`.
    pub fn len(&self) -> usize {
        self.iter_ids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        self.iter_ids().into_iter().nth(index)
    }

    /// First node holding `value`, with its walk index.
    pub fn find_value(&self, value: i64) -> Option<(usize, NodeId)> {
        self.iter_ids()
            .into_iter()
            .enumerate()
            .find(|&(_, id)| self.value(id) == value)
    }

    /// Last node of the walk: the node before the head for circular lists,
    /// the node with no `next` otherwise.
    pub fn tail(&self) -> Option<NodeId> {
        self.iter_ids().last().copied()
    }

    pub fn values(&self) -> Vec<i64> {
        self.iter_ids().into_iter().map(|id| self.value(id)).collect()
    }
}
