//! Snapshot codec
//!
//! Converts live working structures into immutable, value-semantics
//! [`StructureValue`]s for storage in frames. The codec is the only place
//! that walks pointer structures for copying, and it is cycle-safe: walks
//! carry a visited set keyed on stable node ids, so a circular list copies
//! in one pass and the copy's back-pointer resolves inside the copy itself.
//!
//! Mutating the live structure after a capture never changes any frame.

use crate::structures::{
    Graph, ListArena, ListKind, Queue, QueueEntry, QueueKind, Stack, TreeArena,
};
use crate::trace::{EngineError, NodeId};
use rustc_hash::FxHashSet;

/// Deep, isolated copy of a working structure at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub enum StructureValue {
    Array(Vec<i64>),
    /// Top of the stack at index 0.
    Stack(Vec<String>),
    Queue(QueueValue),
    Text(String),
    List(ListValue),
    Tree(TreeValue),
    Graph(GraphValue),
}

impl StructureValue {
    pub fn kind(&self) -> &'static str {
        match self {
            StructureValue::Array(_) => "array",
            StructureValue::Stack(_) => "stack",
            StructureValue::Queue(_) => "queue",
            StructureValue::Text(_) => "string",
            StructureValue::List(_) => "list",
            StructureValue::Tree(_) => "tree",
            StructureValue::Graph(_) => "graph",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueueValue {
    pub kind: QueueKind,
    pub slots: Vec<Option<QueueEntry>>,
    pub front: usize,
    pub rear: usize,
}

/// Copied list: node records keyed by id, in walk order from the head.
/// Links are ids, so shared topology (including cycles) survives the copy.
#[derive(Debug, Clone, PartialEq)]
pub struct ListValue {
    pub kind: ListKind,
    pub head: Option<NodeId>,
    pub nodes: Vec<ListNodeValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListNodeValue {
    pub id: NodeId,
    pub value: i64,
    pub next: Option<NodeId>,
    pub prev: Option<NodeId>,
}

impl ListValue {
    pub fn node(&self, id: NodeId) -> Option<&ListNodeValue> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Values in presentation order: follow `next` from the head, stop on
    /// the first revisit.
    pub fn values(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut seen = FxHashSet::default();
        let mut cursor = self.head;
        while let Some(id) = cursor {
            if !seen.insert(id) {
                break;
            }
            let Some(node) = self.node(id) else { break };
            out.push(node.value);
            cursor = node.next;
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeValue {
    pub root: Option<NodeId>,
    /// Preorder from the root.
    pub nodes: Vec<TreeNodeValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNodeValue {
    pub id: NodeId,
    pub value: i64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl TreeValue {
    pub fn node(&self, id: NodeId) -> Option<&TreeNodeValue> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn inorder_values(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.inorder_walk(self.root, &mut out);
        out
    }

    fn inorder_walk(&self, id: Option<NodeId>, out: &mut Vec<i64>) {
        let Some(node) = id.and_then(|id| self.node(id)) else {
            return;
        };
        self.inorder_walk(node.left, out);
        out.push(node.value);
        self.inorder_walk(node.right, out);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphValue {
    pub directed: bool,
    pub vertices: Vec<VertexValue>,
    pub edges: Vec<EdgeValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VertexValue {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeValue {
    pub u: String,
    pub v: String,
    pub weight: i64,
}

impl GraphValue {
    /// Adjacency view derived on demand for presentation; never stored.
    pub fn adjacency(&self) -> Vec<(String, Vec<(String, i64)>)> {
        self.vertices
            .iter()
            .map(|v| {
                let mut neigh = Vec::new();
                for e in &self.edges {
                    if e.u == v.id {
                        neigh.push((e.v.clone(), e.weight));
                    } else if !self.directed && e.v == v.id {
                        neigh.push((e.u.clone(), e.weight));
                    }
                }
                (v.id.clone(), neigh)
            })
            .collect()
    }
}

/// Conversion of a live structure into a [`StructureValue`].
pub trait Capture {
    fn capture(&self) -> Result<StructureValue, EngineError>;
}

impl Capture for Vec<i64> {
    fn capture(&self) -> Result<StructureValue, EngineError> {
        Ok(StructureValue::Array(self.clone()))
    }
}

impl Capture for [i64] {
    fn capture(&self) -> Result<StructureValue, EngineError> {
        Ok(StructureValue::Array(self.to_vec()))
    }
}

impl Capture for String {
    fn capture(&self) -> Result<StructureValue, EngineError> {
        Ok(StructureValue::Text(self.clone()))
    }
}

impl Capture for str {
    fn capture(&self) -> Result<StructureValue, EngineError> {
        Ok(StructureValue::Text(self.to_string()))
    }
}

impl Capture for Stack {
    fn capture(&self) -> Result<StructureValue, EngineError> {
        Ok(StructureValue::Stack(self.items().to_vec()))
    }
}

/// Scratch stacks used by the stack use-case algorithms capture the same way
/// as the bounded structure: top at index 0.
impl Capture for Vec<String> {
    fn capture(&self) -> Result<StructureValue, EngineError> {
        Ok(StructureValue::Stack(self.clone()))
    }
}

impl Capture for Queue {
    fn capture(&self) -> Result<StructureValue, EngineError> {
        Ok(StructureValue::Queue(QueueValue {
            kind: self.kind(),
            slots: self.slots().to_vec(),
            front: self.front(),
            rear: self.rear(),
        }))
    }
}

impl Capture for ListArena {
    /// Copy every node reachable from the head via `next` or `prev`.
    /// The visited set makes circular and looped lists terminate; ids carry
    /// over unchanged, so the copy preserves sharing exactly.
    fn capture(&self) -> Result<StructureValue, EngineError> {
        let mut nodes = Vec::new();
        let mut seen = FxHashSet::default();
        let mut pending = Vec::new();
        if let Some(head) = self.head() {
            pending.push(head);
        }
        while let Some(id) = pending.pop() {
            if !seen.insert(id) {
                continue;
            }
            let node = self.get(id).ok_or(EngineError::DanglingNode { id })?;
            if let Some(next) = node.next {
                if !self.contains(next) {
                    return Err(EngineError::DanglingNode { id: next });
                }
                pending.push(next);
            }
            if let Some(prev) = node.prev {
                if !self.contains(prev) {
                    return Err(EngineError::DanglingNode { id: prev });
                }
                pending.push(prev);
            }
            nodes.push(ListNodeValue {
                id,
                value: node.value,
                next: node.next,
                prev: node.prev,
            });
        }
        Ok(StructureValue::List(ListValue {
            kind: self.kind(),
            head: self.head(),
            nodes,
        }))
    }
}

impl Capture for TreeArena {
    fn capture(&self) -> Result<StructureValue, EngineError> {
        let mut nodes = Vec::new();
        capture_subtree(self, self.root(), &mut nodes)?;
        Ok(StructureValue::Tree(TreeValue {
            root: self.root(),
            nodes,
        }))
    }
}

fn capture_subtree(
    arena: &TreeArena,
    id: Option<NodeId>,
    out: &mut Vec<TreeNodeValue>,
) -> Result<(), EngineError> {
    let Some(id) = id else { return Ok(()) };
    let node = arena.get(id).ok_or(EngineError::DanglingNode { id })?;
    out.push(TreeNodeValue {
        id,
        value: node.value,
        left: node.left,
        right: node.right,
    });
    capture_subtree(arena, node.left, out)?;
    capture_subtree(arena, node.right, out)
}

impl Capture for Graph {
    fn capture(&self) -> Result<StructureValue, EngineError> {
        Ok(StructureValue::Graph(GraphValue {
            directed: self.directed(),
            vertices: self
                .vertices()
                .iter()
                .map(|v| VertexValue {
                    id: v.id.clone(),
                    x: v.x,
                    y: v.y,
                })
                .collect(),
            edges: self
                .edges()
                .iter()
                .map(|e| EdgeValue {
                    u: e.u.clone(),
                    v: e.v.clone(),
                    weight: e.weight,
                })
                .collect(),
        }))
    }
}
