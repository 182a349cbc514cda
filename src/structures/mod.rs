//! Working data structures
//!
//! These are the live, mutable structures algorithms operate on. Pointer
//! structures (lists, trees) are arenas of id-tagged nodes: links are
//! [`NodeId`](crate::trace::NodeId)s rather than owned boxes, which keeps
//! node identity stable across rewiring and makes cycles representable.
//!
//! Frames never store these types directly; the snapshot codec converts them
//! to value-semantics [`StructureValue`](crate::snapshot::StructureValue)s.

pub mod graph;
pub mod list;
pub mod queue;
pub mod stack;
pub mod tree;

pub use graph::{Edge, Graph, Vertex};
pub use list::{ListArena, ListKind, ListNode};
pub use queue::{Queue, QueueEntry, QueueKind};
pub use stack::Stack;
pub use tree::{TreeArena, TreeNode};

/// Capacity of the bounded array structure.
pub const ARRAY_CAPACITY: usize = 20;

/// Maximum length of the working string.
pub const TEXT_CAPACITY: usize = 20;

/// A live structure an algorithm can be dispatched against.
#[derive(Debug, Clone)]
pub enum Structure {
    Array(Vec<i64>),
    Stack(Stack),
    Queue(Queue),
    List(ListArena),
    Tree(TreeArena),
    Graph(Graph),
    Text(String),
}

impl Structure {
    pub fn kind(&self) -> &'static str {
        match self {
            Structure::Array(_) => "array",
            Structure::Stack(_) => "stack",
            Structure::Queue(_) => "queue",
            Structure::List(_) => "list",
            Structure::Tree(_) => "tree",
            Structure::Graph(_) => "graph",
            Structure::Text(_) => "string",
        }
    }
}
