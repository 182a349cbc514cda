//! # Introduction
//!
//! algotty runs classic data-structure operations and algorithms while
//! recording a frame before, during, and after every visible step. The frame
//! history is then navigated forward and backward through a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Recording pipeline
//!
//! ```text
//! Structure → Algorithm → TraceBuilder → Trace → PlaybackController → TUI
//! ```
//!
//! 1. [`structures`] — live working structures: arrays, stacks, bounded
//!    queues, pointer-based linked lists and binary search trees backed by
//!    id arenas, and weighted graphs.
//! 2. [`algorithms`] — one pure function per operation; each run clones its
//!    input and appends frames to a [`trace::TraceBuilder`].
//! 3. [`snapshot`] — the cycle-safe codec that deep-copies a working
//!    structure into the immutable [`snapshot::StructureValue`] stored in
//!    each frame.
//! 4. [`trace`] — frame and trace types plus the engine error taxonomy.
//!    A finished [`trace::Trace`] is read-only and never empty.
//! 5. [`playback`] — cursor over a finished trace with play, pause, step,
//!    and jump.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Covered operations
//!
//! Sorting and searching over arrays; stack and queue disciplines including
//! expression evaluation; linked-list surgery on singly, doubly, and
//! circular lists including Floyd cycle detection and removal; binary
//! search tree insert, delete, and traversals; BFS, DFS, Dijkstra,
//! Bellman-Ford, Floyd-Warshall, A*, Prim, Kruskal, topological sort,
//! cycle detection, SCC, and bipartiteness over graphs; string scanning,
//! matching, and encoding.

pub mod algorithms;
pub mod playback;
pub mod snapshot;
pub mod structures;
pub mod trace;
pub mod ui;
