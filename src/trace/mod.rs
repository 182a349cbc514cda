//! Frame and trace primitives
//!
//! Every algorithm run is recorded as a [`Trace`]: an ordered, non-empty
//! sequence of immutable [`Frame`]s. A frame pairs a deep snapshot of the
//! working structure with the elements to highlight, the active pseudocode
//! line, and a human-readable message.
//!
//! Traces are append-only while a [`TraceBuilder`] is alive and frozen once
//! [`TraceBuilder::finish`] consumes it. Playback never mutates a trace.

use crate::snapshot::{Capture, StructureValue};
use std::fmt;

/// Stable identity of a list or tree node, assigned once at node creation.
///
/// Ids survive structural mutation: a node keeps its id while pointers around
/// it are rewired, so a highlight recorded in one frame refers to the same
/// conceptual node in every other frame of the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Reference to an element of a snapshot, used for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementRef {
    /// Index into an array, stack, queue slot vector, or string.
    Index(usize),
    /// List or tree node by stable id.
    Node(NodeId),
    /// Graph vertex by id.
    Vertex(String),
    /// Graph edge by endpoint ids, in the order the edge was stored.
    Edge(String, String),
}

impl ElementRef {
    pub fn vertex(id: impl Into<String>) -> Self {
        ElementRef::Vertex(id.into())
    }

    pub fn edge(u: impl Into<String>, v: impl Into<String>) -> Self {
        ElementRef::Edge(u.into(), v.into())
    }
}

/// One step of an algorithm run.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Deep copy of the working structure at this step.
    pub snapshot: StructureValue,
    /// Elements to emphasize. May be empty; may reference elements that do
    /// not exist in this snapshot (presentation treats those as no-ops).
    pub highlight: Vec<ElementRef>,
    /// Index into the algorithm's pseudocode table, or -1 for none.
    pub pseudocode_line: i32,
    pub message: String,
}

/// A finished, read-only recording of an algorithm run. Always non-empty.
#[derive(Debug, Clone)]
pub struct Trace {
    frames: Vec<Frame>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn first(&self) -> &Frame {
        &self.frames[0]
    }

    pub fn last(&self) -> &Frame {
        &self.frames[self.frames.len() - 1]
    }
}

/// Accumulates frames for one algorithm run.
///
/// [`TraceBuilder::finish`] consumes the builder, so appending to a finished
/// trace is not representable. Finishing with zero frames is an engine
/// invariant violation ([`EngineError::EmptyTrace`]): every algorithm must
/// emit at least one frame, including rejected preconditions.
#[derive(Debug)]
pub struct TraceBuilder {
    algorithm: &'static str,
    frames: Vec<Frame>,
}

impl TraceBuilder {
    pub fn new(algorithm: &'static str) -> Self {
        TraceBuilder {
            algorithm,
            frames: Vec::new(),
        }
    }

    /// Snapshot `working` and append a frame. The caller owns the live
    /// structure; the frame stores an isolated deep copy.
    pub fn append<S: Capture + ?Sized>(
        &mut self,
        working: &S,
        highlight: Vec<ElementRef>,
        pseudocode_line: i32,
        message: impl Into<String>,
    ) -> Result<(), EngineError> {
        let snapshot = working.capture()?;
        self.frames.push(Frame {
            snapshot,
            highlight,
            pseudocode_line,
            message: message.into(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn finish(self) -> Result<Trace, EngineError> {
        if self.frames.is_empty() {
            return Err(EngineError::EmptyTrace {
                algorithm: self.algorithm,
            });
        }
        Ok(Trace {
            frames: self.frames,
        })
    }

    /// Build a one-frame trace explaining a rejected precondition or a
    /// structural failure (empty pop, full push, bad index). The working
    /// structure is untouched; the single frame carries no highlight and no
    /// pseudocode line.
    pub fn rejection<S: Capture + ?Sized>(
        algorithm: &'static str,
        working: &S,
        message: impl Into<String>,
    ) -> Result<Trace, EngineError> {
        let mut builder = TraceBuilder::new(algorithm);
        builder.append(working, Vec::new(), -1, message)?;
        builder.finish()
    }
}

/// Fatal engine invariant violations.
///
/// These indicate a bug in the caller or in the engine itself, never bad user
/// input. Bad input (non-numeric parameters, missing vertices, unsorted
/// arrays) produces a one-frame rejection trace instead.
#[derive(Debug, Clone)]
pub enum EngineError {
    /// An algorithm was dispatched against the wrong structure family.
    StructureMismatch {
        algorithm: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// A snapshot walk followed a pointer to a node absent from its arena.
    DanglingNode { id: NodeId },

    /// A trace builder finished without appending any frame.
    EmptyTrace { algorithm: &'static str },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::StructureMismatch {
                algorithm,
                expected,
                got,
            } => {
                write!(
                    f,
                    "algorithm '{}' expects a {} structure, got {}",
                    algorithm, expected, got
                )
            }
            EngineError::DanglingNode { id } => {
                write!(f, "snapshot found dangling node reference {}", id)
            }
            EngineError::EmptyTrace { algorithm } => {
                write!(f, "algorithm '{}' produced an empty trace", algorithm)
            }
        }
    }
}

impl std::error::Error for EngineError {}
