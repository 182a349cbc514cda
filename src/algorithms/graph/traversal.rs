//! Breadth-first and depth-first traversal.

use super::{start_vertex, Params};
use crate::structures::Graph;
use crate::trace::{ElementRef, EngineError, Trace, TraceBuilder};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

pub(crate) fn bfs(working: Graph, params: &Params) -> Result<Trace, EngineError> {
    let start = match start_vertex("bfs", &working, params)? {
        Ok(start) => start.to_string(),
        Err(trace) => return Ok(trace),
    };
    let mut b = TraceBuilder::new("bfs");
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::from([start.clone()]);
    visited.insert(start.clone());
    b.append(
        &working,
        vec![ElementRef::vertex(&start)],
        0,
        format!("BFS from {}", start),
    )?;
    while let Some(u) = queue.pop_front() {
        b.append(
            &working,
            vec![ElementRef::vertex(&u)],
            1,
            format!("Dequeued {}", u),
        )?;
        for (to, _) in working.neighbors(&u) {
            if visited.insert(to.to_string()) {
                queue.push_back(to.to_string());
                b.append(
                    &working,
                    vec![ElementRef::vertex(&u), ElementRef::vertex(to)],
                    2,
                    format!("Enqueued {}", to),
                )?;
            }
        }
    }
    b.finish()
}

pub(crate) fn dfs(working: Graph, params: &Params) -> Result<Trace, EngineError> {
    let start = match start_vertex("dfs", &working, params)? {
        Ok(start) => start.to_string(),
        Err(trace) => return Ok(trace),
    };
    let mut b = TraceBuilder::new("dfs");
    let mut visited = FxHashSet::default();
    let mut stack = vec![start.clone()];
    visited.insert(start.clone());
    b.append(
        &working,
        vec![ElementRef::vertex(&start)],
        0,
        format!("DFS from {}", start),
    )?;
    // Iterative DFS; neighbors are marked visited when pushed, so each
    // vertex is popped exactly once.
    while let Some(u) = stack.pop() {
        b.append(
            &working,
            vec![ElementRef::vertex(&u)],
            1,
            format!("Popped {}", u),
        )?;
        for (to, _) in working.neighbors(&u) {
            if visited.insert(to.to_string()) {
                stack.push(to.to_string());
                b.append(
                    &working,
                    vec![ElementRef::vertex(&u), ElementRef::vertex(to)],
                    2,
                    format!("Pushed {}", to),
                )?;
            }
        }
    }
    b.finish()
}
