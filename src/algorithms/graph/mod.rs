//! Graph operations: structural edits plus the algorithm families, split by
//! concern (`traversal`, `paths`, `mst`, `ordering`).
//!
//! Parameter conventions follow the edit syntax: `value` holds a vertex id,
//! `u,v` pair, or `u,v,weight` triple depending on the operation. Algorithms
//! that need a start vertex read it from `value`; start/goal pairs are
//! comma-separated.

mod mst;
mod ordering;
mod paths;
mod traversal;

use super::{AlgorithmId, Params};
use crate::structures::Graph;
use crate::trace::{ElementRef, EngineError, Trace, TraceBuilder};

/// Distance sentinel for unreached vertices.
pub(crate) const INF: i64 = i64::MAX;

pub(crate) fn run(
    kind: AlgorithmId,
    working: Graph,
    params: &Params,
) -> Result<Trace, EngineError> {
    match kind {
        AlgorithmId::AddVertex => add_vertex(working, params),
        AlgorithmId::RemoveVertex => remove_vertex(working, params),
        AlgorithmId::AddEdge => add_edge(working, params),
        AlgorithmId::RemoveEdge => remove_edge(working, params),
        AlgorithmId::Bfs => traversal::bfs(working, params),
        AlgorithmId::Dfs => traversal::dfs(working, params),
        AlgorithmId::Dijkstra => paths::dijkstra(working, params),
        AlgorithmId::BellmanFord => paths::bellman_ford(working, params),
        AlgorithmId::FloydWarshall => paths::floyd_warshall(working),
        AlgorithmId::AStar => paths::a_star(working, params),
        AlgorithmId::Prim => mst::prim(working),
        AlgorithmId::Kruskal => mst::kruskal(working),
        AlgorithmId::TopologicalSort => ordering::topological_sort(working),
        AlgorithmId::CycleDetection => ordering::cycle_detection(working),
        AlgorithmId::Scc => ordering::scc(working),
        AlgorithmId::Bipartite => ordering::bipartite(working),
        _ => unreachable!("non-graph algorithm routed to graph module"),
    }
}

/// Split `value` into trimmed comma-separated parts.
pub(crate) fn split_parts(params: &Params) -> Vec<&str> {
    params
        .value
        .as_deref()
        .map(|s| s.split(',').map(str::trim).collect())
        .unwrap_or_default()
}

/// Single vertex id from `value`, checked against the graph.
pub(crate) fn start_vertex<'a>(
    algorithm: &'static str,
    working: &Graph,
    params: &'a Params,
) -> Result<Result<&'a str, Trace>, EngineError> {
    let start = params.value.as_deref().map(str::trim).unwrap_or("");
    if start.is_empty() {
        return Ok(Err(TraceBuilder::rejection(
            algorithm,
            working,
            "Enter start vertex.",
        )?));
    }
    if !working.has_vertex(start) {
        return Ok(Err(TraceBuilder::rejection(
            algorithm,
            working,
            "Start vertex not found.",
        )?));
    }
    Ok(Ok(start))
}

fn add_vertex(mut working: Graph, params: &Params) -> Result<Trace, EngineError> {
    let id = params.value.as_deref().map(str::trim).unwrap_or("");
    if id.is_empty() {
        return TraceBuilder::rejection("add-vertex", &working, "Enter vertex id.");
    }
    if working.has_vertex(id) {
        return TraceBuilder::rejection("add-vertex", &working, "Vertex already exists.");
    }
    working.add_vertex(id);
    let mut b = TraceBuilder::new("add-vertex");
    b.append(
        &working,
        vec![ElementRef::vertex(id)],
        0,
        format!("Added vertex {}", id),
    )?;
    b.finish()
}

fn remove_vertex(mut working: Graph, params: &Params) -> Result<Trace, EngineError> {
    let id = params.value.as_deref().map(str::trim).unwrap_or("");
    if id.is_empty() {
        return TraceBuilder::rejection("remove-vertex", &working, "Enter vertex id.");
    }
    if !working.remove_vertex(id) {
        return TraceBuilder::rejection("remove-vertex", &working, "Vertex not found.");
    }
    let mut b = TraceBuilder::new("remove-vertex");
    b.append(&working, vec![], 0, format!("Removed vertex {}", id))?;
    b.finish()
}

fn add_edge(mut working: Graph, params: &Params) -> Result<Trace, EngineError> {
    let parts = split_parts(params);
    if parts.len() < 2 {
        return TraceBuilder::rejection("add-edge", &working, "Enter u,v[,weight]");
    }
    let (u, v) = (parts[0], parts[1]);
    let weight = parts
        .get(2)
        .and_then(|w| w.parse::<i64>().ok())
        .unwrap_or(1);
    if !working.has_vertex(u) || !working.has_vertex(v) {
        return TraceBuilder::rejection("add-edge", &working, "Vertices not found.");
    }
    if working.has_edge(u, v) {
        return TraceBuilder::rejection("add-edge", &working, "Edge already exists.");
    }
    working.add_edge(u, v, weight);
    let mut b = TraceBuilder::new("add-edge");
    b.append(
        &working,
        vec![ElementRef::edge(u, v)],
        0,
        format!("Added edge {}-{}", u, v),
    )?;
    b.finish()
}

fn remove_edge(mut working: Graph, params: &Params) -> Result<Trace, EngineError> {
    let parts = split_parts(params);
    if parts.len() < 2 {
        return TraceBuilder::rejection("remove-edge", &working, "Enter u,v");
    }
    let (u, v) = (parts[0], parts[1]);
    if !working.remove_edge(u, v) {
        return TraceBuilder::rejection("remove-edge", &working, "Edge not found.");
    }
    let mut b = TraceBuilder::new("remove-edge");
    b.append(&working, vec![], 0, format!("Removed edge {}-{}", u, v))?;
    b.finish()
}
