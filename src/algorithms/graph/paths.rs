//! Shortest-path algorithms: Dijkstra, Bellman-Ford, Floyd-Warshall, A*.
//!
//! Distances are `i64` with [`INF`] marking unreached vertices. Bellman-Ford
//! relaxes stored edges as directed arcs regardless of the graph's
//! undirected flag, so a negative undirected edge is not treated as a
//! two-vertex negative cycle.

use super::{split_parts, start_vertex, Params, INF};
use crate::structures::Graph;
use crate::trace::{ElementRef, EngineError, Trace, TraceBuilder};
use rustc_hash::FxHashMap;

fn start_goal<'a>(
    algorithm: &'static str,
    working: &Graph,
    params: &'a Params,
) -> Result<Result<(&'a str, &'a str), Trace>, EngineError> {
    let parts = split_parts(params);
    if parts.len() < 2 {
        return Ok(Err(TraceBuilder::rejection(
            algorithm,
            working,
            "Enter start,goal",
        )?));
    }
    let (start, goal) = (parts[0], parts[1]);
    if !working.has_vertex(start) || !working.has_vertex(goal) {
        return Ok(Err(TraceBuilder::rejection(
            algorithm,
            working,
            "Vertices not found.",
        )?));
    }
    Ok(Ok((start, goal)))
}

fn join_path(path: &[String]) -> String {
    path.join(" -> ")
}

pub(crate) fn dijkstra(working: Graph, params: &Params) -> Result<Trace, EngineError> {
    let (start, goal) = match start_goal("dijkstra", &working, params)? {
        Ok(pair) => pair,
        Err(trace) => return Ok(trace),
    };
    let mut b = TraceBuilder::new("dijkstra");
    let mut dist: FxHashMap<String, i64> = working
        .vertices()
        .iter()
        .map(|v| (v.id.clone(), INF))
        .collect();
    let mut prev: FxHashMap<String, String> = FxHashMap::default();
    dist.insert(start.to_string(), 0);
    // Scan-for-min queue; the stable sort keeps equal-distance entries in
    // insertion order, so runs are reproducible.
    let mut pq: Vec<(String, i64)> = vec![(start.to_string(), 0)];
    b.append(
        &working,
        vec![ElementRef::vertex(start)],
        0,
        format!("Dijkstra from {} to {}", start, goal),
    )?;
    while !pq.is_empty() {
        pq.sort_by_key(|(_, d)| *d);
        let (u, d) = pq.remove(0);
        b.append(
            &working,
            vec![ElementRef::vertex(&u)],
            1,
            format!("Extracted {}, dist={}", u, d),
        )?;
        if u == goal {
            break;
        }
        let du = dist[&u];
        for (to, w) in working.neighbors(&u) {
            let alt = du.saturating_add(w);
            if alt < dist[to] {
                dist.insert(to.to_string(), alt);
                prev.insert(to.to_string(), u.clone());
                pq.push((to.to_string(), alt));
                b.append(
                    &working,
                    vec![ElementRef::vertex(&u), ElementRef::vertex(to)],
                    2,
                    format!("Updated {}, dist={}", to, alt),
                )?;
            }
        }
    }
    let mut path = vec![goal.to_string()];
    while let Some(p) = prev.get(path.first().expect("path non-empty")) {
        path.insert(0, p.clone());
    }
    let highlight = path.iter().map(ElementRef::vertex).collect();
    b.append(&working, highlight, 3, format!("Path: {}", join_path(&path)))?;
    b.finish()
}

pub(crate) fn bellman_ford(working: Graph, params: &Params) -> Result<Trace, EngineError> {
    let start = match start_vertex("bellman-ford", &working, params)? {
        Ok(start) => start.to_string(),
        Err(trace) => return Ok(trace),
    };
    let mut b = TraceBuilder::new("bellman-ford");
    let mut dist: FxHashMap<String, i64> = working
        .vertices()
        .iter()
        .map(|v| (v.id.clone(), INF))
        .collect();
    dist.insert(start.clone(), 0);
    b.append(
        &working,
        vec![ElementRef::vertex(&start)],
        0,
        format!("Bellman-Ford from {}", start),
    )?;
    for _ in 0..working.vertices().len().saturating_sub(1) {
        for e in working.edges() {
            let du = dist[&e.u];
            if du != INF && du + e.weight < dist[&e.v] {
                dist.insert(e.v.clone(), du + e.weight);
                b.append(
                    &working,
                    vec![
                        ElementRef::vertex(&e.u),
                        ElementRef::vertex(&e.v),
                        ElementRef::edge(&e.u, &e.v),
                    ],
                    1,
                    format!("Relaxed {}-{}, dist[{}]={}", e.u, e.v, e.v, dist[&e.v]),
                )?;
            }
        }
    }
    let has_negative = working.edges().iter().any(|e| {
        let du = dist[&e.u];
        du != INF && du + e.weight < dist[&e.v]
    });
    let message = if has_negative {
        "Negative cycle detected"
    } else {
        "No negative cycle"
    };
    b.append(&working, vec![], 2, message)?;
    b.finish()
}

pub(crate) fn floyd_warshall(working: Graph) -> Result<Trace, EngineError> {
    let n = working.vertices().len();
    if n == 0 {
        return TraceBuilder::rejection("floyd-warshall", &working, "No vertices.");
    }
    let ids: Vec<String> = working.vertices().iter().map(|v| v.id.clone()).collect();
    let index: FxHashMap<&str, usize> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();
    let mut dist = vec![vec![INF; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0;
    }
    for e in working.edges() {
        let (i, j) = (index[e.u.as_str()], index[e.v.as_str()]);
        dist[i][j] = e.weight;
        if !working.directed() {
            dist[j][i] = e.weight;
        }
    }
    let mut b = TraceBuilder::new("floyd-warshall");
    b.append(&working, vec![], 0, "Floyd-Warshall all-pairs shortest paths")?;
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if dist[i][k] == INF || dist[k][j] == INF {
                    continue;
                }
                let via = dist[i][k] + dist[k][j];
                if via < dist[i][j] {
                    dist[i][j] = via;
                    b.append(
                        &working,
                        vec![
                            ElementRef::vertex(&ids[i]),
                            ElementRef::vertex(&ids[j]),
                            ElementRef::vertex(&ids[k]),
                        ],
                        1,
                        format!("Updated dist[{}][{}] via {}", ids[i], ids[j], ids[k]),
                    )?;
                }
            }
        }
    }
    b.finish()
}

pub(crate) fn a_star(working: Graph, params: &Params) -> Result<Trace, EngineError> {
    let (start, goal) = match start_goal("a-star", &working, params)? {
        Ok(pair) => pair,
        Err(trace) => return Ok(trace),
    };
    let mut b = TraceBuilder::new("a-star");
    let mut g_score: FxHashMap<String, i64> = working
        .vertices()
        .iter()
        .map(|v| (v.id.clone(), INF))
        .collect();
    let mut f_score: FxHashMap<String, f64> = working
        .vertices()
        .iter()
        .map(|v| (v.id.clone(), f64::INFINITY))
        .collect();
    let mut came_from: FxHashMap<String, String> = FxHashMap::default();
    g_score.insert(start.to_string(), 0);
    let h0 = working.distance(start, goal).unwrap_or(0.0);
    f_score.insert(start.to_string(), h0);
    let mut open: Vec<String> = vec![start.to_string()];
    b.append(
        &working,
        vec![ElementRef::vertex(start)],
        0,
        format!("A* from {} to {}", start, goal),
    )?;
    while !open.is_empty() {
        // First entry with minimal f; ties go to the earliest added.
        let mut best = 0;
        for (i, id) in open.iter().enumerate() {
            if f_score[id] < f_score[&open[best]] {
                best = i;
            }
        }
        let current = open.remove(best);
        if current == goal {
            let mut path = vec![current.clone()];
            while let Some(p) = came_from.get(path.first().expect("path non-empty")) {
                path.insert(0, p.clone());
            }
            let highlight = path.iter().map(ElementRef::vertex).collect();
            b.append(
                &working,
                highlight,
                1,
                format!("Path found: {}", join_path(&path)),
            )?;
            return b.finish();
        }
        b.append(
            &working,
            vec![ElementRef::vertex(&current)],
            2,
            format!("Exploring {}", current),
        )?;
        let gc = g_score[&current];
        for (to, w) in working.neighbors(&current) {
            let tentative = gc.saturating_add(w);
            if tentative < g_score[to] {
                came_from.insert(to.to_string(), current.clone());
                g_score.insert(to.to_string(), tentative);
                let h = working.distance(to, goal).unwrap_or(0.0);
                let f = tentative as f64 + h;
                f_score.insert(to.to_string(), f);
                if !open.iter().any(|o| o == to) {
                    open.push(to.to_string());
                }
                b.append(
                    &working,
                    vec![ElementRef::vertex(&current), ElementRef::vertex(to)],
                    3,
                    format!("Updated {}, f={:.2}", to, f),
                )?;
            }
        }
    }
    b.append(&working, vec![], 4, "No path found")?;
    b.finish()
}
