//! Structural analyses: topological sort, cycle detection, strongly
//! connected components, bipartiteness.

use crate::structures::Graph;
use crate::trace::{ElementRef, EngineError, Trace, TraceBuilder};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

pub(crate) fn topological_sort(working: Graph) -> Result<Trace, EngineError> {
    if !working.directed() {
        return TraceBuilder::rejection(
            "topological-sort",
            &working,
            "Graph must be directed.",
        );
    }
    let mut indegree: FxHashMap<&str, usize> = working
        .vertices()
        .iter()
        .map(|v| (v.id.as_str(), 0))
        .collect();
    for e in working.edges() {
        if let Some(d) = indegree.get_mut(e.v.as_str()) {
            *d += 1;
        }
    }
    let mut queue: VecDeque<&str> = working
        .vertices()
        .iter()
        .filter(|v| indegree[v.id.as_str()] == 0)
        .map(|v| v.id.as_str())
        .collect();
    let mut order: Vec<&str> = Vec::new();
    let mut b = TraceBuilder::new("topological-sort");
    b.append(
        &working,
        queue.iter().copied().map(ElementRef::vertex).collect(),
        0,
        "Topological Sort",
    )?;
    while let Some(u) = queue.pop_front() {
        order.push(u);
        b.append(
            &working,
            vec![ElementRef::vertex(u)],
            1,
            format!("Processed {}", u),
        )?;
        for (to, _) in working.neighbors(u) {
            let d = indegree.get_mut(to).expect("neighbor is a vertex");
            *d -= 1;
            if *d == 0 {
                queue.push_back(to);
                b.append(
                    &working,
                    vec![ElementRef::vertex(u), ElementRef::vertex(to)],
                    2,
                    format!("Enqueued {}", to),
                )?;
            }
        }
    }
    let message = if order.len() != working.vertices().len() {
        "Cycle detected".to_string()
    } else {
        format!("Order: {}", order.join(" -> "))
    };
    b.append(&working, vec![], 3, message)?;
    b.finish()
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

pub(crate) fn cycle_detection(working: Graph) -> Result<Trace, EngineError> {
    if working.vertices().is_empty() {
        return TraceBuilder::rejection("cycle-detection", &working, "No vertices.");
    }
    let mut b = TraceBuilder::new("cycle-detection");
    let mut color: FxHashMap<String, Color> = working
        .vertices()
        .iter()
        .map(|v| (v.id.clone(), Color::White))
        .collect();
    fn visit(
        working: &Graph,
        b: &mut TraceBuilder,
        color: &mut FxHashMap<String, Color>,
        u: &str,
    ) -> Result<bool, EngineError> {
        color.insert(u.to_string(), Color::Gray);
        b.append(
            working,
            vec![ElementRef::vertex(u)],
            1,
            format!("Visiting {}", u),
        )?;
        for (to, _) in working.neighbors(u) {
            match color[to] {
                Color::White => {
                    if visit(working, b, color, to)? {
                        return Ok(true);
                    }
                }
                Color::Gray => {
                    b.append(
                        working,
                        vec![
                            ElementRef::vertex(u),
                            ElementRef::vertex(to),
                            ElementRef::edge(u, to),
                        ],
                        2,
                        "Back edge found",
                    )?;
                    return Ok(true);
                }
                Color::Black => {}
            }
        }
        color.insert(u.to_string(), Color::Black);
        Ok(false)
    }
    let ids: Vec<String> = working.vertices().iter().map(|v| v.id.clone()).collect();
    let mut has_cycle = false;
    for id in &ids {
        if color[id] == Color::White && visit(&working, &mut b, &mut color, id)? {
            has_cycle = true;
            break;
        }
    }
    let message = if has_cycle { "Cycle detected" } else { "No cycle" };
    b.append(&working, vec![], 0, message)?;
    b.finish()
}

// Kosaraju: DFS for finishing order, then DFS over reversed arcs.
pub(crate) fn scc(working: Graph) -> Result<Trace, EngineError> {
    if !working.directed() {
        return TraceBuilder::rejection("scc", &working, "Graph must be directed.");
    }
    if working.vertices().is_empty() {
        return TraceBuilder::rejection("scc", &working, "No vertices.");
    }
    let ids: Vec<String> = working.vertices().iter().map(|v| v.id.clone()).collect();
    let mut visited: FxHashMap<&str, bool> = ids.iter().map(|id| (id.as_str(), false)).collect();
    let mut finish_stack: Vec<&str> = Vec::new();
    fn order<'a>(
        working: &'a Graph,
        visited: &mut FxHashMap<&'a str, bool>,
        stack: &mut Vec<&'a str>,
        u: &'a str,
    ) {
        visited.insert(u, true);
        for (to, _) in working.neighbors(u) {
            if !visited[to] {
                order(working, visited, stack, to);
            }
        }
        stack.push(u);
    }
    for id in &ids {
        if !visited[id.as_str()] {
            order(&working, &mut visited, &mut finish_stack, id);
        }
    }
    let mut transpose: FxHashMap<&str, Vec<&str>> =
        ids.iter().map(|id| (id.as_str(), Vec::new())).collect();
    for e in working.edges() {
        transpose
            .get_mut(e.v.as_str())
            .expect("edge endpoints are vertices")
            .push(e.u.as_str());
    }
    fn collect<'a>(
        transpose: &FxHashMap<&'a str, Vec<&'a str>>,
        visited: &mut FxHashMap<&'a str, bool>,
        component: &mut Vec<&'a str>,
        u: &'a str,
    ) {
        visited.insert(u, true);
        component.push(u);
        for &to in &transpose[u] {
            if !visited[to] {
                collect(transpose, visited, component, to);
            }
        }
    }
    for v in visited.values_mut() {
        *v = false;
    }
    let mut b = TraceBuilder::new("scc");
    while let Some(u) = finish_stack.pop() {
        if visited[u] {
            continue;
        }
        let mut component = Vec::new();
        collect(&transpose, &mut visited, &mut component, u);
        b.append(
            &working,
            component.iter().copied().map(ElementRef::vertex).collect(),
            3,
            format!("SCC: {}", component.join(", ")),
        )?;
    }
    b.finish()
}

pub(crate) fn bipartite(working: Graph) -> Result<Trace, EngineError> {
    if working.vertices().is_empty() {
        return TraceBuilder::rejection("bipartite", &working, "No vertices.");
    }
    let mut b = TraceBuilder::new("bipartite");
    let mut color: FxHashMap<String, i32> = working
        .vertices()
        .iter()
        .map(|v| (v.id.clone(), -1))
        .collect();
    let ids: Vec<String> = working.vertices().iter().map(|v| v.id.clone()).collect();
    let mut ok = true;
    'components: for id in &ids {
        if color[id] != -1 {
            continue;
        }
        color.insert(id.clone(), 0);
        b.append(
            &working,
            vec![ElementRef::vertex(id)],
            1,
            format!("Colored {} as 0", id),
        )?;
        let mut queue = VecDeque::from([id.clone()]);
        while let Some(u) = queue.pop_front() {
            let cu = color[&u];
            for (to, _) in working.neighbors(&u) {
                if color[to] == -1 {
                    color.insert(to.to_string(), 1 - cu);
                    queue.push_back(to.to_string());
                    b.append(
                        &working,
                        vec![ElementRef::vertex(&u), ElementRef::vertex(to)],
                        2,
                        format!("Colored {} as {}", to, 1 - cu),
                    )?;
                } else if color[to] == cu {
                    b.append(
                        &working,
                        vec![
                            ElementRef::vertex(&u),
                            ElementRef::vertex(to),
                            ElementRef::edge(&u, to),
                        ],
                        3,
                        "Same color conflict",
                    )?;
                    ok = false;
                    break 'components;
                }
            }
        }
    }
    let message = if ok { "Bipartite" } else { "Not bipartite" };
    b.append(&working, vec![], 0, message)?;
    b.finish()
}
