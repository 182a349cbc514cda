//! Minimum spanning tree: Prim and Kruskal.

use super::INF;
use crate::structures::Graph;
use crate::trace::{ElementRef, EngineError, Trace, TraceBuilder};
use rustc_hash::FxHashMap;

pub(crate) fn prim(working: Graph) -> Result<Trace, EngineError> {
    if working.vertices().is_empty() {
        return TraceBuilder::rejection("prim", &working, "No vertices.");
    }
    let ids: Vec<String> = working.vertices().iter().map(|v| v.id.clone()).collect();
    let mut key: FxHashMap<String, i64> = ids.iter().map(|id| (id.clone(), INF)).collect();
    let mut parent: FxHashMap<String, String> = FxHashMap::default();
    let mut in_mst: FxHashMap<String, bool> = ids.iter().map(|id| (id.clone(), false)).collect();
    key.insert(ids[0].clone(), 0);
    let mut b = TraceBuilder::new("prim");
    b.append(
        &working,
        vec![ElementRef::vertex(&ids[0])],
        0,
        "Prim's MST",
    )?;
    for _ in 0..ids.len().saturating_sub(1) {
        // Min key among vertices not yet in the tree, ties by insertion
        // order. A disconnected graph leaves INF keys; those vertices join
        // without a parent edge.
        let u = ids
            .iter()
            .filter(|id| !in_mst[id.as_str()])
            .min_by_key(|id| key[id.as_str()])
            .expect("loop runs while vertices remain")
            .clone();
        in_mst.insert(u.clone(), true);
        b.append(
            &working,
            vec![ElementRef::vertex(&u)],
            1,
            format!("Added {} to MST", u),
        )?;
        for (to, w) in working.neighbors(&u) {
            if !in_mst[to] && w < key[to] {
                parent.insert(to.to_string(), u.clone());
                key.insert(to.to_string(), w);
                b.append(
                    &working,
                    vec![
                        ElementRef::vertex(&u),
                        ElementRef::vertex(to),
                        ElementRef::edge(&u, to),
                    ],
                    2,
                    format!("Updated key for {}", to),
                )?;
            }
        }
    }
    let mst: Vec<ElementRef> = ids
        .iter()
        .filter_map(|v| parent.get(v).map(|p| ElementRef::edge(p, v)))
        .collect();
    b.append(&working, mst, 3, "MST complete")?;
    b.finish()
}

struct UnionFind {
    parent: FxHashMap<String, String>,
}

impl UnionFind {
    fn new(ids: impl Iterator<Item = String>) -> Self {
        UnionFind {
            parent: ids.map(|id| (id.clone(), id)).collect(),
        }
    }

    fn find(&self, x: &str) -> String {
        let p = &self.parent[x];
        if p == x {
            p.clone()
        } else {
            self.find(p)
        }
    }

    fn union(&mut self, x: &str, y: &str) {
        let px = self.find(x);
        let py = self.find(y);
        self.parent.insert(px, py);
    }
}

pub(crate) fn kruskal(working: Graph) -> Result<Trace, EngineError> {
    if working.vertices().is_empty() {
        return TraceBuilder::rejection("kruskal", &working, "No vertices.");
    }
    let mut sorted = working.edges().to_vec();
    sorted.sort_by_key(|e| e.weight);
    let mut uf = UnionFind::new(working.vertices().iter().map(|v| v.id.clone()));
    let mut mst = Vec::new();
    let mut b = TraceBuilder::new("kruskal");
    b.append(&working, vec![], 0, "Kruskal's MST")?;
    for e in &sorted {
        b.append(
            &working,
            vec![ElementRef::edge(&e.u, &e.v)],
            2,
            format!("Considering edge {}-{} ({})", e.u, e.v, e.weight),
        )?;
        if uf.find(&e.u) != uf.find(&e.v) {
            uf.union(&e.u, &e.v);
            mst.push(ElementRef::edge(&e.u, &e.v));
            b.append(
                &working,
                vec![
                    ElementRef::vertex(&e.u),
                    ElementRef::vertex(&e.v),
                    ElementRef::edge(&e.u, &e.v),
                ],
                4,
                format!("Added edge {}-{}", e.u, e.v),
            )?;
        }
    }
    b.append(&working, mst, 2, "MST complete")?;
    b.finish()
}

#[cfg(test)]
mod tests {
    use super::UnionFind;

    fn uf(ids: &[&str]) -> UnionFind {
        UnionFind::new(ids.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_singletons_are_their_own_roots() {
        let uf = uf(&["A", "B"]);
        assert_eq!(uf.find("A"), "A");
        assert_ne!(uf.find("A"), uf.find("B"));
    }

    #[test]
    fn test_union_merges_components() {
        let mut uf = uf(&["A", "B", "C"]);
        uf.union("A", "B");
        assert_eq!(uf.find("A"), uf.find("B"));
        assert_ne!(uf.find("A"), uf.find("C"));
        uf.union("B", "C");
        assert_eq!(uf.find("A"), uf.find("C"));
    }

    #[test]
    fn test_union_is_idempotent() {
        let mut uf = uf(&["A", "B"]);
        uf.union("A", "B");
        uf.union("B", "A");
        assert_eq!(uf.find("A"), uf.find("B"));
    }
}
