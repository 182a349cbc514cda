//! Graph structure: vertex list with planar coordinates plus an edge list.
//!
//! Adjacency is derived by scanning the edge list in insertion order (both
//! directions when undirected), never stored. That keeps neighbor iteration
//! deterministic: edges relax in the order they were added.

/// One vertex. Coordinates place it on a canvas; the A* heuristic measures
/// Euclidean distance over them.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub u: String,
    pub v: String,
    pub weight: i64,
}

#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    placed: u32,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            vertices: Vec::new(),
            edges: Vec::new(),
            placed: 0,
        }
    }

    /// Build from `(u, v, weight)` triples, creating vertices on first use.
    pub fn from_edges(directed: bool, edges: &[(&str, &str, i64)]) -> Self {
        let mut g = Graph::new(directed);
        for &(u, v, w) in edges {
            if !g.has_vertex(u) {
                g.add_vertex(u);
            }
            if !g.has_vertex(v) {
                g.add_vertex(v);
            }
            g.add_edge(u, v, w);
        }
        g
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    pub fn has_vertex(&self, id: &str) -> bool {
        self.vertex(id).is_some()
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.edges.iter().any(|e| e.u == u && e.v == v)
    }

    /// Add a vertex at a deterministic canvas position: successive vertices
    /// walk a ring around the canvas center, so layouts are reproducible.
    pub fn add_vertex(&mut self, id: impl Into<String>) {
        let k = self.placed as f64;
        self.placed += 1;
        let angle = k * (std::f64::consts::TAU / 8.0);
        let radius = 170.0 + 40.0 * (k / 8.0).floor();
        self.vertices.push(Vertex {
            id: id.into(),
            x: 350.0 + radius * angle.cos(),
            y: 250.0 + radius * angle.sin(),
        });
    }

    /// Remove a vertex and every edge touching it.
    pub fn remove_vertex(&mut self, id: &str) -> bool {
        let before = self.vertices.len();
        self.vertices.retain(|v| v.id != id);
        if self.vertices.len() == before {
            return false;
        }
        self.edges.retain(|e| e.u != id && e.v != id);
        true
    }

    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>, weight: i64) {
        self.edges.push(Edge {
            u: u.into(),
            v: v.into(),
            weight,
        });
    }

    pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
        let Some(idx) = self.edges.iter().position(|e| e.u == u && e.v == v) else {
            return false;
        };
        self.edges.remove(idx);
        true
    }

    /// Neighbors of `u` in edge insertion order. For undirected graphs each
    /// edge contributes both directions.
    pub fn neighbors(&self, u: &str) -> Vec<(&str, i64)> {
        let mut out = Vec::new();
        for e in &self.edges {
            if e.u == u {
                out.push((e.v.as_str(), e.weight));
            } else if !self.directed && e.v == u {
                out.push((e.u.as_str(), e.weight));
            }
        }
        out
    }

    /// Euclidean distance between two vertices' canvas positions.
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        let va = self.vertex(a)?;
        let vb = self.vertex(b)?;
        Some(((va.x - vb.x).powi(2) + (va.y - vb.y).powi(2)).sqrt())
    }
}
