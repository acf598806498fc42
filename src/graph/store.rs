//! Adjacency-list graph store.
//!
//! This module provides [`Graph`], the vertex and edge container every algorithm in
//! this crate reads from. Each vertex owns the list of edges leaving it; vertices are
//! kept in a dense vector and addressed by identity through [`VertexId`] handles.
//!
//! # Removal
//!
//! Removing a vertex moves the last vertex into the freed slot instead of shifting
//! the whole vector, then scans every adjacency list for edges entering the removed
//! vertex. Handles are not positions, so the move does not invalidate them.

use std::{collections::HashMap, fmt};

use crate::{
    graph::{
        edge::{Edge, EdgeId, DEFAULT_WEIGHT},
        traits::{GraphBase, OutEdges},
        vertex::VertexId,
    },
    Error, Result,
};

/// Storage for one vertex: its handle, payload and outgoing edges.
#[derive(Debug, Clone)]
struct VertexEntry<D> {
    id: VertexId,
    data: D,
    adjacency: Vec<Edge>,
}

/// A directed, weighted graph with generic vertex payloads.
///
/// `Graph` supports:
///
/// - O(1) vertex and edge insertion
/// - O(out-degree) access to a vertex's outgoing edges
/// - Edge removal (all parallel arcs between an ordered pair at once)
/// - Vertex removal including every incident edge, O(V + E)
///
/// Parallel edges and self loops are allowed. Algorithms treat parallel edges
/// naturally: the cheapest one wins every relaxation.
///
/// # Thread Safety
///
/// `Graph<D>` is [`Send`] and [`Sync`] when `D` is. Algorithms only borrow the graph
/// immutably; serialize mutation against in-flight reads externally.
///
/// # Examples
///
/// ```rust
/// use graphkit::Graph;
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
///
/// graph.add_edge(a, b)?;
/// graph.add_weighted_edge(b, c, 2.0)?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.out_degree(a), 1);
///
/// graph.remove_vertex(b);
/// assert_eq!(graph.edge_count(), 0);
/// assert_eq!(graph.vertex(c), Some(&"C"));
/// # Ok::<(), graphkit::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<D> {
    /// Dense vertex storage
    vertices: Vec<VertexEntry<D>>,
    /// Current position of each vertex in `vertices`
    positions: HashMap<VertexId, usize>,
    /// Number of arcs over all adjacency lists
    edge_count: usize,
    /// Next vertex handle to hand out
    next_vertex: usize,
    /// Next edge identifier to hand out
    next_edge: usize,
}

impl<D> Default for Graph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Graph<D> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            positions: HashMap::new(),
            edge_count: 0,
            next_vertex: 0,
            next_edge: 0,
        }
    }

    /// Creates a new empty graph with room for `vertex_capacity` vertices.
    ///
    /// Edges live in per-vertex adjacency lists, which grow on demand.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(vertex_capacity),
            positions: HashMap::with_capacity(vertex_capacity),
            edge_count: 0,
            next_vertex: 0,
            next_edge: 0,
        }
    }

    /// Adds a vertex carrying `data` and returns its handle. O(1).
    pub fn add_vertex(&mut self, data: D) -> VertexId {
        let id = VertexId::new(self.next_vertex);
        self.next_vertex += 1;
        self.positions.insert(id, self.vertices.len());
        self.vertices.push(VertexEntry {
            id,
            data,
            adjacency: Vec::new(),
        });
        id
    }

    /// Adds an edge from `source` to `target` with the default weight of `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if either endpoint is not in the graph.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<EdgeId> {
        self.add_weighted_edge(source, target, DEFAULT_WEIGHT)
    }

    /// Adds an edge from `source` to `target` with the given weight. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if either endpoint is not in the graph.
    pub fn add_weighted_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: f64,
    ) -> Result<EdgeId> {
        let position = self
            .positions
            .get(&source)
            .copied()
            .ok_or(Error::VertexNotFound(source))?;
        if !self.positions.contains_key(&target) {
            return Err(Error::VertexNotFound(target));
        }

        let id = EdgeId::new(self.next_edge);
        self.next_edge += 1;
        self.vertices[position].adjacency.push(Edge {
            id,
            source,
            target,
            weight,
        });
        self.edge_count += 1;
        Ok(id)
    }

    /// Removes every arc from `edge.source` to `edge.target`.
    ///
    /// Parallel arcs between the same ordered pair count as one logical edge and
    /// are removed together. The opposite arc of an undirected connection is not
    /// touched. Cost O(out-degree of the source).
    ///
    /// # Returns
    ///
    /// The number of arcs removed; `0` if none matched.
    pub fn remove_edge(&mut self, edge: &Edge) -> usize {
        let Some(&position) = self.positions.get(&edge.source) else {
            return 0;
        };
        let adjacency = &mut self.vertices[position].adjacency;
        let before = adjacency.len();
        adjacency.retain(|e| e.target != edge.target);
        let removed = before - adjacency.len();
        self.edge_count -= removed;
        removed
    }

    /// Removes `vertex` together with every edge entering or leaving it.
    ///
    /// The last vertex is moved into the freed slot. Cost O(V + E) because every
    /// adjacency list is scanned for arcs entering `vertex`.
    ///
    /// # Returns
    ///
    /// The payload of the removed vertex, or `None` if it was not in the graph.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Option<D> {
        let position = self.positions.remove(&vertex)?;
        let entry = self.vertices.swap_remove(position);
        if let Some(moved) = self.vertices.get(position) {
            self.positions.insert(moved.id, position);
        }

        self.edge_count -= entry.adjacency.len();
        for other in &mut self.vertices {
            let before = other.adjacency.len();
            other.adjacency.retain(|e| e.target != vertex);
            self.edge_count -= before - other.adjacency.len();
        }

        Some(entry.data)
    }

    /// Returns the payload of `vertex`, or `None` if it is not in the graph.
    #[must_use]
    pub fn vertex(&self, vertex: VertexId) -> Option<&D> {
        self.positions
            .get(&vertex)
            .map(|&position| &self.vertices[position].data)
    }

    /// Returns a mutable reference to the payload of `vertex`.
    pub fn vertex_mut(&mut self, vertex: VertexId) -> Option<&mut D> {
        let position = *self.positions.get(&vertex)?;
        Some(&mut self.vertices[position].data)
    }

    /// Returns `true` if `vertex` is in the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.positions.contains_key(&vertex)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns an iterator over all vertex handles in storage order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|entry| entry.id)
    }

    /// Returns an iterator over all vertices together with their payloads.
    pub fn vertices_with_data(&self) -> impl Iterator<Item = (VertexId, &D)> + '_ {
        self.vertices.iter().map(|entry| (entry.id, &entry.data))
    }

    /// Returns an iterator over every edge, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices.iter().flat_map(|entry| entry.adjacency.iter())
    }

    /// Returns the edges leaving `vertex`.
    ///
    /// This is the vertex's own adjacency list, so the call is O(1) and walking the
    /// result is O(out-degree). Unknown vertices yield an empty slice.
    #[must_use]
    pub fn out_edges(&self, vertex: VertexId) -> &[Edge] {
        match self.positions.get(&vertex) {
            Some(&position) => &self.vertices[position].adjacency,
            None => &[],
        }
    }

    /// Returns the number of edges leaving `vertex` (0 for unknown vertices).
    #[must_use]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.out_edges(vertex).len()
    }

    /// Returns the first edge from `x` to `y`, or `None` if they are not adjacent.
    ///
    /// Cost O(out-degree of `x`).
    #[must_use]
    pub fn are_adjacent(&self, x: VertexId, y: VertexId) -> Option<&Edge> {
        self.out_edges(x).iter().find(|e| e.target == y)
    }

    /// Returns the sum of all edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges().map(|e| e.weight).sum()
    }
}

impl<D: Clone> Graph<D> {
    /// Returns a graph with the same vertices (same handles and payloads) and no edges.
    ///
    /// Used by the spanning-tree algorithms, whose result keeps the vertex handles
    /// of the input graph.
    #[must_use]
    pub fn empty_like(&self) -> Graph<D> {
        Graph {
            vertices: self
                .vertices
                .iter()
                .map(|entry| VertexEntry {
                    id: entry.id,
                    data: entry.data.clone(),
                    adjacency: Vec::new(),
                })
                .collect(),
            positions: self.positions.clone(),
            edge_count: 0,
            next_vertex: self.next_vertex,
            next_edge: 0,
        }
    }
}

impl<D> GraphBase for Graph<D> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        self.vertices()
    }

    fn vertex_index(&self, vertex: VertexId) -> Option<usize> {
        self.positions.get(&vertex).copied()
    }
}

impl<D> OutEdges for Graph<D> {
    fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> {
        Graph::out_edges(self, vertex).iter()
    }
}

impl<D: fmt::Display> fmt::Display for Graph<D> {
    /// Lists every vertex followed by the payloads of its successors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.vertices {
            writeln!(f, "{}", entry.data)?;
            let last = entry.adjacency.len().saturating_sub(1);
            for (i, edge) in entry.adjacency.iter().enumerate() {
                let branch = if i < last { "├────" } else { "└────" };
                match self.vertex(edge.target) {
                    Some(target) => writeln!(f, "{branch} {target}")?,
                    None => writeln!(f, "{branch} {}", edge.target)?,
                }
            }
        }
        Ok(())
    }
}
