//! Breadth-first and depth-first traversal.
//!
//! Both traversals return the visited vertices as records in discovery order
//! instead of lazy iterators: a BFS record carries the tree parent and level,
//! and a DFS record carries discovery and finish times, which are only known
//! once the whole subtree has been explored.
//!
//! # Algorithms
//!
//! - [`bfs`] - Level-order traversal of the vertices reachable from a source
//! - [`dfs`] - Depth-first forest over every vertex, with discovery/finish times

use std::collections::VecDeque;

use tracing::debug;

use crate::graph::{OutEdges, VertexId};

/// A vertex reached by [`bfs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitedVertex {
    /// The vertex reached.
    pub vertex: VertexId,
    /// The vertex it was first reached from, `None` for the source.
    pub parent: Option<VertexId>,
    /// Number of edges on the BFS tree path from the source.
    pub depth: usize,
}

/// A vertex visited by [`dfs`].
///
/// The `[discovery, finish]` intervals of any two vertices are either disjoint
/// or nested, and a vertex's interval lies inside its parent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfsVisit {
    /// The vertex visited.
    pub vertex: VertexId,
    /// The DFS tree parent, `None` for the root of each DFS tree.
    pub parent: Option<VertexId>,
    /// Time at which the vertex was entered.
    pub discovery: usize,
    /// Time at which every descendant was finished and the vertex was exited.
    pub finish: usize,
}

impl DfsVisit {
    /// Returns `true` if `other` lies in the DFS subtree of `self`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &DfsVisit) -> bool {
        self.discovery <= other.discovery && other.finish <= self.finish
    }
}

/// Breadth-first search from `source`.
///
/// Vertices are visited in FIFO order: every vertex at depth `d` is recorded
/// before any vertex at depth `d + 1`. Only vertices reachable from `source`
/// appear in the result.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `source` - The vertex to start from
///
/// # Returns
///
/// One [`VisitedVertex`] per reachable vertex, in visiting order, starting with
/// `source` at depth 0. An unknown `source` yields an empty vector.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graphkit::{algorithms::bfs, Graph};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// let visits = bfs(&graph, a);
/// assert_eq!(visits.len(), 3);
/// assert_eq!(visits[2].vertex, c);
/// assert_eq!(visits[2].parent, Some(b));
/// assert_eq!(visits[2].depth, 2);
/// # Ok::<(), graphkit::Error>(())
/// ```
#[tracing::instrument(skip_all, fields(source = %source, vertices = graph.vertex_count()))]
pub fn bfs<G: OutEdges>(graph: &G, source: VertexId) -> Vec<VisitedVertex> {
    let Some(start) = graph.vertex_index(source) else {
        debug!("unknown source, nothing to visit");
        return Vec::new();
    };

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    visited[start] = true;
    queue.push_back(VisitedVertex {
        vertex: source,
        parent: None,
        depth: 0,
    });

    while let Some(visit) = queue.pop_front() {
        for edge in graph.out_edges(visit.vertex) {
            let Some(index) = graph.vertex_index(edge.target) else {
                continue;
            };
            if !visited[index] {
                visited[index] = true;
                queue.push_back(VisitedVertex {
                    vertex: edge.target,
                    parent: Some(visit.vertex),
                    depth: visit.depth + 1,
                });
            }
        }
        result.push(visit);
    }

    debug!(visited = result.len(), "bfs finished");
    result
}

#[derive(Clone, Copy)]
enum Frame {
    Enter {
        vertex: VertexId,
        parent: Option<VertexId>,
    },
    Exit {
        record: usize,
    },
}

/// Depth-first search over the whole graph, starting with `source`.
///
/// The tree rooted at `source` is explored first; afterwards every vertex not
/// yet visited starts a new tree, in the graph's vertex order. A single clock
/// runs through the whole call: it ticks once when a vertex is entered and once
/// when it is exited, and the first discovery happens at time 1.
///
/// The traversal is iterative, so deep graphs cannot overflow the call stack.
/// Each vertex's outgoing edges are read exactly once.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `source` - The vertex whose tree is explored first; if it is not in the
///   graph, the forest simply starts at the first vertex
///
/// # Returns
///
/// One [`DfsVisit`] per vertex of the graph, in discovery order.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the explicit stack
///
/// # Examples
///
/// ```rust
/// use graphkit::{algorithms::dfs, Graph};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
/// graph.add_edge(a, b)?;
///
/// let visits = dfs(&graph, a);
/// assert_eq!((visits[0].discovery, visits[0].finish), (1, 4));
/// assert_eq!((visits[1].discovery, visits[1].finish), (2, 3));
/// assert_eq!(visits[2].vertex, c);
/// assert_eq!(visits[2].parent, None);
/// # Ok::<(), graphkit::Error>(())
/// ```
#[tracing::instrument(skip_all, fields(source = %source, vertices = graph.vertex_count()))]
pub fn dfs<G: OutEdges>(graph: &G, source: VertexId) -> Vec<DfsVisit> {
    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut result: Vec<DfsVisit> = Vec::with_capacity(vertex_count);
    let mut stack = Vec::new();
    let mut clock = 0;
    let mut trees = 0;

    let roots = graph
        .vertex_index(source)
        .map(|_| source)
        .into_iter()
        .chain(graph.vertex_ids());

    for root in roots {
        let Some(root_index) = graph.vertex_index(root) else {
            continue;
        };
        if visited[root_index] {
            continue;
        }
        trees += 1;
        stack.push(Frame::Enter {
            vertex: root,
            parent: None,
        });

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter { vertex, parent } => {
                    let Some(index) = graph.vertex_index(vertex) else {
                        continue;
                    };
                    // A vertex may be pushed by several parents; the first pop wins
                    if visited[index] {
                        continue;
                    }
                    visited[index] = true;
                    clock += 1;

                    let record = result.len();
                    result.push(DfsVisit {
                        vertex,
                        parent,
                        discovery: clock,
                        finish: 0,
                    });
                    stack.push(Frame::Exit { record });

                    let children = stack.len();
                    for edge in graph.out_edges(vertex) {
                        let fresh = graph
                            .vertex_index(edge.target)
                            .is_some_and(|target| !visited[target]);
                        if fresh {
                            stack.push(Frame::Enter {
                                vertex: edge.target,
                                parent: Some(vertex),
                            });
                        }
                    }
                    // First edge on top, so children are entered in adjacency order
                    stack[children..].reverse();
                }
                Frame::Exit { record } => {
                    clock += 1;
                    result[record].finish = clock;
                }
            }
        }
    }

    debug!(trees, visited = result.len(), "dfs finished");
    result
}
