//! Directed, weighted graph store.
//!
//! This module provides the graph representation every algorithm in this crate
//! operates on.
//!
//! # Architecture
//!
//! - **Core Types**: [`VertexId`], [`EdgeId`], [`Edge`] and [`Graph`]
//! - **Traits**: [`GraphBase`] and [`OutEdges`], which the algorithms are generic over
//! - **Export**: [`Graph::to_dot`], the streaming [`Dot`] view and [`escape_dot`] for Graphviz output
//!
//! # Design Principles
//!
//! ## Identity-Based Handles
//!
//! Vertices are referenced by [`VertexId`] handles that are never reused and
//! survive removal of other vertices. Algorithms key their results on these
//! handles, while internally indexing dense vectors through
//! [`GraphBase::vertex_index`].
//!
//! ## Adjacency Lists Owned by the Source
//!
//! Every edge lives in the adjacency list of its source vertex, so
//! [`Graph::out_edges`] is a direct slice of that list.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphkit::Graph;
//!
//! // Diamond: A -> B, A -> C, B -> D, C -> D
//! let mut graph: Graph<&str> = Graph::new();
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! let c = graph.add_vertex("C");
//! let d = graph.add_vertex("D");
//!
//! graph.add_edge(a, b)?;
//! graph.add_edge(a, c)?;
//! graph.add_edge(b, d)?;
//! graph.add_edge(c, d)?;
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! # Ok::<(), graphkit::Error>(())
//! ```

mod dot;
mod edge;
mod store;
mod traits;
mod vertex;

pub use dot::{escape_dot, Dot};
pub use edge::{Edge, EdgeId, DEFAULT_WEIGHT};
pub use store::Graph;
pub use traits::{GraphBase, OutEdges};
pub use vertex::VertexId;
