// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphkit
//!
//! A graph-algorithms engine: a directed, weighted graph store plus the classic
//! algorithms that run on it, together with the two auxiliary data structures
//! those algorithms need for their complexity bounds.
//!
//! ## Features
//!
//! - **Graph store** - Adjacency lists with stable vertex handles, parallel edges and self loops
//! - **Traversal** - Breadth-first and depth-first search with tree and timing information
//! - **Shortest paths** - Bellman-Ford, Dijkstra and Floyd-Warshall with path reconstruction
//! - **Spanning trees** - Kruskal and Boruvka over any disjoint-set strategy
//! - **Priority queue** - Addressable d-ary heap with decrease-key and increase-key
//! - **Union-find** - Quick-find, quick-find with size heuristic, quick-union with rank
//!
//! ## Quick Start
//!
//! Add `graphkit` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! graphkit = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use graphkit::prelude::*;
//!
//! let mut graph: Graph<&str> = Graph::new();
//! let home = graph.add_vertex("home");
//! let work = graph.add_vertex("work");
//! let gym = graph.add_vertex("gym");
//! graph.add_weighted_edge(home, work, 12.0)?;
//! graph.add_weighted_edge(home, gym, 3.0)?;
//! graph.add_weighted_edge(gym, work, 4.0)?;
//!
//! let tree = dijkstra(&graph, home)?;
//! assert_eq!(tree.distance(work), 7.0);
//! # Ok::<(), graphkit::Error>(())
//! ```
//!
//! ### Loading an Edge List
//!
//! ```rust
//! use graphkit::{algorithms::floyd_warshall, io::parse_edge_list};
//!
//! let list = parse_edge_list("0 1 2\n1 2 2\n0 2 10\n")?;
//! let paths = floyd_warshall(&list.graph)?;
//!
//! let (first, last) = (list.vertex(0).unwrap(), list.vertex(2).unwrap());
//! assert_eq!(paths.path_weight(first, last), 4.0);
//! # Ok::<(), graphkit::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Graph store, vertex and edge handles, the traits algorithms are generic over
//! - [`structures`] - d-ary heap and union-find
//! - [`algorithms`] - Traversal, shortest paths, spanning trees
//! - [`io`] - Edge-list parsing
//! - [`prelude`] - Convenient re-exports of commonly used types and functions
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! Algorithm entry points open a [`tracing`](https://docs.rs/tracing) span and
//! report a summary at `debug` level; per-relaxation detail is emitted at
//! `trace` level. The library never installs a subscriber.
//!
//! ## Error Handling
//!
//! Structural misuse of the graph store, such as removing a missing edge, is a
//! no-op. Operations that cannot produce a meaningful result return
//! [`Result<T, Error>`](Result):
//!
//! ```rust
//! use graphkit::{algorithms::floyd_warshall, Error, Graph};
//!
//! let mut graph: Graph<()> = Graph::new();
//! let a = graph.add_vertex(());
//! graph.add_weighted_edge(a, a, -1.0)?;
//!
//! assert!(matches!(floyd_warshall(&graph), Err(Error::NegativeCycle)));
//! # Ok::<(), graphkit::Error>(())
//! ```
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! cargo install cargo-fuzz
//!
//! # Heap and union-find operation sequences
//! cargo +nightly fuzz run heap --release
//! cargo +nightly fuzz run unionfind --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use graphkit::prelude::*;
///
/// let mut graph: Graph<u8> = Graph::new();
/// let a = graph.add_vertex(0);
/// assert_eq!(bfs(&graph, a).len(), 1);
/// ```
pub mod prelude;

pub mod algorithms;
pub mod graph;
pub mod io;
pub mod structures;

/// `graphkit` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graphkit` Error type
///
/// The error type for every fallible operation in this crate: unknown vertices,
/// negative cycles and weights, invalid heap arity and edge-list input errors.
pub use error::Error;

/// The graph store and its handle types, re-exported from [`graph`].
pub use graph::{Edge, EdgeId, Graph, VertexId};
