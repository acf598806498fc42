use thiserror::Error;

use crate::graph::{EdgeId, VertexId};

macro_rules! parse_error {
    // Single string version
    ($line:expr, $msg:expr) => {
        crate::Error::Parse {
            line: $line,
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($line:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::Parse {
            line: $line,
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which covers every error this library can return.
///
/// Most structural misuse of the graph store (removing an edge that is not
/// present, querying an unknown vertex) is a no-op that returns `None`, `0` or
/// `false` and never reaches this type. Errors are reserved for operations that
/// cannot produce a meaningful result.
///
/// # Error Categories
///
/// ## Structural Errors
/// - [`Error::VertexNotFound`] - A handle that does not belong to the graph was
///   used to insert an edge or as an algorithm source
/// - [`Error::InvalidArity`] - A d-ary heap was requested with fewer than two children per node
///
/// ## Algorithmic Infeasibility
/// - [`Error::NegativeCycle`] - Shortest paths are undefined because of a negative cycle
/// - [`Error::NegativeWeight`] - Dijkstra was given an edge with a negative weight
///
/// ## Input Errors
/// - [`Error::Parse`] - A malformed line in an edge list
/// - [`Error::Io`] - Reading an edge list failed
///
/// # Examples
///
/// ```rust
/// use graphkit::{algorithms::bellman_ford, Error, Graph};
///
/// let mut graph: Graph<u32> = Graph::new();
/// let a = graph.add_vertex(0);
/// let b = graph.add_vertex(1);
/// graph.add_weighted_edge(a, b, -1.0)?;
/// graph.add_weighted_edge(b, a, -1.0)?;
///
/// match bellman_ford(&graph, a) {
///     Ok(tree) => println!("distance to b: {}", tree.distance(b)),
///     Err(Error::NegativeCycle) => println!("no shortest paths"),
///     Err(e) => println!("other error: {e}"),
/// }
/// # Ok::<(), graphkit::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The vertex handle does not belong to the graph.
    ///
    /// Returned when adding an edge whose source or target is unknown (for
    /// example because the vertex was removed) and when an algorithm is
    /// started from an unknown source.
    #[error("vertex {0} does not exist in the graph")]
    VertexNotFound(VertexId),

    /// A negative-weight cycle makes shortest paths undefined.
    ///
    /// Bellman-Ford reports this only for cycles reachable from the source;
    /// Floyd-Warshall reports it for any cycle in the graph. No partial result
    /// is returned in either case.
    #[error("the graph contains a negative-weight cycle")]
    NegativeCycle,

    /// Dijkstra's algorithm requires non-negative edge weights.
    ///
    /// # Fields
    ///
    /// * `edge` - The first offending edge found
    /// * `weight` - Its weight
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// The offending edge
        edge: EdgeId,
        /// The negative weight of the edge
        weight: f64,
    },

    /// A d-ary heap needs at least two children per node.
    #[error("heap arity must be at least 2, got {0}")]
    InvalidArity(usize),

    /// A line of an edge list could not be parsed.
    ///
    /// # Fields
    ///
    /// * `line` - The 1-based line number
    /// * `message` - What was wrong with the line
    #[error("Malformed edge list - line {line}: {message}")]
    Parse {
        /// The 1-based line number of the malformed line
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// I/O error while reading an edge list.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
