//! DOT format export for graph visualization.
//!
//! This module renders a [`Graph`] in Graphviz DOT format. Vertex payloads become
//! node labels and edge weights become edge labels.

use std::fmt;

use crate::graph::Graph;

/// Escapes a string for safe use in DOT format labels and identifiers.
///
/// Handles quotes, backslashes, newlines, and angle brackets.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::escape_dot;
///
/// assert_eq!(escape_dot("Vec<T>"), "Vec\\<T\\>");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

impl<D: fmt::Display> Graph<D> {
    /// Renders the graph as a DOT `digraph` named `name`.
    ///
    /// Nodes are identified by their vertex handle (`v0`, `v1`, ...) and labelled
    /// with the payload's `Display` output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphkit::Graph;
    ///
    /// let mut graph: Graph<&str> = Graph::new();
    /// let a = graph.add_vertex("A");
    /// let b = graph.add_vertex("B");
    /// graph.add_weighted_edge(a, b, 2.0)?;
    ///
    /// let dot = graph.to_dot("example");
    /// assert!(dot.contains("v0 -> v1 [label=\"2\"];"));
    /// # Ok::<(), graphkit::Error>(())
    /// ```
    #[must_use]
    pub fn to_dot(&self, name: &str) -> String {
        self.dot(name).to_string()
    }

    /// Returns a [`Display`](fmt::Display) view that writes the graph as a DOT
    /// `digraph` named `name`, for streaming into any formatter or writer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphkit::Graph;
    ///
    /// let mut graph: Graph<u8> = Graph::new();
    /// graph.add_vertex(7);
    ///
    /// let rendered = format!("{}", graph.dot("single"));
    /// assert_eq!(rendered, "digraph \"single\" {\n    v0 [label=\"7\"];\n}\n");
    /// ```
    #[must_use]
    pub fn dot<'g>(&'g self, name: &'g str) -> Dot<'g, D> {
        Dot { graph: self, name }
    }
}

/// DOT rendering of a [`Graph`], created by [`Graph::dot`].
pub struct Dot<'g, D> {
    graph: &'g Graph<D>,
    name: &'g str,
}

impl<D: fmt::Display> fmt::Display for Dot<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph \"{}\" {{", escape_dot(self.name))?;
        for (vertex, data) in self.graph.vertices_with_data() {
            writeln!(
                f,
                "    {vertex} [label=\"{}\"];",
                escape_dot(&data.to_string())
            )?;
        }
        for edge in self.graph.edges() {
            writeln!(
                f,
                "    {} -> {} [label=\"{}\"];",
                edge.source, edge.target, edge.weight
            )?;
        }
        writeln!(f, "}}")
    }
}
