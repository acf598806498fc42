//! Edge-list loading.
//!
//! An edge list is a text format with one directed edge per line:
//!
//! ```text
//! # source  target  [weight]
//! 0   1   2.5
//! 1   2
//! ```
//!
//! Fields are separated by any whitespace. Vertex indices are non-negative
//! integers and the weight defaults to [`DEFAULT_WEIGHT`]. Blank lines and lines
//! starting with `#` are skipped. The graph gets one vertex per index from `0`
//! to the largest index used, each carrying its index as payload, so indices
//! without edges still become isolated vertices. Indices above
//! [`MAX_VERTEX_INDEX`] are rejected, since every index up to the largest one
//! is allocated.

use std::io::BufRead;

use tracing::debug;

use crate::{
    graph::{Graph, VertexId, DEFAULT_WEIGHT},
    Result,
};

/// Largest vertex index an edge list may use.
pub const MAX_VERTEX_INDEX: usize = (1 << 24) - 1;

/// A graph loaded from an edge list, plus the handle of every vertex index.
#[derive(Debug, Clone)]
pub struct EdgeList {
    /// The loaded graph. Vertex payloads are the indices from the input.
    pub graph: Graph<usize>,
    /// `vertices[i]` is the handle of vertex index `i`.
    pub vertices: Vec<VertexId>,
}

impl EdgeList {
    /// Returns the handle of vertex index `index`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<VertexId> {
        self.vertices.get(index).copied()
    }
}

/// Parses an edge list held in memory.
///
/// # Errors
///
/// [`Error::Parse`](crate::Error::Parse) for the first malformed line.
///
/// # Examples
///
/// ```rust
/// use graphkit::io::parse_edge_list;
///
/// let list = parse_edge_list("0 1 2.5\n1 2\n# comment\n\n4 0 -1\n")?;
/// assert_eq!(list.graph.vertex_count(), 5);
/// assert_eq!(list.graph.edge_count(), 3);
///
/// let (a, b) = (list.vertex(0).unwrap(), list.vertex(1).unwrap());
/// assert_eq!(list.graph.are_adjacent(a, b).map(|e| e.weight), Some(2.5));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn parse_edge_list(input: &str) -> Result<EdgeList> {
    read_edge_list(input.as_bytes())
}

/// Reads an edge list from `reader`.
///
/// # Errors
///
/// - [`Error::Io`](crate::Error::Io) if reading fails
/// - [`Error::Parse`](crate::Error::Parse) for the first malformed line
#[tracing::instrument(skip_all)]
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<EdgeList> {
    let mut arcs = Vec::new();
    let mut max_index = None;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let Some((source, target, weight)) = parse_line(number + 1, &line)? else {
            continue;
        };
        max_index = max_index.max(Some(source.max(target)));
        arcs.push((source, target, weight));
    }

    // Indices are capped per line, so this cannot overflow
    let vertex_count = max_index.map_or(0, |max: usize| max.saturating_add(1));
    let mut graph = Graph::with_capacity(vertex_count);
    let vertices: Vec<VertexId> = (0..vertex_count).map(|i| graph.add_vertex(i)).collect();
    for (source, target, weight) in arcs {
        graph.add_weighted_edge(vertices[source], vertices[target], weight)?;
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list loaded"
    );
    Ok(EdgeList { graph, vertices })
}

/// Parses one line; `None` for blank and comment lines.
fn parse_line(number: usize, line: &str) -> Result<Option<(usize, usize, f64)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(parse_error!(
            number,
            "expected `source target [weight]`, found {} field(s)",
            fields.len()
        ));
    }

    let index = |field: &str| -> Result<usize> {
        let index = field
            .parse::<usize>()
            .map_err(|_| parse_error!(number, "invalid vertex index `{}`", field))?;
        if index > MAX_VERTEX_INDEX {
            return Err(parse_error!(
                number,
                "vertex index `{}` exceeds the limit of {}",
                index,
                MAX_VERTEX_INDEX
            ));
        }
        Ok(index)
    };
    let source = index(fields[0])?;
    let target = index(fields[1])?;

    let weight = match fields.get(2) {
        Some(field) => field
            .parse::<f64>()
            .map_err(|_| parse_error!(number, "invalid weight `{}`", field))?,
        None => DEFAULT_WEIGHT,
    };
    if !weight.is_finite() {
        return Err(parse_error!(number, "weight must be finite, found `{}`", weight));
    }

    Ok(Some((source, target, weight)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn parse_failure(input: &str) -> (usize, String) {
        match parse_edge_list(input) {
            Err(Error::Parse { line, message }) => (line, message),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_vertices_up_to_max_index() {
        let list = parse_edge_list("0\t3\t1.5\n").unwrap();
        assert_eq!(list.graph.vertex_count(), 4);
        assert_eq!(list.vertices.len(), 4);
        assert_eq!(list.graph.vertex(list.vertex(2).unwrap()), Some(&2));
        assert_eq!(list.vertex(4), None);
    }

    #[test]
    fn test_default_weight() {
        let list = parse_edge_list("0 1\n").unwrap();
        let (a, b) = (list.vertex(0).unwrap(), list.vertex(1).unwrap());
        assert_eq!(list.graph.are_adjacent(a, b).map(|e| e.weight), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let list = parse_edge_list("# header\n\n   \n0 1 2\n  # indented\n1 0 3\n").unwrap();
        assert_eq!(list.graph.edge_count(), 2);
    }

    #[test]
    fn test_empty_input() {
        let list = parse_edge_list("").unwrap();
        assert!(list.graph.is_empty());
        assert!(list.vertices.is_empty());
    }

    #[test]
    fn test_wrong_field_count() {
        let (line, message) = parse_failure("0 1\n2\n");
        assert_eq!(line, 2);
        assert!(message.contains("found 1 field(s)"));
        assert_eq!(parse_failure("0 1 2 3\n").0, 1);
    }

    #[test]
    fn test_invalid_index() {
        let (line, message) = parse_failure("0 1\n\n-1 2\n");
        assert_eq!(line, 3);
        assert_eq!(message, "invalid vertex index `-1`");
    }

    #[test]
    fn test_invalid_weight() {
        assert_eq!(parse_failure("0 1 heavy\n").1, "invalid weight `heavy`");
        assert_eq!(parse_failure("0 1 NaN\n").1, "weight must be finite, found `NaN`");
    }

    #[test]
    fn test_index_above_limit() {
        let (line, message) = parse_failure(&format!("0 1\n0 {}\n", MAX_VERTEX_INDEX + 1));
        assert_eq!(line, 2);
        assert!(message.contains("exceeds the limit"));
        assert_eq!(parse_failure("0 100000000000\n").0, 1);
    }

    #[test]
    fn test_index_max_usize() {
        let (line, message) = parse_failure(&format!("0 {}\n", usize::MAX));
        assert_eq!(line, 1);
        assert_eq!(
            message,
            format!("vertex index `{}` exceeds the limit of {MAX_VERTEX_INDEX}", usize::MAX)
        );
    }

    #[test]
    fn test_read_from_buf_reader() {
        let input = std::io::Cursor::new(b"0 1 1\n1 2 1\n2 0 1\n".to_vec());
        let list = read_edge_list(input).unwrap();
        assert_eq!(list.graph.edge_count(), 3);
    }
}
