//! Complete-graph materialization over parsed nodes.

use serde::Serialize;
use uuid::Uuid;

use crate::node::Node;

/// One directed edge with its endpoints embedded.
///
/// `start` and `end` are copies of entries in `Graph::nodes`, not references
/// into it, so a serialized edge is self-contained.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Edge {
    pub idx: usize,
    pub weight: f64,
    pub start: Node,
    pub end: Node,
}

/// A converted instance: its nodes, the complete directed edge set, and
/// placeholder fields reserved for downstream pipeline stages.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Graph {
    /// Random v4 UUID in canonical hyphenated form, generated per build.
    pub id: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Reserved for an adjacency-matrix stage; always empty here.
    pub adj_matrix: Vec<Vec<f64>>,
    /// Reserved for a tour-optimization stage; never set here.
    pub shortest_tour: Option<Vec<usize>>,
}

impl Graph {
    /// Builds the complete directed graph over `nodes`.
    ///
    /// Every ordered pair of distinct positions (i, j) yields one edge, so
    /// both directions of a pair are materialized and nothing is
    /// deduplicated. Pairing is positional: two identical node records are
    /// still connected, only the self-pair at the same position is skipped.
    /// Edge indices are contiguous from 0 in enumeration order (outer i,
    /// inner j). For `n` nodes this produces `n * (n - 1)` edges.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let n = nodes.len();
        let mut edges = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)));

        for (i, start) in nodes.iter().enumerate() {
            for (j, end) in nodes.iter().enumerate() {
                if i == j {
                    continue;
                }
                edges.push(Edge {
                    idx: edges.len(),
                    weight: start.dist(end),
                    start: *start,
                    end: *end,
                });
            }
        }

        Self {
            id: Uuid::new_v4().to_string(),
            nodes,
            edges,
            adj_matrix: Vec::new(),
            shortest_tour: None,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
