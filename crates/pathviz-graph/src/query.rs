//! Structural queries used by builders and renderers.

use crate::model::{Graph, GraphEdge, GraphNode};

/// Find index pairs `(i, j)` where edge `j` is the exact reverse of edge `i`.
///
/// Renderers use this to offset the two parallel lines of a mutual edge.
/// Each ordered pair is reported once, from the earlier edge's side.
pub fn bidirectional_pairs(edges: &[GraphEdge]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, edge) in edges.iter().enumerate() {
        let reverse = edges
            .iter()
            .enumerate()
            .find(|(j, e)| *j != i && e.from == edge.to && e.to == edge.from);
        if let Some((j, _)) = reverse {
            if i < j {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Whether an equivalent edge already exists in the graph.
///
/// In an undirected graph the reverse direction counts as a duplicate.
pub fn is_edge_duplicate(graph: &Graph, edge: &GraphEdge) -> bool {
    if graph.metadata.directed {
        graph
            .edges
            .iter()
            .any(|e| e.from == edge.from && e.to == edge.to)
    } else {
        graph.edges.iter().any(|e| {
            (e.from == edge.from && e.to == edge.to) || (e.from == edge.to && e.to == edge.from)
        })
    }
}

/// Whether a node with the same id already exists in the graph.
pub fn is_node_duplicate(graph: &Graph, node: &GraphNode) -> bool {
    graph.nodes.iter().any(|n| n.id == node.id)
}

/// Whether an edge starts and ends on the same node.
pub fn is_self_loop(edge: &GraphEdge) -> bool {
    edge.from == edge.to
}
