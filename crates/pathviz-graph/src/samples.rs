//! Built-in example graph catalog.
//!
//! Mirrors the set shipped with the visualizer UI: a balanced sample to
//! explore with, plus small shapes that exercise directedness, weights,
//! and branching. Every entry passes [`crate::validate`].

use crate::generate::{generate, GeneratorOptions, GraphShape};
use crate::model::{Graph, GraphEdge, GraphMetadata, GraphNode, NodeId};

/// Catalog entry describing one built-in example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleInfo {
    /// Stable identifier used to request the graph.
    pub slug: &'static str,
    /// Short display title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Whether the graph is directed.
    pub directed: bool,
    /// Whether the graph carries authored weights.
    pub weighted: bool,
}

/// List every built-in example, in display order.
pub fn catalog() -> Vec<SampleInfo> {
    vec![
        SampleInfo {
            slug: "sample",
            title: "Sample graph",
            description: "Balanced example with weights, great to explore the UI",
            directed: false,
            weighted: true,
        },
        SampleInfo {
            slug: "triangle-unweighted",
            title: "Triangle (Unweighted)",
            description: "Minimal undirected triangle; weights treated as 1",
            directed: false,
            weighted: false,
        },
        SampleInfo {
            slug: "square-weighted-directed",
            title: "Square (Directed, Weighted)",
            description: "4-node cycle with a diagonal shortcut and custom weights",
            directed: true,
            weighted: true,
        },
        SampleInfo {
            slug: "grid-6-nodes",
            title: "Grid 2x3 (Weighted)",
            description: "Small grid with varying weights",
            directed: false,
            weighted: true,
        },
        SampleInfo {
            slug: "tree-7-nodes",
            title: "Binary Tree (Directed)",
            description: "Simple 7-node binary tree, directed from root to leaves",
            directed: true,
            weighted: false,
        },
    ]
}

/// Build the example graph for a catalog slug.
pub fn by_slug(slug: &str) -> Option<Graph> {
    match slug {
        "sample" => Some(sample()),
        "triangle-unweighted" => Some(triangle()),
        "square-weighted-directed" => Some(square_directed()),
        "grid-6-nodes" => Some(grid_6()),
        "tree-7-nodes" => Some(tree_7()),
        _ => None,
    }
}

fn node(id: &str, x: f64, y: f64) -> GraphNode {
    GraphNode {
        id: id.into(),
        x,
        y,
        label: None,
    }
}

fn edge(from: &str, to: &str, weight: f64) -> GraphEdge {
    GraphEdge {
        from: from.into(),
        to: to.into(),
        weight,
        label: None,
    }
}

/// Insert every `(from, to, weight)` plus its mirror.
fn mirrored(pairs: &[(&str, &str, f64)]) -> Vec<GraphEdge> {
    let mut edges = Vec::with_capacity(pairs.len() * 2);
    for &(from, to, weight) in pairs {
        edges.push(edge(from, to, weight));
        edges.push(edge(to, from, weight));
    }
    edges
}

fn meta(directed: bool, weighted: bool, name: &str, description: &str) -> GraphMetadata {
    GraphMetadata {
        directed,
        weighted,
        name: Some(name.to_owned()),
        description: Some(description.to_owned()),
    }
}

fn sample() -> Graph {
    Graph {
        metadata: meta(
            false,
            true,
            "Sample graph",
            "Balanced undirected graph with varied weights",
        ),
        nodes: vec![
            node("A", 0.12, 0.25),
            node("B", 0.38, 0.10),
            node("C", 0.40, 0.55),
            node("D", 0.65, 0.30),
            node("E", 0.70, 0.75),
            node("F", 0.90, 0.50),
        ],
        edges: mirrored(&[
            ("A", "B", 4.0),
            ("A", "C", 2.0),
            ("B", "C", 1.0),
            ("B", "D", 5.0),
            ("C", "D", 8.0),
            ("C", "E", 10.0),
            ("D", "E", 2.0),
            ("D", "F", 6.0),
            ("E", "F", 3.0),
        ]),
    }
}

fn triangle() -> Graph {
    Graph {
        metadata: meta(false, false, "Triangle (Unweighted)", "Minimal undirected triangle"),
        nodes: vec![
            node("A", 0.50, 0.12),
            node("B", 0.15, 0.80),
            node("C", 0.85, 0.80),
        ],
        edges: mirrored(&[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)]),
    }
}

fn square_directed() -> Graph {
    Graph {
        metadata: meta(
            true,
            true,
            "Square (Directed, Weighted)",
            "4-node cycle with a diagonal shortcut",
        ),
        nodes: vec![
            node("A", 0.20, 0.20),
            node("B", 0.80, 0.20),
            node("C", 0.80, 0.80),
            node("D", 0.20, 0.80),
        ],
        edges: vec![
            edge("A", "B", 1.0),
            edge("B", "C", 2.0),
            edge("C", "D", 1.0),
            edge("D", "A", 2.0),
            edge("A", "C", 5.0),
        ],
    }
}

fn grid_6() -> Graph {
    let mut graph = generate(&GeneratorOptions {
        shape: GraphShape::Grid { rows: 2, cols: 3 },
        directed: false,
        weighted: true,
        mirror_undirected: true,
        name: Some("Grid 2x3 (Weighted)".to_owned()),
        description: Some("Small grid with varying weights".to_owned()),
    });
    // Catalog graphs keep letter ids for readability.
    for (node, letter) in graph.nodes.iter_mut().zip(["A", "B", "C", "D", "E", "F"]) {
        rename(&mut graph.edges, &node.id, letter);
        node.id = letter.into();
    }
    graph
}

fn rename(edges: &mut [GraphEdge], old: &NodeId, new: &str) {
    for edge in edges.iter_mut() {
        if &edge.from == old {
            edge.from = new.into();
        }
        if &edge.to == old {
            edge.to = new.into();
        }
    }
}

fn tree_7() -> Graph {
    Graph {
        metadata: meta(
            true,
            false,
            "Binary Tree (Directed)",
            "7-node binary tree, directed from root to leaves",
        ),
        nodes: vec![
            node("root", 0.50, 0.10),
            node("l", 0.25, 0.45),
            node("r", 0.75, 0.45),
            node("ll", 0.12, 0.85),
            node("lr", 0.38, 0.85),
            node("rl", 0.62, 0.85),
            node("rr", 0.88, 0.85),
        ],
        edges: vec![
            edge("root", "l", 1.0),
            edge("root", "r", 1.0),
            edge("l", "ll", 1.0),
            edge("l", "lr", 1.0),
            edge("r", "rl", 1.0),
            edge("r", "rr", 1.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slug_resolves() {
        for info in catalog() {
            assert!(by_slug(info.slug).is_some(), "missing sample `{}`", info.slug);
        }
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(by_slug("no-such-graph").is_none());
    }

    #[test]
    fn catalog_metadata_matches_graphs() {
        for info in catalog() {
            let graph = by_slug(info.slug).unwrap();
            assert_eq!(graph.metadata.directed, info.directed, "{}", info.slug);
            assert_eq!(graph.metadata.weighted, info.weighted, "{}", info.slug);
        }
    }

    #[test]
    fn undirected_samples_carry_both_directions() {
        let g = by_slug("sample").unwrap();
        for e in &g.edges {
            assert!(
                g.edges
                    .iter()
                    .any(|r| r.from == e.to && r.to == e.from && r.weight == e.weight),
                "missing mirror for {} -> {}",
                e.from,
                e.to
            );
        }
    }

    #[test]
    fn tree_is_one_way() {
        let g = by_slug("tree-7-nodes").unwrap();
        assert_eq!(g.edge_count(), 6);
        assert!(g.edges.iter().all(|e| e.weight == 1.0));
    }
}
