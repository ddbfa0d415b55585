//! Graph schema types (version 1).
//!
//! The runtime shape matches the on-disk JSON shape one to one, so a
//! resolved file and an in-memory graph share these definitions.

use std::fmt;

/// A node identifier.
///
/// Validated ids are non-empty and drawn from `[A-Za-z0-9_]`, which keeps
/// the `from-to` edge key format used by the visualization unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub String);

impl NodeId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Graph-wide authoring metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphMetadata {
    /// Whether edges imply one-way reachability.
    pub directed: bool,
    /// Whether edge weights were authored (unweighted graphs use weight 1).
    pub weighted: bool,
    /// Optional display name.
    pub name: Option<String>,
    /// Optional longer description.
    pub description: Option<String>,
}

/// A node with a normalized position in the unit square.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphNode {
    /// Unique identifier.
    pub id: NodeId,
    /// Horizontal position in `[0, 1]`.
    pub x: f64,
    /// Vertical position in `[0, 1]`.
    pub y: f64,
    /// Optional display label (defaults to the id when absent).
    pub label: Option<String>,
}

/// A directed, weighted edge.
///
/// Undirected graphs carry the mirrored edge as a second explicit entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphEdge {
    /// Source node id.
    pub from: NodeId,
    /// Target node id.
    pub to: NodeId,
    /// Non-negative weight.
    pub weight: f64,
    /// Optional display label.
    pub label: Option<String>,
}

/// An immutable user-authored graph.
///
/// Edge order is meaningful: the engine relaxes outgoing edges in
/// sequence order, which fixes the emitted trace for a given graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    /// Authoring metadata.
    pub metadata: GraphMetadata,
    /// Node set; ids are unique after validation.
    pub nodes: Vec<GraphNode>,
    /// Ordered edge sequence.
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Whether a node with this id exists.
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    /// All edges leaving the given node, in sequence order.
    pub fn outgoing<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a GraphEdge> {
        self.edges.iter().filter(move |e| &e.from == id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
