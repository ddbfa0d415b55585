//! Structural validation.
//!
//! The pathfinding core assumes every graph it receives has already
//! passed [`validate`]; nothing downstream re-checks these rules.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Graph, NodeId};
use crate::{COORD_MAX, COORD_MIN};

/// A single structural rule violation.
///
/// Validation reports every violation it finds rather than stopping at
/// the first, so an editor can surface the full list at once.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A node has an empty id.
    #[error("node id is empty")]
    EmptyNodeId,

    /// A node id uses characters outside `[A-Za-z0-9_]`.
    ///
    /// The charset keeps the `from-to` edge key format unambiguous.
    #[error("node id `{0}` contains characters outside [A-Za-z0-9_]")]
    InvalidNodeId(NodeId),

    /// Two nodes share an id.
    #[error("duplicate node id `{0}`")]
    DuplicateNodeId(NodeId),

    /// An edge endpoint references a node that does not exist.
    #[error("edge `{from}` -> `{to}` references unknown node `{missing}`")]
    UnknownEndpoint {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    /// An edge weight is NaN or infinite.
    #[error("edge `{from}` -> `{to}` has a non-finite weight")]
    NonFiniteWeight { from: NodeId, to: NodeId },

    /// An edge weight is negative.
    #[error("edge `{from}` -> `{to}` has negative weight {weight}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    /// A node position falls outside the unit square or is non-finite.
    #[error("node `{id}` position ({x}, {y}) is outside the unit square")]
    PositionOutOfBounds { id: NodeId, x: f64, y: f64 },
}

fn id_charset_ok(id: &NodeId) -> bool {
    id.as_str()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn coord_ok(v: f64) -> bool {
    v.is_finite() && (COORD_MIN..=COORD_MAX).contains(&v)
}

/// Check every structural rule and collect all violations.
pub fn validate(graph: &Graph) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&NodeId> = HashSet::new();

    for node in &graph.nodes {
        if node.id.as_str().is_empty() {
            errors.push(ValidationError::EmptyNodeId);
        } else if !id_charset_ok(&node.id) {
            errors.push(ValidationError::InvalidNodeId(node.id.clone()));
        }

        if !seen.insert(&node.id) {
            errors.push(ValidationError::DuplicateNodeId(node.id.clone()));
        }

        if !coord_ok(node.x) || !coord_ok(node.y) {
            errors.push(ValidationError::PositionOutOfBounds {
                id: node.id.clone(),
                x: node.x,
                y: node.y,
            });
        }
    }

    for edge in &graph.edges {
        for endpoint in [&edge.from, &edge.to] {
            if !seen.contains(endpoint) {
                errors.push(ValidationError::UnknownEndpoint {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    missing: endpoint.clone(),
                });
            }
        }

        if !edge.weight.is_finite() {
            errors.push(ValidationError::NonFiniteWeight {
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        } else if edge.weight < 0.0 {
            errors.push(ValidationError::NegativeWeight {
                from: edge.from.clone(),
                to: edge.to.clone(),
                weight: edge.weight,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GraphEdge, GraphMetadata, GraphNode};

    fn base_graph() -> Graph {
        Graph {
            metadata: GraphMetadata {
                directed: true,
                weighted: true,
                name: None,
                description: None,
            },
            nodes: vec![
                GraphNode {
                    id: "A".into(),
                    x: 0.2,
                    y: 0.3,
                    label: None,
                },
                GraphNode {
                    id: "B".into(),
                    x: 0.8,
                    y: 0.7,
                    label: None,
                },
            ],
            edges: vec![GraphEdge {
                from: "A".into(),
                to: "B".into(),
                weight: 1.0,
                label: None,
            }],
        }
    }

    #[test]
    fn valid_graph_passes() {
        assert!(validate(&base_graph()).is_ok());
    }

    #[test]
    fn rejects_empty_id() {
        let mut g = base_graph();
        g.nodes[0].id = "".into();
        let errors = validate(&g).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyNodeId));
    }

    #[test]
    fn rejects_id_with_separator_char() {
        let mut g = base_graph();
        g.nodes[0].id = "a-b".into();
        let errors = validate(&g).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidNodeId(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut g = base_graph();
        g.nodes.push(GraphNode {
            id: "A".into(),
            x: 0.5,
            y: 0.5,
            label: None,
        });
        let errors = validate(&g).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateNodeId("A".into())));
    }

    #[test]
    fn rejects_unknown_endpoint() {
        let mut g = base_graph();
        g.edges.push(GraphEdge {
            from: "A".into(),
            to: "Z".into(),
            weight: 1.0,
            label: None,
        });
        let errors = validate(&g).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::UnknownEndpoint { missing, .. } if missing == &NodeId::from("Z"))));
    }

    #[test]
    fn rejects_bad_weights() {
        let mut g = base_graph();
        g.edges[0].weight = f64::NAN;
        assert!(matches!(
            validate(&g).unwrap_err()[0],
            ValidationError::NonFiniteWeight { .. }
        ));

        g.edges[0].weight = -2.0;
        assert!(matches!(
            validate(&g).unwrap_err()[0],
            ValidationError::NegativeWeight { .. }
        ));
    }

    #[test]
    fn rejects_out_of_bounds_position() {
        let mut g = base_graph();
        g.nodes[1].x = 1.5;
        assert!(matches!(
            validate(&g).unwrap_err()[0],
            ValidationError::PositionOutOfBounds { .. }
        ));
    }

    #[test]
    fn collects_multiple_violations() {
        let mut g = base_graph();
        g.nodes[0].id = "".into();
        g.edges[0].weight = -1.0;
        let errors = validate(&g).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
