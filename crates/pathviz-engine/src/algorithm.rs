//! The pathfinding plug-in contract.

use std::collections::HashMap;

use pathviz_graph::{Graph, NodeId};

use crate::error::Result;
use crate::event::TraceEvent;

/// The definitive answer of a search, independent of the trace.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfindingResult {
    /// Node sequence from start to end; empty when the end is
    /// unreachable, `[start]` when start and end coincide.
    pub path: Vec<NodeId>,
    /// Best known distance per node; unreachable nodes keep infinity.
    pub distances: HashMap<NodeId, f64>,
}

impl PathfindingResult {
    /// Whether the end node was reachable from the start.
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Finite distance to a node, if one was found.
    pub fn distance_to(&self, id: &NodeId) -> Option<f64> {
        self.distances.get(id).copied().filter(|d| d.is_finite())
    }
}

/// A shortest-path algorithm usable by the tracer.
///
/// Implementations must emit only the three [`TraceEvent`] shapes, in an
/// order consistent with the trace invariants: at most one `Visit` per
/// node, `Relax` targets not yet visited, and exactly one terminal
/// `Finish`. Events are delivered synchronously, in emission order,
/// before `run` returns.
pub trait PathfindingAlgorithm {
    /// Run the search from `start` to `end`, reporting progress through
    /// `on_event`.
    fn run(
        &self,
        graph: &Graph,
        start: &NodeId,
        end: &NodeId,
        on_event: &mut dyn FnMut(TraceEvent),
    ) -> Result<PathfindingResult>;
}
