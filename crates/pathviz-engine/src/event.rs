//! Trace events: the atomic, externally observable steps of a search.

use pathviz_graph::NodeId;

/// One step of the algorithm's progress.
///
/// A trace log is an ordered sequence of these, ending in exactly one
/// `Finish`. A node is `Visit`ed at most once, and appears as a `Relax`
/// target only before it is ever visited.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum TraceEvent {
    /// A node was finalized with its shortest known distance.
    Visit { node: NodeId, distance: f64 },

    /// A strictly shorter tentative distance to `to` was found via `from`.
    Relax {
        from: NodeId,
        to: NodeId,
        new_distance: f64,
    },

    /// The search ended. `total_distance` is `None` when `path` is empty
    /// because the target was unreachable; an empty path is never a
    /// zero-length path.
    Finish {
        path: Vec<NodeId>,
        total_distance: Option<f64>,
    },
}

impl TraceEvent {
    /// Whether this is the terminal event of a run.
    pub fn is_finish(&self) -> bool {
        matches!(self, TraceEvent::Finish { .. })
    }

    /// Short tag for logs and displays.
    pub fn kind(&self) -> &'static str {
        match self {
            TraceEvent::Visit { .. } => "visit",
            TraceEvent::Relax { .. } => "relax",
            TraceEvent::Finish { .. } => "finish",
        }
    }
}
