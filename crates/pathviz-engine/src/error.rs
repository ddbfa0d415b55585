//! Error types for pathviz-engine.

use pathviz_graph::NodeId;
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when starting a search.
///
/// The taxonomy is deliberately narrow: the engine assumes a
/// pre-validated graph, and an unreachable target is a normal outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The requested start or end id is not part of the graph.
    ///
    /// Valid ids are the caller's responsibility; failing fast here is
    /// preferred over silently producing an empty trace.
    #[error("node `{id}` is not part of the graph")]
    UnknownNode { id: NodeId },
}
