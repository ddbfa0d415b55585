//! The tracer: run an algorithm and capture its full execution history.

use pathviz_graph::{Graph, NodeId};

use crate::algorithm::{PathfindingAlgorithm, PathfindingResult};
use crate::error::Result;
use crate::event::TraceEvent;

/// The captured history of one run: the verbatim event log plus the
/// final result.
///
/// The log alone fully drives replay; the result rides along so callers
/// do not have to re-run the algorithm to answer path or distance
/// queries. A trace belongs to one start/end pair - a different pair
/// means a new trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Every emitted event, in emission order.
    pub events: Vec<TraceEvent>,
    /// The algorithm's definitive answer.
    pub result: PathfindingResult,
}

impl Trace {
    /// Number of events in the log.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Execute `algorithm` and collect its events into an ordered log.
///
/// A pure adapter: the supplied closure appends each event in call
/// order, with no transformation, filtering, or deduplication. Any
/// [`PathfindingAlgorithm`] that emits the documented event shapes can
/// be traced identically.
pub fn trace_algorithm<A>(
    algorithm: &A,
    graph: &Graph,
    start: &NodeId,
    end: &NodeId,
) -> Result<Trace>
where
    A: PathfindingAlgorithm + ?Sized,
{
    let mut events = Vec::new();
    let result = algorithm.run(graph, start, end, &mut |event| events.push(event))?;
    Ok(Trace { events, result })
}
