//! Pathviz Engine
//!
//! Single-source shortest-path search instrumented for replay.
//!
//! # Architecture
//!
//! Instead of returning only a final answer, the engine reports every
//! semantically meaningful state change through a caller-supplied
//! callback, as one of three [`TraceEvent`] shapes:
//!
//! - `Visit` - a node was finalized with its shortest known distance
//! - `Relax` - a strictly shorter tentative distance was found
//! - `Finish` - the terminal event, exactly one per run, always last
//!
//! The [`tracer`](trace_algorithm) wraps a run and collects the events
//! into an ordered, immutable log. Replay lives elsewhere: the engine has
//! no notion of stepping, and the stepper never re-runs the engine.
//!
//! # Determinism
//!
//! Ties between equal-distance frontier nodes break toward the node
//! earliest in `graph.nodes` order, so a given graph and endpoint pair
//! always produces the same trace.
//!
//! # Assumptions
//!
//! Graphs are pre-validated (see `pathviz-graph`); edge weights are
//! non-negative. Unknown start or end ids fail fast with
//! [`Error::UnknownNode`]. An unreachable end is a normal outcome: an
//! empty path and a `Finish` event with no total distance.

mod algorithm;
mod dijkstra;
mod error;
mod event;
mod tracer;

pub use algorithm::{PathfindingAlgorithm, PathfindingResult};
pub use dijkstra::{dijkstra, Dijkstra};
pub use error::{Error, Result};
pub use event::TraceEvent;
pub use tracer::{trace_algorithm, Trace};
