//! Pathviz Visualization
//!
//! Replayable visualization of a shortest-path trace.
//!
//! # Architecture
//!
//! - **State**: rendering-ready snapshot built by a pure event fold
//! - **Stepper**: replays the trace log one event per step, with reset
//!   and fast-forward
//! - **Playback**: play/pause/speed/seek controls over a stepper
//! - **Server**: HTTP + WebSocket surface handing snapshots to an
//!   external renderer
//!
//! The stepper never re-runs the algorithm; it folds a precomputed,
//! finite log. One trace and one stepper belong to one start/end pair -
//! changing endpoints means building both anew.
//!
//! # Usage
//!
//! ```ignore
//! let graph = samples::by_slug("sample").unwrap();
//! let trace = trace_algorithm(&Dijkstra, &graph, &start, &end)?;
//! let mut stepper = TraceStepper::new(trace.events);
//! while !stepper.is_done() {
//!     render(stepper.next());
//! }
//! ```

mod playback;
mod server;
mod state;
mod stepper;

pub use playback::{Playback, PlaybackSpeed, PlaybackState, PlaybackStatus};
pub use server::VisServer;
pub use state::{apply_event, EdgeHighlight, EdgeKey, NodeHighlight, VisualizationState};
pub use stepper::{StepPhase, TraceStepper};
