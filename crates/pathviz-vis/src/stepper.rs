//! Deterministic replay of a trace log, one event per step.

use pathviz_engine::TraceEvent;
use serde::{Deserialize, Serialize};

use crate::state::{apply_event, VisualizationState};

/// Where a stepper is in its lifecycle.
///
/// `Done` is absorbing: once reached, [`TraceStepper::next`] is a no-op
/// and the snapshot is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepPhase {
    /// No event has been folded yet.
    NotStarted,
    /// Somewhere inside the log.
    InProgress,
    /// The log is exhausted (or was empty to begin with).
    Done,
}

/// Replays an event log into a [`VisualizationState`].
///
/// Owns the log for the lifetime of one run; a different start/end pair
/// needs a new log and a new stepper. Never panics and never errors:
/// stepping past the end and an empty log are both defined, quiet
/// outcomes. Not internally synchronized - one calling context at a
/// time.
#[derive(Debug, Clone)]
pub struct TraceStepper {
    log: Vec<TraceEvent>,
    cursor: usize,
    state: VisualizationState,
}

impl TraceStepper {
    /// Take ownership of a log and start from the empty state.
    ///
    /// An empty log is immediately done.
    pub fn new(log: Vec<TraceEvent>) -> Self {
        let state = VisualizationState {
            done: log.is_empty(),
            ..VisualizationState::default()
        };
        Self {
            log,
            cursor: 0,
            state,
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &VisualizationState {
        &self.state
    }

    /// The log being replayed.
    pub fn log(&self) -> &[TraceEvent] {
        &self.log
    }

    /// Index of the next event to fold.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of events in the log.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Whether the snapshot is frozen.
    pub fn is_done(&self) -> bool {
        self.state.done
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> StepPhase {
        if self.state.done {
            StepPhase::Done
        } else if self.cursor == 0 {
            StepPhase::NotStarted
        } else {
            StepPhase::InProgress
        }
    }

    /// Fold the next event, if any, and return the snapshot.
    ///
    /// A no-op once done.
    pub fn next(&mut self) -> &VisualizationState {
        if self.state.done {
            return &self.state;
        }

        apply_event(&mut self.state, &self.log[self.cursor]);
        self.cursor += 1;

        if self.cursor >= self.log.len() {
            self.state.done = true;
        }
        &self.state
    }

    /// Back to the cursor at zero and the empty initial state.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = VisualizationState {
            done: self.log.is_empty(),
            ..VisualizationState::default()
        };
    }

    /// Fast-forward: fold only the terminal `Finish` event onto the
    /// current state and freeze.
    ///
    /// Valid because `Finish` fully overwrites the path highlighting and
    /// clears the transient fields; it does not depend on intermediate
    /// bookkeeping. A consumer that needs final distances for every
    /// node must instead call [`next`](Self::next) until done.
    pub fn go_to_end(&mut self) -> &VisualizationState {
        if let Some(last) = self.log.last() {
            self.cursor = self.log.len();
            apply_event(&mut self.state, last);
        }
        self.state.done = true;
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_engine::{trace_algorithm, Dijkstra};
    use pathviz_graph::samples;

    fn square_log() -> Vec<TraceEvent> {
        let graph = samples::by_slug("square-weighted-directed").unwrap();
        trace_algorithm(&Dijkstra, &graph, &"A".into(), &"D".into())
            .unwrap()
            .events
    }

    #[test]
    fn phases_progress_in_order() {
        let mut stepper = TraceStepper::new(square_log());
        assert_eq!(stepper.phase(), StepPhase::NotStarted);

        stepper.next();
        assert_eq!(stepper.phase(), StepPhase::InProgress);

        while !stepper.is_done() {
            stepper.next();
        }
        assert_eq!(stepper.phase(), StepPhase::Done);
    }

    #[test]
    fn done_after_exactly_log_len_steps() {
        let log = square_log();
        let len = log.len();
        let mut stepper = TraceStepper::new(log);

        for i in 0..len {
            assert!(!stepper.is_done(), "done too early at step {i}");
            stepper.next();
        }
        assert!(stepper.is_done());
        assert_eq!(stepper.cursor(), len);
    }

    #[test]
    fn next_after_done_is_a_frozen_no_op() {
        let mut stepper = TraceStepper::new(square_log());
        while !stepper.is_done() {
            stepper.next();
        }
        let frozen = stepper.state().clone();

        for _ in 0..5 {
            stepper.next();
        }
        assert_eq!(stepper.state(), &frozen);
    }

    #[test]
    fn reset_restores_the_initial_state_exactly() {
        let log = square_log();
        let fresh = TraceStepper::new(log.clone());
        let mut stepper = TraceStepper::new(log);

        stepper.next();
        stepper.next();
        stepper.next();
        stepper.reset();

        assert_eq!(stepper.state(), fresh.state());
        assert_eq!(stepper.cursor(), 0);
        assert_eq!(stepper.phase(), StepPhase::NotStarted);
    }

    #[test]
    fn fast_forward_matches_full_replay_highlights() {
        let log = square_log();

        let mut replayed = TraceStepper::new(log.clone());
        while !replayed.is_done() {
            replayed.next();
        }

        let mut jumped = TraceStepper::new(log);
        jumped.go_to_end();

        // Path highlighting agrees; per-node distances may differ since
        // the jump skips the intermediate events.
        let full = replayed.state();
        let fast = jumped.state();
        assert!(fast.done);
        assert_eq!(fast.frontier, full.frontier);
        assert_eq!(fast.current_node, full.current_node);
        assert_eq!(fast.relaxed_edge, full.relaxed_edge);
        assert_eq!(&fast.edges, &full.edges);
        for (id, highlight) in &full.nodes {
            if highlight.on_path {
                assert!(fast.nodes[id].on_path, "node {id} lost its path flag");
            }
        }
    }

    #[test]
    fn fast_forward_on_unreachable_run_leaves_no_path_flags() {
        let graph = samples::by_slug("tree-7-nodes").unwrap();
        // Leaves have no outgoing edges, so the root is unreachable.
        let trace = trace_algorithm(&Dijkstra, &graph, &"ll".into(), &"root".into()).unwrap();

        let mut stepper = TraceStepper::new(trace.events);
        let state = stepper.go_to_end();

        assert!(state.done);
        assert!(state.nodes.values().all(|n| !n.on_path));
        assert!(state.edges.values().all(|e| !e.on_path));
    }

    #[test]
    fn empty_log_is_immediately_done() {
        let mut stepper = TraceStepper::new(Vec::new());
        assert!(stepper.is_done());
        assert_eq!(stepper.phase(), StepPhase::Done);

        let before = stepper.state().clone();
        stepper.next();
        assert_eq!(stepper.state(), &before);

        stepper.go_to_end();
        assert!(stepper.is_done());
    }

    #[test]
    fn stepped_snapshots_are_independently_diffable() {
        let mut stepper = TraceStepper::new(square_log());
        let first = stepper.next().clone();
        let second = stepper.next().clone();
        // Earlier snapshots are unaffected by later steps.
        assert_ne!(first, second);
    }
}
