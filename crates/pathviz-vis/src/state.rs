//! The rendering-ready snapshot and the event fold that builds it.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use pathviz_engine::TraceEvent;
use pathviz_graph::NodeId;
use serde::{Deserialize, Serialize};

/// Identifies a directed edge in the highlight maps.
///
/// Serialized as the string `"from-to"`. Validated node ids never
/// contain `-`, so the format is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub from: NodeId,
    pub to: NodeId,
}

impl EdgeKey {
    /// Key for the edge `from -> to`.
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for EdgeKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((from, to)) if !from.is_empty() && !to.is_empty() => {
                Ok(Self::new(from, to))
            }
            _ => Err(format!("malformed edge key `{s}`")),
        }
    }
}

impl Serialize for EdgeKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EdgeKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Highlight flags for one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeHighlight {
    /// Finalized by the search.
    pub visited: bool,
    /// Part of the resolved shortest path.
    pub on_path: bool,
    /// Best distance known so far, if any.
    pub distance: Option<f64>,
}

/// Highlight flags for one edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeHighlight {
    /// Part of the resolved shortest path.
    pub on_path: bool,
}

/// The sole rendering input: a plain value a renderer can diff between
/// consecutive steps.
///
/// Created empty, advanced one event at a time by the stepper's fold,
/// and frozen once `done` is set. Nodes and edges appear in the maps
/// only once an event has touched them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualizationState {
    /// Highlight flags per touched node.
    pub nodes: HashMap<NodeId, NodeHighlight>,
    /// Highlight flags per touched edge.
    pub edges: HashMap<EdgeKey, EdgeHighlight>,
    /// Known-but-not-finalized nodes, in discovery order.
    pub frontier: Vec<NodeId>,
    /// Node being finalized by the most recent event, if any.
    pub current_node: Option<NodeId>,
    /// Most recently relaxed edge; cleared by the following event.
    pub relaxed_edge: Option<EdgeKey>,
    /// Whether the log has been fully consumed.
    pub done: bool,
}

impl VisualizationState {
    /// Rebuild the state by folding an event prefix from scratch.
    ///
    /// `done` is left unset; whether the log is exhausted is the
    /// stepper's call, not the fold's.
    pub fn replay(events: &[TraceEvent]) -> Self {
        let mut state = Self::default();
        for event in events {
            apply_event(&mut state, event);
        }
        state
    }
}

/// Fold one event into the state.
///
/// This is the single place visualization state changes. The rules per
/// event:
///
/// - `Visit`: mark the node visited with its distance, make it current,
///   clear the relaxed edge, drop it from the frontier.
/// - `Relax`: remember the edge as relaxed, clear the current node,
///   update the target's tentative distance, and append the target to
///   the frontier unless it is already visited or already queued.
/// - `Finish`: highlight every consecutive path pair (edge plus both
///   endpoints) and clear all transient fields.
pub fn apply_event(state: &mut VisualizationState, event: &TraceEvent) {
    match event {
        TraceEvent::Visit { node, distance } => {
            state.current_node = Some(node.clone());
            state.relaxed_edge = None;
            let highlight = state.nodes.entry(node.clone()).or_default();
            highlight.visited = true;
            highlight.distance = Some(*distance);
            state.frontier.retain(|id| id != node);
        }

        TraceEvent::Relax {
            from,
            to,
            new_distance,
        } => {
            state.current_node = None;
            state.relaxed_edge = Some(EdgeKey::new(from.clone(), to.clone()));
            let highlight = state.nodes.entry(to.clone()).or_default();
            highlight.distance = Some(*new_distance);
            let already_visited = highlight.visited;
            if !already_visited && !state.frontier.contains(to) {
                state.frontier.push(to.clone());
            }
        }

        TraceEvent::Finish { path, .. } => {
            state.current_node = None;
            state.relaxed_edge = None;
            state.frontier.clear();
            for pair in path.windows(2) {
                state
                    .edges
                    .entry(EdgeKey::new(pair[0].clone(), pair[1].clone()))
                    .or_default()
                    .on_path = true;
                state.nodes.entry(pair[0].clone()).or_default().on_path = true;
                state.nodes.entry(pair[1].clone()).or_default().on_path = true;
            }
        }
    }
}
