//! Dijkstra's algorithm, instrumented to emit trace events.

use std::collections::{HashMap, HashSet};

use pathviz_graph::{Graph, NodeId};

use crate::algorithm::{PathfindingAlgorithm, PathfindingResult};
use crate::error::{Error, Result};
use crate::event::TraceEvent;

/// Classic single-source relaxation over an explicit unfinalized set.
///
/// Selection scans `graph.nodes` in order with a strict comparison, so
/// among equal minimum tentative distances the earliest-declared node
/// wins. The scan is O(nodes) per step; graphs here are authored by
/// hand and stay far below the sizes where a heap would matter.
///
/// `Visit` is emitted for every finalized node including the end node;
/// relaxing every outgoing edge independently means parallel edges and
/// self-loops need no special casing (a self-loop can never strictly
/// improve its own source).
pub fn dijkstra(
    graph: &Graph,
    start: &NodeId,
    end: &NodeId,
    mut on_event: impl FnMut(TraceEvent),
) -> Result<PathfindingResult> {
    for id in [start, end] {
        if !graph.contains_node(id) {
            return Err(Error::UnknownNode { id: id.clone() });
        }
    }

    let mut distances: HashMap<NodeId, f64> = graph
        .nodes
        .iter()
        .map(|n| (n.id.clone(), f64::INFINITY))
        .collect();
    let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
    let mut unfinalized: HashSet<NodeId> =
        graph.nodes.iter().map(|n| n.id.clone()).collect();

    distances.insert(start.clone(), 0.0);

    while !unfinalized.is_empty() {
        // Earliest node in declaration order wins distance ties.
        let mut closest: Option<(NodeId, f64)> = None;
        for node in &graph.nodes {
            if !unfinalized.contains(&node.id) {
                continue;
            }
            let distance = distances[&node.id];
            if !distance.is_finite() {
                continue;
            }
            if closest.as_ref().map_or(true, |(_, best)| distance < *best) {
                closest = Some((node.id.clone(), distance));
            }
        }

        // Only unreachable candidates remain.
        let Some((current, distance)) = closest else {
            break;
        };

        unfinalized.remove(&current);
        on_event(TraceEvent::Visit {
            node: current.clone(),
            distance,
        });

        if &current == end {
            break;
        }

        for edge in graph.outgoing(&current) {
            let candidate = distance + edge.weight;
            if candidate < distances[&edge.to] {
                distances.insert(edge.to.clone(), candidate);
                previous.insert(edge.to.clone(), current.clone());
                on_event(TraceEvent::Relax {
                    from: current.clone(),
                    to: edge.to.clone(),
                    new_distance: candidate,
                });
            }
        }
    }

    // Walk predecessor links backward from the end.
    let mut reversed = Vec::new();
    let mut cursor = end;
    while let Some(prev) = previous.get(cursor) {
        reversed.push(cursor.clone());
        cursor = prev;
    }

    let mut path = Vec::with_capacity(reversed.len() + 1);
    if !reversed.is_empty() || start == end {
        path.push(start.clone());
        path.extend(reversed.into_iter().rev());
    }

    let total_distance = Some(distances[end]).filter(|d| d.is_finite());
    on_event(TraceEvent::Finish {
        path: path.clone(),
        total_distance,
    });

    Ok(PathfindingResult { path, distances })
}

/// [`dijkstra`] as a [`PathfindingAlgorithm`] plug-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl PathfindingAlgorithm for Dijkstra {
    fn run(
        &self,
        graph: &Graph,
        start: &NodeId,
        end: &NodeId,
        on_event: &mut dyn FnMut(TraceEvent),
    ) -> Result<PathfindingResult> {
        dijkstra(graph, start, end, on_event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_graph::{GraphEdge, GraphMetadata, GraphNode};

    fn node(id: &str) -> GraphNode {
        GraphNode {
            id: id.into(),
            x: 0.5,
            y: 0.5,
            label: None,
        }
    }

    fn edge(from: &str, to: &str, weight: f64) -> GraphEdge {
        GraphEdge {
            from: from.into(),
            to: to.into(),
            weight,
            label: None,
        }
    }

    fn graph(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Graph {
        Graph {
            metadata: GraphMetadata {
                directed: true,
                weighted: true,
                name: None,
                description: None,
            },
            nodes,
            edges,
        }
    }

    /// The triangle where the two-hop detour beats the direct edge.
    fn triangle() -> Graph {
        graph(
            vec![node("A"), node("B"), node("C")],
            vec![edge("A", "B", 10.0), edge("A", "C", 2.0), edge("C", "B", 1.0)],
        )
    }

    fn run(graph: &Graph, start: &str, end: &str) -> (PathfindingResult, Vec<TraceEvent>) {
        let mut events = Vec::new();
        let result = dijkstra(graph, &start.into(), &end.into(), |e| events.push(e)).unwrap();
        (result, events)
    }

    #[test]
    fn finds_shortest_path_through_detour() {
        let (result, _) = run(&triangle(), "A", "B");
        assert_eq!(
            result.path,
            vec![NodeId::from("A"), NodeId::from("C"), NodeId::from("B")]
        );
        assert_eq!(result.distances[&"B".into()], 3.0);
    }

    #[test]
    fn trace_follows_the_documented_order() {
        let (_, events) = run(&triangle(), "A", "B");

        let visit_a = events
            .iter()
            .position(|e| matches!(e, TraceEvent::Visit { node, .. } if node == &NodeId::from("A")))
            .expect("A is visited");
        let first_relax_from_a = events
            .iter()
            .position(|e| matches!(e, TraceEvent::Relax { from, .. } if from == &NodeId::from("A")))
            .expect("A relaxes its edges");
        assert!(visit_a < first_relax_from_a);

        assert!(events.iter().any(|e| matches!(
            e,
            TraceEvent::Visit { node, distance } if node == &NodeId::from("C") && *distance == 2.0
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            TraceEvent::Relax { from, to, new_distance }
                if from == &NodeId::from("C") && to == &NodeId::from("B") && *new_distance == 3.0
        )));

        match events.last().unwrap() {
            TraceEvent::Finish {
                path,
                total_distance,
            } => {
                assert_eq!(
                    path,
                    &vec![NodeId::from("A"), NodeId::from("C"), NodeId::from("B")]
                );
                assert_eq!(*total_distance, Some(3.0));
            }
            other => panic!("expected finish last, got {other:?}"),
        }
    }

    #[test]
    fn exactly_one_finish_and_it_is_last() {
        let (_, events) = run(&triangle(), "A", "B");
        let finishes = events.iter().filter(|e| e.is_finish()).count();
        assert_eq!(finishes, 1);
        assert!(events.last().unwrap().is_finish());
    }

    #[test]
    fn start_equals_end() {
        let (result, events) = run(&triangle(), "A", "A");
        assert_eq!(result.path, vec![NodeId::from("A")]);
        assert_eq!(result.distances[&"A".into()], 0.0);
        match events.last().unwrap() {
            TraceEvent::Finish { total_distance, .. } => {
                assert_eq!(*total_distance, Some(0.0));
            }
            other => panic!("expected finish, got {other:?}"),
        }
    }

    #[test]
    fn unreachable_end_is_a_normal_outcome() {
        // B -> A exists but nothing leads from A to B.
        let g = graph(
            vec![node("A"), node("B")],
            vec![edge("B", "A", 1.0)],
        );
        let (result, events) = run(&g, "A", "B");

        assert!(result.path.is_empty());
        assert!(result.distances[&"B".into()].is_infinite());
        match events.last().unwrap() {
            TraceEvent::Finish {
                path,
                total_distance,
            } => {
                assert!(path.is_empty());
                assert_eq!(*total_distance, None);
            }
            other => panic!("expected finish, got {other:?}"),
        }
    }

    #[test]
    fn unknown_node_fails_fast() {
        let err = dijkstra(&triangle(), &"A".into(), &"Z".into(), |_| {}).unwrap_err();
        assert_eq!(err, Error::UnknownNode { id: "Z".into() });

        let err = dijkstra(&triangle(), &"Z".into(), &"A".into(), |_| {}).unwrap_err();
        assert_eq!(err, Error::UnknownNode { id: "Z".into() });
    }

    #[test]
    fn parallel_edges_keep_the_cheapest() {
        let g = graph(
            vec![node("A"), node("B")],
            vec![edge("A", "B", 7.0), edge("A", "B", 3.0), edge("A", "B", 5.0)],
        );
        let (result, _) = run(&g, "A", "B");
        assert_eq!(result.distances[&"B".into()], 3.0);
    }

    #[test]
    fn self_loops_never_relax() {
        let g = graph(
            vec![node("A"), node("B")],
            vec![edge("A", "A", 0.0), edge("A", "B", 1.0)],
        );
        let (_, events) = run(&g, "A", "B");
        assert!(!events.iter().any(|e| matches!(
            e,
            TraceEvent::Relax { from, to, .. } if from == to
        )));
    }

    #[test]
    fn ties_break_toward_earliest_declared_node() {
        // B and C both sit at distance 1; B is declared first.
        let g = graph(
            vec![node("A"), node("B"), node("C"), node("D")],
            vec![
                edge("A", "B", 1.0),
                edge("A", "C", 1.0),
                edge("B", "D", 1.0),
                edge("C", "D", 1.0),
            ],
        );
        let (result, events) = run(&g, "A", "D");

        let visits: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Visit { node, .. } => Some(node.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            visits,
            vec![
                NodeId::from("A"),
                NodeId::from("B"),
                NodeId::from("C"),
                NodeId::from("D")
            ]
        );
        // The reported path goes through the tie winner.
        assert_eq!(
            result.path,
            vec![NodeId::from("A"), NodeId::from("B"), NodeId::from("D")]
        );
    }

    #[test]
    fn visit_distances_are_monotonic() {
        let g = pathviz_graph::samples::by_slug("sample").unwrap();
        let (_, events) = run(&g, "A", "F");

        let mut last = 0.0;
        for event in &events {
            if let TraceEvent::Visit { distance, .. } = event {
                assert!(*distance >= last);
                last = *distance;
            }
        }
    }
}
