//! Pathviz Graph Model
//!
//! User-authored graphs for shortest-path visualization: nodes with
//! normalized 2D coordinates and directed, weighted edges.
//!
//! # Validated Graphs
//!
//! The pathfinding core downstream of this crate assumes a structurally
//! valid graph and never re-checks it. This crate is where that guarantee
//! is produced: [`validate`] enforces unique node ids, a restricted id
//! charset, resolvable edge endpoints, finite non-negative weights, and
//! in-bounds coordinates.
//!
//! # Directedness
//!
//! `metadata.directed` records authoring intent only. No implicit edge
//! mirroring happens anywhere: an undirected graph carries both
//! directions as explicit edge entries, inserted by the builder or the
//! [`generate`] module.
//!
//! # File Format
//!
//! With the `serde` feature, the `file` module reads and writes the
//! version 1 JSON graph format; the [`samples`] module provides the
//! built-in example catalog either way.

mod model;
mod query;
mod validate;

pub mod generate;
pub mod samples;

#[cfg(feature = "serde")]
pub mod file;

pub use model::{Graph, GraphEdge, GraphMetadata, GraphNode, NodeId};
pub use query::{bidirectional_pairs, is_edge_duplicate, is_node_duplicate, is_self_loop};
pub use validate::{validate, ValidationError};

/// Lower bound of the normalized coordinate range.
pub const COORD_MIN: f64 = 0.0;

/// Upper bound of the normalized coordinate range.
pub const COORD_MAX: f64 = 1.0;
