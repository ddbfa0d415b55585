//! JSON graph file format (version 1).
//!
//! Loading always validates: a [`Graph`] obtained from this module
//! satisfies every rule in [`crate::validate`], which is the guarantee
//! the pathfinding core relies on.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Graph, GraphEdge, GraphMetadata, GraphNode};
use crate::validate::{validate, ValidationError};

/// Version of the on-disk schema this module reads and writes.
pub const SCHEMA_VERSION: u32 = 1;

/// The on-disk shape of a graph file.
///
/// Identical to [`Graph`] field for field; kept as a distinct type so an
/// unvalidated parse can never be passed where a resolved graph is
/// expected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphFile {
    pub metadata: GraphMetadata,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphFile {
    /// Turn the file into a runtime graph without checking it.
    ///
    /// Callers outside this module should prefer [`from_json_str`] or
    /// [`from_path`], which validate first.
    pub fn resolve(self) -> Graph {
        Graph {
            metadata: self.metadata,
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

impl From<Graph> for GraphFile {
    fn from(graph: Graph) -> Self {
        Self {
            metadata: graph.metadata,
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}

/// Errors from loading or saving a graph file.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be read or written.
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),

    /// The contents are not valid JSON for the version 1 schema.
    #[error("failed to parse graph file: {0}")]
    Json(#[from] serde_json::Error),

    /// The parsed graph broke one or more structural rules.
    #[error("graph file failed validation ({} violations)", .0.len())]
    Invalid(Vec<ValidationError>),
}

/// Parse, validate, and resolve a graph from a JSON string.
pub fn from_json_str(json: &str) -> Result<Graph, FileError> {
    let file: GraphFile = serde_json::from_str(json)?;
    let graph = file.resolve();
    validate(&graph).map_err(FileError::Invalid)?;
    Ok(graph)
}

/// Load, validate, and resolve a graph from a file on disk.
pub fn from_path(path: impl AsRef<Path>) -> Result<Graph, FileError> {
    let json = std::fs::read_to_string(path)?;
    from_json_str(&json)
}

/// Serialize a graph back into version 1 JSON.
pub fn to_json_string(graph: &Graph) -> Result<String, FileError> {
    Ok(serde_json::to_string_pretty(&GraphFile::from(
        graph.clone(),
    ))?)
}
