//! Pathviz Visualization Server
//!
//! Load a graph, run a search, and serve the visualization frontend.
//!
//! Usage: pathviz-vis [sample-slug-or-path] [start] [end] [port]

use std::env;

use pathviz_graph::{samples, Graph, NodeId};
use pathviz_vis::VisServer;

fn load_graph(source: &str) -> Result<Graph, Box<dyn std::error::Error>> {
    if let Some(graph) = samples::by_slug(source) {
        return Ok(graph);
    }
    Ok(pathviz_graph::file::from_path(source)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let source = args.get(1).map(String::as_str).unwrap_or("sample");
    let graph = load_graph(source)?;

    let start: NodeId = args
        .get(2)
        .map(|s| NodeId::from(s.as_str()))
        .or_else(|| graph.nodes.first().map(|n| n.id.clone()))
        .ok_or("graph has no nodes")?;
    let end: NodeId = args
        .get(3)
        .map(|s| NodeId::from(s.as_str()))
        .or_else(|| graph.nodes.last().map(|n| n.id.clone()))
        .ok_or("graph has no nodes")?;

    let port: u16 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(3000);

    println!("Pathviz Shortest-Path Visualizer");
    println!("================================");
    println!();
    println!(
        "Graph: {} ({} nodes, {} edges)",
        graph.metadata.name.as_deref().unwrap_or(source),
        graph.node_count(),
        graph.edge_count()
    );
    println!("Run: {} -> {}", start, end);
    println!();

    let server = VisServer::new(graph);
    server.start_run(start, end).await?;

    println!("Starting visualization server on http://localhost:{}", port);
    println!("Open in browser to step through the search.");
    println!();

    server.serve(port).await?;

    Ok(())
}
