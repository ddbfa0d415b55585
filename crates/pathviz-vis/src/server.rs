//! Axum web server exposing snapshots and playback control to a renderer.

use std::sync::Arc;

use tokio::sync::RwLock;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use pathviz_engine::{trace_algorithm, Dijkstra, Error as EngineError};
use pathviz_graph::{samples, Graph, NodeId};

use crate::playback::{Playback, PlaybackSpeed, PlaybackStatus};
use crate::state::VisualizationState;
use crate::stepper::TraceStepper;

/// One active run: a trace and its playback, bound to a start/end pair.
///
/// Replaced wholesale when the endpoints change; traces and steppers are
/// never reused across runs.
struct Run {
    start: NodeId,
    end: NodeId,
    path: Vec<NodeId>,
    total_distance: Option<f64>,
    playback: Playback,
}

/// Shared application state.
pub struct AppState {
    graph: Graph,
    run: RwLock<Option<Run>>,
}

impl AppState {
    fn new(graph: Graph) -> Self {
        Self {
            graph,
            run: RwLock::new(None),
        }
    }

    fn build_run(&self, start: NodeId, end: NodeId) -> Result<Run, EngineError> {
        let trace = trace_algorithm(&Dijkstra, &self.graph, &start, &end)?;
        let total_distance = trace.result.distance_to(&end);
        tracing::info!(
            start = %start,
            end = %end,
            events = trace.len(),
            reachable = trace.result.is_reachable(),
            "new run"
        );
        Ok(Run {
            start,
            end,
            path: trace.result.path.clone(),
            total_distance,
            playback: Playback::new(TraceStepper::new(trace.events)),
        })
    }
}

/// Visualization server.
pub struct VisServer {
    state: Arc<AppState>,
}

impl VisServer {
    /// Create a server for a validated graph, with no run yet.
    pub fn new(graph: Graph) -> Self {
        Self {
            state: Arc::new(AppState::new(graph)),
        }
    }

    /// Create an initial run before serving, failing fast on bad ids.
    pub async fn start_run(&self, start: NodeId, end: NodeId) -> Result<(), EngineError> {
        let run = self.state.build_run(start, end)?;
        *self.state.run.write().await = Some(run);
        Ok(())
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            // Demo page exercising the snapshot contract
            .route("/", get(index_handler))
            // API routes
            .route("/api/status", get(status_handler))
            .route("/api/graph", get(graph_handler))
            .route("/api/samples", get(samples_handler))
            .route("/api/run", get(current_run_handler).post(run_handler))
            .route("/api/snapshot", get(snapshot_handler))
            .route("/api/playback", get(playback_status_handler))
            .route("/api/playback/play", post(play_handler))
            .route("/api/playback/pause", post(pause_handler))
            .route("/api/playback/stop", post(stop_handler))
            .route("/api/playback/seek", post(seek_handler))
            .route("/api/playback/speed", post(speed_handler))
            .route("/api/playback/step", post(step_handler))
            .route("/api/playback/tick", post(tick_handler))
            // WebSocket for command-driven updates
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server on the given port.
    pub async fn serve(self, port: u16) -> Result<(), std::io::Error> {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("visualization server running on http://localhost:{}", port);
        axum::serve(listener, self.router()).await
    }
}

/// Serve the embedded demo page.
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// Server status response.
#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    nodes: usize,
    edges: usize,
    has_run: bool,
}

async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let run = state.run.read().await;
    Json(StatusResponse {
        status: "ok",
        nodes: state.graph.node_count(),
        edges: state.graph.edge_count(),
        has_run: run.is_some(),
    })
}

async fn graph_handler(State(state): State<Arc<AppState>>) -> Json<Graph> {
    Json(state.graph.clone())
}

async fn samples_handler() -> Json<Vec<samples::SampleInfo>> {
    Json(samples::catalog())
}

#[derive(Deserialize)]
struct RunRequest {
    start: NodeId,
    end: NodeId,
}

/// The definitive answer for a run, available ahead of replay. The
/// start/end markers a renderer decorates come from here, not from the
/// snapshot.
#[derive(Serialize)]
struct RunResponse {
    start: NodeId,
    end: NodeId,
    path: Vec<NodeId>,
    total_distance: Option<f64>,
    total_steps: usize,
}

impl From<&Run> for RunResponse {
    fn from(run: &Run) -> Self {
        Self {
            start: run.start.clone(),
            end: run.end.clone(),
            path: run.path.clone(),
            total_distance: run.total_distance,
            total_steps: run.playback.total_steps(),
        }
    }
}

async fn current_run_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RunResponse>, StatusCode> {
    let run = state.run.read().await;
    run.as_ref()
        .map(|run| Json(RunResponse::from(run)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn run_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RunRequest>,
) -> Result<Json<RunResponse>, (StatusCode, String)> {
    let run = state
        .build_run(req.start, req.end)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let response = RunResponse::from(&run);
    *state.run.write().await = Some(run);
    Ok(Json(response))
}

async fn snapshot_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VisualizationState>, StatusCode> {
    let run = state.run.read().await;
    match run.as_ref() {
        Some(run) => Ok(Json(run.playback.snapshot().clone())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn playback_status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlaybackStatus>, StatusCode> {
    let run = state.run.read().await;
    run.as_ref()
        .map(|run| Json(PlaybackStatus::from(&run.playback)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Apply a playback mutation and answer with the fresh status.
async fn with_playback(
    state: &Arc<AppState>,
    mutate: impl FnOnce(&mut Playback),
) -> Result<Json<PlaybackStatus>, StatusCode> {
    let mut run = state.run.write().await;
    match run.as_mut() {
        Some(run) => {
            mutate(&mut run.playback);
            Ok(Json(PlaybackStatus::from(&run.playback)))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn play_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlaybackStatus>, StatusCode> {
    with_playback(&state, |p| p.play()).await
}

async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlaybackStatus>, StatusCode> {
    with_playback(&state, |p| p.pause()).await
}

async fn stop_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlaybackStatus>, StatusCode> {
    with_playback(&state, |p| p.stop()).await
}

#[derive(Deserialize)]
struct SeekRequest {
    step: usize,
}

async fn seek_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeekRequest>,
) -> Result<Json<PlaybackStatus>, StatusCode> {
    with_playback(&state, |p| p.seek(req.step)).await
}

#[derive(Deserialize)]
struct SpeedRequest {
    speed: PlaybackSpeed,
}

async fn speed_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeedRequest>,
) -> Result<Json<PlaybackStatus>, StatusCode> {
    with_playback(&state, |p| p.set_speed(req.speed)).await
}

async fn step_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlaybackStatus>, StatusCode> {
    with_playback(&state, |p| {
        p.step_forward();
    })
    .await
}

async fn tick_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlaybackStatus>, StatusCode> {
    with_playback(&state, |p| p.tick()).await
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    // Send the current snapshot, if a run exists.
    {
        let run = state.run.read().await;
        if let Some(run) = run.as_ref() {
            if let Ok(json) =
                serde_json::to_string(&WsResponse::Snapshot(run.playback.snapshot().clone()))
            {
                let _ = socket.send(Message::Text(json.into())).await;
            }
        }
    }

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => match serde_json::from_str::<WsCommand>(&text) {
                Ok(cmd) => {
                    let response = handle_ws_command(&state, cmd).await;
                    if let Ok(json) = serde_json::to_string(&response) {
                        let _ = socket.send(Message::Text(json.into())).await;
                    }
                }
                Err(e) => {
                    tracing::debug!("ignoring malformed ws command: {}", e);
                }
            },
            Message::Close(_) => break,
            _ => {}
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsCommand {
    GetSnapshot,
    GetStatus,
    Run { start: NodeId, end: NodeId },
    Seek { step: usize },
    Play,
    Pause,
    Step,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsResponse {
    Snapshot(VisualizationState),
    Status(PlaybackStatus),
    Error { message: String },
}

const NO_RUN: &str = "no active run; send a run command first";

async fn handle_ws_command(state: &Arc<AppState>, cmd: WsCommand) -> WsResponse {
    match cmd {
        WsCommand::GetSnapshot => {
            let run = state.run.read().await;
            match run.as_ref() {
                Some(run) => WsResponse::Snapshot(run.playback.snapshot().clone()),
                None => WsResponse::Error {
                    message: NO_RUN.into(),
                },
            }
        }
        WsCommand::GetStatus => {
            let run = state.run.read().await;
            match run.as_ref() {
                Some(run) => WsResponse::Status(PlaybackStatus::from(&run.playback)),
                None => WsResponse::Error {
                    message: NO_RUN.into(),
                },
            }
        }
        WsCommand::Run { start, end } => match state.build_run(start, end) {
            Ok(run) => {
                let status = PlaybackStatus::from(&run.playback);
                *state.run.write().await = Some(run);
                WsResponse::Status(status)
            }
            Err(e) => WsResponse::Error {
                message: e.to_string(),
            },
        },
        WsCommand::Seek { step } => ws_mutate(state, |p| p.seek(step)).await,
        WsCommand::Play => ws_mutate(state, |p| p.play()).await,
        WsCommand::Pause => ws_mutate(state, |p| p.pause()).await,
        WsCommand::Step => {
            ws_mutate(state, |p| {
                p.step_forward();
            })
            .await
        }
    }
}

async fn ws_mutate(state: &Arc<AppState>, mutate: impl FnOnce(&mut Playback)) -> WsResponse {
    let mut run = state.run.write().await;
    match run.as_mut() {
        Some(run) => {
            mutate(&mut run.playback);
            WsResponse::Status(PlaybackStatus::from(&run.playback))
        }
        None => WsResponse::Error {
            message: NO_RUN.into(),
        },
    }
}
