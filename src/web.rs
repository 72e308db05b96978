//! Headless HTTP surface: serves the current snapshot, forwards player
//! intents into the engine, and streams state changes over SSE. Rendering
//! lives entirely on the other side of this boundary.

use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::Result;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::broadcast};
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

use crate::{
    buildings::Building,
    engine::Engine,
    world::{ColonySnapshot, MissionKind, Role},
};

pub struct WebServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
struct AppState {
    engine: Arc<Mutex<Engine>>,
    broadcaster: broadcast::Sender<String>,
}

impl AppState {
    fn broadcast(&self, snapshot: &ColonySnapshot) {
        if let Ok(payload) = serde_json::to_string(snapshot) {
            let _ = self.broadcaster.send(payload);
        }
    }
}

pub async fn run(engine: Engine, config: WebServerConfig) -> Result<()> {
    let scenario_name = engine.scenario_name().to_string();
    let (tx, _) = broadcast::channel::<String>(256);
    let state = AppState {
        engine: Arc::new(Mutex::new(engine)),
        broadcaster: tx,
    };

    let router = Router::new()
        .route("/api/state", get(current_state))
        .route("/api/build", post(build))
        .route("/api/select", post(select))
        .route("/api/research", post(research))
        .route("/api/recruit", post(recruit))
        .route("/api/mission", post(mission))
        .route("/api/turn", post(turn))
        .route("/api/events", get(stream_events))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    println!(
        "Exodus colony '{}' live at http://{} (Ctrl+C to stop)",
        scenario_name, addr
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    println!("Shutting down colony server...");
}

#[derive(Deserialize)]
struct BuildIntent {
    row: usize,
    col: usize,
    building: String,
}

#[derive(Deserialize)]
struct SelectIntent {
    building: String,
}

#[derive(Deserialize)]
struct ResearchIntent {
    tech: String,
}

#[derive(Deserialize)]
struct RecruitIntent {
    role: String,
}

#[derive(Deserialize)]
struct MissionIntent {
    kind: String,
}

async fn current_state(State(state): State<AppState>) -> Json<ColonySnapshot> {
    let engine = state.engine.lock().expect("engine lock poisoned");
    Json(engine.snapshot())
}

async fn build(
    State(state): State<AppState>,
    Json(intent): Json<BuildIntent>,
) -> Json<ColonySnapshot> {
    let snapshot = {
        let mut engine = state.engine.lock().expect("engine lock poisoned");
        match Building::from_id(&intent.building) {
            Some(kind) => engine.place_building(intent.row, intent.col, kind),
            None => engine.colony_mut().log("Unknown building type!"),
        }
        engine.snapshot()
    };
    state.broadcast(&snapshot);
    Json(snapshot)
}

async fn select(
    State(state): State<AppState>,
    Json(intent): Json<SelectIntent>,
) -> Json<ColonySnapshot> {
    let mut engine = state.engine.lock().expect("engine lock poisoned");
    if let Some(kind) = Building::from_id(&intent.building) {
        engine.select_building(kind);
    }
    Json(engine.snapshot())
}

async fn research(
    State(state): State<AppState>,
    Json(intent): Json<ResearchIntent>,
) -> Json<ColonySnapshot> {
    let snapshot = {
        let mut engine = state.engine.lock().expect("engine lock poisoned");
        engine.research_tech(&intent.tech);
        engine.snapshot()
    };
    state.broadcast(&snapshot);
    Json(snapshot)
}

async fn recruit(
    State(state): State<AppState>,
    Json(intent): Json<RecruitIntent>,
) -> Json<ColonySnapshot> {
    let snapshot = {
        let mut engine = state.engine.lock().expect("engine lock poisoned");
        match Role::from_id(&intent.role) {
            Some(role) => engine.add_colonist(role),
            None => engine.colony_mut().log("Unknown colonist role!"),
        }
        engine.snapshot()
    };
    state.broadcast(&snapshot);
    Json(snapshot)
}

async fn mission(
    State(state): State<AppState>,
    Json(intent): Json<MissionIntent>,
) -> Json<ColonySnapshot> {
    let snapshot = {
        let mut engine = state.engine.lock().expect("engine lock poisoned");
        match MissionKind::from_id(&intent.kind) {
            Some(kind) => engine.start_mission(kind),
            None => engine.colony_mut().log("Unknown mission type!"),
        }
        engine.snapshot()
    };
    state.broadcast(&snapshot);
    Json(snapshot)
}

async fn turn(State(state): State<AppState>) -> Json<ColonySnapshot> {
    let snapshot = {
        let mut engine = state.engine.lock().expect("engine lock poisoned");
        if let Err(err) = engine.advance_turn() {
            eprintln!("[web] Turn failed: {err:?}");
        }
        engine.snapshot()
    };
    state.broadcast(&snapshot);
    Json(snapshot)
}

async fn stream_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.broadcaster.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|msg| match msg {
        Ok(payload) => Some(Ok(Event::default().data(payload))),
        Err(_) => None,
    });
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(2))
            .text("keep-alive"),
    )
}
