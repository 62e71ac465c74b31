//! In-process game server and client harness for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use url::Url;

use boardsync_player::infrastructure::testing::fixtures;
use boardsync_player::state::{RenderBoard, TurnCode};
use boardsync_player::{
    ActionProxy, ApiAdapter, ConnectionManager, ConnectionStatus, GameStore, RenderBridge,
    RendererPort, StateFetcher,
};

/// Sent through the push broadcast to make the server close every channel.
const KICK: &str = "__kick__";

pub struct ServerState {
    pub game_state: Mutex<Value>,
    pub game_state_fails: AtomicBool,
    pub moves_response: Mutex<Value>,
    pub move_response: Mutex<Value>,
    pub close_after_open: AtomicBool,
    pushes: broadcast::Sender<String>,

    pub connections_total: AtomicUsize,
    pub active: AtomicUsize,
    pub max_active: AtomicUsize,
    /// When each channel upgrade was accepted, in order
    pub connection_times: Mutex<Vec<Instant>>,
    pub game_state_requests: AtomicUsize,
    pub move_requests: Mutex<Vec<Value>>,
    pub valid_moves_queries: Mutex<Vec<HashMap<String, String>>>,
    pub new_game_requests: AtomicUsize,
}

impl ServerState {
    fn new() -> Self {
        let (pushes, _) = broadcast::channel(64);
        Self {
            game_state: Mutex::new(fixtures::standard_doc_json("white")),
            game_state_fails: AtomicBool::new(false),
            moves_response: Mutex::new(json!({"moves": []})),
            move_response: Mutex::new(json!({"success": true})),
            close_after_open: AtomicBool::new(false),
            pushes,
            connections_total: AtomicUsize::new(0),
            active: AtomicUsize::new(0),
            max_active: AtomicUsize::new(0),
            connection_times: Mutex::new(Vec::new()),
            game_state_requests: AtomicUsize::new(0),
            move_requests: Mutex::new(Vec::new()),
            valid_moves_queries: Mutex::new(Vec::new()),
            new_game_requests: AtomicUsize::new(0),
        }
    }

    fn connection_opened(&self) {
        self.connection_times.lock().unwrap().push(Instant::now());
        self.connections_total.fetch_add(1, Ordering::SeqCst);
        let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(active, Ordering::SeqCst);
    }
}

pub struct FakeServer {
    pub addr: SocketAddr,
    pub state: Arc<ServerState>,
    handle: tokio::task::JoinHandle<()>,
}

impl FakeServer {
    pub async fn spawn() -> Self {
        let state = Arc::new(ServerState::new());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let router = axum::Router::new()
            .route("/ws", get(ws_handler))
            .route("/game_state", get(game_state_handler))
            .route("/valid_moves", get(valid_moves_handler))
            .route("/move", post(move_handler))
            .route("/new_game", post(new_game_handler))
            .with_state(Arc::clone(&state));

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn http_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).unwrap()
    }

    pub fn ws_url(&self) -> Url {
        Url::parse(&format!("ws://{}/ws", self.addr)).unwrap()
    }

    /// Broadcast `text` to every open channel. Returns the receiver count.
    pub fn push(&self, text: impl Into<String>) -> usize {
        self.state.pushes.send(text.into()).unwrap_or(0)
    }

    /// Close every open channel from the server side.
    pub fn kick(&self) -> usize {
        self.push(KICK)
    }

    pub fn set_game_state(&self, doc: Value) {
        *self.state.game_state.lock().unwrap() = doc;
    }

    pub fn active(&self) -> usize {
        self.state.active.load(Ordering::SeqCst)
    }

    pub fn connections_total(&self) -> usize {
        self.state.connections_total.load(Ordering::SeqCst)
    }

    /// Time between each accepted channel and the one before it.
    pub fn reconnect_gaps(&self) -> Vec<Duration> {
        let times = self.state.connection_times.lock().unwrap();
        times.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<ServerState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut pushes = state.pushes.subscribe();
    state.connection_opened();

    if state.close_after_open.load(Ordering::SeqCst) {
        let _ = socket.send(Message::Close(None)).await;
    } else {
        loop {
            tokio::select! {
                push = pushes.recv() => match push {
                    Ok(text) if text == KICK => {
                        let _ = socket.send(Message::Close(None)).await;
                        break;
                    }
                    Ok(text) => {
                        if socket.send(Message::Text(text.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                },
                incoming = socket.recv() => match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                },
            }
        }
    }

    state.active.fetch_sub(1, Ordering::SeqCst);
}

async fn game_state_handler(State(state): State<Arc<ServerState>>) -> Response {
    state.game_state_requests.fetch_add(1, Ordering::SeqCst);
    if state.game_state_fails.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "engine unavailable").into_response();
    }
    let doc = state.game_state.lock().unwrap().clone();
    Json(doc).into_response()
}

async fn valid_moves_handler(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.valid_moves_queries.lock().unwrap().push(params);
    Json(state.moves_response.lock().unwrap().clone())
}

async fn move_handler(State(state): State<Arc<ServerState>>, Json(body): Json<Value>) -> Json<Value> {
    state.move_requests.lock().unwrap().push(body);
    Json(state.move_response.lock().unwrap().clone())
}

async fn new_game_handler(State(state): State<Arc<ServerState>>) -> Json<Value> {
    state.new_game_requests.fetch_add(1, Ordering::SeqCst);
    Json(json!({"success": true}))
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Board(RenderBoard),
    Turn(TurnCode),
}

/// Renderer that records every call it receives.
#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn boards(&self) -> Vec<RenderBoard> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RenderEvent::Board(board) => Some(board),
                RenderEvent::Turn(_) => None,
            })
            .collect()
    }
}

impl RendererPort for RecordingRenderer {
    fn render_board(&self, board: &RenderBoard) {
        self.events.lock().unwrap().push(RenderEvent::Board(board.clone()));
    }

    fn update_turn_display(&self, turn: TurnCode) {
        self.events.lock().unwrap().push(RenderEvent::Turn(turn));
    }
}

/// A fully wired client pointed at a [`FakeServer`].
pub struct Harness {
    pub server: FakeServer,
    pub renderer: Arc<RecordingRenderer>,
    pub store: Arc<GameStore>,
    pub connection: ConnectionManager,
    pub actions: ActionProxy,
    pub statuses: Arc<Mutex<Vec<ConnectionStatus>>>,
}

impl Harness {
    pub async fn new(reconnect_delay: Duration) -> Self {
        Self::with_server(FakeServer::spawn().await, reconnect_delay)
    }

    pub fn with_server(server: FakeServer, reconnect_delay: Duration) -> Self {
        let api = Arc::new(ApiAdapter::new(server.http_url(), Duration::from_secs(2)).unwrap());
        let renderer = Arc::new(RecordingRenderer::default());
        let bridge = Arc::new(RenderBridge::with_renderer(renderer.clone()));
        let store = Arc::new(GameStore::new(bridge));

        let connection = ConnectionManager::new(
            server.ws_url(),
            StateFetcher::new(api.clone()),
            Arc::clone(&store),
            reconnect_delay,
        );
        let statuses = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&statuses);
        connection.on_status_change(move |status| sink.lock().unwrap().push(status));

        Self {
            server,
            renderer,
            store,
            connection,
            actions: ActionProxy::new(api),
            statuses,
        }
    }

    /// Connect and wait until the channel is open and the initial pull landed.
    pub async fn connect_and_bootstrap(&self) {
        assert!(self.connection.connect());
        wait_until("initial state", || self.store.version() >= 1).await;
        wait_until("server-side channel", || self.server.active() == 1).await;
    }

    pub fn statuses(&self) -> Vec<ConnectionStatus> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn token(&self, row: usize, col: usize) -> String {
        let board = self.store.bridge().snapshot().expect("a published board");
        board.token(row, col).unwrap().as_str().to_string()
    }
}

/// Poll `condition` until it holds, panicking after five seconds.
pub async fn wait_until<F>(what: &str, condition: F)
where
    F: Fn() -> bool,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    while !condition() {
        if Instant::now() > deadline {
            panic!("timed out waiting for {what}");
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
