//! Connection Manager - owns the push-channel lifecycle
//!
//! One spawned task drives the lifecycle state machine: open the channel,
//! prime state with a pull, apply pushes in arrival order, and after any
//! close wait the fixed delay and try again. That task is the only writer of
//! the game store: a manual `refresh` is queued to it and served between
//! frames (or during the retry wait), so a refreshed snapshot can never land
//! out of order with a push. Only when no task is running does `refresh`
//! pull and apply on the caller's task.

use std::sync::atomic::AtomicU8;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::application::services::StateFetcher;
use crate::infrastructure::messaging::{
    set_connection_status, ConnectionStatus, ConnectionStatusObserver,
};
use crate::infrastructure::state_converters::game_state_from_doc;
use crate::state::GameStore;

use super::client::{Frame, PushChannel, SessionEnd};
use super::core::{LifecycleEvent, LifecycleState, RetrySchedule};
use super::shared::{parse_server_message, ParsedServerMessage};

type StatusCallback = Arc<dyn Fn(ConnectionStatus) + Send + Sync>;

/// A queued manual refresh; answered with whether a state was applied.
type RefreshRequest = oneshot::Sender<bool>;

/// Cheap to clone; all clones drive the same channel.
#[derive(Clone)]
pub struct ConnectionManager {
    inner: Arc<Inner>,
}

struct Inner {
    ws_url: Url,
    reconnect_delay: Duration,
    fetcher: StateFetcher,
    store: Arc<GameStore>,
    status: Arc<AtomicU8>,
    lifecycle: Mutex<LifecycleState>,
    on_status_change: RwLock<Option<StatusCallback>>,
    cancel: Mutex<CancellationToken>,
    task: Mutex<Option<JoinHandle<()>>>,
    refresh_requests: Mutex<Option<mpsc::UnboundedSender<RefreshRequest>>>,
}

impl ConnectionManager {
    pub fn new(
        ws_url: Url,
        fetcher: StateFetcher,
        store: Arc<GameStore>,
        reconnect_delay: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                ws_url,
                reconnect_delay,
                fetcher,
                store,
                status: Arc::new(AtomicU8::new(ConnectionStatus::Disconnected.to_u8())),
                lifecycle: Mutex::new(LifecycleState::Idle),
                on_status_change: RwLock::new(None),
                cancel: Mutex::new(CancellationToken::new()),
                task: Mutex::new(None),
                refresh_requests: Mutex::new(None),
            }),
        }
    }

    /// Register the status indicator callback. Invoked on real transitions only.
    pub fn on_status_change<F>(&self, callback: F)
    where
        F: Fn(ConnectionStatus) + Send + Sync + 'static,
    {
        let mut slot = self
            .inner
            .on_status_change
            .write()
            .unwrap_or_else(|e| e.into_inner());
        *slot = Some(Arc::new(callback));
    }

    pub fn status_observer(&self) -> ConnectionStatusObserver {
        ConnectionStatusObserver::new(Arc::clone(&self.inner.status))
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status_observer().status()
    }

    pub fn lifecycle(&self) -> LifecycleState {
        *self.inner.lifecycle.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn store(&self) -> &Arc<GameStore> {
        &self.inner.store
    }

    /// Start the lifecycle task.
    ///
    /// Returns `false` without doing anything when a lifecycle is already
    /// running (connecting, connected, or waiting to retry).
    pub fn connect(&self) -> bool {
        if !self.inner.advance(LifecycleEvent::ConnectRequested) {
            tracing::debug!(state = %self.lifecycle(), "connect() ignored; lifecycle already running");
            return false;
        }

        let cancel = CancellationToken::new();
        {
            let mut slot = self.inner.cancel.lock().unwrap_or_else(|e| e.into_inner());
            *slot = cancel.clone();
        }
        let (requests_tx, requests) = mpsc::unbounded_channel();
        {
            let mut slot = self
                .inner
                .refresh_requests
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            *slot = Some(requests_tx);
        }

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move { inner.run(cancel, requests).await });
        let mut task = self.inner.task.lock().unwrap_or_else(|e| e.into_inner());
        *task = Some(handle);
        true
    }

    /// Stop the lifecycle task and wait for it to exit. No further retries.
    pub async fn shutdown(&self) {
        self.inner
            .cancel
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .cancel();

        let handle = self
            .inner
            .task
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::error!("Connection task ended abnormally: {}", e);
            }
        }
        self.inner
            .refresh_requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        self.inner.advance(LifecycleEvent::Shutdown);
        tracing::info!("Connection manager shut down");
    }

    /// Pull the current state and apply it. Returns whether a state was applied.
    ///
    /// While the lifecycle task runs, the pull is queued to it and this waits
    /// for the answer. A refresh cut short by `shutdown` returns `false`.
    pub async fn refresh(&self) -> bool {
        let requests = self
            .inner
            .refresh_requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        if let Some(requests) = requests {
            let (reply, answer) = oneshot::channel();
            if requests.send(reply).is_ok() {
                return answer.await.unwrap_or(false);
            }
        }

        // No lifecycle task, so nothing else writes the store
        self.inner.pull_and_apply().await
    }
}

impl Inner {
    /// Apply `event` to the lifecycle. Returns `false` if it did not apply.
    fn advance(&self, event: LifecycleEvent) -> bool {
        let next = {
            let mut lifecycle = self.lifecycle.lock().unwrap_or_else(|e| e.into_inner());
            match lifecycle.transition(event) {
                Some(next) => {
                    *lifecycle = next;
                    next
                }
                None => return false,
            }
        };
        self.publish_status(next.status());
        true
    }

    fn publish_status(&self, status: ConnectionStatus) {
        let previous = set_connection_status(&self.status, status);
        if previous == status {
            return;
        }
        tracing::info!(from = %previous, to = %status, "Connection status changed");

        let callback = self
            .on_status_change
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(callback) = callback {
            callback(status);
        }
    }

    async fn run(
        &self,
        cancel: CancellationToken,
        mut requests: mpsc::UnboundedReceiver<RefreshRequest>,
    ) {
        let url = self.ws_url.to_string();
        let mut retry = RetrySchedule::new(self.reconnect_delay);

        'lifecycle: loop {
            let opened = tokio::select! {
                _ = cancel.cancelled() => break,
                opened = PushChannel::open(&url) => opened,
            };

            match opened {
                Ok(channel) => {
                    tracing::info!(%url, "Push channel connected");
                    retry.reset();
                    self.advance(LifecycleEvent::Opened);

                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = self.pull_and_apply() => {}
                    }

                    match self.serve(channel, &cancel, &mut requests).await {
                        SessionEnd::Cancelled => break,
                        SessionEnd::Closed => tracing::info!("Push channel closed"),
                        SessionEnd::Failed(reason) => {
                            tracing::warn!(%reason, "Push channel failed")
                        }
                    }
                }
                Err(e) => tracing::warn!("Failed to open push channel: {:#}", e),
            }

            self.advance(LifecycleEvent::Closed);
            let delay = retry.next_delay_and_advance();
            tracing::info!(
                attempt = retry.attempts(),
                delay_ms = delay.as_millis() as u64,
                "Scheduling reconnection"
            );

            let wait = tokio::time::sleep(delay);
            tokio::pin!(wait);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break 'lifecycle,
                    _ = &mut wait => break,
                    Some(reply) = requests.recv() => self.answer_refresh(reply, &cancel).await,
                }
            }
            self.advance(LifecycleEvent::RetryDue);
        }

        tracing::debug!("Connection loop exited");
    }

    /// Apply pushes in arrival order until the channel ends, serving queued
    /// refreshes between frames.
    async fn serve(
        &self,
        mut channel: PushChannel,
        cancel: &CancellationToken,
        requests: &mut mpsc::UnboundedReceiver<RefreshRequest>,
    ) -> SessionEnd {
        loop {
            let frame = tokio::select! {
                _ = cancel.cancelled() => break,
                Some(reply) = requests.recv() => {
                    self.answer_refresh(reply, cancel).await;
                    continue;
                }
                frame = channel.next_frame() => frame,
            };

            match frame {
                Frame::Text(text) => self.handle_text(&text),
                Frame::End(end) => return end,
            }
        }

        channel.close().await;
        SessionEnd::Cancelled
    }

    async fn answer_refresh(&self, reply: RefreshRequest, cancel: &CancellationToken) {
        let applied = tokio::select! {
            _ = cancel.cancelled() => return,
            applied = self.pull_and_apply() => applied,
        };
        // The caller may have given up waiting
        let _ = reply.send(applied);
    }

    async fn pull_and_apply(&self) -> bool {
        match self.fetcher.fetch_state().await {
            Some(state) => {
                self.store.apply(state);
                true
            }
            None => false,
        }
    }

    /// Handle one inbound text frame. Failures are logged and discarded.
    fn handle_text(&self, text: &str) {
        let doc = match parse_server_message(text) {
            Ok(ParsedServerMessage::GameState(doc)) => doc,
            Ok(ParsedServerMessage::Ignored) => {
                tracing::debug!("Ignoring server message of unhandled type");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, len = text.len(), "Discarding malformed push message");
                return;
            }
        };

        match game_state_from_doc(*doc) {
            Ok(state) => self.store.apply(state),
            Err(e) => tracing::warn!(error = %e, "Discarding push with invalid game state"),
        }
    }
}
