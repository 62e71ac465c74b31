//! Push-channel socket session using tokio-tungstenite

use anyhow::{Context, Result};
use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Server sent a close frame or the stream ended
    Closed,
    /// Transport error while reading
    Failed(String),
    /// Shutdown was requested locally
    Cancelled,
}

/// What one read from the channel produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Text(String),
    End(SessionEnd),
}

/// One open push channel. Replaced, never reused, on every reconnect.
pub struct PushChannel {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl PushChannel {
    pub async fn open(url: &str) -> Result<Self> {
        let (stream, _response) = connect_async(url)
            .await
            .with_context(|| format!("failed to connect to {url}"))?;
        Ok(Self { stream })
    }

    /// Wait for the next text frame, or for the channel to end.
    ///
    /// Cancel safe: dropping the future before it resolves loses no frame.
    pub async fn next_frame(&mut self) -> Frame {
        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => return Frame::Text(text),
                Some(Ok(Message::Binary(bytes))) => match String::from_utf8(bytes) {
                    Ok(text) => return Frame::Text(text),
                    Err(e) => tracing::warn!(
                        len = e.as_bytes().len(),
                        "Discarding non-UTF-8 binary frame"
                    ),
                },
                Some(Ok(Message::Close(frame))) => {
                    tracing::info!(?frame, "Server closed push channel");
                    return Frame::End(SessionEnd::Closed);
                }
                // Pongs are queued by tungstenite and flushed on the next read
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::error!("Push channel error: {}", e);
                    return Frame::End(SessionEnd::Failed(e.to_string()));
                }
                None => return Frame::End(SessionEnd::Closed),
            }
        }
    }

    /// Close the channel from our side.
    pub async fn close(mut self) {
        if let Err(e) = self.stream.close(None).await {
            tracing::debug!("Error closing push channel: {}", e);
        }
    }
}
