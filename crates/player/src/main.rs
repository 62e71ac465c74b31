//! boardsync Player - terminal front end.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boardsync_player::commands::{Command, HELP};
use boardsync_player::infrastructure::TerminalRenderer;
use boardsync_player::{
    ActionProxy, ApiAdapter, ClientConfig, ConnectionManager, GameClient, GameStore,
    RenderBridge, StateFetcher,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boardsync_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting boardsync Player");

    let config = ClientConfig::from_env()?;
    let ws_url = config.ws_url()?;
    tracing::info!(server = %config.server_url, %ws_url, "Loaded configuration");

    // HTTP
    let api = Arc::new(
        ApiAdapter::new(config.server_url.clone(), config.request_timeout)
            .context("failed to set up the HTTP client")?,
    );

    // Presentation
    let bridge = Arc::new(RenderBridge::with_renderer(Arc::new(
        TerminalRenderer::stdout(),
    )));
    let store = Arc::new(GameStore::new(bridge));

    // Services
    let actions = ActionProxy::new(api.clone());
    let connection = ConnectionManager::new(
        ws_url,
        StateFetcher::new(api),
        store,
        config.reconnect_delay,
    );
    connection.on_status_change(|status| eprintln!("[{status}]"));
    connection.connect();

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Moves(square) => match actions.select_square(square).await {
                Some(moves) if moves.is_empty() => println!("no legal moves from {square}"),
                Some(moves) => {
                    let targets: Vec<String> = moves
                        .iter()
                        .map(|m| match m.special {
                            Some(special) => format!("{} ({special:?})", m.to),
                            None => m.to.to_string(),
                        })
                        .collect();
                    println!("legal moves from {square}: {}", targets.join(", "));
                }
                None => tracing::debug!(%square, "Superseded selection dropped"),
            },
            Command::Move {
                from,
                to,
                promotion,
            } => {
                if actions.submit_move(from, to, promotion).await {
                    println!("move sent; waiting for the server's update");
                } else {
                    println!("move not accepted");
                }
            }
            Command::NewGame => {
                if !actions.request_new_game().await {
                    println!("new game not accepted");
                }
            }
            Command::Refresh => {
                if !connection.refresh().await {
                    println!("refresh failed; keeping the current board");
                }
            }
            Command::Status => println!("{}", connection.status()),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    connection.shutdown().await;
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
