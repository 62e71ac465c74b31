pub mod board_translator;
pub mod http_client;
pub mod messaging;
pub mod state_converters;
pub mod terminal_renderer;
pub mod websocket;

pub mod testing;

pub use http_client::ApiAdapter;
pub use messaging::{ConnectionStatus, ConnectionStatusObserver};
pub use terminal_renderer::TerminalRenderer;
pub use websocket::ConnectionManager;
