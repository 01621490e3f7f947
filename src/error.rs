#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load Leptos configuration: {0}")]
    Config(String),
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
