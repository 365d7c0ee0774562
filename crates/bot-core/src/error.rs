use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures talking to the game server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, TLS, timeout, ...).
    #[error("transport error")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status. `body` is whatever it
    /// sent back, usually a JSON error description.
    #[error("server rejected request with status {status}: {body}")]
    Server { status: u16, body: String },

    #[error("failed to decode server response")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// True for errors the server reported about an individual request.
    ///
    /// A rejected command (e.g. targeting a monster that already moved) is of
    /// this kind; the bot logs it and carries on with the next tick.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, ApiError::Server { .. })
    }
}
