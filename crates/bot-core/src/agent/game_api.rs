use std::future::Future;
use std::pin::Pin;

use super::wire::Command;
use crate::error::Result;
use crate::world::GameState;

/// Server acknowledgement of a command or respawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    pub status: u16,
}

/// Boundary the bot uses to read game state and act on it.
///
/// [`crate::http::HttpGameApi`] talks to the real server; tests plug in fakes.
pub trait GameApi: Send + Sync {
    fn fetch_state<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<GameState>> + Send + 'a>>;

    fn submit<'a>(
        &'a self,
        command: Command,
    ) -> Pin<Box<dyn Future<Output = Result<Ack>> + Send + 'a>>;

    fn respawn<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Ack>> + Send + 'a>>;
}
