//! Core of the Dungeons and Trolls bot: snapshot model, decision policy, and
//! the HTTP client for the game server.
//!
//! The runner binary owns the loop; everything here is one tick at a time.

pub mod agent;
pub mod error;
pub mod http;
pub mod player;
pub mod world;
