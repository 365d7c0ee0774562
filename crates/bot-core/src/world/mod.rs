//! Server snapshot model and read-only queries over it.

pub mod game_state;
pub mod map;

pub use game_state::{Coordinates, GameState, Position};
pub use map::{Level, Map, MapObject, Monster, find_monster, find_stairs};
