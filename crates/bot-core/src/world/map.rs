use serde::{Deserialize, Serialize};

use super::game_state::{Coordinates, GameState};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Monster {
    pub id: String,
    pub name: String,
}

/// Everything standing on one tile.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MapObject {
    pub position: Coordinates,
    pub is_stairs: bool,
    /// Non-empty means the tile has a hostile occupant.
    pub monsters: Vec<Monster>,
}

impl MapObject {
    pub fn has_monsters(&self) -> bool {
        !self.monsters.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Level {
    pub level: i32,
    pub objects: Vec<MapObject>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Map {
    pub levels: Vec<Level>,
}

/// First object on `level` (server order) that has monsters on it.
pub fn find_monster(state: &GameState, level: i32) -> Option<&MapObject> {
    state
        .level(level)?
        .objects
        .iter()
        .find(|object| object.has_monsters())
}

/// Tile of the first stairs object on `level` (server order).
pub fn find_stairs(state: &GameState, level: i32) -> Option<Coordinates> {
    state
        .level(level)?
        .objects
        .iter()
        .find(|object| object.is_stairs)
        .map(|object| object.position)
}
