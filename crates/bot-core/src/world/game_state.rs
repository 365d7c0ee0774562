use serde::{Deserialize, Serialize};

use crate::player::character::Character;
use crate::player::equipment::Item;

use super::map::{Level, Map};

/// A tile on some level, as used by move and skill commands.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct Coordinates {
    pub position_x: i32,
    pub position_y: i32,
}

/// The character's location: level number plus tile.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    pub level: i32,
    pub position_x: i32,
    pub position_y: i32,
}

impl Position {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            position_x: self.position_x,
            position_y: self.position_y,
        }
    }
}

/// One tick's snapshot of the world as returned by `GET /v1/game`.
///
/// Never mutated; the next tick replaces it wholesale.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    pub score: f64,
    pub tick: i64,
    pub character: Character,
    pub current_position: Position,
    pub map: Map,
    pub shop_items: Vec<Item>,
}

impl GameState {
    pub fn current_level(&self) -> i32 {
        self.current_position.level
    }

    pub fn level(&self, level: i32) -> Option<&Level> {
        self.map.levels.iter().find(|l| l.level == level)
    }
}
