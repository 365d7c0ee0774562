use serde::{Deserialize, Serialize};

use super::attributes::Attributes;
use super::equipment::{Equipment, Item};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub money: i64,
    /// Unspent attribute points.
    pub skill_points: f32,
    pub attributes: Attributes,
    pub equip: Equipment,
}

impl Character {
    pub fn main_hand(&self) -> Option<&Item> {
        self.equip.iter().find(|item| item.is_main_hand())
    }

    pub fn has_unspent_points(&self) -> bool {
        self.skill_points > 0.0
    }
}
