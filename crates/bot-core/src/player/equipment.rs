use serde::{Deserialize, Serialize};

use super::attributes::Attributes;

/// Equip slot tag of an item.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ItemSlot {
    Head,
    MainHand,
    OffHand,
    Body,
    Legs,
    Neck,
    /// Missing, or a tag this client does not know about yet.
    #[default]
    #[serde(other)]
    Unknown,
}

/// What a skill-use command has to reference.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    Position,
    Character,
    #[default]
    #[serde(other)]
    None,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub target: TargetKind,
    #[serde(default)]
    pub damage_amount: Attributes,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub slot: ItemSlot,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Item {
    pub fn is_main_hand(&self) -> bool {
        self.slot == ItemSlot::MainHand
    }
}

pub type Equipment = Vec<Item>;
