use serde::{Deserialize, Serialize};

use crate::player::equipment::Item;
use crate::world::GameState;

/// Which main-hand items the bot is willing to buy.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShopRule {
    /// Anything the character can pay for.
    #[default]
    Affordable,
    /// Only items with price 0.
    FreeOnly,
}

impl ShopRule {
    pub fn admits(self, item: &Item, money: i64) -> bool {
        if item.price > money {
            return false;
        }
        match self {
            ShopRule::Affordable => true,
            ShopRule::FreeOnly => item.price == 0,
        }
    }
}

/// First main-hand shop item (server order) that `rule` admits.
pub fn choose_weapon(state: &GameState, rule: ShopRule) -> Option<&Item> {
    let money = state.character.money;
    state
        .shop_items
        .iter()
        .find(|item| item.is_main_hand() && rule.admits(item, money))
}
