use serde::{Deserialize, Serialize};

use crate::player::attributes::AttributeKind;

use super::shop::ShopRule;
use super::skill::SkillSelectorKind;

pub const DEFAULT_DANGER_DEPTH: i32 = 2;
pub const LOST_YELL: &str = "Where are the stairs? I can't find them!";

/// Tunables of [`super::strategy::DecisionPolicy`]; the `[policy]` table of `bot.toml`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PolicyConfig {
    /// Deepest level the bot descends to; below it, it stalls with a yell.
    pub danger_depth: i32,
    /// Where all unspent attribute points go.
    pub skill_point_attribute: AttributeKind,
    pub shop_rule: ShopRule,
    pub skill_selector: SkillSelectorKind,
    /// Picked uniformly at random while stalling. Empty disables stalling.
    pub stall_yells: Vec<String>,
    pub lost_yell: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            danger_depth: DEFAULT_DANGER_DEPTH,
            skill_point_attribute: AttributeKind::Stamina,
            shop_rule: ShopRule::default(),
            skill_selector: SkillSelectorKind::default(),
            stall_yells: vec!["I'm so scared!".to_string(), "Help me!".to_string()],
            lost_yell: LOST_YELL.to_string(),
        }
    }
}
