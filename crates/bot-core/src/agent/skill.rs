use serde::{Deserialize, Serialize};

use crate::player::attributes::score;
use crate::player::character::Character;
use crate::player::equipment::Skill;

/// Picks the skill the bot uses when it stands on a monster's tile.
pub trait SkillSelector: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;
    fn select<'a>(&self, character: &'a Character) -> Option<&'a Skill>;
}

/// First skill of the first equipped item, whatever slot it is in.
#[derive(Debug, Default)]
pub struct FirstEquippedSkill;

impl SkillSelector for FirstEquippedSkill {
    fn name(&self) -> &'static str {
        "first_equipped"
    }

    fn select<'a>(&self, character: &'a Character) -> Option<&'a Skill> {
        character.equip.first()?.skills.first()
    }
}

/// Main-hand skill with the highest damage estimate against the character's
/// own stats. Ties keep the earlier skill.
#[derive(Debug, Default)]
pub struct StrongestMainHandSkill;

impl SkillSelector for StrongestMainHandSkill {
    fn name(&self) -> &'static str {
        "strongest_main_hand"
    }

    fn select<'a>(&self, character: &'a Character) -> Option<&'a Skill> {
        let weapon = character.main_hand()?;
        let mut best: Option<(&Skill, i64)> = None;
        for skill in &weapon.skills {
            let damage = score(&character.attributes, &skill.damage_amount);
            if best.is_none_or(|(_, top)| damage > top) {
                best = Some((skill, damage));
            }
        }
        best.map(|(skill, _)| skill)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillSelectorKind {
    #[default]
    FirstEquipped,
    StrongestMainHand,
}

impl SkillSelectorKind {
    pub fn build(self) -> Box<dyn SkillSelector> {
        match self {
            SkillSelectorKind::FirstEquipped => Box::new(FirstEquippedSkill),
            SkillSelectorKind::StrongestMainHand => Box::new(StrongestMainHandSkill),
        }
    }
}
