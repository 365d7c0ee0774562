use rand::Rng;
use rand::seq::SliceRandom;

use crate::player::attributes::{Attributes, score};
use crate::player::equipment::TargetKind;
use crate::world::{GameState, MapObject, find_monster, find_stairs};

use super::config::PolicyConfig;
use super::shop::choose_weapon;
use super::skill::SkillSelector;
use super::wire::{Aim, Command};

/// Which rule of the priority chain produced a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    AssignSkillPoints,
    BuyWeapon,
    UseSkill,
    ApproachMonster,
    TakeStairs,
    Stall,
    Lost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub branch: Branch,
    pub command: Command,
}

impl Decision {
    fn new(branch: Branch, command: Command) -> Self {
        Self { branch, command }
    }
}

/// Stateless state → command policy. One call per tick.
///
/// Priority chain, first match wins:
/// 1. unspent attribute points are assigned,
/// 2. a missing main-hand weapon is bought (falls through if none is for sale),
/// 3. a monster on the current level is attacked when standing on it, approached otherwise,
/// 4. stairs are taken, unless the level is past the danger depth (then yell),
/// 5. with no stairs in sight the bot yells that it is lost.
#[derive(Debug)]
pub struct DecisionPolicy {
    cfg: PolicyConfig,
    selector: Box<dyn SkillSelector>,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

impl DecisionPolicy {
    pub fn new(cfg: PolicyConfig) -> Self {
        let selector = cfg.skill_selector.build();
        Self { cfg, selector }
    }

    pub fn with_selector(mut self, selector: Box<dyn SkillSelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.cfg
    }

    pub fn decide<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Decision {
        let character = &state.character;

        if character.has_unspent_points() {
            let points = character.skill_points;
            tracing::info!(
                points,
                attribute = ?self.cfg.skill_point_attribute,
                "bot.policy.assign_points"
            );
            return Decision::new(
                Branch::AssignSkillPoints,
                Command::AssignSkillPoints(Attributes::single(
                    self.cfg.skill_point_attribute,
                    points,
                )),
            );
        }

        match character.main_hand() {
            Some(weapon) => tracing::debug!(weapon = %weapon.name, "bot.policy.weapon"),
            None => {
                tracing::info!(money = character.money, "bot.policy.shop.looking");
                if let Some(item) = choose_weapon(state, self.cfg.shop_rule) {
                    tracing::info!(item = %item.name, price = item.price, "bot.policy.shop.chosen");
                    return Decision::new(
                        Branch::BuyWeapon,
                        Command::Buy {
                            ids: vec![item.id.clone()],
                        },
                    );
                }
                tracing::error!(
                    money = character.money,
                    rule = ?self.cfg.shop_rule,
                    "bot.policy.shop.nothing_to_buy"
                );
            }
        }

        let level = state.current_level();
        if let Some(object) = find_monster(state, level) {
            return self.engage(state, object);
        }
        tracing::info!(level, "bot.policy.no_monsters");

        let Some(stairs) = find_stairs(state, level) else {
            tracing::warn!(level, "bot.policy.stairs_missing");
            return Decision::new(Branch::Lost, Command::yell(self.cfg.lost_yell.clone()));
        };

        if level > self.cfg.danger_depth
            && let Some(text) = self.cfg.stall_yells.choose(rng)
        {
            tracing::info!(level, danger_depth = self.cfg.danger_depth, "bot.policy.stall");
            return Decision::new(Branch::Stall, Command::yell(text.clone()));
        }

        tracing::info!(x = stairs.position_x, y = stairs.position_y, "bot.policy.stairs");
        Decision::new(Branch::TakeStairs, Command::Move(stairs))
    }

    fn engage(&self, state: &GameState, object: &MapObject) -> Decision {
        let here = state.current_position.coordinates();
        if object.position == here
            && let Some(skill) = self.selector.select(&state.character)
        {
            let damage = score(&state.character.attributes, &skill.damage_amount);
            tracing::info!(
                skill = %skill.name,
                selector = self.selector.name(),
                damage,
                "bot.policy.attack"
            );
            let aim = match skill.target {
                TargetKind::Position => Aim::Position(object.position),
                TargetKind::Character => object
                    .monsters
                    .first()
                    .map(|m| Aim::Character(m.id.clone()))
                    .unwrap_or(Aim::Nothing),
                TargetKind::None => Aim::Nothing,
            };
            return Decision::new(
                Branch::UseSkill,
                Command::Skill {
                    skill_id: skill.id.clone(),
                    aim,
                },
            );
        }

        tracing::info!(
            x = object.position.position_x,
            y = object.position.position_y,
            "bot.policy.approach"
        );
        Decision::new(Branch::ApproachMonster, Command::Move(object.position))
    }
}
