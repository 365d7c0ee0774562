use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::attributes::Attributes;
use crate::world::Coordinates;

/// Wire shape of `POST /v1/commands`: every command kind is an optional field.
///
/// The server accepts several populated fields at once, but this bot only ever
/// sends one; use [`Command`] and convert.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandsBatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy: Option<Identifiers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#move: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<SkillUse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assign_skill_points: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yell: Option<Message>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Identifiers {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillUse {
    pub skill_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Coordinates>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    pub text: String,
}

/// What a skill use is pointed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aim {
    Position(Coordinates),
    Character(String),
    Nothing,
}

/// The single decision of a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Buy { ids: Vec<String> },
    Move(Coordinates),
    Skill { skill_id: String, aim: Aim },
    AssignSkillPoints(Attributes),
    Yell { text: String },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Buy { .. } => "buy",
            Command::Move(_) => "move",
            Command::Skill { .. } => "skill",
            Command::AssignSkillPoints(_) => "assign_skill_points",
            Command::Yell { .. } => "yell",
        }
    }

    pub fn yell(text: impl Into<String>) -> Self {
        Command::Yell { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("command batch has no populated command")]
    Empty,
    #[error("command batch populates {0} commands, expected exactly one")]
    Multiple(usize),
    #[error("skill use sets both a target id and a position")]
    ConflictingSkillTarget,
}

impl From<Command> for CommandsBatch {
    fn from(command: Command) -> Self {
        let mut batch = CommandsBatch::default();
        match command {
            Command::Buy { ids } => batch.buy = Some(Identifiers { ids }),
            Command::Move(to) => batch.r#move = Some(to),
            Command::Skill { skill_id, aim } => {
                let (target_id, position) = match aim {
                    Aim::Position(pos) => (None, Some(pos)),
                    Aim::Character(id) => (Some(id), None),
                    Aim::Nothing => (None, None),
                };
                batch.skill = Some(SkillUse {
                    skill_id,
                    target_id,
                    position,
                });
            }
            Command::AssignSkillPoints(attrs) => batch.assign_skill_points = Some(attrs),
            Command::Yell { text } => batch.yell = Some(Message { text }),
        }
        batch
    }
}

impl TryFrom<CommandsBatch> for Command {
    type Error = CommandError;

    fn try_from(batch: CommandsBatch) -> Result<Self, Self::Error> {
        let populated = [
            batch.buy.is_some(),
            batch.r#move.is_some(),
            batch.skill.is_some(),
            batch.assign_skill_points.is_some(),
            batch.yell.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();
        match populated {
            0 => return Err(CommandError::Empty),
            1 => {}
            n => return Err(CommandError::Multiple(n)),
        }

        if let Some(Identifiers { ids }) = batch.buy {
            return Ok(Command::Buy { ids });
        }
        if let Some(to) = batch.r#move {
            return Ok(Command::Move(to));
        }
        if let Some(attrs) = batch.assign_skill_points {
            return Ok(Command::AssignSkillPoints(attrs));
        }
        if let Some(Message { text }) = batch.yell {
            return Ok(Command::Yell { text });
        }

        let Some(skill) = batch.skill else {
            return Err(CommandError::Empty);
        };
        let aim = match (skill.target_id, skill.position) {
            (Some(_), Some(_)) => return Err(CommandError::ConflictingSkillTarget),
            (Some(id), None) => Aim::Character(id),
            (None, Some(pos)) => Aim::Position(pos),
            (None, None) => Aim::Nothing,
        };
        Ok(Command::Skill {
            skill_id: skill.skill_id,
            aim,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn batch_json_only_carries_the_populated_command() {
        let cmd = Command::Move(Coordinates {
            position_x: 3,
            position_y: 4,
        });
        let v = serde_json::to_value(CommandsBatch::from(cmd)).unwrap();
        assert_eq!(v, json!({ "move": { "positionX": 3, "positionY": 4 } }));
    }

    #[test]
    fn skill_aim_maps_to_target_id_or_position() {
        let at_char = CommandsBatch::from(Command::Skill {
            skill_id: "slash".to_string(),
            aim: Aim::Character("m1".to_string()),
        });
        assert_eq!(
            serde_json::to_value(&at_char).unwrap(),
            json!({ "skill": { "skillId": "slash", "targetId": "m1" } })
        );

        let plain = CommandsBatch::from(Command::Skill {
            skill_id: "heal".to_string(),
            aim: Aim::Nothing,
        });
        assert_eq!(
            serde_json::to_value(&plain).unwrap(),
            json!({ "skill": { "skillId": "heal" } })
        );
    }

    #[test]
    fn assign_points_uses_camel_case_key() {
        let attrs = Attributes {
            stamina: 3.0,
            ..Attributes::default()
        };
        let v = serde_json::to_value(CommandsBatch::from(Command::AssignSkillPoints(attrs))).unwrap();
        assert_eq!(v["assignSkillPoints"]["stamina"], json!(3.0));
    }

    #[test]
    fn decode_rejects_empty_batch() {
        let err = Command::try_from(CommandsBatch::default()).unwrap_err();
        assert_eq!(err, CommandError::Empty);
    }

    #[test]
    fn decode_rejects_multiple_commands() {
        let batch = CommandsBatch {
            yell: Some(Message {
                text: "hi".to_string(),
            }),
            r#move: Some(Coordinates::default()),
            ..CommandsBatch::default()
        };
        let err = Command::try_from(batch).unwrap_err();
        assert_eq!(err, CommandError::Multiple(2));
        assert!(format!("{err}").contains("expected exactly one"));
    }

    #[test]
    fn decode_rejects_skill_with_two_targets() {
        let batch = CommandsBatch {
            skill: Some(SkillUse {
                skill_id: "s".to_string(),
                target_id: Some("m".to_string()),
                position: Some(Coordinates::default()),
            }),
            ..CommandsBatch::default()
        };
        assert_eq!(
            Command::try_from(batch).unwrap_err(),
            CommandError::ConflictingSkillTarget
        );
    }

    #[test]
    fn decode_accepts_server_style_json() {
        let batch: CommandsBatch =
            serde_json::from_str(r#"{"buy": {"ids": ["sword"]}}"#).unwrap();
        assert_eq!(
            Command::try_from(batch).unwrap(),
            Command::Buy {
                ids: vec!["sword".to_string()]
            }
        );
    }
}
