use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use troll_bot_core::agent::PolicyConfig;
use troll_bot_core::http::ApiConfig;

use crate::config_loader::ConfigLoader;

pub const CONFIG_FILE: &str = "bot.toml";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoopConfig {
    /// Delay between ticks.
    pub tick_ms: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self { tick_ms: 1_000 }
    }
}

/// Everything the runner reads from `bot.toml`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BotConfig {
    pub api: ApiConfig,
    pub runner: LoopConfig,
    pub policy: PolicyConfig,
}

/// Values that override the file, in order of application: env first, then CLI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub tick_ms: Option<u64>,
}

impl Overrides {
    /// Reads `TROLL_BOT_API_KEY`, `TROLL_BOT_BASE_URL` and `TROLL_BOT_TICK_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        Self {
            api_key: get("TROLL_BOT_API_KEY"),
            base_url: get("TROLL_BOT_BASE_URL"),
            tick_ms: get("TROLL_BOT_TICK_MS").and_then(|v| v.trim().parse().ok()),
        }
    }
}

impl BotConfig {
    /// Loads `path` if given, otherwise the first `bot.toml` on the search path,
    /// otherwise defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => ConfigLoader::parse_from_path(path),
            None => Ok(ConfigLoader::parse_if_present(CONFIG_FILE)?.unwrap_or_default()),
        }
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(key) = overrides.api_key {
            self.api.api_key = Some(key);
        }
        if let Some(url) = overrides.base_url {
            self.api.base_url = url;
        }
        if let Some(ms) = overrides.tick_ms {
            self.runner.tick_ms = ms;
        }
    }

    pub fn api_key(&self) -> anyhow::Result<&str> {
        self.api
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("missing API key: pass it as the first argument or set TROLL_BOT_API_KEY")
            })
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.runner.tick_ms.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api.timeout_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use troll_bot_core::agent::shop::ShopRule;
    use troll_bot_core::player::attributes::AttributeKind;

    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg: BotConfig = ConfigLoader::parse_from_string(
            r#"
            [api]
            base_url = "http://localhost:8080"
            timeout_ms = 2500

            [runner]
            tick_ms = 500

            [policy]
            danger_depth = 4
            skill_point_attribute = "strength"
            shop_rule = "free_only"
            stall_yells = ["Boo!"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:8080");
        assert_eq!(cfg.request_timeout(), Duration::from_millis(2500));
        assert_eq!(cfg.tick_interval(), Duration::from_millis(500));
        assert_eq!(cfg.policy.danger_depth, 4);
        assert_eq!(cfg.policy.skill_point_attribute, AttributeKind::Strength);
        assert_eq!(cfg.policy.shop_rule, ShopRule::FreeOnly);
        assert_eq!(cfg.policy.stall_yells, vec!["Boo!".to_string()]);
    }

    #[test]
    fn zero_durations_are_clamped() {
        let cfg: BotConfig = ConfigLoader::parse_from_string(
            r#"
            [api]
            timeout_ms = 0

            [runner]
            tick_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.request_timeout(), Duration::from_millis(1));
        assert_eq!(cfg.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: BotConfig = ConfigLoader::parse_from_string("").unwrap();
        assert_eq!(cfg, BotConfig::default());
        assert!(cfg.api_key().is_err());
    }

    #[test]
    fn env_overrides_ignore_blank_and_unparsable_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("TROLL_BOT_API_KEY", "secret"),
            ("TROLL_BOT_BASE_URL", "  "),
            ("TROLL_BOT_TICK_MS", "fast"),
        ]);
        let overrides = Overrides::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(overrides.api_key.as_deref(), Some("secret"));
        assert!(overrides.base_url.is_none());
        assert!(overrides.tick_ms.is_none());

        let mut cfg = BotConfig::default();
        cfg.apply(overrides);
        assert_eq!(cfg.api_key().unwrap(), "secret");
    }

    #[test]
    fn later_overrides_win() {
        let mut cfg = BotConfig::default();
        cfg.apply(Overrides {
            api_key: Some("env-key".to_string()),
            tick_ms: Some(200),
            ..Overrides::default()
        });
        cfg.apply(Overrides {
            api_key: Some("cli-key".to_string()),
            ..Overrides::default()
        });
        assert_eq!(cfg.api_key().unwrap(), "cli-key");
        assert_eq!(cfg.runner.tick_ms, 200);
    }
}
