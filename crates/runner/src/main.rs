mod config;
mod config_loader;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::MissedTickBehavior;

use troll_bot_core::agent::DecisionPolicy;
use troll_bot_core::agent::harness::{TickOutcome, respawn, tick as harness_tick};
use troll_bot_core::http::HttpGameApi;

use crate::config::{BotConfig, Overrides};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
enum Mode {
    /// Poll the server and act every tick.
    #[default]
    Run,
    /// Respawn the character and exit.
    Respawn,
}

#[derive(Debug, Parser)]
#[command(name = "troll-bot", about = "Dungeons and Trolls bot")]
struct Cli {
    /// API key sent as the X-API-key header. Falls back to TROLL_BOT_API_KEY or the config file.
    api_key: Option<String>,

    #[command(subcommand)]
    mode: Option<Mode>,

    /// Config file; defaults to the first bot.toml on the search path.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    base_url: Option<String>,

    #[arg(long)]
    tick_ms: Option<u64>,

    /// Run a single tick and exit.
    #[arg(long)]
    once: bool,
}

impl Cli {
    fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            tick_ms: self.tick_ms,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut cfg = BotConfig::load(cli.config.as_deref())?;
    cfg.apply(Overrides::from_env());
    cfg.apply(cli.overrides());

    let api = HttpGameApi::new(
        cfg.api.base_url.clone(),
        cfg.api_key()?,
        cfg.request_timeout(),
    )
    .context("build http client")?;
    let mode = cli.mode();
    tracing::info!(base_url = %cfg.api.base_url, ?mode, "bot.start");

    if mode == Mode::Respawn {
        return respawn(&api).await;
    }

    let policy = DecisionPolicy::new(cfg.policy.clone());
    tracing::info!("bot.running");

    if cli.once {
        let mut rng = StdRng::from_entropy();
        log_outcome(&harness_tick(&policy, &api, &mut rng).await?);
        return Ok(());
    }

    let mut interval = tokio::time::interval(cfg.tick_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        // Fresh seed every tick.
        let mut rng = StdRng::from_entropy();
        let outcome = harness_tick(&policy, &api, &mut rng).await?;
        log_outcome(&outcome);
    }
}

fn log_outcome(outcome: &TickOutcome) {
    match outcome {
        TickOutcome::Submitted { decision } => {
            tracing::info!(command = decision.command.name(), "bot.tick.done");
        }
        TickOutcome::Rejected { status, .. } => {
            tracing::info!(status, "bot.tick.skipped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_key_and_respawn_mode() {
        let cli = Cli::try_parse_from(["troll-bot", "KEY", "respawn"]).unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("KEY"));
        assert_eq!(cli.mode(), Mode::Respawn);
        assert!(!cli.once);
    }

    #[test]
    fn respawn_without_positional_key_leaves_key_to_env() {
        let cli = Cli::try_parse_from(["troll-bot", "respawn"]).unwrap();
        assert_eq!(cli.mode(), Mode::Respawn);
        assert!(cli.api_key.is_none());
        assert!(cli.overrides().api_key.is_none());
    }

    #[test]
    fn explicit_run_mode_without_key() {
        let cli = Cli::try_parse_from(["troll-bot", "--once", "run"]).unwrap();
        assert_eq!(cli.mode(), Mode::Run);
        assert!(cli.api_key.is_none());
        assert!(cli.once);
    }

    #[test]
    fn defaults_to_run_mode() {
        let cli = Cli::try_parse_from(["troll-bot", "KEY", "--once", "--tick-ms", "250"]).unwrap();
        assert_eq!(cli.mode(), Mode::Run);
        assert!(cli.once);
        assert_eq!(cli.overrides().tick_ms, Some(250));
    }

    #[test]
    fn key_is_optional_on_the_command_line() {
        let cli = Cli::try_parse_from(["troll-bot"]).unwrap();
        assert!(cli.api_key.is_none());
        assert!(cli.overrides().api_key.is_none());
    }
}
