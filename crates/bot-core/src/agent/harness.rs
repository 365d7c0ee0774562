use anyhow::Context;
use rand::Rng;

use super::game_api::GameApi;
use super::strategy::{Decision, DecisionPolicy};
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The server accepted the command.
    Submitted { decision: Decision },
    /// The server refused the command; the bot moves on to the next tick.
    Rejected {
        decision: Decision,
        status: u16,
        body: String,
    },
}

impl TickOutcome {
    pub fn decision(&self) -> &Decision {
        match self {
            TickOutcome::Submitted { decision } | TickOutcome::Rejected { decision, .. } => {
                decision
            }
        }
    }
}

/// One fetch → decide → submit cycle.
///
/// Any fetch failure and any non-server submit failure is returned as an
/// error; the runner treats those as fatal. A command the server rejects is
/// logged and reported as [`TickOutcome::Rejected`].
pub async fn tick<R: Rng + ?Sized>(
    policy: &DecisionPolicy,
    api: &dyn GameApi,
    rng: &mut R,
) -> anyhow::Result<TickOutcome> {
    let state = api.fetch_state().await.context("fetch game state")?;
    tracing::info!(
        score = state.score,
        money = state.character.money,
        level = state.current_position.level,
        x = state.current_position.position_x,
        y = state.current_position.position_y,
        "bot.tick.state"
    );

    let decision = policy.decide(&state, rng);
    tracing::info!(
        branch = ?decision.branch,
        command = ?decision.command,
        "bot.tick.decision"
    );

    match api.submit(decision.command.clone()).await {
        Ok(ack) => {
            tracing::debug!(status = ack.status, "bot.tick.submitted");
            Ok(TickOutcome::Submitted { decision })
        }
        Err(ApiError::Server { status, body }) => {
            tracing::warn!(
                status,
                body = %body,
                command = decision.command.name(),
                "bot.tick.rejected"
            );
            Ok(TickOutcome::Rejected {
                decision,
                status,
                body,
            })
        }
        Err(err) => Err(anyhow::Error::new(err).context("submit command")),
    }
}

/// Asks the server to respawn the character. Every failure is fatal here.
pub async fn respawn(api: &dyn GameApi) -> anyhow::Result<()> {
    tracing::info!("bot.respawn.start");
    let ack = api.respawn().await.context("respawn")?;
    tracing::info!(status = ack.status, "bot.respawn.done");
    Ok(())
}
