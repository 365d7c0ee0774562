//! Decision making and the server boundary: command wire types, the policy
//! and its pieces, the `GameApi` trait, and the per-tick harness.

pub mod config;
pub mod game_api;
pub mod harness;
pub mod shop;
pub mod skill;
pub mod strategy;
pub mod wire;

pub use config::PolicyConfig;
pub use strategy::{Branch, Decision, DecisionPolicy};
pub use wire::{Aim, Command, CommandError, CommandsBatch};
