//! Configuration module
//!
//! Handles match settings and the roster factory that builds the boss and
//! the heroes.

pub mod roster;
pub mod settings;

pub use roster::{ArchetypeName, BossConfig, HeroConfig, RosterConfig};
pub use settings::{RenderSettings, Settings};

/// Errors raised while loading settings or building a roster
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Roster has no heroes")]
    EmptyRoster,
    #[error("Roster has no living hero")]
    NoLivingHero,
    #[error("Boss {0} starts without health")]
    DefeatedBoss(String),
    #[error("Invalid hero {name}: {reason}")]
    InvalidHero { name: String, reason: String },
}
