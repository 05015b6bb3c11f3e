//! Match settings
//!
//! Defines the seed, the roster and how the match is rendered. Settings are
//! plain JSON; every field is optional and falls back to the classic match.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::roster::{ArchetypeName, BossConfig, HeroConfig, RosterConfig};
use super::ConfigError;

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the dice (random when absent)
    pub seed: Option<u64>,
    /// Boss and heroes
    pub roster: RosterConfig,
    /// Output settings
    pub render: RenderSettings,
}

impl Settings {
    /// The classic match with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// A short match against a weakened boss, handy for demos
    pub fn skirmish_preset() -> Self {
        Self {
            roster: RosterConfig {
                boss: BossConfig {
                    name: "Fuse".to_string(),
                    health: 300,
                    damage: 30,
                },
                heroes: vec![
                    HeroConfig::new("Anton", 200, 10, ArchetypeName::Warrior),
                    HeroConfig::new("Guts", 200, 10, ArchetypeName::Berserk),
                    HeroConfig::healer("Aibolit", 200, 5, 10),
                ],
            },
            render: RenderSettings {
                show_events: true,
                quiet: false,
            },
            ..Default::default()
        }
    }

    /// Parse settings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// How snapshots are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Print ability events above each round
    pub show_events: bool,
    /// Print only the winner
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.seed, None);
        assert_eq!(settings.roster, RosterConfig::classic());
        assert!(!settings.render.show_events);
        assert!(!settings.render.quiet);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json_str(r#"{"seed": 42, "render": {"quiet": true}}"#).unwrap();

        assert_eq!(settings.seed, Some(42));
        assert!(settings.render.quiet);
        assert!(!settings.render.show_events);
        assert_eq!(settings.roster.heroes.len(), 8);
    }

    #[test]
    fn test_custom_roster_json() {
        let settings = Settings::from_json_str(
            r#"{
                "roster": {
                    "boss": {"name": "Golem", "health": 10, "damage": 0},
                    "heroes": [
                        {"name": "Aibolit", "health": 100, "damage": 5, "archetype": "healer", "heal_points": 15}
                    ]
                }
            }"#,
        )
        .unwrap();

        let (boss, heroes) = settings.roster.build().unwrap();
        assert_eq!(boss.name(), "Golem");
        assert_eq!(heroes.len(), 1);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Settings::load("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_skirmish_preset() {
        let settings = Settings::skirmish_preset();
        assert!(settings.render.show_events);
        assert!(settings.roster.build().is_ok());
    }
}
