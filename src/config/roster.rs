//! Roster factory
//!
//! Describes the boss and the ordered heroes in serializable form and turns
//! that description into game entities. Hero order is turn order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::game::{Boss, Hero};

/// The roster the game ships with
static CLASSIC_ROSTER: Lazy<RosterConfig> = Lazy::new(|| RosterConfig {
    boss: BossConfig {
        name: "Fuse".to_string(),
        health: 1000,
        damage: 50,
    },
    heroes: vec![
        HeroConfig::new("Anton", 280, 10, ArchetypeName::Warrior),
        HeroConfig::healer("Aibolit", 250, 5, 15),
        HeroConfig::new("Akakii", 270, 15, ArchetypeName::Warrior),
        HeroConfig::new("Itachi", 290, 10, ArchetypeName::Magic),
        HeroConfig::new("Guts", 260, 10, ArchetypeName::Berserk),
        HeroConfig::healer("Dulittle", 300, 5, 5),
        HeroConfig::new("Geralt", 270, 0, ArchetypeName::Witcher),
        HeroConfig::new("Neo", 260, 5, ArchetypeName::Hacker),
    ],
});

/// Hero archetype as written in settings files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeName {
    Warrior,
    Magic,
    Healer,
    Berserk,
    Witcher,
    Hacker,
}

/// Boss construction parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossConfig {
    pub name: String,
    pub health: i32,
    pub damage: i32,
}

/// Hero construction parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub name: String,
    pub health: i32,
    pub damage: i32,
    pub archetype: ArchetypeName,
    /// Healing per activation (healers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heal_points: Option<i32>,
}

impl HeroConfig {
    pub fn new(name: impl Into<String>, health: i32, damage: i32, archetype: ArchetypeName) -> Self {
        Self {
            name: name.into(),
            health,
            damage,
            archetype,
            heal_points: None,
        }
    }

    pub fn healer(name: impl Into<String>, health: i32, damage: i32, heal_points: i32) -> Self {
        Self {
            heal_points: Some(heal_points),
            ..Self::new(name, health, damage, ArchetypeName::Healer)
        }
    }

    /// Build the hero
    pub fn build(&self) -> Result<Hero, ConfigError> {
        let name = self.name.clone();
        let hero = match self.archetype {
            ArchetypeName::Warrior => Hero::warrior(name, self.health, self.damage),
            ArchetypeName::Magic => Hero::magic(name, self.health, self.damage),
            ArchetypeName::Healer => {
                let heal_points = self.heal_points.ok_or_else(|| ConfigError::InvalidHero {
                    name: self.name.clone(),
                    reason: "healer needs heal_points".to_string(),
                })?;
                Hero::healer(name, self.health, self.damage, heal_points)
            }
            ArchetypeName::Berserk => Hero::berserk(name, self.health, self.damage),
            ArchetypeName::Witcher => Hero::witcher(name, self.health, self.damage),
            ArchetypeName::Hacker => Hero::hacker(name, self.health, self.damage),
        };
        Ok(hero)
    }
}

/// Complete roster: one boss and the ordered heroes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub boss: BossConfig,
    pub heroes: Vec<HeroConfig>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl RosterConfig {
    /// Fuse against the eight classic heroes
    pub fn classic() -> Self {
        CLASSIC_ROSTER.clone()
    }

    /// Build the boss and the heroes, rejecting rosters that cannot start a match
    pub fn build(&self) -> Result<(Boss, Vec<Hero>), ConfigError> {
        if self.heroes.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        if self.boss.health <= 0 {
            return Err(ConfigError::DefeatedBoss(self.boss.name.clone()));
        }

        let heroes = self
            .heroes
            .iter()
            .map(HeroConfig::build)
            .collect::<Result<Vec<_>, _>>()?;

        if !heroes.iter().any(|h| h.is_alive()) {
            return Err(ConfigError::NoLivingHero);
        }

        let boss = Boss::new(self.boss.name.clone(), self.boss.health, self.boss.damage);
        Ok((boss, heroes))
    }
}
