//! Per-round snapshots
//!
//! A snapshot is plain data: the round number, the boss, every hero in
//! roster order, and the events that led there.

use serde::Serialize;

use super::events::BattleEvent;
use crate::game::{Ability, Boss, Hero};

/// Boss state at the end of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BossRecord {
    pub name: String,
    pub health: i32,
    pub damage: i32,
    pub defence: Option<Ability>,
}

/// Hero state at the end of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroRecord {
    pub name: String,
    pub health: i32,
    pub damage: i32,
    pub ability: Ability,
}

/// State of the battle after a round (round 0 = before the first round)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub round: u32,
    pub boss: BossRecord,
    pub heroes: Vec<HeroRecord>,
    pub events: Vec<BattleEvent>,
}

impl Snapshot {
    /// Capture the current state of the battle
    pub fn capture(round: u32, boss: &Boss, heroes: &[Hero], events: Vec<BattleEvent>) -> Self {
        Self {
            round,
            boss: BossRecord {
                name: boss.name().to_string(),
                health: boss.health(),
                damage: boss.damage(),
                defence: boss.defence(),
            },
            heroes: heroes
                .iter()
                .map(|hero| HeroRecord {
                    name: hero.name().to_string(),
                    health: hero.health(),
                    damage: hero.damage(),
                    ability: hero.ability(),
                })
                .collect(),
            events,
        }
    }

    /// Name of the hero at `idx`, or `"?"` if out of range
    pub fn hero_name(&self, idx: usize) -> &str {
        self.heroes.get(idx).map(|h| h.name.as_str()).unwrap_or("?")
    }

    /// Count heroes still standing
    pub fn alive_hero_count(&self) -> usize {
        self.heroes.iter().filter(|h| h.health > 0).count()
    }
}
