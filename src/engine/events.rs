//! Structured battle events
//!
//! The battle logic never prints. Each phase reports what happened as
//! [`BattleEvent`]s, which travel with the round snapshot to the
//! presentation layer. Heroes are referenced by roster index.

use serde::Serialize;

use crate::game::Ability;

/// Something that happened during a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BattleEvent {
    /// The boss picked its defence for the round
    DefenceChosen { ability: Ability },
    /// The boss hit a hero
    BossHit { hero: usize, amount: i32 },
    /// A berserk absorbed part of the boss hit
    DamageBlocked { hero: usize, blocked: i32 },
    /// A hero's actions were cancelled by the boss defence
    HeroBlocked { hero: usize },
    /// A hero's regular attack landed on the boss
    HeroAttack { hero: usize, amount: i32 },
    /// A warrior hit critically
    CriticalHit { hero: usize, amount: i32 },
    /// A mage boosted the damage of every living hero
    DamageBoosted { hero: usize, amount: i32 },
    /// A healer healed every other living hero
    Healed { hero: usize, amount: i32 },
    /// A berserk sent blocked damage back to the boss
    DamageReverted { hero: usize, amount: i32 },
    /// A witcher gave its life to bring back a fallen ally
    Revived { hero: usize, target: usize },
    /// A hacker moved health from the boss to an ally
    Drained {
        hero: usize,
        receiver: usize,
        amount: i32,
    },
}

impl BattleEvent {
    /// Roster index of the hero that caused this event, if any.
    /// Boss-phase events have no hero actor.
    pub fn actor(&self) -> Option<usize> {
        match *self {
            BattleEvent::DefenceChosen { .. }
            | BattleEvent::BossHit { .. }
            | BattleEvent::DamageBlocked { .. } => None,
            BattleEvent::HeroBlocked { hero }
            | BattleEvent::HeroAttack { hero, .. }
            | BattleEvent::CriticalHit { hero, .. }
            | BattleEvent::DamageBoosted { hero, .. }
            | BattleEvent::Healed { hero, .. }
            | BattleEvent::DamageReverted { hero, .. }
            | BattleEvent::Revived { hero, .. }
            | BattleEvent::Drained { hero, .. } => Some(hero),
        }
    }
}
