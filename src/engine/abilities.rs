//! Hero attacks and special powers
//!
//! Dispatch is a `match` on the hero's [`Archetype`]. Heroes are addressed by
//! roster index so a power can touch any ally while the caller holds the
//! whole roster mutably.

use crate::dice::Dice;
use crate::game::hero::{WARRIOR_CRIT_MAX, WARRIOR_CRIT_MIN};
use crate::game::{Archetype, Boss, Hero};

use super::events::BattleEvent;

/// Regular attack of the hero at `idx`. Witchers never attack.
pub fn attack(idx: usize, boss: &mut Boss, heroes: &[Hero]) -> Option<BattleEvent> {
    let hero = heroes.get(idx)?;

    if matches!(hero.archetype(), Archetype::Witcher { .. }) {
        return None;
    }

    let amount = hero.damage();
    boss.entity_mut().take_damage(amount);
    Some(BattleEvent::HeroAttack { hero: idx, amount })
}

/// Special power of the hero at `idx` for the given round
pub fn apply_super_power<D: Dice>(
    idx: usize,
    round: u32,
    boss: &mut Boss,
    heroes: &mut [Hero],
    dice: &mut D,
) -> Option<BattleEvent> {
    let archetype = heroes.get(idx)?.archetype();

    match archetype {
        Archetype::Warrior => {
            let multiplier = dice.uniform_int(WARRIOR_CRIT_MIN, WARRIOR_CRIT_MAX);
            let amount = multiplier.saturating_mul(heroes[idx].damage());
            boss.entity_mut().take_damage(amount);
            log::debug!("{} hit critically for {}", heroes[idx].name(), amount);
            Some(BattleEvent::CriticalHit { hero: idx, amount })
        }

        Archetype::Magic {
            rounds_active,
            boost_amount,
        } => {
            if round > rounds_active {
                return None;
            }
            for hero in heroes.iter_mut().filter(|h| h.is_alive()) {
                hero.entity_mut().boost(boost_amount);
            }
            Some(BattleEvent::DamageBoosted {
                hero: idx,
                amount: boost_amount,
            })
        }

        Archetype::Healer { heal_points } => {
            for (i, hero) in heroes.iter_mut().enumerate() {
                if i != idx && hero.is_alive() {
                    hero.entity_mut().heal(heal_points);
                }
            }
            Some(BattleEvent::Healed {
                hero: idx,
                amount: heal_points,
            })
        }

        Archetype::Berserk { blocked_damage } => {
            boss.entity_mut().take_damage(blocked_damage);
            Some(BattleEvent::DamageReverted {
                hero: idx,
                amount: blocked_damage,
            })
        }

        Archetype::Witcher { revived } => {
            if revived {
                return None;
            }
            let target = heroes
                .iter()
                .enumerate()
                .position(|(i, h)| i != idx && h.health() <= 0)?;

            let health = heroes[idx].health();
            heroes[target].entity_mut().set_health(health);
            heroes[idx].entity_mut().set_health(0);
            heroes[idx].mark_revived();
            log::debug!(
                "{} sacrificed itself to revive {}",
                heroes[idx].name(),
                heroes[target].name()
            );
            Some(BattleEvent::Revived { hero: idx, target })
        }

        Archetype::Hacker { drain_amount } => {
            if round % 2 != 0 {
                return None;
            }
            let receivers: Vec<usize> = heroes
                .iter()
                .enumerate()
                .filter(|(i, h)| *i != idx && h.is_alive())
                .map(|(i, _)| i)
                .collect();

            let receiver = match dice.uniform_choice(&receivers) {
                Ok(&receiver) => receiver,
                Err(e) => {
                    log::warn!("{} has nobody to drain for: {}", heroes[idx].name(), e);
                    return None;
                }
            };

            boss.entity_mut().take_damage(drain_amount);
            heroes[receiver].entity_mut().heal(drain_amount);
            Some(BattleEvent::Drained {
                hero: idx,
                receiver,
                amount: drain_amount,
            })
        }
    }
}
