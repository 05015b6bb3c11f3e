//! Round resolution engine
//!
//! One round runs in a fixed order:
//! 1. the round counter advances
//! 2. the boss picks its defence
//! 3. the boss hits every living hero
//! 4. each hero in roster order attacks and uses its special power, unless
//!    it is down, the boss is down, or the boss defence matches its ability
//! 5. a [`Snapshot`] of the result is produced

pub mod abilities;
pub mod events;
pub mod snapshot;

use serde::Serialize;

use crate::dice::Dice;
use crate::game::{Boss, Hero};

pub use events::BattleEvent;
pub use snapshot::{BossRecord, HeroRecord, Snapshot};

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The boss fell
    HeroesWin,
    /// Every hero fell while the boss stood
    BossWins,
}

/// Summary of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub outcome: Outcome,
    /// Rounds played before the outcome was reached
    pub rounds: u32,
}

/// Check whether the match is over. The boss falling takes precedence.
pub fn check_outcome(boss: &Boss, heroes: &[Hero]) -> Option<Outcome> {
    if boss.health() <= 0 {
        Some(Outcome::HeroesWin)
    } else if heroes.iter().all(|h| h.health() <= 0) {
        Some(Outcome::BossWins)
    } else {
        None
    }
}

/// Drives rounds and owns the round counter and the dice
#[derive(Debug, Clone)]
pub struct RoundEngine<D> {
    dice: D,
    round: u32,
}

impl<D: Dice> RoundEngine<D> {
    /// Create an engine that has not played any round yet
    pub fn new(dice: D) -> Self {
        Self { dice, round: 0 }
    }

    /// Number of rounds played so far
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The randomness source
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Resolve one full round
    pub fn play_round(&mut self, boss: &mut Boss, heroes: &mut [Hero]) -> Snapshot {
        self.round += 1;
        log::debug!("round {} begins", self.round);

        let mut events = Vec::new();

        match boss.choose_defence(heroes, &mut self.dice) {
            Ok(ability) => {
                log::debug!("{} defends against {}", boss.name(), ability);
                events.push(BattleEvent::DefenceChosen { ability });
            }
            Err(e) => log::warn!("{} kept its defence: {}", boss.name(), e),
        }

        events.extend(boss.attack(heroes, &mut self.dice));

        for idx in 0..heroes.len() {
            if !heroes[idx].is_alive() || !boss.is_alive() {
                continue;
            }
            if boss.blocks(&heroes[idx]) {
                events.push(BattleEvent::HeroBlocked { hero: idx });
                continue;
            }

            events.extend(abilities::attack(idx, boss, heroes));
            events.extend(abilities::apply_super_power(
                idx,
                self.round,
                boss,
                heroes,
                &mut self.dice,
            ));
        }

        Snapshot::capture(self.round, boss, heroes, events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{ScriptedDice, SeededDice};
    use crate::game::Ability;

    #[test]
    fn test_round_counter_increments_by_one() {
        let mut engine = RoundEngine::new(SeededDice::new(3));
        let mut boss = Boss::new("Fuse", 10_000, 1);
        let mut heroes = vec![Hero::warrior("Anton", 10_000, 1), Hero::hacker("Neo", 10_000, 1)];

        assert_eq!(engine.round(), 0);
        for expected in 1..=10 {
            let snapshot = engine.play_round(&mut boss, &mut heroes);
            assert_eq!(engine.round(), expected);
            assert_eq!(snapshot.round, expected);
        }
    }

    #[test]
    fn test_matching_defence_cancels_hero_turn() {
        let mut engine = RoundEngine::new(ScriptedDice::new().with_indices([0]));
        let mut boss = Boss::new("Fuse", 1000, 50);
        let mut heroes = vec![Hero::warrior("Anton", 280, 10), Hero::healer("Aibolit", 250, 5, 15)];

        let snapshot = engine.play_round(&mut boss, &mut heroes);

        assert_eq!(snapshot.boss.defence, Some(Ability::CriticalDamage));
        assert!(snapshot.events.contains(&BattleEvent::HeroBlocked { hero: 0 }));
        assert!(!snapshot
            .events
            .iter()
            .any(|e| e.actor() == Some(0) && *e != BattleEvent::HeroBlocked { hero: 0 }));
        // Only the healer hit the boss and healed Anton
        assert_eq!(boss.health(), 995);
        assert_eq!(heroes[0].health(), 245);
        assert_eq!(heroes[1].health(), 200);
    }

    #[test]
    fn test_super_power_fires_after_killing_blow() {
        // Defence from the healer, crit multiplier 2
        let mut engine = RoundEngine::new(ScriptedDice::new().with_indices([1]).with_ints([2]));
        let mut boss = Boss::new("Fuse", 10, 0);
        let mut heroes = vec![Hero::warrior("Anton", 100, 10), Hero::healer("Aibolit", 100, 5, 15)];

        let snapshot = engine.play_round(&mut boss, &mut heroes);

        assert_eq!(boss.health(), 0);
        assert!(snapshot.events.contains(&BattleEvent::CriticalHit { hero: 0, amount: 20 }));
        // The healer never acts once the boss is down
        assert!(!snapshot.events.iter().any(|e| e.actor() == Some(1)));
    }

    #[test]
    fn test_berserk_block_reverted_same_round() {
        // Defence from the warrior, 10-point block
        let mut engine = RoundEngine::new(ScriptedDice::new().with_indices([1, 1]));
        let mut boss = Boss::new("Fuse", 100, 50);
        let mut heroes = vec![Hero::berserk("Guts", 100, 10), Hero::warrior("Anton", 100, 10)];

        let snapshot = engine.play_round(&mut boss, &mut heroes);

        assert_eq!(heroes[0].health(), 60);
        assert_eq!(heroes[1].health(), 50);
        // 10 from the attack, 10 reverted; the warrior is blocked
        assert_eq!(boss.health(), 80);
        let reverted: Vec<_> = snapshot
            .events
            .iter()
            .filter(|e| matches!(e, BattleEvent::DamageReverted { .. }))
            .collect();
        assert_eq!(reverted, vec![&BattleEvent::DamageReverted { hero: 0, amount: 10 }]);
    }

    #[test]
    fn test_witcher_revives_within_round() {
        let mut engine = RoundEngine::new(ScriptedDice::new().with_indices([0, 0]));
        let mut boss = Boss::new("Fuse", 1000, 50);
        let mut heroes = vec![Hero::warrior("Anton", 10, 10), Hero::witcher("Geralt", 100, 0)];

        let snapshot = engine.play_round(&mut boss, &mut heroes);

        assert!(snapshot.events.contains(&BattleEvent::Revived { hero: 1, target: 0 }));
        assert_eq!(heroes[0].health(), 50);
        assert_eq!(heroes[1].health(), 0);

        engine.play_round(&mut boss, &mut heroes);
        assert_eq!(heroes[0].health(), 0);
        assert_eq!(heroes[1].is_revived(), Some(true));
        assert_eq!(check_outcome(&boss, &heroes), Some(Outcome::BossWins));
    }

    #[test]
    fn test_check_outcome() {
        let boss = Boss::new("Fuse", 100, 50);
        let dead_boss = Boss::new("Fuse", 0, 50);
        let alive = vec![Hero::warrior("Anton", 10, 10), Hero::warrior("Akakii", 0, 15)];
        let fallen = vec![Hero::warrior("Anton", 0, 10), Hero::warrior("Akakii", 0, 15)];

        assert_eq!(check_outcome(&boss, &alive), None);
        assert_eq!(check_outcome(&boss, &fallen), Some(Outcome::BossWins));
        assert_eq!(check_outcome(&dead_boss, &alive), Some(Outcome::HeroesWin));
        assert_eq!(check_outcome(&dead_boss, &fallen), Some(Outcome::HeroesWin));
    }

    #[test]
    fn test_empty_roster_round_is_recovered() {
        let mut engine = RoundEngine::new(ScriptedDice::new());
        let mut boss = Boss::new("Fuse", 100, 50);
        let mut heroes: Vec<Hero> = Vec::new();

        let snapshot = engine.play_round(&mut boss, &mut heroes);

        assert_eq!(snapshot.round, 1);
        assert_eq!(snapshot.boss.defence, None);
        assert!(snapshot.events.is_empty());
    }
}
