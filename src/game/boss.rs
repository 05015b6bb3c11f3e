//! The boss
//!
//! Each round the boss copies the ability tag of a random hero as its
//! defence, then hits every living hero for its full damage. The one
//! exception is a berserk whose tag is not the current defence: it blocks
//! part of the hit and remembers how much for its own turn.

use super::ability::Ability;
use super::entity::Entity;
use super::hero::{Hero, BERSERK_BLOCK_CHOICES};
use crate::dice::{Dice, DiceError};
use crate::engine::BattleEvent;

/// The single adversary of the raid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boss {
    entity: Entity,
    defence: Option<Ability>,
}

impl Boss {
    /// Create a boss with no defence chosen yet
    pub fn new(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self {
            entity: Entity::new(name, health, damage),
            defence: None,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn name(&self) -> &str {
        self.entity.name()
    }

    pub fn health(&self) -> i32 {
        self.entity.health()
    }

    pub fn damage(&self) -> i32 {
        self.entity.damage()
    }

    pub fn is_alive(&self) -> bool {
        self.entity.is_alive()
    }

    /// Ability tag the boss is immune to this round
    pub fn defence(&self) -> Option<Ability> {
        self.defence
    }

    /// Whether the current defence cancels `hero`'s actions
    pub fn blocks(&self, hero: &Hero) -> bool {
        self.defence == Some(hero.ability())
    }

    /// Adopt the ability tag of a uniformly chosen hero.
    ///
    /// Dead heroes are part of the draw. On an empty roster the previous
    /// defence is kept.
    pub fn choose_defence<D: Dice>(
        &mut self,
        heroes: &[Hero],
        dice: &mut D,
    ) -> Result<Ability, DiceError> {
        let ability = dice.uniform_choice(heroes)?.ability();
        self.defence = Some(ability);
        Ok(ability)
    }

    /// Hit every living hero, returning what happened
    pub fn attack<D: Dice>(&self, heroes: &mut [Hero], dice: &mut D) -> Vec<BattleEvent> {
        let mut events = Vec::new();

        for (idx, hero) in heroes.iter_mut().enumerate() {
            if !hero.is_alive() {
                continue;
            }

            if hero.is_berserk() && !self.blocks(hero) {
                let blocked = dice.uniform_choice(&BERSERK_BLOCK_CHOICES).map_or(0, |b| *b);
                let amount = self.damage().saturating_sub(blocked);
                hero.entity_mut().take_damage(amount);
                hero.set_blocked_damage(blocked);

                events.push(BattleEvent::DamageBlocked { hero: idx, blocked });
                events.push(BattleEvent::BossHit { hero: idx, amount });
            } else {
                hero.entity_mut().take_damage(self.damage());
                events.push(BattleEvent::BossHit {
                    hero: idx,
                    amount: self.damage(),
                });
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn test_no_defence_before_first_round() {
        let boss = Boss::new("Fuse", 1000, 50);
        assert_eq!(boss.defence(), None);
    }

    #[test]
    fn test_defence_can_come_from_dead_hero() {
        let mut boss = Boss::new("Fuse", 1000, 50);
        let heroes = vec![Hero::warrior("Anton", 280, 10), Hero::hacker("Neo", 0, 5)];
        let mut dice = ScriptedDice::new().with_indices([1]);

        let chosen = boss.choose_defence(&heroes, &mut dice).unwrap();

        assert_eq!(chosen, Ability::Drain);
        assert_eq!(boss.defence(), Some(Ability::Drain));
    }

    #[test]
    fn test_defence_on_empty_roster() {
        let mut boss = Boss::new("Fuse", 1000, 50);
        let mut dice = ScriptedDice::new();

        assert_eq!(
            boss.choose_defence(&[], &mut dice),
            Err(DiceError::EmptySelection)
        );
        assert_eq!(boss.defence(), None);
    }

    #[test]
    fn test_attack_skips_dead_heroes() {
        let boss = Boss::new("Fuse", 1000, 50);
        let mut heroes = vec![Hero::warrior("Anton", 280, 10), Hero::warrior("Akakii", 0, 15)];
        let mut dice = ScriptedDice::new();

        let events = boss.attack(&mut heroes, &mut dice);

        assert_eq!(heroes[0].health(), 230);
        assert_eq!(heroes[1].health(), 0);
        assert_eq!(events, vec![BattleEvent::BossHit { hero: 0, amount: 50 }]);
    }

    #[test]
    fn test_matching_defence_does_not_shield() {
        let mut boss = Boss::new("Fuse", 1000, 50);
        let mut heroes = vec![Hero::healer("Aibolit", 250, 5, 15)];
        let mut dice = ScriptedDice::new();

        boss.choose_defence(&heroes, &mut dice).unwrap();
        assert!(boss.blocks(&heroes[0]));

        boss.attack(&mut heroes, &mut dice);
        assert_eq!(heroes[0].health(), 200);
    }

    #[test]
    fn test_berserk_blocks_under_mismatched_defence() {
        let mut boss = Boss::new("Fuse", 1000, 50);
        let mut heroes = vec![Hero::berserk("Guts", 260, 10), Hero::warrior("Anton", 280, 10)];
        // Defence from the warrior, then the 10-point block
        let mut dice = ScriptedDice::new().with_indices([1, 1]);

        boss.choose_defence(&heroes, &mut dice).unwrap();
        let events = boss.attack(&mut heroes, &mut dice);

        assert_eq!(heroes[0].health(), 220);
        assert_eq!(heroes[0].blocked_damage(), Some(10));
        assert_eq!(heroes[1].health(), 230);
        assert_eq!(
            events[..2],
            [
                BattleEvent::DamageBlocked { hero: 0, blocked: 10 },
                BattleEvent::BossHit { hero: 0, amount: 40 },
            ]
        );
    }

    #[test]
    fn test_berserk_block_saturates_with_huge_negative_damage() {
        let mut boss = Boss::new("Fuse", 1000, i32::MIN);
        let mut heroes = vec![Hero::berserk("Guts", 260, 10), Hero::warrior("Anton", 280, 10)];
        let mut dice = ScriptedDice::new().with_indices([1, 1]);

        boss.choose_defence(&heroes, &mut dice).unwrap();
        let events = boss.attack(&mut heroes, &mut dice);

        assert_eq!(events[1], BattleEvent::BossHit { hero: 0, amount: i32::MIN });
        assert_eq!(heroes[0].health(), i32::MAX);
    }

    #[test]
    fn test_berserk_takes_full_hit_under_own_defence() {
        let mut boss = Boss::new("Fuse", 1000, 50);
        let mut heroes = vec![Hero::berserk("Guts", 260, 10)];
        let mut dice = ScriptedDice::new();

        boss.choose_defence(&heroes, &mut dice).unwrap();
        boss.attack(&mut heroes, &mut dice);

        assert_eq!(heroes[0].health(), 210);
        assert_eq!(heroes[0].blocked_damage(), Some(0));
        // Only the defence draw was made
        assert_eq!(dice.draws(), 1);
    }
}
