//! Hero data structures
//!
//! A hero is an [`Entity`] plus an [`Archetype`]. The archetype decides the
//! ability tag and carries whatever per-hero state the special power needs.

use serde::Serialize;

use super::ability::Ability;
use super::entity::Entity;

/// Critical hit multiplier range for warriors (inclusive)
pub const WARRIOR_CRIT_MIN: i32 = 2;
pub const WARRIOR_CRIT_MAX: i32 = 5;

/// Rounds during which a mage keeps boosting
pub const MAGIC_ROUNDS_ACTIVE: u32 = 4;
/// Damage added to each living hero per boost
pub const MAGIC_BOOST_AMOUNT: i32 = 5;

/// Amounts the boss may fail to land on a berserk
pub const BERSERK_BLOCK_CHOICES: [i32; 2] = [5, 10];

/// Health moved from the boss to an ally per drain
pub const HACKER_DRAIN_AMOUNT: i32 = 25;

/// Hero archetype and its ability state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "archetype", rename_all = "snake_case")]
pub enum Archetype {
    /// Hits critically for a random multiple of its damage
    Warrior,
    /// Boosts the damage of every living hero in the early rounds
    Magic { rounds_active: u32, boost_amount: i32 },
    /// Heals every other living hero
    Healer { heal_points: i32 },
    /// Absorbs part of the boss hit and sends it back
    Berserk { blocked_damage: i32 },
    /// Never attacks; sacrifices itself once to revive a fallen ally
    Witcher { revived: bool },
    /// Every other round drains boss health into a random ally
    Hacker { drain_amount: i32 },
}

impl Archetype {
    /// Ability tag owned by this archetype
    pub fn ability(&self) -> Ability {
        match self {
            Archetype::Warrior => Ability::CriticalDamage,
            Archetype::Magic { .. } => Ability::Boost,
            Archetype::Healer { .. } => Ability::Heal,
            Archetype::Berserk { .. } => Ability::BlockRevert,
            Archetype::Witcher { .. } => Ability::Revive,
            Archetype::Hacker { .. } => Ability::Drain,
        }
    }

    /// Short archetype label
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Warrior => "Warrior",
            Archetype::Magic { .. } => "Magic",
            Archetype::Healer { .. } => "Healer",
            Archetype::Berserk { .. } => "Berserk",
            Archetype::Witcher { .. } => "Witcher",
            Archetype::Hacker { .. } => "Hacker",
        }
    }
}

/// A hero on the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    entity: Entity,
    archetype: Archetype,
}

impl Hero {
    /// Create a hero with an explicit archetype
    pub fn new(name: impl Into<String>, health: i32, damage: i32, archetype: Archetype) -> Self {
        Self {
            entity: Entity::new(name, health, damage),
            archetype,
        }
    }

    pub fn warrior(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(name, health, damage, Archetype::Warrior)
    }

    pub fn magic(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(
            name,
            health,
            damage,
            Archetype::Magic {
                rounds_active: MAGIC_ROUNDS_ACTIVE,
                boost_amount: MAGIC_BOOST_AMOUNT,
            },
        )
    }

    pub fn healer(name: impl Into<String>, health: i32, damage: i32, heal_points: i32) -> Self {
        Self::new(name, health, damage, Archetype::Healer { heal_points })
    }

    pub fn berserk(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(name, health, damage, Archetype::Berserk { blocked_damage: 0 })
    }

    pub fn witcher(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(name, health, damage, Archetype::Witcher { revived: false })
    }

    pub fn hacker(name: impl Into<String>, health: i32, damage: i32) -> Self {
        Self::new(
            name,
            health,
            damage,
            Archetype::Hacker {
                drain_amount: HACKER_DRAIN_AMOUNT,
            },
        )
    }

    /// Shared entity state
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Mutable entity state
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

    /// Archetype and its current ability state
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Ability tag of this hero
    pub fn ability(&self) -> Ability {
        self.archetype.ability()
    }

    /// Check if this hero is a berserk
    pub fn is_berserk(&self) -> bool {
        matches!(self.archetype, Archetype::Berserk { .. })
    }

    /// Damage the boss failed to land on this berserk, if it is one
    pub fn blocked_damage(&self) -> Option<i32> {
        match self.archetype {
            Archetype::Berserk { blocked_damage } => Some(blocked_damage),
            _ => None,
        }
    }

    /// Record blocked damage. No-op for non-berserk heroes.
    pub fn set_blocked_damage(&mut self, value: i32) {
        if let Archetype::Berserk { blocked_damage } = &mut self.archetype {
            *blocked_damage = value;
        }
    }

    /// Whether this witcher already used its revive, if it is one
    pub fn is_revived(&self) -> Option<bool> {
        match self.archetype {
            Archetype::Witcher { revived } => Some(revived),
            _ => None,
        }
    }

    /// Mark the witcher revive as spent. No-op for other heroes.
    pub fn mark_revived(&mut self) {
        if let Archetype::Witcher { revived } = &mut self.archetype {
            *revived = true;
        }
    }
}
