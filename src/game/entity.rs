//! Shared entity state
//!
//! Both the boss and every hero carry a name, a health pool and a damage
//! value. Health never drops below zero: every write goes through
//! [`Entity::set_health`], which clamps.

use serde::Serialize;

/// Base state shared by the boss and the heroes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    name: String,
    health: i32,
    damage: i32,
}

impl Entity {
    /// Create a new entity. A negative starting health is stored as zero.
    pub fn new(name: impl Into<String>, health: i32, damage: i32) -> Self {
        let mut entity = Self {
            name: name.into(),
            health: 0,
            damage,
        };
        entity.set_health(health);
        entity
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health (always >= 0)
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Current damage
    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Store a new health value, clamping negatives to zero
    pub fn set_health(&mut self, value: i32) {
        self.health = value.max(0);
    }

    /// Store a new damage value as-is
    pub fn set_damage(&mut self, value: i32) {
        self.damage = value;
    }

    /// Whether the entity still has health left
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract `amount` from health
    pub fn take_damage(&mut self, amount: i32) {
        self.set_health(self.health.saturating_sub(amount));
    }

    /// Add `amount` to health
    pub fn heal(&mut self, amount: i32) {
        self.set_health(self.health.saturating_add(amount));
    }

    /// Add `amount` to damage
    pub fn boost(&mut self, amount: i32) {
        self.set_damage(self.damage.saturating_add(amount));
    }
}
