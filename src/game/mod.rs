//! Game entities
//!
//! The boss, the heroes and the state they share. Everything that changes
//! health or damage goes through [`Entity`] so the health clamp holds.

pub mod ability;
pub mod boss;
pub mod entity;
pub mod hero;

pub use ability::Ability;
pub use boss::Boss;
pub use entity::Entity;
pub use hero::{Archetype, Hero};
