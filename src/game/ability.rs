//! Hero ability tags
//!
//! Every hero archetype owns exactly one tag. The boss adopts one tag per
//! round as its defence and ignores heroes carrying that tag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Special-power category of a hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ability {
    CriticalDamage,
    Boost,
    Heal,
    BlockRevert,
    Revive,
    Drain,
}

impl Ability {
    /// All tags, in archetype declaration order
    pub const ALL: [Ability; 6] = [
        Ability::CriticalDamage,
        Ability::Boost,
        Ability::Heal,
        Ability::BlockRevert,
        Ability::Revive,
        Ability::Drain,
    ];

    /// Canonical upper-case tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            Ability::CriticalDamage => "CRITICAL_DAMAGE",
            Ability::Boost => "BOOST",
            Ability::Heal => "HEAL",
            Ability::BlockRevert => "BLOCK_REVERT",
            Ability::Revive => "REVIVE",
            Ability::Drain => "DRAIN",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
