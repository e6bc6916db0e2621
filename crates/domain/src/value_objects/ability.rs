//! Ability value objects - the six core abilities of a d20 character.
//!
//! Provides type safety for ability references instead of magic strings
//! like "strength" or "STR".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The six character abilities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Physical power and carrying capacity
    Strength,
    /// Agility and reflexes
    Dexterity,
    /// Endurance and health
    Constitution,
    /// Reasoning and memory
    Intelligence,
    /// Perception and insight
    Wisdom,
    /// Force of personality
    Charisma,
}

impl Ability {
    /// All six abilities in record order.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Lowercase identifier used in the persisted record (e.g., "strength").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Short uppercase form (e.g., "STR", "DEX").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Full display name (e.g., "Strength").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "str" | "strength" => Ok(Self::Strength),
            "dex" | "dexterity" => Ok(Self::Dexterity),
            "con" | "constitution" => Ok(Self::Constitution),
            "int" | "intelligence" => Ok(Self::Intelligence),
            "wis" | "wisdom" => Ok(Self::Wisdom),
            "cha" | "charisma" => Ok(Self::Charisma),
            _ => Err(DomainError::parse(format!("unknown ability: {}", s))),
        }
    }
}

/// The six raw ability scores.
///
/// Nominally 1-30, but nothing in the rules engine clamps them; the range
/// is a UI hint only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl AbilityScores {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}

/// Per-ability saving throw proficiency flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingThrowProficiencies {
    pub strength: bool,
    pub dexterity: bool,
    pub constitution: bool,
    pub intelligence: bool,
    pub wisdom: bool,
    pub charisma: bool,
}

impl SavingThrowProficiencies {
    pub fn proficient(&self, ability: Ability) -> bool {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}
