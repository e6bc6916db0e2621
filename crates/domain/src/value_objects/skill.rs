//! Skill value objects.
//!
//! The skill list and the skill-to-ability mapping are fixed game rules,
//! not character data, so both live in a compile-time table here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Ability;

/// The eighteen standard skills.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    /// All skills in display order.
    pub const ALL: [Skill; 18] = [
        Self::Acrobatics,
        Self::AnimalHandling,
        Self::Arcana,
        Self::Athletics,
        Self::Deception,
        Self::History,
        Self::Insight,
        Self::Intimidation,
        Self::Investigation,
        Self::Medicine,
        Self::Nature,
        Self::Perception,
        Self::Performance,
        Self::Persuasion,
        Self::Religion,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Survival,
    ];

    /// The ability each skill check is based on.
    pub fn ability(&self) -> Ability {
        match self {
            Self::Athletics => Ability::Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Ability::Dexterity,
            Self::Arcana | Self::History | Self::Investigation | Self::Nature | Self::Religion => {
                Ability::Intelligence
            }
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Ability::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Ability::Charisma
            }
        }
    }

    /// Kebab-case identifier used in the persisted record (e.g., "sleight-of-hand").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acrobatics => "acrobatics",
            Self::AnimalHandling => "animal-handling",
            Self::Arcana => "arcana",
            Self::Athletics => "athletics",
            Self::Deception => "deception",
            Self::History => "history",
            Self::Insight => "insight",
            Self::Intimidation => "intimidation",
            Self::Investigation => "investigation",
            Self::Medicine => "medicine",
            Self::Nature => "nature",
            Self::Perception => "perception",
            Self::Performance => "performance",
            Self::Persuasion => "persuasion",
            Self::Religion => "religion",
            Self::SleightOfHand => "sleight-of-hand",
            Self::Stealth => "stealth",
            Self::Survival => "survival",
        }
    }

    /// Full display name (e.g., "Sleight of Hand").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Acrobatics => "Acrobatics",
            Self::AnimalHandling => "Animal Handling",
            Self::Arcana => "Arcana",
            Self::Athletics => "Athletics",
            Self::Deception => "Deception",
            Self::History => "History",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Investigation => "Investigation",
            Self::Medicine => "Medicine",
            Self::Nature => "Nature",
            Self::Perception => "Perception",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
            Self::Religion => "Religion",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("unknown skill: {}", s)))
    }
}

/// Per-skill proficiency flags.
///
/// Expertise is a rider on proficiency: an entry with `expertise` set but
/// `proficient` unset behaves as untrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillProficiency {
    pub proficient: bool,
    pub expertise: bool,
}
