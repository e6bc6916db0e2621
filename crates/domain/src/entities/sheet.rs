//! The character sheet attribute record.
//!
//! This is exactly what the persistence layer stores and returns. Derived
//! values (modifiers, save DCs, hit point maxima) are recomputed from it on
//! every read and never written back; see [`crate::derived::DerivedStats`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::SheetId;
use crate::value_objects::{
    Ability, AbilityScores, HitDice, SavingThrowProficiencies, Skill, SkillProficiency,
};

/// A single weapon or attack entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attack {
    pub name: String,
    pub bonus: String,
    pub damage: String,
}

/// A carried item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentItem {
    pub name: String,
    pub quantity: u32,
    pub weight: Option<String>,
}

/// Coin purse, by denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Currency {
    pub copper: i32,
    pub silver: i32,
    pub electrum: i32,
    pub gold: i32,
    pub platinum: i32,
}

/// A class, racial, or background feature.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    pub name: String,
    pub source: String,
    pub description: String,
    pub uses: Option<String>,
}

/// Spell slot counts per spell level, 1 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellSlots {
    pub level1: u8,
    pub level2: u8,
    pub level3: u8,
    pub level4: u8,
    pub level5: u8,
    pub level6: u8,
    pub level7: u8,
    pub level8: u8,
    pub level9: u8,
}

/// Spellcasting configuration.
///
/// Save DC and attack bonus are never stored here; they are derived from
/// the casting ability on every read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spellcasting {
    pub class: String,
    /// `None` means the character is not a spellcaster.
    pub ability: Option<Ability>,
    pub slots: SpellSlots,
    pub slots_used: SpellSlots,
}

/// A known or prepared spell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spell {
    pub id: String,
    pub name: String,
    pub level: u8,
    pub casting_time: String,
    pub range: String,
    pub components: String,
    pub duration: String,
    pub description: String,
    pub prepared: bool,
}

/// Death saving throw track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeathSaves {
    pub successes: [bool; 3],
    pub failures: [bool; 3],
}

/// The raw character attribute record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterSheet {
    pub id: SheetId,
    pub name: String,
    pub race: String,
    pub class: String,
    pub level: u8,
    pub background: String,
    pub alignment: String,
    pub experience: i32,
    pub abilities: AbilityScores,
    pub saving_throws: SavingThrowProficiencies,
    /// Untrained skills are simply absent from the map.
    pub skills: BTreeMap<Skill, SkillProficiency>,
    pub proficiency_bonus: i32,
    pub inspiration: bool,
    pub armor_class: i32,
    pub speed: i32,
    pub current_hit_points: i32,
    pub temporary_hit_points: i32,
    pub hit_dice_type: HitDice,
    pub max_hit_dice: i32,
    pub current_hit_dice: i32,
    pub death_saves: DeathSaves,
    pub attacks: Vec<Attack>,
    pub equipment: Vec<EquipmentItem>,
    pub currency: Currency,
    pub personality_traits: String,
    pub ideals: String,
    pub bonds: String,
    pub flaws: String,
    pub features: Vec<Feature>,
    pub spellcasting: Spellcasting,
    pub spells: Vec<Spell>,
    pub notes: String,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self::new("New Character")
    }
}

impl CharacterSheet {
    /// A fresh record with the editor's starting values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SheetId::new(),
            name: name.into(),
            race: "human".to_string(),
            class: "fighter".to_string(),
            level: 1,
            background: String::new(),
            alignment: "true-neutral".to_string(),
            experience: 0,
            abilities: AbilityScores::default(),
            saving_throws: SavingThrowProficiencies::default(),
            skills: BTreeMap::new(),
            proficiency_bonus: 2,
            inspiration: false,
            armor_class: 10,
            speed: 30,
            current_hit_points: 10,
            temporary_hit_points: 0,
            hit_dice_type: HitDice::D8,
            max_hit_dice: 1,
            current_hit_dice: 1,
            death_saves: DeathSaves::default(),
            attacks: Vec::new(),
            equipment: Vec::new(),
            currency: Currency::default(),
            personality_traits: String::new(),
            ideals: String::new(),
            bonds: String::new(),
            flaws: String::new(),
            features: Vec::new(),
            spellcasting: Spellcasting::default(),
            spells: Vec::new(),
            notes: String::new(),
        }
    }

    /// Proficiency entry for a skill.
    pub fn skill_proficiency(&self, skill: Skill) -> SkillProficiency {
        self.skills.get(&skill).copied().unwrap_or_default()
    }

    /// Record invariants, checked at the persistence boundary.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("character name cannot be empty"));
        }
        if self.level == 0 {
            return Err(DomainError::validation("level must be at least 1"));
        }
        if self.proficiency_bonus < 1 {
            return Err(DomainError::validation(
                "proficiency bonus must be a positive integer",
            ));
        }
        Ok(())
    }
}
