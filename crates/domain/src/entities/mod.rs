//! Entities - the persisted character sheet record.

mod sheet;

pub use sheet::{
    Attack, CharacterSheet, Currency, DeathSaves, EquipmentItem, Feature, Spell, SpellSlots,
    Spellcasting,
};
