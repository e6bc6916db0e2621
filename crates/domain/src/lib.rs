pub mod derived;
pub mod entities;
pub mod error;
pub mod ids;
pub mod rules;
pub mod value_objects;

pub use derived::DerivedStats;
pub use entities::{
    Attack, CharacterSheet, Currency, DeathSaves, EquipmentItem, Feature, Spell, SpellSlots,
    Spellcasting,
};
pub use error::DomainError;
pub use ids::SheetId;
pub use value_objects::{
    Ability, AbilityScores, HitDice, SavingThrowProficiencies, Skill, SkillProficiency,
};
