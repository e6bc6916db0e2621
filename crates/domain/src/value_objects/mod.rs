//! Value objects for the character record.

mod ability;
mod hit_dice;
mod skill;

pub use ability::{Ability, AbilityScores, SavingThrowProficiencies};
pub use hit_dice::HitDice;
pub use skill::{Skill, SkillProficiency};
