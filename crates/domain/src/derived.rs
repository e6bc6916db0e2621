//! Derived statistic snapshot computed from a character sheet.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entities::CharacterSheet;
use crate::rules;
use crate::value_objects::{Ability, Skill};

/// Everything the sheet UI displays that is not stored on the record.
///
/// Recomputed from the raw attribute record on every read; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub ability_modifiers: BTreeMap<Ability, i32>,
    pub modifier_strings: BTreeMap<Ability, String>,
    pub saving_throws: BTreeMap<Ability, i32>,
    pub skills: BTreeMap<Skill, i32>,
    pub passive_perception: i32,
    pub initiative_bonus: i32,
    /// 0 when no spellcasting ability is selected.
    pub spell_save_dc: i32,
    /// 0 when no spellcasting ability is selected.
    pub spell_attack_bonus: i32,
    pub carrying_capacity: i32,
    pub max_hit_points: i32,
}

impl DerivedStats {
    /// Compute the full display snapshot from a stored record.
    pub fn compute(sheet: &CharacterSheet) -> Self {
        let prof = sheet.proficiency_bonus;

        let mut ability_modifiers = BTreeMap::new();
        let mut modifier_strings = BTreeMap::new();
        let mut saving_throws = BTreeMap::new();
        for ability in Ability::ALL {
            let score = sheet.abilities.get(ability);
            ability_modifiers.insert(ability, rules::ability_modifier(score));
            modifier_strings.insert(ability, rules::modifier_string(score));
            saving_throws.insert(
                ability,
                rules::saving_throw_modifier(score, sheet.saving_throws.proficient(ability), prof),
            );
        }

        let mut skills = BTreeMap::new();
        for skill in Skill::ALL {
            let proficiency = sheet.skill_proficiency(skill);
            skills.insert(
                skill,
                rules::skill_modifier(
                    sheet.abilities.get(skill.ability()),
                    proficiency.proficient,
                    prof,
                    proficiency.expertise,
                ),
            );
        }

        let perception = sheet.skill_proficiency(Skill::Perception);

        // Non-casters show 0; the rules functions are not called at all.
        let (spell_save_dc, spell_attack_bonus) = match sheet.spellcasting.ability {
            Some(ability) => {
                let score = sheet.abilities.get(ability);
                (
                    rules::spell_save_dc(score, prof),
                    rules::spell_attack_bonus(score, prof),
                )
            }
            None => (0, 0),
        };

        Self {
            ability_modifiers,
            modifier_strings,
            saving_throws,
            skills,
            passive_perception: rules::passive_perception(
                sheet.abilities.wisdom,
                perception.proficient,
                prof,
            ),
            initiative_bonus: rules::initiative_bonus(sheet.abilities.dexterity),
            spell_save_dc,
            spell_attack_bonus,
            carrying_capacity: rules::carrying_capacity(sheet.abilities.strength),
            max_hit_points: rules::max_hit_points(
                sheet.level,
                sheet.hit_dice_type,
                sheet.abilities.constitution,
            ),
        }
    }
}
