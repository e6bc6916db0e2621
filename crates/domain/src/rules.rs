//! Derived-statistics rules engine.
//!
//! Stateless, pure functions that compute display values from the raw
//! attribute record. Nothing here mutates or stores anything: the
//! persistence layer keeps only the raw record and these derivations are
//! recomputed on every read.
//!
//! All functions are total over well-typed input. Scores outside the
//! nominal 1-30 range are computed as-is, without clamping.

use crate::value_objects::HitDice;

/// Ability modifier: floor((score - 10) / 2).
pub fn ability_modifier(score: i32) -> i32 {
    // Rust's `/` truncates toward zero; the rules want floor division.
    let diff = score - 10;
    if diff >= 0 {
        diff / 2
    } else {
        (diff - 1) / 2
    }
}

/// Sign-prefixed rendering of an ability modifier (e.g., "+3", "+0", "-1").
pub fn modifier_string(score: i32) -> String {
    let modifier = ability_modifier(score);
    if modifier >= 0 {
        format!("+{}", modifier)
    } else {
        modifier.to_string()
    }
}

/// Proficiency bonus from character level: ceil(level / 4) + 1.
///
/// Yields 2 at levels 1-4, 3 at 5-8, up to 6 at 17-20.
pub fn proficiency_bonus(level: u8) -> i32 {
    ((i32::from(level) - 1) / 4) + 2
}

/// Saving throw modifier: ability modifier, plus the proficiency bonus if
/// the character is proficient in that save.
pub fn saving_throw_modifier(ability_score: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
    let modifier = ability_modifier(ability_score);
    if proficient {
        modifier + proficiency_bonus
    } else {
        modifier
    }
}

/// Skill check modifier.
///
/// Expertise doubles the proficiency contribution. It is a rider on
/// proficiency: when `proficient` is false the expertise flag is ignored
/// and the bare ability modifier is returned.
pub fn skill_modifier(
    ability_score: i32,
    proficient: bool,
    proficiency_bonus: i32,
    expertise: bool,
) -> i32 {
    let modifier = ability_modifier(ability_score);
    if proficient {
        modifier
            + if expertise {
                proficiency_bonus * 2
            } else {
                proficiency_bonus
            }
    } else {
        modifier
    }
}

/// Passive perception: 10 + wisdom modifier, plus the proficiency bonus if
/// proficient in Perception.
pub fn passive_perception(wisdom_score: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
    10 + ability_modifier(wisdom_score)
        + if proficient { proficiency_bonus } else { 0 }
}

/// Spell save DC: 8 + casting ability modifier + proficiency bonus.
///
/// Callers decide what a non-caster shows (the sheet substitutes 0 without
/// calling this).
pub fn spell_save_dc(spell_ability_score: i32, proficiency_bonus: i32) -> i32 {
    8 + ability_modifier(spell_ability_score) + proficiency_bonus
}

/// Spell attack bonus: casting ability modifier + proficiency bonus.
pub fn spell_attack_bonus(spell_ability_score: i32, proficiency_bonus: i32) -> i32 {
    ability_modifier(spell_ability_score) + proficiency_bonus
}

/// Initiative bonus: just the dexterity modifier.
pub fn initiative_bonus(dexterity_score: i32) -> i32 {
    ability_modifier(dexterity_score)
}

/// Carrying capacity in pounds: strength score times 15.
pub fn carrying_capacity(strength_score: i32) -> i32 {
    strength_score * 15
}

/// Max hit points: maximum die roll at level 1, then the average die roll
/// (rounded up) per additional level, with the constitution modifier
/// applied at every level including the first.
///
/// The per-level gain is not clamped to a minimum of 1: a negative
/// constitution modifier on a small hit die can reduce it to zero or below.
pub fn max_hit_points(level: u8, hit_dice: HitDice, constitution_score: i32) -> i32 {
    let die = hit_dice.die();
    let con_modifier = ability_modifier(constitution_score);
    let average_roll = die / 2; // ceil(die / 2); hit dice are even-sided
    die + con_modifier + (i32::from(level) - 1) * (average_roll + con_modifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_modifier_floor_division() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(15), 2);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(30), 10);
    }

    #[test]
    fn test_ability_modifier_is_unclamped() {
        assert_eq!(ability_modifier(-2), -6);
        assert_eq!(ability_modifier(40), 15);
    }

    #[test]
    fn test_modifier_string() {
        assert_eq!(modifier_string(14), "+2");
        assert_eq!(modifier_string(10), "+0");
        assert_eq!(modifier_string(7), "-2");
    }

    #[test]
    fn test_proficiency_bonus_steps() {
        assert_eq!(proficiency_bonus(1), 2);
        assert_eq!(proficiency_bonus(4), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(8), 3);
        assert_eq!(proficiency_bonus(9), 4);
        assert_eq!(proficiency_bonus(17), 6);
        assert_eq!(proficiency_bonus(20), 6);
    }

    #[test]
    fn test_proficiency_bonus_is_non_decreasing() {
        for level in 1..20u8 {
            assert!(proficiency_bonus(level + 1) >= proficiency_bonus(level));
        }
    }

    #[test]
    fn test_saving_throw_modifier() {
        assert_eq!(saving_throw_modifier(16, true, 3), 6);
        assert_eq!(saving_throw_modifier(16, false, 3), 3);
    }

    #[test]
    fn test_skill_modifier_expertise_doubles_bonus() {
        assert_eq!(skill_modifier(18, true, 2, true), 8);
        assert_eq!(skill_modifier(18, true, 2, false), 6);
    }

    #[test]
    fn test_skill_modifier_ignores_expertise_without_proficiency() {
        assert_eq!(skill_modifier(18, false, 2, true), 4);
        assert_eq!(skill_modifier(18, false, 2, false), 4);
    }

    #[test]
    fn test_passive_perception() {
        assert_eq!(passive_perception(14, true, 2), 14);
        assert_eq!(passive_perception(10, false, 2), 10);
        assert_eq!(passive_perception(8, false, 2), 9);
    }

    #[test]
    fn test_spell_save_dc_and_attack_bonus() {
        assert_eq!(spell_save_dc(16, 3), 14);
        assert_eq!(spell_attack_bonus(16, 3), 6);
    }

    #[test]
    fn test_initiative_bonus() {
        assert_eq!(initiative_bonus(14), 2);
        assert_eq!(initiative_bonus(9), -1);
    }

    #[test]
    fn test_carrying_capacity() {
        assert_eq!(carrying_capacity(16), 240);
        assert_eq!(carrying_capacity(10), 150);
    }

    #[test]
    fn test_max_hit_points() {
        // level 1 = 12 + 3, each extra level = ceil(12/2) + 3
        assert_eq!(max_hit_points(5, HitDice::D12, 16), 51);
        assert_eq!(max_hit_points(1, HitDice::D6, 10), 6);
        assert_eq!(max_hit_points(1, HitDice::D8, 14), 10);
    }

    #[test]
    fn test_max_hit_points_negative_con_is_unclamped() {
        // CON 2 is a -4 modifier; per-level gain on a d6 is 3 - 4 = -1
        assert_eq!(max_hit_points(1, HitDice::D6, 2), 2);
        assert_eq!(max_hit_points(5, HitDice::D6, 2), -2);
    }

    #[test]
    fn test_derivations_are_idempotent() {
        assert_eq!(ability_modifier(17), ability_modifier(17));
        assert_eq!(max_hit_points(5, HitDice::D10, 12), max_hit_points(5, HitDice::D10, 12));
    }
}
