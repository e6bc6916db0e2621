//! In-memory storage adapter backed by DashMap.

use dashmap::DashMap;
use sheetsmith_domain::{
    Attack, CharacterSheet, Currency, EquipmentItem, Feature, HitDice, SheetId, Skill,
    SkillProficiency,
};

use super::ports::{RepoError, SheetRepo};
use async_trait::async_trait;

/// In-memory character sheet store.
///
/// Sheets live only for the lifetime of the process. Suitable for
/// development and testing; swap the port implementation for durable
/// storage.
#[derive(Default)]
pub struct InMemorySheetRepo {
    sheets: DashMap<SheetId, CharacterSheet>,
}

impl InMemorySheetRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a demo character.
    pub fn seeded() -> Self {
        let repo = Self::new();
        let sheet = demo_sheet();
        repo.sheets.insert(sheet.id, sheet);
        repo
    }
}

/// Demo character: a level 5 dwarf barbarian.
pub(crate) fn demo_sheet() -> CharacterSheet {
    let mut sheet = CharacterSheet::new("Thorian Stormbreaker");
    sheet.race = "dwarf".to_string();
    sheet.class = "barbarian".to_string();
    sheet.level = 5;
    sheet.background = "Soldier".to_string();
    sheet.alignment = "chaotic-good".to_string();
    sheet.experience = 6500;

    sheet.abilities.strength = 16;
    sheet.abilities.dexterity = 14;
    sheet.abilities.constitution = 16;
    sheet.abilities.intelligence = 10;
    sheet.abilities.wisdom = 12;
    sheet.abilities.charisma = 8;

    sheet.saving_throws.strength = true;
    sheet.saving_throws.constitution = true;

    for skill in [
        Skill::Athletics,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Perception,
        Skill::Survival,
    ] {
        sheet.skills.insert(
            skill,
            SkillProficiency {
                proficient: true,
                expertise: false,
            },
        );
    }

    sheet.proficiency_bonus = 3;
    sheet.armor_class = 16;
    sheet.speed = 25;
    sheet.current_hit_points = 38;
    sheet.hit_dice_type = HitDice::D12;
    sheet.max_hit_dice = 5;
    sheet.current_hit_dice = 3;

    sheet.attacks = vec![
        Attack {
            name: "Greataxe".to_string(),
            bonus: "+6".to_string(),
            damage: "1d12+3 slashing".to_string(),
        },
        Attack {
            name: "Handaxe".to_string(),
            bonus: "+6".to_string(),
            damage: "1d6+3 slashing".to_string(),
        },
        Attack {
            name: "Javelin".to_string(),
            bonus: "+6".to_string(),
            damage: "1d6+3 piercing".to_string(),
        },
    ];
    sheet.equipment = vec![
        EquipmentItem {
            name: "Greataxe".to_string(),
            quantity: 1,
            weight: Some("7 lb.".to_string()),
        },
        EquipmentItem {
            name: "Explorer's Pack".to_string(),
            quantity: 1,
            weight: Some("10 lb.".to_string()),
        },
        EquipmentItem {
            name: "Javelins".to_string(),
            quantity: 4,
            weight: Some("8 lb.".to_string()),
        },
        EquipmentItem {
            name: "Chain Mail".to_string(),
            quantity: 1,
            weight: Some("55 lb.".to_string()),
        },
        EquipmentItem {
            name: "Backpack".to_string(),
            quantity: 1,
            weight: Some("5 lb.".to_string()),
        },
    ];
    sheet.currency = Currency {
        copper: 15,
        silver: 30,
        electrum: 0,
        gold: 75,
        platinum: 0,
    };

    sheet.personality_traits =
        "I am always polite and respectful. But when battle starts, I become a force of nature."
            .to_string();
    sheet.ideals = "Honor. The way I fight is a reflection of who I am. (Lawful)".to_string();
    sheet.bonds = "I fight for those who cannot fight for themselves.".to_string();
    sheet.flaws = "I have trouble trusting strangers. Those who aren't part of my tribe might \
                   be waiting to stab me in the back."
        .to_string();

    sheet.features = vec![
        Feature {
            name: "Rage".to_string(),
            source: "Barbarian".to_string(),
            description: "In battle, you fight with primal ferocity. On your turn, you can \
                          enter a rage as a bonus action. While raging, you gain advantage on \
                          STR checks and STR saving throws, +2 damage with melee weapons using \
                          STR, and resistance to bludgeoning, piercing, and slashing damage."
                .to_string(),
            uses: Some("3/day".to_string()),
        },
        Feature {
            name: "Unarmored Defense".to_string(),
            source: "Barbarian".to_string(),
            description: "While you are not wearing any armor, your AC equals 10 + your \
                          Dexterity modifier + your Constitution modifier."
                .to_string(),
            uses: None,
        },
        Feature {
            name: "Reckless Attack".to_string(),
            source: "Barbarian".to_string(),
            description: "You can throw aside all concern for defense to attack with fierce \
                          desperation. When you make your first attack on your turn, you can \
                          decide to attack recklessly, giving you advantage on melee weapon \
                          attack rolls using Strength during this turn, but attack rolls \
                          against you have advantage until your next turn."
                .to_string(),
            uses: None,
        },
        Feature {
            name: "Darkvision".to_string(),
            source: "Dwarf".to_string(),
            description: "You can see in dim light within 60 feet of you as if it were bright \
                          light, and in darkness as if it were dim light."
                .to_string(),
            uses: None,
        },
        Feature {
            name: "Dwarven Resilience".to_string(),
            source: "Dwarf".to_string(),
            description: "You have advantage on saving throws against poison, and you have \
                          resistance against poison damage."
                .to_string(),
            uses: None,
        },
    ];

    sheet
}

#[async_trait]
impl SheetRepo for InMemorySheetRepo {
    async fn get(&self, id: SheetId) -> Result<Option<CharacterSheet>, RepoError> {
        Ok(self.sheets.get(&id).map(|entry| entry.clone()))
    }

    async fn list(&self) -> Result<Vec<CharacterSheet>, RepoError> {
        Ok(self.sheets.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn save(&self, sheet: &CharacterSheet) -> Result<(), RepoError> {
        self.sheets.insert(sheet.id, sheet.clone());
        Ok(())
    }

    async fn delete(&self, id: SheetId) -> Result<(), RepoError> {
        self.sheets
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("CharacterSheet", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_get_round_trip() {
        let repo = InMemorySheetRepo::new();
        let sheet = CharacterSheet::new("Mira");
        repo.save(&sheet).await.unwrap();

        let found = repo.get(sheet.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Mira");
        assert_eq!(found.id, sheet.id);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = InMemorySheetRepo::new();
        let found = repo.get(SheetId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_returns_all_sheets() {
        let repo = InMemorySheetRepo::new();
        repo.save(&CharacterSheet::new("A")).await.unwrap();
        repo.save(&CharacterSheet::new("B")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing() {
        let repo = InMemorySheetRepo::new();
        let mut sheet = CharacterSheet::new("Before");
        repo.save(&sheet).await.unwrap();

        sheet.name = "After".to_string();
        repo.save(&sheet).await.unwrap();

        let found = repo.get(sheet.id).await.unwrap().unwrap();
        assert_eq!(found.name, "After");
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_sheet() {
        let repo = InMemorySheetRepo::new();
        let sheet = CharacterSheet::new("Gone");
        repo.save(&sheet).await.unwrap();

        repo.delete(sheet.id).await.unwrap();
        assert!(repo.get(sheet.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemorySheetRepo::new();
        let err = repo.delete(SheetId::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_seeded_contains_demo_character() {
        let repo = InMemorySheetRepo::seeded();
        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Thorian Stormbreaker");
        assert_eq!(all[0].level, 5);
        assert_eq!(all[0].hit_dice_type, HitDice::D12);
        assert_eq!(all[0].current_hit_dice, 3);
        assert_eq!(all[0].attacks.len(), 3);
        assert_eq!(all[0].equipment.len(), 5);
        assert_eq!(all[0].features.len(), 5);
        assert_eq!(all[0].currency.gold, 75);
        assert!(!all[0].personality_traits.is_empty());
        assert!(all[0].spellcasting.ability.is_none());
    }
}
