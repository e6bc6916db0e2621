//! Character sheet use cases: CRUD plus derived statistics.

mod error;

pub use error::SheetError;

use std::sync::Arc;

use sheetsmith_domain::{CharacterSheet, DerivedStats, SheetId};

use crate::infrastructure::ports::SheetRepo;

/// Use cases for managing character sheets.
pub struct SheetUseCases {
    sheets: Arc<dyn SheetRepo>,
}

impl SheetUseCases {
    pub fn new(sheets: Arc<dyn SheetRepo>) -> Self {
        Self { sheets }
    }

    /// Create a new sheet from the submitted record.
    ///
    /// A fresh ID is always assigned; any client-supplied ID is ignored.
    pub async fn create(&self, mut sheet: CharacterSheet) -> Result<CharacterSheet, SheetError> {
        sheet.id = SheetId::new();
        sheet.validate()?;
        self.sheets.save(&sheet).await?;
        tracing::info!(sheet_id = %sheet.id, name = %sheet.name, "Created character sheet");
        Ok(sheet)
    }

    /// Fetch a single sheet by ID.
    pub async fn get(&self, id: SheetId) -> Result<CharacterSheet, SheetError> {
        self.sheets
            .get(id)
            .await?
            .ok_or(SheetError::SheetNotFound(id))
    }

    /// List all stored sheets.
    pub async fn list(&self) -> Result<Vec<CharacterSheet>, SheetError> {
        Ok(self.sheets.list().await?)
    }

    /// Replace an existing sheet with the submitted record.
    ///
    /// The path ID wins over any ID in the body. Fails if no sheet with
    /// that ID exists.
    pub async fn update(
        &self,
        id: SheetId,
        mut sheet: CharacterSheet,
    ) -> Result<CharacterSheet, SheetError> {
        if self.sheets.get(id).await?.is_none() {
            return Err(SheetError::SheetNotFound(id));
        }
        sheet.id = id;
        sheet.validate()?;
        self.sheets.save(&sheet).await?;
        tracing::info!(sheet_id = %id, name = %sheet.name, "Updated character sheet");
        Ok(sheet)
    }

    /// Delete a sheet by ID.
    pub async fn delete(&self, id: SheetId) -> Result<(), SheetError> {
        if self.sheets.get(id).await?.is_none() {
            return Err(SheetError::SheetNotFound(id));
        }
        self.sheets.delete(id).await?;
        tracing::info!(sheet_id = %id, "Deleted character sheet");
        Ok(())
    }

    /// Compute the derived statistics for a stored sheet.
    ///
    /// Derived values are computed on demand and never persisted.
    pub async fn derived(&self, id: SheetId) -> Result<DerivedStats, SheetError> {
        let sheet = self.get(id).await?;
        let stats = DerivedStats::compute(&sheet);
        tracing::debug!(sheet_id = %id, "Computed derived statistics");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::demo_sheet;
    use crate::infrastructure::ports::MockSheetRepo;

    fn use_cases(repo: MockSheetRepo) -> SheetUseCases {
        SheetUseCases::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let mut repo = MockSheetRepo::new();
        repo.expect_save().times(1).returning(|_| Ok(()));

        let submitted = CharacterSheet::new("Kira");
        let original_id = submitted.id;

        let created = use_cases(repo).create(submitted).await.unwrap();
        assert_ne!(created.id, original_id);
        assert_eq!(created.name, "Kira");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_sheet() {
        let mut repo = MockSheetRepo::new();
        repo.expect_save().times(0);

        let mut submitted = CharacterSheet::default();
        submitted.name = String::new();

        let err = use_cases(repo).create(submitted).await.unwrap_err();
        assert!(matches!(err, SheetError::Domain(_)));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let mut repo = MockSheetRepo::new();
        repo.expect_get().returning(|_| Ok(None));

        let id = SheetId::new();
        let err = use_cases(repo).get(id).await.unwrap_err();
        assert!(matches!(err, SheetError::SheetNotFound(found) if found == id));
    }

    #[tokio::test]
    async fn test_update_pins_path_id() {
        let id = SheetId::new();
        let mut repo = MockSheetRepo::new();
        repo.expect_get()
            .returning(|_| Ok(Some(CharacterSheet::default())));
        repo.expect_save()
            .withf(move |sheet| sheet.id == id)
            .times(1)
            .returning(|_| Ok(()));

        let mut submitted = CharacterSheet::new("Renamed");
        submitted.id = SheetId::new();

        let updated = use_cases(repo).update(id, submitted).await.unwrap();
        assert_eq!(updated.id, id);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut repo = MockSheetRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_save().times(0);

        let err = use_cases(repo)
            .update(SheetId::new(), CharacterSheet::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SheetError::SheetNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockSheetRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_delete().times(0);

        let err = use_cases(repo).delete(SheetId::new()).await.unwrap_err();
        assert!(matches!(err, SheetError::SheetNotFound(_)));
    }

    #[tokio::test]
    async fn test_derived_computes_from_stored_sheet() {
        let sheet = demo_sheet();
        let id = sheet.id;
        let mut repo = MockSheetRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(sheet.clone())));

        let stats = use_cases(repo).derived(id).await.unwrap();
        assert_eq!(stats.max_hit_points, 51);
        assert_eq!(stats.passive_perception, 14);
        assert_eq!(stats.carrying_capacity, 240);
        assert_eq!(stats.spell_save_dc, 0);
    }
}
