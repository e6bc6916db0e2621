//! Repository port traits for character sheet storage.

use async_trait::async_trait;
use sheetsmith_domain::{CharacterSheet, SheetId};

use super::error::RepoError;

/// Storage port for character sheet records.
///
/// The record is stored and returned verbatim; derived values are never
/// persisted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetRepo: Send + Sync {
    async fn get(&self, id: SheetId) -> Result<Option<CharacterSheet>, RepoError>;
    async fn list(&self) -> Result<Vec<CharacterSheet>, RepoError>;
    async fn save(&self, sheet: &CharacterSheet) -> Result<(), RepoError>;
    async fn delete(&self, id: SheetId) -> Result<(), RepoError>;
}
