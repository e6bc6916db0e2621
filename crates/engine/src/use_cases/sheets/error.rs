use sheetsmith_domain::{DomainError, SheetId};

use crate::infrastructure::ports::RepoError;

/// Errors from character sheet use cases.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Character sheet not found: {0}")]
    SheetNotFound(SheetId),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
