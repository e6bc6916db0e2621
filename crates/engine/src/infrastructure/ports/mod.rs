//! Ports - trait boundaries between use cases and infrastructure.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::SheetRepo;

#[cfg(test)]
pub use repos::MockSheetRepo;
