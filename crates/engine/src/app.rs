//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::SheetRepo;
use crate::use_cases::SheetUseCases;

/// Main application state.
///
/// Holds the use cases; passed to HTTP handlers via axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub sheets: SheetUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(sheets: Arc<dyn SheetRepo>) -> Self {
        Self {
            use_cases: UseCases {
                sheets: SheetUseCases::new(sheets),
            },
        }
    }
}
