//! Use cases - application logic between the HTTP layer and the ports.

pub mod sheets;

pub use sheets::{SheetError, SheetUseCases};
