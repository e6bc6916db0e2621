//! Infrastructure - storage adapters behind the port traits.

pub mod memory;
pub mod ports;
