//! # Crop Rules
//!
//! The field rulebook: crop threshold records, environmental readings, and
//! the deterministic risk scorer. This crate holds no chat or AI logic.

pub mod catalog;
pub mod error;
pub mod readings;
pub mod risk;

pub use catalog::*;
pub use error::RulesError;
pub use readings::*;
pub use risk::*;
