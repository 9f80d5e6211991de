//! Error types for the rules crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RulesError {
    #[error("invalid {field} reading: {value} ({reason})")]
    InvalidReading {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("unknown crop category: {0}")]
    UnknownCropCategory(String),
}

pub type Result<T> = std::result::Result<T, RulesError>;
