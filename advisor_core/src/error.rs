//! Error types for the advisor.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Knowledge data error: {0}")]
    KnowledgeData(String),

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
