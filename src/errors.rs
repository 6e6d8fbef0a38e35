// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::plan::PlanError;

#[derive(Error, Debug)]
pub enum ProdplanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

pub type Result<T> = std::result::Result<T, ProdplanError>;
