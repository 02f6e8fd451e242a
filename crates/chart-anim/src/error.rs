// File: crates/chart-anim/src/error.rs
// Summary: Crate error type. Only configuration surfaces are fallible; path geometry always degrades to a fallback.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnimError {
    #[error("failed to read animation config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse animation config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to serialize animation config: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("invalid animation config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AnimError>;
