//! Unified error types for Longan.
use thiserror::Error;

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// OOXML package generation error
    #[error("Package error: {0}")]
    Ooxml(#[from] crate::ooxml::error::OoxmlError),

    /// Deck file could not be parsed, or holds an invalid value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Layout geometry places two zones on top of each other or off the canvas
    #[error("Layout error: {0}")]
    Layout(String),

    /// Deck content cannot be turned into a presentation
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
