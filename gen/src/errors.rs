//! Error types for the contracts generator.

use thiserror::Error;

/// Errors that can occur while regenerating the re-export files.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to read a generated binding file
    #[error("Failed to read binding file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a re-export file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A rendered re-export file failed validation.
    ///
    /// This indicates a templating bug in the generator, not bad input:
    /// every artifact is parsed as Rust before it is written.
    #[error("Rendered output is invalid: {0}")]
    RenderError(String),
}
