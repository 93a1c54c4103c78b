//! Error types for extract ingestion.

use std::path::PathBuf;

use clinic_model::EntityKind;
use thiserror::Error;

/// Errors that can occur while reading an entity extract.
///
/// None of these abort a multi-entity load; the caller logs them and carries
/// on with the next entity.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The extract for an entity does not exist.
    #[error("missing {kind} file: {path}")]
    MissingSource { kind: EntityKind, path: PathBuf },

    /// The extract could not be opened or read.
    #[error("failed to read {kind} file {path}: {source}")]
    FileRead {
        kind: EntityKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// The entity whose extract failed.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::MissingSource { kind, .. } | Self::FileRead { kind, .. } => *kind,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
