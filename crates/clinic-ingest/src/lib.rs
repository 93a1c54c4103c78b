//! Clinical extract ingestion.
//!
//! This crate turns flat comma-delimited extracts into typed entity records.
//!
//! # Features
//!
//! - **Line Parsing**: Split one line into trimmed fields, honouring quoted segments
//! - **Record Loading**: Read one extract per entity, skipping the header and short lines
//! - **Source Layout**: Resolve the fixed extract file name for each entity
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use clinic_ingest::{read_records, source_path};
//! use clinic_model::{EntityKind, Patient};
//!
//! let path = source_path(Path::new("data"), EntityKind::Patient);
//! let batch = read_records::<Patient>(&path)?;
//! println!("{} patients, {} skipped", batch.records.len(), batch.skipped.len());
//! ```

mod csv;
mod error;
mod loader;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Line Parsing ===
pub use csv::parse_line;

// === Record Loading ===
pub use loader::{RecordBatch, SkippedLine, read_records, read_records_from};

// === Source Layout ===
pub use source::source_path;
