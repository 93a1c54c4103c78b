//! Loading pipeline: every entity extract from one source directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clinic_ingest::{IngestError, SkippedLine, read_records, source_path};
use clinic_model::{
    Appointment, Clinician, EntityKind, Facility, Patient, Prescription, Record, Referral, Staff,
};
use serde::Serialize;
use tracing::{debug, error, info, info_span, warn};

use crate::repository::{Holds, Repository};

/// How loading one entity extract ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    /// Read to the end or to the first blank line.
    Loaded,
    /// The extract does not exist; the collection was left untouched.
    Missing,
    /// The extract exists but could not be opened.
    Unreadable { message: String },
    /// A read error ended the load; earlier records were kept.
    Interrupted { message: String },
}

/// Outcome of loading one entity extract.
#[derive(Debug, Clone, Serialize)]
pub struct EntityLoad {
    pub kind: EntityKind,
    pub path: PathBuf,
    pub loaded: usize,
    pub skipped_lines: Vec<SkippedLine>,
    #[serde(flatten)]
    pub status: LoadStatus,
}

impl EntityLoad {
    pub fn skipped(&self) -> usize {
        self.skipped_lines.len()
    }
}

/// Per-entity outcomes of one [`load_all`] call, in load order.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub source_dir: PathBuf,
    pub entities: Vec<EntityLoad>,
}

impl LoadReport {
    pub fn entity(&self, kind: EntityKind) -> Option<&EntityLoad> {
        self.entities.iter().find(|load| load.kind == kind)
    }

    pub fn total_loaded(&self) -> usize {
        self.entities.iter().map(|load| load.loaded).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.entities.iter().map(EntityLoad::skipped).sum()
    }

    /// Kinds whose extract was absent.
    pub fn missing(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.entities
            .iter()
            .filter(|load| load.status == LoadStatus::Missing)
            .map(|load| load.kind)
    }

    /// True when every extract was present and read to completion.
    pub fn is_complete(&self) -> bool {
        self.entities
            .iter()
            .all(|load| load.status == LoadStatus::Loaded)
    }
}

/// Loads every entity extract in `dir` into `repository`.
///
/// Each entity is loaded on its own: a missing, unreadable or truncated
/// extract only affects that entity's collection. Records are appended to
/// whatever the collections already hold. Never fails; problems are logged
/// and reported per entity.
pub fn load_all(repository: &mut Repository, dir: &Path) -> LoadReport {
    let span = info_span!("load_all", source_dir = %dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    if !dir.is_dir() {
        warn!("source directory not found, extracts will be reported missing");
    }

    let entities = vec![
        load_entity::<Patient>(repository, dir),
        load_entity::<Clinician>(repository, dir),
        load_entity::<Facility>(repository, dir),
        load_entity::<Appointment>(repository, dir),
        load_entity::<Prescription>(repository, dir),
        load_entity::<Referral>(repository, dir),
        load_entity::<Staff>(repository, dir),
    ];

    let report = LoadReport {
        source_dir: dir.to_path_buf(),
        entities,
    };
    info!(
        loaded = report.total_loaded(),
        skipped = report.total_skipped(),
        missing = report.missing().count(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    report
}

fn load_entity<R: Record>(repository: &mut Repository, dir: &Path) -> EntityLoad
where
    Repository: Holds<R>,
{
    let kind = R::KIND;
    let path = source_path(dir, kind);

    let batch = match read_records::<R>(&path) {
        Ok(batch) => batch,
        Err(IngestError::MissingSource { .. }) => {
            warn!(entity = %kind, path = %path.display(), "missing source file");
            return EntityLoad {
                kind,
                path,
                loaded: 0,
                skipped_lines: Vec::new(),
                status: LoadStatus::Missing,
            };
        }
        Err(err) => {
            error!(entity = %kind, error = %err, "error loading source file");
            return EntityLoad {
                kind,
                path,
                loaded: 0,
                skipped_lines: Vec::new(),
                status: LoadStatus::Unreadable {
                    message: err.to_string(),
                },
            };
        }
    };

    let loaded = batch.records.len();
    repository.get_mut::<R>().extend(batch.records);
    let status = match batch.interrupted {
        Some(err) => LoadStatus::Interrupted {
            message: err.to_string(),
        },
        None => LoadStatus::Loaded,
    };
    debug!(
        entity = %kind,
        loaded,
        skipped = batch.skipped.len(),
        "entity loaded"
    );

    EntityLoad {
        kind,
        path,
        loaded,
        skipped_lines: batch.skipped,
        status,
    }
}
