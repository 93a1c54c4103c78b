//! Fixed extract locations inside a source directory.

use std::path::{Path, PathBuf};

use clinic_model::EntityKind;

/// Path of the extract for `kind` inside `dir`.
pub fn source_path(dir: &Path, kind: EntityKind) -> PathBuf {
    dir.join(kind.file_name())
}
