//! The canonical typed-record contract shared by every entity.

use std::fmt::Debug;

use crate::kind::EntityKind;

/// A flat entity record with a string key and a fixed positional layout.
pub trait Record: Clone + Debug {
    /// Which entity this record type represents.
    const KIND: EntityKind;

    /// The identifying key used for find and delete matching.
    fn key(&self) -> &str;

    /// Map positional fields onto the record.
    ///
    /// Returns `None` when fewer than [`EntityKind::required_columns`] fields
    /// are present. Fields past the required count are ignored.
    fn from_fields(fields: &[String]) -> Option<Self>;
}

/// Returns the first `required` fields, or `None` if the line is too short.
pub(crate) fn take_columns(kind: EntityKind, fields: &[String]) -> Option<&[String]> {
    fields.get(..kind.required_columns())
}
