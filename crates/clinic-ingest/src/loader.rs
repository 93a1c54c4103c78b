//! Per-entity record loading from delimited extracts.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use clinic_model::{EntityKind, Record};
use serde::Serialize;

use crate::csv::parse_line;
use crate::error::{IngestError, Result};

/// A data line dropped because it had too few fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the extract (the header is line 1).
    pub line_number: usize,
    /// Number of fields the parser produced.
    pub field_count: usize,
    /// Number of fields the entity requires.
    pub required: usize,
}

/// Records read from one extract, plus what was dropped along the way.
#[derive(Debug)]
pub struct RecordBatch<R> {
    pub kind: EntityKind,
    pub path: PathBuf,
    /// Well-formed records in file order.
    pub records: Vec<R>,
    /// Lines skipped for having too few fields.
    pub skipped: Vec<SkippedLine>,
    /// Read error that ended the load early. Records before it are kept.
    pub interrupted: Option<IngestError>,
}

impl<R> RecordBatch<R> {
    fn new(kind: EntityKind, path: &Path) -> Self {
        Self {
            kind,
            path: path.to_path_buf(),
            records: Vec::new(),
            skipped: Vec::new(),
            interrupted: None,
        }
    }
}

/// Reads every record of type `R` from the extract at `path`.
///
/// The first line is discarded as a header without looking at it. Reading
/// stops at the first blank line or end of file. Lines with fewer fields
/// than the entity requires are skipped and reported in the batch.
///
/// # Errors
///
/// Returns [`IngestError::MissingSource`] when the file does not exist and
/// [`IngestError::FileRead`] when it cannot be opened. Read failures after
/// opening do not error; they end the batch and are stored in
/// [`RecordBatch::interrupted`].
pub fn read_records<R: Record>(path: &Path) -> Result<RecordBatch<R>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::MissingSource {
                kind: R::KIND,
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                kind: R::KIND,
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    Ok(read_records_from(BufReader::new(file), path))
}

/// Reads records of type `R` from an already opened reader.
///
/// `path` is only used for diagnostics.
pub fn read_records_from<R: Record, B: BufRead>(mut reader: B, path: &Path) -> RecordBatch<R> {
    let kind = R::KIND;
    let required = kind.required_columns();
    let mut batch = RecordBatch::new(kind, path);
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(e) => {
                tracing::error!(
                    entity = %kind,
                    path = %path.display(),
                    line = line_number + 1,
                    error = %e,
                    "read failed, keeping records loaded so far"
                );
                batch.interrupted = Some(IngestError::FileRead {
                    kind,
                    path: path.to_path_buf(),
                    source: e,
                });
                break;
            }
        }
        let line = decode_line(&buf);

        // Header
        if line_number == 1 {
            continue;
        }
        if line.trim().is_empty() {
            break;
        }

        let fields = parse_line(&line);
        match R::from_fields(&fields) {
            Some(record) => batch.records.push(record),
            None => {
                tracing::warn!(
                    entity = %kind,
                    path = %path.display(),
                    line = line_number,
                    fields = fields.len(),
                    required,
                    "skipping malformed line"
                );
                batch.skipped.push(SkippedLine {
                    line_number,
                    field_count: fields.len(),
                    required,
                });
            }
        }
    }

    batch
}

/// Decodes one raw line, replacing invalid UTF-8 and dropping the line ending.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_model::{Facility, Patient};
    use std::io::{Cursor, Read};

    const PATIENT_HEADER: &str = "patient_id,first_name,last_name,date_of_birth,nhs_number,gender,phone_number,email,address,postcode,emergency_contact_name,emergency_contact_phone,registration_date,gp_surgery_id";
    const PATIENT_ROW: &str =
        "P1,Jane,Doe,1980-01-01,NHS123,F,0123,j@x.com,1 Road,PC1,Contact,0199,2020-01-01,GP1";

    fn batch_of(content: &str) -> RecordBatch<Patient> {
        read_records_from(Cursor::new(content.to_string()), Path::new("patients.csv"))
    }

    #[test]
    fn test_header_is_discarded_unchecked() {
        let batch = batch_of(&format!("not,a,real,header\n{PATIENT_ROW}\n"));
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].patient_id, "P1");
    }

    #[test]
    fn test_short_line_is_skipped_and_reported() {
        let batch = batch_of(&format!("{PATIENT_HEADER}\nP0,Too,Short\n{PATIENT_ROW}\n"));
        assert_eq!(batch.records.len(), 1);
        assert_eq!(
            batch.skipped,
            vec![SkippedLine {
                line_number: 2,
                field_count: 3,
                required: 14,
            }]
        );
    }

    #[test]
    fn test_blank_line_ends_the_load() {
        let batch = batch_of(&format!(
            "{PATIENT_HEADER}\n{PATIENT_ROW}\n   \n{PATIENT_ROW}\n"
        ));
        assert_eq!(batch.records.len(), 1);
        assert!(batch.interrupted.is_none());
    }

    #[test]
    fn test_header_only_and_empty_inputs() {
        assert!(batch_of(PATIENT_HEADER).records.is_empty());
        assert!(batch_of("").records.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let content =
            "h\r\nF1,Riverside,GP Surgery,1 Road,PC1,0100,f@x.com,9-5,Ann,20,\"General, Minor Surgery\"\r\n"
                .to_string();
        let batch: RecordBatch<Facility> =
            read_records_from(Cursor::new(content), Path::new("facilities.csv"));
        assert_eq!(batch.records.len(), 1);
        assert_eq!(
            batch.records[0].specialities_offered,
            "General, Minor Surgery"
        );
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device unplugged"))
        }
    }

    #[test]
    fn test_read_failure_keeps_partial_records() {
        let good = format!("{PATIENT_HEADER}\n{PATIENT_ROW}\n");
        let reader = BufReader::new(Cursor::new(good).chain(FailingReader));
        let batch: RecordBatch<Patient> = read_records_from(reader, Path::new("patients.csv"));

        assert_eq!(batch.records.len(), 1);
        assert!(matches!(
            batch.interrupted,
            Some(IngestError::FileRead { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let mut content = format!("{PATIENT_HEADER}\n{PATIENT_ROW}\n").into_bytes();
        content.extend_from_slice(b"P2,Zo\xEB,Doe,1980-01-01,NHS124,F,0123,z@x.com,1 Road,PC1,Contact,0199,2020-01-01,GP1\r\n");
        content.extend_from_slice(PATIENT_ROW.replace("P1", "P3").as_bytes());
        let batch: RecordBatch<Patient> =
            read_records_from(Cursor::new(content), Path::new("patients.csv"));

        let ids: Vec<_> = batch.records.iter().map(|p| p.patient_id.as_str()).collect();
        assert_eq!(ids, ["P1", "P2", "P3"]);
        assert_eq!(batch.records[1].first_name, "Zo\u{FFFD}");
        assert_eq!(batch.records[1].gp_surgery_id, "GP1");
        assert!(batch.interrupted.is_none());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_records::<Patient>(&dir.path().join("patients.csv"));
        assert!(matches!(
            result,
            Err(IngestError::MissingSource {
                kind: EntityKind::Patient,
                ..
            })
        ));
    }
}
